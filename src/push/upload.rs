use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::{fs, path::Path};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

#[derive(Deserialize, Debug)]
struct StatusResponse {
    status: u16,
}

/// Loads the text to upload. The collector stores text only, so binary
/// files are refused here instead of failing server-side.
pub fn read_payload(path: Option<&Path>, message: Option<&str>) -> Result<String> {
    let payload = match (path, message) {
        (_, Some(text)) => text.trim().to_string(),
        (Some(path), None) => {
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            String::from_utf8(bytes)
                .with_context(|| format!("{} is not UTF-8 text", path.display()))?
        }
        (None, None) => anyhow::bail!("Please provide a file path or -m <message>"),
    };

    if payload.is_empty() {
        anyhow::bail!("Nothing to upload: payload is empty");
    }
    Ok(payload)
}

pub fn upload_url(server: &str, name: Option<&str>) -> String {
    let server = normalize_server(server);
    match name {
        Some(name) => format!("{}/uploadName/{}", server, urlencoding::encode(name)),
        None => format!("{}/upload", server),
    }
}

/// Posts `payload` and returns the URL it was accepted at.
pub fn send_payload(
    client: &reqwest::blocking::Client,
    server: &str,
    name: Option<&str>,
    payload: String,
) -> Result<String> {
    let url = upload_url(server, name);
    let size = payload.len();

    let response = client
        .post(&url)
        .body(payload)
        .send()
        .with_context(|| format!("Failed to send upload to {}", url))?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().unwrap_or_default();
        anyhow::bail!("Upload failed: {} {}", status, detail.trim());
    }

    let body: StatusResponse = response
        .json()
        .context("Failed to parse upload response")?;
    if body.status != 200 {
        anyhow::bail!("Collector reported status {}", body.status);
    }

    info!("Upload success: {} bytes to {}", size, url);
    Ok(url)
}

fn normalize_server(server: &str) -> &str {
    server.trim_end_matches('/')
}
