//! `logdrop push`: upload a log file or message to a collector.

pub mod config;
mod upload;

use anyhow::Result;
use std::path::PathBuf;

pub use config::PushConfig;
pub use upload::{read_payload, send_payload, upload_url, DEFAULT_SERVER_URL};

pub struct PushArgs {
    pub path: Option<PathBuf>,
    pub message: Option<String>,
    pub name: Option<String>,
    pub server: Option<String>,
    pub timeout: Option<u64>,
}

pub fn run_with_config(args: PushArgs, config: Option<PushConfig>) -> Result<()> {
    let config = config
        .unwrap_or_default()
        .merge_cli(args.server, args.name, args.timeout);

    let server = config.server.as_deref().unwrap_or(DEFAULT_SERVER_URL);
    let payload = read_payload(args.path.as_deref(), args.message.as_deref())?;

    let mut builder = reqwest::blocking::Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    let url = send_payload(&client, server, config.name.as_deref(), payload)?;
    println!("{}", url);
    Ok(())
}
