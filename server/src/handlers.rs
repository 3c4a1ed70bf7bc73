use axum::{
    body::{to_bytes, Body},
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
};
use log::info;

use crate::{error::UploadError, naming::UploadTarget, state::AppState};

/// Literal success body, kept byte-exact for existing clients.
pub const STORED_BODY: &str = r#"{"status": 200}"#;
pub const STORED_CONTENT_TYPE: &str = "text/json";

pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, UploadError> {
    let content = read_payload(&headers, body, state.max_body_bytes).await?;
    store(&state, UploadTarget::random(), &content).await
}

pub async fn upload_named(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, UploadError> {
    let Path(name) = name.map_err(|e| UploadError::InvalidName(e.body_text()))?;
    let content = read_payload(&headers, body, state.max_body_bytes).await?;
    let target = UploadTarget::named_now(&name)?;
    store(&state, target, &content).await
}

pub async fn unknown_route(uri: Uri) -> UploadError {
    UploadError::UnknownRoute(uri.path().to_string())
}

pub async fn method_not_allowed(method: Method) -> UploadError {
    UploadError::MethodNotAllowed(method)
}

async fn store(state: &AppState, target: UploadTarget, content: &str) -> Result<Response, UploadError> {
    let path = state.store.write(&target, content).await?;
    info!(
        "Stored upload {} ({} bytes)",
        path.file_name().unwrap_or_default().to_string_lossy(),
        content.len()
    );
    Ok(([(header::CONTENT_TYPE, STORED_CONTENT_TYPE)], STORED_BODY).into_response())
}

/// Reads exactly `content-length` bytes and decodes them as UTF-8.
async fn read_payload(headers: &HeaderMap, body: Body, limit: usize) -> Result<String, UploadError> {
    let length = content_length(headers)?;
    if length > limit as u64 {
        return Err(UploadError::PayloadTooLarge { length, limit });
    }

    let bytes = to_bytes(body, limit)
        .await
        .map_err(|e| UploadError::BodyRead(e.to_string()))?;

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub(crate) fn content_length(headers: &HeaderMap) -> Result<u64, UploadError> {
    let value = headers
        .get(header::CONTENT_LENGTH)
        .ok_or(UploadError::MissingLength)?;
    let raw = value
        .to_str()
        .map_err(|_| UploadError::InvalidLength(String::from_utf8_lossy(value.as_bytes()).into_owned()))?;
    raw.trim()
        .parse::<u64>()
        .map_err(|_| UploadError::InvalidLength(raw.to_string()))
}
