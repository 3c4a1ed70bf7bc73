use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, error, info};
use serde::Serialize;
use std::{io, path::PathBuf, string::FromUtf8Error};
use thiserror::Error;

/// Everything that can stop an upload from becoming a file.
///
/// Each variant aborts only the request it belongs to.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("missing content-length header")]
    MissingLength,

    #[error("invalid content-length header: {0:?}")]
    InvalidLength(String),

    #[error("content-length {length} exceeds the {limit} byte limit")]
    PayloadTooLarge { length: u64, limit: usize },

    #[error("failed to read request body: {0}")]
    BodyRead(String),

    #[error("request body is not valid UTF-8")]
    Decode(#[from] FromUtf8Error),

    #[error("invalid upload name: {0:?}")]
    InvalidName(String),

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no route for {0}")]
    UnknownRoute(String),

    #[error("method {0} not allowed")]
    MethodNotAllowed(Method),
}

#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    error: String,
}

impl UploadError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UploadError::MissingLength => StatusCode::LENGTH_REQUIRED,
            UploadError::InvalidLength(_)
            | UploadError::BodyRead(_)
            | UploadError::Decode(_)
            | UploadError::InvalidName(_) => StatusCode::BAD_REQUEST,
            UploadError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::Write { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            UploadError::UnknownRoute(_) => StatusCode::NOT_FOUND,
            UploadError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Message sent to the client; storage paths stay server-side.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Write { .. } => "failed to store upload".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match &self {
            UploadError::Write { source, .. } => error!("{}: {}", self, source),
            UploadError::UnknownRoute(_) | UploadError::MethodNotAllowed(_) => {
                debug!("Rejected request: {}", self)
            }
            _ => info!("Rejected upload: {}", self),
        }

        let status = self.status_code();
        let body = ErrorBody {
            status: status.as_u16(),
            error: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}
