use chrono::{DateTime, Local};
use rand::Rng;
use uuid::Uuid;

use crate::error::UploadError;

pub const UPLOAD_EXTENSION: &str = "upload";
/// Second resolution; two named uploads in the same second share a file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d.%H:%M:%S";

/// Where an upload lands, before it is turned into a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadTarget {
    Random(Uuid),
    Named { name: String, at: DateTime<Local> },
}

impl UploadTarget {
    /// A fresh 128-bit random identifier.
    pub fn random() -> Self {
        let bytes: [u8; 16] = rand::rng().random();
        UploadTarget::Random(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    pub fn named(name: &str, at: DateTime<Local>) -> Result<Self, UploadError> {
        Ok(UploadTarget::Named {
            name: validate_name(name)?,
            at,
        })
    }

    pub fn named_now(name: &str) -> Result<Self, UploadError> {
        Self::named(name, Local::now())
    }

    pub fn file_name(&self) -> String {
        match self {
            UploadTarget::Random(id) => format!("{}.{}", id.hyphenated(), UPLOAD_EXTENSION),
            UploadTarget::Named { name, at } => {
                format!("{}.{}.{}", name, at.format(TIMESTAMP_FORMAT), UPLOAD_EXTENSION)
            }
        }
    }
}

/// The name must stay a single file inside the storage directory.
fn validate_name(name: &str) -> Result<String, UploadError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(UploadError::InvalidName(name.to_string()));
    }
    Ok(name.to_string())
}
