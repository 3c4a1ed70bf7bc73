//! HTTP collector that stores each uploaded log body as a file.
//!
//! Two routes are served:
//!
//! - `POST /upload` stores the body as `<uuid>.upload`
//! - `POST /uploadName/{name}` stores it as `<name>.<YYYY-MM-DD.HH:MM:SS>.upload`
//!
//! Both answer `200` with the literal body `{"status": 200}`.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod naming;
pub mod server;
pub mod state;
pub mod storage;

pub use config::ServerConfig;
pub use error::UploadError;
pub use naming::UploadTarget;
pub use server::{RunningServer, UploadServer};
pub use storage::UploadStore;
