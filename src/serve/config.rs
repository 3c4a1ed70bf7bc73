use logdrop_server::ServerConfig;
use serde::{Deserialize, Serialize};
use std::{net::IpAddr, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<IpAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_body_bytes: Option<usize>,
}

impl ServeConfig {
    pub fn with_defaults() -> Self {
        let defaults = ServerConfig::default();
        Self {
            bind: Some(defaults.bind),
            port: Some(defaults.port),
            dir: Some(defaults.storage_dir),
            max_body_bytes: Some(defaults.max_body_bytes),
        }
    }

    /// Command line values win over the config file.
    pub fn merge_cli(
        mut self,
        cli_bind: Option<IpAddr>,
        cli_port: Option<u16>,
        cli_dir: Option<PathBuf>,
        cli_max_body_bytes: Option<usize>,
    ) -> Self {
        self.bind = cli_bind.or(self.bind);
        self.port = cli_port.or(self.port);
        self.dir = cli_dir.or(self.dir);
        self.max_body_bytes = cli_max_body_bytes.or(self.max_body_bytes);
        self
    }

    pub fn into_server_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind: self.bind.unwrap_or(defaults.bind),
            port: self.port.unwrap_or(defaults.port),
            storage_dir: self.dir.unwrap_or(defaults.storage_dir),
            max_body_bytes: self.max_body_bytes.unwrap_or(defaults.max_body_bytes),
        }
    }
}
