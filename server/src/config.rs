use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    str::FromStr,
};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024 * 1024;

/// Settings for one [`UploadServer`](crate::UploadServer).
///
/// The defaults reproduce the classic collector: every interface, port 8080,
/// uploads written to the process working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Directory that receives the `.upload` files
    pub storage_dir: PathBuf,
    /// Largest accepted `content-length`, in bytes
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            storage_dir: PathBuf::from("."),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn new(bind: IpAddr, port: u16, storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            bind,
            port,
            storage_dir: storage_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Defaults overlaid with `LOGDROP_BIND`, `PORT`, `LOGDROP_STORAGE_DIR`
    /// and `LOGDROP_MAX_BODY_BYTES`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(bind) = parse_var(&lookup, "LOGDROP_BIND") {
            config.bind = bind;
        }
        if let Some(port) = parse_var(&lookup, "PORT") {
            config.port = port;
        }
        if let Some(dir) = lookup("LOGDROP_STORAGE_DIR").filter(|v| !v.trim().is_empty()) {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Some(max) = parse_var(&lookup, "LOGDROP_MAX_BODY_BYTES") {
            config.max_body_bytes = max;
        }

        config
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value for {}: {:?}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_match_classic_collector() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.storage_dir, PathBuf::from("."));
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn env_overrides_are_applied() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("LOGDROP_BIND", "127.0.0.1"),
            ("PORT", "9090"),
            ("LOGDROP_STORAGE_DIR", "/var/log/drops"),
            ("LOGDROP_MAX_BODY_BYTES", "1024"),
        ]));
        assert_eq!(config.socket_addr(), "127.0.0.1:9090".parse().unwrap());
        assert_eq!(config.storage_dir, PathBuf::from("/var/log/drops"));
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn invalid_env_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "eighty"),
            ("LOGDROP_BIND", "not-an-ip"),
            ("LOGDROP_STORAGE_DIR", "  "),
        ]));
        assert_eq!(config, ServerConfig::default());
    }
}
