use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PushConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

impl PushConfig {
    pub fn new(server: String) -> Self {
        Self {
            server: Some(server),
            name: None,
            timeout: Some(Duration::from_secs(30)),
        }
    }

    pub fn merge_cli(
        mut self,
        cli_server: Option<String>,
        cli_name: Option<String>,
        cli_timeout: Option<u64>,
    ) -> Self {
        self.server = cli_server.or(self.server);
        self.name = cli_name.or(self.name);
        self.timeout = cli_timeout.map(Duration::from_secs).or(self.timeout);
        self
    }
}
