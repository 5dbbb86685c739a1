use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api_title: String,
    pub api_description: String,
    pub api_version: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub auth: AuthConfig,
    pub upstream: UpstreamConfig,
    pub demo_mode: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub header: String,
    pub api_keys: Vec<String>,
}

impl AuthConfig {
    pub fn allows(&self, key: &str) -> bool {
        self.api_keys.iter().any(|candidate| candidate == key)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub host_url: String,
    pub prop_api_prefix: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub disable_proxy: bool,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
