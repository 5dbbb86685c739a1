use std::collections::HashMap;
use std::env;
use std::path::Path;

use axum::http::HeaderValue;

use crate::config::dto::{AppConfig, AuthConfig, UpstreamConfig};
use crate::core::error::AppError;

const DEFAULT_API_KEY: &str = "test_api_key";

pub fn load_config() -> Result<AppConfig, AppError> {
    if let Ok(path) = env::var("ATTOM_ENV_FILE") {
        return load_config_from_file(Path::new(&path));
    }

    dotenvy::dotenv().ok();
    load_config_with(|key| env::var(key).ok())
}

pub fn load_config_from_file(path: &Path) -> Result<AppConfig, AppError> {
    let iter = dotenvy::from_path_iter(path).map_err(|err| {
        AppError::configuration(format!("failed to read {}: {err}", path.display()))
    })?;

    let mut file_values = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|err| {
            AppError::configuration(format!("invalid entry in {}: {err}", path.display()))
        })?;
        file_values.insert(key, value);
    }

    load_config_with(|key| file_values.get(key).cloned().or_else(|| env::var(key).ok()))
}

pub fn load_config_with<F>(lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

    let port = text("PORT", "8000")
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid PORT: {err}")))?;

    let api_keys = parse_list(&text("API_KEYS", DEFAULT_API_KEY));
    if api_keys.is_empty() {
        return Err(AppError::configuration(
            "API_KEYS must contain at least one key",
        ));
    }

    let header = text("API_KEY_HEADER", "apikey").trim().to_ascii_lowercase();
    if header.is_empty() {
        return Err(AppError::configuration("API_KEY_HEADER must not be empty"));
    }

    let timeout_secs = text("UPSTREAM_TIMEOUT_SECS", "10")
        .parse::<u64>()
        .map_err(|err| AppError::configuration(format!("invalid UPSTREAM_TIMEOUT_SECS: {err}")))?;
    if timeout_secs == 0 {
        return Err(AppError::configuration(
            "UPSTREAM_TIMEOUT_SECS must be greater than zero",
        ));
    }

    let upstream_key = lookup("ATTOM_API_KEY").filter(|value| !value.trim().is_empty());
    if let Some(key) = upstream_key.as_deref() {
        HeaderValue::from_str(key).map_err(|_| {
            AppError::configuration("ATTOM_API_KEY is not a valid HTTP header value")
        })?;
    }
    let demo_mode = parse_bool(lookup("DEMO_MODE"), upstream_key.is_none());
    if !demo_mode && upstream_key.is_none() {
        return Err(AppError::configuration(
            "ATTOM_API_KEY is required when DEMO_MODE is off",
        ));
    }

    Ok(AppConfig {
        api_title: text("API_TITLE", "ATTOM API"),
        api_description: text("API_DESCRIPTION", "MCP Server implementation of ATTOM API"),
        api_version: text("API_VERSION", "1.0.0"),
        host: text("HOST", "0.0.0.0"),
        port,
        log_level: text("LOG_LEVEL", "info").to_lowercase(),
        auth: AuthConfig { header, api_keys },
        upstream: UpstreamConfig {
            host_url: text("ATTOM_HOST_URL", "https://api.gateway.attomdata.com"),
            prop_api_prefix: text("PROP_API_PREFIX", "/propertyapi/v1.0.0"),
            api_key: upstream_key,
            timeout_secs,
            disable_proxy: parse_bool(lookup("DISABLE_PROXY"), false),
        },
        demo_mode,
    })
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        load_config_with(|key| values.get(key).cloned())
    }

    #[test]
    fn defaults_match_the_demo_deployment() {
        let config = from_pairs(&[]).expect("defaults load");

        assert_eq!(config.port, 8000);
        assert_eq!(config.auth.header, "apikey");
        assert_eq!(config.auth.api_keys, vec!["test_api_key"]);
        assert_eq!(config.upstream.prop_api_prefix, "/propertyapi/v1.0.0");
        assert_eq!(config.upstream.timeout_secs, 10);
        assert!(config.demo_mode);
    }

    #[test]
    fn api_keys_are_comma_separated() {
        let config = from_pairs(&[("API_KEYS", "alpha, beta,,gamma ")]).expect("loads");
        assert_eq!(config.auth.api_keys, vec!["alpha", "beta", "gamma"]);
        assert!(config.auth.allows("beta"));
        assert!(!config.auth.allows("delta"));
    }

    #[test]
    fn upstream_key_switches_off_demo_mode() {
        let config = from_pairs(&[("ATTOM_API_KEY", "secret")]).expect("loads");
        assert!(!config.demo_mode);

        let config = from_pairs(&[("ATTOM_API_KEY", "secret"), ("DEMO_MODE", "true")])
            .expect("loads");
        assert!(config.demo_mode);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            from_pairs(&[("PORT", "eighty")]),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            from_pairs(&[("API_KEYS", " , ")]),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            from_pairs(&[("DEMO_MODE", "false")]),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            from_pairs(&[("UPSTREAM_TIMEOUT_SECS", "0")]),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            from_pairs(&[("ATTOM_API_KEY", "bad\nkey")]),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn env_file_values_are_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "PORT=9100").unwrap();
        writeln!(file, "API_KEYS=file_key").unwrap();
        writeln!(file, "API_TITLE=\"ATTOM Gateway\"").unwrap();

        let config = load_config_from_file(file.path()).expect("loads from file");
        assert_eq!(config.port, 9100);
        assert_eq!(config.auth.api_keys, vec!["file_key"]);
        assert_eq!(config.api_title, "ATTOM Gateway");
    }
}
