use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};

use crate::core::error::AppError;

const UPSTREAM_KEY_HEADER: &str = "apikey";

pub fn build_http_client(
    api_key: &str,
    timeout: Duration,
    disable_proxy: bool,
) -> Result<Client, AppError> {
    let key = HeaderValue::from_str(api_key).map_err(|_| {
        AppError::configuration("ATTOM_API_KEY is not a valid HTTP header value")
    })?;
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static(UPSTREAM_KEY_HEADER), key);

    let mut builder = Client::builder()
        .user_agent(concat!("attom-mcp-server/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .timeout(timeout);

    if disable_proxy {
        builder = builder.no_proxy();
    }

    builder
        .build()
        .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_keys_that_cannot_be_sent() {
        let error = build_http_client("bad\nkey", Duration::from_secs(1), true)
            .expect_err("newline is not a header value");
        assert_eq!(error.status_code(), 500);

        assert!(build_http_client("secret", Duration::from_secs(1), true).is_ok());
    }
}
