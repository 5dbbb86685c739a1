use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::AppConfig;
use crate::core::envelope::Envelope;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Integer(u64),
    Float(f64),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Integer(value) => u32::try_from(*value).ok(),
            Self::Text(value) => value.trim().parse().ok(),
            Self::Float(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(value) if value.trim().is_empty())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(u64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

pub type QueryParams = BTreeMap<String, ParamValue>;

pub fn insert_opt<V>(query: &mut QueryParams, name: &str, value: Option<V>)
where
    V: Into<ParamValue>,
{
    if let Some(value) = value {
        let value = value.into();
        if !value.is_blank() {
            query.insert(name.to_string(), value);
        }
    }
}

pub fn insert_radius(query: &mut QueryParams, radius: Option<f64>) -> Result<(), AppError> {
    if let Some(radius) = radius {
        if radius.is_nan() || radius <= 0.0 {
            return Err(AppError::invalid_parameter(format!(
                "radius must be greater than 0, got {radius}"
            )));
        }
        query.insert("radius".to_string(), ParamValue::Float(radius));
    }
    Ok(())
}

#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn get(&self, path: &str, query: &QueryParams) -> Result<Value, AppError>;
}

pub fn join_path(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        path.to_string()
    } else {
        format!("{prefix}/{path}")
    }
}

pub async fn dispatch(
    upstream: &dyn UpstreamClient,
    tool: &str,
    path: &str,
    query: QueryParams,
) -> Envelope {
    tracing::info!(tool, path, "fetching from upstream");
    match upstream.get(path, &query).await {
        Ok(data) => Envelope::success(data),
        Err(err) => {
            tracing::error!(tool, path, error = %err, "upstream call failed");
            Envelope::from_error(&err)
        }
    }
}

pub async fn forward(
    upstream: &dyn UpstreamClient,
    tool: &str,
    path: &str,
    query: Result<QueryParams, AppError>,
) -> Envelope {
    match query {
        Ok(query) => dispatch(upstream, tool, path, query).await,
        Err(err) => {
            tracing::warn!(tool, error = %err, "rejected request");
            Envelope::from_error(&err)
        }
    }
}

pub struct AttomClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl AttomClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let api_key = config.upstream.api_key.as_deref().ok_or_else(|| {
            AppError::configuration("ATTOM_API_KEY is required when DEMO_MODE is off")
        })?;
        let http_client = build_http_client(
            api_key,
            config.upstream.timeout(),
            config.upstream.disable_proxy,
        )?;

        Ok(Self {
            base_url: config.upstream.host_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn shared(config: &AppConfig) -> Result<Arc<dyn UpstreamClient>, AppError> {
        Ok(Arc::new(Self::new(config)?))
    }
}

#[async_trait]
impl UpstreamClient for AttomClient {
    async fn get(&self, path: &str, query: &QueryParams) -> Result<Value, AppError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|err| AppError::upstream(err.to_string()))?
            .error_for_status()
            .map_err(|err| AppError::upstream(err.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|err| AppError::upstream(format!("failed to decode upstream response: {err}")))
    }
}
