use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::features::Services;
use crate::features::mcp::McpService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
    pub mcp: Arc<McpService>,
}

impl AppState {
    pub fn new(config: AppConfig, services: Services) -> Result<Self, AppError> {
        let services = Arc::new(services);
        let mcp = Arc::new(McpService::new(services.clone())?);

        Ok(Self {
            config: Arc::new(config),
            services,
            mcp,
        })
    }

    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let services = Services::from_config(&config)?;
        Self::new(config, services)
    }
}
