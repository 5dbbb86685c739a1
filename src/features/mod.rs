pub mod area;
pub mod community;
pub mod demo;
pub mod mcp;
pub mod poi;
pub mod property;
pub mod school;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::upstream::{AttomClient, UpstreamClient};
use crate::features::area::AreaService;
use crate::features::community::CommunityService;
use crate::features::demo::DemoUpstream;
use crate::features::poi::PoiService;
use crate::features::property::PropertyService;
use crate::features::school::SchoolService;

pub struct Services {
    pub property: PropertyService,
    pub area: AreaService,
    pub poi: PoiService,
    pub community: CommunityService,
    pub school: SchoolService,
}

impl Services {
    pub fn new(upstream: Arc<dyn UpstreamClient>, config: &AppConfig) -> Self {
        Self {
            property: PropertyService::new(
                upstream.clone(),
                config.upstream.prop_api_prefix.clone(),
            ),
            area: AreaService::new(upstream.clone()),
            poi: PoiService::new(upstream.clone()),
            community: CommunityService::new(upstream.clone()),
            school: SchoolService::new(upstream),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let upstream = if config.demo_mode {
            tracing::info!("demo mode enabled, serving fixture data");
            DemoUpstream::shared(&config.upstream.prop_api_prefix)
        } else {
            AttomClient::shared(config)?
        };
        Ok(Self::new(upstream, config))
    }
}
