use std::sync::Arc;

use crate::core::envelope::Envelope;
use crate::core::upstream::{UpstreamClient, forward, join_path};
use crate::features::property::catalog::{PROPERTY_SEARCH_PATH, PropertyEndpoint};
use crate::features::property::dto::{PropertyParams, PropertySearchParams};

pub struct PropertyService {
    upstream: Arc<dyn UpstreamClient>,
    prefix: String,
}

impl PropertyService {
    pub fn new(upstream: Arc<dyn UpstreamClient>, prefix: impl Into<String>) -> Self {
        Self {
            upstream,
            prefix: prefix.into(),
        }
    }

    pub async fn lookup(&self, endpoint: &PropertyEndpoint, params: PropertyParams) -> Envelope {
        forward(
            self.upstream.as_ref(),
            endpoint.tool,
            &join_path(&self.prefix, endpoint.path),
            params.resolve(),
        )
        .await
    }

    pub async fn search(&self, tool: &str, params: PropertySearchParams) -> Envelope {
        forward(
            self.upstream.as_ref(),
            tool,
            &join_path(&self.prefix, PROPERTY_SEARCH_PATH),
            params.search_query(),
        )
        .await
    }
}
