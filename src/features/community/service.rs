use std::sync::Arc;

use crate::core::envelope::Envelope;
use crate::core::upstream::{UpstreamClient, forward};
use crate::features::community::dto::CommunityParams;

pub const COMMUNITY_PATH: &str = "v4.0.0/neighborhood/community";

pub struct CommunityService {
    upstream: Arc<dyn UpstreamClient>,
}

impl CommunityService {
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { upstream }
    }

    pub async fn neighborhood(&self, params: CommunityParams) -> Envelope {
        forward(
            self.upstream.as_ref(),
            "neighborhood_community",
            COMMUNITY_PATH,
            params.community_query(),
        )
        .await
    }
}
