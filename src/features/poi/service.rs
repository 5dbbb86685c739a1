use std::sync::Arc;

use crate::core::envelope::Envelope;
use crate::core::upstream::{UpstreamClient, forward};
use crate::features::poi::dto::{PoiCategoryParams, PoiParams};

pub const POI_SEARCH_PATH: &str = "v4/neighborhood/poi";
pub const POI_CATEGORY_PATH: &str = "v4/neighborhood/poi/categorylookup";

pub struct PoiService {
    upstream: Arc<dyn UpstreamClient>,
}

impl PoiService {
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { upstream }
    }

    pub async fn search(&self, params: PoiParams) -> Envelope {
        forward(
            self.upstream.as_ref(),
            "poi_search",
            POI_SEARCH_PATH,
            params.search_query(),
        )
        .await
    }

    pub async fn category_lookup(&self, params: PoiCategoryParams) -> Envelope {
        forward(
            self.upstream.as_ref(),
            "poi_category_lookup",
            POI_CATEGORY_PATH,
            params.lookup_query(),
        )
        .await
    }
}
