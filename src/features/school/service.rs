use std::sync::Arc;

use crate::core::envelope::Envelope;
use crate::core::upstream::{UpstreamClient, forward};
use crate::features::school::dto::SchoolParams;

pub const SCHOOL_PROFILE_PATH: &str = "v4/school/profile";
pub const SCHOOL_DISTRICT_PATH: &str = "v4/school/district";
pub const SCHOOL_SEARCH_PATH: &str = "v4/school/search";

pub struct SchoolService {
    upstream: Arc<dyn UpstreamClient>,
}

impl SchoolService {
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { upstream }
    }

    pub async fn profile(&self, params: SchoolParams) -> Envelope {
        forward(
            self.upstream.as_ref(),
            "school_profile",
            SCHOOL_PROFILE_PATH,
            params.geoid_query(),
        )
        .await
    }

    pub async fn district(&self, params: SchoolParams) -> Envelope {
        forward(
            self.upstream.as_ref(),
            "school_district",
            SCHOOL_DISTRICT_PATH,
            params.geoid_query(),
        )
        .await
    }

    pub async fn search(&self, params: SchoolParams) -> Envelope {
        forward(
            self.upstream.as_ref(),
            "school_search",
            SCHOOL_SEARCH_PATH,
            params.search_query(),
        )
        .await
    }
}
