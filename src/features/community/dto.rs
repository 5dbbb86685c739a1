use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::identifier::{IdentifierForm, resolve_first};
use crate::core::upstream::QueryParams;

pub const GEOID_REQUIRED: &str = "geoIdv4 is required.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommunityParams {
    #[serde(alias = "geoIdv4", alias = "geoIdV4")]
    pub geoid_v4: Option<String>,
}

impl CommunityParams {
    pub fn community_query(&self) -> Result<QueryParams, AppError> {
        resolve_first(
            [IdentifierForm::single("geoIdv4", self.geoid_v4.clone())],
            GEOID_REQUIRED,
        )
    }
}
