use std::sync::Arc;

use crate::core::envelope::Envelope;
use crate::core::error::AppError;
use crate::core::upstream::{QueryParams, UpstreamClient, forward};
use crate::features::area::dto::AreaParams;

pub const BOUNDARY_PATH: &str = "areaapi/area/boundary/detail";
pub const HIERARCHY_PATH: &str = "areaapi/area/hierarchy/lookup";
pub const STATE_PATH: &str = "areaapi/area/state/lookup";
pub const COUNTY_PATH: &str = "areaapi/area/county/lookup";
pub const CBSA_PATH: &str = "areaapi/area/cbsa/lookup";
pub const GEOID_PATH: &str = "areaapi/area/geoid/lookup";
pub const LEGACY_GEOID_PATH: &str = "areaapi/area/geoId/legacyLookup";
pub const LOCATION_PATH: &str = "v4/location/lookup";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaLookup {
    Boundary,
    Hierarchy,
    State,
    County,
    Cbsa,
    GeoId,
    LegacyGeoId,
    Location,
}

impl AreaLookup {
    pub const ALL: [AreaLookup; 8] = [
        Self::Boundary,
        Self::Hierarchy,
        Self::State,
        Self::County,
        Self::Cbsa,
        Self::GeoId,
        Self::LegacyGeoId,
        Self::Location,
    ];

    pub fn tool(self) -> &'static str {
        match self {
            Self::Boundary => "boundary_detail",
            Self::Hierarchy => "hierarchy_lookup",
            Self::State => "state_lookup",
            Self::County => "county_lookup",
            Self::Cbsa => "cbsa_lookup",
            Self::GeoId => "geoid_lookup",
            Self::LegacyGeoId => "geocode_legacy_lookup",
            Self::Location => "location_lookup",
        }
    }

    pub fn from_tool(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lookup| lookup.tool() == name)
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Boundary => BOUNDARY_PATH,
            Self::Hierarchy => HIERARCHY_PATH,
            Self::State => STATE_PATH,
            Self::County => COUNTY_PATH,
            Self::Cbsa => CBSA_PATH,
            Self::GeoId => GEOID_PATH,
            Self::LegacyGeoId => LEGACY_GEOID_PATH,
            Self::Location => LOCATION_PATH,
        }
    }

    fn query(self, params: &AreaParams) -> Result<QueryParams, AppError> {
        match self {
            Self::Boundary => params.boundary_query(),
            Self::Hierarchy => params.hierarchy_query(),
            Self::State => params.state_query(),
            Self::County => params.county_query(),
            Self::Cbsa => params.cbsa_query(),
            Self::GeoId => params.geoid_query(),
            Self::LegacyGeoId => params.legacy_query(),
            Self::Location => params.location_query(),
        }
    }
}

pub struct AreaService {
    upstream: Arc<dyn UpstreamClient>,
}

impl AreaService {
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { upstream }
    }

    pub async fn lookup(&self, lookup: AreaLookup, params: AreaParams) -> Envelope {
        forward(
            self.upstream.as_ref(),
            lookup.tool(),
            lookup.path(),
            lookup.query(&params),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_names_round_trip() {
        for lookup in AreaLookup::ALL {
            assert_eq!(AreaLookup::from_tool(lookup.tool()), Some(lookup));
        }
        assert_eq!(AreaLookup::from_tool("poi_search"), None);
        assert_eq!(AreaLookup::LegacyGeoId.path(), "areaapi/area/geoId/legacyLookup");
    }
}
