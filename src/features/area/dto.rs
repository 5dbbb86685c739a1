use serde::{Deserialize, Serialize};

use crate::core::error::AppError;
use crate::core::identifier::{IdentifierForm, resolve_any, resolve_first};
use crate::core::pagination::{MAX_PAGE_SIZE, forward_page};
use crate::core::upstream::{QueryParams, insert_opt};

pub const BOUNDARY_IDENTIFIER_REQUIRED: &str =
    "At least one area identifier is required. Please provide geoIdV4 or areaId.";
pub const HIERARCHY_LOCATION_REQUIRED: &str =
    "Location information is required. Please provide wktstring or latitude+longitude.";
pub const COUNTY_IDENTIFIER_REQUIRED: &str =
    "At least one identifier is required. Please provide stateId or geoIdV4.";
pub const LOCATION_CRITERION_REQUIRED: &str = "At least one search criterion is required. Please provide geoidv4, name, or geographyTypeAbbreviation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryFormat {
    Geojson,
    Wkt,
}

impl BoundaryFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Geojson => "geojson",
            Self::Wkt => "wkt",
        }
    }
}

// Each lookup reads only the fields it forwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AreaParams {
    #[serde(alias = "geoIdV4", alias = "geoidv4")]
    pub geoid_v4: Option<String>,
    #[serde(alias = "areaId")]
    pub area_id: Option<String>,
    #[serde(alias = "geoId")]
    pub geo_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(alias = "wktstring")]
    pub wkt_string: Option<String>,
    #[serde(alias = "geoType")]
    pub geo_type: Option<String>,
    #[serde(alias = "stateId")]
    pub state_id: Option<String>,
    pub format: Option<BoundaryFormat>,
    pub mime: Option<String>,
    pub name: Option<String>,
    #[serde(alias = "geographyTypeAbbreviation")]
    pub geography_type_abbreviation: Option<String>,
    pub page: Option<u32>,
    #[serde(alias = "pageSize", alias = "pagesize")]
    pub page_size: Option<u32>,
}

impl AreaParams {
    pub fn boundary_query(&self) -> Result<QueryParams, AppError> {
        let mut query = resolve_any(
            [
                IdentifierForm::single("geoIdV4", self.geoid_v4.clone()),
                IdentifierForm::single("areaId", self.area_id.clone()),
            ],
            BOUNDARY_IDENTIFIER_REQUIRED,
        )?;
        insert_opt(&mut query, "format", self.format.map(BoundaryFormat::as_str));
        insert_opt(&mut query, "mime", self.mime.clone());
        Ok(query)
    }

    // Coordinates take precedence over a WKT geometry.
    pub fn hierarchy_query(&self) -> Result<QueryParams, AppError> {
        let mut query = resolve_first(
            [
                IdentifierForm::pair("latitude", self.latitude, "longitude", self.longitude),
                IdentifierForm::single("wktstring", self.wkt_string.clone()),
            ],
            HIERARCHY_LOCATION_REQUIRED,
        )?;
        insert_opt(&mut query, "geoType", self.geo_type.clone());
        insert_opt(&mut query, "mime", self.mime.clone());
        Ok(query)
    }

    pub fn state_query(&self) -> Result<QueryParams, AppError> {
        let mut query = QueryParams::new();
        insert_opt(&mut query, "geoIdV4", self.geoid_v4.clone());
        insert_opt(&mut query, "areaId", self.area_id.clone());
        insert_opt(&mut query, "mime", self.mime.clone());
        forward_page(&mut query, self.page, self.page_size, MAX_PAGE_SIZE, "pageSize")?;
        Ok(query)
    }

    pub fn county_query(&self) -> Result<QueryParams, AppError> {
        let mut query = resolve_any(
            [
                IdentifierForm::single("stateId", self.state_id.clone()),
                IdentifierForm::single("geoIdV4", self.geoid_v4.clone()),
            ],
            COUNTY_IDENTIFIER_REQUIRED,
        )?;
        insert_opt(&mut query, "mime", self.mime.clone());
        forward_page(&mut query, self.page, self.page_size, MAX_PAGE_SIZE, "pageSize")?;
        Ok(query)
    }

    pub fn cbsa_query(&self) -> Result<QueryParams, AppError> {
        let mut query = QueryParams::new();
        insert_opt(&mut query, "stateId", self.state_id.clone());
        insert_opt(&mut query, "geoIdV4", self.geoid_v4.clone());
        insert_opt(&mut query, "mime", self.mime.clone());
        forward_page(&mut query, self.page, self.page_size, MAX_PAGE_SIZE, "pageSize")?;
        Ok(query)
    }

    pub fn geoid_query(&self) -> Result<QueryParams, AppError> {
        let mut query = QueryParams::new();
        insert_opt(&mut query, "geoId", self.geo_id.clone());
        insert_opt(&mut query, "geoIdV4", self.geoid_v4.clone());
        insert_opt(&mut query, "geoType", self.geo_type.clone());
        insert_opt(&mut query, "mime", self.mime.clone());
        forward_page(&mut query, self.page, self.page_size, MAX_PAGE_SIZE, "pageSize")?;
        Ok(query)
    }

    pub fn legacy_query(&self) -> Result<QueryParams, AppError> {
        let mut query = QueryParams::new();
        insert_opt(&mut query, "geoId", self.geo_id.clone());
        insert_opt(&mut query, "geoIdV4", self.geoid_v4.clone());
        Ok(query)
    }

    pub fn location_query(&self) -> Result<QueryParams, AppError> {
        let abbreviation = self
            .geography_type_abbreviation
            .clone()
            .or_else(|| self.geo_type.clone());
        let mut query = resolve_any(
            [
                IdentifierForm::single("geoIdV4", self.geoid_v4.clone()),
                IdentifierForm::single("name", self.name.clone()),
                IdentifierForm::single("geographyTypeAbbreviation", abbreviation),
            ],
            LOCATION_CRITERION_REQUIRED,
        )?;
        forward_page(&mut query, self.page, self.page_size, MAX_PAGE_SIZE, "pagesize")?;
        Ok(query)
    }
}
