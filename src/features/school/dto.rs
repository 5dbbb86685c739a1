use serde::{Deserialize, Serialize};

use crate::core::error::AppError;
use crate::core::identifier::{IdentifierForm, resolve_first};
use crate::core::pagination::{MAX_PAGE_SIZE, forward_page};
use crate::core::upstream::{QueryParams, insert_opt, insert_radius};
use crate::features::community::dto::GEOID_REQUIRED;

pub const SCHOOL_LOCATION_REQUIRED: &str =
    "Either geoIdv4 or latitude+longitude is required for school search.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchoolType {
    Elementary,
    Middle,
    High,
    Charter,
    Private,
    Public,
}

impl SchoolType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Elementary => "Elementary",
            Self::Middle => "Middle",
            Self::High => "High",
            Self::Charter => "Charter",
            Self::Private => "Private",
            Self::Public => "Public",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchoolParams {
    #[serde(alias = "geoIdv4", alias = "geoIdV4")]
    pub geoid_v4: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius: Option<f64>,
    #[serde(alias = "schoolType")]
    pub school_type: Option<SchoolType>,
    pub page: Option<u32>,
    #[serde(alias = "pageSize")]
    pub page_size: Option<u32>,
}

impl SchoolParams {
    pub fn geoid_query(&self) -> Result<QueryParams, AppError> {
        resolve_first(
            [IdentifierForm::single("geoIdv4", self.geoid_v4.clone())],
            GEOID_REQUIRED,
        )
    }

    // `geoIdv4` takes precedence over coordinates.
    pub fn search_query(&self) -> Result<QueryParams, AppError> {
        let mut query = resolve_first(
            [
                IdentifierForm::single("geoIdv4", self.geoid_v4.clone()),
                IdentifierForm::pair("latitude", self.latitude, "longitude", self.longitude),
            ],
            SCHOOL_LOCATION_REQUIRED,
        )?;
        insert_radius(&mut query, self.radius)?;
        insert_opt(&mut query, "schoolType", self.school_type.map(SchoolType::as_str));
        forward_page(&mut query, self.page, self.page_size, MAX_PAGE_SIZE, "pageSize")?;
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::upstream::ParamValue;

    #[test]
    fn geoid_outranks_coordinates() {
        let params = SchoolParams {
            geoid_v4: Some("9c6bded31fd0e089485f276acb947875".to_string()),
            latitude: Some(33.8),
            longitude: Some(-117.9),
            ..SchoolParams::default()
        };
        let query = params.search_query().expect("valid");
        assert_eq!(query.keys().collect::<Vec<_>>(), vec!["geoIdv4"]);
    }

    #[test]
    fn search_needs_a_location() {
        let params = SchoolParams {
            latitude: Some(33.8),
            ..SchoolParams::default()
        };
        assert_eq!(
            params.search_query().unwrap_err().envelope_message(),
            SCHOOL_LOCATION_REQUIRED
        );
    }

    #[test]
    fn school_type_is_forwarded_and_validated() {
        let params: SchoolParams = serde_json::from_value(serde_json::json!({
            "latitude": 0.0,
            "longitude": 0.0,
            "school_type": "High"
        }))
        .unwrap();
        let query = params.search_query().expect("valid");
        assert_eq!(query.get("schoolType"), Some(&ParamValue::from("High")));

        let unknown = serde_json::from_value::<SchoolParams>(serde_json::json!({
            "school_type": "University"
        }));
        assert!(unknown.is_err());
    }

    #[test]
    fn profile_requires_geoid() {
        assert_eq!(
            SchoolParams::default().geoid_query().unwrap_err().envelope_message(),
            "geoIdv4 is required."
        );
    }
}
