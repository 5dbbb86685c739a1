use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::identifier::{IdentifierForm, resolve_first};
use crate::core::pagination::{MAX_PAGE_SIZE, POI_MAX_PAGE_SIZE, forward_page};
use crate::core::upstream::{QueryParams, insert_opt, insert_radius};

pub const POI_LOCATION_REQUIRED: &str = "At least one location parameter is required. Please provide point, address, latitude+longitude, or zipcode.";

// Point-of-interest search. Location precedence: `address`, `point`,
// `latitude`+`longitude`, `zipcode`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoiParams {
    pub address: Option<String>,
    pub point: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub zipcode: Option<String>,
    pub radius: Option<f64>,
    #[serde(alias = "categoryName")]
    pub category_name: Option<String>,
    #[serde(alias = "LineOfBusinessName")]
    pub line_of_business_name: Option<String>,
    #[serde(alias = "IndustryName")]
    pub industry_name: Option<String>,
    #[serde(alias = "CategoryId")]
    pub category_id: Option<String>,
    pub page: Option<u32>,
    #[serde(alias = "pageSize")]
    pub page_size: Option<u32>,
}

impl PoiParams {
    pub fn search_query(&self) -> Result<QueryParams, AppError> {
        let mut query = resolve_first(
            [
                IdentifierForm::single("address", self.address.clone()),
                IdentifierForm::single("point", self.point.clone()),
                IdentifierForm::pair("latitude", self.latitude, "longitude", self.longitude),
                IdentifierForm::single("zipcode", self.zipcode.clone()),
            ],
            POI_LOCATION_REQUIRED,
        )?;
        insert_radius(&mut query, self.radius)?;
        insert_opt(&mut query, "categoryName", self.category_name.clone());
        insert_opt(&mut query, "LineOfBusinessName", self.line_of_business_name.clone());
        insert_opt(&mut query, "IndustryName", self.industry_name.clone());
        insert_opt(&mut query, "CategoryId", self.category_id.clone());
        forward_page(&mut query, self.page, self.page_size, POI_MAX_PAGE_SIZE, "pageSize")?;
        Ok(query)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoiCategoryParams {
    pub category: Option<String>,
    #[serde(alias = "lineofbusiness")]
    pub line_of_business: Option<String>,
    pub industry: Option<String>,
    pub page: Option<u32>,
    #[serde(alias = "pagesize")]
    pub page_size: Option<u32>,
}

impl PoiCategoryParams {
    pub fn lookup_query(&self) -> Result<QueryParams, AppError> {
        let mut query = QueryParams::new();
        insert_opt(&mut query, "category", self.category.clone());
        insert_opt(&mut query, "lineofbusiness", self.line_of_business.clone());
        insert_opt(&mut query, "industry", self.industry.clone());
        forward_page(&mut query, self.page, self.page_size, MAX_PAGE_SIZE, "pagesize")?;
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::upstream::ParamValue;

    #[test]
    fn address_outranks_coordinates() {
        let params = PoiParams {
            address: Some("123 Main St".to_string()),
            latitude: Some(33.8),
            longitude: Some(-117.9),
            ..PoiParams::default()
        };
        let query = params.search_query().expect("valid");
        assert!(query.contains_key("address"));
        assert!(!query.contains_key("latitude"));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let params = PoiParams {
            zipcode: Some("92802".to_string()),
            radius: Some(0.0),
            ..PoiParams::default()
        };
        assert_eq!(params.search_query().unwrap_err().status_code(), 400);
    }

    #[test]
    fn page_size_cap_is_five_hundred() {
        let mut params = PoiParams {
            point: Some("POINT(-117.9 33.8)".to_string()),
            page_size: Some(500),
            ..PoiParams::default()
        };
        let query = params.search_query().expect("500 is allowed");
        assert_eq!(query.get("pageSize"), Some(&ParamValue::Integer(500)));

        params.page_size = Some(501);
        assert!(params.search_query().is_err());
    }

    #[test]
    fn missing_location_is_reported() {
        let error = PoiParams::default().search_query().unwrap_err();
        assert_eq!(error.envelope_message(), POI_LOCATION_REQUIRED);
    }

    #[test]
    fn category_lookup_uses_lowercase_keys() {
        let params = PoiCategoryParams {
            line_of_business: Some("SHOPPING".to_string()),
            page_size: Some(3),
            ..PoiCategoryParams::default()
        };
        let query = params.lookup_query().expect("valid");
        assert!(query.contains_key("lineofbusiness"));
        assert!(query.contains_key("pagesize"));
    }
}
