use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::identifier::{IdentifierForm, resolve_first};
use crate::core::pagination::{MAX_PAGE_SIZE, forward_page};
use crate::core::upstream::{QueryParams, insert_opt};

pub const PROPERTY_IDENTIFIER_REQUIRED: &str = "At least one property identifier is required. Please provide AttomID, address, address1+address2, or fips+apn.";

// Property identifier record. Precedence: `AttomID`, `address`,
// `address1`+`address2`, `fips`+`apn`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyParams {
    #[serde(alias = "AttomID")]
    pub attom_id: Option<String>,
    pub address: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub fips: Option<String>,
    pub apn: Option<String>,
}

impl PropertyParams {
    pub fn by_attom_id(attom_id: impl Into<String>) -> Self {
        Self {
            attom_id: Some(attom_id.into()),
            ..Self::default()
        }
    }

    fn identifier_forms(&self) -> Vec<IdentifierForm> {
        vec![
            IdentifierForm::single("AttomID", self.attom_id.clone()),
            IdentifierForm::single("address", self.address.clone()),
            IdentifierForm::pair(
                "address1",
                self.address1.clone(),
                "address2",
                self.address2.clone(),
            ),
            IdentifierForm::pair("fips", self.fips.clone(), "apn", self.apn.clone()),
        ]
    }

    pub fn has_identifier(&self) -> bool {
        self.identifier_forms()
            .iter()
            .any(IdentifierForm::is_populated)
    }

    pub fn resolve(&self) -> Result<QueryParams, AppError> {
        resolve_first(self.identifier_forms(), PROPERTY_IDENTIFIER_REQUIRED)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySearchParams {
    #[serde(alias = "AttomID")]
    pub attom_id: Option<String>,
    pub address: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub fips: Option<String>,
    pub apn: Option<String>,
    #[serde(alias = "propertytype")]
    pub property_type: Option<String>,
    #[serde(alias = "postalcode")]
    pub postal_code: Option<String>,
    pub page: Option<u32>,
    #[serde(alias = "pagesize")]
    pub page_size: Option<u32>,
    #[serde(alias = "orderby")]
    pub order_by: Option<String>,
}

impl PropertySearchParams {
    pub fn identifier(&self) -> PropertyParams {
        PropertyParams {
            attom_id: self.attom_id.clone(),
            address: self.address.clone(),
            address1: self.address1.clone(),
            address2: self.address2.clone(),
            fips: self.fips.clone(),
            apn: self.apn.clone(),
        }
    }

    pub fn search_query(&self) -> Result<QueryParams, AppError> {
        let identifier = self.identifier();
        let mut query = if identifier.has_identifier() {
            identifier.resolve()?
        } else {
            QueryParams::new()
        };

        insert_opt(&mut query, "propertytype", self.property_type.clone());
        insert_opt(&mut query, "postalcode", self.postal_code.clone());
        insert_opt(&mut query, "orderby", self.order_by.clone());
        forward_page(&mut query, self.page, self.page_size, MAX_PAGE_SIZE, "pagesize")?;
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::upstream::ParamValue;

    #[test]
    fn attom_id_maps_to_external_casing() {
        let query = PropertyParams::by_attom_id("145423726").resolve().expect("resolves");
        assert_eq!(query.get("AttomID"), Some(&ParamValue::from("145423726")));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn address_line_needs_both_halves() {
        let params = PropertyParams {
            address1: Some("7804 N MILTON ST".to_string()),
            fips: Some("53063".to_string()),
            apn: Some("26252.2605".to_string()),
            ..PropertyParams::default()
        };
        let query = params.resolve().expect("parcel pair resolves");
        assert!(query.contains_key("fips"));
        assert!(!query.contains_key("address1"));
    }

    #[test]
    fn missing_identifier_lists_combinations() {
        let error = PropertyParams::default().resolve().expect_err("nothing supplied");
        assert_eq!(error.status_code(), 400);
        assert!(error.envelope_message().contains("address1+address2, or fips+apn"));
    }

    #[test]
    fn search_without_identifier_forwards_criteria() {
        let params = PropertySearchParams {
            postal_code: Some("90703".to_string()),
            page: Some(2),
            page_size: Some(20),
            ..PropertySearchParams::default()
        };
        let query = params.search_query().expect("criteria search is valid");

        assert_eq!(query.get("postalcode"), Some(&ParamValue::from("90703")));
        assert_eq!(query.get("pagesize"), Some(&ParamValue::Integer(20)));
        assert!(!query.contains_key("pageSize"));
    }

    #[test]
    fn search_rejects_oversized_pages() {
        let params = PropertySearchParams {
            page_size: Some(101),
            ..PropertySearchParams::default()
        };
        assert_eq!(params.search_query().unwrap_err().status_code(), 400);
    }
}
