use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::error::AppError;
use crate::core::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest, PagedResult, paginate};
use crate::core::upstream::{ParamValue, QueryParams, UpstreamClient};
use crate::features::area::service::{
    BOUNDARY_PATH, CBSA_PATH, COUNTY_PATH, GEOID_PATH, HIERARCHY_PATH, LEGACY_GEOID_PATH,
    LOCATION_PATH, STATE_PATH,
};
use crate::features::community::service::COMMUNITY_PATH;
use crate::features::demo::fixtures::{self, DEMO_ATTOM_ID, DEMO_COMMUNITY_GEOID, DEMO_DISTRICT_GEOID};
use crate::features::poi::service::{POI_CATEGORY_PATH, POI_SEARCH_PATH};
use crate::features::property::catalog::{PROPERTY_SEARCH_PATH, find_endpoint_by_path};
use crate::features::school::service::{
    SCHOOL_DISTRICT_PATH, SCHOOL_PROFILE_PATH, SCHOOL_SEARCH_PATH,
};

pub struct DemoUpstream {
    prop_prefix: String,
}

impl DemoUpstream {
    pub fn new(prop_prefix: &str) -> Self {
        Self {
            prop_prefix: prop_prefix.trim_matches('/').to_string(),
        }
    }

    pub fn shared(prop_prefix: &str) -> Arc<dyn UpstreamClient> {
        Arc::new(Self::new(prop_prefix))
    }

    fn property_path<'a>(&self, path: &'a str) -> Option<&'a str> {
        let relative = if self.prop_prefix.is_empty() {
            path
        } else {
            path.strip_prefix(self.prop_prefix.as_str())?
                .strip_prefix('/')?
        };
        (relative == PROPERTY_SEARCH_PATH || find_endpoint_by_path(relative).is_some())
            .then_some(relative)
    }
}

#[async_trait]
impl UpstreamClient for DemoUpstream {
    async fn get(&self, path: &str, query: &QueryParams) -> Result<Value, AppError> {
        if let Some(relative) = self.property_path(path) {
            return property(relative, query);
        }

        match path {
            BOUNDARY_PATH => Ok(fixtures::boundary(text(query, "format").unwrap_or("geojson"))),
            HIERARCHY_PATH => Ok(fixtures::hierarchy()),
            STATE_PATH => Ok(fixtures::state()),
            COUNTY_PATH => paged(
                filter(
                    fixtures::counties(),
                    query,
                    &[("stateId", "/state_id"), ("geoIdV4", "/geo_id_v4")],
                ),
                page_request(query, "pageSize"),
            ),
            CBSA_PATH => paged(
                filter(fixtures::cbsas(), query, &[("stateId", "/state_id")]),
                page_request(query, "pageSize"),
            ),
            GEOID_PATH | LEGACY_GEOID_PATH => paged(
                filter(
                    fixtures::hierarchy_levels(),
                    query,
                    &[
                        ("geoId", "/geo_id"),
                        ("geoIdV4", "/geo_id_v4"),
                        ("geoType", "/type"),
                    ],
                ),
                page_request(query, "pageSize"),
            ),
            LOCATION_PATH => location(query),
            POI_SEARCH_PATH => paged(
                filter(
                    fixtures::pois(),
                    query,
                    &[
                        ("categoryName", "/category/category_name"),
                        ("LineOfBusinessName", "/category/line_of_business"),
                        ("IndustryName", "/category/industry_name"),
                        ("CategoryId", "/category/category_id"),
                    ],
                ),
                page_request(query, "pageSize"),
            ),
            POI_CATEGORY_PATH => paged(
                filter(
                    fixtures::poi_categories(),
                    query,
                    &[
                        ("category", "/category_name"),
                        ("lineofbusiness", "/line_of_business"),
                        ("industry", "/industry_name"),
                    ],
                ),
                page_request(query, "pagesize"),
            ),
            COMMUNITY_PATH => {
                let geoid = text(query, "geoIdv4").unwrap_or_default();
                if geoid == DEMO_COMMUNITY_GEOID {
                    Ok(fixtures::community())
                } else {
                    Err(AppError::not_found(format!(
                        "Neighborhood with geoIdv4 {geoid} not found."
                    )))
                }
            }
            SCHOOL_PROFILE_PATH => {
                let geoid = text(query, "geoIdv4").unwrap_or_default();
                fixtures::schools()
                    .into_iter()
                    .find(|school| school["geo_id_v4"] == geoid)
                    .ok_or_else(|| {
                        AppError::not_found(format!("School with geoIdv4 {geoid} not found."))
                    })
            }
            SCHOOL_DISTRICT_PATH => {
                let geoid = text(query, "geoIdv4").unwrap_or_default();
                if geoid == DEMO_DISTRICT_GEOID {
                    Ok(fixtures::school_district())
                } else {
                    Err(AppError::not_found(format!(
                        "School district with geoIdv4 {geoid} not found."
                    )))
                }
            }
            SCHOOL_SEARCH_PATH => paged(
                filter(fixtures::schools(), query, &[("schoolType", "/school_type")]),
                page_request(query, "pageSize"),
            ),
            other => Err(AppError::upstream(format!("no demo data for {other}"))),
        }
    }
}

fn property(relative: &str, query: &QueryParams) -> Result<Value, AppError> {
    if relative == PROPERTY_SEARCH_PATH {
        return property_search(query);
    }

    if relative != "property/snapshot" {
        if let Some(attom_id) = query.get("AttomID") {
            if attom_id.to_string() != DEMO_ATTOM_ID {
                return Err(AppError::not_found(format!(
                    "Property with AttomID {attom_id} not found."
                )));
            }
        }
    }
    Ok(fixtures::property_projection(relative))
}

fn property_search(query: &QueryParams) -> Result<Value, AppError> {
    let has = |key: &str| query.contains_key(key);
    let identified = has("AttomID")
        || has("address")
        || (has("address1") && has("address2"))
        || (has("fips") && has("apn"));

    if identified {
        return to_value(PagedResult {
            items: vec![fixtures::property_snapshot()],
            total_records: 1,
            page: 1,
            page_size: 1,
            total_pages: 1,
        });
    }

    paged(
        filter(
            fixtures::property_snapshots(),
            query,
            &[("propertytype", "/property_type")],
        ),
        page_request(query, "pagesize"),
    )
}

fn location(query: &QueryParams) -> Result<Value, AppError> {
    let name = text(query, "name").map(str::to_uppercase);
    let items = filter(
        fixtures::hierarchy_levels(),
        query,
        &[
            ("geoIdV4", "/geo_id_v4"),
            ("geographyTypeAbbreviation", "/type"),
        ],
    )
    .into_iter()
    .filter(|item| {
        name.as_deref().is_none_or(|name| {
            item["name"]
                .as_str()
                .is_some_and(|candidate| candidate.contains(name))
        })
    })
    .collect();

    paged(items, page_request(query, "pagesize"))
}

fn text<'a>(query: &'a QueryParams, key: &str) -> Option<&'a str> {
    query.get(key).and_then(ParamValue::as_str)
}

fn filter(items: Vec<Value>, query: &QueryParams, filters: &[(&str, &str)]) -> Vec<Value> {
    items
        .into_iter()
        .filter(|item| {
            filters.iter().all(|(key, pointer)| {
                text(query, key).is_none_or(|wanted| {
                    item.pointer(pointer).and_then(Value::as_str) == Some(wanted)
                })
            })
        })
        .collect()
}

fn page_request(query: &QueryParams, size_key: &str) -> PageRequest {
    PageRequest {
        page: query
            .get("page")
            .and_then(ParamValue::as_u32)
            .unwrap_or(DEFAULT_PAGE),
        page_size: query
            .get(size_key)
            .and_then(ParamValue::as_u32)
            .unwrap_or(DEFAULT_PAGE_SIZE),
    }
}

fn paged(items: Vec<Value>, request: PageRequest) -> Result<Value, AppError> {
    to_value(paginate(items, request))
}

fn to_value(result: PagedResult<Value>) -> Result<Value, AppError> {
    serde_json::to_value(result)
        .map_err(|err| AppError::internal(format!("failed to encode demo page: {err}")))
}
