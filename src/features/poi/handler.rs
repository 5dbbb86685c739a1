use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::core::envelope::Envelope;
use crate::features::poi::dto::{PoiCategoryParams, PoiParams};
use crate::server::AppState;
use crate::server::extract::from_query;

pub async fn handle_poi_search(
    State(state): State<AppState>,
    query: Result<Query<PoiParams>, QueryRejection>,
) -> Envelope {
    match from_query(query) {
        Ok(params) => state.services.poi.search(params).await,
        Err(err) => err.into(),
    }
}

pub async fn handle_poi_category_lookup(
    State(state): State<AppState>,
    query: Result<Query<PoiCategoryParams>, QueryRejection>,
) -> Envelope {
    match from_query(query) {
        Ok(params) => state.services.poi.category_lookup(params).await,
        Err(err) => err.into(),
    }
}
