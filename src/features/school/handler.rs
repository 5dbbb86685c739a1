use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::core::envelope::Envelope;
use crate::features::school::dto::SchoolParams;
use crate::server::AppState;
use crate::server::extract::from_query;

pub async fn handle_school_profile(
    State(state): State<AppState>,
    query: Result<Query<SchoolParams>, QueryRejection>,
) -> Envelope {
    match from_query(query) {
        Ok(params) => state.services.school.profile(params).await,
        Err(err) => err.into(),
    }
}

pub async fn handle_school_district(
    State(state): State<AppState>,
    query: Result<Query<SchoolParams>, QueryRejection>,
) -> Envelope {
    match from_query(query) {
        Ok(params) => state.services.school.district(params).await,
        Err(err) => err.into(),
    }
}

pub async fn handle_school_search(
    State(state): State<AppState>,
    query: Result<Query<SchoolParams>, QueryRejection>,
) -> Envelope {
    match from_query(query) {
        Ok(params) => state.services.school.search(params).await,
        Err(err) => err.into(),
    }
}
