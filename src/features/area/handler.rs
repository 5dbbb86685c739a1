use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::core::envelope::Envelope;
use crate::features::area::dto::AreaParams;
use crate::features::area::service::AreaLookup;
use crate::server::AppState;
use crate::server::extract::from_query;

async fn run(
    state: AppState,
    lookup: AreaLookup,
    query: Result<Query<AreaParams>, QueryRejection>,
) -> Envelope {
    match from_query(query) {
        Ok(params) => state.services.area.lookup(lookup, params).await,
        Err(err) => err.into(),
    }
}

pub async fn handle_boundary_detail(
    State(state): State<AppState>,
    query: Result<Query<AreaParams>, QueryRejection>,
) -> Envelope {
    run(state, AreaLookup::Boundary, query).await
}

pub async fn handle_hierarchy_lookup(
    State(state): State<AppState>,
    query: Result<Query<AreaParams>, QueryRejection>,
) -> Envelope {
    run(state, AreaLookup::Hierarchy, query).await
}

pub async fn handle_state_lookup(
    State(state): State<AppState>,
    query: Result<Query<AreaParams>, QueryRejection>,
) -> Envelope {
    run(state, AreaLookup::State, query).await
}

pub async fn handle_county_lookup(
    State(state): State<AppState>,
    query: Result<Query<AreaParams>, QueryRejection>,
) -> Envelope {
    run(state, AreaLookup::County, query).await
}

pub async fn handle_cbsa_lookup(
    State(state): State<AppState>,
    query: Result<Query<AreaParams>, QueryRejection>,
) -> Envelope {
    run(state, AreaLookup::Cbsa, query).await
}

pub async fn handle_geoid_lookup(
    State(state): State<AppState>,
    query: Result<Query<AreaParams>, QueryRejection>,
) -> Envelope {
    run(state, AreaLookup::GeoId, query).await
}

pub async fn handle_geocode_legacy_lookup(
    State(state): State<AppState>,
    query: Result<Query<AreaParams>, QueryRejection>,
) -> Envelope {
    run(state, AreaLookup::LegacyGeoId, query).await
}

pub async fn handle_location_lookup(
    State(state): State<AppState>,
    query: Result<Query<AreaParams>, QueryRejection>,
) -> Envelope {
    run(state, AreaLookup::Location, query).await
}
