use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Query, State};

use crate::core::envelope::Envelope;
use crate::core::error::AppError;
use crate::features::property::catalog::{PROPERTY_DETAIL, PROPERTY_SNAPSHOT, PropertyEndpoint};
use crate::features::property::dto::{PropertyParams, PropertySearchParams};
use crate::server::AppState;
use crate::server::extract::{from_form, from_query};

async fn lookup(
    state: AppState,
    endpoint: &PropertyEndpoint,
    params: Result<PropertyParams, AppError>,
) -> Envelope {
    match params {
        Ok(params) => state.services.property.lookup(endpoint, params).await,
        Err(err) => err.into(),
    }
}

async fn search(state: AppState, params: Result<PropertySearchParams, AppError>) -> Envelope {
    match params {
        Ok(params) => state.services.property.search("property_search", params).await,
        Err(err) => err.into(),
    }
}

pub async fn handle_property_detail(
    State(state): State<AppState>,
    query: Result<Query<PropertyParams>, QueryRejection>,
) -> Envelope {
    lookup(state, &PROPERTY_DETAIL, from_query(query)).await
}

pub async fn handle_property_detail_form(
    State(state): State<AppState>,
    form: Result<Form<PropertyParams>, FormRejection>,
) -> Envelope {
    lookup(state, &PROPERTY_DETAIL, from_form(form)).await
}

pub async fn handle_property_snapshot(
    State(state): State<AppState>,
    query: Result<Query<PropertyParams>, QueryRejection>,
) -> Envelope {
    lookup(state, &PROPERTY_SNAPSHOT, from_query(query)).await
}

pub async fn handle_property_snapshot_form(
    State(state): State<AppState>,
    form: Result<Form<PropertyParams>, FormRejection>,
) -> Envelope {
    lookup(state, &PROPERTY_SNAPSHOT, from_form(form)).await
}

pub async fn handle_property_search(
    State(state): State<AppState>,
    query: Result<Query<PropertySearchParams>, QueryRejection>,
) -> Envelope {
    search(state, from_query(query)).await
}

pub async fn handle_property_search_form(
    State(state): State<AppState>,
    form: Result<Form<PropertySearchParams>, FormRejection>,
) -> Envelope {
    search(state, from_form(form)).await
}
