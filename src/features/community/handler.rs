use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::core::envelope::Envelope;
use crate::features::community::dto::CommunityParams;
use crate::server::AppState;
use crate::server::extract::from_query;

pub async fn handle_neighborhood_community(
    State(state): State<AppState>,
    query: Result<Query<CommunityParams>, QueryRejection>,
) -> Envelope {
    match from_query(query) {
        Ok(params) => state.services.community.neighborhood(params).await,
        Err(err) => err.into(),
    }
}
