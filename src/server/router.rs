use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::core::upstream::join_path;
use crate::features::area::{
    handle_boundary_detail, handle_cbsa_lookup, handle_county_lookup,
    handle_geocode_legacy_lookup, handle_geoid_lookup, handle_hierarchy_lookup,
    handle_location_lookup, handle_state_lookup,
};
use crate::features::community::handle_neighborhood_community;
use crate::features::mcp::{
    handle_discovery, handle_healthcheck, handle_mcp, handle_method_not_allowed,
    handle_not_found, handle_root,
};
use crate::features::poi::{handle_poi_category_lookup, handle_poi_search};
use crate::features::property::{
    handle_property_detail, handle_property_detail_form, handle_property_search,
    handle_property_search_form, handle_property_snapshot, handle_property_snapshot_form,
};
use crate::features::school::{handle_school_district, handle_school_profile, handle_school_search};
use crate::server::{AppState, require_api_key};

pub fn build_router(state: AppState) -> Router {
    let prefix = state.config.upstream.prop_api_prefix.clone();
    let property_route = |path: &str| format!("/{}", join_path(&prefix, path));

    let protected = Router::new()
        .route(
            &property_route("property/detail"),
            get(handle_property_detail).post(handle_property_detail_form),
        )
        .route(
            &property_route("property/snapshot"),
            get(handle_property_snapshot).post(handle_property_snapshot_form),
        )
        .route(
            &property_route("property/id"),
            get(handle_property_search).post(handle_property_search_form),
        )
        .route("/areaapi/area/boundary/detail", get(handle_boundary_detail))
        .route("/areaapi/area/hierarchy/lookup", get(handle_hierarchy_lookup))
        .route("/areaapi/area/state/lookup", get(handle_state_lookup))
        .route("/areaapi/area/county/lookup", get(handle_county_lookup))
        .route("/areaapi/area/cbsa/lookup", get(handle_cbsa_lookup))
        .route("/areaapi/area/geoid/lookup", get(handle_geoid_lookup))
        .route(
            "/areaapi/area/geoId/legacyLookup",
            get(handle_geocode_legacy_lookup),
        )
        .route("/v4/location/lookup", get(handle_location_lookup))
        .route("/v4/neighborhood/poi", get(handle_poi_search))
        .route(
            "/v4/neighborhood/poi/categorylookup",
            get(handle_poi_category_lookup),
        )
        .route(
            "/v4.0.0/neighborhood/community",
            get(handle_neighborhood_community),
        )
        .route("/v4/school/profile", get(handle_school_profile))
        .route("/v4/school/district", get(handle_school_district))
        .route("/v4/school/search", get(handle_school_search))
        .route("/api/mcp", post(handle_mcp))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    // Unknown paths are keyed like the protected routes: 401/403 before 404.
    let unknown = Router::new()
        .fallback(handle_not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/", get(handle_root))
        .route("/api/health", get(handle_healthcheck))
        .route("/.well-known/mcp.json", get(handle_discovery))
        .merge(protected)
        .merge(unknown)
        .method_not_allowed_fallback(handle_method_not_allowed)
        .with_state(state)
}
