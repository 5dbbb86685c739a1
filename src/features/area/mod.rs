pub mod dto;
pub mod handler;
pub mod service;

pub use dto::{AreaParams, BoundaryFormat};
pub use handler::{
    handle_boundary_detail, handle_cbsa_lookup, handle_county_lookup,
    handle_geocode_legacy_lookup, handle_geoid_lookup, handle_hierarchy_lookup,
    handle_location_lookup, handle_state_lookup,
};
pub use service::{AreaLookup, AreaService};
