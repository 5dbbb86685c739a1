pub mod catalog;
pub mod dto;
pub mod handler;
pub mod service;

pub use catalog::{PROPERTY_ENDPOINTS, PropertyEndpoint, find_endpoint};
pub use dto::{PropertyParams, PropertySearchParams};
pub use handler::{
    handle_property_detail, handle_property_detail_form, handle_property_search,
    handle_property_search_form, handle_property_snapshot, handle_property_snapshot_form,
};
pub use service::PropertyService;
