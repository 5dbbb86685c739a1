pub mod dto;
pub mod handler;
pub mod service;

pub use dto::{PoiCategoryParams, PoiParams};
pub use handler::{handle_poi_category_lookup, handle_poi_search};
pub use service::PoiService;
