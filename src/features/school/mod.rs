pub mod dto;
pub mod handler;
pub mod service;

pub use dto::{SchoolParams, SchoolType};
pub use handler::{handle_school_district, handle_school_profile, handle_school_search};
pub use service::SchoolService;
