pub mod dto;
pub mod handler;
pub mod service;

pub use dto::CommunityParams;
pub use handler::handle_neighborhood_community;
pub use service::CommunityService;
