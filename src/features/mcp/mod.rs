pub mod dto;
pub mod handler;
pub mod schemas;
pub mod service;

pub use handler::{
    handle_discovery, handle_healthcheck, handle_mcp, handle_method_not_allowed, handle_not_found,
    handle_root,
};
pub use service::McpService;
