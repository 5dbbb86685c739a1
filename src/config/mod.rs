pub mod dto;
pub mod loader;

pub use dto::{AppConfig, AuthConfig, UpstreamConfig};
pub use loader::{load_config, load_config_from_file, load_config_with};
