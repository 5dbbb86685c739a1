pub mod envelope;
pub mod error;
pub mod http_client;
pub mod identifier;
pub mod pagination;
pub mod upstream;
