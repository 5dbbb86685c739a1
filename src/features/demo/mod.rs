pub mod fixtures;
pub mod upstream;

pub use upstream::DemoUpstream;
