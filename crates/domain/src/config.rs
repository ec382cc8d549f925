pub mod cache;
pub mod errors;
pub mod root;

pub use cache::RecordsCacheConfig;
pub use errors::ConfigError;
pub use root::Config;
