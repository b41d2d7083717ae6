pub mod http;
pub mod metadata;
pub mod version;
