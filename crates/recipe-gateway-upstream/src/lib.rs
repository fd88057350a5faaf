pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod traits;

pub use client::HttpUpstreamClient;
pub use config::UpstreamConfig;
pub use endpoint::{is_path_addressable, Endpoint, Upstream};
pub use error::{UpstreamConfigError, UpstreamError};
pub use traits::{DynUpstreamFetch, UpstreamFetch};
