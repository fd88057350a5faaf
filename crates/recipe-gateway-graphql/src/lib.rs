pub mod config;
pub mod context;
pub mod cors;
pub mod error;
pub mod query;
pub mod routes;
pub mod schema;
pub mod state;
pub mod types;

pub use config::{CorsSettings, GatewaySettings, MalformedReviewPolicy};
pub use context::GatewayContext;
pub use error::GatewayError;
pub use routes::{build_router, gateway_routes};
pub use schema::{build_schema, GatewaySchema};
pub use state::GatewayState;
