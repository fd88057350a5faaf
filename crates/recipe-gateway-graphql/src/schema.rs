use async_graphql::extensions::Tracing;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::query::QueryRoot;

/// The gateway's read-only schema.
pub type GatewaySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema. Upstream access is supplied per request through
/// [`crate::GatewayContext`], so the schema itself holds no state.
pub fn build_schema() -> GatewaySchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .extension(Tracing)
        .finish()
}

/// SDL of the gateway schema.
pub fn sdl() -> String {
    build_schema().sdl()
}
