use std::sync::Arc;

use recipe_gateway_upstream::DynUpstreamFetch;
use tokio::time::Instant;

use crate::config::GatewaySettings;
use crate::context::GatewayContext;
use crate::schema::{build_schema, GatewaySchema};

/// Shared state for the gateway's HTTP handlers.
///
/// Everything in here is immutable after startup; cloning is cheap.
#[derive(Clone)]
pub struct GatewayState {
    pub schema: GatewaySchema,
    pub upstream: Arc<dyn DynUpstreamFetch>,
    pub settings: Arc<GatewaySettings>,
}

impl GatewayState {
    pub fn new(upstream: Arc<dyn DynUpstreamFetch>, settings: GatewaySettings) -> Self {
        Self {
            schema: build_schema(),
            upstream,
            settings: Arc::new(settings),
        }
    }

    /// Fresh resolver context for one inbound request.
    pub fn request_context(&self) -> GatewayContext {
        GatewayContext::new(self.upstream.clone())
            .with_policy(self.settings.on_malformed_review)
            .with_deadline(Instant::now() + self.settings.request_deadline)
    }
}
