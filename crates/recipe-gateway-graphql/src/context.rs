use std::sync::Arc;

use recipe_gateway_upstream::{DynUpstreamFetch, Endpoint, UpstreamError};
use serde_json::Value;
use tokio::time::Instant;

use crate::config::MalformedReviewPolicy;

/// Request-scoped context inserted into every async-graphql request via `.data()`.
///
/// Resolvers access it with `ctx.data::<GatewayContext>()`.
#[derive(Clone)]
pub struct GatewayContext {
    pub upstream: Arc<dyn DynUpstreamFetch>,
    pub on_malformed_review: MalformedReviewPolicy,
    /// Upstream calls still pending at this instant are abandoned.
    pub deadline: Option<Instant>,
}

impl GatewayContext {
    pub fn new(upstream: Arc<dyn DynUpstreamFetch>) -> Self {
        Self {
            upstream,
            on_malformed_review: MalformedReviewPolicy::default(),
            deadline: None,
        }
    }

    pub fn with_policy(mut self, policy: MalformedReviewPolicy) -> Self {
        self.on_malformed_review = policy;
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Issue one upstream call, bounded by the request deadline.
    ///
    /// Dropping the returned future cancels the in-flight HTTP request.
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<Value, UpstreamError> {
        let call = self.upstream.get(endpoint);
        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, call)
                .await
                .unwrap_or_else(|_| {
                    Err(UpstreamError::DeadlineExceeded {
                        upstream: endpoint.upstream(),
                    })
                }),
            None => call.await,
        }
    }
}
