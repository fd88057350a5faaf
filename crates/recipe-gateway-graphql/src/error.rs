use std::fmt;

use async_graphql::ErrorExtensions;
use recipe_gateway_upstream::UpstreamError;

/// Errors raised while assembling the gateway router.
///
/// Resolver failures never surface here; they become field-level GraphQL
/// errors or absent values instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GatewayError {
    /// A CORS origin could not be used as a header value.
    InvalidOrigin { origin: String, reason: String },
    /// The GraphQL route prefix is not an absolute path.
    InvalidRoutePrefix { prefix: String },
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrigin { origin, reason } => {
                write!(f, "invalid CORS origin '{origin}': {reason}")
            }
            Self::InvalidRoutePrefix { prefix } => {
                write!(f, "invalid route prefix '{prefix}': must start with '/'")
            }
        }
    }
}

impl std::error::Error for GatewayError {}

/// Convert an upstream failure to an async_graphql::Error with extension codes.
///
/// The message is fixed per kind of failure. Upstream URLs and transport
/// details stay in the logs.
pub fn upstream_error_to_gql(err: &UpstreamError) -> async_graphql::Error {
    let code = err.code();
    let upstream = err.upstream().as_str();
    let status = match err {
        UpstreamError::UpstreamErrorStatus { status, .. } => Some(*status),
        _ => None,
    };
    async_graphql::Error::new(public_message(err)).extend_with(|_, e| {
        e.set("code", code);
        e.set("upstream", upstream);
        if let Some(status) = status {
            e.set("status", status);
        }
    })
}

fn public_message(err: &UpstreamError) -> String {
    let upstream = err.upstream();
    match err {
        UpstreamError::UpstreamUnreachable { .. } => format!("{upstream} service unavailable"),
        UpstreamError::UpstreamErrorStatus { status, .. } => {
            format!("{upstream} service answered with status {status}")
        }
        UpstreamError::MalformedUpstreamPayload { .. } => {
            format!("{upstream} service returned an unexpected payload")
        }
        UpstreamError::DeadlineExceeded { .. } => {
            format!("{upstream} service did not answer before the request deadline")
        }
        UpstreamError::UnaddressableId { .. } => {
            format!("identifier cannot be looked up on the {upstream} service")
        }
        _ => format!("{upstream} service failed"),
    }
}

/// A client-side argument problem, reported as `BAD_USER_INPUT`.
pub fn bad_user_input(message: impl Into<String>) -> async_graphql::Error {
    async_graphql::Error::new(message).extend_with(|_, e| e.set("code", "BAD_USER_INPUT"))
}
