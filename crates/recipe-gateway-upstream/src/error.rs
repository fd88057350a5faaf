use recipe_gateway_core::DecodeError;

use crate::endpoint::Upstream;

/// Failure of a single upstream call.
///
/// Every call site branches on this explicitly; none of these variants are
/// ever allowed to fail a whole GraphQL response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum UpstreamError {
    /// Network or transport failure reaching the upstream.
    #[error("{upstream} upstream unreachable: {message}")]
    UpstreamUnreachable { upstream: Upstream, message: String },

    /// The upstream answered with something other than 200.
    #[error("{upstream} upstream answered {status} for {url}")]
    UpstreamErrorStatus {
        upstream: Upstream,
        status: u16,
        url: String,
    },

    /// The payload does not have the shape the decoder expects.
    #[error("malformed {upstream} upstream payload: {reason}")]
    MalformedUpstreamPayload { upstream: Upstream, reason: String },

    /// The request deadline elapsed before the upstream answered.
    #[error("deadline exceeded waiting for the {upstream} upstream")]
    DeadlineExceeded { upstream: Upstream },

    /// The identifier cannot be sent as a single path segment.
    #[error("identifier {id:?} cannot address a {upstream} upstream resource")]
    UnaddressableId { upstream: Upstream, id: String },
}

impl UpstreamError {
    /// Wrap a decoder failure for the upstream that produced the payload.
    pub fn malformed(upstream: Upstream, err: DecodeError) -> Self {
        Self::MalformedUpstreamPayload {
            upstream,
            reason: err.to_string(),
        }
    }

    /// The upstream this failure came from.
    pub fn upstream(&self) -> Upstream {
        match self {
            Self::UpstreamUnreachable { upstream, .. }
            | Self::UpstreamErrorStatus { upstream, .. }
            | Self::MalformedUpstreamPayload { upstream, .. }
            | Self::DeadlineExceeded { upstream }
            | Self::UnaddressableId { upstream, .. } => *upstream,
        }
    }

    /// Stable machine-readable code, used as the GraphQL error extension.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UpstreamUnreachable { .. } => "UPSTREAM_UNREACHABLE",
            Self::UpstreamErrorStatus { .. } => "UPSTREAM_ERROR_STATUS",
            Self::MalformedUpstreamPayload { .. } => "MALFORMED_UPSTREAM_PAYLOAD",
            Self::DeadlineExceeded { .. } => "DEADLINE_EXCEEDED",
            Self::UnaddressableId { .. } => "UNADDRESSABLE_ID",
        }
    }

    /// True for a 404 from the upstream.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UpstreamErrorStatus { status: 404, .. })
    }
}

/// Errors building an upstream client from configuration.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamConfigError {
    #[error("invalid {upstream} base URL '{url}': {reason}")]
    InvalidBaseUrl {
        upstream: Upstream,
        url: String,
        reason: String,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_per_kind() {
        let errors = [
            UpstreamError::UpstreamUnreachable {
                upstream: Upstream::Recipe,
                message: "refused".into(),
            },
            UpstreamError::UpstreamErrorStatus {
                upstream: Upstream::Recipe,
                status: 500,
                url: "http://x/recipes/1".into(),
            },
            UpstreamError::malformed(
                Upstream::Review,
                DecodeError::TupleTooShort {
                    expected: 8,
                    actual: 2,
                },
            ),
            UpstreamError::DeadlineExceeded {
                upstream: Upstream::Review,
            },
            UpstreamError::UnaddressableId {
                upstream: Upstream::Recipe,
                id: "..".into(),
            },
        ];
        let codes: Vec<_> = errors.iter().map(UpstreamError::code).collect();
        assert_eq!(
            codes,
            [
                "UPSTREAM_UNREACHABLE",
                "UPSTREAM_ERROR_STATUS",
                "MALFORMED_UPSTREAM_PAYLOAD",
                "DEADLINE_EXCEEDED",
                "UNADDRESSABLE_ID"
            ]
        );
    }

    #[test]
    fn malformed_keeps_decoder_reason() {
        let err = UpstreamError::malformed(
            Upstream::Review,
            DecodeError::TupleTooShort {
                expected: 8,
                actual: 2,
            },
        );
        assert_eq!(err.upstream(), Upstream::Review);
        assert!(err.to_string().contains("2 elements"));
    }

    #[test]
    fn only_404_is_not_found() {
        let status = |status| UpstreamError::UpstreamErrorStatus {
            upstream: Upstream::Recipe,
            status,
            url: String::new(),
        };
        assert!(status(404).is_not_found());
        assert!(!status(500).is_not_found());
    }

    #[test]
    fn display_error_status() {
        let err = UpstreamError::UpstreamErrorStatus {
            upstream: Upstream::Recipe,
            status: 503,
            url: "http://recipes/recipes/9".into(),
        };
        assert_eq!(
            err.to_string(),
            "recipe upstream answered 503 for http://recipes/recipes/9"
        );
    }
}
