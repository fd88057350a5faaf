use std::net::SocketAddr;
use std::path::PathBuf;

use recipe_gateway_graphql::GatewayError;
use recipe_gateway_upstream::UpstreamConfigError;

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error
/// - 2: invalid arguments / configuration
/// - 10: the server could not bind or stopped with an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ServerError = 10,
}

/// Errors returned by CLI command handlers.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file could not be parsed, or holds unusable values.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Upstream base URLs or HTTP client settings are unusable.
    #[error("upstream configuration error: {0}")]
    Upstream(#[from] UpstreamConfigError),

    /// Gateway settings (route prefix, CORS origins) are unusable.
    #[error("gateway configuration error: {0}")]
    Gateway(#[from] GatewayError),

    /// The listener could not be bound.
    #[error("cannot listen on {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// The server stopped with an error after starting.
    #[error("server on {addr} failed: {source}")]
    Server {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config { .. } | Self::Upstream(_) | Self::Gateway(_) => {
                ExitCode::InvalidArguments
            }
            Self::Bind { .. } | Self::Server { .. } => ExitCode::ServerError,
            Self::Io { .. } | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            Self::Upstream(e) => serde_json::json!({
                "error": "config_error",
                "section": "upstream",
                "message": e.to_string(),
            }),
            Self::Gateway(e) => serde_json::json!({
                "error": "config_error",
                "section": "gateway",
                "message": e.to_string(),
            }),
            Self::Bind { addr, source } => serde_json::json!({
                "error": "bind_error",
                "addr": addr,
                "message": source.to_string(),
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}
