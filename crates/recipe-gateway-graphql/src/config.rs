use std::time::Duration;

use recipe_gateway_upstream::config::humantime_duration;
use serde::{Deserialize, Serialize};

/// Gateway settings, deserialized from the `[gateway]` section of config.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewaySettings {
    /// Path the GraphQL endpoint is served on (default: "/graphql").
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,

    /// Serve the GraphiQL playground on `GET {route_prefix}`.
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,

    /// Upper bound on the upstream work one GraphQL request may wait for.
    #[serde(default = "default_request_deadline", with = "humantime_duration")]
    pub request_deadline: Duration,

    /// What `userReviews` does with a tuple it cannot decode.
    #[serde(default)]
    pub on_malformed_review: MalformedReviewPolicy,

    #[serde(default)]
    pub cors: CorsSettings,
}

/// Handling of a malformed element inside a `userReviews` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedReviewPolicy {
    /// Drop the element, log it, keep the rest in order.
    #[default]
    Skip,
    /// Resolve the whole list to null with a field error.
    Fail,
}

/// Cross-origin policy for the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsSettings {
    /// Exact origins allowed to call the gateway from a browser.
    #[serde(default = "default_allow_origins")]
    pub allow_origins: Vec<String>,

    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,
}

fn default_route_prefix() -> String {
    "/graphql".to_string()
}

fn default_graphiql() -> bool {
    true
}

fn default_request_deadline() -> Duration {
    Duration::from_secs(30)
}

fn default_allow_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

fn default_allow_credentials() -> bool {
    true
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            route_prefix: default_route_prefix(),
            graphiql: default_graphiql(),
            request_deadline: default_request_deadline(),
            on_malformed_review: MalformedReviewPolicy::default(),
            cors: CorsSettings::default(),
        }
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allow_origins: default_allow_origins(),
            allow_credentials: default_allow_credentials(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_correct() {
        let settings = GatewaySettings::default();
        assert_eq!(settings.route_prefix, "/graphql");
        assert!(settings.graphiql);
        assert_eq!(settings.request_deadline, Duration::from_secs(30));
        assert_eq!(settings.on_malformed_review, MalformedReviewPolicy::Skip);
        assert_eq!(
            settings.cors.allow_origins,
            ["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert!(settings.cors.allow_credentials);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let settings: GatewaySettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, GatewaySettings::default());
    }

    #[test]
    fn partial_override() {
        let json = r#"{"on_malformed_review": "fail", "cors": {"allow_origins": ["https://app.example"]}}"#;
        let settings: GatewaySettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.on_malformed_review, MalformedReviewPolicy::Fail);
        assert_eq!(settings.cors.allow_origins, ["https://app.example"]);
        assert!(settings.cors.allow_credentials);
        assert_eq!(settings.route_prefix, "/graphql");
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result: Result<GatewaySettings, _> =
            serde_json::from_str(r#"{"on_malformed_review": "ignore"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serde_roundtrip_preserves_all_fields() {
        let settings = GatewaySettings {
            route_prefix: "/api/graphql".into(),
            graphiql: false,
            request_deadline: Duration::from_millis(1500),
            on_malformed_review: MalformedReviewPolicy::Fail,
            cors: CorsSettings {
                allow_origins: vec![],
                allow_credentials: false,
            },
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: GatewaySettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
