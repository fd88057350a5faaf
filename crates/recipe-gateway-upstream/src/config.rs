use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the upstream services live and how long a single call may take.
///
/// Deserialized from the `[upstream]` section of config.toml. Built once at
/// startup and handed to [`crate::HttpUpstreamClient::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the recipe service.
    #[serde(default = "default_recipe_base_url")]
    pub recipe_base_url: String,

    /// Base URL of the review service.
    #[serde(default = "default_review_base_url")]
    pub review_base_url: String,

    /// Transport timeout for one upstream call, e.g. "10s" or "500ms".
    #[serde(default = "default_timeout", with = "humantime_duration")]
    pub timeout: Duration,
}

fn default_recipe_base_url() -> String {
    "http://localhost:8011".to_string()
}

fn default_review_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            recipe_base_url: default_recipe_base_url(),
            review_base_url: default_review_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Serde adapter for human-readable durations ("30s", "1m 30s").
pub mod humantime_duration {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(serde::de::Error::custom)
    }
}
