use http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsSettings;
use crate::error::GatewayError;

/// Build the CORS layer for the configured origin allow-list.
///
/// Methods and headers mirror the preflight request; tower-http rejects
/// wildcards once credentials are allowed.
pub fn cors_layer(settings: &CorsSettings) -> Result<CorsLayer, GatewayError> {
    let origins = settings
        .allow_origins
        .iter()
        .map(|origin| origin_header(origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(settings.allow_credentials))
}

fn origin_header(origin: &str) -> Result<HeaderValue, GatewayError> {
    let invalid = |reason: &str| GatewayError::InvalidOrigin {
        origin: origin.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = origin.trim().trim_end_matches('/');
    if trimmed == "*" {
        return Err(invalid("wildcard origins are not allowed, list origins explicitly"));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(invalid("expected an http:// or https:// origin"));
    }
    HeaderValue::from_str(trimmed).map_err(|_| invalid("not a valid header value"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_origins_build() {
        assert!(cors_layer(&CorsSettings::default()).is_ok());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let value = origin_header("http://localhost:3000/").unwrap();
        assert_eq!(value, "http://localhost:3000");
    }

    #[test]
    fn wildcard_is_rejected() {
        let settings = CorsSettings {
            allow_origins: vec!["*".into()],
            allow_credentials: true,
        };
        let err = cors_layer(&settings).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidOrigin { .. }));
    }

    #[test]
    fn schemeless_origin_is_rejected() {
        assert!(origin_header("localhost:3000").is_err());
    }

    #[test]
    fn empty_allow_list_is_valid() {
        let settings = CorsSettings {
            allow_origins: vec![],
            allow_credentials: false,
        };
        assert!(cors_layer(&settings).is_ok());
    }
}
