use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::GatewaySettings;
use crate::cors::cors_layer;
use crate::error::GatewayError;
use crate::state::GatewayState;

/// GraphQL POST handler.
pub async fn graphql_handler(
    State(state): State<GatewayState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let request = req.into_inner().data(state.request_context());
    state.schema.execute(request).await.into()
}

/// GraphiQL playground GET handler.
pub async fn graphql_playground(State(state): State<GatewayState>) -> impl IntoResponse {
    Html(
        GraphiQLSource::build()
            .endpoint(&state.settings.route_prefix)
            .finish(),
    )
}

/// Routes for the GraphQL endpoint, without CORS or tracing layers.
pub fn gateway_routes(settings: &GatewaySettings) -> Result<Router<GatewayState>, GatewayError> {
    if !settings.route_prefix.starts_with('/') {
        return Err(GatewayError::InvalidRoutePrefix {
            prefix: settings.route_prefix.clone(),
        });
    }

    let method_router = if settings.graphiql {
        get(graphql_playground).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Ok(Router::new().route(&settings.route_prefix, method_router))
}

/// The complete gateway application: routes, CORS allow-list, request tracing.
pub fn build_router(state: GatewayState) -> Result<Router, GatewayError> {
    let cors = cors_layer(&state.settings.cors)?;
    let router = gateway_routes(&state.settings)?
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    Ok(router)
}
