use std::sync::Arc;

use recipe_gateway_graphql::{build_router, GatewayState};
use recipe_gateway_upstream::HttpUpstreamClient;
use tokio::net::TcpListener;

use crate::cli::{GlobalOpts, ServeArgs};
use crate::config::{apply_serve_overrides, load_config};
use crate::error::CliError;
use crate::logging;
use crate::output::OutputContext;

/// Run the `serve` command: bind the listener and answer GraphQL requests
/// until Ctrl-C.
pub async fn run(
    args: ServeArgs,
    global: &GlobalOpts,
    output: &OutputContext,
) -> Result<(), CliError> {
    logging::init(output, args.log_level.as_deref())?;

    let config = load_config(global.config.as_deref())?;
    let config = apply_serve_overrides(config, &args);

    let client = HttpUpstreamClient::new(&config.upstream)?;
    let route_prefix = config.gateway.route_prefix.clone();
    let state = GatewayState::new(Arc::new(client), config.gateway);
    let app = build_router(state)?;

    let bind_addr = config.server.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| CliError::Bind {
            addr: bind_addr.clone(),
            source: e,
        })?;
    let local_addr = listener.local_addr().map_err(|e| CliError::Bind {
        addr: bind_addr,
        source: e,
    })?;

    tracing::info!(
        addr = %local_addr,
        recipe_upstream = %config.upstream.recipe_base_url,
        review_upstream = %config.upstream.review_base_url,
        "recipe gateway listening"
    );
    output.status(&format!("GraphQL endpoint: http://{local_addr}{route_prefix}"));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CliError::Server {
            addr: local_addr,
            source: e,
        })?;

    tracing::info!("recipe gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received, draining connections"),
        Err(e) => {
            // Without a signal handler the server runs until killed.
            tracing::error!("failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    }
}
