use std::net::SocketAddr;

use axum::Router;

/// Runs an Axum router in either local development mode or Lambda runtime mode.
///
/// In debug builds (`#[cfg(debug_assertions)]`), the router is served on
/// `addr` using a standard Axum server that shuts down gracefully on
/// Ctrl+C or SIGTERM.
///
/// In release builds, the router is wrapped with the Lambda runtime adapter
/// and executed as a Lambda function; `addr` is not used.
///
/// # Errors
///
/// Returns an error if:
/// - The local server fails to bind to the address (debug mode)
/// - The Lambda runtime fails (release mode)
#[cfg_attr(not(debug_assertions), allow(unused_variables))]
pub async fn run_app(
    app: Router,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Starting local development server on http://{addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
    }

    #[cfg(not(debug_assertions))]
    {
        use lambda_http::tower;

        let app = tower::ServiceBuilder::new()
            .layer(axum_aws_lambda::LambdaLayer::default().trim_stage())
            .service(app);

        lambda_http::run(app)
            .await
            .map_err(|err| -> Box<dyn std::error::Error> { err })?;
    }

    Ok(())
}

#[cfg(debug_assertions)]
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::warn!("signal received, starting graceful shutdown");
}
