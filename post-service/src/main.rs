use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use post_service::{FixedPosts, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "post_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();
    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("backend server running at http://{addr}");
    match config.allowed_origin.as_deref() {
        Some(origin) => tracing::info!("allowing requests from origin: {origin}"),
        None => tracing::warn!(
            "allowed origin: (not configured); cross-origin requests will be refused"
        ),
    }

    post_service::run(
        listener,
        Arc::new(FixedPosts::seed()),
        config.allowed_origin.as_deref(),
    )
    .await
}
