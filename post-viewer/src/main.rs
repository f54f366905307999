mod config;
mod transport;

use blog_core::{render, PostViewer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ViewerConfig;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "post_viewer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ViewerConfig::from_env();

    let mut viewer = PostViewer::new();
    if let Some((ticket, request)) = viewer.mount(config.api_url.as_deref()) {
        tracing::info!("connecting to backend API at {}", request.url);
        print!("{}", render(&viewer));

        let outcome = transport::execute(&request);
        viewer.complete(ticket, outcome);
    }

    // Fetch failures end up here as display state, never as a crash.
    print!("{}", render(&viewer));
}
