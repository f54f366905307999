//! Live fetch tests: the viewer core driven over real HTTP against the
//! actual post service.
//!
//! # Design
//! Starts the service on a random port, then walks the viewer through its
//! states using ureq as the transport, the same way the host binary does.
//! Failure paths get dedicated fixtures: a dropped listener for connection
//! refused and a stub router for server-side failures.

use std::net::SocketAddr;
use std::sync::Arc;

use blog_core::{
    render, FetchError, HttpMethod, HttpRequest, HttpResponse, PostViewer, TransportError,
    ViewState,
};
use post_service::FixedPosts;

/// Execute an `HttpRequest` using ureq, mirroring the post-viewer host.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// handle status interpretation.
fn execute(request: &HttpRequest) -> Result<HttpResponse, TransportError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut builder = match request.method {
        HttpMethod::Get => agent.get(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let mut response = builder.call().map_err(|e| match e {
        ureq::Error::Io(_)
        | ureq::Error::Timeout(_)
        | ureq::Error::ConnectionFailed
        | ureq::Error::HostNotFound => TransportError::NoResponse,
        other => TransportError::Setup(other.to_string()),
    })?;

    let status = response.status();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    })
}

/// Serve `router` on a random port from a background thread.
fn spawn_server(router: axum::Router) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, router).await
        })
        .unwrap();
    });
    addr
}

fn spawn_service(repo: FixedPosts) -> SocketAddr {
    spawn_server(post_service::app(Arc::new(repo), None))
}

#[test]
fn viewer_loads_posts_from_live_service() {
    let addr = spawn_service(FixedPosts::seed());
    let base = format!("http://{addr}");

    let mut viewer = PostViewer::new();
    let (ticket, request) = viewer.mount(Some(&base)).unwrap();
    assert_eq!(*viewer.state(), ViewState::Loading);

    assert!(viewer.complete(ticket, execute(&request)));

    let posts = viewer.displayed_posts();
    let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(posts.iter().all(|p| !p.title.is_empty()));

    // The rendered view carries the list in service order.
    let out = render(&viewer);
    let first = out.find(&posts[0].title).unwrap();
    let last = out.find(&posts[2].title).unwrap();
    assert!(first < last);
}

#[test]
fn missing_config_fails_without_touching_the_network() {
    let mut viewer = PostViewer::new();
    assert!(viewer.mount(None).is_none(), "no request may be built");
    assert_eq!(*viewer.state(), ViewState::Failed(FetchError::ConfigMissing));
    assert!(render(&viewer).contains("API_URL is not configured"));
}

#[test]
fn connection_refused_is_reported_as_no_response() {
    // Bind then immediately drop to obtain a port nobody is listening on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let mut viewer = PostViewer::new();
    let (ticket, request) = viewer.mount(Some(&format!("http://{addr}"))).unwrap();
    assert!(viewer.complete(ticket, execute(&request)));

    assert_eq!(*viewer.state(), ViewState::Failed(FetchError::NoResponse));
    assert!(viewer.displayed_posts().is_empty());
    assert!(render(&viewer).contains("No response received"));
}

#[test]
fn server_failure_surfaces_status_and_text() {
    use axum::{http::StatusCode, routing::get, Router};

    let router = Router::new()
        .route("/api/posts", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }));
    let addr = spawn_server(router);

    let mut viewer = PostViewer::new();
    let (ticket, request) = viewer.mount(Some(&format!("http://{addr}"))).unwrap();
    assert!(viewer.complete(ticket, execute(&request)));

    match viewer.state() {
        ViewState::Failed(err @ FetchError::Server { status, .. }) => {
            assert_eq!(*status, 500);
            assert!(err.to_string().contains("500"));
        }
        other => panic!("expected server failure, got {other:?}"),
    }
    assert!(viewer.displayed_posts().is_empty());
}

#[test]
fn empty_service_renders_the_placeholder() {
    let addr = spawn_service(FixedPosts::new(Vec::new()));

    let mut viewer = PostViewer::new();
    let (ticket, request) = viewer.mount(Some(&format!("http://{addr}"))).unwrap();
    assert!(viewer.complete(ticket, execute(&request)));

    assert_eq!(*viewer.state(), ViewState::Loaded(Vec::new()));
    assert!(render(&viewer).contains("No posts to display."));
}
