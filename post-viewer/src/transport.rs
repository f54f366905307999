//! ureq-backed executor for core-built requests.

use blog_core::{HttpMethod, HttpRequest, HttpResponse, TransportError};

/// Execute an `HttpRequest` and return the outcome for `PostViewer::complete`.
///
/// Disables ureq's status-code-as-error behavior so non-2xx responses come
/// back as data and the core decides what a bad status means. Transport
/// errors where the request went out but nothing came back map to
/// `NoResponse`; failures before that are setup errors.
pub fn execute(request: &HttpRequest) -> Result<HttpResponse, TransportError> {
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

    let mut response = builder.call().map_err(map_transport_error)?;
    let status = response.status();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(map_transport_error)?;

    Ok(HttpResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    })
}

fn map_transport_error(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Io(_)
        | ureq::Error::Timeout(_)
        | ureq::Error::ConnectionFailed
        | ureq::Error::HostNotFound => TransportError::NoResponse,
        other => TransportError::Setup(other.to_string()),
    }
}
