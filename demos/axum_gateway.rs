use std::net::SocketAddr;

use axum::{
    Router,
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use origin_gate::{CorsDecision, Headers, RequestContext, constants::header, gate};

#[tokio::main]
async fn main() {
    let app = Router::new()
        .route("/greet", get(greet))
        .route_layer(axum::middleware::from_fn(cors_middleware));

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    println!("axum gateway demo on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

async fn greet() -> impl IntoResponse {
    Html("<h1>Hello</h1><p>Call this endpoint from an allow-listed frontend to see the gate in action.</p>")
}

async fn cors_middleware(request: Request, next: Next) -> Response {
    let method = request.method().as_str().to_string();
    let origin = header_value(request.headers(), header::ORIGIN);
    let request_headers = header_value(request.headers(), header::ACCESS_CONTROL_REQUEST_HEADERS);

    let ctx = RequestContext {
        method: &method,
        origin: origin.as_deref(),
        access_control_request_headers: request_headers.as_deref(),
    };

    match gate().check(&ctx) {
        CorsDecision::Preflight(outcome) if outcome.end_response => {
            let status =
                StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::NO_CONTENT);
            let mut response = status.into_response();
            apply_headers(response.headers_mut(), &outcome.headers);
            response
        }
        CorsDecision::Preflight(outcome) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &outcome.headers);
            response
        }
        CorsDecision::Simple(outcome) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &outcome.headers);
            response
        }
        CorsDecision::Denied => next.run(request).await,
    }
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(name, value);
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
