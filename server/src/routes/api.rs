use std::sync::Arc;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use voyage_shared::LOCATIONS;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "locations": LOCATIONS.len(),
        "registry_bytes": state.locations_json.len(),
    }))
}

/// Serve the registry JSON serialized once at startup. The only
/// per-request work is the conditional-request check.
pub async fn get_locations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let etag = Arc::clone(&state.locations_etag);

    if if_none_match_matches(&headers, &etag) {
        return not_modified_response("public, max-age=3600", Some(&etag));
    }

    json_bytes_response(
        (*state.locations_json).clone(),
        "public, max-age=3600",
        Some(&etag),
    )
}

fn json_bytes_response(body: Bytes, cache_control: &'static str, etag: Option<&str>) -> Response {
    let mut response = Response::new(Body::from(body));
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );
    if let Some(etag) = etag
        && let Ok(etag_header) = HeaderValue::from_str(etag)
    {
        headers.insert(header::ETAG, etag_header);
    }
    response
}

fn not_modified_response(cache_control: &'static str, etag: Option<&str>) -> Response {
    let mut response = StatusCode::NOT_MODIFIED.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );
    if let Some(etag) = etag
        && let Ok(etag_header) = HeaderValue::from_str(etag)
    {
        headers.insert(header::ETAG, etag_header);
    }
    response
}

fn normalize_etag(candidate: &str) -> &str {
    candidate.strip_prefix("W/").unwrap_or(candidate).trim()
}

fn if_none_match_matches(headers: &HeaderMap, etag: &str) -> bool {
    let Some(value) = headers.get(header::IF_NONE_MATCH) else {
        return false;
    };
    let Ok(raw) = value.to_str() else {
        return false;
    };

    raw.split(',').any(|candidate| {
        let candidate = candidate.trim();
        candidate == "*" || normalize_etag(candidate) == normalize_etag(etag)
    })
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::if_none_match_matches;
    use crate::state::AppState;
    use voyage_shared::LOCATIONS;

    async fn spawn_test_server(state: AppState) -> (SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let app = crate::app::build_app(state);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test app");
        });
        (addr, handle)
    }

    #[test]
    fn if_none_match_supports_weak_and_multiple_etags() {
        let mut headers = axum::http::HeaderMap::new();
        headers.insert(
            axum::http::header::IF_NONE_MATCH,
            axum::http::HeaderValue::from_static("W/\"other\", \"locations-deadbeef\""),
        );
        assert!(if_none_match_matches(&headers, "\"locations-deadbeef\""));
        assert!(!if_none_match_matches(&headers, "\"locations-00000000\""));
    }

    #[tokio::test]
    async fn health_reports_registry_size() {
        let (addr, server_handle) = spawn_test_server(AppState::new()).await;
        let base_url = format!("http://{addr}");

        let health = reqwest::Client::new()
            .get(format!("{base_url}/api/health"))
            .send()
            .await
            .expect("health request")
            .error_for_status()
            .expect("health status")
            .json::<serde_json::Value>()
            .await
            .expect("parse health");

        assert_eq!(health.get("status").and_then(|v| v.as_str()), Some("ok"));
        assert_eq!(
            health.get("locations").and_then(|v| v.as_u64()),
            Some(LOCATIONS.len() as u64)
        );

        server_handle.abort();
        let _ = server_handle.await;
    }

    #[tokio::test]
    async fn locations_payload_matches_compiled_registry() {
        let (addr, server_handle) = spawn_test_server(AppState::new()).await;
        let base_url = format!("http://{addr}");

        let payload = reqwest::Client::new()
            .get(format!("{base_url}/api/locations"))
            .send()
            .await
            .expect("locations request")
            .error_for_status()
            .expect("locations status")
            .json::<serde_json::Value>()
            .await
            .expect("parse locations");

        let expected =
            serde_json::to_value(LOCATIONS).expect("registry should serialize to JSON");
        assert_eq!(payload, expected);

        let entries = payload.as_array().expect("payload should be an array");
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0].get("id").and_then(|v| v.as_u64()), Some(1));
        assert_eq!(
            entries[0].get("name").and_then(|v| v.as_str()),
            Some("Copenhagen, Denmark")
        );
        assert_eq!(
            entries[0].get("photo").and_then(|v| v.as_str()),
            Some("/copenhagen.jpg")
        );

        server_handle.abort();
        let _ = server_handle.await;
    }

    #[tokio::test]
    async fn locations_returns_not_modified_when_etag_matches() {
        let (addr, server_handle) = spawn_test_server(AppState::new()).await;
        let base_url = format!("http://{addr}");
        let client = reqwest::Client::new();

        let first = client
            .get(format!("{base_url}/api/locations"))
            .send()
            .await
            .expect("locations request should succeed");
        let first_status = first.status();
        let first_etag = first
            .headers()
            .get(reqwest::header::ETAG)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .expect("etag header should be present");

        assert_eq!(first_status, reqwest::StatusCode::OK);

        let second = client
            .get(format!("{base_url}/api/locations"))
            .header(reqwest::header::IF_NONE_MATCH, first_etag)
            .send()
            .await
            .expect("conditional locations request should succeed");

        assert_eq!(second.status(), reqwest::StatusCode::NOT_MODIFIED);
        assert_eq!(
            second
                .headers()
                .get(reqwest::header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("public, max-age=3600")
        );

        server_handle.abort();
        let _ = server_handle.await;
    }
}
