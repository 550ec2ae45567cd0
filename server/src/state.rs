use std::sync::Arc;

use bytes::Bytes;
use voyage_shared::LOCATIONS;

/// Shared handler state: the registry JSON, serialized exactly once at
/// startup, plus its content ETag. The registry is compiled in, so neither
/// value ever changes while the server runs.
#[derive(Clone)]
pub struct AppState {
    pub locations_json: Arc<Bytes>,
    pub locations_etag: Arc<str>,
}

impl AppState {
    pub fn new() -> Self {
        let payload = serde_json::to_vec(&LOCATIONS)
            .map(Bytes::from)
            .unwrap_or_else(|_| Bytes::from_static(b"[]"));
        let etag = format!("\"locations-{:08x}\"", crc32fast::hash(&payload));

        Self {
            locations_json: Arc::new(payload),
            locations_etag: Arc::from(etag.as_str()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;

    #[test]
    fn registry_payload_is_serialized_once_and_stable() {
        let first = AppState::new();
        let second = AppState::new();

        assert_eq!(first.locations_json, second.locations_json);
        assert_eq!(first.locations_etag, second.locations_etag);
        assert!(first.locations_etag.starts_with("\"locations-"));
    }

    #[test]
    fn registry_payload_is_a_json_array_of_all_stops() {
        let state = AppState::new();
        let parsed: serde_json::Value =
            serde_json::from_slice(&state.locations_json).expect("payload should be valid JSON");

        let entries = parsed.as_array().expect("payload should be an array");
        assert_eq!(entries.len(), voyage_shared::LOCATIONS.len());
        assert_eq!(
            entries[0].get("name").and_then(|v| v.as_str()),
            Some("Copenhagen, Denmark")
        );
        assert_eq!(
            entries[1].get("accent").and_then(|v| v.as_str()),
            Some("emerald")
        );
    }
}
