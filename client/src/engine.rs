//! Seam between the UI and whichever mapping library drives the viewport.
//!
//! Components talk to [`MapEngine`] only. The concrete Leaflet binding in
//! [`crate::leaflet`] implements it over `wasm_bindgen`, and tests substitute
//! a recording fake, so marker wiring stays checkable without a browser.

use std::fmt;

/// Camera position used both for the initial viewport and for recentering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub lat: f64,
    pub lng: f64,
    pub zoom: f64,
}

/// Base tile layer the engine attaches before any markers go down.
#[derive(Debug, Clone, Copy)]
pub struct TileLayerSpec {
    pub url_template: &'static str,
    pub attribution: &'static str,
    pub max_zoom: f64,
}

/// One pinned marker: position, custom icon markup, and hover tooltip.
#[derive(Debug, Clone)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lng: f64,
    pub icon_html: String,
    pub icon_size: (u32, u32),
    /// Icon-space point placed on the coordinate, so the pin tip rather
    /// than the icon center touches the spot.
    pub icon_anchor: (u32, u32),
    pub tooltip: &'static str,
}

/// Everything the page needs from a map: one tile layer, clickable markers,
/// and animated recentering. Construction with an initial [`CameraView`] is
/// up to the implementation.
pub trait MapEngine {
    fn add_tile_layer(&self, layer: &TileLayerSpec);
    fn add_marker(&self, marker: &MarkerSpec, on_click: Box<dyn Fn()>);
    fn fly_to(&self, target: CameraView, duration_secs: f64);
}

/// Why the mapping library never became usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// No `window`/`document` to inject into.
    NoDocument,
    /// The library script tag fired its error event.
    ScriptFailed,
    /// The script loaded but did not define the expected global.
    MissingGlobal,
    /// The global was there but constructing the map over the container failed.
    EngineInit,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NoDocument => write!(f, "document is unavailable"),
            LoadError::ScriptFailed => write!(f, "map library script failed to load"),
            LoadError::MissingGlobal => write!(f, "map library loaded without its global"),
            LoadError::EngineInit => write!(f, "map engine rejected initialization"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Lifecycle of the embedded map, from first paint to ready or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapStatus {
    Loading,
    Ready,
    Failed,
}
