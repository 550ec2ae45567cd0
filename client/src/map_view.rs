//! Full-viewport map pane.
//!
//! Boots the Leaflet engine over its `<div>` exactly once, pins every
//! registry stop, and keeps the camera following the selection.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlElement;

use voyage_shared::{LOCATIONS, Location};

use crate::app::Selected;
use crate::engine::{CameraView, MapEngine, MapStatus, MarkerSpec, TileLayerSpec};
use crate::leaflet;
use crate::markers::{ICON_ANCHOR, ICON_SIZE, pin_icon_html};

/// Opening camera: the whole of Europe in one frame.
pub const EUROPE_VIEW: CameraView = CameraView {
    lat: 51.5,
    lng: 10.5,
    zoom: 3.0,
};

/// Zoom level a stop is framed at after its pin is clicked.
pub const FOCUS_ZOOM: f64 = 8.0;

/// Seconds the fly-to animation takes.
pub const FLY_TO_SECONDS: f64 = 1.5;

/// Light basemap so the colored pins stay legible at every zoom.
pub const BASE_TILES: TileLayerSpec = TileLayerSpec {
    url_template: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
    attribution: "© <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors © <a href=\"https://carto.com/attributions\">CARTO</a>",
    max_zoom: 19.0,
};

/// Claims the single bootstrap slot. Only the first caller gets `true`, no
/// matter how often the mount effect re-fires.
fn begin_bootstrap(started: &Cell<bool>) -> bool {
    if started.get() {
        return false;
    }
    started.set(true);
    true
}

/// Camera target for one selected stop.
pub fn focus_camera(location: &Location) -> CameraView {
    CameraView {
        lat: location.lat,
        lng: location.lng,
        zoom: FOCUS_ZOOM,
    }
}

/// Pins every registry stop onto the engine, in registry order. Clicks are
/// reported through `on_select` with the stop's one stable address.
pub fn populate_markers<E: MapEngine>(
    engine: &E,
    on_select: impl Fn(&'static Location) + Clone + 'static,
) {
    for (position, location) in LOCATIONS.iter().enumerate() {
        let spec = MarkerSpec {
            lat: location.lat,
            lng: location.lng,
            icon_html: pin_icon_html(position),
            icon_size: ICON_SIZE,
            icon_anchor: ICON_ANCHOR,
            tooltip: location.name,
        };
        let on_select = on_select.clone();
        engine.add_marker(&spec, Box::new(move || on_select(location)));
    }
}

#[component]
pub fn MapView() -> impl IntoView {
    let Selected(selected) = expect_context();
    let map_status: RwSignal<MapStatus> = expect_context();

    let container_ref = NodeRef::<leptos::html::Div>::new();
    let boot_started = Rc::new(Cell::new(false));

    // Boot the engine once the container exists in the DOM.
    Effect::new({
        let boot_started = boot_started.clone();
        move || {
            let Some(container_el) = container_ref.get() else {
                return;
            };
            if !begin_bootstrap(&boot_started) {
                return;
            }
            let container: HtmlElement = container_el.into();

            wasm_bindgen_futures::spawn_local(async move {
                let loaded = leaflet::load().await;
                // The component may have unmounted while the script fetched.
                if !container.is_connected() {
                    return;
                }
                match loaded.and_then(|()| leaflet::mount(&container, EUROPE_VIEW)) {
                    Ok(engine) => {
                        engine.add_tile_layer(&BASE_TILES);
                        populate_markers(&*engine, move |location| {
                            selected.set(Some(location));
                        });
                        map_status.set(MapStatus::Ready);
                    }
                    Err(error) => {
                        web_sys::console::warn_1(&format!("Map boot failed: {error}").into());
                        map_status.set(MapStatus::Failed);
                    }
                }
            });
        }
    });

    // Camera follows selection; selection never waits on the camera.
    Effect::new(move || {
        let Some(location) = selected.get() else {
            return;
        };
        if let Some(engine) = leaflet::active() {
            engine.fly_to(focus_camera(location), FLY_TO_SECONDS);
        }
    });

    on_cleanup(|| {
        leaflet::unmount();
    });

    view! { <div node_ref=container_ref style="width: 100%; height: 100%;" /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingEngine {
        tile_layers: RefCell<Vec<&'static str>>,
        markers: RefCell<Vec<MarkerSpec>>,
        click_handlers: RefCell<Vec<Box<dyn Fn()>>>,
        flights: RefCell<Vec<(CameraView, f64)>>,
    }

    impl MapEngine for RecordingEngine {
        fn add_tile_layer(&self, layer: &TileLayerSpec) {
            self.tile_layers.borrow_mut().push(layer.url_template);
        }

        fn add_marker(&self, marker: &MarkerSpec, on_click: Box<dyn Fn()>) {
            self.markers.borrow_mut().push(marker.clone());
            self.click_handlers.borrow_mut().push(on_click);
        }

        fn fly_to(&self, target: CameraView, duration_secs: f64) {
            self.flights.borrow_mut().push((target, duration_secs));
        }
    }

    #[test]
    fn every_stop_gets_a_marker_in_registry_order() {
        let engine = RecordingEngine::default();
        populate_markers(&engine, |_| {});
        let markers = engine.markers.borrow();
        assert_eq!(markers.len(), LOCATIONS.len());
        for (position, marker) in markers.iter().enumerate() {
            assert_eq!(marker.lat, LOCATIONS[position].lat);
            assert_eq!(marker.lng, LOCATIONS[position].lng);
            assert_eq!(marker.tooltip, LOCATIONS[position].name);
            assert_eq!(marker.icon_size, ICON_SIZE);
            assert_eq!(marker.icon_anchor, ICON_ANCHOR);
        }
    }

    #[test]
    fn marker_icons_carry_position_derived_pins() {
        let engine = RecordingEngine::default();
        populate_markers(&engine, |_| {});
        let markers = engine.markers.borrow();
        assert!(markers[0].icon_html.contains("#3b82f6"));
        assert!(markers[0].icon_html.contains(">1</div>"));
        // Position 1 is the emerald-accented stop; its pin is still orange.
        assert!(markers[1].icon_html.contains("#f97316"));
        assert!(markers[1].icon_html.contains(">2</div>"));
    }

    #[test]
    fn clicking_a_pin_reports_that_exact_registry_entry() {
        let engine = RecordingEngine::default();
        let picked: Rc<RefCell<Vec<&'static Location>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&picked);
        populate_markers(&engine, move |location| sink.borrow_mut().push(location));

        engine.click_handlers.borrow()[2]();
        engine.click_handlers.borrow()[2]();
        engine.click_handlers.borrow()[7]();

        let picked = picked.borrow();
        assert_eq!(picked.len(), 3);
        assert!(std::ptr::eq(picked[0], &LOCATIONS[2]));
        assert!(std::ptr::eq(picked[1], &LOCATIONS[2]));
        assert!(std::ptr::eq(picked[2], &LOCATIONS[7]));
    }

    #[test]
    fn opening_camera_frames_all_of_europe() {
        assert_eq!(
            EUROPE_VIEW,
            CameraView {
                lat: 51.5,
                lng: 10.5,
                zoom: 3.0,
            }
        );
        assert_eq!(BASE_TILES.max_zoom, 19.0);
        assert!(BASE_TILES.attribution.contains("OpenStreetMap"));
        assert!(BASE_TILES.attribution.contains("CARTO"));
    }

    #[test]
    fn focus_flight_lands_on_the_stop_at_fixed_zoom() {
        let camera = focus_camera(&LOCATIONS[4]);
        assert_eq!(camera.lat, LOCATIONS[4].lat);
        assert_eq!(camera.lng, LOCATIONS[4].lng);
        assert_eq!(camera.zoom, FOCUS_ZOOM);
        assert_eq!(FLY_TO_SECONDS, 1.5);
    }

    #[test]
    fn bootstrap_claim_succeeds_once() {
        let started = Cell::new(false);
        assert!(begin_bootstrap(&started));
        assert!(!begin_bootstrap(&started));
        assert!(!begin_bootstrap(&started));
    }

    #[test]
    fn clicking_copenhagen_selects_it_and_flies_there() {
        let engine = RecordingEngine::default();
        let selected: Rc<RefCell<Option<&'static Location>>> = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&selected);
        populate_markers(&engine, move |location| *sink.borrow_mut() = Some(location));

        engine.click_handlers.borrow()[0]();
        let chosen = selected.borrow().expect("click selects a stop");
        assert!(std::ptr::eq(chosen, &LOCATIONS[0]));
        assert_eq!(chosen.name, "Copenhagen, Denmark");

        engine.fly_to(focus_camera(chosen), FLY_TO_SECONDS);
        {
            let flights = engine.flights.borrow();
            assert_eq!(
                flights[0].0,
                CameraView {
                    lat: 55.6761,
                    lng: 12.5683,
                    zoom: 8.0,
                }
            );
            assert_eq!(flights[0].1, 1.5);
        }

        // Closing the panel empties the selection without another flight.
        *selected.borrow_mut() = None;
        assert!(selected.borrow().is_none());
        assert_eq!(engine.flights.borrow().len(), 1);
    }
}
