#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

//! Dynamic Leaflet loader and the [`MapEngine`] binding over it.
//!
//! Leaflet is not compiled in. The stylesheet and script are injected into
//! `<head>` on first use, and the runtime `L` namespace is driven through
//! `js_sys::Reflect`, the same way a plain page would consume the library.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, Document, HtmlElement, HtmlLinkElement, HtmlScriptElement};

use crate::engine::{CameraView, LoadError, MapEngine, MarkerSpec, TileLayerSpec};

const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

const STYLESHEET_ELEMENT_ID: &str = "leaflet-css";
const SCRIPT_ELEMENT_ID: &str = "leaflet-js";

thread_local! {
    static ACTIVE_MAP: RefCell<Option<Rc<LeafletEngine>>> = const { RefCell::new(None) };
}

/// Injects the Leaflet stylesheet and script once and resolves when the `L`
/// global is callable. Later calls return immediately.
pub async fn load() -> Result<(), LoadError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(LoadError::NoDocument)?;
    ensure_stylesheet(&document)?;
    ensure_script(&document).await
}

/// Creates a map over `container`, makes it the active instance, and tears
/// down whichever instance was active before.
pub fn mount(container: &HtmlElement, initial: CameraView) -> Result<Rc<LeafletEngine>, LoadError> {
    unmount();
    let leaflet = leaflet_global().ok_or(LoadError::MissingGlobal)?;
    let engine = LeafletEngine::create(leaflet, container, initial).map_err(|error| {
        web_sys::console::warn_1(&error);
        LoadError::EngineInit
    })?;
    let engine = Rc::new(engine);
    ACTIVE_MAP.with(|slot| {
        *slot.borrow_mut() = Some(Rc::clone(&engine));
    });
    Ok(engine)
}

pub fn active() -> Option<Rc<LeafletEngine>> {
    ACTIVE_MAP.with(|slot| slot.borrow().clone())
}

/// Removes the active map from the page and drops its marker callbacks. The
/// injected stylesheet and script stay so a remount does not refetch them.
pub fn unmount() {
    ACTIVE_MAP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(engine) = slot.take() {
            engine.dispose();
        }
    });
}

fn ensure_stylesheet(document: &Document) -> Result<(), LoadError> {
    if document.get_element_by_id(STYLESHEET_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or(LoadError::NoDocument)?;
    let link: HtmlLinkElement = document
        .create_element("link")
        .ok()
        .and_then(|element| element.dyn_into().ok())
        .ok_or(LoadError::NoDocument)?;
    link.set_id(STYLESHEET_ELEMENT_ID);
    link.set_rel("stylesheet");
    link.set_href(LEAFLET_CSS_URL);
    head.append_child(&link).map_err(|_| LoadError::NoDocument)?;
    Ok(())
}

async fn ensure_script(document: &Document) -> Result<(), LoadError> {
    if leaflet_global().is_some() {
        return Ok(());
    }

    let script = match document.get_element_by_id(SCRIPT_ELEMENT_ID) {
        Some(existing) => existing
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| LoadError::ScriptFailed)?,
        None => {
            let head = document.head().ok_or(LoadError::NoDocument)?;
            let script: HtmlScriptElement = document
                .create_element("script")
                .ok()
                .and_then(|element| element.dyn_into().ok())
                .ok_or(LoadError::NoDocument)?;
            script.set_id(SCRIPT_ELEMENT_ID);
            script.set_src(LEAFLET_JS_URL);
            script.set_async(true);
            head.append_child(&script)
                .map_err(|_| LoadError::NoDocument)?;
            script
        }
    };

    // The promise settles off the tag's own load/error events, so a caller
    // that finds the tag already in flight waits on the same fetch instead
    // of appending a duplicate.
    let settled = Promise::new(&mut |resolve, reject| {
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        script
            .add_event_listener_with_callback_and_add_event_listener_options(
                "load", &resolve, &options,
            )
            .ok();
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        script
            .add_event_listener_with_callback_and_add_event_listener_options(
                "error", &reject, &options,
            )
            .ok();
    });

    if JsFuture::from(settled).await.is_err() {
        // Drop the dead tag so a later mount can retry the fetch.
        script.remove();
        return Err(LoadError::ScriptFailed);
    }
    if leaflet_global().is_none() {
        script.remove();
        return Err(LoadError::MissingGlobal);
    }
    Ok(())
}

fn leaflet_global() -> Option<JsValue> {
    let window = web_sys::window()?;
    let leaflet = Reflect::get(window.as_ref(), &JsValue::from_str("L")).ok()?;
    if leaflet.is_undefined() || leaflet.is_null() {
        None
    } else {
        Some(leaflet)
    }
}

/// Calls `target.method(args...)` through `Reflect`. Leaflet only exists as
/// a runtime global, so there are no compiled-in bindings to go through.
fn js_call(target: &JsValue, method: &str, args: &[&JsValue]) -> Result<JsValue, JsValue> {
    let function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into::<Function>()?;
    match args {
        [] => function.call0(target),
        [a] => function.call1(target, a),
        [a, b] => function.call2(target, a, b),
        [a, b, c] => function.call3(target, a, b, c),
        _ => {
            let packed = Array::new();
            for arg in args {
                packed.push(arg);
            }
            Reflect::apply(&function, target, &packed)
        }
    }
}

fn lat_lng(lat: f64, lng: f64) -> Array {
    Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerOptions<'a> {
    attribution: &'a str,
    max_zoom: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DivIconOptions<'a> {
    html: &'a str,
    class_name: &'a str,
    icon_size: [u32; 2],
    icon_anchor: [u32; 2],
}

#[derive(Serialize)]
struct TooltipOptions<'a> {
    permanent: bool,
    direction: &'a str,
}

#[derive(Serialize)]
struct FlyToOptions {
    duration: f64,
}

/// One live `L.Map` instance plus the marker click closures that must stay
/// alive for as long as their JS registrations do.
pub struct LeafletEngine {
    leaflet: JsValue,
    map: JsValue,
    click_handlers: RefCell<Vec<Closure<dyn FnMut()>>>,
}

impl LeafletEngine {
    fn create(leaflet: JsValue, container: &HtmlElement, initial: CameraView) -> Result<Self, JsValue> {
        let map = js_call(&leaflet, "map", &[container.as_ref()])?;
        js_call(
            &map,
            "setView",
            &[
                lat_lng(initial.lat, initial.lng).as_ref(),
                &JsValue::from_f64(initial.zoom),
            ],
        )?;
        Ok(Self {
            map,
            leaflet,
            click_handlers: RefCell::new(Vec::new()),
        })
    }

    fn dispose(&self) {
        js_call(&self.map, "remove", &[]).ok();
        self.click_handlers.borrow_mut().clear();
    }

    fn try_add_tile_layer(&self, layer: &TileLayerSpec) -> Result<(), JsValue> {
        let options = serde_wasm_bindgen::to_value(&TileLayerOptions {
            attribution: layer.attribution,
            max_zoom: layer.max_zoom,
        })?;
        let tiles = js_call(
            &self.leaflet,
            "tileLayer",
            &[&JsValue::from_str(layer.url_template), &options],
        )?;
        js_call(&tiles, "addTo", &[&self.map])?;
        Ok(())
    }

    fn try_add_marker(&self, marker: &MarkerSpec, on_click: Box<dyn Fn()>) -> Result<(), JsValue> {
        let icon_options = serde_wasm_bindgen::to_value(&DivIconOptions {
            html: &marker.icon_html,
            class_name: "",
            icon_size: [marker.icon_size.0, marker.icon_size.1],
            icon_anchor: [marker.icon_anchor.0, marker.icon_anchor.1],
        })?;
        let icon = js_call(&self.leaflet, "divIcon", &[&icon_options])?;
        let options = Object::new();
        Reflect::set(options.as_ref(), &JsValue::from_str("icon"), &icon)?;
        let pin = js_call(
            &self.leaflet,
            "marker",
            &[
                lat_lng(marker.lat, marker.lng).as_ref(),
                options.as_ref(),
            ],
        )?;
        js_call(&pin, "addTo", &[&self.map])?;
        let tooltip_options = serde_wasm_bindgen::to_value(&TooltipOptions {
            permanent: false,
            direction: "top",
        })?;
        js_call(
            &pin,
            "bindTooltip",
            &[&JsValue::from_str(marker.tooltip), &tooltip_options],
        )?;
        let handler = Closure::<dyn FnMut()>::new(move || on_click());
        js_call(&pin, "on", &[&JsValue::from_str("click"), handler.as_ref()])?;
        self.click_handlers.borrow_mut().push(handler);
        Ok(())
    }

    fn try_fly_to(&self, target: CameraView, duration_secs: f64) -> Result<(), JsValue> {
        let options = serde_wasm_bindgen::to_value(&FlyToOptions {
            duration: duration_secs,
        })?;
        js_call(
            &self.map,
            "flyTo",
            &[
                lat_lng(target.lat, target.lng).as_ref(),
                &JsValue::from_f64(target.zoom),
                &options,
            ],
        )?;
        Ok(())
    }
}

impl MapEngine for LeafletEngine {
    fn add_tile_layer(&self, layer: &TileLayerSpec) {
        if let Err(error) = self.try_add_tile_layer(layer) {
            web_sys::console::warn_1(&error);
        }
    }

    fn add_marker(&self, marker: &MarkerSpec, on_click: Box<dyn Fn()>) {
        if let Err(error) = self.try_add_marker(marker, on_click) {
            web_sys::console::warn_1(&error);
        }
    }

    fn fly_to(&self, target: CameraView, duration_secs: f64) {
        if let Err(error) = self.try_fly_to(target, duration_secs) {
            web_sys::console::warn_1(&error);
        }
    }
}
