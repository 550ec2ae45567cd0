//! Application shell: shared state, page chrome, and panel dispatch.

use leptos::prelude::*;

use voyage_shared::Location;

use crate::engine::MapStatus;
use crate::map_view::MapView;
use crate::panels::{DetailPanel, IdleHintPanel, MapUnavailable};

/// Wrapper so the selection gets its own context type. The payload is a
/// reference into the compiled-in registry, never a copy, which lets every
/// consumer compare entries by address.
#[derive(Clone, Copy)]
pub struct Selected(pub RwSignal<Option<&'static Location>>);

#[component]
pub fn App() -> impl IntoView {
    let selected: RwSignal<Option<&'static Location>> = RwSignal::new(None);
    let map_status: RwSignal<MapStatus> = RwSignal::new(MapStatus::Loading);

    provide_context(Selected(selected));
    provide_context(map_status);

    view! {
        <div style="width: 100%; height: 100%; position: relative; overflow: hidden; background: linear-gradient(135deg, #eff6ff, #faf5ff, #fdf2f8);">
            <MapView />
            <Header />
            {move || {
                match map_status.get() {
                    MapStatus::Loading => view! {
                        <div style="position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; pointer-events: none;">
                            <p style="color: #9ca3af; font-size: 0.875rem; letter-spacing: 0.05em;">
                                "Loading map\u{2026}"
                            </p>
                        </div>
                    }
                        .into_any(),
                    MapStatus::Failed => view! { <MapUnavailable /> }.into_any(),
                    MapStatus::Ready => ().into_any(),
                }
            }}
            {move || {
                if selected.get().is_some() {
                    view! { <DetailPanel /> }.into_any()
                } else {
                    view! { <IdleHintPanel /> }.into_any()
                }
            }}
        </div>
    }
}

/// Title banner pinned across the top of the page.
#[component]
fn Header() -> impl IntoView {
    view! {
        <div style="position: absolute; top: 0; left: 0; right: 0; z-index: 1000; background: linear-gradient(to right, rgba(59,130,246,0.6), rgba(168,85,247,0.6), rgba(236,72,153,0.6)); backdrop-filter: blur(16px); border-bottom: 1px solid rgba(255,255,255,0.2); box-shadow: 0 4px 14px rgba(0,0,0,0.15);">
            <div style="max-width: 1100px; margin: 0 auto; padding: 24px;">
                <h1 style="font-size: 2.25rem; font-weight: 700; letter-spacing: -0.02em; margin: 0; color: white; text-shadow: 0 2px 6px rgba(0,0,0,0.3);">
                    "Urban Journeys Through Europe"
                </h1>
                <p style="color: rgba(255,255,255,0.9); font-size: 1rem; margin: 8px 0 0 0; line-height: 1.6; font-weight: 500;">
                    "Exploring the hidden stories and design principles that make cities come alive"
                </p>
            </div>
        </div>
    }
}
