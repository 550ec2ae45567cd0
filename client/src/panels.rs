//! Overlay panels: the location detail card, the idle explore hint, and the
//! notice shown when the map engine never comes up.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use voyage_shared::{LOCATIONS, Location, stop_number};

use crate::app::Selected;

const PLACEHOLDER_PHOTO: &str = "/placeholder.svg";

/// Position-indicator glyph standing in for a pin icon.
const PIN_GLYPH: &str = "\u{2316}";

/// Photo to show for a stop. Entries without a path get the bundled
/// placeholder.
fn photo_source(location: &Location) -> &'static str {
    if location.photo.is_empty() {
        PLACEHOLDER_PHOTO
    } else {
        location.photo
    }
}

/// Badge copy for the top of the detail panel. The printed number is the
/// stop's registry position, not its id.
fn stop_badge(location: &Location) -> String {
    format!("Stop {} of {}", stop_number(location), LOCATIONS.len())
}

fn quoted(text: &str) -> String {
    format!("\"{text}\"")
}

/// Right-hand card with the photo, badge, and the three narrative blocks
/// for the selected stop.
#[component]
pub fn DetailPanel() -> impl IntoView {
    let Selected(selected) = expect_context();

    view! {
        {move || {
            let Some(location) = selected.get() else {
                return ().into_any();
            };
            let accent = location.accent.hex();
            view! {
                <div style="position: absolute; top: 128px; right: 24px; bottom: 24px; width: min(512px, calc(100vw - 48px)); z-index: 1000;">
                    <div style="height: 100%; display: flex; flex-direction: column; overflow: hidden; border-radius: 12px; border: 2px solid rgba(59,130,246,0.3); background: #ffffff; box-shadow: 0 25px 50px rgba(0,0,0,0.25);">
                        <div style="position: relative; width: 100%; height: 320px; flex-shrink: 0; overflow: hidden;">
                            <img
                                src=photo_source(location)
                                alt=location.name
                                style="width: 100%; height: 100%; object-fit: cover; display: block;"
                                on:error=move |event| {
                                    if let Some(img) = event
                                        .target()
                                        .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
                                    {
                                        if !img.src().ends_with(PLACEHOLDER_PHOTO) {
                                            img.set_src(PLACEHOLDER_PHOTO);
                                        }
                                    }
                                }
                            />
                            <div style="position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.7), rgba(0,0,0,0.3), transparent);" />
                            <div style="position: absolute; top: 16px; right: 16px;">
                                <div style=format!(
                                    "background-color: {accent}; color: white; padding: 8px 16px; border-radius: 9999px; font-size: 0.875rem; font-weight: 700; box-shadow: 0 4px 14px rgba(0,0,0,0.25);"
                                )>
                                    {stop_badge(location)}
                                </div>
                            </div>
                            <div style="position: absolute; bottom: 0; left: 0; right: 0; padding: 24px;">
                                <div style="display: flex; align-items: flex-start; justify-content: space-between;">
                                    <div>
                                        <div style="display: flex; align-items: center; gap: 8px; margin-bottom: 12px;">
                                            <div style=format!(
                                                "background-color: {accent}; width: 8px; height: 8px; border-radius: 9999px; box-shadow: 0 2px 6px rgba(0,0,0,0.4);"
                                            ) />
                                            <span style="color: white; font-size: 1.2rem; text-shadow: 0 1px 4px rgba(0,0,0,0.5);">{PIN_GLYPH}</span>
                                        </div>
                                        <h2 style="font-size: 1.875rem; font-weight: 700; color: white; margin: 0; text-shadow: 0 2px 8px rgba(0,0,0,0.5);">
                                            {location.name}
                                        </h2>
                                    </div>
                                    <button
                                        style="flex-shrink: 0; width: 36px; height: 36px; border-radius: 8px; border: 1px solid rgba(255,255,255,0.4); background: rgba(255,255,255,0.2); backdrop-filter: blur(8px); color: white; font-size: 1rem; cursor: pointer; display: flex; align-items: center; justify-content: center;"
                                        on:click=move |_| selected.set(None)
                                        on:mouseenter=move |e| {
                                            if let Some(el) = e.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
                                                el.style().set_property("background", "rgba(255,255,255,0.3)").ok();
                                            }
                                        }
                                        on:mouseleave=move |e| {
                                            if let Some(el) = e.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
                                                el.style().set_property("background", "rgba(255,255,255,0.2)").ok();
                                            }
                                        }
                                    >
                                        "\u{2715}"
                                    </button>
                                </div>
                            </div>
                        </div>
                        <div style="flex: 1; overflow-y: auto; background: linear-gradient(to bottom, #ffffff, #f5f3ff);">
                            <div style="padding: 24px; display: flex; flex-direction: column; gap: 24px;">
                                <div style="border-left: 4px solid #3b82f6; padding-left: 16px;">
                                    <h3 style="font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; font-weight: 700; margin: 0 0 12px 0; color: #2563eb; display: flex; align-items: center; gap: 8px;">
                                        <span style=format!(
                                            "display: inline-block; width: 8px; height: 8px; border-radius: 9999px; background-color: {accent};"
                                        ) />
                                        "The Moment"
                                    </h3>
                                    <p style="font-size: 0.875rem; line-height: 1.65; margin: 0; color: #1f2937;">
                                        {location.moment}
                                    </p>
                                </div>
                                <div style="background: linear-gradient(135deg, rgba(168,85,247,0.08), rgba(236,72,153,0.08), rgba(59,130,246,0.08)); border-radius: 12px; padding: 20px; border: 2px solid rgba(168,85,247,0.3);">
                                    <h3 style="font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; font-weight: 700; margin: 0 0 12px 0; color: #7c3aed; display: flex; align-items: center; gap: 8px;">
                                        <span style="display: inline-block; width: 8px; height: 8px; border-radius: 9999px; background-color: #a855f7;" />
                                        "The Question I Left With"
                                    </h3>
                                    <p style="font-size: 0.875rem; line-height: 1.65; margin: 0; font-style: italic; font-weight: 500; color: #1f2937;">
                                        {quoted(location.question)}
                                    </p>
                                </div>
                                <div style="background: linear-gradient(135deg, #3b82f6, #a855f7, #ec4899); padding: 4px; border-radius: 12px;">
                                    <div style="background: #ffffff; border-radius: 8px; padding: 20px;">
                                        <h3 style="font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; font-weight: 700; margin: 0 0 12px 0; background: linear-gradient(to right, #3b82f6, #a855f7); -webkit-background-clip: text; background-clip: text; color: transparent; display: flex; align-items: center; gap: 8px;">
                                            <span style="display: inline-block; width: 8px; height: 8px; border-radius: 9999px; background: linear-gradient(to right, #3b82f6, #a855f7);" />
                                            "Urban Insight"
                                        </h3>
                                        <p style="font-size: 0.875rem; line-height: 1.65; margin: 0; font-weight: 600; color: #1f2937;">
                                            {location.insight}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}

/// Bottom-left prompt shown while nothing is selected.
#[component]
pub fn IdleHintPanel() -> impl IntoView {
    view! {
        <div style="position: absolute; bottom: 24px; left: 24px; z-index: 1000;">
            <div style="border-radius: 12px; border: 2px solid rgba(59,130,246,0.5); background: #ffffff; box-shadow: 0 25px 50px rgba(0,0,0,0.25); padding: 24px; max-width: 380px;">
                <div style="display: flex; align-items: flex-start; gap: 16px;">
                    <div style="width: 48px; height: 48px; border-radius: 9999px; background: linear-gradient(135deg, #3b82f6, #a855f7, #ec4899); display: flex; align-items: center; justify-content: center; flex-shrink: 0; box-shadow: 0 4px 14px rgba(0,0,0,0.25); color: white; font-size: 1.4rem;">
                        {PIN_GLYPH}
                    </div>
                    <div>
                        <p style="font-size: 1rem; font-weight: 700; margin: 0 0 8px 0; background: linear-gradient(to right, #3b82f6, #a855f7); -webkit-background-clip: text; background-clip: text; color: transparent;">
                            "Explore the Journey"
                        </p>
                        <p style="font-size: 0.875rem; color: #6b7280; margin: 0; line-height: 1.6; max-width: 320px;">
                            "Click on any colorful map marker to discover urban stories and design insights from across Europe"
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Centered notice when the map library cannot be fetched or booted. The
/// page chrome stays up; only the map pane is dark.
#[component]
pub fn MapUnavailable() -> impl IntoView {
    view! {
        <div style="position: absolute; inset: 0; z-index: 900; display: flex; align-items: center; justify-content: center; pointer-events: none;">
            <div style="pointer-events: auto; background: #ffffff; border: 2px solid rgba(236,72,153,0.4); border-radius: 12px; box-shadow: 0 25px 50px rgba(0,0,0,0.25); padding: 32px; max-width: 420px; text-align: center;">
                <p style="font-size: 1.25rem; font-weight: 700; margin: 0 0 8px 0; color: #111827;">"Map unavailable"</p>
                <p style="font-size: 0.875rem; color: #6b7280; margin: 0; line-height: 1.6;">
                    "The map library could not be loaded. Check your connection and reload the page."
                </p>
            </div>
        </div>
    }
}
