//! Drop-pin icon markup for map markers.
//!
//! Pins are rotated squares with a one-based stop number inside. The map
//! engine receives them as `divIcon` HTML strings.

use voyage_shared::marker_color;

/// Rendered pixel size of one pin icon.
pub const ICON_SIZE: (u32, u32) = (32, 32);

/// The pin tip sits at the bottom center of the icon box.
pub const ICON_ANCHOR: (u32, u32) = (16, 32);

/// Builds the rotated-square drop pin for one registry slot.
///
/// Both the fill color and the printed ordinal derive from `position`, the
/// location's zero-based registry index. The location's accent color plays
/// no part here.
pub fn pin_icon_html(position: usize) -> String {
    let color = marker_color(position);
    let ordinal = position + 1;
    format!(
        "<div style=\"background-color: {color}; width: {width}px; height: {height}px; \
         border-radius: 50% 50% 50% 0; transform: rotate(-45deg); \
         border: 3px solid white; box-shadow: 0 3px 12px rgba(0,0,0,0.4); \
         display: flex; align-items: center; justify-content: center;\">\
         <div style=\"transform: rotate(45deg); color: white; font-weight: bold; \
         font-size: 14px;\">{ordinal}</div></div>",
        width = ICON_SIZE.0,
        height = ICON_SIZE.1,
    )
}
