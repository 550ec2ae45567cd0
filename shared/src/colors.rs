/// Fixed drop-pin palette. Markers cycle through it by registry position.
pub const MARKER_PALETTE: [&str; 8] = [
    "#3b82f6", "#f97316", "#a855f7", "#f59e0b", "#ec4899", "#14b8a6", "#6366f1", "#10b981",
];

/// Marker tint for the location at registry position `index`: palette entry
/// `index % 8`. Ignores the location's accent tag; the two color sets share
/// values in a different order and must stay independent.
pub fn marker_color(index: usize) -> &'static str {
    MARKER_PALETTE[index % MARKER_PALETTE.len()]
}
