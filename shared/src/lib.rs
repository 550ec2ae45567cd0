pub mod colors;
pub mod location;

pub use colors::{MARKER_PALETTE, marker_color};
pub use location::{Accent, LOCATIONS, Location, stop_number};
