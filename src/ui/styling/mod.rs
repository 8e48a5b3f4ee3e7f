//! Styling for the stats graph
//!
//! - [`colors`] - Color constants, the graph palette and color blending

pub mod colors;

pub use colors::{
    COLOR_BACKGROUND, COLOR_GRIDLINE, COLOR_STATS, DARK_GRAY, GraphPalette, LIGHT_GRAY, WHITE,
    lerp_color,
};
