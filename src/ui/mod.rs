//! Statsview UI - geometry and drawing for stats graphs
//!
//! - [`components::graph`] - graph geometry, curve fitting and canvas
//! - [`styling`] - colors and palettes

pub mod components;
pub mod styling;

// Re-export commonly used items
pub use components::graph::{
    Canvas, DrawingRect, GraphConfig, GraphError, GraphPathBuilder, GraphResult, RenderOutput,
    build_render_output,
};
pub use styling::GraphPalette;
