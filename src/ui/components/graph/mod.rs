//! Stats graph geometry and rendering
//!
//! Converts an ordered sequence of samples into everything needed to draw
//! a time-series line graph:
//!
//! - Vertical "intersection" gridlines every N samples, stroked with a fade
//! - The data path, as a polyline or a Catmull-Rom spline (uniform,
//!   centripetal or chordal via alpha) expressed as cubic Bezier segments
//! - Marker discs on the sampled points under each gridline
//!
//! Building is pure: [`build_render_output`] depends only on its samples,
//! [`GraphConfig`] and [`DrawingRect`], keeps no state between calls and can
//! run on any number of threads at once. Drawing is left to the host;
//! [`Canvas`] is a ready-made one for embedded-graphics targets.
//!
//! # Examples
//!
//! ```
//! use statsview::ui::components::graph::*;
//!
//! let config = GraphConfig::default().with_intersect_distance(2);
//! let output = build_render_output(
//!     &[1.0, 3.0, 2.0, 5.0, 4.0, 2.0, 6.0],
//!     &config,
//!     DrawingRect::new(400.0, 200.0),
//! )?;
//!
//! assert_eq!(output.gridlines.len(), 4);
//! assert_eq!(output.marker_points.len(), 4);
//! # Ok::<(), GraphError>(())
//! ```

use thiserror_no_std::Error;

// Module declarations
mod builder;
mod canvas;
pub mod config;
pub mod constants;
pub mod geometry;
mod grid;
mod interpolation;
mod label;

// Re-export main types
pub use builder::{GraphPathBuilder, RenderOutput, build_render_output};
pub use canvas::Canvas;
pub use config::{GraphConfig, NormalizedSamples, normalize_samples};
pub use geometry::{DrawingRect, GeometryMapper, PointF, column_x, column_y, max_value};
pub use grid::{GridlineSegment, GridlineStroke, intersection_count};
pub use interpolation::{InterpolationType, PathCommand, catmull_rom_control_points};
pub use label::current_value_label;

/// Error types for graph operations
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    /// A border, margin or diameter is negative or not finite
    #[error("Invalid {field}: {value} (must be finite and >= 0)")]
    NegativeDimension {
        /// Name of the offending config field
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    /// Catmull-Rom alpha outside 0.0..=1.0
    #[error("Invalid Catmull-Rom alpha: {alpha} (must be within 0.0..=1.0)")]
    InvalidCatmullAlpha {
        /// The rejected alpha
        alpha: f32,
    },

    /// Stroke width is not strictly positive
    #[error("Invalid stroke width: {width} (must be > 0)")]
    InvalidStrokeWidth {
        /// The rejected width
        width: f32,
    },

    /// Drawing rect has a negative or non-finite size
    #[error("Invalid drawing rect: {width}x{height}")]
    InvalidDrawingRect {
        /// Rejected width
        width: f32,
        /// Rejected height
        height: f32,
    },

    /// A sample is NaN or infinite
    #[error("Non-finite sample at index {index}")]
    NonFiniteSample {
        /// Position of the sample
        index: usize,
    },
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
