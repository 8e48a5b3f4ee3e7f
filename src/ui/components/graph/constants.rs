//! Constants for graph geometry and rendering
//!
//! All magic numbers are defined here with descriptive names and units.
//! Distances are in surface units (pixels for the embedded canvas).

use crate::ui::styling::COLOR_STATS;
use embedded_graphics::pixelcolor::Rgb565;

/// Default horizontal margin on both the left and right edge
pub const DEFAULT_MARGIN_X: f32 = 20.0;

/// Default space above the plot area
pub const DEFAULT_TOP_BORDER: f32 = 10.0;

/// Default space below the plot area (room for labels)
pub const DEFAULT_BOTTOM_BORDER: f32 = 40.0;

/// Default inner border between the top edge and the highest value
pub const DEFAULT_GRAPH_BORDER: f32 = 30.0;

/// Default spacing between gridlines and markers, in samples
pub const DEFAULT_INTERSECT_DISTANCE: usize = 2;

/// Catmull-Rom smoothing is enabled by default
pub const DEFAULT_USE_CATMULL_ROM: bool = true;

/// Default Catmull-Rom alpha
///
/// 0.0 = uniform, 0.5 = centripetal, 1.0 = chordal
pub const DEFAULT_CATMULL_ALPHA: f32 = 0.3;

/// Default data line color
pub const DEFAULT_STROKE_COLOR: Rgb565 = COLOR_STATS;

/// Default data line width
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Default diameter of the marker discs
pub const DEFAULT_MARKER_DIAMETER: f32 = 5.0;

/// Gridline width in pixels
pub const DEFAULT_GRIDLINE_WIDTH_PX: u32 = 1;

/// Number of color bands used to render a gridline fade
pub const DEFAULT_GRIDLINE_GRADIENT_BANDS: u8 = 8;

/// Fraction of the gridline height covered by the fade (0.0 = bottom)
pub const GRIDLINE_GRADIENT_END: f32 = 0.95;

/// Number of line segments used to flatten one cubic curve on the canvas
pub const DEFAULT_CURVE_SUBDIVISIONS: usize = 8;

/// Largest value treated as "no maximum" when scaling vertically
///
/// Below this the y mapping falls back to the baseline.
pub const MIN_MAX_VALUE: f32 = f32::EPSILON;

/// Smallest usable Catmull-Rom denominator
///
/// Smaller denominators (duplicate adjacent points) fall back to a zero
/// tangent offset.
pub const MIN_SPLINE_DENOMINATOR: f32 = 1e-6;

/// Minimum number of samples needed for a Catmull-Rom fit
pub const MIN_CATMULL_ROM_SAMPLES: usize = 4;

/// Capacity of the selection label string
pub const MAX_LABEL_LENGTH: usize = 48;
