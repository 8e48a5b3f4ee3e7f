//! Per-render graph configuration
//!
//! A [`GraphConfig`] is supplied fresh for every render call. It is checked
//! once by [`GraphConfig::validate`] and never mutated afterwards, so a
//! build is a pure function of samples, config and surface size.

use alloc::borrow::Cow;

use embedded_graphics::pixelcolor::Rgb565;
use serde::{Deserialize, Serialize};

use crate::ui::styling::GraphPalette;

use super::constants::{
    DEFAULT_BOTTOM_BORDER, DEFAULT_CATMULL_ALPHA, DEFAULT_GRAPH_BORDER,
    DEFAULT_INTERSECT_DISTANCE, DEFAULT_MARGIN_X, DEFAULT_MARKER_DIAMETER, DEFAULT_STROKE_COLOR,
    DEFAULT_STROKE_WIDTH, DEFAULT_TOP_BORDER, DEFAULT_USE_CATMULL_ROM,
};
use super::{GraphError, GraphResult};

/// Layout, curve and styling parameters for one render
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Horizontal margin applied to both the left and right edge
    pub margin_x: f32,
    /// Space above the plot area
    pub top_border: f32,
    /// Space below the plot area
    pub bottom_border: f32,
    /// Inner border between the top edge and the highest value
    pub graph_border: f32,
    /// Spacing between gridlines and markers, in samples
    ///
    /// `0` asks for an automatic spacing, see [`normalize_samples`].
    pub intersect_distance: usize,
    /// Fit a Catmull-Rom spline instead of a polyline
    pub use_catmull_rom: bool,
    /// Catmull-Rom alpha (0.0 = uniform, 0.5 = centripetal, 1.0 = chordal)
    pub catmull_alpha: f32,
    /// Data line color
    #[serde(with = "rgb565_raw")]
    pub stroke_color: Rgb565,
    /// Data line width
    pub stroke_width: f32,
    /// Diameter of the marker discs
    pub marker_diameter: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            margin_x: DEFAULT_MARGIN_X,
            top_border: DEFAULT_TOP_BORDER,
            bottom_border: DEFAULT_BOTTOM_BORDER,
            graph_border: DEFAULT_GRAPH_BORDER,
            intersect_distance: DEFAULT_INTERSECT_DISTANCE,
            use_catmull_rom: DEFAULT_USE_CATMULL_ROM,
            catmull_alpha: DEFAULT_CATMULL_ALPHA,
            stroke_color: DEFAULT_STROKE_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
            marker_diameter: DEFAULT_MARKER_DIAMETER,
        }
    }
}

impl GraphConfig {
    /// Set the horizontal margin
    pub fn with_margin_x(mut self, margin_x: f32) -> Self {
        self.margin_x = margin_x;
        self
    }

    /// Set the top, bottom and inner graph borders
    pub fn with_borders(mut self, top: f32, bottom: f32, graph: f32) -> Self {
        self.top_border = top;
        self.bottom_border = bottom;
        self.graph_border = graph;
        self
    }

    /// Set the gridline/marker spacing in samples
    pub fn with_intersect_distance(mut self, distance: usize) -> Self {
        self.intersect_distance = distance;
        self
    }

    /// Select polyline (`None`) or Catmull-Rom with the given alpha
    pub fn with_catmull_rom(mut self, alpha: Option<f32>) -> Self {
        match alpha {
            Some(alpha) => {
                self.use_catmull_rom = true;
                self.catmull_alpha = alpha;
            }
            None => self.use_catmull_rom = false,
        }
        self
    }

    /// Set the data line color and width
    pub fn with_stroke(mut self, color: Rgb565, width: f32) -> Self {
        self.stroke_color = color;
        self.stroke_width = width;
        self
    }

    /// Take the data line and marker color from a palette
    ///
    /// Pair with [`Canvas::with_palette`](super::Canvas::with_palette) so
    /// gridlines and background come from the same palette.
    pub fn with_palette(mut self, palette: GraphPalette) -> Self {
        self.stroke_color = palette.stroke;
        self
    }

    /// Set the marker disc diameter
    pub fn with_marker_diameter(mut self, diameter: f32) -> Self {
        self.marker_diameter = diameter;
        self
    }

    /// Reject configurations that indicate a programming error
    ///
    /// Nothing is clamped: the first offending field is reported.
    pub fn validate(&self) -> GraphResult<()> {
        let dimensions = [
            ("margin_x", self.margin_x),
            ("top_border", self.top_border),
            ("bottom_border", self.bottom_border),
            ("graph_border", self.graph_border),
            ("marker_diameter", self.marker_diameter),
        ];

        for (field, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                log::warn!("Rejected graph config: {} = {}", field, value);
                return Err(GraphError::NegativeDimension { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.catmull_alpha) {
            log::warn!("Rejected graph config: catmull_alpha = {}", self.catmull_alpha);
            return Err(GraphError::InvalidCatmullAlpha {
                alpha: self.catmull_alpha,
            });
        }

        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            log::warn!("Rejected graph config: stroke_width = {}", self.stroke_width);
            return Err(GraphError::InvalidStrokeWidth {
                width: self.stroke_width,
            });
        }

        Ok(())
    }
}

/// Samples and intersect distance after degenerate-input normalization
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSamples<'a> {
    /// Samples to plot, borrowed unless a substitute had to be made
    pub samples: Cow<'a, [f32]>,
    /// Effective gridline/marker spacing, always at least 1
    pub intersect_distance: usize,
}

/// Substitute for sequences too short to span a graph
const EMPTY_SERIES: [f32; 2] = [0.0, 0.0];

/// Normalize samples and intersect distance before any geometry is built
///
/// - fewer than two samples become a flat `[0.0, 0.0]` series with a
///   spacing of 1
/// - a spacing of `0` becomes `1 + n % 2`
pub fn normalize_samples(samples: &[f32], intersect_distance: usize) -> NormalizedSamples<'_> {
    if samples.len() <= 1 {
        log::trace!(
            "Normalizing {} sample(s) to a flat two-sample series",
            samples.len()
        );
        return NormalizedSamples {
            samples: Cow::Owned(EMPTY_SERIES.to_vec()),
            intersect_distance: 1,
        };
    }

    let intersect_distance = if intersect_distance == 0 {
        // Odd-length series get every other column
        1 + samples.len() % 2
    } else {
        intersect_distance
    };

    NormalizedSamples {
        samples: Cow::Borrowed(samples),
        intersect_distance,
    }
}

/// Serde adapter storing an [`Rgb565`] as its raw 16-bit value
mod rgb565_raw {
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::pixelcolor::raw::RawU16;
    use embedded_graphics::prelude::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Rgb565, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(color.into_storage())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgb565, D::Error> {
        let raw = u16::deserialize(deserializer)?;
        Ok(Rgb565::from(RawU16::new(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GraphConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_border_rejected() {
        let config = GraphConfig::default().with_borders(10.0, -1.0, 30.0);
        match config.validate() {
            Err(GraphError::NegativeDimension { field, value }) => {
                assert_eq!(field, "bottom_border");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected NegativeDimension, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_margin_rejected() {
        let config = GraphConfig::default().with_margin_x(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(GraphError::NegativeDimension {
                field: "margin_x",
                ..
            })
        ));
    }

    #[test]
    fn test_alpha_out_of_range_rejected() {
        for alpha in [-0.1, 1.5, f32::NAN] {
            let config = GraphConfig::default().with_catmull_rom(Some(alpha));
            assert!(
                matches!(config.validate(), Err(GraphError::InvalidCatmullAlpha { .. })),
                "alpha {} should be rejected",
                alpha
            );
        }
    }

    #[test]
    fn test_alpha_bounds_accepted() {
        for alpha in [0.0, 0.5, 1.0] {
            let config = GraphConfig::default().with_catmull_rom(Some(alpha));
            assert!(config.validate().is_ok(), "alpha {} should be valid", alpha);
        }
    }

    #[test]
    fn test_zero_stroke_width_rejected() {
        let config = GraphConfig::default().with_stroke(Rgb565::RED, 0.0);
        assert!(matches!(
            config.validate(),
            Err(GraphError::InvalidStrokeWidth { .. })
        ));
    }

    #[test]
    fn test_palette_sets_stroke_color() {
        let palette = GraphPalette {
            stroke: Rgb565::new(0, 50, 20),
            ..GraphPalette::light()
        };

        let config = GraphConfig::default()
            .with_stroke(Rgb565::RED, 3.0)
            .with_palette(palette);

        assert_eq!(config.stroke_color, palette.stroke);
        assert_eq!(config.stroke_width, 3.0);
        assert_eq!(
            GraphConfig::default().with_palette(GraphPalette::dark()).stroke_color,
            DEFAULT_STROKE_COLOR
        );
    }

    #[test]
    fn test_normalize_empty_and_single() {
        for samples in [&[][..], &[5.0][..]] {
            let normalized = normalize_samples(samples, 3);
            assert_eq!(normalized.samples.as_ref(), &[0.0, 0.0]);
            assert_eq!(normalized.intersect_distance, 1);
        }
    }

    #[test]
    fn test_normalize_zero_distance_parity() {
        let even = [1.0, 2.0, 3.0, 4.0];
        let odd = [1.0, 2.0, 3.0];
        assert_eq!(normalize_samples(&even, 0).intersect_distance, 1);
        assert_eq!(normalize_samples(&odd, 0).intersect_distance, 2);
    }

    #[test]
    fn test_normalize_borrows_valid_input() {
        let samples = [1.0, 3.0, 2.0];
        let normalized = normalize_samples(&samples, 2);
        assert!(matches!(normalized.samples, Cow::Borrowed(_)));
        assert_eq!(normalized.intersect_distance, 2);
    }

    #[test]
    fn test_config_serialization() {
        let config = GraphConfig::default()
            .with_stroke(Rgb565::new(3, 40, 17), 1.5)
            .with_catmull_rom(Some(0.5));

        let bytes = postcard::to_allocvec(&config).unwrap();
        let decoded: GraphConfig = postcard::from_bytes(&bytes).unwrap();

        assert_eq!(config, decoded);
    }
}
