//! Mapping between sample space and surface space
//!
//! Sample index maps to x, sample value maps to y. The y axis is flipped so
//! larger values plot higher on a surface whose y grows downward.

use core::ops::{Add, Mul, Sub};

use embedded_graphics::prelude::Point;

use super::config::GraphConfig;
use super::constants::MIN_MAX_VALUE;
use super::{GraphError, GraphResult};

/// A point in surface coordinates
///
/// Uses f32 so curve control points keep sub-pixel precision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    /// Horizontal position
    pub x: f32,
    /// Vertical position (grows downward)
    pub y: f32,
}

impl PointF {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: PointF) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::sqrtf(dx * dx + dy * dy)
    }

    /// Whether both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Round to the nearest integer pixel, offset by `origin`
    pub fn to_pixel(self, origin: Point) -> Point {
        Point::new(
            origin.x.saturating_add(libm::roundf(self.x) as i32),
            origin.y.saturating_add(libm::roundf(self.y) as i32),
        )
    }
}

impl Add for PointF {
    type Output = PointF;

    fn add(self, rhs: PointF) -> PointF {
        PointF::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PointF {
    type Output = PointF;

    fn sub(self, rhs: PointF) -> PointF {
        PointF::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for PointF {
    type Output = PointF;

    fn mul(self, rhs: f32) -> PointF {
        PointF::new(self.x * rhs, self.y * rhs)
    }
}

/// Size of the target surface for one render call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingRect {
    /// Surface width
    pub width: f32,
    /// Surface height
    pub height: f32,
}

impl DrawingRect {
    /// Create a new drawing rect
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Reject negative or non-finite sizes
    pub fn validate(&self) -> GraphResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            log::warn!("Rejected drawing rect {}x{}", self.width, self.height);
            return Err(GraphError::InvalidDrawingRect {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Height available for values once all borders are removed
///
/// Clamped at zero so an undersized rect collapses onto the baseline.
pub fn graph_height(rect: &DrawingRect, config: &GraphConfig) -> f32 {
    (rect.height - config.top_border - config.bottom_border - config.graph_border).max(0.0)
}

/// Y of a zero value, the baseline of the plot
pub fn baseline_y(rect: &DrawingRect, config: &GraphConfig) -> f32 {
    graph_height(rect, config) + config.top_border + config.graph_border
}

/// Horizontal distance between adjacent samples
///
/// A count of 0 or 1 is treated as a single interval so the result stays
/// finite.
pub fn column_spacer(sample_count: usize, rect: &DrawingRect, config: &GraphConfig) -> f32 {
    let plot_width = (rect.width - 2.0 * config.margin_x).max(0.0);
    let intervals = sample_count.saturating_sub(1).max(1);
    plot_width / intervals as f32
}

/// X coordinate of the sample at `index`
pub fn column_x(index: usize, sample_count: usize, rect: &DrawingRect, config: &GraphConfig) -> f32 {
    index as f32 * column_spacer(sample_count, rect, config) + config.margin_x
}

/// Y coordinate of `value` scaled against `max_value`
///
/// A `max_value` that is zero (or below [`MIN_MAX_VALUE`]) yields the
/// baseline instead of dividing by zero.
pub fn column_y(value: f32, max_value: f32, rect: &DrawingRect, config: &GraphConfig) -> f32 {
    let baseline = baseline_y(rect, config);
    if max_value.is_nan() || max_value <= MIN_MAX_VALUE {
        return baseline;
    }

    let raw = value / max_value * graph_height(rect, config);
    baseline - raw
}

/// Largest sample, floored at 0.0
pub fn max_value(samples: &[f32]) -> f32 {
    samples.iter().copied().fold(0.0, f32::max)
}

/// Geometry for one sample sequence on one surface
///
/// Caches the sample count and maximum so repeated lookups agree.
#[derive(Debug, Clone, Copy)]
pub struct GeometryMapper<'a> {
    config: &'a GraphConfig,
    rect: DrawingRect,
    sample_count: usize,
    max_value: f32,
}

impl<'a> GeometryMapper<'a> {
    /// Create a mapper for `samples` drawn into `rect`
    pub fn new(samples: &[f32], rect: DrawingRect, config: &'a GraphConfig) -> Self {
        Self {
            config,
            rect,
            sample_count: samples.len(),
            max_value: max_value(samples),
        }
    }

    /// X coordinate of the sample at `index`
    pub fn x(&self, index: usize) -> f32 {
        column_x(index, self.sample_count, &self.rect, self.config)
    }

    /// Y coordinate of `value`
    pub fn y(&self, value: f32) -> f32 {
        column_y(value, self.max_value, &self.rect, self.config)
    }

    /// Surface point of sample `index` with value `value`
    pub fn point(&self, index: usize, value: f32) -> PointF {
        PointF::new(self.x(index), self.y(value))
    }

    /// Y of the baseline
    pub fn baseline(&self) -> f32 {
        baseline_y(&self.rect, self.config)
    }

    /// The scaling maximum
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// The surface size
    pub fn rect(&self) -> &DrawingRect {
        &self.rect
    }

    /// The configuration this mapper was built with
    pub fn config(&self) -> &GraphConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_config() -> GraphConfig {
        GraphConfig::default()
            .with_margin_x(20.0)
            .with_borders(10.0, 40.0, 30.0)
    }

    #[test]
    fn test_column_x_spacing() {
        let config = scenario_config();
        let rect = DrawingRect::new(400.0, 200.0);

        // (400 - 40) / 6 = 60
        assert_eq!(column_x(0, 7, &rect, &config), 20.0);
        assert_eq!(column_x(1, 7, &rect, &config), 80.0);
        assert_eq!(column_x(6, 7, &rect, &config), 380.0);
    }

    #[test]
    fn test_column_x_single_sample_is_finite() {
        let config = scenario_config();
        let rect = DrawingRect::new(400.0, 200.0);

        for count in [0, 1] {
            let x = column_x(1, count, &rect, &config);
            assert!(x.is_finite());
            assert_eq!(x, 380.0);
        }
    }

    #[test]
    fn test_column_x_narrow_rect_collapses_to_margin() {
        let config = scenario_config();
        let rect = DrawingRect::new(10.0, 200.0);

        assert_eq!(column_x(3, 5, &rect, &config), 20.0);
    }

    #[test]
    fn test_column_y_flips_and_scales() {
        let config = scenario_config();
        let rect = DrawingRect::new(400.0, 200.0);

        // graph height = 200 - 10 - 40 - 30 = 120, baseline = 160
        assert_eq!(column_y(0.0, 6.0, &rect, &config), 160.0);
        assert_eq!(column_y(6.0, 6.0, &rect, &config), 40.0);
        assert_eq!(column_y(3.0, 6.0, &rect, &config), 100.0);
    }

    #[test]
    fn test_column_y_zero_max_is_baseline() {
        let config = scenario_config();
        let rect = DrawingRect::new(400.0, 200.0);

        assert_eq!(column_y(0.0, 0.0, &rect, &config), 160.0);
        assert_eq!(column_y(-4.0, 0.0, &rect, &config), 160.0);
    }

    #[test]
    fn test_max_value_floor() {
        assert_eq!(max_value(&[]), 0.0);
        assert_eq!(max_value(&[-3.0, -1.0]), 0.0);
        assert_eq!(max_value(&[1.0, 5.0, 2.0]), 5.0);
    }

    #[test]
    fn test_drawing_rect_validation() {
        assert!(DrawingRect::new(0.0, 0.0).validate().is_ok());
        assert!(DrawingRect::new(-1.0, 10.0).validate().is_err());
        assert!(DrawingRect::new(10.0, f32::INFINITY).validate().is_err());
    }

    #[test]
    fn test_mapper_matches_free_functions() {
        let config = scenario_config();
        let rect = DrawingRect::new(400.0, 200.0);
        let samples = [1.0, 3.0, 2.0, 5.0, 4.0, 2.0, 6.0];
        let mapper = GeometryMapper::new(&samples, rect, &config);

        assert_eq!(mapper.max_value(), 6.0);
        assert_eq!(mapper.x(4), column_x(4, 7, &rect, &config));
        assert_eq!(mapper.y(5.0), column_y(5.0, 6.0, &rect, &config));
        assert_eq!(mapper.point(2, 2.0), PointF::new(140.0, 120.0));
    }

    #[test]
    fn test_point_to_pixel_rounds_with_origin() {
        let point = PointF::new(10.4, 20.6);
        assert_eq!(point.to_pixel(Point::new(5, 5)), Point::new(15, 26));
    }
}
