//! Curve construction for the data series
//!
//! Produces path commands for the three data path shapes: a flat baseline
//! when there is nothing to show, a polyline, and a Catmull-Rom spline
//! expressed as cubic Bezier segments.

use alloc::vec::Vec;

use super::constants::MIN_SPLINE_DENOMINATOR;
use super::geometry::{GeometryMapper, PointF};

/// A single drawing command of the data path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at a point
    MoveTo(PointF),
    /// Straight line to a point
    LineTo(PointF),
    /// Cubic Bezier curve to `to`
    CubicTo {
        /// First control point
        control1: PointF,
        /// Second control point
        control2: PointF,
        /// End point (curve passes through this)
        to: PointF,
    },
}

impl PathCommand {
    /// The point the pen rests on after this command
    pub fn end_point(&self) -> PointF {
        match *self {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => point,
            PathCommand::CubicTo { to, .. } => to,
        }
    }

    /// Whether every coordinate of the command is finite
    pub fn is_finite(&self) -> bool {
        match *self {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => point.is_finite(),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => control1.is_finite() && control2.is_finite() && to.is_finite(),
        }
    }
}

/// Which shape the data path was built as
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpolationType {
    /// No real data, flat line on the baseline
    Flat,
    /// Straight lines between samples
    Linear,
    /// Catmull-Rom spline with the given alpha
    CatmullRom {
        /// 0.0 = uniform, 0.5 = centripetal, 1.0 = chordal
        alpha: f32,
    },
}

/// Horizontal line along the baseline across every column
pub(super) fn flat_path(mapper: &GeometryMapper<'_>, sample_count: usize) -> Vec<PathCommand> {
    let zero = mapper.baseline();
    let mut path = Vec::with_capacity(sample_count.max(1));

    path.push(PathCommand::MoveTo(PointF::new(mapper.x(0), zero)));
    for i in 1..sample_count {
        path.push(PathCommand::LineTo(PointF::new(mapper.x(i), zero)));
    }

    path
}

/// Straight segments connecting consecutive samples
pub(super) fn linear_path(mapper: &GeometryMapper<'_>, samples: &[f32]) -> Vec<PathCommand> {
    let mut path = Vec::with_capacity(samples.len());

    for (i, value) in samples.iter().copied().enumerate() {
        let point = mapper.point(i, value);
        if i == 0 {
            path.push(PathCommand::MoveTo(point));
        } else {
            path.push(PathCommand::LineTo(point));
        }
    }

    path
}

/// Catmull-Rom spline through the samples as cubic Bezier segments
///
/// Requires at least 4 samples; callers fall back to [`linear_path`]
/// below that. Each step `i` in `1..=n-2` takes samples `i-1`, `i`,
/// `(i+1) % n` and `((i+1) % n) + 1` as p0..p3, the last index clamped to
/// `n-1`. The path starts at the first sample with a straight lead-in to
/// the second, so every sample lies on the path, and ends with a line to
/// the last one.
pub(super) fn catmull_rom_path(
    mapper: &GeometryMapper<'_>,
    samples: &[f32],
    alpha: f32,
) -> Vec<PathCommand> {
    let n = samples.len();
    if n < 4 {
        return linear_path(mapper, samples);
    }

    let last = n - 1;
    let point_at = |index: usize| mapper.point(index, samples[index]);
    let mut path = Vec::with_capacity(n + 2);

    for i in 1..=n - 2 {
        let p2_index = (i + 1) % n;
        let p3_index = (p2_index + 1).min(last);

        let p0 = point_at(i - 1);
        let p1 = point_at(i);
        let p2 = point_at(p2_index);
        let p3 = point_at(p3_index);

        let (control1, control2) = catmull_rom_control_points(p0, p1, p2, p3, alpha);

        if i == 1 {
            // The first cubic starts at p1, not p0
            path.push(PathCommand::MoveTo(p0));
            path.push(PathCommand::LineTo(p1));
        }
        path.push(PathCommand::CubicTo {
            control1,
            control2,
            to: p2,
        });
    }

    path.push(PathCommand::LineTo(point_at(last)));
    path
}

/// Bezier control points for the Catmull-Rom segment from `p1` to `p2`
///
/// Standard Catmull-Rom to Bezier conversion with knot parameter `alpha`.
/// A control point whose denominator vanishes (duplicate adjacent points)
/// collapses onto its segment endpoint.
///
/// # Arguments
///
/// * `p0` - Previous point (shapes the tangent at `p1`)
/// * `p1` - Segment start
/// * `p2` - Segment end
/// * `p3` - Next point (shapes the tangent at `p2`)
/// * `alpha` - 0.0 = uniform, 0.5 = centripetal, 1.0 = chordal
pub fn catmull_rom_control_points(
    p0: PointF,
    p1: PointF,
    p2: PointF,
    p3: PointF,
    alpha: f32,
) -> (PointF, PointF) {
    let d1 = p1.distance_to(p0);
    let d2 = p2.distance_to(p1);
    let d3 = p3.distance_to(p2);

    let d1_a = libm::powf(d1, alpha);
    let d2_a = libm::powf(d2, alpha);
    let d3_a = libm::powf(d3, alpha);
    let d1_2a = libm::powf(d1, 2.0 * alpha);
    let d2_2a = libm::powf(d2, 2.0 * alpha);
    let d3_2a = libm::powf(d3, 2.0 * alpha);

    let b1_denominator = 3.0 * d1_a * (d1_a + d2_a);
    let b1 = if usable_denominator(b1_denominator) {
        let weight = 2.0 * d1_2a + 3.0 * d1_a * d2_a + d2_2a;
        (p2 * d1_2a - p0 * d2_2a + p1 * weight) * (1.0 / b1_denominator)
    } else {
        p1
    };

    let b2_denominator = 3.0 * d3_a * (d3_a + d2_a);
    let b2 = if usable_denominator(b2_denominator) {
        let weight = 2.0 * d3_2a + 3.0 * d3_a * d2_a + d2_2a;
        (p1 * d3_2a - p3 * d2_2a + p2 * weight) * (1.0 / b2_denominator)
    } else {
        p2
    };

    (
        if b1.is_finite() { b1 } else { p1 },
        if b2.is_finite() { b2 } else { p2 },
    )
}

fn usable_denominator(value: f32) -> bool {
    value.is_finite() && libm::fabsf(value) >= MIN_SPLINE_DENOMINATOR
}
