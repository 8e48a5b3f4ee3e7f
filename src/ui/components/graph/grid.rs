//! Vertical "intersection" gridlines
//!
//! One gridline every `intersect_distance` samples, spanning the full
//! height between the top and bottom borders. The core only emits
//! endpoints; the fade is applied by whoever strokes the segment.

use alloc::vec::Vec;

use super::geometry::{GeometryMapper, PointF};

/// Stroke requested for a gridline segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridlineStroke {
    /// Solid color along the whole segment
    Solid,
    /// Fade from the start point (bottom) toward the end point (top)
    Gradient,
}

/// A single vertical gridline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridlineSegment {
    /// Bottom end of the line
    pub start: PointF,
    /// Top end of the line
    pub end: PointF,
    /// How the host should stroke the line
    pub stroke: GridlineStroke,
}

impl GridlineSegment {
    /// Whether the host should stroke this line with a fade
    pub fn is_gradient_stroke(&self) -> bool {
        self.stroke == GridlineStroke::Gradient
    }
}

/// Number of gridlines (and markers) for `sample_count` samples
pub fn intersection_count(sample_count: usize, intersect_distance: usize) -> usize {
    sample_count.div_ceil(intersect_distance.max(1))
}

/// Build the gridline segments for a normalized sample sequence
pub(super) fn build_gridlines(
    mapper: &GeometryMapper<'_>,
    sample_count: usize,
    intersect_distance: usize,
) -> Vec<GridlineSegment> {
    let rect = mapper.rect();
    let config = mapper.config();
    let bottom = rect.height - config.bottom_border;
    let intersect_height = rect.height - config.bottom_border - config.top_border;

    (0..intersection_count(sample_count, intersect_distance))
        .map(|k| {
            let x = mapper.x(k * intersect_distance);
            GridlineSegment {
                start: PointF::new(x, bottom),
                end: PointF::new(x, bottom - intersect_height),
                stroke: GridlineStroke::Gradient,
            }
        })
        .collect()
}
