//! Graph path builder
//!
//! Turns one sample sequence into the complete geometry of a stats graph:
//! gridlines, the data path and the marker positions. Nothing is retained
//! between calls; each [`RenderOutput`] belongs to the caller that built it.

use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;

use super::config::{GraphConfig, normalize_samples};
use super::constants::MIN_CATMULL_ROM_SAMPLES;
use super::geometry::{DrawingRect, GeometryMapper, PointF};
use super::grid::{GridlineSegment, build_gridlines};
use super::interpolation::{
    InterpolationType, PathCommand, catmull_rom_path, flat_path, linear_path,
};
use super::{GraphError, GraphResult};

/// Fully resolved geometry for one render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// Vertical gridlines, left to right
    pub gridlines: Vec<GridlineSegment>,
    /// The data path, starting with a move
    pub data_path: Vec<PathCommand>,
    /// Centers of the marker discs, left to right
    pub marker_points: Vec<PointF>,
    /// Shape the data path was built as
    pub interpolation: InterpolationType,
    /// Data line color
    pub stroke_color: Rgb565,
    /// Data line width
    pub stroke_width: f32,
    /// Diameter of the marker discs
    pub marker_diameter: f32,
}

impl RenderOutput {
    /// First point of the data path
    pub fn start_point(&self) -> Option<PointF> {
        self.data_path.first().map(PathCommand::end_point)
    }

    /// Point the data path terminates at
    pub fn end_point(&self) -> Option<PointF> {
        self.data_path.last().map(PathCommand::end_point)
    }
}

/// Builds [`RenderOutput`]s from sample sequences
///
/// Holds only the configuration, so one builder can serve any number of
/// renders, concurrently if needed.
#[derive(Debug, Clone, Copy)]
pub struct GraphPathBuilder {
    config: GraphConfig,
}

impl GraphPathBuilder {
    /// Create a builder after validating `config`
    pub fn new(config: GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration used for every build
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Build the geometry of `samples` drawn into `rect`
    pub fn build(&self, samples: &[f32], rect: DrawingRect) -> GraphResult<RenderOutput> {
        build_render_output(samples, &self.config, rect)
    }
}

/// Build the geometry of `samples` drawn into `rect` with `config`
///
/// Fails only on a rejected configuration, rect or non-finite sample.
/// Degenerate input (no samples, a single sample, all zeros, a rect too
/// small for its borders) produces a flat or collapsed graph instead. An
/// empty sequence gets the flat line and the origin gridline but no
/// markers.
pub fn build_render_output(
    samples: &[f32],
    config: &GraphConfig,
    rect: DrawingRect,
) -> GraphResult<RenderOutput> {
    config.validate()?;
    rect.validate()?;

    if let Some(index) = samples.iter().position(|value| !value.is_finite()) {
        log::warn!("Rejected non-finite sample at index {}", index);
        return Err(GraphError::NonFiniteSample { index });
    }

    let input_empty = samples.is_empty();
    let normalized = normalize_samples(samples, config.intersect_distance);
    let samples = normalized.samples.as_ref();
    let intersect_distance = normalized.intersect_distance;
    let sample_count = samples.len();

    let mapper = GeometryMapper::new(samples, rect, config);

    let mut gridlines = build_gridlines(&mapper, sample_count, intersect_distance);
    if input_empty {
        // Nothing was sampled: keep only the origin column
        gridlines.truncate(1);
    }

    let has_data = samples.iter().any(|&value| value != 0.0);
    let interpolation = if !has_data {
        InterpolationType::Flat
    } else if config.use_catmull_rom && sample_count >= MIN_CATMULL_ROM_SAMPLES {
        InterpolationType::CatmullRom {
            alpha: config.catmull_alpha,
        }
    } else {
        InterpolationType::Linear
    };

    let data_path = match interpolation {
        InterpolationType::Flat => flat_path(&mapper, sample_count),
        InterpolationType::Linear => linear_path(&mapper, samples),
        InterpolationType::CatmullRom { alpha } => catmull_rom_path(&mapper, samples, alpha),
    };

    let marker_points = if input_empty {
        Vec::new()
    } else {
        samples
            .iter()
            .copied()
            .enumerate()
            .filter(|(i, _)| i % intersect_distance == 0)
            .map(|(i, value)| mapper.point(i, value))
            .collect()
    };

    log::debug!(
        "Built graph: {} samples, intersect distance {}, {:?}",
        sample_count,
        intersect_distance,
        interpolation
    );

    Ok(RenderOutput {
        gridlines,
        data_path,
        marker_points,
        interpolation,
        stroke_color: config.stroke_color,
        stroke_width: config.stroke_width,
        marker_diameter: config.marker_diameter,
    })
}
