//! Rasterization of a [`RenderOutput`] onto an embedded-graphics target
//!
//! The builder only produces geometry. This is the drawing-surface side:
//! gridlines faded into the background, the data path flattened into
//! line primitives, and markers as filled discs.

use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use crate::ui::styling::{GraphPalette, lerp_color};

use super::builder::RenderOutput;
use super::constants::{
    DEFAULT_CURVE_SUBDIVISIONS, DEFAULT_GRIDLINE_GRADIENT_BANDS, DEFAULT_GRIDLINE_WIDTH_PX,
    GRIDLINE_GRADIENT_END,
};
use super::geometry::PointF;
use super::grid::{GridlineSegment, GridlineStroke};
use super::interpolation::PathCommand;

/// Draws render output onto any RGB565 [`DrawTarget`]
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    /// Screen position of the drawing rect's top-left corner
    pub origin: Point,
    /// Background the gridlines fade into
    pub background: Rgb565,
    /// Gridline color at the bottom of the fade
    pub gridline_color: Rgb565,
    /// Number of color bands per gridline fade
    pub gradient_bands: u8,
    /// Line segments per cubic curve
    pub curve_subdivisions: usize,
}

impl Default for Canvas {
    fn default() -> Self {
        let palette = GraphPalette::default();
        Self {
            origin: Point::zero(),
            background: palette.background,
            gridline_color: palette.gridline,
            gradient_bands: DEFAULT_GRIDLINE_GRADIENT_BANDS,
            curve_subdivisions: DEFAULT_CURVE_SUBDIVISIONS,
        }
    }
}

impl Canvas {
    /// Create a canvas drawing at `origin`
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            ..Self::default()
        }
    }

    /// Take background and gridline colors from a palette
    ///
    /// The stroke color travels with the render output, see
    /// [`GraphConfig::with_palette`](super::GraphConfig::with_palette).
    pub fn with_palette(mut self, palette: GraphPalette) -> Self {
        self.background = palette.background;
        self.gridline_color = palette.gridline;
        self
    }

    /// Draw gridlines, then the data path, then markers
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        output: &RenderOutput,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let gradient = self.gradient_colors();
        for line in &output.gridlines {
            self.draw_gridline(line, &gradient, display)?;
        }

        self.draw_path(output, display)?;
        self.draw_markers(output, display)
    }

    fn draw_gridline<D: DrawTarget<Color = Rgb565>>(
        &self,
        line: &GridlineSegment,
        gradient: &[Rgb565],
        display: &mut D,
    ) -> Result<(), D::Error> {
        let start = line.start.to_pixel(self.origin);
        let end = line.end.to_pixel(self.origin);

        let colors = match line.stroke {
            GridlineStroke::Solid => core::slice::from_ref(&self.gridline_color),
            GridlineStroke::Gradient => gradient,
        };

        let bands = colors.len().max(1);

        for (index, color) in colors.iter().enumerate() {
            let (from, to) = band_bounds(start, end, index, bands);
            Line::new(from, to)
                .into_styled(PrimitiveStyle::with_stroke(*color, DEFAULT_GRIDLINE_WIDTH_PX))
                .draw(display)?;
        }

        Ok(())
    }

    fn draw_path<D: DrawTarget<Color = Rgb565>>(
        &self,
        output: &RenderOutput,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let width = libm::roundf(output.stroke_width).max(1.0) as u32;
        let line_style = PrimitiveStyle::with_stroke(output.stroke_color, width);
        let step = 1.0 / self.curve_subdivisions.max(1) as f32;

        let mut pen: Option<PointF> = None;
        for command in &output.data_path {
            match *command {
                PathCommand::MoveTo(point) => pen = Some(point),
                PathCommand::LineTo(point) => {
                    if let Some(prev) = pen {
                        Line::new(prev.to_pixel(self.origin), point.to_pixel(self.origin))
                            .into_styled(line_style)
                            .draw(display)?;
                    }
                    pen = Some(point);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    let from = pen.unwrap_or(to);
                    let mut prev = from.to_pixel(self.origin);

                    for j in 1..=self.curve_subdivisions.max(1) {
                        let t = j as f32 * step;
                        let next = cubic_point(from, control1, control2, to, t).to_pixel(self.origin);
                        if next != prev {
                            Line::new(prev, next).into_styled(line_style).draw(display)?;
                            prev = next;
                        }
                    }
                    pen = Some(to);
                }
            }
        }

        Ok(())
    }

    fn draw_markers<D: DrawTarget<Color = Rgb565>>(
        &self,
        output: &RenderOutput,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let diameter = libm::roundf(output.marker_diameter) as u32;
        if diameter == 0 {
            return Ok(());
        }

        let style = PrimitiveStyle::with_fill(output.stroke_color);
        for center in &output.marker_points {
            Circle::with_center(center.to_pixel(self.origin), diameter)
                .into_styled(style)
                .draw(display)?;
        }

        Ok(())
    }

    /// Fade from the gridline color (bottom) to the background (top)
    fn gradient_colors(&self) -> Vec<Rgb565> {
        let bands = self.gradient_bands.max(1) as usize;
        (0..bands)
            .map(|i| {
                let position = if bands > 1 {
                    i as f32 / (bands - 1) as f32
                } else {
                    0.0
                };
                lerp_color(
                    self.gridline_color,
                    self.background,
                    position / GRIDLINE_GRADIENT_END,
                )
            })
            .collect()
    }
}

/// Endpoints of band `index` out of `bands` along the segment `start..end`
///
/// Pixel coordinates can sit anywhere in the `i32` range, so the
/// interpolation runs in `i64`.
fn band_bounds(start: Point, end: Point, index: usize, bands: usize) -> (Point, Point) {
    let bands = bands.max(1) as i64;
    let index = (index as i64).min(bands - 1);
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);

    let at = |step: i64| {
        Point::new(
            (i64::from(start.x) + dx * step / bands) as i32,
            (i64::from(start.y) + dy * step / bands) as i32,
        )
    };

    let to = if index == bands - 1 { end } else { at(index + 1) };
    (at(index), to)
}

/// Point on a cubic Bezier curve at parameter `t`
fn cubic_point(p0: PointF, c1: PointF, c2: PointF, p3: PointF, t: f32) -> PointF {
    let u = 1.0 - t;
    p0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + p3 * (t * t * t)
}
