//! Color definitions and palette management
//!
//! Colors are RGB565, the 16-bit format used by the embedded canvas.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Primary background color - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Light gray - gridlines on dark backgrounds
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Dark gray - gridlines on light backgrounds
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 20, 10);

// ============================================================================
// Graph Colors
// ============================================================================

/// Data line and marker color - pure red
pub const COLOR_STATS: Rgb565 = Rgb565::new(31, 0, 0);

/// Gridline color at the start of its fade
pub const COLOR_GRIDLINE: Rgb565 = LIGHT_GRAY;

// ============================================================================
// Color Palette
// ============================================================================

/// Colors used together when drawing a stats graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphPalette {
    /// Surface behind the graph; gridlines fade into it
    pub background: Rgb565,
    /// Data line and marker color
    pub stroke: Rgb565,
    /// Gridline color
    pub gridline: Rgb565,
}

impl Default for GraphPalette {
    /// Returns the default dark palette
    fn default() -> Self {
        Self::dark()
    }
}

impl GraphPalette {
    /// Light gridlines on a dark background
    pub fn dark() -> Self {
        Self {
            background: COLOR_BACKGROUND,
            stroke: COLOR_STATS,
            gridline: COLOR_GRIDLINE,
        }
    }

    /// Dark gridlines on a white background
    pub fn light() -> Self {
        Self {
            background: WHITE,
            stroke: COLOR_STATS,
            gridline: DARK_GRAY,
        }
    }
}

/// Linear blend between two colors, `t` clamped to `0.0..=1.0`
pub fn lerp_color(start: Rgb565, end: Rgb565, t: f32) -> Rgb565 {
    use embedded_graphics::prelude::*;

    let t = t.clamp(0.0, 1.0);
    let (r0, g0, b0) = rgb565_to_rgb888(start.into_storage());
    let (r1, g1, b1) = rgb565_to_rgb888(end.into_storage());

    let r = r0 as f32 + (r1 as f32 - r0 as f32) * t;
    let g = g0 as f32 + (g1 as f32 - g0 as f32) * t;
    let b = b0 as f32 + (b1 as f32 - b0 as f32) * t;

    Rgb565::new(r as u8 >> 3, g as u8 >> 2, b as u8 >> 3)
}

fn rgb565_to_rgb888(raw: u16) -> (u8, u8, u8) {
    let r5 = ((raw >> 11) & 0x1f) as u8;
    let g6 = ((raw >> 5) & 0x3f) as u8;
    let b5 = (raw & 0x1f) as u8;

    ((r5 << 3) | (r5 >> 2), (g6 << 2) | (g6 >> 4), (b5 << 3) | (b5 >> 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_are_exact() {
        assert_eq!(lerp_color(LIGHT_GRAY, COLOR_BACKGROUND, 0.0), LIGHT_GRAY);
        assert_eq!(lerp_color(LIGHT_GRAY, COLOR_BACKGROUND, 1.0), COLOR_BACKGROUND);
    }

    #[test]
    fn test_lerp_clamps_parameter() {
        assert_eq!(lerp_color(WHITE, DARK_GRAY, -2.0), WHITE);
        assert_eq!(lerp_color(WHITE, DARK_GRAY, 3.0), DARK_GRAY);
    }

    #[test]
    fn test_palettes_differ_in_background() {
        assert_ne!(GraphPalette::dark().background, GraphPalette::light().background);
        assert_eq!(GraphPalette::default(), GraphPalette::dark());
    }
}
