//! RGBA color type for drawing operations.

/// Luminance weight of the red channel (Rec. 601).
pub const LUMA_WEIGHT_R: f32 = 0.299;
/// Luminance weight of the green channel (Rec. 601).
pub const LUMA_WEIGHT_G: f32 = 0.587;
/// Luminance weight of the blue channel (Rec. 601).
pub const LUMA_WEIGHT_B: f32 = 0.114;

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from RGB u8 values (0-255).
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Luminance of the color using the same Rec. 601 weights the
    /// grayscale conversion uses.
    pub fn luminance(&self) -> f32 {
        LUMA_WEIGHT_R * self.r + LUMA_WEIGHT_G * self.g + LUMA_WEIGHT_B * self.b
    }

    /// Luminance quantized to the 0-255 scale.
    pub fn luminance_u8(&self) -> u8 {
        (self.luminance().clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Convert to RGB u8 values (ignores alpha).
    pub fn to_rgb_u8(&self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    // Common colors (opaque)
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_rgb() {
        let c = Color::rgb(0.5, 0.25, 0.75);
        assert_eq!(c.r, 0.5);
        assert_eq!(c.g, 0.25);
        assert_eq!(c.b, 0.75);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_color_from_rgb_u8() {
        let c = Color::from_rgb_u8(255, 128, 0);
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 0.502).abs() < 0.01);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_luminance() {
        assert!((Color::WHITE.luminance() - 1.0).abs() < 0.001);
        assert_eq!(Color::BLACK.luminance(), 0.0);
        // Rec. 601 weights green heaviest
        assert!((Color::GREEN.luminance() - 0.587).abs() < 0.001);
        assert!(Color::GREEN.luminance() > Color::RED.luminance());
        assert!(Color::GREEN.luminance() > Color::BLUE.luminance());
    }

    #[test]
    fn test_luminance_u8() {
        assert_eq!(Color::BLACK.luminance_u8(), 0);
        assert_eq!(Color::WHITE.luminance_u8(), 255);
        assert_eq!(Color::GREEN.luminance_u8(), 150);
    }

    #[test]
    fn test_to_rgb_u8() {
        assert_eq!(Color::GREEN.to_rgb_u8(), [0, 255, 0]);
        assert_eq!(Color::from_rgb_u8(12, 34, 56).to_rgb_u8(), [12, 34, 56]);
    }
}
