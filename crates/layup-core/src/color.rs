use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed 24-bit `0xRRGGBB` value. Bits above 24
    /// are ignored.
    pub fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Draw a uniformly random color from the full 24-bit RGB space.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from_u32(rng.gen_range(0..=0xFF_FF_FF))
    }

    /// CSS-style hex form: `#` followed by exactly six lowercase hex
    /// digits. Each component renders as two digits, so values below 0x10
    /// keep their leading zero.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_f32_array(&self, opacity: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            opacity,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
