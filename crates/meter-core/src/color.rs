//! Color representation for gauge paints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color with values in the range [0.0, 1.0].
///
/// Deserializes from either a `{ r, g, b, a }` map or a hex string such as
/// `"#ff3b30"`, which keeps YAML gauge configurations readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| ColorParseError::InvalidHex)
        };

        match hex.len() {
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// Red (#ff3b30), the default needle color and low end of the spectrum.
    pub const RED: Self = Self {
        r: 1.0,
        g: 0.231,
        b: 0.188,
        a: 1.0,
    };
    /// Yellow (#ffcc00)
    pub const YELLOW: Self = Self {
        r: 1.0,
        g: 0.8,
        b: 0.0,
        a: 1.0,
    };
    /// Green (#34c759)
    pub const GREEN: Self = Self {
        r: 0.204,
        g: 0.78,
        b: 0.349,
        a: 1.0,
    };
    /// Mid gray (#8e8e93), used for tick marks.
    pub const GRAY: Self = Self {
        r: 0.557,
        g: 0.557,
        b: 0.576,
        a: 1.0,
    };
    /// Light gray (#d1d1d6), used for the gauge track.
    pub const LIGHT_GRAY: Self = Self {
        r: 0.82,
        g: 0.82,
        b: 0.839,
        a: 1.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Rgba {
        r: f32,
        g: f32,
        b: f32,
        #[serde(default = "opaque")]
        a: f32,
    },
}

const fn opaque() -> f32 {
    1.0
}

impl TryFrom<ColorRepr> for Color {
    type Error = ColorParseError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(hex) => Self::from_hex(&hex),
            ColorRepr::Rgba { r, g, b, a } => Ok(Self::new(r, g, b, a)),
        }
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Invalid hex characters
    #[error("invalid hex characters")]
    InvalidHex,
    /// Invalid string length
    #[error("invalid hex string length (expected 6 or 8)")]
    InvalidLength,
}
