//! Colors for monochrome e-paper panels
//!
//! This module defines the [`Color`] enum for the two states a bistable
//! monochrome pixel can hold.
//!
//! ## Color Representation
//!
//! Pixels are packed one bit per pixel, most significant bit first:
//!
//! | Color | Role  | Bit | Fill byte |
//! |-------|-------|-----|-----------|
//! | Black | ink   | 0   | 0x00      |
//! | White | paper | 1   | 0xFF      |
//!
//! ## Example
//!
//! ```
//! use epd_mono::Color;
//!
//! assert_eq!(Color::Black.fill_byte(), 0x00);
//! assert_eq!(Color::White.fill_byte(), 0xFF);
//!
//! // Anything darker than mid-gray becomes ink
//! assert_eq!(Color::from_luma(0x20), Color::Black);
//! assert_eq!(Color::from_luma(0xE0), Color::White);
//! ```

/// Luminance at or above which a color is treated as paper
pub const LUMA_THRESHOLD: u8 = 0x80;

/// Colors supported by monochrome e-paper panels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Ink pixels (bit 0)
    Black,
    /// Paper pixels (bit 1)
    #[default]
    White,
}

impl Color {
    /// Bit value stored in the packed buffer for this color
    pub const fn bit(self) -> bool {
        match self {
            Self::Black => false,
            Self::White => true,
        }
    }

    /// Color represented by a packed buffer bit
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::White } else { Self::Black }
    }

    /// Byte value with all eight pixels set to this color
    ///
    /// These are the only two legal fill values for clearing a canvas or the
    /// panel memory.
    pub const fn fill_byte(self) -> u8 {
        match self {
            Self::Black => 0x00,
            Self::White => 0xFF,
        }
    }

    /// The other color
    pub const fn inverse(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Threshold an 8-bit luminance value
    ///
    /// Values below [`LUMA_THRESHOLD`] map to ink, everything else to paper.
    pub const fn from_luma(luma: u8) -> Self {
        if luma < LUMA_THRESHOLD {
            Self::Black
        } else {
            Self::White
        }
    }

    /// Threshold an RGB color by its average channel intensity
    ///
    /// ```
    /// use epd_mono::Color;
    ///
    /// assert_eq!(Color::from_rgb(255, 0, 0), Color::Black);
    /// assert_eq!(Color::from_rgb(200, 200, 120), Color::White);
    /// ```
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let sum = r as u16 + g as u16 + b as u16;
        Self::from_luma((sum / 3) as u8)
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::Black,
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::White,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::On,
            Color::White => Self::Off,
        }
    }
}
