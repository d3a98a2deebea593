//! Packed monochrome canvas
//!
//! [`Canvas`] owns a one-bit-per-pixel buffer. Rows are byte aligned and
//! packed most significant bit first: pixel `(x, y)` lives in byte
//! `y * row_bytes + x / 8`, bit `7 - x % 8`. Padding bits past `width` in the
//! last byte of a row are unused.
//!
//! Drawing code only talks to the [`Surface`] trait, so any test double with
//! the same four capabilities can stand in for a canvas.
//!
//! ## Wire format
//!
//! [`Canvas::to_bytes`] and [`Canvas::from_bytes`] use a 4-byte big-endian
//! header (`width`, `height`) followed by the packed bitmap:
//!
//! ```
//! use epd_mono::{Canvas, Color};
//!
//! let mut canvas = match Canvas::new(16, 2) {
//!     Ok(canvas) => canvas,
//!     Err(_) => return,
//! };
//! canvas.clear(Color::White);
//! canvas.set(0, 0, Color::Black);
//!
//! let bytes = canvas.to_bytes();
//! assert_eq!(&bytes[..4], &[0x00, 0x10, 0x00, 0x02]);
//! assert_eq!(bytes[4], 0x7F);
//!
//! let decoded = Canvas::from_bytes(&bytes).ok();
//! assert_eq!(decoded.as_ref(), Some(&canvas));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::color::Color;
use crate::error::CanvasError;
use crate::window::Region;

/// Length of the width/height header in the wire format
pub const HEADER_LEN: usize = 4;

/// Minimal pixel access needed by the rasterizer
///
/// Coordinates are signed so that drawing algorithms may walk past the edges
/// freely. Implementations must ignore out-of-bounds writes and report
/// out-of-bounds reads as `None`.
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Read a pixel, `None` when `(x, y)` is outside the surface
    fn pixel(&self, x: i32, y: i32) -> Option<Color>;

    /// Write a pixel, silently ignored when `(x, y)` is outside the surface
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
}

/// One-bit-per-pixel drawing buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    bits: Vec<u8>,
}

/// Bytes needed to store one row of `width` pixels
pub const fn row_bytes(width: u16) -> usize {
    (width as usize).div_ceil(8)
}

impl Canvas {
    /// Create a canvas with every bit cleared (all ink)
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        Ok(Self::zeroed(width, height))
    }

    /// Allocate without validation, callers guarantee non-zero dimensions
    pub(crate) fn zeroed(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            bits: vec![0; row_bytes(width) * height as usize],
        }
    }

    /// Parse a canvas from the header-prefixed wire format
    ///
    /// Trailing bytes past the declared bitmap are ignored.
    ///
    /// # Errors
    ///
    /// - `CanvasError::Truncated` if the header or the bitmap is incomplete
    /// - `CanvasError::InvalidDimensions` if the header declares a zero dimension
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CanvasError> {
        let Some((header, bitmap)) = bytes.split_first_chunk::<HEADER_LEN>() else {
            return Err(CanvasError::Truncated {
                required: HEADER_LEN,
                provided: bytes.len(),
            });
        };
        let width = u16::from_be_bytes([header[0], header[1]]);
        let height = u16::from_be_bytes([header[2], header[3]]);

        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        // Check the length before allocating anything
        let required = row_bytes(width) * usize::from(height);
        let Some(bits) = bitmap.get(..required) else {
            return Err(CanvasError::Truncated {
                required: HEADER_LEN + required,
                provided: bytes.len(),
            });
        };
        Ok(Self {
            width,
            height,
            bits: bits.to_vec(),
        })
    }

    /// Serialize into the header-prefixed wire format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.bits.len());
        out.extend_from_slice(&self.width.to_be_bytes());
        out.extend_from_slice(&self.height.to_be_bytes());
        out.extend_from_slice(&self.bits);
        out
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Bytes per packed row
    pub fn row_bytes(&self) -> usize {
        row_bytes(self.width)
    }

    /// Packed bitmap without header
    pub fn buffer(&self) -> &[u8] {
        &self.bits
    }

    /// Mutable packed bitmap without header
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.bits
    }

    /// Transfer region covering the whole canvas placed at `(x, y)`
    pub fn region_at(&self, x: i32, y: i32) -> Region {
        Region::new(x, y, self.width, self.height)
    }

    /// Byte index and bit mask of an in-bounds pixel
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y * self.row_bytes() + x / 8, 0x80 >> (x % 8)))
    }

    /// Read a pixel, `None` outside the canvas
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.locate(x, y)
            .map(|(index, mask)| Color::from_bit(self.bits[index] & mask != 0))
    }

    /// Write a pixel; out-of-bounds coordinates are ignored
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        if color.bit() {
            self.bits[index] |= mask;
        } else {
            self.bits[index] &= !mask;
        }
    }

    /// Fill every pixel, padding bits included, with one color
    pub fn clear(&mut self, color: Color) {
        self.bits.fill(color.fill_byte());
    }

    /// Complement every stored bit
    pub fn invert(&mut self) {
        for byte in &mut self.bits {
            *byte = !*byte;
        }
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        u32::from(self.width)
    }

    fn height(&self) -> u32 {
        u32::from(self.height)
    }

    fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.get(x, y)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.set(x, y, color);
    }
}
