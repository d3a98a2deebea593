//! Canvas flips and rotations
//!
//! Flips work directly on the packed rows. Mirroring a row reverses the byte
//! order and also the bit order inside every byte, since each byte carries
//! eight horizontally adjacent pixels.
//!
//! Rotations by 90° allocate a new buffer with width and height swapped and
//! remap pixel by pixel.
//!
//! ## Example
//!
//! ```
//! use epd_mono::{Canvas, Color};
//!
//! let mut canvas = match Canvas::new(16, 8) {
//!     Ok(canvas) => canvas,
//!     Err(_) => return,
//! };
//! canvas.set(0, 0, Color::White);
//!
//! canvas.rotate_right();
//! assert_eq!((canvas.width(), canvas.height()), (8, 16));
//! assert_eq!(canvas.get(7, 0), Some(Color::White));
//! ```

use crate::canvas::Canvas;

/// Rotation applied to a canvas, clockwise
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Canvas {
    /// Mirror top to bottom by swapping packed rows
    pub fn vertical_flip(&mut self) {
        let stride = self.row_bytes();
        let height = usize::from(self.height());
        let bits = self.buffer_mut();
        for y in 0..height / 2 {
            let (top, bottom) = bits.split_at_mut((height - 1 - y) * stride);
            top[y * stride..(y + 1) * stride].swap_with_slice(&mut bottom[..stride]);
        }
    }

    /// Mirror left to right
    ///
    /// Byte-aligned widths swap bytes and reverse their bits. Other widths
    /// fall back to a per-pixel mirror, since the padding bits would
    /// otherwise shift the image.
    pub fn horizontal_flip(&mut self) {
        if self.width() % 8 == 0 {
            let stride = self.row_bytes();
            for row in self.buffer_mut().chunks_exact_mut(stride) {
                row.reverse();
                for byte in row.iter_mut() {
                    *byte = byte.reverse_bits();
                }
            }
            return;
        }

        let width = i32::from(self.width());
        for y in 0..i32::from(self.height()) {
            for x in 0..width / 2 {
                let mirror = width - 1 - x;
                if let (Some(left), Some(right)) = (self.get(x, y), self.get(mirror, y)) {
                    self.set(x, y, right);
                    self.set(mirror, y, left);
                }
            }
        }
    }

    /// Rotate 90° clockwise, swapping width and height
    ///
    /// Source pixel `(x, y)` moves to `(height - 1 - y, x)`.
    pub fn rotate_right(&mut self) {
        let (width, height) = (i32::from(self.width()), i32::from(self.height()));
        self.remap(|x, y| (height - 1 - y, x), width, height);
    }

    /// Rotate 90° counter-clockwise, swapping width and height
    ///
    /// Source pixel `(x, y)` moves to `(y, width - 1 - x)`.
    pub fn rotate_left(&mut self) {
        let (width, height) = (i32::from(self.width()), i32::from(self.height()));
        self.remap(|x, y| (y, width - 1 - x), width, height);
    }

    /// Rotate 180°
    pub fn rotate_180(&mut self) {
        self.vertical_flip();
        self.horizontal_flip();
    }

    /// Apply a clockwise rotation
    pub fn rotate(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::Rotate0 => {}
            Rotation::Rotate90 => self.rotate_right(),
            Rotation::Rotate180 => self.rotate_180(),
            Rotation::Rotate270 => self.rotate_left(),
        }
    }

    fn remap<F>(&mut self, target: F, width: i32, height: i32)
    where
        F: Fn(i32, i32) -> (i32, i32),
    {
        let mut rotated = Canvas::zeroed(self.height(), self.width());
        for y in 0..height {
            for x in 0..width {
                if let Some(color) = self.get(x, y) {
                    let (tx, ty) = target(x, y);
                    rotated.set(tx, ty, color);
                }
            }
        }
        *self = rotated;
    }
}
