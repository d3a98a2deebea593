//! Transfer regions and panel address windows
//!
//! A [`Region`] describes where a packed bitmap lands on the panel. Before
//! anything is sent, the region is clipped against the panel into an
//! [`AddressWindow`] plus the amount of source data to skip.
//!
//! ## Alignment
//!
//! The controller addresses X in units of 8 pixels, so a window always starts
//! on a byte column:
//!
//! - A non-negative `x` is rounded down to a multiple of 8. The low 3 bits
//!   are unaddressable and dropped.
//! - A negative `x` crops `-x` columns off the left of the source. Rows are
//!   re-packed with a bit shift so the remaining pixels start at panel
//!   column 0.
//!
//! Rows outside the panel at the top or bottom are skipped without being
//! read, so a bitmap sized exactly for its region is never over-read.

use crate::canvas;
use crate::color::Color;
use crate::config::Dimensions;

/// Placement of a packed bitmap on the panel
///
/// The bitmap has `height` rows of `ceil(width / 8)` bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Left edge in panel pixels, may be negative
    pub x: i32,
    /// Top edge in panel pixels, may be negative
    pub y: i32,
    /// Width of the bitmap in pixels
    pub width: u16,
    /// Height of the bitmap in pixels
    pub height: u16,
}

impl Region {
    /// New region
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bytes per source row
    pub const fn row_bytes(&self) -> usize {
        canvas::row_bytes(self.width)
    }

    /// Minimum bitmap length for this region
    pub const fn buffer_size(&self) -> usize {
        self.row_bytes() * self.height as usize
    }
}

/// Inclusive rectangle of panel memory a transfer writes into
///
/// Always non-empty and inside the panel. `x_start` is a multiple of 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressWindow {
    x_start: u16,
    y_start: u16,
    x_end: u16,
    y_end: u16,
}

impl AddressWindow {
    /// Window covering the whole panel
    pub fn full(dimensions: &Dimensions) -> Self {
        Self {
            x_start: 0,
            y_start: 0,
            x_end: dimensions.width.saturating_sub(1),
            y_end: dimensions.height.saturating_sub(1),
        }
    }

    /// First column in pixels
    pub fn x_start(&self) -> u16 {
        self.x_start
    }

    /// Last column in pixels
    pub fn x_end(&self) -> u16 {
        self.x_end
    }

    /// First row
    pub fn y_start(&self) -> u16 {
        self.y_start
    }

    /// Last row
    pub fn y_end(&self) -> u16 {
        self.y_end
    }

    /// Data for the RAM X start/end command, in 8-pixel units
    pub fn x_range_data(&self) -> [u8; 2] {
        [(self.x_start >> 3) as u8, (self.x_end >> 3) as u8]
    }

    /// Data for the RAM Y start/end command, little-endian
    pub fn y_range_data(&self) -> [u8; 4] {
        let [start_lo, start_hi] = self.y_start.to_le_bytes();
        let [end_lo, end_hi] = self.y_end.to_le_bytes();
        [start_lo, start_hi, end_lo, end_hi]
    }

    /// Data for the RAM X counter command
    pub fn x_counter_data(&self) -> [u8; 1] {
        [(self.x_start >> 3) as u8]
    }

    /// Data for the RAM Y counter command
    pub fn y_counter_data(&self) -> [u8; 2] {
        self.y_start.to_le_bytes()
    }

    /// Byte columns per streamed row
    pub fn columns(&self) -> usize {
        usize::from(self.x_end >> 3) - usize::from(self.x_start >> 3) + 1
    }

    /// Rows streamed
    pub fn rows(&self) -> usize {
        usize::from(self.y_end - self.y_start) + 1
    }
}

/// Clipped transfer: target window and the source data to skip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TransferPlan {
    pub(crate) window: AddressWindow,
    /// Source pixels dropped at the start of every row
    pub(crate) skip_columns: usize,
    /// Source rows dropped above the panel
    pub(crate) skip_rows: usize,
}

impl TransferPlan {
    /// Clip `region` to the panel, `None` if nothing is visible
    pub(crate) fn new(region: &Region, dimensions: &Dimensions) -> Option<Self> {
        if region.width == 0 || region.height == 0 {
            return None;
        }
        let x = i64::from(region.x);
        let y = i64::from(region.y);

        let origin_x = if x < 0 { x } else { x & !7 };
        let x_start = origin_x.max(0);
        let x_end = (origin_x + i64::from(region.width) - 1).min(i64::from(dimensions.width) - 1);
        let y_start = y.max(0);
        let y_end = (y + i64::from(region.height) - 1).min(i64::from(dimensions.height) - 1);

        if x_start > x_end || y_start > y_end {
            return None;
        }

        Some(Self {
            window: AddressWindow {
                x_start: x_start as u16,
                y_start: y_start as u16,
                x_end: x_end as u16,
                y_end: y_end as u16,
            },
            skip_columns: (x_start - origin_x) as usize,
            skip_rows: (y_start - y) as usize,
        })
    }
}

/// Copy one source row into `out`, dropping `skip_columns` leading pixels
///
/// Bits past the end of `src` read as paper (1), so the tail of the last
/// window byte stays white.
pub(crate) fn pack_row(src: &[u8], skip_columns: usize, out: &mut [u8]) {
    let first = skip_columns / 8;
    let shift = (skip_columns % 8) as u32;
    let paper = Color::White.fill_byte();
    let byte_at = |index: usize| src.get(index).copied().unwrap_or(paper);

    for (k, byte) in out.iter_mut().enumerate() {
        let high = byte_at(first + k);
        *byte = if shift == 0 {
            high
        } else {
            (high << shift) | (byte_at(first + k + 1) >> (8 - shift))
        };
    }
}
