//! Text rendering through an external glyph rasterizer
//!
//! The crate does no font shaping. A [`GlyphSource`] turns a string into the
//! set of pixels its glyphs cover, relative to the text origin (the pen
//! position on the baseline). [`draw_text`] offsets those pixels and writes
//! them into any [`Surface`].
//!
//! Closures implement [`GlyphSource`] directly, so wrapping a font engine is
//! a one-liner.
//!
//! ```
//! use epd_mono::{Canvas, Color, Point, glyph::draw_text};
//!
//! // A "font" whose glyphs are 1-pixel vertical bars of `size` height
//! let bars = |text: &str, size: u32| {
//!     text.chars()
//!         .enumerate()
//!         .flat_map(|(i, _)| (0..size as i32).map(move |dy| Point::new(2 * i as i32, -dy)))
//!         .collect::<Vec<_>>()
//! };
//!
//! let mut canvas = match Canvas::new(16, 8) {
//!     Ok(canvas) => canvas,
//!     Err(_) => return,
//! };
//! canvas.clear(Color::White);
//! draw_text(&mut canvas, &bars, Color::Black, "ab", 3, Point::new(1, 6));
//!
//! assert_eq!(canvas.get(1, 6), Some(Color::Black));
//! assert_eq!(canvas.get(3, 4), Some(Color::Black));
//! assert_eq!(canvas.get(3, 3), Some(Color::White));
//! ```

use alloc::vec::Vec;

use crate::canvas::Surface;
use crate::color::Color;
use crate::raster::Point;

/// External font engine: measures and rasterizes text
pub trait GlyphSource {
    /// Pixels covered by `text` rendered at `size`, relative to the origin
    fn glyph_pixels(&self, text: &str, size: u32) -> Vec<Point>;
}

impl<F> GlyphSource for F
where
    F: Fn(&str, u32) -> Vec<Point>,
{
    fn glyph_pixels(&self, text: &str, size: u32) -> Vec<Point> {
        self(text, size)
    }
}

/// Draw `text` with its origin at `origin`
///
/// Covered pixels outside the surface are dropped like any other
/// out-of-bounds write.
pub fn draw_text<S, G>(
    surface: &mut S,
    glyphs: &G,
    color: Color,
    text: &str,
    size: u32,
    origin: Point,
) where
    S: Surface + ?Sized,
    G: GlyphSource + ?Sized,
{
    let pixels = glyphs.glyph_pixels(text, size);
    log::trace!("draw_text: {} covered pixels at {:?}", pixels.len(), origin);
    for offset in pixels {
        let at = origin + offset;
        surface.set_pixel(at.x, at.y, color);
    }
}
