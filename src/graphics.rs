//! Graphics support via embedded-graphics
//!
//! [`Canvas`] implements [`DrawTarget`] with [`Color`] as its pixel color, so
//! the embedded-graphics primitives, fonts and images draw straight into the
//! packed buffer. Pixels outside the canvas are dropped, as with every other
//! drawing path.
//!
//! ## Example
//!
//! ```rust
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//!     text::Text,
//! };
//! use epd_mono::{Canvas, Color};
//!
//! let mut canvas = match Canvas::new(128, 64) {
//!     Ok(canvas) => canvas,
//!     Err(_) => return,
//! };
//! canvas.clear(Color::White);
//!
//! let _ = Circle::new(Point::new(4, 4), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::Black, 2))
//!     .draw(&mut canvas);
//!
//! let style = MonoTextStyle::new(&FONT_6X10, Color::Black);
//! let _ = Text::new("Hello", Point::new(50, 30), style).draw(&mut canvas);
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::canvas::Canvas;
use crate::color::Color;

impl DrawTarget for Canvas {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set(x, y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Canvas::clear(self, color);
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        mono_font::{MonoTextStyle, ascii::FONT_6X10},
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
        text::Text,
    };

    fn blank(width: u16, height: u16) -> Canvas {
        let mut canvas = Canvas::new(width, height).unwrap();
        Canvas::clear(&mut canvas, Color::White);
        canvas
    }

    fn ink_count(canvas: &Canvas) -> usize {
        let mut count = 0;
        for y in 0..i32::from(canvas.height()) {
            for x in 0..i32::from(canvas.width()) {
                if canvas.get(x, y) == Some(Color::Black) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_size_matches_canvas() {
        let canvas = blank(24, 10);
        assert_eq!(canvas.size(), Size::new(24, 10));
    }

    #[test]
    fn test_filled_rectangle() {
        let mut canvas = blank(16, 16);
        Rectangle::new(Point::new(2, 3), Size::new(4, 5))
            .into_styled(PrimitiveStyle::with_fill(Color::Black))
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(ink_count(&canvas), 20);
        assert_eq!(canvas.get(2, 3), Some(Color::Black));
        assert_eq!(canvas.get(5, 7), Some(Color::Black));
        assert_eq!(canvas.get(6, 7), Some(Color::White));
    }

    #[test]
    fn test_out_of_bounds_pixels_are_dropped() {
        let mut canvas = blank(8, 8);
        Line::new(Point::new(-10, 4), Point::new(20, 4))
            .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(ink_count(&canvas), 8);
    }

    #[test]
    fn test_text_draws_ink() {
        let mut canvas = blank(64, 16);
        let style = MonoTextStyle::new(&FONT_6X10, Color::Black);
        Text::new("Hi", Point::new(2, 10), style)
            .draw(&mut canvas)
            .unwrap();
        assert!(ink_count(&canvas) > 0);
    }

    #[test]
    fn test_draw_target_clear_fills_bytes() {
        let mut canvas = blank(16, 2);
        DrawTarget::clear(&mut canvas, Color::Black).unwrap();
        assert!(canvas.buffer().iter().all(|byte| *byte == 0x00));
    }
}
