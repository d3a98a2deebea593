//! Monochrome E-Paper Canvas and Panel Driver
//!
//! A 1-bit-per-pixel drawing canvas plus a driver that transfers rectangular
//! regions of it into a register-addressed e-paper panel (Waveshare 2.9"
//! style controllers, 128x296 by default).
//!
//! ## Features
//!
//! - `no_std` compatible (needs `alloc`)
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Lines, rectangles, circles, flips and 90° rotations on a packed canvas
//! - Windowed transfers with clipping against every panel edge
//! - Full and partial refresh waveforms
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use epd_mono::{Builder, Canvas, Color, Display, Draw, Interface, Point, Rect, RefreshMode};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let busy = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst, busy);
//! let config = match Builder::epd2in9().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut display = Display::new(interface, config);
//! let _ = display.init(RefreshMode::Full, &mut delay);
//!
//! let mut canvas = match Canvas::new(128, 296) {
//!     Ok(canvas) => canvas,
//!     Err(_) => return,
//! };
//! canvas.clear(Color::White);
//! canvas.fill_rect(Color::Black, Rect::new(Point::new(10, 10), Point::new(50, 30)));
//! let _ = display.display_canvas(&canvas, 0, 0, &mut delay);
//! ```

#![no_std]

extern crate alloc;

/// Packed 1-bpp canvas and the pixel access trait
pub mod canvas;
/// Colors for monochrome e-paper panels
pub mod color;
/// Default command opcodes
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Text rendering through an external glyph rasterizer
pub mod glyph;
/// Hardware interface abstraction
pub mod interface;
/// Waveform look-up tables
pub mod lut;
/// Refresh mode tracking
pub mod mode;
/// Drawing primitives
pub mod raster;
/// Canvas flips and rotations
pub mod rotation;
/// Transfer regions and address windows
pub mod window;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use canvas::{Canvas, Surface};
pub use color::Color;
pub use config::{Builder, CommandTable, Config, Dimensions, MAX_WIDTH, Waveforms};
pub use display::Display;
pub use error::{BuilderError, CanvasError, Error, ModeError};
pub use glyph::{GlyphSource, draw_text};
pub use interface::InterfaceError;
pub use interface::{BUSY_POLL_INTERVAL_MS, DisplayInterface, Interface};
pub use mode::{ModeController, RefreshMode};
pub use raster::{Draw, Point, Rect};
pub use rotation::Rotation;
pub use window::{AddressWindow, Region};
