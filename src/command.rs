//! Default command opcodes
//!
//! Single-byte opcodes of the 2.9" monochrome panel controller. Commands are
//! sent with the DC line low, their parameters follow as data with DC high.
//!
//! These constants seed [`CommandTable::default`](crate::CommandTable). Panels
//! with a different register map override the table through the
//! [`Builder`](crate::Builder) instead of editing these values.
//!
//! ## Example
//!
//! ```rust,no_run
//! use epd_mono::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // VCOM voltage
//! let _ = interface.send_command(command::WRITE_VCOM_REGISTER);
//! let _ = interface.send_data(&[0x7C]);
//! ```

// Panel setup

/// Driver output control (0x01)
///
/// 3 bytes: [rows-1 (LSB), rows-1 (MSB), gate scanning]
pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;

/// Booster soft-start control (0x0C)
///
/// 3 bytes of phase timing.
pub const BOOSTER_SOFT_START_CONTROL: u8 = 0x0C;

/// Gate scan start position (0x0F)
pub const GATE_SCAN_START_POSITION: u8 = 0x0F;

/// Deep sleep mode (0x10)
///
/// Only a hardware reset wakes the controller again.
pub const DEEP_SLEEP_MODE: u8 = 0x10;

/// Data entry mode setting (0x11)
///
/// 0x03 increments X then Y, which the row streaming relies on.
pub const DATA_ENTRY_MODE_SETTING: u8 = 0x11;

/// Software reset (0x12)
pub const SW_RESET: u8 = 0x12;

/// Temperature sensor control (0x1A)
pub const TEMPERATURE_SENSOR_CONTROL: u8 = 0x1A;

// Refresh

/// Master activation (0x20)
///
/// Runs the update sequence selected by display update control 2. BUSY stays
/// asserted until the waveform finishes.
pub const MASTER_ACTIVATION: u8 = 0x20;

/// Display update control 1 (0x21)
pub const DISPLAY_UPDATE_CONTROL_1: u8 = 0x21;

/// Display update control 2 (0x22)
pub const DISPLAY_UPDATE_CONTROL_2: u8 = 0x22;

/// Terminate frame read/write (0xFF)
///
/// No-op that closes the current RAM access.
pub const TERMINATE_FRAME_READ_WRITE: u8 = 0xFF;

// Memory

/// Write RAM (0x24)
///
/// Following data bytes are stored at the address counter, which advances
/// according to the data entry mode.
pub const WRITE_RAM: u8 = 0x24;

/// Write VCOM register (0x2C)
pub const WRITE_VCOM_REGISTER: u8 = 0x2C;

/// Write LUT register (0x32)
///
/// Followed by the waveform table.
pub const WRITE_LUT_REGISTER: u8 = 0x32;

/// Set dummy line period (0x3A)
pub const SET_DUMMY_LINE_PERIOD: u8 = 0x3A;

/// Set gate line width (0x3B)
pub const SET_GATE_TIME: u8 = 0x3B;

/// Border waveform control (0x3C)
pub const BORDER_WAVEFORM_CONTROL: u8 = 0x3C;

// Addressing

/// Set RAM X address start/end (0x44)
///
/// 2 bytes: [start / 8, end / 8]. X is addressed in 8-pixel units.
pub const SET_RAM_X_ADDRESS_START_END_POSITION: u8 = 0x44;

/// Set RAM Y address start/end (0x45)
///
/// 4 bytes: [start LSB, start MSB, end LSB, end MSB]
pub const SET_RAM_Y_ADDRESS_START_END_POSITION: u8 = 0x45;

/// Set RAM X address counter (0x4E)
///
/// 1 byte: x / 8
pub const SET_RAM_X_ADDRESS_COUNTER: u8 = 0x4E;

/// Set RAM Y address counter (0x4F)
///
/// 2 bytes: [y LSB, y MSB]
pub const SET_RAM_Y_ADDRESS_COUNTER: u8 = 0x4F;
