//! Waveform look-up tables for the 2.9" panel
//!
//! The controller has no built-in waveform for this panel. One of these
//! tables is written with [`WRITE_LUT_REGISTER`](crate::command::WRITE_LUT_REGISTER)
//! during init and stays active until the next init.

/// Length of a waveform table in bytes
pub const LUT_LEN: usize = 30;

/// Full refresh: drives every pixel through the complete transition
///
/// Slow and flickers, but leaves no ghosting.
pub const LUT_FULL_UPDATE: [u8; LUT_LEN] = [
    0x02, 0x02, 0x01, 0x11, 0x12, 0x12, 0x22, 0x22, 0x66, 0x69, 0x69, 0x59, 0x58, 0x99, 0x99,
    0x88, 0x00, 0x00, 0x00, 0x00, 0xF8, 0xB4, 0x13, 0x51, 0x35, 0x51, 0x51, 0x19, 0x01, 0x00,
];

/// Partial refresh: only pixels that change are driven
///
/// Fast, ghosting accumulates over repeated use.
pub const LUT_PARTIAL_UPDATE: [u8; LUT_LEN] = [
    0x10, 0x18, 0x18, 0x08, 0x18, 0x18, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x13, 0x14, 0x44, 0x12, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
