//! Error types for the driver
//!
//! This module defines error types for canvas construction ([`CanvasError`]),
//! configuration building ([`BuilderError`]), the refresh mode state
//! ([`ModeError`]) and display operations ([`Error`]).
//!
//! Out-of-bounds drawing is never an error: pixels outside a canvas are
//! silently dropped.
//!
//! ## Example
//!
//! ```
//! use epd_mono::{Builder, BuilderError, Canvas, CanvasError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Width must be a multiple of 8
//! assert!(Dimensions::new(130, 296).is_err());
//!
//! // Zero-sized canvas
//! assert!(matches!(
//!     Canvas::new(0, 16),
//!     Err(CanvasError::InvalidDimensions { .. })
//! ));
//! ```

use crate::interface::DisplayInterface;
use crate::mode::RefreshMode;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error. Bytes already sent stay sent;
    /// the caller must repeat the whole transfer.
    Interface(I::Error),
    /// Pixel buffer is shorter than the region it describes
    ///
    /// Reported before anything reaches the interface.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// No waveform loaded: [`Display::init`](crate::Display::init) was never
    /// called, or the panel was put to sleep since
    NotInitialized,
    /// The requested refresh mode is not the one loaded by the last init
    ModeMismatch {
        /// Mode loaded into the panel
        active: RefreshMode,
        /// Mode the caller asked for
        requested: RefreshMode,
    },
}

impl<I: DisplayInterface> From<ModeError> for Error<I> {
    fn from(error: ModeError) -> Self {
        match error {
            ModeError::NotInitialized => Self::NotInitialized,
            ModeError::Mismatch { active, requested } => Self::ModeMismatch { active, requested },
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Bitmap too small: required {required} bytes, provided {provided}"
                )
            }
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::ModeMismatch { active, requested } => write!(
                f,
                "Refresh mode {requested:?} requested while {active:?} is loaded, re-run init"
            ),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Refresh mode precondition violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeError {
    /// No waveform has been loaded
    NotInitialized,
    /// A different waveform is loaded
    Mismatch {
        /// Mode loaded into the panel
        active: RefreshMode,
        /// Mode the caller asked for
        requested: RefreshMode,
    },
}

impl core::fmt::Display for ModeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "No refresh mode loaded"),
            Self::Mismatch { active, requested } => {
                write!(f, "Refresh mode {requested:?} requested, {active:?} loaded")
            }
        }
    }
}

impl core::error::Error for ModeError {}

/// Errors from canvas construction and parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// Width or height is zero
    InvalidDimensions {
        /// Requested width
        width: u16,
        /// Requested height
        height: u16,
    },
    /// Wire data ends before the header or the declared bitmap
    Truncated {
        /// Bytes needed
        required: usize,
        /// Bytes available
        provided: usize,
    },
}

impl core::fmt::Display for CanvasError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid canvas dimensions {width}x{height}")
            }
            Self::Truncated { required, provided } => {
                write!(
                    f,
                    "Canvas data truncated: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl core::error::Error for CanvasError {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Requested width
        width: u16,
        /// Requested height
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max width {}, width must be multiple of 8)",
                crate::config::MAX_WIDTH
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
