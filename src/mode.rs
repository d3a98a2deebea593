//! Refresh mode tracking
//!
//! The panel runs whatever waveform table was written during the last init.
//! [`ModeController`] remembers which one that was, so a transfer that asks
//! for a different mode is rejected instead of silently refreshing with the
//! wrong waveform.
//!
//! ```
//! use epd_mono::{ModeController, ModeError, RefreshMode};
//!
//! let mut modes = ModeController::new();
//! assert_eq!(modes.require(RefreshMode::Full), Err(ModeError::NotInitialized));
//!
//! modes.activate(RefreshMode::Full);
//! assert!(modes.require(RefreshMode::Full).is_ok());
//! assert!(modes.require(RefreshMode::Partial).is_err());
//! ```

use crate::config::Waveforms;
use crate::error::ModeError;

/// Refresh mode of the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshMode {
    /// Complete transition of every pixel
    ///
    /// Slow and flashes, removes ghosting.
    #[default]
    Full,
    /// Reduced waveform that only drives changed pixels
    ///
    /// Fast, ghosting builds up over repeated use.
    Partial,
}

impl RefreshMode {
    /// Waveform table for this mode
    pub fn waveform(self, waveforms: &Waveforms) -> &'static [u8] {
        match self {
            Self::Full => waveforms.full,
            Self::Partial => waveforms.partial,
        }
    }
}

/// Tracks the waveform currently loaded into the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeController {
    active: Option<RefreshMode>,
}

impl ModeController {
    /// Controller for a panel with no waveform loaded
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Mode loaded by the last init, if any
    pub fn active(&self) -> Option<RefreshMode> {
        self.active
    }

    /// Record that `mode`'s waveform was loaded
    pub fn activate(&mut self, mode: RefreshMode) {
        self.active = Some(mode);
    }

    /// Forget the loaded waveform (panel asleep or reset)
    pub fn deactivate(&mut self) {
        self.active = None;
    }

    /// Loaded mode, or `NotInitialized`
    pub fn current(&self) -> Result<RefreshMode, ModeError> {
        self.active.ok_or(ModeError::NotInitialized)
    }

    /// Check that `requested` is the loaded mode
    ///
    /// # Errors
    ///
    /// - `ModeError::NotInitialized` if nothing is loaded
    /// - `ModeError::Mismatch` if another mode is loaded
    pub fn require(&self, requested: RefreshMode) -> Result<(), ModeError> {
        let active = self.current()?;
        if active != requested {
            return Err(ModeError::Mismatch { active, requested });
        }
        Ok(())
    }
}
