//! Display configuration types and builder
//!
//! Everything panel specific lives in a [`Config`] value handed to
//! [`Display::new`](crate::Display::new): dimensions, the opcode table, the
//! waveform tables and the init parameters. Two displays with different
//! configurations can coexist.

use crate::command;
use crate::lut::{LUT_FULL_UPDATE, LUT_PARTIAL_UPDATE};
use crate::window::Region;

pub use crate::error::BuilderError;

/// Widest supported panel
///
/// X addresses are sent as one byte in units of 8 pixels.
pub const MAX_WIDTH: u16 = 256 * 8;

/// Native width of the 2.9" panel
pub const EPD2IN9_WIDTH: u16 = 128;

/// Native height of the 2.9" panel
pub const EPD2IN9_HEIGHT: u16 = 296;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (source outputs)
    pub width: u16,
    /// Height in pixels (gate outputs)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width or height is zero
    /// - width > [`MAX_WIDTH`]
    /// - width % 8 != 0 (must be byte-aligned for memory)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_WIDTH || width % 8 != 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Bytes per panel row
    pub fn row_bytes(&self) -> usize {
        usize::from(self.width) / 8
    }

    /// Calculate required full-frame buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.row_bytes() * usize::from(self.height)
    }

    /// Region covering the whole panel
    pub fn full_region(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }
}

/// Opcodes of the panel's register map
///
/// Defaults come from [`crate::command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandTable {
    /// Driver output control
    pub driver_output_control: u8,
    /// Booster soft-start control
    pub booster_soft_start_control: u8,
    /// Deep sleep
    pub deep_sleep_mode: u8,
    /// Data entry mode
    pub data_entry_mode_setting: u8,
    /// Master activation
    pub master_activation: u8,
    /// Display update control 2
    pub display_update_control_2: u8,
    /// Write RAM
    pub write_ram: u8,
    /// Write VCOM register
    pub write_vcom_register: u8,
    /// Write LUT register
    pub write_lut_register: u8,
    /// Set dummy line period
    pub set_dummy_line_period: u8,
    /// Set gate line width
    pub set_gate_time: u8,
    /// RAM X window
    pub set_ram_x_address_start_end_position: u8,
    /// RAM Y window
    pub set_ram_y_address_start_end_position: u8,
    /// RAM X counter
    pub set_ram_x_address_counter: u8,
    /// RAM Y counter
    pub set_ram_y_address_counter: u8,
    /// Terminate frame read/write
    pub terminate_frame_read_write: u8,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self {
            driver_output_control: command::DRIVER_OUTPUT_CONTROL,
            booster_soft_start_control: command::BOOSTER_SOFT_START_CONTROL,
            deep_sleep_mode: command::DEEP_SLEEP_MODE,
            data_entry_mode_setting: command::DATA_ENTRY_MODE_SETTING,
            master_activation: command::MASTER_ACTIVATION,
            display_update_control_2: command::DISPLAY_UPDATE_CONTROL_2,
            write_ram: command::WRITE_RAM,
            write_vcom_register: command::WRITE_VCOM_REGISTER,
            write_lut_register: command::WRITE_LUT_REGISTER,
            set_dummy_line_period: command::SET_DUMMY_LINE_PERIOD,
            set_gate_time: command::SET_GATE_TIME,
            set_ram_x_address_start_end_position: command::SET_RAM_X_ADDRESS_START_END_POSITION,
            set_ram_y_address_start_end_position: command::SET_RAM_Y_ADDRESS_START_END_POSITION,
            set_ram_x_address_counter: command::SET_RAM_X_ADDRESS_COUNTER,
            set_ram_y_address_counter: command::SET_RAM_Y_ADDRESS_COUNTER,
            terminate_frame_read_write: command::TERMINATE_FRAME_READ_WRITE,
        }
    }
}

/// Waveform tables loaded by init
///
/// The tables are opaque to the driver and sent as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Waveforms {
    /// Table for full refresh
    pub full: &'static [u8],
    /// Table for partial refresh
    pub partial: &'static [u8],
}

impl Default for Waveforms {
    fn default() -> Self {
        Self {
            full: &LUT_FULL_UPDATE,
            partial: &LUT_PARTIAL_UPDATE,
        }
    }
}

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Register opcodes
    pub commands: CommandTable,
    /// Waveform tables
    pub waveforms: Waveforms,
    /// Booster soft-start settings
    pub booster_soft_start: [u8; 3],
    /// Gate scanning direction byte of driver output control
    pub gate_scanning: u8,
    /// VCOM register value
    pub vcom: u8,
    /// Dummy line period
    pub dummy_line_period: u8,
    /// Gate line width
    pub gate_time: u8,
    /// Data entry mode byte
    pub data_entry_mode: u8,
    /// Display update control 2 value used to start a refresh
    pub display_update_ctrl2: u8,
    /// Deep sleep mode parameter
    pub deep_sleep: u8,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use epd_mono::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(128, 250) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).vcom(0x55).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Register opcodes
    commands: CommandTable,
    /// Waveform tables
    waveforms: Waveforms,
    /// Booster soft-start settings
    booster_soft_start: [u8; 3],
    /// Gate scanning direction byte
    gate_scanning: u8,
    /// VCOM register value
    vcom: u8,
    /// Dummy line period
    dummy_line_period: u8,
    /// Gate line width
    gate_time: u8,
    /// Data entry mode byte
    data_entry_mode: u8,
    /// Display update control 2 value
    display_update_ctrl2: u8,
    /// Deep sleep mode parameter
    deep_sleep: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            commands: CommandTable::default(),
            waveforms: Waveforms::default(),
            booster_soft_start: [0xCF, 0xCE, 0x8D],
            gate_scanning: 0x00,
            vcom: 0x7C,
            // 4 dummy lines per gate
            dummy_line_period: 0x1A,
            // 2us per line
            gate_time: 0x08,
            // X increment, Y increment
            data_entry_mode: 0x03,
            // Clock and analog on, then display pattern
            display_update_ctrl2: 0xC4,
            deep_sleep: 0x01,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preset for the Waveshare 2.9" panel (128x296)
    pub fn epd2in9() -> Self {
        Self::new().dimensions(Dimensions {
            width: EPD2IN9_WIDTH,
            height: EPD2IN9_HEIGHT,
        })
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Replace the opcode table
    pub fn commands(mut self, commands: CommandTable) -> Self {
        self.commands = commands;
        self
    }

    /// Replace the waveform tables
    pub fn waveforms(mut self, waveforms: Waveforms) -> Self {
        self.waveforms = waveforms;
        self
    }

    /// Set booster soft-start parameters
    pub fn booster_soft_start(mut self, values: [u8; 3]) -> Self {
        self.booster_soft_start = values;
        self
    }

    /// Set gate scanning direction
    pub fn gate_scanning(mut self, value: u8) -> Self {
        self.gate_scanning = value;
        self
    }

    /// Set VCOM value
    pub fn vcom(mut self, value: u8) -> Self {
        self.vcom = value;
        self
    }

    /// Set dummy line period
    pub fn dummy_line_period(mut self, value: u8) -> Self {
        self.dummy_line_period = value;
        self
    }

    /// Set gate line width
    pub fn gate_time(mut self, value: u8) -> Self {
        self.gate_time = value;
        self
    }

    /// Set data entry mode
    pub fn data_entry_mode(mut self, value: u8) -> Self {
        self.data_entry_mode = value;
        self
    }

    /// Set Display Update Control 2 value
    pub fn display_update_ctrl2(mut self, value: u8) -> Self {
        self.display_update_ctrl2 = value;
        self
    }

    /// Set deep sleep mode parameter
    pub fn deep_sleep(mut self, value: u8) -> Self {
        self.deep_sleep = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            commands: self.commands,
            waveforms: self.waveforms,
            booster_soft_start: self.booster_soft_start,
            gate_scanning: self.gate_scanning,
            vcom: self.vcom,
            dummy_line_period: self.dummy_line_period,
            gate_time: self.gate_time,
            data_entry_mode: self.data_entry_mode,
            display_update_ctrl2: self.display_update_ctrl2,
            deep_sleep: self.deep_sleep,
        })
    }
}
