//! Core display operations
//!
//! [`Display`] moves packed bitmaps into panel memory and triggers refreshes.
//! A transfer runs in five steps:
//!
//! 1. validate the bitmap length against its [`Region`]
//! 2. clip the region to the panel (see [`crate::window`])
//! 3. program the RAM address window and address counter
//! 4. stream the cropped rows after `WRITE_RAM`
//! 5. activate the refresh and wait for BUSY to drop
//!
//! Steps 1–4 are available alone as [`Display::write_region`], step 5 as
//! [`Display::refresh`].
//!
//! ## Refresh modes
//!
//! [`Display::init`] loads the waveform of one [`RefreshMode`]. Every transfer
//! needs a prior init, and the `*_with_mode` variants reject a mode other
//! than the loaded one. Switching between full and partial refresh always
//! means calling [`Display::init`] again.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use epd_mono::{Builder, Canvas, Color, Display, Draw, Interface, Point, RefreshMode};
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! let config = match Builder::epd2in9().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut display = Display::new(interface, config);
//! let _ = display.init(RefreshMode::Full, &mut delay);
//! let _ = display.clear(Color::White, &mut delay);
//!
//! let mut canvas = match Canvas::new(64, 32) {
//!     Ok(canvas) => canvas,
//!     Err(_) => return,
//! };
//! canvas.clear(Color::White);
//! canvas.stroke_circle(Color::Black, Point::new(32, 16), 12);
//!
//! // Fast updates from here on
//! let _ = display.init(RefreshMode::Partial, &mut delay);
//! let _ = display.display_canvas(&canvas, 32, 100, &mut delay);
//! let _ = display.sleep(&mut delay);
//! ```

use alloc::vec;
use embedded_hal::delay::DelayNs;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::mode::{ModeController, RefreshMode};
use crate::window::{AddressWindow, Region, TransferPlan, pack_row};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Driver for one monochrome panel
///
/// Owns the interface and an explicit [`Config`], so several panels (or test
/// doubles) can be driven side by side.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Waveform currently loaded
    modes: ModeController,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`init`](Self::init).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            modes: ModeController::new(),
        }
    }

    /// Reset the panel and load the waveform for `mode`
    ///
    /// Must be called before the first transfer, after [`sleep`](Self::sleep)
    /// and whenever switching between full and partial refresh.
    pub fn init<D: DelayNs>(&mut self, mode: RefreshMode, delay: &mut D) -> DisplayResult<I> {
        log::debug!("init: loading {:?} waveform", mode);
        self.modes.deactivate();
        self.interface.reset(delay);

        let commands = self.config.commands;
        let [rows_lo, rows_hi] = self.config.dimensions.height.saturating_sub(1).to_le_bytes();
        self.send_command(commands.driver_output_control)?;
        self.send_data(&[rows_lo, rows_hi, self.config.gate_scanning])?;

        let booster = self.config.booster_soft_start;
        self.send_command(commands.booster_soft_start_control)?;
        self.send_data(&booster)?;

        self.send_command(commands.write_vcom_register)?;
        self.send_data(&[self.config.vcom])?;

        self.send_command(commands.set_dummy_line_period)?;
        self.send_data(&[self.config.dummy_line_period])?;

        self.send_command(commands.set_gate_time)?;
        self.send_data(&[self.config.gate_time])?;

        self.send_command(commands.data_entry_mode_setting)?;
        self.send_data(&[self.config.data_entry_mode])?;

        let waveform = mode.waveform(&self.config.waveforms);
        self.send_command(commands.write_lut_register)?;
        self.send_data(waveform)?;

        self.modes.activate(mode);
        Ok(())
    }

    /// Pulse the reset line
    ///
    /// The controller forgets its waveform, so [`init`](Self::init) is
    /// required afterwards.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        self.interface.reset(delay);
        self.modes.deactivate();
    }

    /// Mode loaded by the last init, `None` before init or after sleep
    pub fn mode(&self) -> Option<RefreshMode> {
        self.modes.active()
    }

    /// Transfer a packed bitmap and refresh with the loaded mode
    ///
    /// `buffer` holds `region.height` rows of `ceil(region.width / 8)` bytes.
    /// Parts of the region outside the panel are cropped. A region that is
    /// entirely off-panel writes nothing and does not refresh.
    ///
    /// # Errors
    ///
    /// - `Error::BufferTooSmall` if `buffer` is shorter than the region needs
    /// - `Error::NotInitialized` before [`init`](Self::init)
    /// - `Error::Interface` on transport failure; the panel memory may then
    ///   hold a partial write and the transfer should be repeated
    pub fn display<D: DelayNs>(
        &mut self,
        buffer: &[u8],
        region: Region,
        delay: &mut D,
    ) -> DisplayResult<I> {
        check_buffer::<I>(buffer, &region)?;
        self.modes.current()?;
        if self.write_unchecked(buffer, &region, delay)? {
            self.refresh_sequence(delay)?;
        }
        Ok(())
    }

    /// [`display`](Self::display), asserting the loaded refresh mode
    ///
    /// # Errors
    ///
    /// As [`display`](Self::display), plus `Error::ModeMismatch` if `mode`
    /// is not the loaded one. Nothing is sent in that case.
    pub fn display_with_mode<D: DelayNs>(
        &mut self,
        buffer: &[u8],
        region: Region,
        mode: RefreshMode,
        delay: &mut D,
    ) -> DisplayResult<I> {
        check_buffer::<I>(buffer, &region)?;
        self.modes.require(mode)?;
        if self.write_unchecked(buffer, &region, delay)? {
            self.refresh_sequence(delay)?;
        }
        Ok(())
    }

    /// Transfer a whole canvas with its top-left corner at `(x, y)` and refresh
    pub fn display_canvas<D: DelayNs>(
        &mut self,
        canvas: &Canvas,
        x: i32,
        y: i32,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.display(canvas.buffer(), canvas.region_at(x, y), delay)
    }

    /// Write a packed bitmap into panel memory without refreshing
    ///
    /// Returns `false` if the region was entirely off-panel and nothing was
    /// sent.
    ///
    /// # Errors
    ///
    /// Same as [`display`](Self::display).
    pub fn write_region<D: DelayNs>(
        &mut self,
        buffer: &[u8],
        region: Region,
        delay: &mut D,
    ) -> Result<bool, Error<I>> {
        check_buffer::<I>(buffer, &region)?;
        self.modes.current()?;
        self.write_unchecked(buffer, &region, delay)
    }

    /// Show panel memory using the loaded waveform
    pub fn refresh<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.modes.current()?;
        self.refresh_sequence(delay)
    }

    /// [`refresh`](Self::refresh), asserting the loaded refresh mode
    pub fn refresh_with_mode<D: DelayNs>(
        &mut self,
        mode: RefreshMode,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.modes.require(mode)?;
        self.refresh_sequence(delay)
    }

    /// Fill panel memory with `color` and refresh
    pub fn clear<D: DelayNs>(&mut self, color: Color, delay: &mut D) -> DisplayResult<I> {
        self.clear_frame(color, delay)?;
        self.refresh_sequence(delay)
    }

    /// Fill panel memory with `color` without refreshing
    pub fn clear_frame<D: DelayNs>(&mut self, color: Color, delay: &mut D) -> DisplayResult<I> {
        self.modes.current()?;
        log::debug!("clear_frame: {:?}", color);

        let dimensions = self.config.dimensions;
        self.set_window(&AddressWindow::full(&dimensions), delay)?;

        let row = vec![color.fill_byte(); dimensions.row_bytes()];
        self.send_command(self.config.commands.write_ram)?;
        for _ in 0..dimensions.height {
            self.send_data(&row)?;
        }
        Ok(())
    }

    /// Enter deep sleep
    ///
    /// Only a reset wakes the panel; call [`init`](Self::init) before the
    /// next transfer.
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("sleep");
        self.send_command(self.config.commands.deep_sleep_mode)?;
        self.send_data(&[self.config.deep_sleep])?;
        self.busy_wait(delay)?;
        self.modes.deactivate();
        Ok(())
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Steps 2–4 of a transfer, inputs already validated
    fn write_unchecked<D: DelayNs>(
        &mut self,
        buffer: &[u8],
        region: &Region,
        delay: &mut D,
    ) -> Result<bool, Error<I>> {
        let Some(plan) = TransferPlan::new(region, &self.config.dimensions) else {
            log::debug!("write_region: {:?} is off-panel, skipped", region);
            return Ok(false);
        };
        log::trace!(
            "write_region: {:?} -> {:?}, skipping {} columns and {} rows",
            region,
            plan.window,
            plan.skip_columns,
            plan.skip_rows
        );

        self.set_window(&plan.window, delay)?;

        let mut row = vec![0u8; plan.window.columns()];
        self.send_command(self.config.commands.write_ram)?;
        let rows = buffer
            .chunks_exact(region.row_bytes())
            .skip(plan.skip_rows)
            .take(plan.window.rows());
        for source in rows {
            pack_row(source, plan.skip_columns, &mut row);
            self.send_data(&row)?;
        }
        Ok(true)
    }

    /// Program the RAM window and move the address counter to its origin
    fn set_window<D: DelayNs>(&mut self, window: &AddressWindow, delay: &mut D) -> DisplayResult<I> {
        let commands = self.config.commands;

        self.send_command(commands.set_ram_x_address_start_end_position)?;
        self.send_data(&window.x_range_data())?;
        self.send_command(commands.set_ram_y_address_start_end_position)?;
        self.send_data(&window.y_range_data())?;
        self.busy_wait(delay)?;

        self.send_command(commands.set_ram_x_address_counter)?;
        self.send_data(&window.x_counter_data())?;
        self.send_command(commands.set_ram_y_address_counter)?;
        self.send_data(&window.y_counter_data())?;
        self.busy_wait(delay)
    }

    fn refresh_sequence<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let commands = self.config.commands;
        self.send_command(commands.display_update_control_2)?;
        self.send_data(&[self.config.display_update_ctrl2])?;
        self.send_command(commands.master_activation)?;
        self.send_command(commands.terminate_frame_read_write)?;
        self.busy_wait(delay)
    }

    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.busy_wait(delay).map_err(Error::Interface)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}

fn check_buffer<I: DisplayInterface>(buffer: &[u8], region: &Region) -> DisplayResult<I> {
    let required = region.buffer_size();
    if buffer.len() < required {
        return Err(Error::BufferTooSmall {
            required,
            provided: buffer.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::*;
    use crate::config::Builder;
    use crate::lut::{LUT_FULL_UPDATE, LUT_PARTIAL_UPDATE};
    use alloc::vec::Vec;

    #[derive(Debug)]
    struct MockInterface {
        commands: Vec<u8>,
        data: Vec<Vec<u8>>,
        command_data: Vec<(u8, Vec<u8>)>,
        last_command: Option<u8>,
        busy_waits: usize,
        resets: usize,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                commands: Vec::new(),
                data: Vec::new(),
                command_data: Vec::new(),
                last_command: None,
                busy_waits: 0,
                resets: 0,
            }
        }

        fn clear(&mut self) {
            *self = Self::new();
        }

        fn data_for(&self, command: u8) -> Vec<&[u8]> {
            self.command_data
                .iter()
                .filter(|(cmd, _)| *cmd == command)
                .map(|(_, data)| data.as_slice())
                .collect()
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.commands.push(command);
            self.last_command = Some(command);
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.data.push(data.to_vec());
            if let Some(cmd) = self.last_command {
                self.command_data.push((cmd, data.to_vec()));
            }
            Ok(())
        }

        fn is_busy(&mut self) -> Result<bool, Self::Error> {
            Ok(false)
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) {
            self.resets += 1;
        }

        fn busy_wait<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            self.busy_waits += 1;
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_display() -> Display<MockInterface> {
        let config = Builder::epd2in9().build().unwrap();
        Display::new(MockInterface::new(), config)
    }

    fn ready_display(mode: RefreshMode) -> Display<MockInterface> {
        let mut display = test_display();
        display.init(mode, &mut MockDelay).unwrap();
        display.interface.clear();
        display
    }

    const REFRESH: [u8; 3] = [
        DISPLAY_UPDATE_CONTROL_2,
        MASTER_ACTIVATION,
        TERMINATE_FRAME_READ_WRITE,
    ];

    #[test]
    fn test_init_full_sequence() {
        let mut display = test_display();
        display.init(RefreshMode::Full, &mut MockDelay).unwrap();
        let mock = &display.interface;
        assert_eq!(mock.resets, 1);
        assert_eq!(
            mock.commands,
            [
                DRIVER_OUTPUT_CONTROL,
                BOOSTER_SOFT_START_CONTROL,
                WRITE_VCOM_REGISTER,
                SET_DUMMY_LINE_PERIOD,
                SET_GATE_TIME,
                DATA_ENTRY_MODE_SETTING,
                WRITE_LUT_REGISTER,
            ]
        );
        assert_eq!(
            mock.data_for(DRIVER_OUTPUT_CONTROL),
            [&[0x27u8, 0x01, 0x00][..]]
        );
        assert_eq!(
            mock.data_for(BOOSTER_SOFT_START_CONTROL),
            [&[0xCFu8, 0xCE, 0x8D][..]]
        );
        assert_eq!(mock.data_for(WRITE_VCOM_REGISTER), [&[0x7Cu8][..]]);
        assert_eq!(mock.data_for(SET_DUMMY_LINE_PERIOD), [&[0x1Au8][..]]);
        assert_eq!(mock.data_for(SET_GATE_TIME), [&[0x08u8][..]]);
        assert_eq!(mock.data_for(DATA_ENTRY_MODE_SETTING), [&[0x03u8][..]]);
        assert_eq!(mock.data_for(WRITE_LUT_REGISTER), [&LUT_FULL_UPDATE[..]]);
        assert_eq!(display.mode(), Some(RefreshMode::Full));
    }

    #[test]
    fn test_init_partial_loads_partial_waveform() {
        let mut display = test_display();
        display.init(RefreshMode::Partial, &mut MockDelay).unwrap();
        assert_eq!(
            display.interface.data_for(WRITE_LUT_REGISTER),
            [&LUT_PARTIAL_UPDATE[..]]
        );
        assert_eq!(display.mode(), Some(RefreshMode::Partial));
    }

    #[test]
    fn test_display_before_init_is_rejected() {
        let mut display = test_display();
        let buffer = [0xFFu8; 16];
        let result = display.display(&buffer, Region::new(0, 0, 8, 16), &mut MockDelay);
        assert!(matches!(result, Err(Error::NotInitialized)));
        assert!(display.interface.commands.is_empty());
        assert!(display.interface.data.is_empty());
    }

    #[test]
    fn test_switching_mode_without_init_is_rejected() {
        let mut display = ready_display(RefreshMode::Full);
        let buffer = [0xFFu8; 16];
        let result = display.display_with_mode(
            &buffer,
            Region::new(0, 0, 8, 16),
            RefreshMode::Partial,
            &mut MockDelay,
        );
        assert!(matches!(
            result,
            Err(Error::ModeMismatch {
                active: RefreshMode::Full,
                requested: RefreshMode::Partial
            })
        ));
        assert!(display.interface.commands.is_empty());

        let result = display.refresh_with_mode(RefreshMode::Partial, &mut MockDelay);
        assert!(matches!(result, Err(Error::ModeMismatch { .. })));
        assert!(display.interface.commands.is_empty());
    }

    #[test]
    fn test_switching_mode_after_init_succeeds() {
        let mut display = ready_display(RefreshMode::Full);
        display.init(RefreshMode::Partial, &mut MockDelay).unwrap();
        let buffer = [0xFFu8; 16];
        let result = display.display_with_mode(
            &buffer,
            Region::new(0, 0, 8, 16),
            RefreshMode::Partial,
            &mut MockDelay,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_buffer_too_small_touches_nothing() {
        let mut display = ready_display(RefreshMode::Full);
        let buffer = [0xFFu8; 10];
        let result = display.display(&buffer, Region::new(0, 0, 80, 80), &mut MockDelay);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 800,
                provided: 10
            })
        ));
        assert!(display.interface.commands.is_empty());
        assert!(display.interface.data.is_empty());
        assert_eq!(display.interface.busy_waits, 0);
    }

    #[test]
    fn test_buffer_checked_before_mode() {
        let mut display = test_display();
        let result = display.display(&[], Region::new(0, 0, 8, 1), &mut MockDelay);
        assert!(matches!(result, Err(Error::BufferTooSmall { .. })));
    }

    #[test]
    fn test_display_sequence() {
        let mut display = ready_display(RefreshMode::Full);
        let buffer = [0x11, 0x22, 0x33, 0x44];
        display
            .display(&buffer, Region::new(8, 4, 16, 2), &mut MockDelay)
            .unwrap();

        let mock = &display.interface;
        assert_eq!(
            mock.commands,
            [
                SET_RAM_X_ADDRESS_START_END_POSITION,
                SET_RAM_Y_ADDRESS_START_END_POSITION,
                SET_RAM_X_ADDRESS_COUNTER,
                SET_RAM_Y_ADDRESS_COUNTER,
                WRITE_RAM,
                DISPLAY_UPDATE_CONTROL_2,
                MASTER_ACTIVATION,
                TERMINATE_FRAME_READ_WRITE,
            ]
        );
        assert_eq!(
            mock.data_for(SET_RAM_X_ADDRESS_START_END_POSITION),
            [&[1u8, 2][..]]
        );
        assert_eq!(
            mock.data_for(SET_RAM_Y_ADDRESS_START_END_POSITION),
            [&[4u8, 0, 5, 0][..]]
        );
        assert_eq!(mock.data_for(SET_RAM_X_ADDRESS_COUNTER), [&[1u8][..]]);
        assert_eq!(mock.data_for(SET_RAM_Y_ADDRESS_COUNTER), [&[4u8, 0][..]]);
        assert_eq!(
            mock.data_for(WRITE_RAM),
            [&[0x11u8, 0x22][..], &[0x33, 0x44][..]]
        );
        assert_eq!(mock.data_for(DISPLAY_UPDATE_CONTROL_2), [&[0xC4u8][..]]);
        assert_eq!(mock.busy_waits, 3);
    }

    #[test]
    fn test_negative_x_drops_left_columns() {
        // The three columns shifted in at the right edge stay white
        let mut display = ready_display(RefreshMode::Full);
        // Exactly sized for a 16x2 region
        let buffer = [0b1110_0001, 0b1000_0000, 0xFF, 0xFF];
        display
            .display(&buffer, Region::new(-3, 0, 16, 2), &mut MockDelay)
            .unwrap();

        let mock = &display.interface;
        assert_eq!(
            mock.data_for(SET_RAM_X_ADDRESS_START_END_POSITION),
            [&[0u8, 1][..]]
        );
        assert_eq!(
            mock.data_for(WRITE_RAM),
            [&[0b0000_1100u8, 0b0000_0111][..], &[0xFF, 0xFF][..]]
        );
    }

    #[test]
    fn test_bottom_edge_crop_reads_within_buffer() {
        let mut display = ready_display(RefreshMode::Full);
        let buffer = [0x01, 0x02, 0x03, 0x04];
        display
            .display(&buffer, Region::new(0, 294, 8, 4), &mut MockDelay)
            .unwrap();

        let mock = &display.interface;
        assert_eq!(
            mock.data_for(SET_RAM_Y_ADDRESS_START_END_POSITION),
            [&[0x26u8, 0x01, 0x27, 0x01][..]]
        );
        assert_eq!(mock.data_for(WRITE_RAM), [&[0x01u8][..], &[0x02][..]]);
    }

    #[test]
    fn test_top_edge_crop_skips_rows() {
        let mut display = ready_display(RefreshMode::Full);
        let buffer = [0x01, 0x02, 0x03];
        display
            .display(&buffer, Region::new(0, -1, 8, 3), &mut MockDelay)
            .unwrap();
        assert_eq!(
            display.interface.data_for(WRITE_RAM),
            [&[0x02u8][..], &[0x03][..]]
        );
    }

    #[test]
    fn test_off_panel_region_sends_nothing() {
        let mut display = ready_display(RefreshMode::Full);
        let buffer = [0xFFu8; 8];
        display
            .display(&buffer, Region::new(200, 0, 8, 8), &mut MockDelay)
            .unwrap();
        assert!(display.interface.commands.is_empty());

        let written = display
            .write_region(&buffer, Region::new(0, -8, 8, 8), &mut MockDelay)
            .unwrap();
        assert!(!written);
        assert!(display.interface.commands.is_empty());
    }

    #[test]
    fn test_write_region_does_not_refresh() {
        let mut display = ready_display(RefreshMode::Partial);
        let buffer = [0xAAu8; 2];
        let written = display
            .write_region(&buffer, Region::new(0, 0, 16, 1), &mut MockDelay)
            .unwrap();
        assert!(written);
        assert!(!display.interface.commands.contains(&MASTER_ACTIVATION));

        display.refresh(&mut MockDelay).unwrap();
        assert!(display.interface.commands.ends_with(&REFRESH));
    }

    #[test]
    fn test_clear_writes_full_frame_and_refreshes() {
        let mut display = ready_display(RefreshMode::Full);
        display.clear(Color::White, &mut MockDelay).unwrap();

        let mock = &display.interface;
        assert_eq!(
            mock.data_for(SET_RAM_X_ADDRESS_START_END_POSITION),
            [&[0x00u8, 0x0F][..]]
        );
        let rows = mock.data_for(WRITE_RAM);
        assert_eq!(rows.len(), 296);
        assert!(rows.iter().all(|row| *row == [0xFFu8; 16]));
        assert!(mock.commands.ends_with(&REFRESH));
    }

    #[test]
    fn test_clear_frame_does_not_refresh() {
        let mut display = ready_display(RefreshMode::Full);
        display.clear_frame(Color::Black, &mut MockDelay).unwrap();
        let mock = &display.interface;
        let rows = mock.data_for(WRITE_RAM);
        assert_eq!(rows.iter().map(|row| row.len()).sum::<usize>(), 16 * 296);
        assert!(rows.iter().all(|row| row.iter().all(|byte| *byte == 0x00)));
        assert!(!mock.commands.contains(&MASTER_ACTIVATION));
    }

    #[test]
    fn test_display_canvas_uses_canvas_region() {
        let mut display = ready_display(RefreshMode::Full);
        let mut canvas = Canvas::new(16, 2).unwrap();
        canvas.clear(Color::White);
        canvas.set(0, 1, Color::Black);
        display
            .display_canvas(&canvas, 16, 8, &mut MockDelay)
            .unwrap();
        let mock = &display.interface;
        assert_eq!(
            mock.data_for(SET_RAM_X_ADDRESS_START_END_POSITION),
            [&[2u8, 3][..]]
        );
        assert_eq!(
            mock.data_for(WRITE_RAM),
            [&[0xFFu8, 0xFF][..], &[0x7F, 0xFF][..]]
        );
    }

    #[test]
    fn test_sleep_requires_reinit() {
        let mut display = ready_display(RefreshMode::Partial);
        display.sleep(&mut MockDelay).unwrap();
        assert_eq!(display.interface.data_for(DEEP_SLEEP_MODE), [&[0x01u8][..]]);
        assert_eq!(display.mode(), None);

        let result = display.refresh(&mut MockDelay);
        assert!(matches!(result, Err(Error::NotInitialized)));
    }

    #[test]
    fn test_reset_forgets_mode() {
        let mut display = ready_display(RefreshMode::Full);
        display.reset(&mut MockDelay);
        assert_eq!(display.interface.resets, 1);
        assert_eq!(display.mode(), None);
    }

    #[test]
    fn test_refresh_mode_default_is_full() {
        assert_eq!(RefreshMode::default(), RefreshMode::Full);
    }
}
