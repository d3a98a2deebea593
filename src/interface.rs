//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for talking to the panel controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The panel requires:
//! - SPI bus (MOSI + SCK), MSB first
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low)
//!   - **BUSY**: Busy status (input, active high by default)
//!
//! ## Busy waiting
//!
//! [`DisplayInterface::busy_wait`] polls BUSY every
//! [`BUSY_POLL_INTERVAL_MS`] milliseconds and has no timeout. A panel that
//! never releases BUSY blocks the caller forever; wrap the display calls in
//! your own watchdog if that matters.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use epd_mono::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//!
//! // VCOM voltage
//! let _ = interface.send_command(0x2C);
//! let _ = interface.send_data(&[0x7C]);
//!
//! // Wait for display ready
//! let _ = interface.busy_wait(&mut delay);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Delay between two BUSY polls in milliseconds
pub const BUSY_POLL_INTERVAL_MS: u32 = 50;

/// Trait for the hardware link to the panel controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation, or with a recording test double.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., different pin wiring, additional CS control),
/// implement the four required methods on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send the command byte over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Send the data bytes over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Whether the controller is still executing a command
    ///
    /// # Errors
    ///
    /// Returns an error if the BUSY pin cannot be read.
    fn is_busy(&mut self) -> InterfaceResult<bool, Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST pin low
    /// 2. Wait at least 10ms
    /// 3. Set RST pin high
    /// 4. Wait at least 10ms
    fn reset<D: DelayNs>(&mut self, delay: &mut D);

    /// Block until the controller is idle
    ///
    /// Polls [`is_busy`](Self::is_busy) with a fixed
    /// [`BUSY_POLL_INTERVAL_MS`] sleep in between. There is no timeout.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`is_busy`](Self::is_busy).
    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        while self.is_busy()? {
            delay.delay_ms(BUSY_POLL_INTERVAL_MS);
        }
        Ok(())
    }
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// embedded-hal implementation of [`DisplayInterface`]
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BUSY` - Busy pin implementing [`InputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use epd_mono::{Builder, Display, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::{InputPin, OutputPin};
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # impl InputPin for MockPin {
/// #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
/// #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
/// # }
/// let interface = Interface::new(
///     MockSpi,  // SpiDevice
///     MockPin,  // OutputPin
///     MockPin,  // OutputPin
///     MockPin,  // InputPin
/// );
///
/// // Use with Display
/// # let config = match Builder::epd2in9().build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct Interface<SPI, DC, RST, BUSY> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Busy pin
    busy: BUSY,
    /// Busy pin polarity (true = active high, false = active low)
    busy_active_high: bool,
}

impl<SPI, DC, RST, BUSY> Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
{
    /// Create a new Interface
    ///
    /// BUSY is treated as active high.
    pub fn new(spi: SPI, dc: DC, rst: RST, busy: BUSY) -> Self {
        Self {
            spi,
            dc,
            rst,
            busy,
            busy_active_high: true,
        }
    }

    /// Set busy pin polarity
    ///
    /// Default is active-high. Set to false for active-low panels.
    pub fn set_busy_active_high(&mut self, active_high: bool) -> &mut Self {
        self.busy_active_high = active_high;
        self
    }

    /// Get busy pin polarity (true = active high)
    pub fn busy_active_high(&self) -> bool {
        self.busy_active_high
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, DC, RST, BUSY) {
        (self.spi, self.dc, self.rst, self.busy)
    }
}

impl<SPI, DC, RST, BUSY, PinErr> DisplayInterface for Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn is_busy(&mut self) -> InterfaceResult<bool, Self::Error> {
        let level = if self.busy_active_high {
            self.busy.is_high()
        } else {
            self.busy.is_low()
        };
        level.map_err(InterfaceError::Pin)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        // Reset sequence: LOW -> wait 10ms -> HIGH -> wait 10ms
        let _ = self.rst.set_low();
        delay.delay_ms(10);
        let _ = self.rst.set_high();
        delay.delay_ms(10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::{ErrorType as SpiErrorType, Operation};

    struct MockSpi<'a> {
        written: &'a RefCell<Vec<u8>>,
    }

    impl SpiErrorType for MockSpi<'_> {
        type Error = Infallible;
    }

    impl SpiDevice for MockSpi<'_> {
        fn transaction(
            &mut self,
            operations: &mut [Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            for operation in operations {
                if let Operation::Write(bytes) = operation {
                    self.written.borrow_mut().extend_from_slice(bytes);
                }
            }
            Ok(())
        }
    }

    /// Output pin remembering its level, input pin reporting busy `polls` times
    struct MockPin<'a> {
        high: &'a Cell<bool>,
        polls: &'a Cell<u32>,
    }

    impl ErrorType for MockPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high.set(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high.set(true);
            Ok(())
        }
    }

    impl InputPin for MockPin<'_> {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            let remaining = self.polls.get();
            self.polls.set(remaining.saturating_sub(1));
            Ok(remaining > 0)
        }
        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    #[derive(Default)]
    struct MockDelay {
        total_ms: u32,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ms += ns / 1_000_000;
        }
    }

    #[test]
    fn test_command_and_data_toggle_dc() {
        let written = RefCell::new(Vec::new());
        let dc = Cell::new(true);
        let rst = Cell::new(true);
        let polls = Cell::new(0);
        let mut interface = Interface::new(
            MockSpi { written: &written },
            MockPin { high: &dc, polls: &polls },
            MockPin { high: &rst, polls: &polls },
            MockPin { high: &rst, polls: &polls },
        );

        interface.send_command(0x2C).unwrap();
        assert!(!dc.get());
        interface.send_data(&[0x7C, 0x01]).unwrap();
        assert!(dc.get());
        assert_eq!(written.borrow().as_slice(), &[0x2C, 0x7C, 0x01]);
    }

    #[test]
    fn test_busy_wait_polls_at_fixed_interval() {
        let written = RefCell::new(Vec::new());
        let level = Cell::new(false);
        let polls = Cell::new(3);
        let mut interface = Interface::new(
            MockSpi { written: &written },
            MockPin { high: &level, polls: &polls },
            MockPin { high: &level, polls: &polls },
            MockPin { high: &level, polls: &polls },
        );

        let mut delay = MockDelay::default();
        interface.busy_wait(&mut delay).unwrap();
        assert_eq!(delay.total_ms, 3 * BUSY_POLL_INTERVAL_MS);
        assert_eq!(polls.get(), 0);
    }

    #[test]
    fn test_busy_polarity() {
        let written = RefCell::new(Vec::new());
        let level = Cell::new(false);
        let polls = Cell::new(0);
        let mut interface = Interface::new(
            MockSpi { written: &written },
            MockPin { high: &level, polls: &polls },
            MockPin { high: &level, polls: &polls },
            MockPin { high: &level, polls: &polls },
        );
        assert!(interface.busy_active_high());
        assert!(!interface.is_busy().unwrap());

        interface.set_busy_active_high(false);
        assert!(interface.is_busy().unwrap());
    }

    #[test]
    fn test_reset_pulses_low_then_high() {
        let written = RefCell::new(Vec::new());
        let dc = Cell::new(false);
        let rst = Cell::new(false);
        let polls = Cell::new(0);
        let mut interface = Interface::new(
            MockSpi { written: &written },
            MockPin { high: &dc, polls: &polls },
            MockPin { high: &rst, polls: &polls },
            MockPin { high: &dc, polls: &polls },
        );
        let mut delay = MockDelay::default();
        interface.reset(&mut delay);
        assert!(rst.get());
        assert_eq!(delay.total_ms, 20);
    }
}
