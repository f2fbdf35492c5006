#![cfg_attr(not(test), no_std)]
//! Driver for the MCP23S17 "16-Bit I/O Expander with Serial Interface".
//!
//! The chip offers sixteen GPIO pins in two eight-bit ports behind an SPI
//! channel, with per-pin direction, weak pull-ups and an output latch.
//! Datasheet: <https://ww1.microchip.com/downloads/en/DeviceDoc/20001952C.pdf>
//!
//! All chip access goes through the [`SpiTransport`] trait.  On hosts with
//! an embedded-hal SPI stack, [`Mcp23s17::with_spi_device`] wraps any
//! [`embedded_hal::spi::SpiDevice`]; other platforms implement
//! [`SpiTransport`] over whatever SPI access they have.
//!
//! ## Example
//!
//! ```
//! use mcp23s17::{Direction, Level, Mcp23s17, SpiTransport};
//!
//! fn blink<T: SpiTransport>(transport: T) -> Result<(), mcp23s17::Error<T::Error>> {
//!     // Address 0b000: all three address pins tied low.
//!     let mut mcp = Mcp23s17::new(transport, 0, 0, 0b000)?;
//!     mcp.open()?;
//!
//!     mcp.set_direction(4, Direction::Output)?;
//!     mcp.digital_write(4, Level::High)?;
//!     let _level = mcp.digital_read(12)?;
//!
//!     mcp.close()?;
//!     Ok(())
//! }
//! ```

#[cfg(feature = "std")]
extern crate std;

mod common;
mod device;
mod opcode;
mod regs;
mod transport;

pub use common::{Direction, Error, Level, PullupMode};
pub use device::{ChannelState, Mcp23s17};
pub use transport::{SpiDeviceTransport, SpiTransport};
