//! Device controller for the MCP23S17.
//!
//! The chip offers two eight-bit GPIO ports, A and B.  Three hardware
//! address pins let up to eight chips share one chip-select line once
//! hardware addressing is enabled, which happens during [`Mcp23s17::open`].
//!
//! When passing 16-bit values to or from this driver, the lower byte
//! corresponds to port A (pins 0..=7) and the upper byte to port B
//! (pins 8..=15).

use embedded_hal::spi::SpiDevice;

use crate::opcode::{self, Access};
use crate::regs::{Port, Register, IOCON};
use crate::transport::{SpiDeviceTransport, SpiTransport};
use crate::{Direction, Error, Level, PullupMode};

/// Lifecycle state of the communication channel to one chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// No channel acquired; every register operation fails with
    /// [`Error::NotOpen`].
    Closed,
    /// Channel acquired; register operations reach the chip.
    Open,
}

/// One MCP23S17 behind an [`SpiTransport`].
///
/// A freshly constructed value starts out [`ChannelState::Closed`]; call
/// [`open`][Self::open] before any pin or register operation.  The hardware
/// device address is fixed at construction and every transaction carries it,
/// so several devices with distinct addresses can share one chip-select
/// line.
///
/// # Sharing
///
/// Calls block until their bus transfers finish and the driver takes no
/// locks of its own.  Pin-level writes are a read followed by a write of the
/// same register; when a device is shared across contexts, wrap it in one
/// mutual exclusion scope per device and hold that across entire operations,
/// otherwise concurrent read-modify-write pairs on pins of the same port can
/// overwrite each other.
pub struct Mcp23s17<T> {
    transport: T,
    bus: u8,
    chip_select: u8,
    device_addr: u8,
    state: ChannelState,
}

impl<D: SpiDevice> Mcp23s17<SpiDeviceTransport<D>> {
    /// Creates a closed device on an already configured embedded-hal SPI
    /// device.
    ///
    /// The wrapped device carries no separate bus or chip-select identity,
    /// so both channel identifiers are zero.
    pub fn with_spi_device(dev: D, device_addr: u8) -> Result<Self, Error<D::Error>> {
        Self::new(SpiDeviceTransport(dev), 0, 0, device_addr)
    }
}

impl<T: SpiTransport> Mcp23s17<T> {
    /// Number of I/O pins on the chip.
    pub const PIN_COUNT: u8 = 16;
    /// Highest hardware device address selectable on the `A2..A0` pins.
    pub const MAX_DEVICE_ADDR: u8 = 7;

    /// Creates a device in the [`ChannelState::Closed`] state.
    ///
    /// `bus` and `chip_select` identify the channel handed to
    /// [`SpiTransport::open`]; `device_addr` must match the level wired onto
    /// the chip's `A2..A0` pins and stays fixed for the lifetime of the
    /// value.
    pub fn new(
        transport: T,
        bus: u8,
        chip_select: u8,
        device_addr: u8,
    ) -> Result<Self, Error<T::Error>> {
        if device_addr > Self::MAX_DEVICE_ADDR {
            return Err(Error::InvalidDeviceAddr(device_addr));
        }
        Ok(Self {
            transport,
            bus,
            chip_select,
            device_addr,
            state: ChannelState::Closed,
        })
    }

    /// Current lifecycle state of the communication channel.
    pub fn state(&self) -> ChannelState {
        self.state
    }

    /// Acquires the transport channel and configures the chip for register
    /// access.
    ///
    /// The configuration write sets `IOCON.HAEN` so the chip honors its
    /// `A2..A0` address pins, and clears `IOCON.BANK` and `IOCON.SEQOP`,
    /// keeping the reset addressing mode: interleaved A/B register addresses
    /// with the address pointer incrementing after every data byte.  If the
    /// write fails the channel is released again and the device stays
    /// closed.
    pub fn open(&mut self) -> Result<(), Error<T::Error>> {
        if self.state == ChannelState::Open {
            return Err(Error::AlreadyOpen);
        }
        self.transport.open(self.bus, self.chip_select)?;
        if let Err(err) = self.write_reg(Register::Iocon, Port::A, IOCON::HAEN.bits()) {
            let _ = self.transport.close();
            return Err(err);
        }
        self.state = ChannelState::Open;
        Ok(())
    }

    /// Releases the transport channel.
    ///
    /// On failure the device stays [`ChannelState::Open`] so the call can be
    /// retried.  A closed device can be opened again later.
    pub fn close(&mut self) -> Result<(), Error<T::Error>> {
        self.guard_open()?;
        self.transport.close()?;
        self.state = ChannelState::Closed;
        Ok(())
    }

    /// Configures a single pin as input or output.
    ///
    /// Read-modify-write on the direction register of the pin's port; the
    /// other pins keep their direction.
    pub fn set_direction(&mut self, pin: u8, direction: Direction) -> Result<(), Error<T::Error>> {
        let (port, bit) = self.pin_location(pin)?;
        // IODIR: 1 = input, 0 = output.
        let (mask_set, mask_clear) = match direction {
            Direction::Input => (1 << bit, 0),
            Direction::Output => (0, 1 << bit),
        };
        self.update_reg(Register::Iodir, port, mask_set, mask_clear)
    }

    /// Enables or disables the weak internal pull-up of a single pin.
    ///
    /// The setting only has an effect while the pin is an input; for an
    /// output pin the write is accepted and electrically meaningless,
    /// matching the chip.
    pub fn set_pullup_mode(&mut self, pin: u8, mode: PullupMode) -> Result<(), Error<T::Error>> {
        let (port, bit) = self.pin_location(pin)?;
        let (mask_set, mask_clear) = match mode {
            PullupMode::Enabled => (1 << bit, 0),
            PullupMode::Disabled => (0, 1 << bit),
        };
        self.update_reg(Register::Gppu, port, mask_set, mask_clear)
    }

    /// Drives a single output pin high or low.
    ///
    /// The read-modify-write runs on the output latch, so the commanded
    /// levels of the other fifteen pins are preserved bit for bit.
    pub fn digital_write(&mut self, pin: u8, level: Level) -> Result<(), Error<T::Error>> {
        let (port, bit) = self.pin_location(pin)?;
        let (mask_set, mask_clear) = match level {
            Level::High => (1 << bit, 0),
            Level::Low => (0, 1 << bit),
        };
        self.update_reg(Register::Olat, port, mask_set, mask_clear)
    }

    /// Reads the logic level currently on a single pin.
    ///
    /// One read transfer and no write.  An output pin reads back the level
    /// it is driving.
    pub fn digital_read(&mut self, pin: u8) -> Result<Level, Error<T::Error>> {
        let (port, bit) = self.pin_location(pin)?;
        let value = self.read_reg(Register::Gpio, port)?;
        Ok(if value & (1 << bit) != 0 {
            Level::High
        } else {
            Level::Low
        })
    }

    /// Writes all sixteen pins in one transaction.
    ///
    /// Port A takes the low byte, port B the high byte.  Unlike the
    /// pin-level calls this overwrites every bit of both output latches with
    /// the caller's value.
    pub fn write_gpio(&mut self, value: u16) -> Result<(), Error<T::Error>> {
        self.guard_open()?;
        self.write_reg16(Register::Gpio, value)
    }

    /// Reads all sixteen pins in one transaction.
    ///
    /// Port A is the low byte, port B the high byte.
    pub fn read_gpio(&mut self) -> Result<u16, Error<T::Error>> {
        self.guard_open()?;
        self.read_reg16(Register::Gpio)
    }

    /// Consumes the driver and hands the transport back.
    ///
    /// The channel is not closed first; callers wanting an orderly shutdown
    /// call [`close`][Self::close] before releasing.
    pub fn release(self) -> T {
        self.transport
    }

    fn guard_open(&self) -> Result<(), Error<T::Error>> {
        match self.state {
            ChannelState::Open => Ok(()),
            ChannelState::Closed => Err(Error::NotOpen),
        }
    }

    /// Checks the lifecycle gate and the pin index, then splits the pin into
    /// its port and bit offset.
    fn pin_location(&self, pin: u8) -> Result<(Port, u8), Error<T::Error>> {
        self.guard_open()?;
        if pin >= Self::PIN_COUNT {
            return Err(Error::InvalidPin(pin));
        }
        Ok(Port::locate(pin))
    }

    // Register access below assumes the caller already checked the
    // lifecycle gate.

    fn read_reg(&mut self, register: Register, port: Port) -> Result<u8, Error<T::Error>> {
        let [cmd, addr] = opcode::header(self.device_addr, Access::Read, register, port);
        let mut buffer = [cmd, addr, 0x00];
        self.transport.transfer(&mut buffer)?;
        // The register value is clocked in while the third byte goes out.
        Ok(buffer[2])
    }

    fn write_reg(&mut self, register: Register, port: Port, value: u8) -> Result<(), Error<T::Error>> {
        let [cmd, addr] = opcode::header(self.device_addr, Access::Write, register, port);
        let mut buffer = [cmd, addr, value];
        self.transport.transfer(&mut buffer)?;
        Ok(())
    }

    /// Sets all bits of `mask_set` and clears all bits of `mask_clear` in
    /// one register, leaving every other bit untouched.
    fn update_reg(
        &mut self,
        register: Register,
        port: Port,
        mask_set: u8,
        mask_clear: u8,
    ) -> Result<(), Error<T::Error>> {
        let mut value = self.read_reg(register, port)?;
        value |= mask_set;
        value &= !mask_clear;
        self.write_reg(register, port, value)
    }

    /// Reads the port-A and port-B instances of `register` in one frame,
    /// relying on the address pointer incrementing between the data bytes.
    fn read_reg16(&mut self, register: Register) -> Result<u16, Error<T::Error>> {
        let [cmd, addr] = opcode::header(self.device_addr, Access::Read, register, Port::A);
        let mut buffer = [cmd, addr, 0x00, 0x00];
        self.transport.transfer(&mut buffer)?;
        Ok(u16::from_le_bytes([buffer[2], buffer[3]]))
    }

    fn write_reg16(&mut self, register: Register, value: u16) -> Result<(), Error<T::Error>> {
        let [low, high] = value.to_le_bytes();
        let [cmd, addr] = opcode::header(self.device_addr, Access::Write, register, Port::A);
        let mut buffer = [cmd, addr, low, high];
        self.transport.transfer(&mut buffer)?;
        Ok(())
    }
}
