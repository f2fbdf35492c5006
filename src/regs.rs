//! Register map of the MCP23S17.

use bitflags::bitflags;

/// One of the two eight-bit pin groups of the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Port {
    A = 0,
    B = 1,
}

impl Port {
    /// Splits a pin index into the port containing it and the pin's bit
    /// offset within that port.  Pins 0..=7 live in port A, pins 8..=15 in
    /// port B.
    pub(crate) fn locate(pin: u8) -> (Self, u8) {
        debug_assert!(pin < 16);
        if pin < 8 {
            (Port::A, pin)
        } else {
            (Port::B, pin - 8)
        }
    }
}

/// The chip's registers by name, one instance per port.
///
/// Discriminants are the port-A byte addresses in the chip's reset addressing
/// mode (`IOCON.BANK` = 0, which this driver never changes); the port-B
/// instance follows at the next address.  All registers reset to 0x00 except
/// IODIR, which resets to 0xff (all pins inputs).
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Register {
    /// Input/output direction: 1 = input, 0 = output.
    Iodir = 0x00,
    /// Input polarity inversion: 1 = register bit opposite to the pin level.
    Ipol = 0x02,
    /// Interrupt-on-change enable.
    Gpinten = 0x04,
    /// Comparison defaults for interrupt-on-change.
    Defval = 0x06,
    /// Interrupt-on-change mode: compare against DEFVAL or the previous
    /// value.
    Intcon = 0x08,
    /// Device configuration, shared by both ports (see [`IOCON`]).
    Iocon = 0x0a,
    /// Weak pull-up enable: 1 = pulled up (effective on inputs).
    Gppu = 0x0c,
    /// Interrupt flags, read-only.
    Intf = 0x0e,
    /// Pin state captured at interrupt time, read-only.
    Intcap = 0x10,
    /// Logic level on the pins.
    Gpio = 0x12,
    /// Output latches driving pins configured as outputs.
    Olat = 0x14,
}

impl Register {
    /// Byte address of this register's instance for `port`.
    pub(crate) fn address(self, port: Port) -> u8 {
        self as u8 + port as u8
    }
}

bitflags! {
    /// Bits of the configuration register ([`Register::Iocon`]).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct IOCON: u8 {
        /// Split the register map into per-port banks.  Must stay 0 for the
        /// addressing in [`Register`] to hold.
        const BANK = 0b1000_0000;
        /// Internally connect the two interrupt pins.
        const MIRROR = 0b0100_0000;
        /// Disable sequential addressing: the address pointer no longer
        /// increments between data bytes of a transfer.
        const SEQOP = 0b0010_0000;
        /// Disable slew-rate control on the SDA pin (I2C variant only).
        const DISSLW = 0b0001_0000;
        /// Honor the hardware address pins `A2..A0`.
        const HAEN = 0b0000_1000;
        /// Interrupt pins are open-drain outputs.
        const ODR = 0b0000_0100;
        /// Interrupt pins are active-high (ignored while `ODR` is set).
        const INTPOL = 0b0000_0010;
    }
}
