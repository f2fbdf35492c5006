//! Construction of the two header bytes that prefix every chip transaction.

use crate::regs::{Port, Register};

/// Fixed upper nibble of the control byte (binary `0100`).
const CONTROL_PREFIX: u8 = 0b0100 << 4;

/// Read/write flag of a transaction, bit 0 of the control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Write = 0,
    Read = 1,
}

/// Builds the control byte for `device_addr`: the fixed prefix, the three
/// hardware address bits in bits 3..=1 and the read/write flag in bit 0.
pub(crate) fn control_byte(device_addr: u8, access: Access) -> u8 {
    debug_assert!(device_addr <= 7);
    CONTROL_PREFIX | (device_addr << 1) | access as u8
}

/// Builds both header bytes of a transaction starting at `register`/`port`.
pub(crate) fn header(device_addr: u8, access: Access, register: Register, port: Port) -> [u8; 2] {
    [control_byte(device_addr, access), register.address(port)]
}
