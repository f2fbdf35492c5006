//! The serial channel a device is driven through.

use embedded_hal::spi::SpiDevice;

/// Synchronous, exclusive SPI channel to one chip-select line.
///
/// The driver never talks to hardware directly; every byte goes through an
/// implementation of this trait.  Implementations must clock the chip in SPI
/// mode 0 and are expected to do no locking, retrying or timing out of their
/// own.  Failures surface synchronously through [`Self::Error`] and are
/// passed on to the caller unchanged.
pub trait SpiTransport {
    /// Error reported by the underlying channel.
    type Error;

    /// Acquires the channel identified by `bus` and `chip_select`.
    fn open(&mut self, bus: u8, chip_select: u8) -> Result<(), Self::Error>;

    /// Clocks `buffer` out while overwriting it in place with the bytes
    /// received during the same exchange (full duplex, equal length).
    fn transfer(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Releases the channel.
    fn close(&mut self) -> Result<(), Self::Error>;
}

/// [`SpiTransport`] backed by an [`embedded_hal::spi::SpiDevice`].
///
/// The wrapped device arrives fully configured and asserts chip-select
/// around each transaction itself, so `open` and `close` are no-ops here and
/// the bus and chip-select identifiers are ignored.
pub struct SpiDeviceTransport<D>(pub D);

impl<D: SpiDevice> SpiTransport for SpiDeviceTransport<D> {
    type Error = D::Error;

    fn open(&mut self, _bus: u8, _chip_select: u8) -> Result<(), Self::Error> {
        Ok(())
    }

    fn transfer(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.0.transfer_in_place(buffer)
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::spi as mock_spi;

    #[test]
    fn spi_device_frames_pass_through_unmodified() {
        let expectations = [
            mock_spi::Transaction::transaction_start(),
            mock_spi::Transaction::transfer_in_place(
                vec![0x41, 0x12, 0x00],
                vec![0x00, 0x00, 0xa5],
            ),
            mock_spi::Transaction::transaction_end(),
        ];
        let mut bus = mock_spi::Mock::new(&expectations);

        let mut transport = SpiDeviceTransport(bus.clone());
        transport.open(0, 0).unwrap();
        let mut buffer = [0x41, 0x12, 0x00];
        transport.transfer(&mut buffer).unwrap();
        assert_eq!(buffer, [0x00, 0x00, 0xa5]);
        transport.close().unwrap();

        bus.done();
    }
}
