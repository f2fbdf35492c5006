use core::fmt;

/// Direction of a single expander pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Logic level of a single expander pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// State of the weak internal pull-up resistor of a single expander pin.
///
/// Pull-ups only have an electrical effect on pins configured as
/// [`Direction::Input`]; the chip accepts the setting for output pins and
/// ignores it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullupMode {
    Disabled,
    Enabled,
}

/// Errors reported by this driver.
///
/// `E` is the error type of the [`SpiTransport`][crate::SpiTransport] in use.
/// Validation failures are raised before any bus transfer is issued, so a
/// failed call never leaves a partial transaction on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Pin index outside `0..=15`.
    InvalidPin(u8),
    /// Device address outside `0..=7`, rejected at construction.
    InvalidDeviceAddr(u8),
    /// A register operation or `close` was attempted while the communication
    /// channel is closed.
    NotOpen,
    /// `open` was called while the communication channel is already open.
    AlreadyOpen,
    /// Bus transfer failure, passed through from the transport unchanged.
    ///
    /// The lifecycle state is left as it was, so the caller may retry the
    /// same operation or close the channel.
    Transport(E),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Transport(err)
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPin(pin) => write!(f, "pin index {} outside 0..=15", pin),
            Error::InvalidDeviceAddr(addr) => {
                write!(f, "device address {} outside 0..=7", addr)
            }
            Error::NotOpen => f.write_str("communication channel is not open"),
            Error::AlreadyOpen => f.write_str("communication channel is already open"),
            Error::Transport(err) => write!(f, "transport error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug + fmt::Display> std::error::Error for Error<E> {}
