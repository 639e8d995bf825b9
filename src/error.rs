//! Error types for the gyroscope driver.
//!
//! Operations return [`Error`], which carries the underlying bus error. The
//! driver handle additionally remembers the outcome as a [`Status`] and an
//! [`ErrorKind`] so callers polling the device in a loop can inspect the last
//! failure without holding on to every `Result`.

use core::fmt;

/// Errors that can occur when communicating with the gyroscope.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// Underlying bus error.
    Bus(E),

    /// The bus delivered fewer bytes than requested.
    ShortRead { expected: usize, received: usize },

    /// Argument outside the accepted range (cutoff code must be 0-10).
    InvalidArgument,

    /// WHO_AM_I returned something other than the L3G4200D identifier.
    DeviceNotFound { found: u8 },

    /// The diagnostic text sink refused a write.
    Output,
}

impl<E> Error<E> {
    /// Fieldless classification of this error, as recorded on the handle.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Bus(_) => ErrorKind::Bus,
            Error::ShortRead { .. } => ErrorKind::ShortRead,
            Error::InvalidArgument => ErrorKind::InvalidArgument,
            Error::DeviceNotFound { .. } => ErrorKind::DeviceNotFound,
            Error::Output => ErrorKind::Output,
        }
    }
}

// Allow ergonomic `?` propagation from raw bus errors.
impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Bus(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "Bus error: {:?}", e),
            Error::ShortRead { expected, received } => {
                write!(f, "Short read: expected {} bytes, got {}", expected, received)
            }
            Error::InvalidArgument => write!(f, "Invalid argument"),
            Error::DeviceNotFound { found } => {
                write!(f, "Device not found (WHO_AM_I = {:#04x})", found)
            }
            Error::Output => write!(f, "Diagnostic output failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Bus(e) => defmt::write!(f, "Bus error: {}", e),
            Error::ShortRead { expected, received } => {
                defmt::write!(f, "Short read: expected {}, got {}", expected, received)
            }
            Error::InvalidArgument => defmt::write!(f, "Invalid argument"),
            Error::DeviceNotFound { found } => {
                defmt::write!(f, "Device not found (WHO_AM_I = {=u8:#x})", found)
            }
            Error::Output => defmt::write!(f, "Diagnostic output failed"),
        }
    }
}

/// Last error recorded on the driver handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Initial state, and the state after a successful identification.
    #[default]
    NoError,
    /// Problem reading: fewer bytes than requested.
    ShortRead,
    /// Bad method argument.
    InvalidArgument,
    /// Identification byte mismatch.
    DeviceNotFound,
    /// Bus transaction failed.
    Bus,
    /// Diagnostic sink failed.
    Output,
}

/// Overall health of the driver handle.
///
/// Only [`L3g4200d::init`](crate::L3g4200d::init) returns the handle to
/// [`Status::Ok`]; failed reads and a failed identification during `init`
/// move it to [`Status::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    #[default]
    Ok,
    Error,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Error::Bus(()).kind(), ErrorKind::Bus);
        assert_eq!(
            Error::<()>::ShortRead { expected: 6, received: 2 }.kind(),
            ErrorKind::ShortRead
        );
        assert_eq!(Error::<()>::InvalidArgument.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            Error::<()>::DeviceNotFound { found: 0xD4 }.kind(),
            ErrorKind::DeviceNotFound
        );
        assert_eq!(Error::<()>::Output.kind(), ErrorKind::Output);
    }

    #[test]
    fn from_bus_error() {
        let err: Error<u8> = 7u8.into();
        assert_eq!(err, Error::Bus(7));
    }

    #[test]
    fn display_includes_found_id() {
        let err = Error::<()>::DeviceNotFound { found: 0xD4 };
        assert_eq!(err.to_string(), "Device not found (WHO_AM_I = 0xd4)");
    }

    #[test]
    fn defaults_are_healthy() {
        assert_eq!(ErrorKind::default(), ErrorKind::NoError);
        assert_eq!(Status::default(), Status::Ok);
    }
}
