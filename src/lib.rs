//! Blocking driver for the ST L3G4200D three-axis gyroscope.
//!
//! This crate talks to the gyroscope over I2C through the `embedded-hal` 1.0
//! blocking [`I2c`](embedded_hal::i2c::I2c) trait, or through any other
//! [`BusTransport`].
//!
//! # Architecture
//!
//! The crate is split into layers:
//!
//! - **`driver`** (crate-private): register read/write primitives and the
//!   single-bit read-modify-write helpers every setting is built from.
//! - **`settings`**: one enum per setting, each carrying its row of the
//!   control register map.
//! - **[`L3g4200d`]** (public): identification, power control, the
//!   configuration setters and the angular rate read path.
//!
//! # Quick start
//!
//! ```no_run
//! use l3g4200d_driver::{L3g4200d, DEFAULT_ADDRESS};
//!
//! # fn example(i2c: impl embedded_hal::i2c::I2c) {
//! let mut gyro = L3g4200d::new(i2c);
//! gyro.init(DEFAULT_ADDRESS).unwrap();
//!
//! let rate = gyro.read_angular_rate().unwrap();
//! # let _ = rate;
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`**: [`defmt::Format`] implementations on the public types and
//!   log output from `init`.

#![no_std]

pub use config::GyroConfig;
pub use driver::BusTransport;
pub use error::{Error, ErrorKind, Status};
pub use gyroscope::{AngularRate, L3g4200d};
pub use registers::{DataStatus, ADDRESS_SDO_HIGH, ADDRESS_SDO_LOW, DEFAULT_ADDRESS, DEVICE_ID};
pub use settings::{Axis, Bandwidth, DataRate, FifoMode, HighPassMode, Resolution, SelfTest};

mod config;
mod driver;
mod error;
mod gyroscope;
pub mod registers;
mod settings;

#[cfg(test)]
mod mock;
