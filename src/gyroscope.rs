//! High-level interface for the L3G4200D gyroscope.
//!
//! [`L3g4200d`] wraps the register bus with device identification, power
//! control, the configuration setters and the angular rate read path. It
//! never caches register contents: every setter is a read-modify-write on
//! the device and every getter is a fresh bus read.

use core::fmt::Write;

use crate::driver::{BusTransport, RegisterBus};
use crate::error::{Error, ErrorKind, Status};
use crate::registers::{
    DataStatus, AUTO_INCREMENT, CTRL_REG1, CTRL_REG2, CUTOFF_MAX, DEFAULT_ADDRESS, DEVICE_ID,
    DUMP_FIRST, DUMP_LAST, OUTPUT_LEN, OUT_TEMP, OUT_X_L, STATUS_REG, WHO_AM_I,
};
use crate::settings::{
    Axis, Bandwidth, DataRate, FifoMode, HighPassMode, Resolution, SelfTest, CUTOFF_MASK,
    ENABLE_REGISTER, FIFO_ENABLE_BIT, HIGH_PASS_ENABLE_BIT, POWER_BIT, POWER_ON_CTRL_REG1,
};

/// One raw angular rate sample.
///
/// Values are signed counts. Multiply by the sensitivity of the configured
/// [`Resolution`] to get degrees per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngularRate {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl AngularRate {
    /// Reassemble a sample from the six output registers (low byte first).
    pub fn from_bytes(bytes: [u8; OUTPUT_LEN]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }
}

/// Driver for one L3G4200D on a register bus.
///
/// Every operation returns a `Result` and also records its outcome on the
/// handle, readable through [`status`](Self::status) and
/// [`error_kind`](Self::error_kind). Failures never block later calls: a
/// setter issued after a failed identification still goes to the bus.
///
/// # Example
///
/// ```no_run
/// use l3g4200d_driver::{DataRate, L3g4200d, Resolution, DEFAULT_ADDRESS};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut gyro = L3g4200d::new(i2c);
/// gyro.init(DEFAULT_ADDRESS).unwrap();
/// gyro.set_data_rate(DataRate::Hz400).unwrap();
/// gyro.set_resolution(Resolution::Dps500).unwrap();
///
/// let rate = gyro.read_angular_rate().unwrap();
/// # let _ = rate;
/// # }
/// ```
pub struct L3g4200d<T> {
    bus: RegisterBus<T>,
    status: Status,
    error_kind: ErrorKind,
}

impl<T> L3g4200d<T>
where
    T: BusTransport,
{
    /// Create an uninitialised driver at [`DEFAULT_ADDRESS`].
    ///
    /// No bus traffic is generated. Call [`init`](Self::init) before use.
    pub fn new(bus: T) -> Self {
        Self {
            bus: RegisterBus::new(bus, DEFAULT_ADDRESS),
            status: Status::Ok,
            error_kind: ErrorKind::NoError,
        }
    }

    /// Outcome of the last failing operation, or of `init`.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Kind of the last recorded error.
    pub fn error_kind(&self) -> ErrorKind {
        self.error_kind
    }

    /// 7-bit bus address in use.
    pub fn address(&self) -> u8 {
        self.bus.address()
    }

    /// Give the bus back.
    pub fn release(self) -> T {
        self.bus.release()
    }

    /// Record a failed result on the handle and pass it through.
    ///
    /// Bus failures and short reads mark the handle as errored; the other
    /// kinds only update [`error_kind`](Self::error_kind).
    fn record<R>(&mut self, result: Result<R, Error<T::Error>>) -> Result<R, Error<T::Error>> {
        if let Err(e) = &result {
            let kind = e.kind();
            self.error_kind = kind;
            if matches!(kind, ErrorKind::Bus | ErrorKind::ShortRead) {
                self.status = Status::Error;
            }
        }
        result
    }

    // -----------------------------------------------------------------------
    // Identification and power
    // -----------------------------------------------------------------------

    /// Bind to `address`, identify the device and power it on.
    ///
    /// Resets the recorded status first. When identification fails the
    /// status becomes [`Status::Error`] and the device is left powered
    /// down. There is no retry.
    ///
    /// # Errors
    /// * [`Error::DeviceNotFound`] if WHO_AM_I does not read `0xD3`
    /// * [`Error::Bus`] / [`Error::ShortRead`] on communication failure
    pub fn init(&mut self, address: u8) -> Result<(), Error<T::Error>> {
        self.bus.set_address(address);
        self.status = Status::Ok;
        self.error_kind = ErrorKind::NoError;

        if let Err(e) = self.identify() {
            #[cfg(feature = "defmt")]
            defmt::warn!("L3G4200D not found at {=u8:#x}: {}", address, e.kind());
            self.status = Status::Error;
            return Err(e);
        }

        self.power_on()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("L3G4200D at {=u8:#x} powered on", address);

        Ok(())
    }

    /// Read WHO_AM_I and check it against the L3G4200D identifier.
    ///
    /// Returns the identifier and clears the recorded error kind on a
    /// match. On a mismatch the kind becomes [`ErrorKind::DeviceNotFound`];
    /// callers expecting the legacy zero sentinel can use
    /// `identify().unwrap_or(0)`.
    pub fn identify(&mut self) -> Result<u8, Error<T::Error>> {
        let result = self.bus.read_register(WHO_AM_I).and_then(|id| {
            if id == DEVICE_ID {
                Ok(id)
            } else {
                Err(Error::DeviceNotFound { found: id })
            }
        });
        if result.is_ok() {
            self.error_kind = ErrorKind::NoError;
        }
        self.record(result)
    }

    /// Enable the device and all three axes at 100 Hz / bandwidth 1.
    ///
    /// Overwrites CTRL_REG1 completely.
    pub fn power_on(&mut self) -> Result<(), Error<T::Error>> {
        let result = self.bus.write_register(CTRL_REG1, POWER_ON_CTRL_REG1);
        self.record(result)
    }

    /// Clear the power bit, leaving the rest of CTRL_REG1 alone.
    pub fn power_down(&mut self) -> Result<(), Error<T::Error>> {
        let result = self.bus.set_register_bit(CTRL_REG1, POWER_BIT, false);
        self.record(result)
    }

    /// Disable X, Y and Z in turn.
    ///
    /// Three separate read-modify-writes; the power bit stays set, which
    /// puts the device in its sleep mode rather than power-down.
    pub fn sleep(&mut self) -> Result<(), Error<T::Error>> {
        self.enable_axis(Axis::X, false)?;
        self.enable_axis(Axis::Y, false)?;
        self.enable_axis(Axis::Z, false)
    }

    // -----------------------------------------------------------------------
    // Measurements
    // -----------------------------------------------------------------------

    /// Burst-read the six output registers and reassemble X, Y and Z.
    ///
    /// # Errors
    /// * [`Error::ShortRead`] if the bus delivered fewer than six bytes. No
    ///   sample is returned in that case.
    /// * [`Error::Bus`] on communication failure
    pub fn read_angular_rate(&mut self) -> Result<AngularRate, Error<T::Error>> {
        let mut buf = [0u8; OUTPUT_LEN];
        let result = self
            .bus
            .read_exact(OUT_X_L | AUTO_INCREMENT, &mut buf)
            .map(|()| AngularRate::from_bytes(buf));
        self.record(result)
    }

    /// Raw temperature reading (-1 LSB/°C, uncalibrated offset).
    pub fn temperature(&mut self) -> Result<i8, Error<T::Error>> {
        let result = self.bus.read_register(OUT_TEMP).map(|b| b as i8);
        self.record(result)
    }

    /// Data-ready and overrun flags.
    pub fn data_status(&mut self) -> Result<DataStatus, Error<T::Error>> {
        let result = self
            .bus
            .read_register(STATUS_REG)
            .map(DataStatus::from_bits_retain);
        self.record(result)
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Set the output data rate.
    ///
    /// Writes DR1 then DR0 (CTRL_REG1 bits 7, 6), one read-modify-write each.
    ///
    /// # Errors
    /// * [`Error::Bus`] / [`Error::ShortRead`] on communication failure. The
    ///   remaining bit is not written.
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<T::Error>> {
        let result = self.bus.write_field(rate);
        self.record(result)
    }

    /// Set the low-pass bandwidth class (CTRL_REG1 bits 5, 4).
    pub fn set_bandwidth(&mut self, bandwidth: Bandwidth) -> Result<(), Error<T::Error>> {
        let result = self.bus.write_field(bandwidth);
        self.record(result)
    }

    /// Set the high-pass filter mode (CTRL_REG2 bits 5, 4).
    pub fn set_high_pass_mode(&mut self, mode: HighPassMode) -> Result<(), Error<T::Error>> {
        let result = self.bus.write_field(mode);
        self.record(result)
    }

    /// Set the high-pass cutoff code (0-10, see datasheet table 27).
    ///
    /// The low nibble of CTRL_REG2 is replaced in one write; the filter mode
    /// bits are preserved.
    ///
    /// # Errors
    /// * [`Error::InvalidArgument`] if `cutoff` is outside 0-10. Nothing is
    ///   sent on the bus.
    pub fn set_cutoff_frequency(&mut self, cutoff: i32) -> Result<(), Error<T::Error>> {
        let result = match u8::try_from(cutoff) {
            Ok(code) if code <= CUTOFF_MAX => {
                self.bus.update_register(CTRL_REG2, CUTOFF_MASK, code)
            }
            _ => Err(Error::InvalidArgument),
        };
        self.record(result)
    }

    /// Set the full-scale range (CTRL_REG4 bits 5, 4).
    pub fn set_resolution(&mut self, resolution: Resolution) -> Result<(), Error<T::Error>> {
        let result = self.bus.write_field(resolution);
        self.record(result)
    }

    /// Select self-test excitation (CTRL_REG4 bits 2, 1).
    pub fn set_self_test(&mut self, mode: SelfTest) -> Result<(), Error<T::Error>> {
        let result = self.bus.write_field(mode);
        self.record(result)
    }

    /// Set the FIFO mode (FIFO_CTRL_REG bits 7, 6, 5).
    ///
    /// Three read-modify-writes; the watermark bits are left alone.
    pub fn set_fifo_mode(&mut self, mode: FifoMode) -> Result<(), Error<T::Error>> {
        let result = self.bus.write_field(mode);
        self.record(result)
    }

    /// Route the output through the high-pass filter (CTRL_REG5 bit 4).
    pub fn enable_high_pass_filter(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        let result = self
            .bus
            .set_register_bit(ENABLE_REGISTER, HIGH_PASS_ENABLE_BIT, enable);
        self.record(result)
    }

    /// Enable the FIFO (CTRL_REG5 bit 6).
    ///
    /// The mode itself is chosen with [`set_fifo_mode`](Self::set_fifo_mode).
    pub fn enable_fifo(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        let result = self
            .bus
            .set_register_bit(ENABLE_REGISTER, FIFO_ENABLE_BIT, enable);
        self.record(result)
    }

    /// Enable or disable one measurement axis.
    ///
    /// # Arguments
    /// * `axis` - selects CTRL_REG1 bit 0 (X), 1 (Y) or 2 (Z)
    /// * `enable` - new state of the bit
    pub fn enable_axis(&mut self, axis: Axis, enable: bool) -> Result<(), Error<T::Error>> {
        let result = self.bus.set_register_bit(CTRL_REG1, axis.enable_bit(), enable);
        self.record(result)
    }

    /// Enable or disable the X axis (CTRL_REG1 bit 0).
    pub fn enable_x_axis(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        self.enable_axis(Axis::X, enable)
    }

    /// Enable or disable the Y axis (CTRL_REG1 bit 1).
    pub fn enable_y_axis(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        self.enable_axis(Axis::Y, enable)
    }

    /// Enable or disable the Z axis (CTRL_REG1 bit 2).
    pub fn enable_z_axis(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        self.enable_axis(Axis::Z, enable)
    }

    // -----------------------------------------------------------------------
    // Read-back
    // -----------------------------------------------------------------------

    /// Whether `axis` is enabled, read fresh from CTRL_REG1.
    pub fn is_axis_enabled(&mut self, axis: Axis) -> Result<bool, Error<T::Error>> {
        let result = self.bus.register_bit(CTRL_REG1, axis.enable_bit());
        self.record(result)
    }

    /// Whether the FIFO is enabled (CTRL_REG5 bit 6).
    pub fn is_fifo_enabled(&mut self) -> Result<bool, Error<T::Error>> {
        let result = self.bus.register_bit(ENABLE_REGISTER, FIFO_ENABLE_BIT);
        self.record(result)
    }

    /// Whether the high-pass filter is in the output path (CTRL_REG5 bit 4).
    pub fn is_high_pass_filter_enabled(&mut self) -> Result<bool, Error<T::Error>> {
        let result = self.bus.register_bit(ENABLE_REGISTER, HIGH_PASS_ENABLE_BIT);
        self.record(result)
    }

    // -----------------------------------------------------------------------
    // Raw access and diagnostics
    // -----------------------------------------------------------------------

    /// Read any register.
    pub fn read_register(&mut self, register: u8) -> Result<u8, Error<T::Error>> {
        let result = self.bus.read_register(register);
        self.record(result)
    }

    /// Write any register.
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<T::Error>> {
        let result = self.bus.write_register(register, value);
        self.record(result)
    }

    /// Read WHO_AM_I and registers 0x20-0x38, handing each
    /// `(register, value)` pair to `visit` as soon as it is read.
    ///
    /// Suited to line-oriented loggers that cannot accumulate a
    /// [`Write`] stream, e.g. `defmt`.
    ///
    /// # Errors
    /// Stops at the first failing read; pairs already visited stay visited.
    pub fn for_each_register<F>(&mut self, mut visit: F) -> Result<(), Error<T::Error>>
    where
        F: FnMut(u8, u8),
    {
        let result = self.visit_dump(|register, value| {
            visit(register, value);
            Ok(())
        });
        self.record(result)
    }

    /// Print WHO_AM_I and registers 0x20-0x38 to `out`, one per line.
    ///
    /// Each line reads `0xNN: bbbbbbbb`, most significant bit first, which
    /// makes it easy to compare the live configuration with the datasheet.
    pub fn dump_registers<W: Write>(&mut self, out: &mut W) -> Result<(), Error<T::Error>> {
        let result = self.visit_dump(|register, value| {
            writeln!(out, "{:#04X}: {:08b}", register, value).map_err(|_| Error::Output)
        });
        self.record(result)
    }

    fn visit_dump<F>(&mut self, mut visit: F) -> Result<(), Error<T::Error>>
    where
        F: FnMut(u8, u8) -> Result<(), Error<T::Error>>,
    {
        for register in core::iter::once(WHO_AM_I).chain(DUMP_FIRST..=DUMP_LAST) {
            let value = self.bus.read_register(register)?;
            visit(register, value)?;
        }
        Ok(())
    }
}
