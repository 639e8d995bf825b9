//! Low-level register access.
//!
//! [`BusTransport`] is the capability the driver consumes: write one
//! register, read a run of registers. Every `embedded-hal` blocking I2C bus
//! implements it. [`RegisterBus`] binds a transport to a device address and
//! adds the read-modify-write primitives the settings are built from.
//!
//! `RegisterBus` is crate-private; consumers interact with
//! [`L3g4200d`](crate::L3g4200d) instead.

use embedded_hal::i2c::{ErrorType, I2c};

use crate::error::Error;
use crate::settings::RegisterField;

/// Register-level bus capability.
///
/// The register byte passed to [`read_registers`](Self::read_registers) may
/// carry the [`AUTO_INCREMENT`](crate::registers::AUTO_INCREMENT) flag, in
/// which case the device advances its address across the burst.
pub trait BusTransport {
    /// Transport-level error.
    type Error;

    /// Write `value` to `register` of the device at `address`.
    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Read consecutive registers starting at `register` into `buffer`.
    ///
    /// Returns how many bytes the device actually delivered. A transport may
    /// deliver fewer than `buffer.len()` bytes; the remaining bytes of the
    /// buffer are left untouched.
    fn read_registers(
        &mut self,
        address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<usize, Self::Error>;
}

impl<T: I2c> BusTransport for T {
    type Error = <T as ErrorType>::Error;

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        value: u8,
    ) -> Result<(), <T as ErrorType>::Error> {
        self.write(address, &[register, value])
    }

    /// A successful `write_read` always fills the whole buffer.
    fn read_registers(
        &mut self,
        address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<usize, <T as ErrorType>::Error> {
        self.write_read(address, &[register], buffer)?;
        Ok(buffer.len())
    }
}

/// A bus transport bound to one device address.
pub(crate) struct RegisterBus<T> {
    bus: T,
    address: u8,
}

impl<T> RegisterBus<T>
where
    T: BusTransport,
{
    pub fn new(bus: T, address: u8) -> Self {
        Self { bus, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    pub fn release(self) -> T {
        self.bus
    }

    // -----------------------------------------------------------------------
    // Core primitives
    // -----------------------------------------------------------------------

    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<T::Error>> {
        self.bus.write_register(self.address, register, value)?;
        Ok(())
    }

    /// Fill `buffer` from consecutive registers.
    ///
    /// Fails with [`Error::ShortRead`] when the transport delivers fewer bytes
    /// than `buffer.len()`.
    pub fn read_exact(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Error<T::Error>> {
        let received = self.bus.read_registers(self.address, register, buffer)?;
        if received < buffer.len() {
            return Err(Error::ShortRead {
                expected: buffer.len(),
                received,
            });
        }
        Ok(())
    }

    pub fn read_register(&mut self, register: u8) -> Result<u8, Error<T::Error>> {
        let mut buf = [0u8; 1];
        self.read_exact(register, &mut buf)?;
        Ok(buf[0])
    }

    // -----------------------------------------------------------------------
    // Bit helpers
    // -----------------------------------------------------------------------

    /// Read one bit of a register.
    pub fn register_bit(&mut self, register: u8, bit: u8) -> Result<bool, Error<T::Error>> {
        Ok((self.read_register(register)? >> bit) & 1 == 1)
    }

    /// Force one bit of a register, leaving all other bits alone.
    ///
    /// Costs one read and one write on the bus.
    pub fn set_register_bit(
        &mut self,
        register: u8,
        bit: u8,
        state: bool,
    ) -> Result<(), Error<T::Error>> {
        let mut value = self.read_register(register)?;
        if state {
            value |= 1 << bit;
        } else {
            value &= !(1 << bit);
        }
        self.write_register(register, value)
    }

    /// Replace the bits selected by `mask` in a single read-modify-write.
    pub fn update_register(
        &mut self,
        register: u8,
        mask: u8,
        value: u8,
    ) -> Result<(), Error<T::Error>> {
        let current = self.read_register(register)?;
        self.write_register(register, (current & !mask) | (value & mask))
    }

    /// Write a setting one bit at a time, most significant bit first.
    ///
    /// Every bit is its own read-modify-write, so a two-bit field costs two
    /// round trips on the bus.
    pub fn write_field<F: RegisterField>(&mut self, field: F) -> Result<(), Error<T::Error>> {
        for (bit, state) in field.bit_states() {
            self.set_register_bit(F::REGISTER, bit, state)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::mock::{MockBus, Transaction};
    use core::convert::Infallible;
    use std::vec;
    use std::vec::Vec;

    const ADDR: u8 = 0x69;

    #[test]
    fn set_register_bit_preserves_other_bits() {
        let mut bus = RegisterBus::new(MockBus::new(), ADDR);
        bus.write_register(0x20, 0b1010_0000).unwrap();

        bus.set_register_bit(0x20, 0, true).unwrap();
        bus.set_register_bit(0x20, 7, false).unwrap();

        let mock = bus.release();
        assert_eq!(mock.register(0x20), 0b0010_0001);
    }

    #[test]
    fn set_register_bit_is_one_read_one_write() {
        let mut bus = RegisterBus::new(MockBus::new(), ADDR);
        bus.set_register_bit(0x24, 6, true).unwrap();

        let mock = bus.release();
        assert_eq!(
            mock.transactions(),
            vec![
                Transaction::Read { register: 0x24, len: 1 },
                Transaction::Write { register: 0x24, value: 0x40 },
            ]
        );
    }

    #[test]
    fn register_bit_reads_fresh_value() {
        let mut mock = MockBus::new();
        mock.set_register(0x24, 0b0001_0000);
        let mut bus = RegisterBus::new(mock, ADDR);

        assert!(bus.register_bit(0x24, 4).unwrap());
        assert!(!bus.register_bit(0x24, 6).unwrap());
    }

    #[test]
    fn update_register_masks_value() {
        let mut mock = MockBus::new();
        mock.set_register(0x21, 0xF0);
        let mut bus = RegisterBus::new(mock, ADDR);

        bus.update_register(0x21, 0x0F, 0xA5).unwrap();

        assert_eq!(bus.release().register(0x21), 0xF5);
    }

    #[test]
    fn read_exact_reports_short_read() {
        let mut mock = MockBus::new();
        mock.limit_reads(2);
        let mut bus = RegisterBus::new(mock, ADDR);

        let mut buf = [0u8; 6];
        assert_eq!(
            bus.read_exact(0xA8, &mut buf),
            Err(Error::ShortRead { expected: 6, received: 2 })
        );
    }

    // -----------------------------------------------------------------------
    // embedded-hal adapter
    // -----------------------------------------------------------------------

    /// Records raw I2C operations and answers reads with a fixed byte.
    struct RecordingI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fill: u8,
    }

    impl embedded_hal::i2c::ErrorType for RecordingI2c {
        type Error = Infallible;
    }

    impl I2c for RecordingI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [embedded_hal::i2c::Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                match op {
                    embedded_hal::i2c::Operation::Write(bytes) => {
                        self.writes.push((address, bytes.to_vec()));
                    }
                    embedded_hal::i2c::Operation::Read(buf) => buf.fill(self.fill),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn i2c_write_register_sends_register_then_value() {
        let mut i2c = RecordingI2c { writes: Vec::new(), fill: 0 };
        i2c.write_register(ADDR, 0x20, 0x0F).unwrap();
        assert_eq!(i2c.writes, vec![(ADDR, vec![0x20, 0x0F])]);
    }

    #[test]
    fn i2c_read_registers_fills_whole_buffer() {
        let mut i2c = RecordingI2c { writes: Vec::new(), fill: 0xD3 };
        let mut buf = [0u8; 3];

        let received = i2c.read_registers(ADDR, 0x0F, &mut buf).unwrap();

        assert_eq!(received, 3);
        assert_eq!(buf, [0xD3; 3]);
        assert_eq!(i2c.writes, vec![(ADDR, vec![0x0F])]);
    }
}
