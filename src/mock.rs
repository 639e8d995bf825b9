//! In-memory register store used by the unit tests.
//!
//! Records every transaction for verification and honours the
//! auto-increment flag on burst reads, like the real device.

extern crate std;

use std::vec::Vec;

use crate::driver::BusTransport;
use crate::registers::AUTO_INCREMENT;

/// Bus transaction as seen by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Single register write.
    Write { register: u8, value: u8 },
    /// Register read; `register` includes the auto-increment flag if sent.
    Read { register: u8, len: usize },
}

/// Error returned while the mock is set to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Stateful mock bus.
pub struct MockBus {
    registers: [u8; 256],
    transactions: Vec<Transaction>,
    read_limit: Option<usize>,
    failing: bool,
    fail_after: Option<usize>,
    last_address: Option<u8>,
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            registers: [0; 256],
            transactions: Vec::new(),
            read_limit: None,
            failing: false,
            fail_after: None,
            last_address: None,
        }
    }

    /// Mock whose WHO_AM_I register holds `id`.
    pub fn with_id(id: u8) -> Self {
        let mut bus = Self::new();
        bus.set_register(crate::registers::WHO_AM_I, id);
        bus
    }

    pub fn register(&self, register: u8) -> u8 {
        self.registers[register as usize]
    }

    /// Preload a register without logging a transaction.
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.registers[register as usize] = value;
    }

    /// Preload consecutive registers starting at `register`.
    pub fn set_registers(&mut self, register: u8, values: &[u8]) {
        let start = register as usize;
        self.registers[start..start + values.len()].copy_from_slice(values);
    }

    /// Deliver at most `limit` bytes per read from now on.
    pub fn limit_reads(&mut self, limit: usize) {
        self.read_limit = Some(limit);
    }

    /// Make every following transaction fail.
    pub fn fail(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// Let `count` more transactions succeed, then fail every one after.
    pub fn fail_after(&mut self, count: usize) {
        self.fail_after = Some(self.transactions.len() + count);
    }

    fn check(&self) -> Result<(), MockError> {
        let exhausted = self.fail_after.is_some_and(|n| self.transactions.len() >= n);
        if self.failing || exhausted {
            return Err(MockError);
        }
        Ok(())
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Only the write transactions, in order.
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.transactions
            .iter()
            .filter_map(|t| match *t {
                Transaction::Write { register, value } => Some((register, value)),
                Transaction::Read { .. } => None,
            })
            .collect()
    }

    pub fn last_address(&self) -> Option<u8> {
        self.last_address
    }
}

impl BusTransport for MockBus {
    type Error = MockError;

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), MockError> {
        self.last_address = Some(address);
        self.check()?;
        self.transactions.push(Transaction::Write { register, value });
        self.registers[register as usize] = value;
        Ok(())
    }

    fn read_registers(
        &mut self,
        address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<usize, MockError> {
        self.last_address = Some(address);
        self.check()?;
        self.transactions.push(Transaction::Read {
            register,
            len: buffer.len(),
        });

        let increment = register & AUTO_INCREMENT != 0;
        let start = (register & !AUTO_INCREMENT) as usize;
        let count = self.read_limit.map_or(buffer.len(), |l| l.min(buffer.len()));

        for (i, byte) in buffer[..count].iter_mut().enumerate() {
            let offset = if increment { i } else { 0 };
            *byte = self.registers[(start + offset) % 256];
        }
        Ok(count)
    }
}
