//! Logical settings and the control register map.
//!
//! Each setting is a small enum. The [`RegisterField`] implementation of an
//! enum is its row of the control register map: which register holds the
//! field, which bits it occupies, and which bit pattern each value selects.
//!
//! Raw codes (`From<u8>` / `From<u16>`) accept the numeric constants used by
//! older Arduino sketches. Unknown codes select the first variant rather than
//! failing, so a sketch passing an out-of-range rate still gets 100 Hz.

use crate::registers::{CTRL_REG1, CTRL_REG2, CTRL_REG4, CTRL_REG5, FIFO_CTRL_REG};

/// One row of the control register map.
pub(crate) trait RegisterField: Copy {
    /// Register holding the field.
    const REGISTER: u8;

    /// Bit positions of the field, most significant first.
    const BITS: &'static [u8];

    /// Pattern selected by this value, right-aligned (bit 0 maps to the
    /// last entry of [`Self::BITS`]).
    fn pattern(self) -> u8;

    /// Desired state of each bit in [`Self::BITS`] order.
    fn bit_states(self) -> impl Iterator<Item = (u8, bool)> {
        let pattern = self.pattern();
        let width = Self::BITS.len();
        Self::BITS
            .iter()
            .enumerate()
            .map(move |(i, &bit)| (bit, (pattern >> (width - 1 - i)) & 1 == 1))
    }
}

// ---------------------------------------------------------------------------
// CTRL_REG1
// ---------------------------------------------------------------------------

/// Output data rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    #[default]
    Hz100,
    Hz200,
    Hz400,
    Hz800,
}

impl From<u8> for DataRate {
    fn from(code: u8) -> Self {
        match code {
            2 => DataRate::Hz200,
            3 => DataRate::Hz400,
            4 => DataRate::Hz800,
            _ => DataRate::Hz100,
        }
    }
}

impl RegisterField for DataRate {
    const REGISTER: u8 = CTRL_REG1;
    const BITS: &'static [u8] = &[7, 6];

    fn pattern(self) -> u8 {
        match self {
            DataRate::Hz100 => 0b00,
            DataRate::Hz200 => 0b01,
            DataRate::Hz400 => 0b10,
            DataRate::Hz800 => 0b11,
        }
    }
}

/// Low-pass bandwidth class. The cutoff each class selects depends on the
/// data rate; see the datasheet table for CTRL_REG1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bandwidth {
    #[default]
    Bw1,
    Bw2,
    Bw3,
    Bw4,
}

impl From<u8> for Bandwidth {
    fn from(code: u8) -> Self {
        match code {
            2 => Bandwidth::Bw2,
            3 => Bandwidth::Bw3,
            4 => Bandwidth::Bw4,
            _ => Bandwidth::Bw1,
        }
    }
}

impl RegisterField for Bandwidth {
    const REGISTER: u8 = CTRL_REG1;
    const BITS: &'static [u8] = &[5, 4];

    fn pattern(self) -> u8 {
        match self {
            Bandwidth::Bw1 => 0b00,
            Bandwidth::Bw2 => 0b01,
            Bandwidth::Bw3 => 0b10,
            Bandwidth::Bw4 => 0b11,
        }
    }
}

/// Measurement axis. Doubles as the enable bit index in CTRL_REG1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub(crate) fn enable_bit(self) -> u8 {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Power enable (PD) bit in CTRL_REG1.
pub(crate) const POWER_BIT: u8 = 3;

/// CTRL_REG1 value written on power-on: PD and all three axes enabled,
/// 100 Hz, bandwidth class 1.
pub(crate) const POWER_ON_CTRL_REG1: u8 = 0x0F;

// ---------------------------------------------------------------------------
// CTRL_REG2
// ---------------------------------------------------------------------------

/// High-pass filter mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HighPassMode {
    /// Normal mode, reset by reading the REFERENCE register.
    #[default]
    NormalReset,
    /// Output relative to the REFERENCE register.
    Reference,
    Normal,
    /// Reset on interrupt event.
    AutoReset,
}

impl From<u8> for HighPassMode {
    fn from(code: u8) -> Self {
        match code {
            2 => HighPassMode::Reference,
            3 => HighPassMode::Normal,
            4 => HighPassMode::AutoReset,
            _ => HighPassMode::NormalReset,
        }
    }
}

impl RegisterField for HighPassMode {
    const REGISTER: u8 = CTRL_REG2;
    const BITS: &'static [u8] = &[5, 4];

    fn pattern(self) -> u8 {
        match self {
            HighPassMode::NormalReset => 0b00,
            HighPassMode::Reference => 0b01,
            HighPassMode::Normal => 0b10,
            HighPassMode::AutoReset => 0b11,
        }
    }
}

/// Mask of the high-pass cutoff code in CTRL_REG2.
pub(crate) const CUTOFF_MASK: u8 = 0x0F;

// ---------------------------------------------------------------------------
// CTRL_REG4
// ---------------------------------------------------------------------------

/// Full-scale range in degrees per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    #[default]
    Dps250,
    Dps500,
    Dps1000,
    Dps2000,
}

impl From<u16> for Resolution {
    fn from(dps: u16) -> Self {
        match dps {
            500 => Resolution::Dps500,
            1000 => Resolution::Dps1000,
            2000 => Resolution::Dps2000,
            _ => Resolution::Dps250,
        }
    }
}

impl RegisterField for Resolution {
    const REGISTER: u8 = CTRL_REG4;
    const BITS: &'static [u8] = &[5, 4];

    fn pattern(self) -> u8 {
        match self {
            Resolution::Dps250 => 0b00,
            Resolution::Dps500 => 0b01,
            Resolution::Dps1000 => 0b10,
            Resolution::Dps2000 => 0b11,
        }
    }
}

/// Self-test excitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelfTest {
    #[default]
    Normal,
    Positive,
    Negative,
}

impl From<u8> for SelfTest {
    fn from(code: u8) -> Self {
        match code {
            2 => SelfTest::Positive,
            3 => SelfTest::Negative,
            _ => SelfTest::Normal,
        }
    }
}

impl RegisterField for SelfTest {
    const REGISTER: u8 = CTRL_REG4;
    const BITS: &'static [u8] = &[2, 1];

    fn pattern(self) -> u8 {
        match self {
            SelfTest::Normal => 0b00,
            SelfTest::Positive => 0b01,
            SelfTest::Negative => 0b11,
        }
    }
}

// ---------------------------------------------------------------------------
// CTRL_REG5
// ---------------------------------------------------------------------------

/// FIFO_EN bit in CTRL_REG5.
pub(crate) const FIFO_ENABLE_BIT: u8 = 6;

/// HPen bit in CTRL_REG5.
pub(crate) const HIGH_PASS_ENABLE_BIT: u8 = 4;

/// Register holding both enable bits above.
pub(crate) const ENABLE_REGISTER: u8 = CTRL_REG5;

// ---------------------------------------------------------------------------
// FIFO_CTRL_REG
// ---------------------------------------------------------------------------

/// FIFO operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoMode {
    #[default]
    Bypass,
    Fifo,
    Stream,
    StreamToFifo,
    BypassToStream,
}

impl From<u8> for FifoMode {
    fn from(code: u8) -> Self {
        match code {
            2 => FifoMode::Fifo,
            3 => FifoMode::Stream,
            4 => FifoMode::StreamToFifo,
            5 => FifoMode::BypassToStream,
            _ => FifoMode::Bypass,
        }
    }
}

impl RegisterField for FifoMode {
    const REGISTER: u8 = FIFO_CTRL_REG;
    const BITS: &'static [u8] = &[7, 6, 5];

    fn pattern(self) -> u8 {
        match self {
            FifoMode::Bypass => 0b000,
            FifoMode::Fifo => 0b001,
            FifoMode::Stream => 0b010,
            FifoMode::StreamToFifo => 0b011,
            FifoMode::BypassToStream => 0b100,
        }
    }
}
