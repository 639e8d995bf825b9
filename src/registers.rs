//! Register address constants for the L3G4200D gyroscope.
//!
//! All registers are one byte wide. Setting the most significant bit of the
//! register address ([`AUTO_INCREMENT`]) makes the device advance its
//! internal address after every byte of a multi-byte read.

// ---------------------------------------------------------------------------
// Bus addresses
// ---------------------------------------------------------------------------

/// 7-bit bus address with the SDO pin pulled high (breakout default).
pub const ADDRESS_SDO_HIGH: u8 = 0x69;

/// 7-bit bus address with the SDO pin pulled low.
pub const ADDRESS_SDO_LOW: u8 = 0x68;

/// Default I2C address for common L3G4200D breakouts.
pub const DEFAULT_ADDRESS: u8 = ADDRESS_SDO_HIGH;

/// Register-address flag requesting address auto-increment during a burst.
pub const AUTO_INCREMENT: u8 = 0x80;

// ---------------------------------------------------------------------------
// Identification
// ---------------------------------------------------------------------------

/// Device identification register (read-only).
pub const WHO_AM_I: u8 = 0x0F;

/// Value of [`WHO_AM_I`] on a genuine L3G4200D.
pub const DEVICE_ID: u8 = 0xD3;

// ---------------------------------------------------------------------------
// Control registers
// ---------------------------------------------------------------------------

/// Data rate, bandwidth, power and axis enables.
///
/// `DR1 DR0 BW1 BW0 PD Zen Yen Xen`
pub const CTRL_REG1: u8 = 0x20;

/// High-pass filter mode and cutoff.
///
/// `0 0 HPM1 HPM0 HPCF3 HPCF2 HPCF1 HPCF0`
pub const CTRL_REG2: u8 = 0x21;

/// Interrupt routing. Not touched by this driver.
pub const CTRL_REG3: u8 = 0x22;

/// Full scale and self-test.
///
/// `BDU BLE FS1 FS0 - ST1 ST0 SIM`
pub const CTRL_REG4: u8 = 0x23;

/// FIFO and high-pass filter enables.
///
/// `BOOT FIFO_EN - HPen INT1_Sel1 INT1_Sel0 Out_Sel1 Out_Sel0`
pub const CTRL_REG5: u8 = 0x24;

/// High-pass filter reference value.
pub const REFERENCE: u8 = 0x25;

// ---------------------------------------------------------------------------
// Output and status
// ---------------------------------------------------------------------------

/// Temperature output, two's complement, -1 LSB/°C.
pub const OUT_TEMP: u8 = 0x26;

/// Data-ready and overrun flags.
pub const STATUS_REG: u8 = 0x27;

bitflags::bitflags! {
    /// Contents of [`STATUS_REG`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DataStatus: u8 {
        /// New X, Y, Z data overwrote unread data.
        const ZYXOR = 1 << 7;
        const ZOR   = 1 << 6;
        const YOR   = 1 << 5;
        const XOR   = 1 << 4;
        /// New X, Y, Z data available.
        const ZYXDA = 1 << 3;
        const ZDA   = 1 << 2;
        const YDA   = 1 << 1;
        const XDA   = 1 << 0;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "DataStatus({=u8:#010b})", self.bits());
    }
}

/// First of six angular rate output registers (X low, X high, Y low, ...).
pub const OUT_X_L: u8 = 0x28;

/// Number of output bytes covering all three axes.
pub const OUTPUT_LEN: usize = 6;

// ---------------------------------------------------------------------------
// FIFO
// ---------------------------------------------------------------------------

/// FIFO mode and watermark.
///
/// `FM2 FM1 FM0 WTM4 WTM3 WTM2 WTM1 WTM0`
pub const FIFO_CTRL_REG: u8 = 0x2E;

/// FIFO fill level and flags.
pub const FIFO_SRC_REG: u8 = 0x2F;

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// First register shown by a register dump after [`WHO_AM_I`].
pub const DUMP_FIRST: u8 = CTRL_REG1;

/// Last register shown by a register dump (INT1_DURATION).
pub const DUMP_LAST: u8 = 0x38;

/// Largest cutoff code accepted in the low nibble of [`CTRL_REG2`].
pub const CUTOFF_MAX: u8 = 10;
