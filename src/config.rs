//! Whole-device configuration applied in one call.

use crate::driver::BusTransport;
use crate::error::Error;
use crate::gyroscope::L3g4200d;
use crate::settings::{Bandwidth, DataRate, FifoMode, HighPassMode, Resolution, SelfTest};

/// Every configurable setting of the gyroscope.
///
/// [`GyroConfig::default()`] matches the device's register values after
/// power-on (100 Hz, bandwidth 1, ±250 dps, filters and FIFO off).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Output data rate. Default: 100 Hz.
    pub data_rate: DataRate,
    /// Low-pass bandwidth class. Default: 1.
    pub bandwidth: Bandwidth,

    // ── High-pass filter ─────────────────────────────────────────────
    /// Filter mode. Default: normal with reset.
    pub high_pass_mode: HighPassMode,
    /// Cutoff code, 0-10. Default: 0.
    pub cutoff: u8,
    /// Route output through the high-pass filter. Default: off.
    pub high_pass_filter: bool,

    /// Full-scale range. Default: ±250 dps.
    pub resolution: Resolution,
    /// Self-test excitation. Default: off.
    pub self_test: SelfTest,

    // ── FIFO ─────────────────────────────────────────────────────────
    /// Default: off.
    pub fifo: bool,
    /// Default: bypass.
    pub fifo_mode: FifoMode,
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self {
            data_rate: DataRate::Hz100,
            bandwidth: Bandwidth::Bw1,
            high_pass_mode: HighPassMode::NormalReset,
            cutoff: 0,
            high_pass_filter: false,
            resolution: Resolution::Dps250,
            self_test: SelfTest::Normal,
            fifo: false,
            fifo_mode: FifoMode::Bypass,
        }
    }
}

impl<T> L3g4200d<T>
where
    T: BusTransport,
{
    /// Apply every field of `config`, in register order.
    ///
    /// Each field goes through its regular setter, so the bus sees the same
    /// read-modify-write sequence as individual calls would produce.
    ///
    /// # Errors
    /// Stops at the first failing setter and returns its error. Settings
    /// applied before the failure stay in effect.
    pub fn apply_config(&mut self, config: &GyroConfig) -> Result<(), Error<T::Error>> {
        self.set_data_rate(config.data_rate)?;
        self.set_bandwidth(config.bandwidth)?;
        self.set_high_pass_mode(config.high_pass_mode)?;
        self.set_cutoff_frequency(i32::from(config.cutoff))?;
        self.set_resolution(config.resolution)?;
        self.set_self_test(config.self_test)?;
        self.enable_high_pass_filter(config.high_pass_filter)?;
        self.enable_fifo(config.fifo)?;
        self.set_fifo_mode(config.fifo_mode)
    }
}
