//! Simple gyroscope example
//!
//! Demonstrates basic usage of the l3g4200d-driver crate on the Raspberry Pi
//! Pico 2. Identifies the gyroscope, applies a configuration, dumps the
//! register block once, then logs an angular rate sample whenever the data
//! ready flag is set.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | I2C0 SDA  | GP20       |                              |
//! | I2C0 SCL  | GP21       |                              |
//! | SDO       | 3V3        | Selects address 0x69         |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use l3g4200d_driver::{
    DataRate, DataStatus, GyroConfig, L3g4200d, Resolution, Status, DEFAULT_ADDRESS,
};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- I2C bus (GP20 = SDA, GP21 = SCL) ---
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, i2c::Config::default());

    // --- Gyroscope ---
    let mut gyro = L3g4200d::new(i2c);

    if let Err(e) = gyro.init(DEFAULT_ADDRESS) {
        error!("Gyroscope init failed: {}", e);
    }
    if gyro.status() == Status::Error {
        // Nothing useful to do without the sensor.
        loop {
            Timer::after(Duration::from_millis(1000)).await;
        }
    }

    let config = GyroConfig {
        data_rate: DataRate::Hz200,
        resolution: Resolution::Dps500,
        ..GyroConfig::default()
    };
    if let Err(e) = gyro.apply_config(&config) {
        error!("Failed to configure gyroscope: {}", e);
    }

    // One log record per register: 0xNN: bbbbbbbb
    let dump = gyro.for_each_register(|register, value| {
        info!("{=u8:#04x}: {=u8:08b}", register, value);
    });
    if let Err(e) = dump {
        error!("Register dump failed: {}", e);
    }

    info!("Gyroscope example started, rotate the board to see rate changes");

    // Main loop: poll the data ready flag, read, log, repeat.
    loop {
        match gyro.data_status() {
            Ok(status) if status.contains(DataStatus::ZYXDA) => match gyro.read_angular_rate() {
                Ok(rate) => info!("Rate: [{}, {}, {}]", rate.x, rate.y, rate.z),
                Err(e) => error!("Read failed: {}", e),
            },
            Ok(_) => {}
            Err(e) => error!("Status read failed: {}", e),
        }

        Timer::after(Duration::from_millis(5)).await;
    }
}
