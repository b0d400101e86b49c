#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod registers;

pub mod fifo;
pub mod interrupt;
pub mod led;
pub mod spo2;

// Re-export main types
pub use device::{DieTemperature, Max30102Driver};
pub use fifo::{Sample, FIFO_DEPTH, SAMPLE_BYTES};
pub use interface::I2cInterface;
pub use interrupt::InterruptStatus;
pub use led::LedCurrent;
pub use spo2::{PulseWidth, SampleRate};

/// MAX30102 7-bit I2C address (fixed, the part has no address pins)
pub const I2C_ADDRESS: u8 = 0x57;

/// Expected value of the `PART_ID` register
pub const PART_ID_VALUE: u8 = 0x15;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Unexpected `PART_ID` register value (contains the actual value read)
    InvalidDevice(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
