//! Interrupt status decoding
//!
//! `configure` enables the FIFO-almost-full and new-sample interrupts, but
//! the driver itself never waits on the interrupt line; wiring and reacting
//! to it is the caller's job. [`InterruptStatus`] is the polling
//! counterpart: a decoded snapshot of the two status registers. Reading the
//! status registers clears the flags in hardware.

/// Decoded snapshot of INT_STATUS_1 and INT_STATUS_2
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptStatus {
    /// FIFO almost full
    pub a_full: bool,
    /// New PPG sample ready
    pub ppg_ready: bool,
    /// Ambient light cancellation overflow
    pub alc_overflow: bool,
    /// Power ready after brownout
    pub power_ready: bool,
    /// Die temperature conversion complete
    pub die_temp_ready: bool,
}

impl InterruptStatus {
    /// Decode the raw status register pair
    pub const fn from_bytes(status_1: u8, status_2: u8) -> Self {
        Self {
            a_full: status_1 & 0x80 != 0,
            ppg_ready: status_1 & 0x40 != 0,
            alc_overflow: status_1 & 0x20 != 0,
            power_ready: status_1 & 0x01 != 0,
            die_temp_ready: status_2 & 0x02 != 0,
        }
    }

    /// Check if any interrupt source is flagged
    pub const fn any(&self) -> bool {
        self.a_full || self.ppg_ready || self.alc_overflow || self.power_ready || self.die_temp_ready
    }
}
