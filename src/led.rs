//! LED drive current steps
//!
//! The MAX30102 drives its red and IR LEDs from 8-bit pulse-amplitude
//! registers in ~0.2 mA steps. This enum names the coarse datasheet steps
//! the reference tooling uses.

/// LED drive current
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedCurrent {
    /// LED off
    Off = 0,
    /// 4.4 mA
    Ma4_4 = 1,
    /// 7.6 mA
    Ma7_6 = 2,
    /// 11.0 mA
    Ma11_0 = 3,
    /// 14.2 mA
    Ma14_2 = 4,
    /// 17.4 mA
    Ma17_4 = 5,
    /// 20.8 mA
    Ma20_8 = 6,
    /// 27.1 mA
    Ma27_1 = 7,
    /// 30.6 mA
    Ma30_6 = 8,
    /// 33.8 mA
    Ma33_8 = 9,
    /// 37.0 mA
    Ma37_0 = 10,
    /// 40.2 mA
    Ma40_2 = 11,
    /// 43.6 mA
    Ma43_6 = 12,
    /// 46.8 mA
    Ma46_8 = 13,
    /// 50.0 mA
    Ma50_0 = 14,
}

impl LedCurrent {
    /// Nominal drive current in milliamperes
    pub const fn milliamps(self) -> f32 {
        match self {
            Self::Off => 0.0,
            Self::Ma4_4 => 4.4,
            Self::Ma7_6 => 7.6,
            Self::Ma11_0 => 11.0,
            Self::Ma14_2 => 14.2,
            Self::Ma17_4 => 17.4,
            Self::Ma20_8 => 20.8,
            Self::Ma27_1 => 27.1,
            Self::Ma30_6 => 30.6,
            Self::Ma33_8 => 33.8,
            Self::Ma37_0 => 37.0,
            Self::Ma40_2 => 40.2,
            Self::Ma43_6 => 43.6,
            Self::Ma46_8 => 46.8,
            Self::Ma50_0 => 50.0,
        }
    }

    /// Step index as used by the reference tooling
    pub const fn register_value(self) -> u8 {
        self as u8
    }
}

impl Default for LedCurrent {
    fn default() -> Self {
        Self::Ma50_0
    }
}
