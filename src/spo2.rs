//! SpO2 configuration: LED pulse width and sample rate
//!
//! Both settings live as sub-fields of the SPO2_CONFIG register: the pulse
//! width in bits 0-1 and the sample rate in bits 2-4. The driver always
//! writes them read-modify-write so the remaining bits are untouched.

/// LED pulse width
///
/// Longer pulses integrate more light per sample; the ADC resolution grows
/// with the pulse width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseWidth {
    /// 200 us pulse
    Us200 = 0,
    /// 400 us pulse
    Us400 = 1,
    /// 800 us pulse
    Us800 = 2,
    /// 1600 us pulse
    Us1600 = 3,
}

impl PulseWidth {
    /// Pulse duration in microseconds
    pub const fn microseconds(self) -> u16 {
        match self {
            Self::Us200 => 200,
            Self::Us400 => 400,
            Self::Us800 => 800,
            Self::Us1600 => 1600,
        }
    }

    /// Register value for the LED_PW field (SPO2_CONFIG bits 0-1)
    pub const fn register_value(self) -> u8 {
        self as u8
    }
}

impl Default for PulseWidth {
    fn default() -> Self {
        Self::Us1600
    }
}

/// SpO2 sample rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleRate {
    /// 50 samples per second
    Sps50 = 0,
    /// 100 samples per second
    Sps100 = 1,
    /// 167 samples per second
    Sps167 = 2,
    /// 200 samples per second
    Sps200 = 3,
    /// 400 samples per second
    Sps400 = 4,
    /// 600 samples per second
    Sps600 = 5,
    /// 800 samples per second
    Sps800 = 6,
    /// 1000 samples per second
    Sps1000 = 7,
}

impl SampleRate {
    /// Sample rate in samples per second
    pub const fn samples_per_sec(self) -> u16 {
        match self {
            Self::Sps50 => 50,
            Self::Sps100 => 100,
            Self::Sps167 => 167,
            Self::Sps200 => 200,
            Self::Sps400 => 400,
            Self::Sps600 => 600,
            Self::Sps800 => 800,
            Self::Sps1000 => 1000,
        }
    }

    /// Register value for the SPO2_SR field (SPO2_CONFIG bits 2-4)
    pub const fn register_value(self) -> u8 {
        self as u8
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::Sps100
    }
}
