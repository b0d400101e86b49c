//! High-level driver API for the MAX30102
//!
//! This module wraps the register map with the operations a host actually
//! performs: one-shot configuration, FIFO draining, power-state control,
//! die temperature, and identification. Every operation is one or more
//! blocking bus transactions; nothing here retries, times out, or waits on
//! the interrupt line. All device state lives in hardware and is queried on
//! demand; the driver itself only remembers the last decoded sample.

use crate::fifo::{self, Sample, SAMPLE_BYTES};
use crate::interrupt::InterruptStatus;
use crate::led::LedCurrent;
use crate::registers::Max30102 as RegisterDevice;
use crate::spo2::{PulseWidth, SampleRate};
use crate::{Error, PART_ID_VALUE};

use core::fmt;

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

#[cfg(feature = "async")]
use device_driver::AsyncRegisterInterface;

/// LED pulse amplitude written by `configure` (~7.2 mA)
///
/// The reference initialization uses this fixed value for both channels;
/// callers that need a different drive level write the amplitude registers
/// through [`Max30102Driver::device`].
pub const DEFAULT_LED_AMPLITUDE: u8 = 0x24;

/// Register dump order: name and address, as emitted by `dump_registers`
///
/// The order matches the reference diagnostic dump, including its placement
/// of INT_ENABLE_1 after the FIFO write pointer and its omission of
/// INT_ENABLE_2.
const REGISTER_DUMP: &[(&str, u8)] = &[
    ("INT_STATUS_1", 0x00),
    ("INT_STATUS_2", 0x01),
    ("FIFO_WR_PTR", 0x04),
    ("INT_ENABLE_1", 0x02),
    ("OVF_COUNTER", 0x05),
    ("FIFO_RD_PTR", 0x06),
    ("FIFO_DATA", 0x07),
    ("FIFO_CONFIG", 0x08),
    ("MODE_CONFIG", 0x09),
    ("SPO2_CONFIG", 0x0A),
    ("LED1_PA", 0x0C),
    ("LED2_PA", 0x0D),
    ("PILOT_PA", 0x10),
    ("MULTI_LED_CTRL_1", 0x11),
    ("MULTI_LED_CTRL_2", 0x12),
    ("TEMP_INT", 0x1F),
    ("TEMP_FRAC", 0x20),
    ("DIE_TEMP_CONFIG", 0x21),
    ("PROX_INT_THRESH", 0x30),
    ("REV_ID", 0xFE),
    ("PART_ID", 0xFF),
];

/// Die temperature reading
///
/// The integer part is two's complement whole degrees; the fraction adds
/// 0.0625 degC per LSB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DieTemperature {
    /// Whole degrees Celsius (-128 to 127)
    pub integer: i8,
    /// Fractional part in 0.0625 degC steps (0-15)
    pub fraction: u8,
}

impl DieTemperature {
    /// Temperature in degrees Celsius
    #[must_use]
    pub fn celsius(&self) -> f32 {
        f32::from(self.integer) + f32::from(self.fraction) * 0.0625
    }
}

/// Main driver for the MAX30102
pub struct Max30102Driver<I> {
    device: RegisterDevice<I>,
    last_sample: Sample,
}

impl<I> Max30102Driver<I> {
    /// Create a new MAX30102 driver instance
    ///
    /// Construction performs no bus traffic: the part has no address pins
    /// and the bus is assumed to be initialized by the caller's environment.
    /// Call [`configure`](Self::configure) to initialize the device, or
    /// [`check_part_id`](Self::check_part_id) first to confirm something is
    /// actually answering.
    pub fn new(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            last_sample: Sample::default(),
        }
    }

    /// The most recently decoded FIFO sample
    ///
    /// Overwritten by every [`read_sample`](Self::read_sample); all zeros
    /// before the first read.
    pub const fn last_sample(&self) -> Sample {
        self.last_sample
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }
}

#[cfg(not(feature = "async"))]
impl<I> Max30102Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Initialize the device for SpO2 operation
    ///
    /// Enables the FIFO-almost-full and new-sample interrupts, zeroes the
    /// FIFO write pointer, overflow counter, and read pointer (in that
    /// order), clears the FIFO configuration, selects SpO2 mode, programs
    /// the pulse width and sample rate, and sets both LED amplitudes to
    /// [`DEFAULT_LED_AMPLITUDE`].
    ///
    /// `led_current` is accepted but not applied: the reference driver
    /// leaves the amplitude registers at the fixed default, and deployed
    /// boards are tuned against it. See DESIGN.md (OQ-1).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure(
        &mut self,
        pulse_width: PulseWidth,
        led_current: LedCurrent,
        sample_rate: SampleRate,
    ) -> Result<(), Error<I::Error>> {
        let _ = led_current;

        self.device.int_enable_1().write(|w| {
            w.set_a_full_en(true);
            w.set_ppg_rdy_en(true);
        })?;
        self.device.int_enable_2().write(|w| {
            w.set_die_temp_rdy_en(false);
        })?;

        // FIFO pointer reset: write pointer, overflow counter, read pointer
        self.device.fifo_wr_ptr().write(|w| {
            w.set_fifo_wr_ptr(0);
        })?;
        self.device.ovf_counter().write(|w| {
            w.set_ovf_counter(0);
        })?;
        self.device.fifo_rd_ptr().write(|w| {
            w.set_fifo_rd_ptr(0);
        })?;

        self.device.fifo_config().write(|w| {
            w.set_fifo_a_full(0);
            w.set_fifo_roll_over_en(false);
            w.set_smp_ave(0);
        })?;
        self.device.mode_config().write(|w| {
            w.set_mode(0x03);
        })?;
        self.device.spo_2_config().write(|w| {
            w.set_led_pw(pulse_width.register_value());
            w.set_spo_2_sr(sample_rate.register_value());
        })?;

        self.device.led_1_pa().write(|w| {
            w.set_led_1_pa(DEFAULT_LED_AMPLITUDE);
        })?;
        self.device.led_2_pa().write(|w| {
            w.set_led_2_pa(DEFAULT_LED_AMPLITUDE);
        })?;

        Ok(())
    }

    /// Set the LED pulse width
    ///
    /// Read-modify-write of SPO2_CONFIG bits 0-1; the sample rate and ADC
    /// range bits are untouched.
    ///
    /// The `red` and `ir` drive currents are accepted but never written:
    /// the pulse-amplitude registers keep their configured values, matching
    /// the vendor reference driver. See DESIGN.md (OQ-1) before changing.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_led_drive(
        &mut self,
        pulse_width: PulseWidth,
        red: LedCurrent,
        ir: LedCurrent,
    ) -> Result<(), Error<I::Error>> {
        let _ = (red, ir);

        self.device.spo_2_config().modify(|w| {
            w.set_led_pw(pulse_width.register_value());
        })?;
        Ok(())
    }

    /// Set the SpO2 sample rate
    ///
    /// Read-modify-write of SPO2_CONFIG bits 2-4, followed by the reference
    /// driver's mode fix-up: MODE_CONFIG is read, its low three bits are
    /// replaced with SpO2 mode, and the result is written back to the
    /// SPO2_CONFIG address. That second write targets the SpO2 configuration
    /// register, not the mode register, and therefore clobbers the
    /// sample-rate field just written. Preserved byte-for-byte; see
    /// DESIGN.md (OQ-2) before changing.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sample_rate(&mut self, rate: SampleRate) -> Result<(), Error<I::Error>> {
        const MODE_CONFIG: u8 = 0x09;
        const SPO2_CONFIG: u8 = 0x0A;

        self.device.spo_2_config().modify(|w| {
            w.set_spo_2_sr(rate.register_value());
        })?;

        let mut mode = [0u8; 1];
        self.device
            .interface
            .read_register(MODE_CONFIG, 8, &mut mode)?;
        self.device
            .interface
            .write_register(SPO2_CONFIG, 8, &[(mode[0] & 0xF8) | 0x03])?;
        Ok(())
    }

    /// Number of unread samples in the FIFO
    ///
    /// Reads the write and read pointers and returns
    /// `|16 + wr - rd| mod 16`. The overflow counter is not consulted; a
    /// FIFO that wrapped a full lap reports zero here and the loss shows up
    /// in OVF_COUNTER instead.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_available_samples(&mut self) -> Result<u8, Error<I::Error>> {
        let wr_ptr = self.device.fifo_wr_ptr().read()?.fifo_wr_ptr();
        let rd_ptr = self.device.fifo_rd_ptr().read()?.fifo_rd_ptr();
        Ok(fifo::available_samples(wr_ptr, rd_ptr))
    }

    /// Read one sample from the FIFO
    ///
    /// Performs a single 6-byte burst from FIFO_DATA (the device advances
    /// its internal pointer) and decodes the two 18-bit channels. The result
    /// overwrites [`last_sample`](Self::last_sample).
    ///
    /// No check is made against
    /// [`fifo_available_samples`](Self::fifo_available_samples); reading an
    /// empty FIFO returns whatever stale bytes the device serves.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_sample(&mut self) -> Result<Sample, Error<I::Error>> {
        const FIFO_DATA: u8 = 0x07;

        let mut buffer = [0u8; SAMPLE_BYTES];
        self.device
            .interface
            .read_register(FIFO_DATA, 48, &mut buffer)?;

        let sample = Sample::from_bytes(&buffer);
        self.last_sample = sample;
        Ok(sample)
    }

    /// Enter power-save shutdown (MODE_CONFIG bit 7)
    ///
    /// Register contents are retained while shut down.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn shutdown(&mut self) -> Result<(), Error<I::Error>> {
        self.device.mode_config().modify(|w| {
            w.set_shdn(true);
        })?;
        Ok(())
    }

    /// Leave power-save shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn wake(&mut self) -> Result<(), Error<I::Error>> {
        self.device.mode_config().modify(|w| {
            w.set_shdn(false);
        })?;
        Ok(())
    }

    /// Trigger a soft reset (MODE_CONFIG bit 6)
    ///
    /// The bit self-clears in hardware when the reset completes; this
    /// method does not wait for or verify completion.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset(&mut self) -> Result<(), Error<I::Error>> {
        self.device.mode_config().modify(|w| {
            w.set_reset(true);
        })?;
        Ok(())
    }

    /// Read the die revision (REV_ID register)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn revision_id(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.rev_id().read()?;
        Ok(reg.rev_id())
    }

    /// Read the part identifier (PART_ID register)
    ///
    /// Should return 0x15 for a MAX30102.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn part_id(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.part_id().read()?;
        Ok(reg.part_id())
    }

    /// Verify the part identifier
    ///
    /// Opt-in identity check: a bare bus (pull-ups floating high) or a
    /// different device at 0x57 otherwise yields silently wrong sample
    /// data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] with the actual value if PART_ID is
    /// not 0x15, or a bus error if communication fails.
    pub fn check_part_id(&mut self) -> Result<(), Error<I::Error>> {
        let part_id = self.part_id()?;
        if part_id != PART_ID_VALUE {
            return Err(Error::InvalidDevice(part_id));
        }
        Ok(())
    }

    /// Read and decode both interrupt status registers
    ///
    /// One 2-byte burst starting at INT_STATUS_1. Reading clears the flags
    /// in hardware.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        const INT_STATUS_1: u8 = 0x00;

        let mut buffer = [0u8; 2];
        self.device
            .interface
            .read_register(INT_STATUS_1, 16, &mut buffer)?;
        Ok(InterruptStatus::from_bytes(buffer[0], buffer[1]))
    }

    /// Trigger a die temperature conversion and read the result
    ///
    /// The conversion takes about 29 ms on silicon; this method does not
    /// wait. Poll [`interrupt_status`](Self::interrupt_status) for
    /// `die_temp_ready` (with DIE_TEMP_RDY enabled) or delay before
    /// trusting the value, otherwise the previous conversion is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature(&mut self) -> Result<DieTemperature, Error<I::Error>> {
        self.device.die_temp_config().write(|w| {
            w.set_temp_en(true);
        })?;

        let integer = self.device.temp_int().read()?.temp_int();
        let fraction = self.device.temp_frac().read()?.temp_frac();
        Ok(DieTemperature {
            integer: integer as i8,
            fraction,
        })
    }

    /// Dump every known register to a diagnostic sink, one line per
    /// register in binary form
    ///
    /// Debug aid, not part of the functional contract. The order is fixed
    /// and matches the reference diagnostic dump; sink errors are ignored,
    /// so a full sink truncates the dump. This reads INT_STATUS_1/2, which
    /// clears pending interrupt flags, and consumes one byte of FIFO data.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn dump_registers<W: fmt::Write>(&mut self, out: &mut W) -> Result<(), Error<I::Error>> {
        for &(name, address) in REGISTER_DUMP {
            let mut buffer = [0u8; 1];
            self.device.interface.read_register(address, 8, &mut buffer)?;
            writeln!(out, "{name}: {:#010b}", buffer[0]).ok();
        }
        Ok(())
    }
}

#[cfg(feature = "async")]
impl<I> Max30102Driver<I>
where
    I: AsyncRegisterInterface<AddressType = u8>,
{
    /// Initialize the device for SpO2 operation
    ///
    /// Async variant of the blocking `configure`; see the crate docs for
    /// the full write sequence and the OQ-1 note on `led_current`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure(
        &mut self,
        pulse_width: PulseWidth,
        led_current: LedCurrent,
        sample_rate: SampleRate,
    ) -> Result<(), Error<I::Error>> {
        let _ = led_current;

        self.device
            .int_enable_1()
            .write_async(|w| {
                w.set_a_full_en(true);
                w.set_ppg_rdy_en(true);
            })
            .await?;
        self.device
            .int_enable_2()
            .write_async(|w| {
                w.set_die_temp_rdy_en(false);
            })
            .await?;

        // FIFO pointer reset: write pointer, overflow counter, read pointer
        self.device
            .fifo_wr_ptr()
            .write_async(|w| {
                w.set_fifo_wr_ptr(0);
            })
            .await?;
        self.device
            .ovf_counter()
            .write_async(|w| {
                w.set_ovf_counter(0);
            })
            .await?;
        self.device
            .fifo_rd_ptr()
            .write_async(|w| {
                w.set_fifo_rd_ptr(0);
            })
            .await?;

        self.device
            .fifo_config()
            .write_async(|w| {
                w.set_fifo_a_full(0);
                w.set_fifo_roll_over_en(false);
                w.set_smp_ave(0);
            })
            .await?;
        self.device
            .mode_config()
            .write_async(|w| {
                w.set_mode(0x03);
            })
            .await?;
        self.device
            .spo_2_config()
            .write_async(|w| {
                w.set_led_pw(pulse_width.register_value());
                w.set_spo_2_sr(sample_rate.register_value());
            })
            .await?;

        self.device
            .led_1_pa()
            .write_async(|w| {
                w.set_led_1_pa(DEFAULT_LED_AMPLITUDE);
            })
            .await?;
        self.device
            .led_2_pa()
            .write_async(|w| {
                w.set_led_2_pa(DEFAULT_LED_AMPLITUDE);
            })
            .await?;

        Ok(())
    }

    /// Set the LED pulse width (SPO2_CONFIG bits 0-1)
    ///
    /// The `red` and `ir` currents are accepted but never written; see the
    /// blocking variant and DESIGN.md (OQ-1).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_led_drive(
        &mut self,
        pulse_width: PulseWidth,
        red: LedCurrent,
        ir: LedCurrent,
    ) -> Result<(), Error<I::Error>> {
        let _ = (red, ir);

        self.device
            .spo_2_config()
            .modify_async(|w| {
                w.set_led_pw(pulse_width.register_value());
            })
            .await?;
        Ok(())
    }

    /// Set the SpO2 sample rate (SPO2_CONFIG bits 2-4)
    ///
    /// Carries the same mode fix-up quirk as the blocking variant: the
    /// masked MODE_CONFIG byte is written back to the SPO2_CONFIG address.
    /// See DESIGN.md (OQ-2).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_sample_rate(&mut self, rate: SampleRate) -> Result<(), Error<I::Error>> {
        const MODE_CONFIG: u8 = 0x09;
        const SPO2_CONFIG: u8 = 0x0A;

        self.device
            .spo_2_config()
            .modify_async(|w| {
                w.set_spo_2_sr(rate.register_value());
            })
            .await?;

        let mut mode = [0u8; 1];
        self.device
            .interface
            .read_register(MODE_CONFIG, 8, &mut mode)
            .await?;
        self.device
            .interface
            .write_register(SPO2_CONFIG, 8, &[(mode[0] & 0xF8) | 0x03])
            .await?;
        Ok(())
    }

    /// Number of unread samples in the FIFO: `|16 + wr - rd| mod 16`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn fifo_available_samples(&mut self) -> Result<u8, Error<I::Error>> {
        let wr_ptr = self.device.fifo_wr_ptr().read_async().await?.fifo_wr_ptr();
        let rd_ptr = self.device.fifo_rd_ptr().read_async().await?.fifo_rd_ptr();
        Ok(fifo::available_samples(wr_ptr, rd_ptr))
    }

    /// Read one sample from the FIFO (6-byte burst, no bounds check)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_sample(&mut self) -> Result<Sample, Error<I::Error>> {
        const FIFO_DATA: u8 = 0x07;

        let mut buffer = [0u8; SAMPLE_BYTES];
        self.device
            .interface
            .read_register(FIFO_DATA, 48, &mut buffer)
            .await?;

        let sample = Sample::from_bytes(&buffer);
        self.last_sample = sample;
        Ok(sample)
    }

    /// Enter power-save shutdown (MODE_CONFIG bit 7)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn shutdown(&mut self) -> Result<(), Error<I::Error>> {
        self.device
            .mode_config()
            .modify_async(|w| {
                w.set_shdn(true);
            })
            .await?;
        Ok(())
    }

    /// Leave power-save shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn wake(&mut self) -> Result<(), Error<I::Error>> {
        self.device
            .mode_config()
            .modify_async(|w| {
                w.set_shdn(false);
            })
            .await?;
        Ok(())
    }

    /// Trigger a soft reset (MODE_CONFIG bit 6); does not wait for completion
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn reset(&mut self) -> Result<(), Error<I::Error>> {
        self.device
            .mode_config()
            .modify_async(|w| {
                w.set_reset(true);
            })
            .await?;
        Ok(())
    }

    /// Read the die revision (REV_ID register)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn revision_id(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.rev_id().read_async().await?;
        Ok(reg.rev_id())
    }

    /// Read the part identifier (PART_ID register, expected 0x15)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn part_id(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.part_id().read_async().await?;
        Ok(reg.part_id())
    }

    /// Verify the part identifier
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] with the actual value if PART_ID is
    /// not 0x15, or a bus error if communication fails.
    pub async fn check_part_id(&mut self) -> Result<(), Error<I::Error>> {
        let part_id = self.part_id().await?;
        if part_id != PART_ID_VALUE {
            return Err(Error::InvalidDevice(part_id));
        }
        Ok(())
    }

    /// Read and decode both interrupt status registers (clears the flags)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        const INT_STATUS_1: u8 = 0x00;

        let mut buffer = [0u8; 2];
        self.device
            .interface
            .read_register(INT_STATUS_1, 16, &mut buffer)
            .await?;
        Ok(InterruptStatus::from_bytes(buffer[0], buffer[1]))
    }

    /// Trigger a die temperature conversion and read the result
    ///
    /// Does not wait for the ~29 ms conversion; see the blocking variant.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_temperature(&mut self) -> Result<DieTemperature, Error<I::Error>> {
        self.device
            .die_temp_config()
            .write_async(|w| {
                w.set_temp_en(true);
            })
            .await?;

        let integer = self.device.temp_int().read_async().await?.temp_int();
        let fraction = self.device.temp_frac().read_async().await?.temp_frac();
        Ok(DieTemperature {
            integer: integer as i8,
            fraction,
        })
    }

    /// Dump every known register to a diagnostic sink in the fixed order
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn dump_registers<W: fmt::Write>(
        &mut self,
        out: &mut W,
    ) -> Result<(), Error<I::Error>> {
        for &(name, address) in REGISTER_DUMP {
            let mut buffer = [0u8; 1];
            self.device
                .interface
                .read_register(address, 8, &mut buffer)
                .await?;
            writeln!(out, "{name}: {:#010b}", buffer[0]).ok();
        }
        Ok(())
    }
}
