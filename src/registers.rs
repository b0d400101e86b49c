//! Register definitions for the MAX30102
//!
//! The MAX30102 exposes a single flat register space at I2C address 0x57.
//! All registers are one byte wide. The FIFO read/write pointers and the
//! overflow counter are 4-bit wraparound counters over the 16-slot sample
//! FIFO; their upper bits read as zero.

device_driver::create_device!(
    device_name: Max30102,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// INT_STATUS_1 - Interrupt Status 1 (0x00)
        /// Flags clear on read.
        register IntStatus1 {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;

            /// Power ready after brownout
            pwr_rdy: bool = 0,
            reserved_4_1: uint = 1..5,
            /// Ambient light cancellation overflow
            alc_ovf: bool = 5,
            /// New PPG data sample ready
            ppg_rdy: bool = 6,
            /// FIFO almost full
            a_full: bool = 7,
        },

        /// INT_STATUS_2 - Interrupt Status 2 (0x01)
        register IntStatus2 {
            const ADDRESS = 0x01;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// Die temperature conversion complete
            die_temp_rdy: bool = 1,
            reserved_7_2: uint = 2..8,
        },

        /// INT_ENABLE_1 - Interrupt Enable 1 (0x02)
        register IntEnable1 {
            const ADDRESS = 0x02;
            const SIZE_BITS = 8;

            reserved_4_0: uint = 0..5,
            /// Ambient light cancellation overflow interrupt enable
            alc_ovf_en: bool = 5,
            /// New PPG data interrupt enable
            ppg_rdy_en: bool = 6,
            /// FIFO almost full interrupt enable
            a_full_en: bool = 7,
        },

        /// INT_ENABLE_2 - Interrupt Enable 2 (0x03)
        register IntEnable2 {
            const ADDRESS = 0x03;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// Die temperature conversion complete interrupt enable
            die_temp_rdy_en: bool = 1,
            reserved_7_2: uint = 2..8,
        },

        /// FIFO_WR_PTR - FIFO Write Pointer (0x04)
        register FifoWrPtr {
            const ADDRESS = 0x04;
            const SIZE_BITS = 8;

            /// Next FIFO slot the device will write (0-15, wraps)
            fifo_wr_ptr: uint = 0..4,
            reserved_7_4: uint = 4..8,
        },

        /// OVF_COUNTER - FIFO Overflow Counter (0x05)
        register OvfCounter {
            const ADDRESS = 0x05;
            const SIZE_BITS = 8;

            /// Number of samples lost to FIFO overflow (saturates at 15)
            ovf_counter: uint = 0..4,
            reserved_7_4: uint = 4..8,
        },

        /// FIFO_RD_PTR - FIFO Read Pointer (0x06)
        register FifoRdPtr {
            const ADDRESS = 0x06;
            const SIZE_BITS = 8;

            /// Next FIFO slot a burst read will return (0-15, wraps)
            fifo_rd_ptr: uint = 0..4,
            reserved_7_4: uint = 4..8,
        },

        /// FIFO_DATA - FIFO Data Register (0x07)
        /// Burst reads from this address drain consecutive sample bytes;
        /// the device advances its internal pointer, not the bus address.
        register FifoData {
            const ADDRESS = 0x07;
            const SIZE_BITS = 8;

            /// Next FIFO byte
            fifo_data: uint = 0..8,
        },

        /// FIFO_CONFIG - FIFO Configuration (0x08)
        register FifoConfig {
            const ADDRESS = 0x08;
            const SIZE_BITS = 8;

            /// Free slots remaining when the A_FULL interrupt fires
            fifo_a_full: uint = 0..4,
            /// Overwrite oldest samples when the FIFO is full
            fifo_roll_over_en: bool = 4,
            /// On-chip sample averaging (2^n samples per FIFO entry)
            smp_ave: uint = 5..8,
        },

        /// MODE_CONFIG - Mode Configuration (0x09)
        register ModeConfig {
            const ADDRESS = 0x09;
            const SIZE_BITS = 8;

            /// Operating mode (0x02 = heart rate, 0x03 = SpO2, 0x07 = multi-LED)
            mode: uint = 0..3,
            reserved_5_3: uint = 3..6,
            /// Soft reset; self-clears when the reset completes
            reset: bool = 6,
            /// Power-save shutdown; register contents are retained
            shdn: bool = 7,
        },

        /// SPO2_CONFIG - SpO2 Configuration (0x0A)
        register Spo2Config {
            const ADDRESS = 0x0A;
            const SIZE_BITS = 8;

            /// LED pulse width (also sets ADC resolution)
            led_pw: uint = 0..2,
            /// SpO2 sample rate
            spo2_sr: uint = 2..5,
            /// ADC full-scale range
            spo2_adc_rge: uint = 5..7,
            reserved_7: uint = 7..8,
        },

        /// LED1_PA - Red LED Pulse Amplitude (0x0C), ~0.2 mA per LSB
        register Led1Pa {
            const ADDRESS = 0x0C;
            const SIZE_BITS = 8;

            /// Red LED drive current
            led1_pa: uint = 0..8,
        },

        /// LED2_PA - IR LED Pulse Amplitude (0x0D), ~0.2 mA per LSB
        register Led2Pa {
            const ADDRESS = 0x0D;
            const SIZE_BITS = 8;

            /// IR LED drive current
            led2_pa: uint = 0..8,
        },

        /// PILOT_PA - Proximity Mode LED Pulse Amplitude (0x10)
        register PilotPa {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;

            /// Pilot LED drive current
            pilot_pa: uint = 0..8,
        },

        /// MULTI_LED_CTRL_1 - Multi-LED Mode Control, slots 1-2 (0x11)
        register MultiLedCtrl1 {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;

            /// LED source for time slot 1
            slot1: uint = 0..3,
            reserved_3: uint = 3..4,
            /// LED source for time slot 2
            slot2: uint = 4..7,
            reserved_7: uint = 7..8,
        },

        /// MULTI_LED_CTRL_2 - Multi-LED Mode Control, slots 3-4 (0x12)
        register MultiLedCtrl2 {
            const ADDRESS = 0x12;
            const SIZE_BITS = 8;

            /// LED source for time slot 3
            slot3: uint = 0..3,
            reserved_3: uint = 3..4,
            /// LED source for time slot 4
            slot4: uint = 4..7,
            reserved_7: uint = 7..8,
        },

        /// TEMP_INT - Die Temperature Integer (0x1F)
        /// Two's complement whole degrees Celsius.
        register TempInt {
            const ADDRESS = 0x1F;
            const SIZE_BITS = 8;

            /// Integer temperature
            temp_int: uint = 0..8,
        },

        /// TEMP_FRAC - Die Temperature Fraction (0x20), 0.0625 degC per LSB
        register TempFrac {
            const ADDRESS = 0x20;
            const SIZE_BITS = 8;

            /// Fractional temperature
            temp_frac: uint = 0..4,
            reserved_7_4: uint = 4..8,
        },

        /// DIE_TEMP_CONFIG - Die Temperature Configuration (0x21)
        register DieTempConfig {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;

            /// Start a single temperature conversion; self-clears
            temp_en: bool = 0,
            reserved_7_1: uint = 1..8,
        },

        /// PROX_INT_THRESH - Proximity Interrupt Threshold (0x30)
        register ProxIntThresh {
            const ADDRESS = 0x30;
            const SIZE_BITS = 8;

            /// Proximity mode interrupt threshold
            prox_int_thresh: uint = 0..8,
        },

        /// REV_ID - Revision ID (0xFE)
        register RevId {
            const ADDRESS = 0xFE;
            const SIZE_BITS = 8;

            /// Die revision
            rev_id: uint = 0..8,
        },

        /// PART_ID - Part ID (0xFF)
        /// Expected value: 0x15
        register PartId {
            const ADDRESS = 0xFF;
            const SIZE_BITS = 8;

            /// Part identifier (should read 0x15)
            part_id: uint = 0..8,
        },
    }
);
