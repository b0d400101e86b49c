//! Pinning tests for preserved reference-driver quirks
//!
//! These lock in two deliberate oddities (DESIGN.md OQ-1 and OQ-2) so any
//! future "fix" shows up as a test change, not a silent behavior change.

use crate::common::{create_mock_driver, Operation};
use max30102::{LedCurrent, PulseWidth, SampleRate};

#[test]
fn test_set_led_drive_preserves_upper_six_bits() {
    let (mut driver, interface) = create_mock_driver();

    for (pw, value) in [
        (PulseWidth::Us200, 0b00),
        (PulseWidth::Us400, 0b01),
        (PulseWidth::Us800, 0b10),
        (PulseWidth::Us1600, 0b11),
    ] {
        interface.set_register(0x0A, 0xA4);
        driver
            .set_led_drive(pw, LedCurrent::Ma4_4, LedCurrent::Ma4_4)
            .unwrap();
        assert_eq!(interface.get_register(0x0A), 0xA4 | value);
    }
}

#[test]
fn test_set_led_drive_never_writes_amplitude_registers() {
    // OQ-1: the red/IR current parameters are dead; LED1_PA/LED2_PA keep
    // their configured values
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x0C, 0x24);
    interface.set_register(0x0D, 0x24);
    interface.clear_operations();

    driver
        .set_led_drive(PulseWidth::Us1600, LedCurrent::Ma50_0, LedCurrent::Off)
        .unwrap();

    assert_eq!(interface.get_register(0x0C), 0x24);
    assert_eq!(interface.get_register(0x0D), 0x24);
    assert!(interface.writes_to(0x0C).is_empty());
    assert!(interface.writes_to(0x0D).is_empty());
}

#[test]
fn test_set_sample_rate_field_write_preserves_other_bits() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x0A, 0xA3);
    driver.set_sample_rate(SampleRate::Sps400).unwrap();

    // First write: only bits 2-4 replaced (0xA3 with SR=4 -> 0xB3)
    let spo2_writes = interface.writes_to(0x0A);
    assert_eq!(spo2_writes[0], 0xB3);
}

#[test]
fn test_set_sample_rate_mode_fixup_targets_spo2_config() {
    // OQ-2: the masked mode bits are written back to the SPO2_CONFIG
    // address, clobbering the sample-rate field just written
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x09, 0x47);
    interface.set_register(0x0A, 0x00);
    interface.clear_operations();

    driver.set_sample_rate(SampleRate::Sps100).unwrap();

    let spo2_writes = interface.writes_to(0x0A);
    assert_eq!(spo2_writes, vec![0x04, (0x47 & 0xF8) | 0x03]);

    // The mode register is read but never written
    assert!(interface.writes_to(0x09).is_empty());
    assert_eq!(interface.get_register(0x09), 0x47);
    assert_eq!(interface.get_register(0x0A), 0x43);
    assert!(interface
        .operations()
        .iter()
        .any(|op| matches!(op, Operation::ReadRegister { address: 0x09, .. })));
}
