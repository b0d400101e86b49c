//! Unit tests for the one-shot configuration sequence

use crate::common::{create_mock_driver, Operation};
use max30102::{LedCurrent, PulseWidth, SampleRate};

#[test]
fn test_configure_register_values() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .configure(
            PulseWidth::default(),
            LedCurrent::default(),
            SampleRate::default(),
        )
        .unwrap();

    assert_eq!(interface.get_register(0x02), 0xC0, "INT_ENABLE_1");
    assert_eq!(interface.get_register(0x03), 0x00, "INT_ENABLE_2");
    assert_eq!(interface.get_register(0x04), 0x00, "FIFO_WR_PTR");
    assert_eq!(interface.get_register(0x05), 0x00, "OVF_COUNTER");
    assert_eq!(interface.get_register(0x06), 0x00, "FIFO_RD_PTR");
    assert_eq!(interface.get_register(0x08), 0x00, "FIFO_CONFIG");
    assert_eq!(interface.get_register(0x09), 0x03, "MODE_CONFIG");
    assert_eq!(interface.get_register(0x0A), 0x07, "SPO2_CONFIG");
    assert_eq!(interface.get_register(0x0C), 0x24, "LED1_PA");
    assert_eq!(interface.get_register(0x0D), 0x24, "LED2_PA");
}

#[test]
fn test_configure_applies_pulse_width_and_sample_rate() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .configure(PulseWidth::Us200, LedCurrent::default(), SampleRate::Sps800)
        .unwrap();

    // SPO2_CONFIG = sample rate in bits 2-4, pulse width in bits 0-1
    assert_eq!(interface.get_register(0x0A), (6 << 2) | 0);

    driver
        .configure(PulseWidth::Us800, LedCurrent::default(), SampleRate::Sps50)
        .unwrap();
    assert_eq!(interface.get_register(0x0A), 0b10);
}

#[test]
fn test_configure_led_amplitudes_ignore_current_parameter() {
    // The current parameter is a documented dead parameter; both amplitude
    // registers get the fixed default
    let (mut driver, interface) = create_mock_driver();

    driver
        .configure(PulseWidth::default(), LedCurrent::Off, SampleRate::default())
        .unwrap();

    assert_eq!(interface.get_register(0x0C), 0x24);
    assert_eq!(interface.get_register(0x0D), 0x24);
}

#[test]
fn test_configure_zeroes_fifo_pointers_in_order() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .configure(
            PulseWidth::default(),
            LedCurrent::default(),
            SampleRate::default(),
        )
        .unwrap();

    // Write pointer, then overflow counter, then read pointer
    let pointer_writes: Vec<(u8, u8)> = interface
        .operations()
        .iter()
        .filter_map(|op| match op {
            Operation::WriteRegister { address, value } if (0x04..=0x06).contains(address) => {
                Some((*address, *value))
            }
            _ => None,
        })
        .collect();

    assert_eq!(pointer_writes, vec![(0x04, 0), (0x05, 0), (0x06, 0)]);
}

#[test]
fn test_fresh_device_reports_empty_fifo() {
    let (mut driver, _interface) = create_mock_driver();

    driver
        .configure(
            PulseWidth::default(),
            LedCurrent::default(),
            SampleRate::default(),
        )
        .unwrap();

    assert_eq!(driver.fifo_available_samples().unwrap(), 0);
}

#[test]
fn test_configure_is_write_only() {
    // The init sequence is fire-and-forget: no readbacks, no verification
    let (mut driver, interface) = create_mock_driver();

    driver
        .configure(
            PulseWidth::default(),
            LedCurrent::default(),
            SampleRate::default(),
        )
        .unwrap();

    assert!(
        interface
            .operations()
            .iter()
            .all(|op| matches!(op, Operation::WriteRegister { .. })),
        "configure should only issue writes"
    );
}
