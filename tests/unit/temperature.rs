//! Unit tests for die temperature reads

use crate::common::create_mock_driver;

#[test]
fn test_read_temperature_positive() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x1F, 23); // TEMP_INT
    interface.set_register(0x20, 8); // TEMP_FRAC

    let temp = driver.read_temperature().unwrap();
    assert_eq!(temp.integer, 23);
    assert_eq!(temp.fraction, 8);
    assert!((temp.celsius() - 23.5).abs() < f32::EPSILON);
}

#[test]
fn test_read_temperature_negative() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x1F, 0xFF); // -1 in two's complement
    interface.set_register(0x20, 0);

    let temp = driver.read_temperature().unwrap();
    assert_eq!(temp.integer, -1);
    assert!((temp.celsius() + 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_read_temperature_triggers_conversion() {
    let (mut driver, interface) = create_mock_driver();

    interface.clear_operations();
    driver.read_temperature().unwrap();

    // DIE_TEMP_CONFIG gets TEMP_EN before the result registers are read
    assert_eq!(interface.writes_to(0x21), vec![0x01]);
}
