//! Unit tests for interrupt status polling

use crate::common::{create_mock_driver, Operation};

#[test]
fn test_interrupt_status_decode() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x00, 0xC0); // A_FULL | PPG_RDY
    interface.set_register(0x01, 0x02); // DIE_TEMP_RDY

    let status = driver.interrupt_status().unwrap();
    assert!(status.a_full);
    assert!(status.ppg_ready);
    assert!(status.die_temp_ready);
    assert!(!status.alc_overflow);
    assert!(!status.power_ready);
    assert!(status.any());
}

#[test]
fn test_interrupt_status_all_clear() {
    let (mut driver, _interface) = create_mock_driver();

    let status = driver.interrupt_status().unwrap();
    assert!(!status.any());
}

#[test]
fn test_interrupt_status_is_one_burst() {
    let (mut driver, interface) = create_mock_driver();

    interface.clear_operations();
    driver.interrupt_status().unwrap();

    let reads: Vec<u8> = interface
        .operations()
        .iter()
        .filter_map(|op| match op {
            Operation::ReadRegister { address, .. } => Some(*address),
            _ => None,
        })
        .collect();
    assert_eq!(reads, vec![0x00, 0x01]);
}
