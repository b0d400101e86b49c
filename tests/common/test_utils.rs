//! Test utilities and helper functions

use crate::common::mock_interface::MockInterface;
use max30102::Max30102Driver;

/// Create a mock driver for testing
/// Returns (driver, interface) where interface is a clone that shares state with the driver
pub fn create_mock_driver() -> (Max30102Driver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver = Max30102Driver::new(interface);
    (driver, interface_clone)
}
