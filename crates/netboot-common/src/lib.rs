//! Shared domain types for the netboot pipeline: hardware addresses,
//! client firmware kinds and the machine events emitted while a client
//! boots.

pub mod error;
pub mod firmware;
pub mod mac;
pub mod machine;

pub use error::{FirmwareError, HardwareAddrError};
pub use firmware::Firmware;
pub use mac::HardwareAddr;
pub use machine::*;
