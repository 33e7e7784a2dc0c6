use thiserror::Error;

/// Failure to parse a hardware address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HardwareAddrError {
    #[error("malformed hardware address: {0:?}")]
    Malformed(String),

    #[error("invalid octet {0:?} in hardware address")]
    InvalidOctet(String),

    #[error("hardware address has {0} octets (expected 6, 8 or 20)")]
    InvalidLength(usize),
}

/// Failure to interpret a firmware code or name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FirmwareError {
    #[error("unknown firmware code {0}")]
    UnknownCode(u32),

    #[error("unknown firmware name {0:?}")]
    UnknownName(String),
}
