//! Error types for boot file resolution
//!
//! Every error is local to one transfer: the transport reports it to the
//! client that asked and keeps serving everyone else.

use netboot_assets::AssetError;
use netboot_common::HardwareAddrError;
use thiserror::Error;

/// Error type for boot file resolution
#[derive(Debug, Error)]
pub enum TftpError {
    /// Provisioning-shaped path whose first segment is not a hardware address
    #[error("invalid hardware address {segment:?}")]
    InvalidHardwareAddress {
        segment: String,
        #[source]
        source: HardwareAddrError,
    },

    /// Well-formed provisioning path for a firmware with no registered loader
    #[error("unknown firmware type {0}")]
    UnknownFirmware(u64),

    /// Plain file request matching nothing
    #[error("unknown file {0}")]
    UnknownFile(String),

    /// Asset store failure while building the registry
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Result type for boot file resolution
pub type Result<T> = std::result::Result<T, TftpError>;
