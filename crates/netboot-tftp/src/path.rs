//! Transfer request path grammar
//!
//! Provisioning clients are handed a boot filename of the form
//! `<hardware-address>/<firmware-code>` by the DHCP side. Anything else is a
//! plain file fetch.

use crate::error::{Result, TftpError};
use netboot_common::{Firmware, HardwareAddr};
use std::fmt;

/// A request path naming the booting machine and its firmware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningPath {
    pub mac: HardwareAddr,
    /// Firmware code as requested; may name no known firmware
    pub code: u64,
}

impl ProvisioningPath {
    pub fn new(mac: HardwareAddr, firmware: Firmware) -> Self {
        Self {
            mac,
            code: u64::from(firmware.code()),
        }
    }

    /// Parse a request path.
    ///
    /// Returns `Ok(None)` when the path is not provisioning-shaped: not
    /// exactly two segments, or a second segment that is not a non-negative
    /// decimal number (digits only, no sign, at most `u64::MAX`). Codes too
    /// large for any firmware are still provisioning paths. A two-segment
    /// path whose first segment is not a hardware address is an error, since
    /// it looks like a provisioning request gone wrong.
    pub fn parse(path: &str) -> Result<Option<Self>> {
        let mut segments = path.split('/');
        let (Some(mac), Some(code), None) = (segments.next(), segments.next(), segments.next())
        else {
            return Ok(None);
        };

        let mac = mac
            .parse::<HardwareAddr>()
            .map_err(|source| TftpError::InvalidHardwareAddress {
                segment: mac.to_string(),
                source,
            })?;

        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(None);
        }
        let Ok(code) = code.parse::<u64>() else {
            return Ok(None);
        };

        Ok(Some(Self { mac, code }))
    }

    /// The firmware named by the code, if it is one we know
    pub fn firmware(&self) -> Option<Firmware> {
        u32::try_from(self.code)
            .ok()
            .and_then(|code| Firmware::try_from(code).ok())
    }
}

impl fmt::Display for ProvisioningPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.mac, self.code)
    }
}

/// Final component of a request path.
///
/// Trailing slashes are ignored; an empty path yields `"."` and a path of
/// only slashes yields `"/"`.
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" };
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}
