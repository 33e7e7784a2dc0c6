//! Boot file selection for incoming read requests
//!
//! Resolution order:
//!
//! 1. `<mac>/<code>` paths get the boot loader registered for that
//!    firmware code, or fail.
//! 2. Anything else is reduced to its final path component.
//! 3. `bootaa64.efi` is answered with the ARM64 EFI boot loader when one is
//!    registered, ahead of any boot file with the same name.
//! 4. The flat boot file table is consulted last.

use crate::error::{Result, TftpError};
use crate::path::{base_name, ProvisioningPath};
use crate::registry::FirmwareRegistry;
use bytes::Bytes;
use netboot_assets::BootFiles;
use netboot_common::Firmware;
use std::sync::Arc;
use tracing::{debug, warn};

/// Filename ARM64 UEFI firmware uses for its removable-media boot loader
pub const ARM64_BOOT_FILENAME: &str = "bootaa64.efi";

/// Where a resolved boot file came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootSource {
    /// Provisioning path, served from the firmware registry
    Firmware(Firmware),
    /// `bootaa64.efi` requested by name, served the ARM64 boot loader
    Arm64Override,
    /// Served from the flat boot file table
    File(String),
}

/// Bytes to hand the transport for one transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootFile {
    data: Bytes,
    source: BootSource,
}

impl BootFile {
    fn new(data: Bytes, source: BootSource) -> Self {
        Self { data, source }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Exact number of bytes the transport must send
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn source(&self) -> &BootSource {
        &self.source
    }
}

/// Resolves request paths to boot files
#[derive(Debug, Clone)]
pub struct Dispatcher {
    firmware: Arc<FirmwareRegistry>,
    files: Arc<BootFiles>,
}

impl Dispatcher {
    pub fn new(firmware: Arc<FirmwareRegistry>, files: Arc<BootFiles>) -> Self {
        Self { firmware, files }
    }

    pub fn firmware(&self) -> &FirmwareRegistry {
        &self.firmware
    }

    pub fn files(&self) -> &BootFiles {
        &self.files
    }

    /// Pick the bytes to serve for `path`.
    ///
    /// A provisioning-shaped path with a bad hardware address is still
    /// tried as a plain file; if that also fails the address error is
    /// returned rather than "unknown file".
    pub fn resolve(&self, path: &str) -> Result<BootFile> {
        let malformed = match ProvisioningPath::parse(path) {
            Ok(Some(provisioning)) => return self.resolve_provisioning(&provisioning),
            Ok(None) => None,
            Err(e) => {
                debug!(path = %path, error = %e, "Not a provisioning path, trying as boot file");
                Some(e)
            }
        };

        let filename = base_name(path);

        if filename == ARM64_BOOT_FILENAME {
            if let Some(data) = self.firmware.get(Firmware::Arm64Efi) {
                debug!(path = %path, "Serving ARM64 boot loader for {}", ARM64_BOOT_FILENAME);
                return Ok(BootFile::new(data, BootSource::Arm64Override));
            }
        }

        match self.files.get(filename) {
            Some(data) => {
                debug!(path = %path, filename = %filename, "Serving boot file");
                Ok(BootFile::new(data, BootSource::File(filename.to_string())))
            }
            None => match malformed {
                Some(e) => {
                    warn!(path = %path, error = %e, "Malformed provisioning path");
                    Err(e)
                }
                None => Err(TftpError::UnknownFile(filename.to_string())),
            },
        }
    }

    fn resolve_provisioning(&self, path: &ProvisioningPath) -> Result<BootFile> {
        let firmware = path
            .firmware()
            .ok_or(TftpError::UnknownFirmware(path.code))?;
        let data = self
            .firmware
            .get(firmware)
            .ok_or(TftpError::UnknownFirmware(path.code))?;

        debug!(mac = %path.mac, firmware = %firmware, bytes = data.len(), "Serving boot loader");
        Ok(BootFile::new(data, BootSource::Firmware(firmware)))
    }
}
