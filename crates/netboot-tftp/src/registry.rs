//! Firmware registry
//!
//! Boot loader bytes per firmware kind, built once before serving starts
//! and shared read-only across all transfers.

use crate::config::FirmwareConfig;
use bytes::Bytes;
use netboot_assets::IpxeAssets;
use netboot_common::Firmware;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Read-only map from firmware kind to boot loader image
#[derive(Debug, Clone, Default)]
pub struct FirmwareRegistry {
    loaders: HashMap<Firmware, Bytes>,
}

/// Builder for [`FirmwareRegistry`]; the only way to add entries
#[derive(Debug, Default)]
pub struct FirmwareRegistryBuilder {
    loaders: HashMap<Firmware, Bytes>,
}

impl FirmwareRegistryBuilder {
    /// Register the boot loader for `firmware`, replacing any earlier one
    pub fn register(mut self, firmware: Firmware, data: impl Into<Bytes>) -> Self {
        self.loaders.insert(firmware, data.into());
        self
    }

    pub fn build(self) -> FirmwareRegistry {
        FirmwareRegistry {
            loaders: self.loaders,
        }
    }
}

impl FirmwareRegistry {
    pub fn builder() -> FirmwareRegistryBuilder {
        FirmwareRegistryBuilder::default()
    }

    /// Populate from iPXE assets according to `config`.
    ///
    /// A configured asset missing from the store leaves that firmware
    /// unregistered; clients asking for it fail at request time.
    pub fn from_assets(assets: &IpxeAssets, config: &FirmwareConfig) -> Self {
        let mut builder = Self::builder();
        for (firmware, name) in config.iter() {
            match assets.get(name) {
                Ok(data) => {
                    debug!(firmware = %firmware, asset = %name, bytes = data.len(), "Registered boot loader");
                    builder = builder.register(firmware, data);
                }
                Err(e) => {
                    warn!(firmware = %firmware, error = %e, "Boot loader unavailable");
                }
            }
        }
        builder.build()
    }

    /// Boot loader for `firmware`
    pub fn get(&self, firmware: Firmware) -> Option<Bytes> {
        self.loaders.get(&firmware).cloned()
    }

    pub fn contains(&self, firmware: Firmware) -> bool {
        self.loaders.contains_key(&firmware)
    }

    /// Registered firmware kinds in code order
    pub fn registered(&self) -> Vec<Firmware> {
        let mut firmware: Vec<Firmware> = self.loaders.keys().copied().collect();
        firmware.sort();
        firmware
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}
