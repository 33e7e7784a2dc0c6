//! Firmware to boot loader configuration
//!
//! Decides which iPXE asset each firmware kind is handed. The default table
//! covers every [`Firmware`]. A configured map is applied on top of it: each
//! entry overrides the default for that firmware, and a null entry drops the
//! firmware entirely so it is refused.

use netboot_assets::{IPXE_EFI_I386, IPXE_EFI_X64, IPXE_PXE, SNP_ARM64, UNDIONLY_KPXE};
use netboot_common::Firmware;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Mapping from firmware kind to hierarchical asset name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareConfig {
    loaders: BTreeMap<Firmware, String>,
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        let loaders = [
            (Firmware::X86Pc, UNDIONLY_KPXE),
            (Firmware::Efi32, IPXE_EFI_I386),
            (Firmware::Efi64, IPXE_EFI_X64),
            // EFI BC clients get the x86_64 image
            (Firmware::EfiBc, IPXE_EFI_X64),
            (Firmware::X86Ipxe, IPXE_PXE),
            (Firmware::Arm64Efi, SNP_ARM64),
        ]
        .into_iter()
        .map(|(fw, name)| (fw, name.to_string()))
        .collect();

        Self { loaders }
    }
}

// Every firmware is written out, refused ones as null
impl Serialize for FirmwareConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let table: BTreeMap<Firmware, Option<&str>> = Firmware::ALL
            .into_iter()
            .map(|fw| (fw, self.asset_for(fw)))
            .collect();
        table.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FirmwareConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let overrides = BTreeMap::<Firmware, Option<String>>::deserialize(deserializer)?;
        let config = overrides
            .into_iter()
            .fold(Self::default(), |config, (firmware, asset)| match asset {
                Some(asset) => config.with_loader(firmware, asset),
                None => config.without(firmware),
            });
        Ok(config)
    }
}

impl FirmwareConfig {
    /// A configuration that serves no firmware at all
    pub fn empty() -> Self {
        Self {
            loaders: BTreeMap::new(),
        }
    }

    /// Serve `asset` to clients running `firmware`
    pub fn with_loader(mut self, firmware: Firmware, asset: impl Into<String>) -> Self {
        self.loaders.insert(firmware, asset.into());
        self
    }

    /// Stop serving `firmware`
    pub fn without(mut self, firmware: Firmware) -> Self {
        self.loaders.remove(&firmware);
        self
    }

    /// Asset name configured for `firmware`
    pub fn asset_for(&self, firmware: Firmware) -> Option<&str> {
        self.loaders.get(&firmware).map(String::as_str)
    }

    /// Configured entries in firmware code order
    pub fn iter(&self) -> impl Iterator<Item = (Firmware, &str)> {
        self.loaders.iter().map(|(fw, name)| (*fw, name.as_str()))
    }
}
