//! Configuration file handling

use color_eyre::eyre::{Result, WrapErr};
use netboot_assets::{BootFiles, IpxeAssets};
use netboot_tftp::{BootHandler, FirmwareConfig, FirmwareRegistry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Netboot configuration
///
/// ```yaml
/// ipxe_dir: /var/lib/netboot/ipxe
/// boot_files_dir: /var/lib/netboot/rpi4
/// firmware:
///   efi64: build/ipxe.efi
///   x86_ipxe: ~
/// ```
///
/// `firmware` entries override the built-in table one by one; `~` stops
/// serving that firmware.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetbootConfig {
    /// Root of the hierarchical iPXE asset tree
    pub ipxe_dir: Option<PathBuf>,

    /// Directory holding the flat boot file set
    pub boot_files_dir: Option<PathBuf>,

    /// Boot loader asset per firmware kind
    pub firmware: FirmwareConfig,
}

impl NetbootConfig {
    /// Load from a YAML file, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&contents)
            .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load assets and assemble the transfer handler
    pub fn build_handler(&self) -> Result<BootHandler> {
        let assets = match &self.ipxe_dir {
            Some(dir) => IpxeAssets::from_dir(dir)
                .wrap_err_with(|| format!("Failed to load iPXE assets from {}", dir.display()))?,
            None => IpxeAssets::new(),
        };

        let files = match &self.boot_files_dir {
            Some(dir) => BootFiles::from_dir(dir)
                .wrap_err_with(|| format!("Failed to load boot files from {}", dir.display()))?,
            None => BootFiles::new(),
        };

        let registry = FirmwareRegistry::from_assets(&assets, &self.firmware);
        Ok(BootHandler::new(Arc::new(registry), Arc::new(files)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netboot_common::Firmware;
    use std::fs;

    #[test]
    fn test_load_defaults_without_file() {
        let config = NetbootConfig::load(None).unwrap();
        assert_eq!(config, NetbootConfig::default());
        assert_eq!(config.firmware, FirmwareConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netboot.yaml");
        fs::write(&path, "boot_files_dir: /srv/rpi4\n").unwrap();

        let config = NetbootConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.boot_files_dir, Some(PathBuf::from("/srv/rpi4")));
        assert_eq!(config.ipxe_dir, None);
        assert_eq!(config.firmware, FirmwareConfig::default());
    }

    #[test]
    fn test_load_firmware_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netboot.yaml");
        fs::write(&path, "firmware:\n  arm64_efi: custom/snp.efi\n").unwrap();

        let config = NetbootConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.firmware.asset_for(Firmware::Arm64Efi), Some("custom/snp.efi"));
        // Entries not mentioned keep their defaults
        assert_eq!(
            config.firmware.asset_for(Firmware::X86Pc),
            FirmwareConfig::default().asset_for(Firmware::X86Pc)
        );
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        assert!(NetbootConfig::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_build_handler_from_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let ipxe = dir.path().join("ipxe-root");
        fs::create_dir_all(ipxe.join("ipxe/src/bin")).unwrap();
        fs::write(ipxe.join("ipxe/src/bin/undionly.kpxe"), b"undi").unwrap();
        let files = dir.path().join("rpi4");
        fs::create_dir_all(&files).unwrap();
        fs::write(files.join("config.txt"), b"arm_64bit=1").unwrap();

        let config = NetbootConfig {
            ipxe_dir: Some(ipxe),
            boot_files_dir: Some(files),
            firmware: FirmwareConfig::default(),
        };
        let handler = config.build_handler().unwrap();

        assert_eq!(handler.dispatcher().firmware().registered(), vec![Firmware::X86Pc]);
        assert!(handler.dispatcher().files().contains("config.txt"));
    }
}
