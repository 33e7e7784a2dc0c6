//! Client boot firmware kinds
//!
//! The numeric code of each variant is wire-visible: it is the second
//! segment of a provisioning path (`<mac>/<code>`), so values must never
//! be renumbered.

use crate::error::FirmwareError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Boot environment a client is running when it fetches its boot loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Firmware {
    /// Classic x86 BIOS with PXE/UNDI
    X86Pc = 0,
    /// 32-bit x86 EFI
    Efi32 = 1,
    /// 64-bit x86 EFI
    Efi64 = 2,
    /// EFI byte code (mixed 32/64-bit EFI)
    EfiBc = 3,
    /// x86 BIOS already running iPXE, chainloading ours
    X86Ipxe = 4,
    /// 64-bit ARM EFI
    Arm64Efi = 6,
}

impl Firmware {
    pub const ALL: [Firmware; 6] = [
        Firmware::X86Pc,
        Firmware::Efi32,
        Firmware::Efi64,
        Firmware::EfiBc,
        Firmware::X86Ipxe,
        Firmware::Arm64Efi,
    ];

    /// Numeric code used in provisioning paths
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Firmware::X86Pc => "x86_pc",
            Firmware::Efi32 => "efi32",
            Firmware::Efi64 => "efi64",
            Firmware::EfiBc => "efi_bc",
            Firmware::X86Ipxe => "x86_ipxe",
            Firmware::Arm64Efi => "arm64_efi",
        }
    }

    /// Map an RFC 4578 client system architecture (DHCP option 93)
    pub fn from_client_arch(arch: u16) -> Option<Firmware> {
        match arch {
            0 => Some(Firmware::X86Pc),
            6 => Some(Firmware::Efi32),
            7 => Some(Firmware::Efi64),
            9 => Some(Firmware::EfiBc),
            11 => Some(Firmware::Arm64Efi),
            _ => None,
        }
    }
}

impl TryFrom<u32> for Firmware {
    type Error = FirmwareError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Firmware::ALL
            .into_iter()
            .find(|fw| fw.code() == code)
            .ok_or(FirmwareError::UnknownCode(code))
    }
}

impl FromStr for Firmware {
    type Err = FirmwareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Firmware::ALL
            .into_iter()
            .find(|fw| fw.as_str() == s)
            .ok_or_else(|| FirmwareError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for Firmware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
