//! Hardware (MAC) address parsing
//!
//! Accepts the notations booting clients and DHCP servers actually use:
//! colon- or hyphen-separated hex octets, and Cisco-style dotted groups.
//! EUI-48, EUI-64 and 20-octet IP-over-InfiniBand addresses are supported.

use crate::error::HardwareAddrError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Octet counts a hardware address may have
const VALID_LENGTHS: [usize; 3] = [6, 8, 20];

/// A parsed link-layer hardware address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HardwareAddr(Vec<u8>);

impl HardwareAddr {
    /// Create from raw octets
    pub fn from_bytes(octets: &[u8]) -> Result<Self, HardwareAddrError> {
        if !VALID_LENGTHS.contains(&octets.len()) {
            return Err(HardwareAddrError::InvalidLength(octets.len()));
        }
        Ok(Self(octets.to_vec()))
    }

    /// Raw octets
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of octets
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn parse_separated(s: &str, sep: char) -> Result<Vec<u8>, HardwareAddrError> {
        s.split(sep)
            .map(|octet| {
                if octet.len() != 2 || !is_hex(octet) {
                    return Err(HardwareAddrError::InvalidOctet(octet.to_string()));
                }
                u8::from_str_radix(octet, 16)
                    .map_err(|_| HardwareAddrError::InvalidOctet(octet.to_string()))
            })
            .collect()
    }

    fn parse_dotted(s: &str) -> Result<Vec<u8>, HardwareAddrError> {
        let mut octets = Vec::new();
        for group in s.split('.') {
            if group.len() != 4 || !is_hex(group) {
                return Err(HardwareAddrError::InvalidOctet(group.to_string()));
            }
            let value = u16::from_str_radix(group, 16)
                .map_err(|_| HardwareAddrError::InvalidOctet(group.to_string()))?;
            octets.extend_from_slice(&value.to_be_bytes());
        }
        Ok(octets)
    }
}

fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

impl FromStr for HardwareAddr {
    type Err = HardwareAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Shortest valid form is 14 chars (xxxx.xxxx.xxxx)
        if s.len() < 14 {
            return Err(HardwareAddrError::Malformed(s.to_string()));
        }

        let octets = match s.as_bytes()[2] {
            b':' => Self::parse_separated(s, ':')?,
            b'-' => Self::parse_separated(s, '-')?,
            _ if s.as_bytes()[4] == b'.' => Self::parse_dotted(s)?,
            _ => return Err(HardwareAddrError::Malformed(s.to_string())),
        };

        Self::from_bytes(&octets)
    }
}

impl fmt::Display for HardwareAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", octet)?;
        }
        Ok(())
    }
}

impl Serialize for HardwareAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HardwareAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
