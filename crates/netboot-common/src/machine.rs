//! Machine lifecycle events emitted by the boot file stage.

use crate::mac::HardwareAddr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Machine lifecycle state reached during network boot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum MachineState {
    /// Boot loader was delivered over TFTP
    #[serde(rename = "tftp")]
    TftpBootLoaderSent,
}

impl MachineState {
    /// Internal string representation for serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineState::TftpBootLoaderSent => "tftp",
        }
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MachineState::TftpBootLoaderSent => "Sent boot loader via TFTP",
        }
    }
}

/// A state transition for one machine, keyed by hardware address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MachineEvent {
    pub mac: HardwareAddr,
    pub state: MachineState,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl MachineEvent {
    pub fn new(mac: HardwareAddr, state: MachineState, message: impl Into<String>) -> Self {
        Self {
            mac,
            state,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_strings() {
        let state = MachineState::TftpBootLoaderSent;
        assert_eq!(state.as_str(), "tftp");
        assert_eq!(state.display_name(), "Sent boot loader via TFTP");
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"tftp\"");
    }

    #[test]
    fn test_event_serializes_mac_as_string() {
        let mac: HardwareAddr = "aa:bb:cc:dd:ee:ff".parse().unwrap();
        let event = MachineEvent::new(
            mac,
            MachineState::TftpBootLoaderSent,
            "sent boot loader to 10.0.0.5:2070",
        );

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["mac"], "aa:bb:cc:dd:ee:ff");
        assert_eq!(value["state"], "tftp");
        assert_eq!(value["message"], "sent boot loader to 10.0.0.5:2070");
    }
}
