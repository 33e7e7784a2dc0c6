//! Completed transfer classification
//!
//! Every finished transfer is logged. Only a successful transfer of a
//! provisioning path is attributed to a machine, by publishing a
//! [`MachineEvent`] to subscribers.

use crate::path::{base_name, ProvisioningPath};
use netboot_common::{HardwareAddr, MachineEvent, MachineState};
use serde::Serialize;
use std::fmt;
use std::net::SocketAddr;
use tokio::sync::broadcast;
use tracing::{info, warn};

/// Capacity of the machine event channel
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// What a finished transfer turned out to be
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransferKind {
    /// Boot loader fetch by a known machine
    Provisioning { mac: HardwareAddr, code: u64 },
    /// Plain file fetch, not attributed to any machine
    Anonymous { filename: String },
}

/// Logs finished transfers and publishes machine events
#[derive(Debug, Clone)]
pub struct Classifier {
    events: broadcast::Sender<MachineEvent>,
}

impl Classifier {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { events }
    }

    /// Subscribe to machine events
    pub fn subscribe(&self) -> broadcast::Receiver<MachineEvent> {
        self.events.subscribe()
    }

    /// Record the outcome of one transfer.
    ///
    /// Must be called exactly once per transfer, including aborted ones,
    /// with the path exactly as the client requested it.
    pub fn transfer_finished<E: fmt::Display>(
        &self,
        path: &str,
        client: SocketAddr,
        outcome: Result<(), E>,
    ) -> TransferKind {
        let provisioning = match ProvisioningPath::parse(path) {
            Ok(Some(p)) => p,
            Ok(None) | Err(_) => {
                let filename = base_name(path);
                match outcome {
                    Ok(()) => info!(client = %client, "Sent {:?}", filename),
                    Err(e) => warn!(client = %client, "Send of {:?} to {} failed: {}", path, client, e),
                }
                return TransferKind::Anonymous {
                    filename: filename.to_string(),
                };
            }
        };

        match outcome {
            Ok(()) => {
                info!(client = %client, mac = %provisioning.mac, "Sent {:?}", path);
                let event = MachineEvent::new(
                    provisioning.mac.clone(),
                    MachineState::TftpBootLoaderSent,
                    format!("Sent boot loader to {}", client),
                );
                // Nobody listening is fine; the transfer already succeeded
                let _ = self.events.send(event);
            }
            Err(e) => {
                warn!(client = %client, mac = %provisioning.mac, "Send of {:?} to {} failed: {}", path, client, e);
            }
        }

        TransferKind::Provisioning {
            mac: provisioning.mac,
            code: provisioning.code,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
