//! Seam between the TFTP transport and boot file selection
//!
//! The transport owns the wire protocol. For each read request it calls
//! [`TransferHandler::resolve`] and streams exactly [`BootFile::size`]
//! bytes; when the transfer ends, successfully or not, it calls
//! [`TransferHandler::transfer_finished`] once.

use crate::classify::{Classifier, TransferKind};
use crate::dispatch::{BootFile, Dispatcher};
use crate::error::Result;
use crate::registry::FirmwareRegistry;
use netboot_assets::BootFiles;
use netboot_common::MachineEvent;
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

/// Callbacks a TFTP transport drives per transfer
pub trait TransferHandler: Send + Sync {
    /// Select the bytes to send for a read request
    fn resolve(&self, path: &str, client: SocketAddr) -> Result<BootFile>;

    /// Record a finished transfer
    fn transfer_finished(
        &self,
        path: &str,
        client: SocketAddr,
        outcome: std::result::Result<(), &dyn fmt::Display>,
    ) -> TransferKind;
}

/// [`TransferHandler`] backed by a firmware registry and boot file table
#[derive(Debug, Clone)]
pub struct BootHandler {
    dispatcher: Dispatcher,
    classifier: Classifier,
}

impl BootHandler {
    pub fn new(firmware: Arc<FirmwareRegistry>, files: Arc<BootFiles>) -> Self {
        Self {
            dispatcher: Dispatcher::new(firmware, files),
            classifier: Classifier::new(),
        }
    }

    /// Subscribe to machine events
    pub fn subscribe(&self) -> broadcast::Receiver<MachineEvent> {
        self.classifier.subscribe()
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}

impl TransferHandler for BootHandler {
    fn resolve(&self, path: &str, client: SocketAddr) -> Result<BootFile> {
        debug!(client = %client, path = %path, "Read request");
        self.dispatcher.resolve(path)
    }

    fn transfer_finished(
        &self,
        path: &str,
        client: SocketAddr,
        outcome: std::result::Result<(), &dyn fmt::Display>,
    ) -> TransferKind {
        self.classifier.transfer_finished(path, client, outcome)
    }
}
