//! Netboot TFTP boot file selection
//!
//! This crate decides what a TFTP transport sends for each read request and
//! what each finished transfer means for the provisioning pipeline. It does
//! not speak the TFTP wire protocol itself.
//!
//! # Request paths
//!
//! - `<mac>/<firmware-code>`: a provisioning client fetching its boot
//!   loader. Served from the [`FirmwareRegistry`]; a successful transfer
//!   publishes a [`netboot_common::MachineEvent`].
//! - anything else: a plain file fetch, reduced to its final component and
//!   served from the boot file table, with `bootaa64.efi` answered by the
//!   ARM64 boot loader when one is registered.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use netboot_assets::BootFiles;
//! use netboot_common::Firmware;
//! use netboot_tftp::{BootHandler, FirmwareRegistry, TransferHandler};
//! use std::sync::Arc;
//!
//! let registry = FirmwareRegistry::builder()
//!     .register(Firmware::Efi64, Bytes::from_static(b"ipxe.efi"))
//!     .build();
//! let handler = BootHandler::new(Arc::new(registry), Arc::new(BootFiles::new()));
//!
//! let client = "10.0.0.9:1758".parse().unwrap();
//! let file = handler.resolve("aa:bb:cc:dd:ee:ff/2", client).unwrap();
//! assert_eq!(file.size(), 8);
//! ```

pub mod classify;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod path;
pub mod registry;

pub use classify::*;
pub use config::*;
pub use dispatch::*;
pub use error::*;
pub use handler::*;
pub use path::*;
pub use registry::*;
