//! Netboot Asset Store
//!
//! Immutable byte blobs served to booting clients, in two independent
//! namespaces:
//!
//! - [`IpxeAssets`]: boot loader images keyed by hierarchical build path
//!   (`ipxe/src/bin-x86_64-efi/ipxe.efi`). Backslashes in lookup names are
//!   treated as path separators.
//! - [`BootFiles`]: a platform's fixed boot file set keyed by bare filename
//!   (`start4.elf`, `config.txt`), as requested by boot ROMs that know
//!   nothing about provisioning.
//!
//! Both are filled once, from a directory at startup or from a directory
//! embedded at build time, and only read afterwards.
//!
//! # Example
//!
//! ```
//! use netboot_assets::{BootFiles, IpxeAssets, SNP_ARM64};
//!
//! let mut ipxe = IpxeAssets::new();
//! ipxe.insert(SNP_ARM64, b"arm64 loader".to_vec());
//! assert_eq!(&ipxe.get("ipxe\\src\\bin-arm64-efi\\snp.efi").unwrap()[..], b"arm64 loader");
//!
//! let mut files = BootFiles::new();
//! files.insert("config.txt", b"arm_64bit=1".to_vec());
//! assert!(files.get("config.txt").is_some());
//! ```

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;
