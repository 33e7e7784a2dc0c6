//! Asset namespaces and their loaders

use crate::error::{AssetError, Result};
use bytes::Bytes;
use include_dir::{Dir, DirEntry};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Legacy x86 iPXE image, for BIOS clients already running iPXE
pub const IPXE_PXE: &str = "ipxe/src/bin/ipxe.pxe";

/// x86 iPXE chained from the firmware's PXE/UNDI stack
pub const UNDIONLY_KPXE: &str = "ipxe/src/bin/undionly.kpxe";

/// 64-bit x86 EFI iPXE
pub const IPXE_EFI_X64: &str = "ipxe/src/bin-x86_64-efi/ipxe.efi";

/// 32-bit x86 EFI iPXE
pub const IPXE_EFI_I386: &str = "ipxe/src/bin-i386-efi/ipxe.efi";

/// 64-bit ARM EFI iPXE using the firmware's SNP network driver
pub const SNP_ARM64: &str = "ipxe/src/bin-arm64-efi/snp.efi";

/// Normalize an asset name to forward-slash form
pub fn canonical_name(name: &str) -> String {
    name.replace('\\', "/")
}

/// Boot loader images keyed by hierarchical build path
#[derive(Debug, Clone, Default)]
pub struct IpxeAssets {
    assets: HashMap<String, Bytes>,
}

impl IpxeAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset; the name is canonicalized first
    pub fn insert(&mut self, name: &str, data: impl Into<Bytes>) {
        self.assets.insert(canonical_name(name), data.into());
    }

    /// Look up an asset by name, accepting either path separator
    pub fn get(&self, name: &str) -> Result<Bytes> {
        self.assets
            .get(&canonical_name(name))
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(&canonical_name(name))
    }

    /// Asset names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.assets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Load every file under `root`, keyed by its path relative to `root`
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut store = Self::new();

        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|_| AssetError::InvalidPath(entry.path().to_path_buf()))?;
            let name = path_to_name(relative)?;
            let data = read_file(entry.path())?;

            debug!(name = %name, bytes = data.len(), "Loaded iPXE asset");
            store.insert(&name, data);
        }

        info!(dir = %root.display(), count = store.len(), "Loaded iPXE assets");
        Ok(store)
    }

    /// Load every file of a directory embedded at build time
    pub fn from_embedded(dir: &Dir<'static>) -> Result<Self> {
        let mut store = Self::new();
        collect_embedded(dir, &mut store)?;
        debug!(count = store.len(), "Loaded embedded iPXE assets");
        Ok(store)
    }
}

fn collect_embedded(dir: &Dir<'static>, store: &mut IpxeAssets) -> Result<()> {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(sub) => collect_embedded(sub, store)?,
            DirEntry::File(file) => {
                let name = path_to_name(file.path())?;
                store.insert(&name, Bytes::from_static(file.contents()));
            }
        }
    }
    Ok(())
}

/// A platform's boot files keyed by bare filename
#[derive(Debug, Clone, Default)]
pub struct BootFiles {
    files: HashMap<String, Bytes>,
}

impl BootFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file
    pub fn insert(&mut self, filename: impl Into<String>, data: impl Into<Bytes>) {
        self.files.insert(filename.into(), data.into());
    }

    /// Look up a file by exact filename
    pub fn get(&self, filename: &str) -> Option<Bytes> {
        self.files.get(filename).cloned()
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.files.contains_key(filename)
    }

    /// Filenames in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.files.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Load the regular files directly inside `root`; subdirectories are ignored
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut store = Self::new();

        for entry in WalkDir::new(root).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let filename = entry
                .file_name()
                .to_str()
                .ok_or_else(|| AssetError::InvalidPath(entry.path().to_path_buf()))?
                .to_string();
            let data = read_file(entry.path())?;

            debug!(filename = %filename, bytes = data.len(), "Loaded boot file");
            store.insert(filename, data);
        }

        info!(dir = %root.display(), count = store.len(), "Loaded boot files");
        Ok(store)
    }

    /// Load the top-level files of a directory embedded at build time
    pub fn from_embedded(dir: &Dir<'static>) -> Result<Self> {
        let mut store = Self::new();
        for file in dir.files() {
            let filename = file
                .path()
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| AssetError::InvalidPath(file.path().to_path_buf()))?;
            store.insert(filename, Bytes::from_static(file.contents()));
        }
        Ok(store)
    }
}

fn path_to_name(path: &Path) -> Result<String> {
    let parts: Option<Vec<&str>> = path.components().map(|c| c.as_os_str().to_str()).collect();
    parts
        .map(|p| p.join("/"))
        .ok_or_else(|| AssetError::InvalidPath(path.to_path_buf()))
}

fn read_file(path: &Path) -> Result<Bytes> {
    std::fs::read(path)
        .map(Bytes::from)
        .map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })
}
