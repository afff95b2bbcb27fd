use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    io::Write,
    path::{Component, Path},
};

mod build;
mod write;

/// Integrity information for a single file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FileRecord {
    /// `sha256-` followed by the base64-encoded SHA-256 digest of the file's contents
    pub hash: String,
    pub size: u64,
}

/// Manifest paths mapped to their records. Keys iterate in lexicographic order.
pub type Manifest = BTreeMap<String, FileRecord>;

pub fn build(root: &Path) -> Result<Manifest> {
    build::build(root)
}

pub fn write(manifest: &Manifest, writer: impl Write) -> Result<()> {
    write::write(manifest, writer)
}

/// Converts a path relative to the scan root into a manifest key, e.g. `sub/dir/file.txt` becomes
/// `/sub/dir/file.txt` regardless of the host's separator.
pub fn manifest_path(relative: &Path) -> Result<String> {
    let mut key = String::new();
    for component in relative.components() {
        let Component::Normal(name) = component else {
            bail!(
                "unexpected component in relative path {}: {component:?}",
                relative.display()
            );
        };
        let name = name
            .to_str()
            .ok_or_else(|| anyhow!("path is not valid UTF-8: {}", relative.display()))?;
        key.push('/');
        key.push_str(name);
    }
    if key.is_empty() {
        bail!("relative path is empty");
    }
    Ok(key)
}
