use super::{manifest_path, FileRecord, Manifest};
use crate::{
    util::{read_path_contents, sri_hash},
    warn,
};
use anyhow::{ensure, Context, Result};
use std::{fs::metadata, path::Path};
use walkdir::WalkDir;

pub(super) fn build(root: &Path) -> Result<Manifest> {
    let md = metadata(root).with_context(|| format!("failed to stat {}", root.display()))?;
    ensure!(md.is_dir(), "not a directory: {}", root.display());

    let mut manifest = Manifest::new();

    // `WalkDir` keeps its own stack of open directories, so deep trees do not recurse.
    for result in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = result.with_context(|| format!("failed to walk {}", root.display()))?;
        let path = entry.path();
        let file_type = entry.file_type();

        if file_type.is_dir() {
            continue;
        }

        if file_type.is_symlink() {
            warn(&format!("skipping symbolic link: {}", path.display()));
            continue;
        }

        ensure!(file_type.is_file(), "not a regular file: {}", path.display());

        let key = manifest_path(path.strip_prefix(root)?)?;
        let bytes = read_path_contents(path)?;
        let record = FileRecord {
            hash: sri_hash(&bytes),
            size: u64::try_from(bytes.len())?,
        };
        manifest.insert(key, record);
    }

    Ok(manifest)
}
