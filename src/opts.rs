use crate::Opts;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use once_cell::sync::OnceCell;
use std::{
    env::current_exe,
    path::{Path, PathBuf},
};

static OPTS: OnceCell<Opts> = OnceCell::new();

pub(crate) fn get() -> &'static Opts {
    OPTS.get_or_init(Opts::parse)
}

pub(crate) fn assets_dir() -> Result<PathBuf> {
    if let Some(assets_dir) = &get().assets_dir {
        return Ok(assets_dir.clone());
    }
    let exe = current_exe().with_context(|| "failed to determine executable path")?;
    default_assets_dir(&exe)
}

pub(crate) fn default_assets_dir(exe: &Path) -> Result<PathBuf> {
    let parent = exe
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe.display()))?;
    Ok(parent.join("..").join("dist"))
}

#[cfg(test)]
mod test {
    use super::default_assets_dir;
    use std::path::Path;

    #[test]
    fn default_is_sibling_dist() {
        let dir = default_assets_dir(Path::new("/opt/app/bin/sri-manifest")).unwrap();
        assert_eq!(Path::new("/opt/app/bin/../dist"), dir);
    }

    #[test]
    fn bare_root_has_no_parent() {
        assert!(default_assets_dir(Path::new("/")).is_err());
    }
}
