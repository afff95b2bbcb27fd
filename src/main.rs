use anyhow::Result;
use clap::{crate_version, Parser};
use std::{io::stdout, path::PathBuf};

mod manifest;

mod opts;

mod util;

mod warn;
use warn::warn;

#[derive(Parser)]
#[clap(
    version = crate_version!(),
    about = "Emit a subresource-integrity manifest for a directory of build artifacts",
    after_help = "\
The manifest is written to standard output as a JSON object mapping each file's path, relative to \
<ASSETS_DIR> and prefixed with '/', to its hash and size:

    {
      \"/sub/b.txt\": { \"hash\": \"sha256-<base64>\", \"size\": <bytes> }
    }

Symbolic links are skipped. Any unreadable entry aborts the run without writing a manifest.
"
)]
struct Opts {
    #[clap(
        value_name = "ASSETS_DIR",
        help = "Directory to scan; defaults to `../dist` relative to the executable"
    )]
    assets_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let assets_dir = opts::assets_dir()?;

    eprintln!("Using assets directory: {}", assets_dir.display());

    let manifest = manifest::build(&assets_dir)?;

    manifest::write(&manifest, stdout().lock())
}
