use super::Manifest;
use anyhow::{Context, Result};
use std::io::Write;

pub(super) fn write(manifest: &Manifest, mut writer: impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, manifest)?;
    writeln!(writer)?;
    writer.flush().with_context(|| "failed to flush manifest")
}

#[cfg(test)]
mod test {
    use super::{super::FileRecord, write, Manifest};

    #[test]
    fn empty_manifest() {
        let mut buf = Vec::new();
        write(&Manifest::new(), &mut buf).unwrap();
        assert_eq!("{}\n", String::from_utf8(buf).unwrap());
    }

    #[test]
    fn two_space_indent() {
        let mut manifest = Manifest::new();
        manifest.insert(
            String::from("/a.txt"),
            FileRecord {
                hash: String::from("sha256-LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ="),
                size: 5,
            },
        );
        let mut buf = Vec::new();
        write(&manifest, &mut buf).unwrap();
        assert_eq!(
            r#"{
  "/a.txt": {
    "hash": "sha256-LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ=",
    "size": 5
  }
}
"#,
            String::from_utf8(buf).unwrap()
        );
    }
}
