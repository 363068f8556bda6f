// src/convert/write.rs

use anyhow::{Context, Result};
use serde::Serialize;
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;

use crate::record::Record;

/// Pretty-print `records` as a JSON array into `path`.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<()> {
    write_json_pretty(path, records)
}

/// Pretty-print `value` into `path`.
///
/// Writes to a temp file in the same directory, then renames it over `path`,
/// so a failed run never leaves a truncated file behind.
pub fn write_json_pretty<P, T>(path: P, value: &T) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;

    // pretty-print with a trailing newline
    serde_json::to_writer_pretty(&mut tmp, value).context("serializing JSON")?;
    tmp.write_all(b"\n")?;
    tmp.flush()?;

    tmp.persist(path)
        .with_context(|| format!("renaming temp file over {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_two_space_indented_array() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.json");

        let record = match json!({"Country": "Sweden", "Nobel": 7}) {
            serde_json::Value::Object(m) => m,
            _ => unreachable!(),
        };
        write_records(&path, &[record])?;

        let text = fs::read_to_string(&path)?;
        assert_eq!(
            text,
            "[\n  {\n    \"Country\": \"Sweden\",\n    \"Nobel\": 7\n  }\n]\n"
        );
        Ok(())
    }

    #[test]
    fn empty_slice_writes_empty_array() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.json");
        write_records(&path, &[])?;
        assert_eq!(fs::read_to_string(&path)?, "[]\n");
        Ok(())
    }

    #[test]
    fn overwrites_existing_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.json");
        fs::write(&path, "stale contents that are longer than the new output")?;
        write_records(&path, &[])?;
        assert_eq!(fs::read_to_string(&path)?, "[]\n");
        Ok(())
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("out.json");
        assert!(write_records(&path, &[]).is_err());
    }
}
