//! JSON sidecar writing

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Sidecar;

/// Write `<dir>/<stem>.json` (pretty-printed), replacing any previous file
pub fn write_sidecar<P: AsRef<Path>>(sidecar: &Sidecar, dir: P, stem: &str) -> Result<PathBuf> {
    let path = dir.as_ref().join(format!("{}.json", stem));

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, sidecar)?;
    writer.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grantee, Permission};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_write_project_sidecar() {
        let dir = TempDir::new().unwrap();
        let mut capabilities = BTreeMap::new();
        capabilities.insert("Read".to_string(), "Allow".to_string());
        let sidecar = Sidecar::project(
            "Finance",
            vec![Permission {
                grantee: Grantee {
                    id: "g1".into(),
                    tag_name: "group".into(),
                },
                capabilities,
            }],
        );

        let path = write_sidecar(&sidecar, dir.path(), "Finance").unwrap();
        assert_eq!(path, dir.path().join("Finance.json"));

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Finance",
                "filename": "",
                "permissions": [{
                    "grantee": {"id": "g1", "tag_name": "group"},
                    "capabilities": {"Read": "Allow"}
                }]
            })
        );
    }

    #[test]
    fn test_rewrite_replaces_content() {
        let dir = TempDir::new().unwrap();
        write_sidecar(&Sidecar::workbook("a", "long-name.twbx", vec![]), dir.path(), "wb").unwrap();
        let path = write_sidecar(&Sidecar::workbook("a", "b.twb", vec![]), dir.path(), "wb").unwrap();

        let back: Sidecar = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(back.filename, "b.twb");
    }
}
