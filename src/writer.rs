//! Persisting account records as pretty-printed JSON files.
//!
//! Each record lands in its own `account.<id>.json` file. Existing files with
//! the same name are overwritten without warning.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::account::AccountRecord;

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))
}

/// Serialize with 2-space indentation, no trailing newline.
pub fn to_pretty_json(record: &AccountRecord) -> Result<String> {
    serde_json::to_string_pretty(record)
        .with_context(|| format!("failed to serialize account {}", record.id))
}

/// Write `record` into `dir` and return the path written.
pub fn write_record(dir: &Path, record: &AccountRecord) -> Result<PathBuf> {
    let path = dir.join(record.file_name());
    let body = to_pretty_json(record)?;
    std::fs::write(&path, &body)
        .with_context(|| format!("failed to write account file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = body.len(), "wrote account file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn record() -> AccountRecord {
        let id: Uuid = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().unwrap();
        AccountRecord::new(id, "johndoe", "2024-05-12T08:31:09.123456")
    }

    #[test]
    fn ensure_dir_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("backend-simulation").join("data");
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        ensure_dir(tmp.path()).unwrap();
        ensure_dir(tmp.path()).unwrap();
    }

    #[test]
    fn ensure_dir_fails_on_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("data");
        std::fs::write(&file, "x").unwrap();
        let err = ensure_dir(&file).unwrap_err();
        assert!(format!("{err}").contains("failed to create output directory"));
    }

    #[test]
    fn pretty_json_layout() {
        let expected = "{\n  \"id\": \"3fa85f64-5717-4562-b3fc-2c963f66afa6\",\n  \"username\": \"johndoe\",\n  \"password\": \"12345678\",\n  \"created_at\": \"2024-05-12T08:31:09.123456\",\n  \"session_tokens\": [],\n  \"statistics\": 0\n}";
        assert_eq!(to_pretty_json(&record()).unwrap(), expected);
    }

    #[test]
    fn write_record_names_file_by_id() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_record(tmp.path(), &record()).unwrap();
        assert_eq!(
            path,
            tmp.path()
                .join("account.3fa85f64-5717-4562-b3fc-2c963f66afa6.json")
        );
        let back: AccountRecord =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, record());
    }

    #[test]
    fn write_record_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(record().file_name());
        std::fs::write(&path, "stale").unwrap();
        write_record(tmp.path(), &record()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with('{'));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_record_missing_dir_errors_with_path() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nope");
        let err = write_record(&dir, &record()).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("failed to write account file"), "{msg}");
        assert!(msg.contains("nope"), "{msg}");
    }
}
