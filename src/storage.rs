use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::{EnrichError, Record};

/// Reads the local record file. Any JSON object is accepted as-is.
pub fn load_record(path: impl AsRef<Path>) -> Result<Record, EnrichError> {
    let raw = fs::read(path.as_ref())?;
    let value: Value = serde_json::from_slice(&raw).map_err(EnrichError::Parse)?;

    match value {
        Value::Object(record) => Ok(record),
        Value::Array(_) => Err(EnrichError::NotAnObject("array")),
        Value::String(_) => Err(EnrichError::NotAnObject("string")),
        Value::Number(_) => Err(EnrichError::NotAnObject("number")),
        Value::Bool(_) => Err(EnrichError::NotAnObject("boolean")),
        Value::Null => Err(EnrichError::NotAnObject("null")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn file_with(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_object_verbatim() {
        let file = file_with(r#"{"z": 1, "a": {"nested": [true, null]}, "m": "x"}"#);
        let record = load_record(file.path()).unwrap();

        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(record["a"]["nested"][0], Value::Bool(true));
    }

    #[test]
    fn rejects_non_object() {
        let file = file_with("[1, 2, 3]");
        assert!(matches!(
            load_record(file.path()),
            Err(EnrichError::NotAnObject("array"))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let file = file_with("{not json");
        assert!(matches!(load_record(file.path()), Err(EnrichError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_record(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, EnrichError::Io(_)));
    }
}
