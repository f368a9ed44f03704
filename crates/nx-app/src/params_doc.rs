//! Parameter documents: flat JSON objects, keys sorted, 4-space indent.

use crate::{AppError, AppResult};
use nx_core::CurrentValues;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Serialize values as a parameter document.
pub fn to_string(values: &CurrentValues) -> AppResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    values
        .serialize(&mut ser)
        .map_err(|e| AppError::InvalidInput(format!("cannot serialize parameters: {e}")))?;
    let mut text = String::from_utf8(buf)
        .map_err(|e| AppError::InvalidInput(format!("non-UTF-8 parameter text: {e}")))?;
    text.push('\n');
    Ok(text)
}

/// Parse a document; anything but a JSON object is rejected.
pub fn parse(text: &str, path: &Path) -> AppResult<Map<String, Value>> {
    let invalid = |message: String| AppError::ParamsDocument {
        path: path.to_path_buf(),
        message,
    };
    match serde_json::from_str::<Value>(text).map_err(|e| invalid(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(invalid(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

pub fn load(path: &Path) -> AppResult<Map<String, Value>> {
    let text = std::fs::read_to_string(path).map_err(|e| AppError::ParamsFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&text, path)
}

pub fn save(path: &Path, values: &CurrentValues) -> AppResult<()> {
    let text = to_string(values)?;
    std::fs::write(path, text).map_err(|e| AppError::ParamsFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), params = values.len(), "exported parameters");
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nx_core::{PlotMode, build};

    #[test]
    fn document_is_sorted_and_indented() {
        let set = build(PlotMode::Line1d, &[4]);
        let text = to_string(&CurrentValues::from_defaults(&set)).unwrap();
        let expected = r#"{
    "axis": 0,
    "complex_display_mode": "auto",
    "complex_mode": "real-imag",
    "index-0": 0,
    "line-color": "black",
    "line-marker": ".",
    "line-style": "-",
    "line-width": 1,
    "marker-size": 5
}
"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn non_object_documents_are_rejected() {
        let err = parse("[1, 2]", Path::new("p.json")).unwrap_err();
        assert!(err.to_string().contains("an array"), "{err}");
        assert!(parse("{ nope", Path::new("p.json")).is_err());
    }
}
