use std::io::Read;

use serde_json::Value;

use crate::io::format::{json, yaml};
use crate::io::{Format, IoError};

pub fn read_document(text: &str, format: Format) -> Result<Value, IoError> {
    match format {
        Format::Json => json::read_json(text),
        Format::Yaml => yaml::read_yaml(text),
    }
}

/// Reads raw input without assuming it is UTF-8.
pub fn read_input_bytes<R: Read>(mut reader: R) -> Result<Vec<u8>, IoError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Drops a decoded document one level at a time.
///
/// `Value`'s own destructor recurses once per nesting level, which overflows
/// the stack on documents the unbounded parser accepts.
pub fn release_document(document: Value) {
    let mut pending = vec![document];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items),
            Value::Object(fields) => pending.extend(fields.into_iter().map(|(_, value)| value)),
            _ => {}
        }
    }
}
