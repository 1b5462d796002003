use serde::Deserialize;
use serde_json::Value;

use crate::io::IoError;

/// Decodes one JSON document. Nesting depth is bounded by the validator, not
/// the parser, so the recursion limit is lifted and the stack grows on demand.
pub fn read_json(text: &str) -> Result<Value, IoError> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
}
