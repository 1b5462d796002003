use serde_json::Value;

use crate::io::IoError;

/// Decodes YAML into the JSON value model.
///
/// YAML can spell `.nan` and `.inf`, which have no JSON counterpart; they are
/// rejected rather than silently turned into `null`. Scalar keys are
/// stringified; aggregate keys are rejected by the conversion.
pub fn read_yaml(text: &str) -> Result<Value, IoError> {
    let document: serde_yaml::Value = serde_yaml::from_str(text)?;
    if let Some(number) = first_non_finite(&document) {
        return Err(IoError::NonFiniteNumber {
            number: number.to_string(),
        });
    }
    serde_json::to_value(document).map_err(IoError::YamlConvert)
}

fn first_non_finite(document: &serde_yaml::Value) -> Option<&serde_yaml::Number> {
    let mut pending = vec![document];
    while let Some(value) = pending.pop() {
        match value {
            serde_yaml::Value::Number(number) if number.is_nan() || number.is_infinite() => {
                return Some(number);
            }
            serde_yaml::Value::Sequence(items) => pending.extend(items.iter().rev()),
            serde_yaml::Value::Mapping(fields) => {
                for (key, value) in fields.iter().collect::<Vec<_>>().into_iter().rev() {
                    pending.push(value);
                    pending.push(key);
                }
            }
            serde_yaml::Value::Tagged(tagged) => pending.push(&tagged.value),
            _ => {}
        }
    }
    None
}
