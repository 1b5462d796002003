use serde_json::Value;

use crate::engine::validate::schema;

/// Schema tables the `validate` command checks documents against.
pub fn schema_payload() -> Value {
    schema::tables_json()
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps() -> Vec<String> {
    vec!["render_schema_tables".to_string()]
}

/// Determinism guards applied by the `schema` command.
pub fn deterministic_guards() -> Vec<String> {
    vec![
        "static_schema_tables".to_string(),
        "schema_table_order_preserved".to_string(),
    ]
}
