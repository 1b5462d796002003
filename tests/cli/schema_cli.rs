use serde_json::Value;

#[test]
fn schema_prints_condition_registry() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("brij")
        .arg("schema")
        .output()
        .expect("run command");

    assert_eq!(output.status.code(), Some(0));
    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    assert_eq!(payload["conditions"]["between"], serde_json::json!(["start", "end"]));
    assert_eq!(payload["main_fields"]["rule"]["required"], Value::Bool(true));
    assert_eq!(
        payload["combinator_fields"]["and"]["kinds"],
        serde_json::json!(["array"])
    );
}

#[test]
fn schema_emit_pipeline_reports_command() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("brij")
        .args(["schema", "--emit-pipeline"])
        .output()
        .expect("run command");

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8(output.stderr).expect("stderr utf8");
    let pipeline: Value = serde_json::from_str(stderr.trim()).expect("stderr json");
    assert_eq!(pipeline["command"], Value::from("schema"));
    assert_eq!(pipeline["steps"][0], Value::from("render_schema_tables"));
}
