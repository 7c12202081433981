use assert_cmd::Command;
use serde_json::Value;
use std::io::Write;

fn cli() -> Command {
    Command::cargo_bin("topolay-cli").unwrap()
}

fn stdout_json(assert: assert_cmd::assert::Assert) -> Value {
    let output = assert.get_output();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn generates_a_star_graph_from_flags() {
    let assert = cli().args(["--kind", "star", "--count", "4"]).assert().success();
    let graph = stdout_json(assert);
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 5);
    assert_eq!(graph["edges"].as_array().unwrap().len(), 4);
    assert_eq!(graph["nodes"][0]["label"], "Center");
}

#[test]
fn unrecognized_kind_prints_the_empty_graph() {
    let assert = cli().args(["--kind", "tree", "--count", "8"]).assert().success();
    let graph = stdout_json(assert);
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 0);
    assert_eq!(graph["edges"].as_array().unwrap().len(), 0);
}

#[test]
fn intent_response_on_stdin_drives_generation() {
    let body = r#"{
        "success": true,
        "message": "Creating a mesh topology with 4 devices.",
        "data": { "topology": "mesh", "devices": 4 }
    }"#;
    let assert = cli().args(["--intent", "-"]).write_stdin(body).assert().success();
    let graph = stdout_json(assert);
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(graph["edges"].as_array().unwrap().len(), 6);
}

#[test]
fn intent_file_without_a_complete_pair_prints_the_empty_graph() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "success": true, "message": "Message received.", "data": {{ "topology": null, "devices": null }} }}"#
    )
    .unwrap();

    let assert = cli()
        .args(["--intent", file.path().to_str().unwrap()])
        .assert()
        .success();
    let graph = stdout_json(assert);
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 0);
}

#[test]
fn malformed_intent_body_fails() {
    cli()
        .args(["--intent", "-"])
        .write_stdin("{ not json")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn missing_count_is_a_usage_error() {
    cli().args(["--kind", "star"]).assert().failure().code(2);
}
