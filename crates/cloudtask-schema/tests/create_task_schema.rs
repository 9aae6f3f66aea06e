//! Validation tests for the CreateTask schema document shipped in `schemas/`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use cloudtask_schema::{CREATE_TASK_SCHEMA, GENERIC_MESSAGE, PORT_MESSAGE, SchemaError, SchemaValidator};

fn schema_dir() -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("../../schemas")
}

fn valid_request() -> Value {
  json!({
    "task_id": "task_4fe5",
    "host": "worker-1",
    "port": 9002,
    "username": "operator",
    "password": "secret",
    "files_paths": ["server.py", "client.py"],
    "selection_criteria": "ALL_USERS",
    "server_arguments": "",
    "client_arguments": "",
    "tags": ["ml"],
  })
}

fn validate(request: &Value) -> Result<(), SchemaError> {
  SchemaValidator::new(schema_dir()).validate(CREATE_TASK_SCHEMA, request)
}

#[test]
fn accepts_a_valid_request() {
  validate(&valid_request()).expect("request should pass");
}

#[test]
fn accepts_port_range_bounds() {
  for port in [0, 65535] {
    let mut request = valid_request();
    request["port"] = json!(port);
    validate(&request).expect("boundary port should pass");
  }
}

#[test]
fn rejects_out_of_range_ports_with_the_port_message() {
  for port in [-1, 65536] {
    let mut request = valid_request();
    request["port"] = json!(port);
    let err = validate(&request).expect_err("out-of-range port should fail");
    match err {
      SchemaError::Rejected {
        instance_path,
        user_message,
        ..
      } => {
        assert_eq!(instance_path, "/port");
        assert_eq!(user_message, PORT_MESSAGE);
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }
}

#[test]
fn rejects_non_numeric_port_built_from_raw_fields() {
  // The builder carries a non-numeric port through as a string; the schema
  // is what catches it.
  let mut fields: HashMap<String, String> = [
    ("task_id", "task_4fe5"),
    ("host", "worker-1"),
    ("port", "abc"),
    ("username", "operator"),
    ("password", "secret"),
    ("files_paths", "server.py"),
    ("selection_criteria", "ALL_USERS"),
    ("tags", "ml"),
  ]
  .into_iter()
  .map(|(k, v)| (k.to_string(), v.to_string()))
  .collect();
  fields.insert("server_arguments".to_string(), String::new());
  fields.insert("client_arguments".to_string(), String::new());

  let request = cloudtask_proto::create_task(&fields);
  let err = validate(&request).expect_err("non-numeric port should fail");
  match err {
    SchemaError::Rejected { user_message, .. } => assert_eq!(user_message, PORT_MESSAGE),
    other => panic!("unexpected error: {other:?}"),
  }
}

#[test]
fn other_violations_get_the_generic_message() {
  let mut request = valid_request();
  request["tags"] = json!("not-an-array");
  let err = validate(&request).expect_err("bad tags should fail");
  match err {
    SchemaError::Rejected {
      instance_path,
      user_message,
      ..
    } => {
      assert_eq!(instance_path, "/tags");
      assert_eq!(user_message, GENERIC_MESSAGE);
    }
    other => panic!("unexpected error: {other:?}"),
  }
}

#[test]
fn missing_schema_document_is_a_load_error() {
  let validator = SchemaValidator::new(schema_dir());
  let err = validator
    .validate("rpc_exec_missing.json", &valid_request())
    .expect_err("missing schema should fail");
  assert!(matches!(err, SchemaError::Load { .. }));
}
