use serde_json::{Map, Value};

use crate::request::{GetTaskById, GetUserInfo, StartTask, StopTask};
use crate::source::FieldSource;

/// Split a comma-separated field into trimmed elements.
///
/// Empty elements are preserved, so an empty input yields `[""]` — the
/// service receives exactly what the form held, not a cleaned-up version.
pub fn split_list(raw: &str) -> Vec<String> {
  raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Assemble a CreateTask request object from raw fields.
///
/// The result is a JSON object rather than a typed struct because it has not
/// been validated yet: the port is parsed with no fallback, and a non-numeric
/// value is carried through as the raw string so the schema check downstream
/// rejects it with a type error instead of this builder guessing a default.
pub fn create_task(fields: &dyn FieldSource) -> Value {
  let mut request = Map::new();
  request.insert("task_id".into(), Value::from(fields.value("task_id")));
  request.insert("host".into(), Value::from(fields.value("host")));
  request.insert("port".into(), parse_port(&fields.value("port")));
  request.insert("username".into(), Value::from(fields.value("username")));
  request.insert("password".into(), Value::from(fields.value("password")));
  request.insert(
    "files_paths".into(),
    Value::from(split_list(&fields.value("files_paths"))),
  );
  request.insert(
    "selection_criteria".into(),
    Value::from(fields.value("selection_criteria")),
  );
  request.insert(
    "server_arguments".into(),
    Value::from(fields.value("server_arguments")),
  );
  request.insert(
    "client_arguments".into(),
    Value::from(fields.value("client_arguments")),
  );
  request.insert("tags".into(), Value::from(split_list(&fields.value("tags"))));
  Value::Object(request)
}

fn parse_port(raw: &str) -> Value {
  match raw.trim().parse::<i64>() {
    Ok(port) => Value::from(port),
    Err(_) => Value::from(raw),
  }
}

pub fn get_task_by_id(fields: &dyn FieldSource) -> GetTaskById {
  GetTaskById {
    task_id: fields.value("task_id"),
  }
}

pub fn start_task(fields: &dyn FieldSource) -> StartTask {
  StartTask {
    task_id: fields.value("task_id"),
    arguments: fields.value("arguments"),
  }
}

pub fn stop_task(fields: &dyn FieldSource) -> StopTask {
  StopTask {
    task_id: fields.value("task_id"),
  }
}

pub fn get_user_info(fields: &dyn FieldSource) -> GetUserInfo {
  GetUserInfo {
    user_id: fields.value("user_id"),
  }
}
