use serde_json::Value;

/// Capability for displaying a classified result.
///
/// The client only produces a title and ordered (label, value) rows; the
/// presentation layer decides how to draw them.
pub trait ResultSink {
  fn present(&mut self, title: &str, rows: &[(String, String)]);
}

/// A sink that discards everything. Useful in tests.
#[derive(Debug, Clone, Default)]
pub struct NullSink;

impl ResultSink for NullSink {
  fn present(&mut self, _title: &str, _rows: &[(String, String)]) {}
}

/// Flatten a success payload into (label, value) rows for display.
///
/// Sequence-valued fields are joined with ", ". A non-object payload becomes
/// a single `value` row, so every success has something to show.
pub fn detail_rows(payload: &Value) -> Vec<(String, String)> {
  match payload {
    Value::Object(map) => map
      .iter()
      .map(|(key, value)| (key.clone(), display_value(value)))
      .collect(),
    other => vec![("value".to_string(), display_value(other))],
  }
}

fn display_value(value: &Value) -> String {
  match value {
    Value::String(text) => text.clone(),
    Value::Array(items) => items
      .iter()
      .map(display_value)
      .collect::<Vec<_>>()
      .join(", "),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn joins_sequence_fields_for_display() {
    let rows = detail_rows(&json!({"task_id": "T1", "tags": ["x", "y"]}));
    assert!(rows.contains(&("task_id".to_string(), "T1".to_string())));
    assert!(rows.contains(&("tags".to_string(), "x, y".to_string())));
  }

  #[test]
  fn non_object_payload_becomes_a_single_row() {
    let rows = detail_rows(&json!("done"));
    assert_eq!(rows, vec![("value".to_string(), "done".to_string())]);
  }

  #[test]
  fn scalar_fields_render_without_quotes() {
    let rows = detail_rows(&json!({"port": 9002, "running": true}));
    assert!(rows.contains(&("port".to_string(), "9002".to_string())));
    assert!(rows.contains(&("running".to_string(), "true".to_string())));
  }
}
