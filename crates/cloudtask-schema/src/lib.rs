//! JSON Schema pre-send validation for cloudtask requests.
//!
//! Request schemas live as per-endpoint documents in a schema directory,
//! named `<rpc_function>.json` exactly as the service names them. A document
//! is read and compiled fresh for every validation — the service may redeploy
//! schemas at any time, so nothing is cached.
//!
//! Only the first reported violation is surfaced. This is deliberately lossy:
//! the user fixes one field at a time, and the port gets a dedicated message
//! because it is the one field with a numeric range to explain.

use std::path::{Path, PathBuf};

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use thiserror::Error;

/// Schema document for the CreateTask request.
pub const CREATE_TASK_SCHEMA: &str = "rpc_exec_create_task.json";

/// Message shown when the port violates its schema constraints.
pub const PORT_MESSAGE: &str = "Invalid port. Should be an integer between 0 and 65535";

/// Message shown for any other schema violation.
pub const GENERIC_MESSAGE: &str = "Invalid form. Review the fields.";

/// Errors raised by schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
  /// The schema document could not be read or parsed.
  #[error("failed to load schema '{path}': {message}")]
  Load { path: String, message: String },

  /// The schema document itself is not a valid schema.
  #[error("schema '{path}' is not a valid schema: {message}")]
  Compile { path: String, message: String },

  /// The request violates the schema.
  #[error("{user_message}")]
  Rejected {
    /// Instance path of the first reported violation, e.g. `/port`.
    instance_path: String,
    /// The validator's own description of the violation.
    detail: String,
    user_message: &'static str,
  },
}

impl SchemaError {
  fn rejected(instance_path: String, detail: String) -> Self {
    let user_message = if instance_path == "/port" {
      PORT_MESSAGE
    } else {
      GENERIC_MESSAGE
    };
    SchemaError::Rejected {
      instance_path,
      detail,
      user_message,
    }
  }
}

/// Validates built requests against the service's schema documents.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
  schema_dir: PathBuf,
}

impl SchemaValidator {
  /// Create a validator reading schemas from the given directory.
  pub fn new(schema_dir: impl Into<PathBuf>) -> Self {
    Self {
      schema_dir: schema_dir.into(),
    }
  }

  /// Validate a request against the named schema document.
  pub fn validate(&self, schema_name: &str, request: &Value) -> Result<(), SchemaError> {
    let path = self.schema_dir.join(schema_name);
    let schema = load_document(&path)?;
    let compiled = JSONSchema::options()
      .with_draft(Draft::Draft7)
      .compile(&schema)
      .map_err(|e| SchemaError::Compile {
        path: path.display().to_string(),
        message: e.to_string(),
      })?;

    if let Err(mut errors) = compiled.validate(request) {
      if let Some(error) = errors.next() {
        return Err(SchemaError::rejected(
          error.instance_path.to_string(),
          error.to_string(),
        ));
      }
    }
    Ok(())
  }
}

fn load_document(path: &Path) -> Result<Value, SchemaError> {
  let content = std::fs::read_to_string(path).map_err(|e| SchemaError::Load {
    path: path.display().to_string(),
    message: e.to_string(),
  })?;
  serde_json::from_str(&content).map_err(|e| SchemaError::Load {
    path: path.display().to_string(),
    message: e.to_string(),
  })
}
