//! Status and body classification for RPC responses.
//!
//! The status code is checked first; 500 bodies are then matched against an
//! ordered per-operation rule table, first match wins. The tokens are the
//! service's own error text and must not be corrected — "alredy" is what the
//! service sends.

use serde_json::Value;
use tracing::error;

use crate::outcome::{ConflictKind, Outcome};

/// Outcome a matched body rule maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
  Conflict(ConflictKind),
  NotRegistered,
}

/// Ordered substring rules checked against 500-status bodies.
pub type RuleTable = &'static [(&'static str, RuleOutcome)];

/// Rules for `/rpc_exec_create_task`.
pub const CREATE_TASK_RULES: RuleTable = &[(
  "UNIQUE constraint failed",
  RuleOutcome::Conflict(ConflictKind::DuplicateId),
)];

/// Rules for `/rpc_exec_start_server_task`.
pub const START_TASK_RULES: RuleTable = &[
  (
    "does not exist.",
    RuleOutcome::Conflict(ConflictKind::FilesMissing),
  ),
  (
    "alredy exists",
    RuleOutcome::Conflict(ConflictKind::AlreadyStarted),
  ),
  ("not registered", RuleOutcome::NotRegistered),
];

/// Rules for `/rpc_exec_stop_server_task`.
pub const STOP_TASK_RULES: RuleTable = &[
  ("not found", RuleOutcome::Conflict(ConflictKind::NotStarted)),
  (
    "alredy stopped",
    RuleOutcome::Conflict(ConflictKind::AlreadyStopped),
  ),
  ("not registered", RuleOutcome::NotRegistered),
];

/// Rules for the lookup endpoints, `get_task_by_id` and `get_user_info`.
pub const LOOKUP_RULES: RuleTable = &[("not registered", RuleOutcome::NotRegistered)];

/// Rules for `/upload_files`; the service reports no recognized conflicts.
pub const UPLOAD_RULES: RuleTable = &[];

/// Map one raw (status, body) pair to an [`Outcome`].
pub fn classify(status: u16, body: &str, rules: RuleTable) -> Outcome {
  match status {
    200 => Outcome::Success(parse_payload(body)),
    400 => Outcome::Fatal,
    500 => {
      let text = error_text(body);
      for &(token, rule_outcome) in rules {
        if text.contains(token) {
          return match rule_outcome {
            RuleOutcome::Conflict(kind) => Outcome::Conflict(kind),
            RuleOutcome::NotRegistered => Outcome::NotRegistered,
          };
        }
      }
      error!(body = %text, "unrecognized server error");
      Outcome::Unknown { status, body: text }
    }
    other => {
      error!(status = other, body = %body, "unexpected response status");
      Outcome::Unknown {
        status: other,
        body: error_text(body),
      }
    }
  }
}

/// 200 payloads are JSON records; non-JSON bodies are kept as raw text.
fn parse_payload(body: &str) -> Value {
  serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Error bodies arrive as JSON-encoded exception strings; unwrap them before
/// matching so the rules see the exception text itself.
fn error_text(body: &str) -> String {
  match serde_json::from_str::<Value>(body) {
    Ok(Value::String(text)) => text,
    _ => body.to_string(),
  }
}
