//! RPC client and response classification for the cloudtask service.
//!
//! One submission, one exchange: a request built upstream is POSTed once and
//! the raw (status, body) pair is mapped to an [`Outcome`] through an
//! operation-specific rule table. Network failures that never produced a
//! server verdict are [`ClientError`]s instead; everything the server said,
//! however unwelcome, is a classified `Ok(Outcome)`.
//!
//! Presentation stays outside: the crate only produces outcomes and
//! (label, value) rows for a [`ResultSink`] to draw.

mod classify;
mod client;
mod error;
mod outcome;
mod present;

pub use classify::{
  CREATE_TASK_RULES, LOOKUP_RULES, RuleOutcome, RuleTable, START_TASK_RULES, STOP_TASK_RULES,
  UPLOAD_RULES, classify,
};
pub use client::{RpcClient, RpcResponse};
pub use error::ClientError;
pub use outcome::{ConflictKind, Outcome};
pub use present::{NullSink, ResultSink, detail_rows};
