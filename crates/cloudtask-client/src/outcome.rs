use serde_json::Value;

/// Domain conflicts recognized in 500 responses by message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
  /// A task with the same id is already registered.
  DuplicateId,

  /// The task's files were never uploaded to the server.
  FilesMissing,

  /// Start requested for a task that is already running.
  AlreadyStarted,

  /// Stop requested for a task that never started.
  NotStarted,

  /// Stop requested for a task that already stopped.
  AlreadyStopped,
}

/// Classified result of one RPC call.
///
/// Produced fresh per exchange and never persisted. Classification is a pure
/// function: the same (status, body) pair always yields the same outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
  /// 200 — the decoded response payload.
  Success(Value),

  /// 400 — the request was malformed. Not retryable.
  Fatal,

  /// 500 with a recognized conflict message. Retryable only after the user
  /// corrects the conflicting state.
  Conflict(ConflictKind),

  /// The referenced task or user is not registered with the service.
  NotRegistered,

  /// A 500 no rule matched, or any other unexpected status.
  Unknown { status: u16, body: String },
}
