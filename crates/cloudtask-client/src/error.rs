use thiserror::Error;

/// Failures that prevented an exchange from producing a server verdict.
///
/// Anything the server actually said — including errors — is classified into
/// an [`crate::Outcome`] instead.
#[derive(Debug, Error)]
pub enum ClientError {
  /// Network-level failure: DNS, connection refused, timeout, abort.
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// Upload submitted without a task id.
  #[error("task_id is required")]
  MissingTaskId,
}
