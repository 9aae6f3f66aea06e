//! Endpoint configuration for the cloudtask RPC service.
//!
//! The endpoint is resolved exactly once, before any request is dispatched:
//! either from the built-in default or from a small JSON document holding a
//! single `host` field (the service's `hostinfo.json`). A failed load is a
//! hard error — requests are never sent against an unresolved host.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Endpoint used when no configuration document is provided.
pub const DEFAULT_HOST: &str = "localhost:9001";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while resolving the endpoint document.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// The document could not be read.
  #[error("failed to read endpoint config '{path}': {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },

  /// The document is not valid JSON or lacks the `host` field.
  #[error("failed to parse endpoint config '{path}': {source}")]
  Parse {
    path: String,
    #[source]
    source: serde_json::Error,
  },
}

/// Host and port of the RPC server, as `"<host>:<port>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
  pub host: String,
}

impl Default for EndpointConfig {
  fn default() -> Self {
    Self {
      host: DEFAULT_HOST.to_string(),
    }
  }
}

impl EndpointConfig {
  /// Load the endpoint document from disk.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.display().to_string(),
      source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.display().to_string(),
      source,
    })
  }

  /// Base URL all RPC paths are joined onto.
  pub fn base_url(&self) -> String {
    format!("http://{}", self.host)
  }
}

/// Resolved settings handed to the RPC client at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  pub endpoint: EndpointConfig,
  /// Bound on each request; a hung call fails instead of suspending forever.
  pub timeout: Duration,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      endpoint: EndpointConfig::default(),
      timeout: DEFAULT_TIMEOUT,
    }
  }
}

impl ClientConfig {
  /// Settings for the given endpoint with the default timeout.
  pub fn new(endpoint: EndpointConfig) -> Self {
    Self {
      endpoint,
      timeout: DEFAULT_TIMEOUT,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[test]
  fn loads_host_from_document() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(file, r#"{{ "host": "192.168.1.170:9001" }}"#).expect("write config");

    let config = EndpointConfig::load(file.path()).expect("load config");
    assert_eq!(config.host, "192.168.1.170:9001");
    assert_eq!(config.base_url(), "http://192.168.1.170:9001");
  }

  #[test]
  fn missing_document_is_a_hard_error() {
    let err = EndpointConfig::load(Path::new("/nonexistent/hostinfo.json"))
      .expect_err("load should fail");
    assert!(matches!(err, ConfigError::Read { .. }));
  }

  #[test]
  fn malformed_document_is_a_hard_error() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(file, "not json").expect("write config");

    let err = EndpointConfig::load(file.path()).expect_err("load should fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
  }

  #[test]
  fn default_endpoint_uses_the_literal_host() {
    assert_eq!(EndpointConfig::default().host, DEFAULT_HOST);
  }
}
