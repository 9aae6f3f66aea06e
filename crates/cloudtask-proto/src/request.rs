use serde::{Deserialize, Serialize};

/// Request body for `/rpc_exec_get_task_by_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetTaskById {
  pub task_id: String,
}

/// Request body for `/rpc_exec_start_server_task`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartTask {
  pub task_id: String,
  /// Extra arguments passed through to the task process.
  pub arguments: String,
}

/// Request body for `/rpc_exec_stop_server_task`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopTask {
  pub task_id: String,
}

/// Request body for `/rpc_exec_get_user_info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetUserInfo {
  pub user_id: String,
}

/// One binary file carried by an upload request.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePayload {
  /// File name reported to the server.
  pub name: String,
  pub bytes: Vec<u8>,
}

/// Multipart request for `/upload_files`: a `task_id` text field plus a
/// repeated `files` part per payload, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFiles {
  pub task_id: String,
  pub files: Vec<FilePayload>,
}
