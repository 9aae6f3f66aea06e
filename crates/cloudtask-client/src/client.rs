use cloudtask_config::ClientConfig;
use cloudtask_proto::{GetTaskById, GetUserInfo, StartTask, StopTask, UploadFiles};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::classify::{
  CREATE_TASK_RULES, LOOKUP_RULES, RuleTable, START_TASK_RULES, STOP_TASK_RULES, UPLOAD_RULES,
  classify,
};
use crate::error::ClientError;
use crate::outcome::Outcome;

/// Raw result of one HTTP exchange, before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponse {
  pub status: u16,
  pub body: String,
}

/// Client for the task-management RPC service.
///
/// Built from an already-resolved [`ClientConfig`], so a request can never
/// target an unresolved host. Holds no mutable state: concurrent submissions
/// are independent exchanges whose ordering is decided server-side. A request
/// is sent exactly once — no retries, and no client-side abort once sent.
#[derive(Debug, Clone)]
pub struct RpcClient {
  http: reqwest::Client,
  base_url: String,
}

impl RpcClient {
  /// Build a client from resolved settings.
  pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
    let http = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()?;
    Ok(Self {
      http,
      base_url: config.endpoint.base_url(),
    })
  }

  /// POST a JSON-encoded request to an RPC path and collect the raw reply.
  #[instrument(skip(self, request))]
  async fn call<T: Serialize + ?Sized>(
    &self,
    path: &str,
    request: &T,
  ) -> Result<RpcResponse, ClientError> {
    let response = self
      .http
      .post(format!("{}{}", self.base_url, path))
      .json(request)
      .send()
      .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    info!(status, "rpc response received");
    Ok(RpcResponse { status, body })
  }

  async fn dispatch<T: Serialize + ?Sized>(
    &self,
    path: &str,
    request: &T,
    rules: RuleTable,
  ) -> Result<Outcome, ClientError> {
    let response = self.call(path, request).await?;
    Ok(classify(response.status, &response.body, rules))
  }

  /// Register a new task. The request must already have passed schema
  /// validation; this method sends it as-is.
  pub async fn create_task(&self, request: &Value) -> Result<Outcome, ClientError> {
    self
      .dispatch("/rpc_exec_create_task", request, CREATE_TASK_RULES)
      .await
  }

  /// Fetch a task record by id.
  pub async fn get_task_by_id(&self, request: &GetTaskById) -> Result<Outcome, ClientError> {
    self
      .dispatch("/rpc_exec_get_task_by_id", request, LOOKUP_RULES)
      .await
  }

  /// Fetch a user record by id.
  pub async fn get_user_info(&self, request: &GetUserInfo) -> Result<Outcome, ClientError> {
    self
      .dispatch("/rpc_exec_get_user_info", request, LOOKUP_RULES)
      .await
  }

  /// Start a registered task at the server.
  pub async fn start_task(&self, request: &StartTask) -> Result<Outcome, ClientError> {
    self
      .dispatch("/rpc_exec_start_server_task", request, START_TASK_RULES)
      .await
  }

  /// Stop a running task.
  pub async fn stop_task(&self, request: &StopTask) -> Result<Outcome, ClientError> {
    self
      .dispatch("/rpc_exec_stop_server_task", request, STOP_TASK_RULES)
      .await
  }

  /// Upload task files as a multipart request: a `task_id` text field plus
  /// one `files` part per payload, in order.
  #[instrument(skip(self, request), fields(task_id = %request.task_id))]
  pub async fn upload_files(&self, request: UploadFiles) -> Result<Outcome, ClientError> {
    if request.task_id.is_empty() {
      return Err(ClientError::MissingTaskId);
    }

    let mut form = Form::new().text("task_id", request.task_id);
    for file in request.files {
      form = form.part("files", Part::bytes(file.bytes).file_name(file.name));
    }

    let response = self
      .http
      .post(format!("{}/upload_files", self.base_url))
      .multipart(form)
      .send()
      .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    info!(status, "upload response received");
    Ok(classify(status, &body, UPLOAD_RULES))
  }
}
