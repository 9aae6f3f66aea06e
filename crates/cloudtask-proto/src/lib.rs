//! Request types and builders for the cloudtask RPC service.
//!
//! Every RPC operation has a fixed field set. Builders consume a
//! [`FieldSource`] — the presentation layer's raw field storage — and
//! construct the request exactly once per submission. Requests are plain
//! values; nothing here performs I/O or retains state between calls.

mod builder;
mod request;
mod source;

pub use builder::{create_task, get_task_by_id, get_user_info, split_list, start_task, stop_task};
pub use request::{FilePayload, GetTaskById, GetUserInfo, StartTask, StopTask, UploadFiles};
pub use source::FieldSource;
