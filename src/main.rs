use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use cloudtask_client::{ConflictKind, Outcome, ResultSink, RpcClient, detail_rows};
use cloudtask_config::{ClientConfig, EndpointConfig};
use cloudtask_proto::{FilePayload, UploadFiles};
use cloudtask_schema::{CREATE_TASK_SCHEMA, SchemaValidator};

/// Cloudtask - command line front end for the task-management RPC service
#[derive(Parser)]
#[command(name = "cloudtask")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the endpoint config document (JSON with a single `host` field)
  #[arg(long, global = true)]
  host_config: Option<PathBuf>,

  /// Directory holding the request schema documents
  #[arg(long, global = true, default_value = "schemas")]
  schema_dir: PathBuf,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Manage tasks on the remote service
  Task {
    #[command(subcommand)]
    action: TaskCommand,
  },

  /// Look up user records
  User {
    #[command(subcommand)]
    action: UserCommand,
  },

  /// Upload task files
  Files {
    #[command(subcommand)]
    action: FilesCommand,
  },
}

#[derive(Subcommand)]
enum TaskCommand {
  /// Register a new task
  Create {
    #[arg(long)]
    task_id: String,

    /// Host the task's server process binds to
    #[arg(long)]
    host: String,

    /// Port of the task's server process, an integer between 0 and 65535
    #[arg(long)]
    port: String,

    #[arg(long, default_value = "")]
    username: String,

    #[arg(long, default_value = "")]
    password: String,

    /// Comma-separated list of task file paths
    #[arg(long, default_value = "")]
    files_paths: String,

    #[arg(long, default_value = "")]
    selection_criteria: String,

    #[arg(long, default_value = "")]
    server_arguments: String,

    #[arg(long, default_value = "")]
    client_arguments: String,

    /// Comma-separated list of tags
    #[arg(long, default_value = "")]
    tags: String,
  },

  /// Fetch a task record
  Get {
    #[arg(long)]
    task_id: String,
  },

  /// Start a registered task at the server
  Start {
    #[arg(long)]
    task_id: String,

    /// Extra arguments passed through to the task process
    #[arg(long, default_value = "")]
    arguments: String,
  },

  /// Stop a running task
  Stop {
    #[arg(long)]
    task_id: String,
  },
}

#[derive(Subcommand)]
enum UserCommand {
  /// Fetch a user record
  Info {
    #[arg(long)]
    user_id: String,
  },
}

#[derive(Subcommand)]
enum FilesCommand {
  /// Upload task files as a multipart request
  Upload {
    #[arg(long)]
    task_id: String,

    /// Paths of the files to upload
    files: Vec<PathBuf>,
  },
}

/// Renders detail tables as two aligned columns on stdout.
struct StdoutSink;

impl ResultSink for StdoutSink {
  fn present(&mut self, title: &str, rows: &[(String, String)]) {
    println!("{title}");
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
      println!("  {label:<width$}  {value}");
    }
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  // Resolve the endpoint before anything else; a broken config document
  // aborts here instead of sending requests to an unresolved host.
  let endpoint = match &cli.host_config {
    Some(path) => EndpointConfig::load(path)
      .with_context(|| format!("failed to resolve endpoint from {}", path.display()))?,
    None => EndpointConfig::default(),
  };
  let config = ClientConfig::new(endpoint);

  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(run(cli, config))
}

async fn run(cli: Cli, config: ClientConfig) -> Result<()> {
  let client = RpcClient::new(&config)?;

  match cli.command {
    Commands::Task { action } => match action {
      TaskCommand::Create {
        task_id,
        host,
        port,
        username,
        password,
        files_paths,
        selection_criteria,
        server_arguments,
        client_arguments,
        tags,
      } => {
        let fields = fields(&[
          ("task_id", task_id),
          ("host", host),
          ("port", port),
          ("username", username),
          ("password", password),
          ("files_paths", files_paths),
          ("selection_criteria", selection_criteria),
          ("server_arguments", server_arguments),
          ("client_arguments", client_arguments),
          ("tags", tags),
        ]);
        create_task(&client, &cli.schema_dir, fields).await
      }
      TaskCommand::Get { task_id } => get_task(&client, task_id).await,
      TaskCommand::Start { task_id, arguments } => {
        start_task(&client, task_id, arguments).await
      }
      TaskCommand::Stop { task_id } => stop_task(&client, task_id).await,
    },
    Commands::User { action } => match action {
      UserCommand::Info { user_id } => get_user(&client, user_id).await,
    },
    Commands::Files { action } => match action {
      FilesCommand::Upload { task_id, files } => upload_files(&client, task_id, files).await,
    },
  }
}

fn fields(pairs: &[(&str, String)]) -> HashMap<String, String> {
  pairs
    .iter()
    .map(|(name, value)| (name.to_string(), value.clone()))
    .collect()
}

async fn create_task(
  client: &RpcClient,
  schema_dir: &Path,
  fields: HashMap<String, String>,
) -> Result<()> {
  let request = cloudtask_proto::create_task(&fields);
  SchemaValidator::new(schema_dir).validate(CREATE_TASK_SCHEMA, &request)?;

  match client.create_task(&request).await? {
    Outcome::Success(_) => {
      println!("Task created with success.");
      Ok(())
    }
    Outcome::Fatal => bail!("Fatal error: invalid request"),
    Outcome::Conflict(ConflictKind::DuplicateId) => {
      bail!("A task with this name is alredy registered")
    }
    _ => bail!("Internal server error."),
  }
}

async fn get_task(client: &RpcClient, task_id: String) -> Result<()> {
  let source = fields(&[("task_id", task_id)]);
  let request = cloudtask_proto::get_task_by_id(&source);

  match client.get_task_by_id(&request).await? {
    Outcome::Success(payload) => {
      StdoutSink.present("Task Details", &detail_rows(&payload));
      Ok(())
    }
    Outcome::Fatal => bail!("Invalid request (fatal)"),
    Outcome::NotRegistered => bail!("This task is not registered"),
    Outcome::Unknown { status, .. } => bail!("Error {status}"),
    Outcome::Conflict(_) => bail!("Error 500"),
  }
}

async fn get_user(client: &RpcClient, user_id: String) -> Result<()> {
  let source = fields(&[("user_id", user_id)]);
  let request = cloudtask_proto::get_user_info(&source);

  match client.get_user_info(&request).await? {
    Outcome::Success(payload) => {
      StdoutSink.present("User Details", &detail_rows(&payload));
      Ok(())
    }
    Outcome::Fatal => bail!("Invalid request (fatal)"),
    Outcome::NotRegistered => bail!("This user is not registered"),
    Outcome::Unknown { status, .. } => bail!("Error {status}"),
    Outcome::Conflict(_) => bail!("Error 500"),
  }
}

async fn start_task(client: &RpcClient, task_id: String, arguments: String) -> Result<()> {
  let source = fields(&[("task_id", task_id), ("arguments", arguments)]);
  let request = cloudtask_proto::start_task(&source);

  match client.start_task(&request).await? {
    Outcome::Success(_) => {
      println!("Task started at the server");
      Ok(())
    }
    Outcome::Fatal => bail!("Invalid request (fatal)"),
    Outcome::Conflict(ConflictKind::FilesMissing) => {
      bail!("Task files not found. Upload them before starting")
    }
    Outcome::Conflict(ConflictKind::AlreadyStarted) => bail!("Task alredy started"),
    Outcome::NotRegistered => bail!("Task not registered"),
    _ => bail!("Unknown error"),
  }
}

async fn stop_task(client: &RpcClient, task_id: String) -> Result<()> {
  let source = fields(&[("task_id", task_id)]);
  let request = cloudtask_proto::stop_task(&source);

  match client.stop_task(&request).await? {
    Outcome::Success(_) => {
      println!("Task stopped at the server");
      Ok(())
    }
    Outcome::Fatal => bail!("Invalid request (fatal)"),
    Outcome::Conflict(ConflictKind::NotStarted) => bail!("Task not started"),
    Outcome::Conflict(ConflictKind::AlreadyStopped) => bail!("Task alredy stopped"),
    Outcome::NotRegistered => bail!("Task not registered"),
    _ => bail!("Unknown error"),
  }
}

async fn upload_files(client: &RpcClient, task_id: String, paths: Vec<PathBuf>) -> Result<()> {
  let mut files = Vec::with_capacity(paths.len());
  for path in paths {
    let bytes = tokio::fs::read(&path)
      .await
      .with_context(|| format!("failed to read file: {}", path.display()))?;
    let name = path
      .file_name()
      .map(|n| n.to_string_lossy().to_string())
      .unwrap_or_else(|| "file".to_string());
    files.push(FilePayload { name, bytes });
  }

  match client.upload_files(UploadFiles { task_id, files }).await? {
    Outcome::Success(_) => {
      println!("Files uploaded");
      Ok(())
    }
    _ => bail!("Invalid request"),
  }
}
