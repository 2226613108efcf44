use clap::{Args, Subcommand};

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task.
    Create(TaskCreateArgs),
    /// List tasks by due date and time.
    List {
        /// Only pending tasks
        #[arg(long)]
        pending: bool,
    },
    /// Get a task by ID.
    Get { id: String },
    /// Update task fields.
    Update(TaskUpdateArgs),
    /// Mark a task completed.
    Complete { id: String },
    /// Move a completed task back to pending.
    Reopen { id: String },
    /// Delete a task.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct TaskCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub due_date: String,
    /// HH:MM
    #[arg(long)]
    pub due_time: Option<String>,
    /// health, feeding, weighing, maintenance, financial, other
    #[arg(long, default_value = "other")]
    pub category: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TaskUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub due_date: Option<String>,
    #[arg(long, conflicts_with = "clear_due_time")]
    pub due_time: Option<String>,
    #[arg(long)]
    pub clear_due_time: bool,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}
