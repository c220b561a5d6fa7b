use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use pipeline_domain::{AssigneeChoice, FilterSpec, Priority, PriorityChoice};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pipeline")]
#[command(about = "A sales pipeline kanban board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed JSON file (defaults to the built-in sample pipeline)
    #[arg(long, value_name = "FILE", env = "PIPELINE_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Name recorded on notices
    #[arg(long, env = "PIPELINE_USER", default_value = "anonymous", global = true)]
    pub user: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the board, optionally filtered
    Show(FilterArgs),
    /// Move items to the end of columns, in order
    Move {
        #[arg(value_name = "ITEM=COLUMN", required = true, value_parser = parse_move)]
        moves: Vec<(String, String)>,
    },
    /// Drag an item onto a column through the drag controller
    Drag(DragArgs),
    /// Add a deal to a column
    Add(AddArgs),
    /// List distinct assignees
    Assignees,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct FilterArgs {
    /// all, low, medium or high
    #[arg(long, default_value = "all")]
    pub priority: PriorityChoice,
    /// all, or an assignee name
    #[arg(long, default_value = "all")]
    pub assignee: AssigneeChoice,
}

impl FilterArgs {
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec::new()
            .with_priority(self.priority)
            .with_assignee(self.assignee.clone())
    }
}

#[derive(Args)]
pub struct DragArgs {
    #[arg(long)]
    pub item: String,
    /// Column to drop onto
    #[arg(long)]
    pub to: String,
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub column: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub assignee: Option<String>,
    #[arg(long)]
    pub priority: Option<Priority>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub due_date: Option<NaiveDate>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

fn parse_move(s: &str) -> Result<(String, String), String> {
    let (item, column) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid move '{}': expected ITEM=COLUMN", s))?;
    let (item, column) = (item.trim(), column.trim());
    if item.is_empty() || column.is_empty() {
        return Err(format!("invalid move '{}': expected ITEM=COLUMN", s));
    }
    Ok((item.to_string(), column.to_string()))
}
