use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::task::Direction;

#[derive(Parser)]
#[command(name = "dash", about = concat!("dash v", env!("CARGO_PKG_VERSION"), " - categories, tasks, and nothing else"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show categories and their tasks (the default)
    List(ListArgs),
    /// Show completion counts
    Stats,
    /// Add or delete categories
    Category(CategoryCmd),
    /// Add a task to the end of a category
    Add(AddArgs),
    /// Toggle a task between open and completed
    Toggle(TaskRef),
    /// Delete a task
    Rm(TaskRef),
    /// Move a task one place up or down within its category
    Mv(MvArgs),
    /// Show data that could not be saved or read
    Recovery(RecoveryArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show this category (by id)
    pub category: Option<String>,
}

#[derive(Args)]
pub struct CategoryCmd {
    #[command(subcommand)]
    pub action: CategoryAction,
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Create a category with a random color
    Add(CategoryAddArgs),
    /// Delete a category and all of its tasks
    Rm(CategoryRmArgs),
}

#[derive(Args)]
pub struct CategoryAddArgs {
    /// Category name
    pub name: String,
}

#[derive(Args)]
pub struct CategoryRmArgs {
    /// Category id
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Category id
    pub category: String,
    /// Task text
    pub text: String,
}

#[derive(Args)]
pub struct TaskRef {
    /// Category id
    pub category: String,
    /// Task id
    pub task: String,
}

#[derive(Args)]
pub struct MvArgs {
    /// Category id
    pub category: String,
    /// Task id
    pub task: String,
    /// Which way to move the task
    #[arg(value_enum)]
    pub direction: MoveDirection,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MoveDirection {
    Up,
    Down,
}

impl From<MoveDirection> for Direction {
    fn from(d: MoveDirection) -> Self {
        match d {
            MoveDirection::Up => Direction::Up,
            MoveDirection::Down => Direction::Down,
        }
    }
}

#[derive(Args)]
pub struct RecoveryArgs {
    /// Maximum number of entries to show
    #[arg(long, default_value = "10")]
    pub limit: usize,
}
