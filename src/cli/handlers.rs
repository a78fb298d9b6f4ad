use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::controller::DashboardController;
use crate::io::config_io;
use crate::io::lock::DataDirLock;
use crate::io::persist::Persistence;
use crate::io::recovery::{self, RecoveryEntry, RecoveryKind};
use crate::io::storage::FileStorage;
use crate::model::config::DashboardConfig;
use crate::model::task::Direction;

/// Errors raised by the front end itself (bad input rather than bad state)
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),
    #[error("cannot resolve data directory '{path}': {source}")]
    DataDir {
        path: String,
        source: std::io::Error,
    },
    #[error("category not found: {0}")]
    CategoryNotFound(String),
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// An open dashboard plus the lock that keeps other `dash` processes out
/// until the command finishes.
struct Session {
    controller: DashboardController<FileStorage>,
    config: DashboardConfig,
    _lock: DataDirLock,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    match cli.command.unwrap_or(Commands::List(ListArgs { category: None })) {
        Commands::List(args) => cmd_list(&data_dir, args, json),
        Commands::Stats => cmd_stats(&data_dir, json),
        Commands::Category(cmd) => match cmd.action {
            CategoryAction::Add(args) => cmd_category_add(&data_dir, args, json),
            CategoryAction::Rm(args) => cmd_category_rm(&data_dir, args),
        },
        Commands::Add(args) => cmd_add(&data_dir, args, json),
        Commands::Toggle(args) => cmd_toggle(&data_dir, args),
        Commands::Rm(args) => cmd_rm(&data_dir, args),
        Commands::Mv(args) => cmd_mv(&data_dir, args),
        Commands::Recovery(args) => cmd_recovery(&data_dir, args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolve_data_dir(flag: Option<&str>) -> Result<PathBuf, CliError> {
    let Some(dir) = flag else {
        return Ok(config_io::default_data_dir());
    };
    let path = PathBuf::from(dir);
    if path.is_absolute() {
        return Ok(path);
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&path))
        .map_err(|e| CliError::DataDir {
            path: dir.to_string(),
            source: e,
        })
}

fn open_session(data_dir: &Path) -> Result<Session, Box<dyn std::error::Error>> {
    let lock = DataDirLock::acquire_default(data_dir)?;
    let config = config_io::read_config(data_dir)?;
    let persistence = Persistence::new(FileStorage::new(data_dir))
        .with_key(config.storage.key.clone())
        .with_recovery_dir(data_dir);
    let controller = DashboardController::open(persistence);
    if controller.seeded_defaults() {
        tracing::info!(dir = %data_dir.display(), "created default dashboard");
    }
    Ok(Session {
        controller,
        config,
        _lock: lock,
    })
}

/// Trim user input and reject it if nothing is left
fn non_empty<'a>(input: &'a str, what: &'static str) -> Result<&'a str, CliError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyInput(what))
    } else {
        Ok(trimmed)
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn warn_missing_task(category: &str, task: &str) {
    eprintln!("warning: no task {} in category {}", task, category);
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(data_dir: &Path, args: ListArgs, json: bool) -> CmdResult {
    let session = open_session(data_dir)?;
    let dashboard = session.controller.dashboard();

    match args.category {
        Some(id) => {
            let category = dashboard
                .find_category(&id)
                .ok_or(CliError::CategoryNotFound(id))?;
            if json {
                print_json(&category_to_json(category))
            } else {
                println!("{}", format_category(category));
                Ok(())
            }
        }
        None if json => print_json(&dashboard_to_json(dashboard)),
        None => {
            println!("{}", format_dashboard(dashboard));
            Ok(())
        }
    }
}

fn cmd_stats(data_dir: &Path, json: bool) -> CmdResult {
    let session = open_session(data_dir)?;
    let dashboard = session.controller.dashboard();
    if json {
        print_json(&stats_report_json(dashboard))
    } else {
        println!("{}", format_stats(dashboard));
        Ok(())
    }
}

fn cmd_recovery(data_dir: &Path, args: RecoveryArgs, json: bool) -> CmdResult {
    let entries = recovery::read_recovery_entries(data_dir, Some(args.limit));
    if json {
        let values: Vec<serde_json::Value> = entries.iter().map(|e| e.to_json()).collect();
        return print_json(&values);
    }
    if entries.is_empty() {
        println!("recovery log is empty");
        return Ok(());
    }
    for entry in &entries {
        print!("{}", entry.to_markdown());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_category_add(data_dir: &Path, args: CategoryAddArgs, json: bool) -> CmdResult {
    let name = non_empty(&args.name, "category name")?;
    let mut session = open_session(data_dir)?;
    let id = session.controller.add_category(name);

    if json {
        let category = session
            .controller
            .dashboard()
            .find_category(&id)
            .ok_or_else(|| CliError::CategoryNotFound(id.clone()))?;
        return print_json(&category_to_json(category));
    }
    println!("{}", id);
    Ok(())
}

fn cmd_category_rm(data_dir: &Path, args: CategoryRmArgs) -> CmdResult {
    let mut session = open_session(data_dir)?;

    let Some(category) = session.controller.dashboard().find_category(&args.id) else {
        eprintln!("warning: no category with id {}", args.id);
        return Ok(());
    };

    if !args.yes && session.config.ui.confirm_delete {
        eprint!(
            "Delete category \"{}\" and its {} tasks? [y/N] ",
            category.name,
            category.tasks.len()
        );
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("cancelled");
            return Ok(());
        }
    }

    if let Some(removed) = session.controller.delete_category(&args.id) {
        session.controller.persistence().record(
            RecoveryEntry::new(
                RecoveryKind::Delete,
                format!("category {} deleted", removed.id),
            )
            .field("Name", removed.name.clone())
            .field("Tasks", removed.tasks.len().to_string())
            .body(serde_json::to_string_pretty(&removed)?),
        );
        println!("deleted category \"{}\"", removed.name);
    }
    Ok(())
}

fn cmd_add(data_dir: &Path, args: AddArgs, json: bool) -> CmdResult {
    let text = non_empty(&args.text, "task text")?;
    let mut session = open_session(data_dir)?;

    let Some(task_id) = session.controller.add_task(&args.category, text) else {
        eprintln!("warning: no category with id {}", args.category);
        return Ok(());
    };

    if json {
        let task = session
            .controller
            .dashboard()
            .find_category(&args.category)
            .and_then(|c| c.find_task(&task_id))
            .ok_or_else(|| CliError::CategoryNotFound(args.category.clone()))?;
        return print_json(&task_to_json(task));
    }
    println!("{}", task_id);
    Ok(())
}

fn cmd_toggle(data_dir: &Path, args: TaskRef) -> CmdResult {
    let mut session = open_session(data_dir)?;
    match session.controller.toggle_task(&args.category, &args.task) {
        Some(true) => println!("{} completed", args.task),
        Some(false) => println!("{} reopened", args.task),
        None => warn_missing_task(&args.category, &args.task),
    }
    Ok(())
}

fn cmd_rm(data_dir: &Path, args: TaskRef) -> CmdResult {
    let mut session = open_session(data_dir)?;
    match session.controller.delete_task(&args.category, &args.task) {
        Some(task) => println!("deleted \"{}\"", task.text),
        None => warn_missing_task(&args.category, &args.task),
    }
    Ok(())
}

fn cmd_mv(data_dir: &Path, args: MvArgs) -> CmdResult {
    let mut session = open_session(data_dir)?;
    let direction: Direction = args.direction.into();

    let exists = session
        .controller
        .dashboard()
        .find_category(&args.category)
        .and_then(|c| c.find_task(&args.task))
        .is_some();
    if !exists {
        warn_missing_task(&args.category, &args.task);
        return Ok(());
    }

    if session
        .controller
        .move_task(&args.category, &args.task, direction)
    {
        println!("moved {} {}", args.task, direction);
    } else {
        println!("{} is already at the {}", args.task, edge_name(direction));
    }
    Ok(())
}

fn edge_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "top",
        Direction::Down => "bottom",
    }
}
