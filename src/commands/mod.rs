pub mod export;
pub mod find;
pub mod init;
pub mod interactive;
pub mod list;
pub mod task;

use crate::{
    db::tasks::Tasks,
    libs::{
        config::{Config, ViewConfig},
        error::StoreError,
        messages::Message,
        task::Task,
        view::View,
    },
    msg_debug, msg_error, msg_print, msg_warning,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show tasks, optionally only one category")]
    List(list::ListArgs),
    #[command(about = "Add a task")]
    Add(task::AddArgs),
    #[command(about = "Edit a task")]
    Edit(task::EditArgs),
    #[command(about = "Mark a task as completed")]
    Done { id: u32 },
    #[command(about = "Delete a task")]
    Delete {
        id: u32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    #[command(about = "Delete every task in a category")]
    Purge {
        category: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    #[command(about = "Search tasks by keyword, category or status")]
    Find(find::FindArgs),
    #[command(about = "Export tasks to CSV, JSON or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Parses the command line and runs the selected command.
    /// Without a subcommand the interactive menu is started.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        let command = match cli.command {
            Some(Commands::Init(args)) => return init::cmd(args),
            command => command,
        };

        let config = Config::read()?;
        let view = config.view();
        let mut tasks = open_store(&config, cli.file)?;

        match command {
            None | Some(Commands::Init(_)) => interactive::cmd(&mut tasks, &view),
            Some(Commands::List(args)) => list::cmd(args, &tasks, &view),
            Some(Commands::Add(args)) => task::add(args, &mut tasks),
            Some(Commands::Edit(args)) => task::edit(args, &mut tasks, &view),
            Some(Commands::Done { id }) => task::done(id, &mut tasks),
            Some(Commands::Delete { id, yes }) => task::delete(id, yes, &mut tasks),
            Some(Commands::Purge { category, yes }) => task::delete_by_category(&category, yes, &mut tasks),
            Some(Commands::Find(args)) => find::cmd(args, &tasks, &view),
            Some(Commands::Export(args)) => export::cmd(args, &tasks),
        }
    }
}

/// Opens the task store, warning when it had to start from an empty list.
pub fn open_store(config: &Config, file: Option<PathBuf>) -> Result<Tasks> {
    let path = config.tasks_file(file)?;
    let tasks = Tasks::open(path)?;

    msg_debug!(Message::StorageLocation(tasks.path().display().to_string()));
    if let Some(issue) = tasks.recovered_from() {
        msg_warning!(Message::from(issue));
    }
    Ok(tasks)
}

/// Reports validation and "not found" errors to the user and turns them into
/// `None`. Storage failures are passed on.
pub(crate) fn recoverable<T>(result: Result<T, StoreError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e @ (StoreError::Validation { .. } | StoreError::NotFound(_))) => {
            msg_error!(Message::from(&e));
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Prints a header, the task table and the count, or `empty` when there is nothing to show.
pub(crate) fn show(tasks: &[Task], header: Message, empty: Message, view: &ViewConfig) {
    if tasks.is_empty() {
        msg_print!(empty);
        return;
    }
    msg_print!(header, true);
    View::tasks(tasks, view);
    msg_print!(Message::TasksCount(tasks.len()));
}
