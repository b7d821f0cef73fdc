//! # Zadachi - a single-user task list
//!
//! Keeps tasks with a title, description, category, due date, priority and
//! completion status in a JSON file, and manages them from an interactive
//! menu or with direct subcommands.
//!
//! ## Features
//!
//! - **Task Store**: add, edit, complete and delete tasks; every change is saved at once
//! - **Search**: by keyword, category or status
//! - **Export**: CSV, JSON and Excel snapshots
//! - **Configuration**: choose where the task file lives
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zadachi::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
