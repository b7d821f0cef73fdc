//! Persistence layer for the task list.
//!
//! Tasks live in a single JSON file that is read once when the store is
//! opened and rewritten in full after every change. There is no incremental
//! update, index or journal: the collection is small enough to keep in memory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zadachi::db::tasks::Tasks;
//! use zadachi::libs::task::NewTask;
//!
//! let mut tasks = Tasks::open("tasks.json")?;
//! let task = NewTask::new("Review code", "Check PR #123", "Work", "2025-01-15", "высокий")?;
//! let created = tasks.add(task)?;
//! tasks.mark_completed(created.id)?;
//! println!("{} task(s) in {}", tasks.len(), tasks.path().display());
//! # Ok::<(), zadachi::libs::error::StoreError>(())
//! ```

/// Read-only queries: category, keyword and status filters.
pub mod queries;

/// The task store: loading, saving, id assignment and mutations.
pub mod tasks;
