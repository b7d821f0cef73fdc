//! Core library modules for the zadachi application.
//!
//! ## Features
//!
//! - **Domain**: task records, priorities, statuses, partial updates and filters
//! - **Infrastructure**: configuration, data directory resolution, messaging
//! - **Presentation**: table rendering and export
//!
//! ## Usage
//!
//! ```rust
//! use zadachi::libs::task::{NewTask, TaskFilter};
//!
//! let task = NewTask::new("Implement feature", "Add user authentication", "Work", "2025-01-15", "high")?;
//! let filter = TaskFilter::Keyword("auth".to_string());
//! # let _ = (task, filter);
//! # Ok::<(), zadachi::libs::error::StoreError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod messages;
pub mod task;
pub mod view;
