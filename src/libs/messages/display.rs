//! Display implementation for application messages.
//!
//! All user-facing text is defined here, in one place, so that commands only
//! deal with typed [`Message`] values and the wording stays consistent.

use super::types::Message;
use crate::libs::task::{Priority, Status};
use std::fmt::{Display, Formatter, Result};

fn options<T: Display>(values: &[T]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id, title) => format!("Task '{}' added with ID {}.", title, id),
            Message::TaskUpdated(id) => format!("Task {} updated.", id),
            Message::TaskMarkedCompleted(id) => format!("Task {} marked as completed.", id),
            Message::TaskDeleted(title) => format!("Task '{}' deleted.", title),
            Message::TaskNotFound(id) => format!("Task with ID {} not found.", id),
            Message::TasksDeletedByCategory(category, count) => format!("Deleted {} task(s) in category '{}'.", count, category),
            Message::NoTasksInCategory(category) => format!("No tasks in category '{}'.", category),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksInCategoryHeader(category) => format!("Tasks in category '{}':", category),
            Message::TasksCount(count) => format!("Total: {}", count),
            Message::NoTasks => "No tasks.".to_string(),

            // === SEARCH MESSAGES ===
            Message::SearchResultsHeader(query) => format!("Search results for '{}':", query),
            Message::NoTasksForKeyword(query) => format!("No tasks match the keyword '{}'.", query),
            Message::NoTasksForCategory(fragment) => format!("No tasks with a category matching '{}'.", fragment),
            Message::NoTasksForStatus(fragment) => format!("No tasks with a status matching '{}'.", fragment),
            Message::SearchByKeyword => "By keyword (title or description)".to_string(),
            Message::SearchByCategory => "By category".to_string(),
            Message::SearchByStatus => "By status".to_string(),
            Message::SelectSearchMode => "Search tasks".to_string(),

            // === PROMPTS ===
            Message::PromptTitle => "Title".to_string(),
            Message::PromptDescription => "Description".to_string(),
            Message::PromptCategory => "Category".to_string(),
            Message::PromptDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptPriority => "Priority".to_string(),
            Message::PromptNewTitle => "New title (leave empty to keep)".to_string(),
            Message::PromptNewDescription => "New description (leave empty to keep)".to_string(),
            Message::PromptNewCategory => "New category (leave empty to keep)".to_string(),
            Message::PromptNewDueDate => "New due date, YYYY-MM-DD (leave empty to keep)".to_string(),
            Message::PromptNewPriority => format!("New priority ({})", options(&Priority::ALL)),
            Message::PromptNewStatus => format!("New status ({})", options(&Status::ALL)),
            Message::PromptTaskIdToEdit => "ID of the task to edit".to_string(),
            Message::PromptTaskIdToComplete => "ID of the task to mark as completed".to_string(),
            Message::PromptTaskIdToDelete => "ID of the task to delete".to_string(),
            Message::PromptCategoryToList => "Category".to_string(),
            Message::PromptCategoryToDelete => "Category to delete".to_string(),
            Message::PromptSearchQuery => "Search query".to_string(),
            Message::PromptSearchCategory => "Category to search for".to_string(),
            Message::PromptSearchStatus => "Status to search for".to_string(),
            Message::KeepCurrentValue => "(keep current)".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::ConfirmDeleteCategory(category, count) => format!("Delete {} task(s) in category '{}'?", count, category),
            Message::OperationCancelled => "Operation cancelled.".to_string(),

            // === MENU ===
            Message::MenuHeader => "--------------- Menu ---------------".to_string(),
            Message::MenuPrompt => "Choose an action".to_string(),
            Message::MenuListAll => "View all tasks".to_string(),
            Message::MenuListByCategory => "View tasks by category".to_string(),
            Message::MenuAdd => "Add a task".to_string(),
            Message::MenuEdit => "Edit a task".to_string(),
            Message::MenuMarkCompleted => "Mark a task as completed".to_string(),
            Message::MenuDelete => "Delete a task".to_string(),
            Message::MenuDeleteByCategory => "Delete tasks by category".to_string(),
            Message::MenuSearch => "Search tasks".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::Goodbye => "Bye!".to_string(),

            // === STORAGE MESSAGES ===
            Message::StorageMissing(path) => format!("Task file {} not found, starting with an empty list.", path),
            Message::StorageCorrupt(path) => format!("Task file {} is damaged or contains invalid data, starting with an empty list.", path),
            Message::StorageLocation(path) => format!("Tasks are stored in {}", path),
            Message::StorageFailed(reason) => format!("Storage error: {}", reason),

            // === VALIDATION MESSAGES ===
            Message::ValidationFailed(reason) => format!("Invalid input: {}", reason),
            Message::FieldMustNotBeEmpty => "The value must not be empty".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleView => "Display settings".to_string(),
            Message::SelectConfigModules => "Select settings to configure".to_string(),
            Message::PromptTasksFile => "Path to the task file".to_string(),
            Message::PromptShowDescription => "Show the description column in task tables?".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting tasks as {}...", format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::NothingToExport => "There are no tasks to export.".to_string(),
        };
        write!(f, "{}", text)
    }
}
