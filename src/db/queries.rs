//! Read-only views over the task store.
//!
//! Nothing here mutates the collection or touches the file. Results keep the
//! storage order, and a query without matches yields an empty list.

use super::tasks::Tasks;
use crate::libs::task::{Task, TaskFilter};

impl Tasks {
    pub fn fetch(&self, filter: &TaskFilter) -> Vec<Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks, or only those whose category equals `category` ignoring case.
    pub fn list_all(&self, category: Option<&str>) -> Vec<Task> {
        match category.filter(|c| !c.is_empty()) {
            Some(category) => self.fetch(&TaskFilter::Category(category.to_string())),
            None => self.fetch(&TaskFilter::All),
        }
    }

    pub fn find_by_keyword(&self, query: &str) -> Vec<Task> {
        self.fetch(&TaskFilter::Keyword(query.to_string()))
    }

    /// Substring match on the category, unlike the exact match of [`Tasks::list_all`].
    pub fn find_by_category(&self, fragment: &str) -> Vec<Task> {
        self.fetch(&TaskFilter::CategoryContains(fragment.to_string()))
    }

    pub fn find_by_status(&self, fragment: &str) -> Vec<Task> {
        self.fetch(&TaskFilter::StatusContains(fragment.to_string()))
    }
}
