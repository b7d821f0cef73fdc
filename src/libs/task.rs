use super::error::StoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format accepted for due dates (ISO 8601 calendar date).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "низкий", alias = "low")]
    Low,
    #[serde(rename = "средний", alias = "medium")]
    Medium,
    #[serde(rename = "высокий", alias = "high")]
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "низкий",
            Priority::Medium => "средний",
            Priority::High => "высокий",
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == value || p.alias() == value)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
                StoreError::validation("priority", format!("'{}' is not one of: {}", s.trim(), allowed.join(", ")))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "не выполнена", alias = "not completed")]
    NotCompleted,
    #[serde(rename = "выполнена", alias = "completed")]
    Completed,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::NotCompleted, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotCompleted => "не выполнена",
            Status::Completed => "выполнена",
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            Status::NotCompleted => "not completed",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        Status::ALL
            .into_iter()
            .find(|st| st.as_str() == value || st.alias() == value)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Status::ALL.iter().map(|st| st.as_str()).collect();
                StoreError::validation("status", format!("'{}' is not one of: {}", s.trim(), allowed.join(", ")))
            })
    }
}

pub fn parse_due_date(value: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(value.trim(), DUE_DATE_FORMAT)
        .map_err(|e| StoreError::validation("due date", format!("'{}' is not a YYYY-MM-DD date ({})", value.trim(), e)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Category: {}, Due Date: {}, Priority: {}, Status: {}",
            self.id, self.title, self.category, self.due_date, self.priority, self.status
        )
    }
}

/// A validated task waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) category: String,
    pub(crate) due_date: NaiveDate,
    pub(crate) priority: Priority,
}

impl NewTask {
    /// Validates raw input. Every field is required.
    pub fn new(title: &str, description: &str, category: &str, due_date: &str, priority: &str) -> Result<Self, StoreError> {
        Ok(Self {
            title: required("title", title)?,
            description: required("description", description)?,
            category: required("category", category)?,
            due_date: parse_due_date(&required("due date", due_date)?)?,
            priority: required("priority", priority)?.parse()?,
        })
    }

    pub(crate) fn into_task(self, id: u32) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            due_date: self.due_date,
            priority: self.priority,
            status: Status::NotCompleted,
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String, StoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StoreError::validation(field, "must not be empty"));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Partial update of a task. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl TaskUpdate {
    /// Builds an update from raw prompt input where a blank string means "keep".
    pub fn from_input(
        title: &str,
        description: &str,
        category: &str,
        due_date: &str,
        priority: &str,
        status: &str,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            title: optional(title).map(str::to_string),
            description: optional(description).map(str::to_string),
            category: optional(category).map(str::to_string),
            due_date: optional(due_date).map(parse_due_date).transpose()?,
            priority: optional(priority).map(Priority::from_str).transpose()?,
            status: optional(status).map(Status::from_str).transpose()?,
        })
    }

    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.as_deref().and_then(optional).is_none()
            && self.description.as_deref().and_then(optional).is_none()
            && self.category.as_deref().and_then(optional).is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }

    /// Applies the update in place and reports whether anything changed.
    pub(crate) fn apply(&self, task: &mut Task) -> bool {
        let before = task.clone();

        // Blank text counts as "no change" so a title can never become empty.
        if let Some(title) = self.title.as_deref().and_then(optional) {
            task.title = title.to_string();
        }
        if let Some(description) = self.description.as_deref().and_then(optional) {
            task.description = description.to_string();
        }
        if let Some(category) = self.category.as_deref().and_then(optional) {
            task.category = category.to_string();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(status) = self.status {
            task.status = status;
        }

        *task != before
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    /// Case-insensitive exact category match.
    Category(String),
    /// Case-insensitive substring of title or description.
    Keyword(String),
    /// Case-insensitive substring of category.
    CategoryContains(String),
    /// Case-insensitive substring of the status text.
    StatusContains(String),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Category(category) => task.category.to_lowercase() == category.to_lowercase(),
            TaskFilter::Keyword(query) => {
                let query = query.to_lowercase();
                task.title.to_lowercase().contains(&query) || task.description.to_lowercase().contains(&query)
            }
            TaskFilter::CategoryContains(fragment) => task.category.to_lowercase().contains(&fragment.to_lowercase()),
            TaskFilter::StatusContains(fragment) => task.status.as_str().contains(&fragment.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Task {
        Task {
            id: 1,
            title: "Купить молоко".to_string(),
            description: "Зайти в магазин".to_string(),
            category: "Категория 1".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            priority: Priority::Low,
            status: Status::NotCompleted,
        }
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("высокий".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" Medium ".parse::<Priority>().unwrap(), Priority::Medium);
        assert!(matches!("urgent".parse::<Priority>(), Err(StoreError::Validation { field: "priority", .. })));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("выполнена".parse::<Status>().unwrap(), Status::Completed);
        assert_eq!("Not Completed".parse::<Status>().unwrap(), Status::NotCompleted);
        assert!("done".parse::<Status>().is_err());
    }

    #[test]
    fn test_due_date_validation() {
        assert_eq!(parse_due_date("2025-01-01").unwrap(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert!(parse_due_date("2025-02-30").is_err());
        assert!(parse_due_date("01.01.2025").is_err());
    }

    #[test]
    fn test_new_task_requires_all_fields() {
        assert!(NewTask::new("Title", "Description", "Home", "2025-01-01", "низкий").is_ok());
        let err = NewTask::new("Title", "  ", "Home", "2025-01-01", "низкий").unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "description", .. }));
    }

    #[test]
    fn test_update_from_blank_input_is_empty() {
        let update = TaskUpdate::from_input("", " ", "", "", "", "").unwrap();
        assert!(update.is_empty());

        let mut task = sample();
        assert!(!update.apply(&mut task));
        assert_eq!(task, sample());
    }

    #[test]
    fn test_update_rejects_bad_values() {
        assert!(TaskUpdate::from_input("", "", "", "tomorrow", "", "").is_err());
        assert!(TaskUpdate::from_input("", "", "", "", "", "maybe").is_err());
    }

    #[test]
    fn test_filters() {
        let task = sample();
        assert!(TaskFilter::Category("категория 1".to_string()).matches(&task));
        assert!(!TaskFilter::Category("категория".to_string()).matches(&task));
        assert!(TaskFilter::CategoryContains("ГОРИЯ".to_string()).matches(&task));
        assert!(!TaskFilter::CategoryContains("tego".to_string()).matches(&task));
        assert!(TaskFilter::Keyword("МАГАЗИН".to_string()).matches(&task));
        assert!(TaskFilter::StatusContains("выполнена".to_string()).matches(&task));
        assert!(TaskFilter::StatusContains("не".to_string()).matches(&task));
    }
}
