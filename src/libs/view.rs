use super::config::ViewConfig;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], view: &ViewConfig) {
        Self::table(tasks, view).printstd();
    }

    pub fn table(tasks: &[Task], view: &ViewConfig) -> Table {
        let mut table = Table::new();

        if view.show_description {
            table.add_row(row!["ID", "TITLE", "DESCRIPTION", "CATEGORY", "DUE DATE", "PRIORITY", "STATUS"]);
            for task in tasks {
                table.add_row(row![
                    task.id,
                    task.title,
                    task.description,
                    task.category,
                    task.due_date,
                    task.priority,
                    Self::status(task)
                ]);
            }
        } else {
            table.add_row(row!["ID", "TITLE", "CATEGORY", "DUE DATE", "PRIORITY", "STATUS"]);
            for task in tasks {
                table.add_row(row![task.id, task.title, task.category, task.due_date, task.priority, Self::status(task)]);
            }
        }

        table
    }

    fn status(task: &Task) -> String {
        if task.is_completed() {
            format!("✔ {}", task.status)
        } else {
            task.status.to_string()
        }
    }
}
