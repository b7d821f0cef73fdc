//! Task mutations: add, edit, mark completed, delete and delete by category.
//!
//! Values given on the command line are used as-is; anything missing is asked
//! for interactively. Validation and "not found" problems are reported and the
//! command ends normally. Storage failures are returned as errors.

use super::recoverable;
use crate::{
    db::tasks::Tasks,
    libs::{
        config::ViewConfig,
        messages::Message,
        task::{parse_due_date, NewTask, Priority, Status, TaskUpdate},
        view::View,
    },
    msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args, Default)]
pub struct AddArgs {
    #[arg(short, long)]
    title: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(short, long)]
    category: Option<String>,
    /// Due date, YYYY-MM-DD
    #[arg(long)]
    due: Option<String>,
    /// низкий, средний, высокий (or low, medium, high)
    #[arg(short, long)]
    priority: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    id: u32,
    #[arg(short, long)]
    title: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(short, long)]
    category: Option<String>,
    #[arg(long)]
    due: Option<String>,
    #[arg(short, long)]
    priority: Option<String>,
    /// не выполнена, выполнена (or not completed, completed)
    #[arg(short, long)]
    status: Option<String>,
}

impl EditArgs {
    /// Arguments for an interactive edit of task `id`.
    pub fn interactive(id: u32) -> Self {
        Self {
            id,
            title: None,
            description: None,
            category: None,
            due: None,
            priority: None,
            status: None,
        }
    }

    fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.category.is_some()
            || self.due.is_some()
            || self.priority.is_some()
            || self.status.is_some()
    }
}

pub fn add(args: AddArgs, tasks: &mut Tasks) -> Result<()> {
    let title = args.title.map_or_else(|| prompt_required(Message::PromptTitle), Ok)?;
    let description = args.description.map_or_else(|| prompt_required(Message::PromptDescription), Ok)?;
    let category = args.category.map_or_else(|| prompt_required(Message::PromptCategory), Ok)?;
    let due = args.due.map_or_else(prompt_due_date, Ok)?;
    let priority = args.priority.map_or_else(prompt_priority, Ok)?;

    let Some(new_task) = recoverable(NewTask::new(&title, &description, &category, &due, &priority))? else {
        return Ok(());
    };
    let task = tasks.add(new_task)?;

    msg_success!(Message::TaskAdded(task.id, task.title));
    Ok(())
}

pub fn edit(mut args: EditArgs, tasks: &mut Tasks, view: &ViewConfig) -> Result<()> {
    let Some(current) = tasks.get(args.id).cloned() else {
        msg_error!(Message::TaskNotFound(args.id));
        return Ok(());
    };

    if !args.has_changes() {
        View::tasks(std::slice::from_ref(&current), view);
        prompt_update(&mut args)?;
    }

    let update = TaskUpdate::from_input(
        args.title.as_deref().unwrap_or_default(),
        args.description.as_deref().unwrap_or_default(),
        args.category.as_deref().unwrap_or_default(),
        args.due.as_deref().unwrap_or_default(),
        args.priority.as_deref().unwrap_or_default(),
        args.status.as_deref().unwrap_or_default(),
    );
    let Some(update) = recoverable(update)? else {
        return Ok(());
    };
    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    if let Some(task) = recoverable(tasks.edit(args.id, &update))? {
        msg_success!(Message::TaskUpdated(task.id));
    }
    Ok(())
}

pub fn done(id: u32, tasks: &mut Tasks) -> Result<()> {
    if let Some(task) = recoverable(tasks.mark_completed(id))? {
        msg_success!(Message::TaskMarkedCompleted(task.id));
    }
    Ok(())
}

pub fn delete(id: u32, yes: bool, tasks: &mut Tasks) -> Result<()> {
    let Some(title) = tasks.get(id).map(|t| t.title.clone()) else {
        msg_error!(Message::TaskNotFound(id));
        return Ok(());
    };

    if !yes && !confirm(Message::ConfirmDeleteTask(title))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if let Some(task) = recoverable(tasks.delete(id))? {
        msg_success!(Message::TaskDeleted(task.title));
    }
    Ok(())
}

pub fn delete_by_category(category: &str, yes: bool, tasks: &mut Tasks) -> Result<()> {
    let matching = tasks.list_all(Some(category)).len();
    if category.is_empty() || matching == 0 {
        msg_warning!(Message::NoTasksInCategory(category.to_string()));
        return Ok(());
    }

    if !yes && !confirm(Message::ConfirmDeleteCategory(category.to_string(), matching))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let removed = tasks.delete_by_category(category)?;
    msg_success!(Message::TasksDeletedByCategory(category.to_string(), removed));
    Ok(())
}

pub(crate) fn prompt_task_id(prompt: Message) -> Result<u32> {
    Ok(Input::<u32>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .interact_text()?)
}

pub(crate) fn prompt_optional(prompt: Message) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_required(prompt: Message) -> Result<String> {
    let empty_msg = Message::FieldMustNotBeEmpty.to_string();
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err(empty_msg.clone())
            } else {
                Ok(())
            }
        })
        .interact_text()?)
}

fn prompt_due_date() -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDueDate.to_string())
        .validate_with(|input: &String| -> Result<(), String> { parse_due_date(input).map(|_| ()).map_err(|e| e.to_string()) })
        .interact_text()?)
}

fn prompt_priority() -> Result<String> {
    let items: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPriority.to_string())
        .items(&items)
        .default(1)
        .interact()?;
    Ok(items[selection].to_string())
}

/// Offers `values` plus a leading "keep current" entry, which maps to an empty string.
fn prompt_keep_or_select(prompt: Message, values: &[&str]) -> Result<String> {
    let mut items = vec![Message::KeepCurrentValue.to_string()];
    items.extend(values.iter().map(|v| v.to_string()));

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&items)
        .default(0)
        .interact()?;
    Ok(if selection == 0 { String::new() } else { items[selection].clone() })
}

/// Asks for every editable field. Blank answers keep the current value.
fn prompt_update(args: &mut EditArgs) -> Result<()> {
    args.title = Some(prompt_optional(Message::PromptNewTitle)?);
    args.description = Some(prompt_optional(Message::PromptNewDescription)?);
    args.category = Some(prompt_optional(Message::PromptNewCategory)?);
    args.due = Some(
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNewDueDate.to_string())
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    return Ok(());
                }
                parse_due_date(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?,
    );

    let priorities: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
    args.priority = Some(prompt_keep_or_select(Message::PromptNewPriority, &priorities)?);
    let statuses: Vec<&str> = Status::ALL.iter().map(|s| s.as_str()).collect();
    args.status = Some(prompt_keep_or_select(Message::PromptNewStatus, &statuses)?);
    Ok(())
}

fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}
