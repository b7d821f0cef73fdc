//! Interactive menu, started when no subcommand is given.
//!
//! Each entry delegates to the same handlers the subcommands use, so the menu
//! and the command line behave identically.

use super::{
    find::{self, SearchBy},
    list::{self, ListArgs},
    task::{self, prompt_optional, prompt_task_id, AddArgs, EditArgs},
};
use crate::{
    db::tasks::Tasks,
    libs::{config::ViewConfig, messages::Message},
    msg_print,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    ListAll,
    ListByCategory,
    Add,
    Edit,
    MarkCompleted,
    Delete,
    DeleteByCategory,
    Search,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 9] = [
        MenuItem::ListAll,
        MenuItem::ListByCategory,
        MenuItem::Add,
        MenuItem::Edit,
        MenuItem::MarkCompleted,
        MenuItem::Delete,
        MenuItem::DeleteByCategory,
        MenuItem::Search,
        MenuItem::Exit,
    ];

    fn label(&self) -> Message {
        match self {
            MenuItem::ListAll => Message::MenuListAll,
            MenuItem::ListByCategory => Message::MenuListByCategory,
            MenuItem::Add => Message::MenuAdd,
            MenuItem::Edit => Message::MenuEdit,
            MenuItem::MarkCompleted => Message::MenuMarkCompleted,
            MenuItem::Delete => Message::MenuDelete,
            MenuItem::DeleteByCategory => Message::MenuDeleteByCategory,
            MenuItem::Search => Message::MenuSearch,
            MenuItem::Exit => Message::MenuExit,
        }
    }
}

pub fn cmd(tasks: &mut Tasks, view: &ViewConfig) -> Result<()> {
    let labels: Vec<String> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.label()))
        .collect();

    loop {
        msg_print!(Message::MenuHeader, true);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::MenuPrompt.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuItem::ALL[selection] {
            MenuItem::ListAll => list::cmd(ListArgs::default(), tasks, view)?,
            MenuItem::ListByCategory => {
                let category = prompt_optional(Message::PromptCategoryToList)?;
                list::cmd(ListArgs { category: Some(category) }, tasks, view)?;
            }
            MenuItem::Add => task::add(AddArgs::default(), tasks)?,
            MenuItem::Edit => {
                let id = prompt_task_id(Message::PromptTaskIdToEdit)?;
                task::edit(EditArgs::interactive(id), tasks, view)?;
            }
            MenuItem::MarkCompleted => {
                let id = prompt_task_id(Message::PromptTaskIdToComplete)?;
                task::done(id, tasks)?;
            }
            MenuItem::Delete => {
                let id = prompt_task_id(Message::PromptTaskIdToDelete)?;
                task::delete(id, false, tasks)?;
            }
            MenuItem::DeleteByCategory => {
                let category = prompt_optional(Message::PromptCategoryToDelete)?;
                task::delete_by_category(category.trim(), false, tasks)?;
            }
            MenuItem::Search => search(tasks, view)?,
            MenuItem::Exit => {
                msg_print!(Message::Goodbye);
                return Ok(());
            }
        }
    }
}

fn search(tasks: &Tasks, view: &ViewConfig) -> Result<()> {
    let modes = [
        (SearchBy::Keyword, Message::SearchByKeyword, Message::PromptSearchQuery),
        (SearchBy::Category, Message::SearchByCategory, Message::PromptSearchCategory),
        (SearchBy::Status, Message::SearchByStatus, Message::PromptSearchStatus),
    ];
    let labels: Vec<String> = modes.iter().map(|(_, label, _)| label.to_string()).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectSearchMode.to_string())
        .items(&labels)
        .default(0)
        .interact()?;

    let (by, _, prompt) = modes[selection].clone();
    let query = prompt_optional(prompt)?;
    find::search(by, &query, tasks, view);
    Ok(())
}
