use super::show;
use crate::{
    db::tasks::Tasks,
    libs::{config::ViewConfig, messages::Message},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args, Default)]
pub struct ListArgs {
    /// Only tasks whose category equals this value (case-insensitive)
    #[arg(short, long)]
    pub category: Option<String>,
}

pub fn cmd(args: ListArgs, tasks: &Tasks, view: &ViewConfig) -> Result<()> {
    let category = args.category.as_deref().map(str::trim).filter(|c| !c.is_empty());
    let found = tasks.list_all(category);

    let header = match category {
        Some(category) => Message::TasksInCategoryHeader(category.to_string()),
        None => Message::TasksHeader,
    };
    show(&found, header, Message::NoTasks, view);
    Ok(())
}
