use super::show;
use crate::{
    db::tasks::Tasks,
    libs::{config::ViewConfig, messages::Message},
};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    /// Substring of the title or description
    Keyword,
    /// Substring of the category
    Category,
    /// Substring of the status
    Status,
}

#[derive(Debug, Args)]
pub struct FindArgs {
    #[arg(value_enum)]
    pub by: SearchBy,
    pub query: String,
}

pub fn cmd(args: FindArgs, tasks: &Tasks, view: &ViewConfig) -> Result<()> {
    search(args.by, &args.query, tasks, view);
    Ok(())
}

pub(crate) fn search(by: SearchBy, query: &str, tasks: &Tasks, view: &ViewConfig) {
    let (found, empty) = match by {
        SearchBy::Keyword => (tasks.find_by_keyword(query), Message::NoTasksForKeyword(query.to_string())),
        SearchBy::Category => (tasks.find_by_category(query), Message::NoTasksForCategory(query.to_string())),
        SearchBy::Status => (tasks.find_by_status(query), Message::NoTasksForStatus(query.to_string())),
    };
    show(&found, Message::SearchResultsHeader(query.to_string()), empty, view);
}
