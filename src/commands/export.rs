//! Task export command.
//!
//! Writes the task list, or a single category of it, to a CSV, JSON or
//! Excel file for backup or further analysis.

use crate::{
    db::tasks::Tasks,
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only tasks whose category equals this value (case-insensitive)
    #[arg(short, long)]
    category: Option<String>,
}

pub fn cmd(args: ExportArgs, tasks: &Tasks) -> Result<()> {
    let selected = tasks.list_all(args.category.as_deref());
    if selected.is_empty() {
        msg_warning!(Message::NothingToExport);
        return Ok(());
    }

    msg_info!(Message::ExportingData(args.format.extension().to_uppercase()));

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&selected)?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
