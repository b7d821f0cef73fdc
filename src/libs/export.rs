//! Task list export to CSV, JSON and Excel.
//!
//! The exporter writes a snapshot of tasks to a file for backup or analysis
//! in a spreadsheet. It never modifies the task store.

use super::task::Task;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

const HEADERS: [&str; 7] = ["ID", "Title", "Description", "Category", "Due Date", "Priority", "Status"];

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter. Without `output_path` a timestamped file name in
    /// the current directory is used.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!("zadachi_export_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), format.extension()))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, tasks: &[Task]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(tasks),
            ExportFormat::Json => self.export_json(tasks),
            ExportFormat::Excel => self.export_excel(tasks),
        }
    }

    fn export_csv(&self, tasks: &[Task]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(HEADERS)?;
        for task in tasks {
            wtr.write_record(Self::record(task))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, tasks: &[Task]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, task) in tasks.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_number(row, 0, task.id as f64)?;
            for (col, value) in Self::record(task).iter().enumerate().skip(1) {
                worksheet.write_string(row, col as u16, value)?;
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn record(task: &Task) -> [String; 7] {
        [
            task.id.to_string(),
            task.title.clone(),
            task.description.clone(),
            task.category.clone(),
            task.due_date.to_string(),
            task.priority.to_string(),
            task.status.to_string(),
        ]
    }
}
