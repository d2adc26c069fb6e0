//! Renderers turning a [`Report`] into the bytes written to disk.

mod html;
mod text;

use anyhow::{Context, Result};
use clap::ValueEnum;

use super::Report;

/// Output format of the written report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Txt,
    Html,
    Json,
}

impl Format {
    /// File extension, also used for the default output path.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Txt => "txt",
            Format::Html => "html",
            Format::Json => "json",
        }
    }

    /// `i18n_report.<ext>`
    pub fn default_output(self) -> String {
        format!("i18n_report.{}", self.extension())
    }
}

pub fn render(report: &Report, format: Format) -> Result<String> {
    match format {
        Format::Txt => text::render(report),
        Format::Html => html::render(report),
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            json.push('\n');
            Ok(json)
        }
    }
}
