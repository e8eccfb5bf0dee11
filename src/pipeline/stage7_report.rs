use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::pipeline::PipelineResult;
use crate::pipeline::stage1_validate::ValidationError;
use crate::report::json::{render_result_json, render_validation_json};
use crate::report::text::{render_result_text, render_validation_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn render_result(result: &PipelineResult, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_result_text(result)),
        ReportFormat::Json => render_result_json(result),
    }
}

pub fn render_validation(err: &ValidationError, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_validation_text(err)),
        ReportFormat::Json => render_validation_json(err),
    }
}

/// Writes to `out` when given, creating parent directories, otherwise to stdout.
pub fn write_report(rendered: &str, out: Option<&Path>) -> io::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let mut text = rendered.to_string();
            if !text.ends_with('\n') {
                text.push('\n');
            }
            fs::write(path, text)
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                lock.write_all(b"\n")?;
            }
            lock.flush()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
