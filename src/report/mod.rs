pub mod json;
pub mod text;

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::pipeline::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Text,
}

pub fn format_f64_1(v: f64) -> String {
    format!("{:.1}", v)
}

pub fn format_percent(v: f64) -> String {
    format!("{:.1}%", v)
}

pub fn render(analysis: &Analysis, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Json => json::render_analysis_json(analysis),
        ReportFormat::Text => Ok(text::render_analysis_text(analysis)),
    }
}

/// Writes to `out`, or stdout when `out` is `None`.
pub fn write_report(rendered: &str, out: Option<&Path>) -> std::io::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
