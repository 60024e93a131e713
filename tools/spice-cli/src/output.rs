//! Output formatting for the CLI.

use console::style;
use spice_catalog::prelude::{Notice, NoticeKind, Pagination};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Print a toast-style notice.
    pub fn notice(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => self.success(&notice.message),
            NoticeKind::Error => self.error(&notice.message),
            NoticeKind::Info => self.info(&notice.message),
        }
    }

    /// Print page controls under a listing.
    pub fn pages(&self, pagination: &Pagination, window: usize) {
        if self.json || window == 0 || pagination.total_pages <= 1 {
            return;
        }
        println!("\n  {}", page_controls(pagination, window));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Pad columns to fixed widths. Wider values are truncated with an ellipsis.
pub fn format_row(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", truncate(col, *width), width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Render "‹ 1 [2] 3 ›" style page links.
pub fn page_controls(pagination: &Pagination, window: usize) -> String {
    let mut parts = Vec::new();
    if !pagination.is_first() {
        parts.push("‹".to_string());
    }
    for n in pagination.page_numbers(window) {
        if n == pagination.page {
            parts.push(format!("[{}]", n));
        } else {
            parts.push(n.to_string());
        }
    }
    if !pagination.is_last() {
        parts.push("›".to_string());
    }
    parts.join(" ")
}

/// Star rating as text, e.g. "★★★★☆ 4.5".
pub fn stars(rating: f64) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), rating)
}
