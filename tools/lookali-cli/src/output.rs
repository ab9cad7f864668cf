//! Output formatting for the CLI.

use console::style;
use lookali_commerce::{Notice, NoticeLevel};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(json: bool) -> Self {
        Self { json }
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

    /// Print a notice with the style of its level.
    pub fn notice(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => self.success(&notice.message),
            NoticeLevel::Info => self.info(&notice.message),
            NoticeLevel::Warning => self.warn(&notice.message),
        }
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a block of text as-is.
    pub fn text(&self, text: &str) {
        if self.json {
            return;
        }
        println!("{}", text);
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
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Rating with one decimal and a star, e.g. `4.9 ★`.
pub fn format_rating(rating: f64) -> String {
    format!("{:.1} {}", rating, style("★").yellow())
}

/// Five stars, filled according to `rating`.
pub fn star_bar(rating: f64) -> String {
    (0..5)
        .map(|i| {
            let fill = lookali_commerce::catalog::star_fill(rating, i);
            if fill >= 0.75 {
                '★'
            } else if fill >= 0.25 {
                '⯨'
            } else {
                '☆'
            }
        })
        .collect()
}

/// Horizontal bar for a percentage, `width` cells wide.
pub fn percent_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_bar() {
        assert_eq!(percent_bar(0.0, 10), "░░░░░░░░░░");
        assert_eq!(percent_bar(50.0, 10), "█████░░░░░");
        assert_eq!(percent_bar(100.0, 4), "████");
    }

    #[test]
    fn test_star_bar() {
        assert_eq!(star_bar(5.0), "★★★★★");
        assert_eq!(star_bar(0.0), "☆☆☆☆☆");
        assert_eq!(star_bar(3.5), "★★★⯨☆");
    }
}
