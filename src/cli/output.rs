//! Output formatting for the CLI
//!
//! Wraps plain and JSON output behind one interface so handlers never branch
//! on the output mode themselves.

use colored::Colorize;
use serde::Serialize;

/// Formatter for user-facing CLI output
#[derive(Debug, Clone, Default)]
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter with the given output flags
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON output was requested
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Display a success message
    pub fn success(&self, message: &str) {
        if self.json {
            return;
        }
        if self.no_color {
            println!("✓ {message}");
        } else {
            println!("{} {message}", "✓".green());
        }
    }

    /// Display an error message
    pub fn error(&self, message: &str) {
        if self.json {
            eprintln!(
                "{}",
                serde_json::json!({ "error": message })
            );
        } else if self.no_color {
            eprintln!("✗ {message}");
        } else {
            eprintln!("{} {}", "✗".red(), message.red());
        }
    }

    /// Display an informational message
    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Display a warning message
    pub fn warning(&self, message: &str) {
        if self.json {
            return;
        }
        if self.no_color {
            println!("⚠ {message}");
        } else {
            println!("{} {}", "⚠".yellow(), message.yellow());
        }
    }

    /// Print a value as pretty JSON (only in JSON mode)
    pub fn print_json<T: Serialize>(&self, value: &T) {
        if self.json {
            match serde_json::to_string_pretty(value) {
                Ok(rendered) => println!("{rendered}"),
                Err(err) => self.error(&format!("failed to render JSON: {err}")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag() {
        assert!(OutputFormatter::new(true, false).is_json());
        assert!(!OutputFormatter::new(false, false).is_json());
    }
}
