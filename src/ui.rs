//! Centralized color and formatting helpers
//!
//! Everything here returns styled values; whether styling is applied at all is
//! decided by the caller (see [`crate::output::Output`]).

/// Color scheme for terminal text
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }

    /// Cyan for identifiers (topic ids and codes)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Red for the "bad" half of a contrast
    pub fn bad(text: &str) -> ColoredString {
        text.red().bold()
    }

    /// Green for the "good" half of a contrast
    pub fn good(text: &str) -> ColoredString {
        text.green().bold()
    }

    /// Color for markdown heading levels
    pub fn markdown_heading(text: &str, level: usize) -> ColoredString {
        match level {
            1 => text.bold(),
            2 => text.bold().cyan(),
            3 => text.bold().blue(),
            4 => text.bold().magenta(),
            _ => text.bold(),
        }
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }

    /// Banner line used between the halves of a topic: `--- Bad Example ---`
    pub fn banner(label: &str) -> String {
        format!("--- {} ---", label)
    }

    /// Text up to and including the first sentence-ending period
    pub fn first_sentence(text: &str) -> String {
        let text = text.trim();
        match text.find(". ") {
            Some(end) => text[..=end].to_string(),
            None => text.to_string(),
        }
    }
}
