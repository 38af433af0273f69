//! Line-oriented terminal output.
//!
//! `Output` wraps a shared writer so the menu and commands can print to
//! stdout in normal use and to an in-memory buffer under test. Styling is
//! applied only when color is enabled.
//!
//! - Human: every message is written
//! - Quiet: only errors (and content written through [`Output::raw`]) appear

use anyhow::{Context, Result};
use colored::{Color, Colorize};
use serde::Deserialize;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::ui;

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Quiet,
}

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve the choice against whether the target stream is a TTY.
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorChoice::Auto => is_tty,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Resolve a choice for one stream. Enabling styling overrides `colored`'s
/// own TTY and `NO_COLOR`/`CLICOLOR` detection; all styling is gated on the
/// returned flag.
fn resolve_color(choice: ColorChoice, is_tty: bool) -> bool {
    let enabled = choice.enabled(is_tty);
    if enabled {
        colored::control::set_override(true);
    }
    enabled
}

#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    color: bool,
}

impl Output {
    /// Create an Output writing to stdout
    pub fn stdout(mode: OutputMode, color: ColorChoice) -> Self {
        let color = resolve_color(color, atty::is(atty::Stream::Stdout));
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            color,
        }
    }

    /// Create an Output writing to stderr, for diagnostics
    pub fn stderr(mode: OutputMode, color: ColorChoice) -> Self {
        let color = resolve_color(color, atty::is(atty::Stream::Stderr));
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stderr()))),
            color,
        }
    }

    /// Create an Output with a custom writer (for testing). Color is off.
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            color: false,
        }
    }

    /// Output a bold heading line
    pub fn heading(&self, msg: &str) {
        if self.mode == OutputMode::Human {
            let line = self.paint(msg, ui::colors::heading);
            self.write_line(&line);
        }
    }

    /// Output plain info text (no prefix)
    pub fn info(&self, msg: &str) {
        if self.mode == OutputMode::Human {
            self.write_line(msg);
        }
    }

    /// Output detail text (indented, for subordinate info)
    pub fn detail(&self, msg: &str) {
        if self.mode == OutputMode::Human {
            let line = self.paint(msg, ui::colors::secondary);
            self.write_line(&format!("  {}", line));
        }
    }

    /// Output a warning message: "⚠ {msg}" in yellow
    pub fn warn(&self, msg: &str) {
        if self.mode == OutputMode::Human {
            self.prefixed("⚠", msg, Color::Yellow);
        }
    }

    /// Output an error message: "✗ {msg}" in red. Shown in every mode.
    pub fn error(&self, msg: &str) {
        self.prefixed("✗", msg, Color::Red);
    }

    /// Output a dimmed separator line
    pub fn separator(&self, width: usize) {
        if self.mode == OutputMode::Human {
            let line = ui::format::separator(width);
            let line = self.paint(&line, ui::colors::secondary);
            self.write_line(&line);
        }
    }

    fn prefixed(&self, prefix: &str, msg: &str, color: Color) {
        let prefix = if self.color {
            prefix.color(color).to_string()
        } else {
            prefix.to_string()
        };
        self.write_line(&format!("{} {}", prefix, msg));
    }

    /// Write a prompt without a trailing newline and flush it
    pub fn prompt(&self, msg: &str) -> Result<()> {
        let mut writer = self.lock()?;
        write!(writer, "{}", msg).context("Failed to write prompt")?;
        writer.flush().context("Failed to flush prompt")
    }

    /// Write pre-rendered content exactly as given, in every mode
    pub fn raw(&self, content: &str) -> Result<()> {
        let mut writer = self.lock()?;
        writer
            .write_all(content.as_bytes())
            .context("Failed to write output")?;
        writer.flush().context("Failed to flush output")
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Whether ANSI styling is applied
    pub fn is_color(&self) -> bool {
        self.color
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> colored::ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Box<dyn Write + Send>>> {
        self.writer
            .lock()
            .map_err(|_| anyhow::anyhow!("Output writer lock poisoned"))
    }

    /// Write a line to the output
    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test-specific writer that wraps Arc<Mutex<Vec<u8>>>
    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.buffer.lock().unwrap().flush()
        }
    }

    fn contents(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_human_mode_output() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Human, Box::new(writer));

        output.heading("Heading");
        output.info("Info");
        output.detail("Detail");
        output.warn("Warning");
        output.error("Error");
        output.separator(3);

        let result = contents(&buffer);
        assert_eq!(
            result,
            "Heading\nInfo\n  Detail\n⚠ Warning\n✗ Error\n───\n"
        );
    }

    #[test]
    fn test_quiet_mode_only_errors() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Quiet, Box::new(writer));

        output.heading("Heading");
        output.info("Info");
        output.warn("Warning");
        output.error("Error");

        let result = contents(&buffer);
        assert_eq!(result, "✗ Error\n");
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Human, Box::new(writer));

        output.prompt("Enter your choice: ").unwrap();
        assert_eq!(contents(&buffer), "Enter your choice: ");
    }

    #[test]
    fn test_raw_written_in_quiet_mode() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Quiet, Box::new(writer));

        output.raw("verbatim\n  text").unwrap();
        assert_eq!(contents(&buffer), "verbatim\n  text");
    }

    #[test]
    fn test_custom_writer_is_not_colored() {
        let (writer, _buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Human, Box::new(writer));
        assert!(!output.is_color());
        assert_eq!(output.mode(), OutputMode::Human);
    }

    #[test]
    fn test_resolve_color_never_stays_off() {
        assert!(!resolve_color(ColorChoice::Never, true));
        assert!(!resolve_color(ColorChoice::Auto, false));
    }

    #[test]
    fn test_color_choice() {
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
        assert_eq!(ColorChoice::default(), ColorChoice::Auto);
    }
}
