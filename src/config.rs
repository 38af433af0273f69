//! Display configuration.
//!
//! Settings live in the YAML frontmatter of a markdown file passed with
//! `--config`:
//!
//! ```text
//! ---
//! display:
//!   color: auto
//!   style: markdown
//!   show_bad: true
//!   show_good: true
//! ---
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::output::ColorChoice;
use crate::render::{DisplayOptions, Sections, Style};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub color: ColorChoice,
    /// Unset means each command picks its own default style
    #[serde(default)]
    pub style: Option<Style>,
    #[serde(default = "default_true")]
    pub show_bad: bool,
    #[serde(default = "default_true")]
    pub show_good: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::default(),
            style: None,
            show_bad: true,
            show_good: true,
        }
    }
}

impl Config {
    /// Load from `path` when given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let frontmatter =
            extract_frontmatter(content).context("Failed to extract frontmatter from config")?;

        // An empty frontmatter block deserializes as YAML null
        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }
}

impl DisplayConfig {
    /// Resolve display options, with `default_style` used when the config
    /// does not set one and `raw` forcing the raw style.
    pub fn options(&self, default_style: Style, raw: bool) -> DisplayOptions {
        let style = if raw {
            Style::Raw
        } else {
            self.style.unwrap_or(default_style)
        };

        DisplayOptions {
            style,
            sections: Sections {
                bad: self.show_bad,
                good: self.show_good,
            },
        }
    }
}

fn extract_frontmatter(content: &str) -> Option<String> {
    let content = content.trim();

    if !content.starts_with("---") {
        return None;
    }

    let rest = &content[3..];
    rest.find("---").map(|end| rest[..end].to_string())
}
