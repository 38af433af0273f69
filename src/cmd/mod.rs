//! Command module structure for the solid-tour CLI

use anyhow::Result;

use solid_tour::config::Config;
use solid_tour::output::{ColorChoice, Output, OutputMode};
use solid_tour::render::{DisplayOptions, Style};

use crate::cli::Cli;

pub mod menu;
pub mod topic;
pub mod util;

/// Settings shared by every command, resolved once from flags and config.
pub struct Session {
    pub config: Config,
    pub color: ColorChoice,
    pub raw: bool,
    pub quiet: bool,
}

impl Session {
    /// Load the config file (if any) and apply flag overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let color = cli.color.unwrap_or(config.display.color);

        Ok(Self {
            config,
            color,
            raw: cli.raw,
            quiet: cli.quiet,
        })
    }

    /// Output for command results
    pub fn stdout(&self) -> Output {
        Output::stdout(OutputMode::Human, self.color)
    }

    /// Output for warnings and errors
    pub fn diagnostics(&self) -> Output {
        let mode = if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Human
        };
        Output::stderr(mode, self.color)
    }

    pub fn display_options(&self, default_style: Style) -> DisplayOptions {
        self.config.display.options(default_style, self.raw)
    }
}
