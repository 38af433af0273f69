//! CLI argument definitions for solid-tour.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use solid_tour::output::ColorChoice;

#[derive(Parser)]
#[command(name = "solid-tour")]
#[command(version)]
#[command(about = "Interactive tour of the SOLID design principles", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    solid-tour                 Interactive menu (default)\n    solid-tour list            List the five principles\n    solid-tour show srp        Print one principle with its examples"
)]
pub struct Cli {
    /// Suppress warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Display settings file (markdown with YAML frontmatter)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to use colors, overriding the config file
    #[arg(long, global = true, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Print the code examples only, without rendered prose
    #[arg(long, global = true)]
    pub raw: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the numbered interactive menu (the default)
    Menu,
    /// List the principles
    List,
    /// Print one principle without prompting
    Show {
        /// Topic id (1-5), code (srp, ocp, ...), or slug (1-srp, ...)
        topic: String,
        /// Show only the bad example
        #[arg(long, conflicts_with = "good")]
        bad: bool,
        /// Show only the good example
        #[arg(long)]
        good: bool,
    },
    /// Choose principles with the arrow keys
    Pick,
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page
    Man {
        /// Directory to write the man page to (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Show version information
    Version {
        /// Include commit and build date
        #[arg(short, long)]
        verbose: bool,
    },
}
