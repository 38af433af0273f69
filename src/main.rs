//! CLI entry point for solid-tour.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use cmd::Session;
use solid_tour::output::{ColorChoice, Output, OutputMode};

fn main() {
    let cli = Cli::parse();
    let color = cli.color.unwrap_or_default();

    if let Err(err) = run(cli) {
        Output::stderr(OutputMode::Quiet, color).error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let session = Session::from_cli(&cli)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => cmd::menu::cmd_menu(&session),
        Commands::List => cmd::topic::cmd_list(&session),
        Commands::Show { topic, bad, good } => cmd::topic::cmd_show(&session, &topic, bad, good),
        Commands::Pick => cmd::menu::cmd_pick(&session),
        Commands::Completion { shell } => cmd::util::cmd_completion(&session, shell),
        Commands::Man { out_dir } => cmd::util::cmd_man(&session, out_dir.as_deref()),
        Commands::Version { verbose } => cmd::util::cmd_version(&session, verbose),
    }
}
