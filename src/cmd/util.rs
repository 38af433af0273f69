//! Utility commands (version, man page generation, completion).

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::path::{Path, PathBuf};

use crate::cli::Cli;

use super::Session;

const BIN_NAME: &str = "solid-tour";

/// `solid-tour <version>`, plus commit and build date when verbose.
fn version_lines(verbose: bool) -> Vec<String> {
    let mut lines = vec![format!("{} {}", BIN_NAME, env!("CARGO_PKG_VERSION"))];
    if verbose {
        lines.push(format!("commit: {}", env!("GIT_SHA")));
        lines.push(format!("built: {}", env!("BUILD_DATE")));
    }
    lines
}

pub fn cmd_version(session: &Session, verbose: bool) -> Result<()> {
    let output = session.stdout();
    for line in version_lines(verbose) {
        output.info(&line);
    }
    Ok(())
}

/// Render the man page and write it as `<dir>/solid-tour.1`.
fn write_man_page(dir: &Path) -> Result<PathBuf> {
    let mut page = Vec::new();
    clap_mangen::Man::new(Cli::command())
        .render(&mut page)
        .context("Failed to render man page")?;

    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(format!("{}.1", BIN_NAME));
    std::fs::write(&path, page).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

pub fn cmd_man(session: &Session, out_dir: Option<&Path>) -> Result<()> {
    let path = write_man_page(out_dir.unwrap_or(Path::new(".")))?;
    session
        .stdout()
        .info(&format!("Man page written to: {}", path.display()));
    Ok(())
}

fn completion_script(shell: Shell) -> String {
    let mut script = Vec::new();
    generate(shell, &mut Cli::command(), BIN_NAME, &mut script);
    String::from_utf8_lossy(&script).into_owned()
}

pub fn cmd_completion(session: &Session, shell: Shell) -> Result<()> {
    session.stdout().raw(&completion_script(shell))
}
