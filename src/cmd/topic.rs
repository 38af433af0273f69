//! Non-interactive topic commands: list and show.

use anyhow::{anyhow, Result};

use solid_tour::render::{self, Sections, Style};
use solid_tour::topic::{self, ExampleKind};
use solid_tour::ui;

use super::Session;

/// Print the numbered topic list with each principle's one-line summary.
pub fn cmd_list(session: &Session) -> Result<()> {
    let output = session.stdout();

    for topic in topic::topics() {
        let doc = topic.doc()?;
        output.info(&topic.menu_label());
        output.detail(&ui::format::first_sentence(&doc.intro));
    }

    Ok(())
}

/// Print one topic. `bad`/`good` narrow the output to a single example.
pub fn cmd_show(session: &Session, key: &str, bad: bool, good: bool) -> Result<()> {
    let topic = topic::find_by_key(key).ok_or_else(|| {
        anyhow!(
            "Unknown topic '{}'. Run 'solid-tour list' to see available topics.",
            key
        )
    })?;

    let mut options = session.display_options(Style::Markdown);
    if bad {
        options.sections = Sections::only(ExampleKind::Bad);
    } else if good {
        options.sections = Sections::only(ExampleKind::Good);
    }

    if !options.sections.bad && !options.sections.good {
        session
            .diagnostics()
            .warn("Both examples are hidden by the config; pass --bad or --good to show one");
    }

    let output = session.stdout();
    output.raw(&render::render_topic(topic, &options, output.is_color())?)
}
