//! Interactive commands: the numbered line menu and arrow-key picking.

use anyhow::Result;
use std::io;

use solid_tour::menu::{self, ExampleMenu};
use solid_tour::render::{self, Style};
use solid_tour::topic;

use super::Session;

/// Run the numbered menu on stdin/stdout.
pub fn cmd_menu(session: &Session) -> Result<()> {
    let stdin = io::stdin();
    let mut menu = ExampleMenu::new(
        stdin.lock(),
        session.stdout(),
        session.display_options(Style::Raw),
    );
    menu.run()
}

/// Select topics with dialoguer until "Exit" is chosen.
///
/// Arrow-key selection needs a terminal, so piped input falls back to the
/// numbered menu.
pub fn cmd_pick(session: &Session) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        session
            .diagnostics()
            .warn("stdin is not a terminal, using the numbered menu instead");
        return cmd_menu(session);
    }

    let output = session.stdout();
    let options = session.display_options(Style::Markdown);

    let mut items: Vec<String> = topic::topics().iter().map(|t| t.to_string()).collect();
    items.push("Exit".to_string());

    let mut default = 0;
    loop {
        let selection = dialoguer::Select::new()
            .with_prompt(menu::CHOOSE.trim_end_matches(':'))
            .items(&items)
            .default(default)
            .interact()?;

        let Some(topic) = topic::topics().get(selection) else {
            output.info(menu::GOODBYE);
            return Ok(());
        };

        output.raw(&render::render_topic(topic, &options, output.is_color())?)?;
        output.separator(40);
        default = selection;
    }
}
