//! Interactive example-selection menu.
//!
//! The menu alternates between two states: `Prompting` shows the numbered
//! topic list and reads one line, `Displaying` prints the chosen topic and
//! hands control straight back to `Prompting`. The loop ends on the exit
//! choice or when input runs out.

use anyhow::{Context, Result};
use std::io::BufRead;

use crate::output::Output;
use crate::render::{self, DisplayOptions};
use crate::selector::{InvalidSelection, Selector};
use crate::topic::{self, Topic, EXIT_ID};

pub const WELCOME: &str = "Welcome to the SOLID Principles Interactive Demo!";
pub const CHOOSE: &str = "Please choose a principle to explore:";
pub const PROMPT: &str = "Enter your choice: ";
pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";
pub const GOODBYE: &str = "Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Prompting,
    Displaying(&'static Topic),
}

pub struct ExampleMenu<R> {
    input: R,
    output: Output,
    options: DisplayOptions,
}

impl<R: BufRead> ExampleMenu<R> {
    pub fn new(input: R, output: Output, options: DisplayOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Run until the user picks exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        let mut state = MenuState::Prompting;

        loop {
            state = match state {
                MenuState::Prompting => {
                    self.show_menu()?;
                    match self.read_choice()? {
                        None | Some(Ok(Selector::Exit)) => {
                            self.output.info(GOODBYE);
                            return Ok(());
                        }
                        Some(Ok(Selector::Topic(topic))) => MenuState::Displaying(topic),
                        Some(Err(_)) => {
                            self.output.warn(INVALID_CHOICE);
                            MenuState::Prompting
                        }
                    }
                }
                MenuState::Displaying(topic) => {
                    self.display(topic)?;
                    MenuState::Prompting
                }
            };
        }
    }

    fn show_menu(&self) -> Result<()> {
        self.output.heading(WELCOME);
        self.output.info(CHOOSE);
        for line in menu_lines() {
            self.output.info(&line);
        }
        self.output.prompt(PROMPT)
    }

    /// Read one line; `None` at end of input.
    fn read_choice(&mut self) -> Result<Option<Result<Selector, InvalidSelection>>> {
        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read menu choice")?;

        if read == 0 {
            // Keep the farewell off the prompt line
            self.output.info("");
            return Ok(None);
        }

        // Undecodable bytes are rejected like any other non-number
        Ok(Some(Selector::parse(&String::from_utf8_lossy(&line))))
    }

    fn display(&self, topic: &Topic) -> Result<()> {
        let text = render::render_topic(topic, &self.options, self.output.is_color())?;
        self.output.raw(&text)
    }
}

/// The numbered menu entries: one per topic, then exit.
pub fn menu_lines() -> Vec<String> {
    topic::topics()
        .iter()
        .map(Topic::menu_label)
        .chain(std::iter::once(format!("{}. Exit", EXIT_ID)))
        .collect()
}
