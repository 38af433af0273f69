//! Parsing of one line of menu input.

use std::fmt;

use crate::topic::{self, Topic, EXIT_ID};

/// What the user picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Topic(&'static Topic),
    Exit,
}

/// Why a line of input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidSelection {
    Empty,
    NotANumber(String),
    OutOfRange(i64),
}

impl fmt::Display for InvalidSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSelection::Empty => write!(f, "no choice entered"),
            InvalidSelection::NotANumber(input) => write!(f, "'{}' is not a number", input),
            InvalidSelection::OutOfRange(value) => {
                write!(f, "{} is not between 1 and {}", value, EXIT_ID)
            }
        }
    }
}

impl std::error::Error for InvalidSelection {}

impl Selector {
    /// Parse a line of user input. Surrounding whitespace is ignored; a blank
    /// line is rejected like any other non-numeric input.
    pub fn parse(input: &str) -> Result<Self, InvalidSelection> {
        let input = input.trim();
        if input.is_empty() {
            return Err(InvalidSelection::Empty);
        }

        let value: i64 = input
            .parse()
            .map_err(|_| InvalidSelection::NotANumber(input.to_string()))?;

        if value == i64::from(EXIT_ID) {
            return Ok(Selector::Exit);
        }

        u8::try_from(value)
            .ok()
            .and_then(topic::find)
            .map(Selector::Topic)
            .ok_or(InvalidSelection::OutOfRange(value))
    }
}
