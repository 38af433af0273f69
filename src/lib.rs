//! # SOLID Tour
//!
//! An interactive walk through the five SOLID design principles. Each topic
//! pairs a "bad" example that breaks the principle with a "good" example that
//! follows it, plus a short commentary.
//!
//! ## Modules
//!
//! - [`topic`] - The embedded topic catalog and document parsing
//! - [`selector`] - Parsing one line of menu input
//! - [`menu`] - The interactive prompt/display loop
//! - [`render`] - Raw and markdown presentation of topics
//! - [`output`] - Injectable, color-aware line output
//! - [`config`] - Display settings from a markdown frontmatter file
//!
//! ## Example
//!
//! ```no_run
//! use std::io;
//! use solid_tour::menu::ExampleMenu;
//! use solid_tour::output::{ColorChoice, Output, OutputMode};
//! use solid_tour::render::DisplayOptions;
//!
//! let output = Output::stdout(OutputMode::Human, ColorChoice::Auto);
//! let mut menu = ExampleMenu::new(io::stdin().lock(), output, DisplayOptions::default());
//! menu.run().expect("menu failed");
//! ```

pub mod config;
pub mod menu;
pub mod output;
pub mod render;
pub mod selector;
pub mod topic;
pub mod ui;
