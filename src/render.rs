//! Turning topic documents into terminal text.
//!
//! Two presentation styles are supported:
//! - `Raw`: each enabled example under a `--- Bad Example ---` style banner,
//!   code printed verbatim
//! - `Markdown`: the document rendered with headings, paragraphs and indented
//!   code blocks

use anyhow::Result;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::Deserialize;

use crate::topic::{Example, ExampleKind, Topic};
use crate::ui;

/// Presentation style for a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Rendered markdown with prose
    Markdown,
    /// Code examples only, verbatim
    Raw,
}

/// Which examples of a topic to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    pub bad: bool,
    pub good: bool,
}

impl Sections {
    pub const ALL: Sections = Sections {
        bad: true,
        good: true,
    };

    pub fn only(kind: ExampleKind) -> Self {
        Sections {
            bad: kind == ExampleKind::Bad,
            good: kind == ExampleKind::Good,
        }
    }

    pub fn includes(&self, kind: ExampleKind) -> bool {
        match kind {
            ExampleKind::Bad => self.bad,
            ExampleKind::Good => self.good,
        }
    }
}

impl Default for Sections {
    fn default() -> Self {
        Sections::ALL
    }
}

/// Resolved display settings for printing topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub style: Style,
    pub sections: Sections,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            style: Style::Raw,
            sections: Sections::ALL,
        }
    }
}

/// Render a topic's description for display.
pub fn render_topic(topic: &Topic, options: &DisplayOptions, color: bool) -> Result<String> {
    let doc = topic.doc()?;
    let mut out = String::new();

    match options.style {
        Style::Raw => {
            for kind in [ExampleKind::Bad, ExampleKind::Good] {
                if options.sections.includes(kind) {
                    out.push_str(&render_example(doc.example(kind), color));
                }
            }
        }
        Style::Markdown => {
            let mut markdown = String::from(doc.intro_source);
            for kind in [ExampleKind::Bad, ExampleKind::Good] {
                if options.sections.includes(kind) {
                    markdown.push_str(doc.example(kind).source);
                }
            }
            out.push_str(&render_markdown(&markdown, color));
        }
    }

    Ok(out)
}

/// Render one example as a banner followed by its code, verbatim.
pub fn render_example(example: &Example<'_>, color: bool) -> String {
    let banner = ui::format::banner(example.kind.label());
    let banner = match (color, example.kind) {
        (false, _) => banner,
        (true, ExampleKind::Bad) => ui::colors::bad(&banner).to_string(),
        (true, ExampleKind::Good) => ui::colors::good(&banner).to_string(),
    };

    format!("\n{}\n{}\n", banner, example.code)
}

/// Render markdown text to terminal text, with ANSI styling when `color` is set.
pub fn render_markdown(markdown: &str, color: bool) -> String {
    let mut renderer = TerminalRenderer::new(color);

    for event in Parser::new(markdown) {
        renderer.handle_event(event);
    }

    renderer.finish()
}

struct TerminalRenderer {
    color: bool,
    out: String,
    buffer: String,
    in_italic: bool,
    in_bold: bool,
    heading_level: usize,
    list_depth: usize,
    ordered_list_depth: Vec<u64>,
}

impl TerminalRenderer {
    fn new(color: bool) -> Self {
        Self {
            color,
            out: String::new(),
            buffer: String::new(),
            in_italic: false,
            in_bold: false,
            heading_level: 0,
            list_depth: 0,
            ordered_list_depth: Vec::new(),
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.handle_start_tag(tag),
            Event::End(tag_end) => self.handle_end_tag(tag_end),
            Event::Text(text) => self.buffer.push_str(&text),
            Event::Code(text) => {
                let code = format!("`{}`", text);
                let code = if self.color {
                    ui::colors::identifier(&code).to_string()
                } else {
                    code
                };
                self.buffer.push_str(&code);
            }
            Event::SoftBreak | Event::HardBreak => {
                self.buffer.push('\n');
            }
            Event::Rule => {
                self.flush();
                let rule = ui::format::separator(40);
                let rule = if self.color {
                    ui::colors::secondary(&rule).to_string()
                } else {
                    rule
                };
                self.line(&rule);
            }
            _ => {}
        }
    }

    fn handle_start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                self.heading_level = match level {
                    HeadingLevel::H1 => 1,
                    HeadingLevel::H2 => 2,
                    HeadingLevel::H3 => 3,
                    HeadingLevel::H4 => 4,
                    HeadingLevel::H5 => 5,
                    HeadingLevel::H6 => 6,
                };
            }
            Tag::Emphasis => self.in_italic = true,
            Tag::Strong => self.in_bold = true,
            Tag::CodeBlock(_) => {
                self.flush();
                self.buffer.clear();
            }
            Tag::List(ordered) => {
                self.flush();
                self.list_depth += 1;
                self.ordered_list_depth.push(ordered.unwrap_or(0));
            }
            Tag::Item => {
                self.flush();
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                if let Some(last) = self.ordered_list_depth.last_mut() {
                    if *last > 0 {
                        self.out.push_str(&format!("{}{}. ", indent, last));
                        *last += 1;
                    } else {
                        self.out.push_str(&format!("{}• ", indent));
                    }
                }
            }
            Tag::BlockQuote => {
                self.flush();
                self.out.push_str("> ");
            }
            _ => {}
        }
    }

    fn handle_end_tag(&mut self, tag_end: TagEnd) {
        match tag_end {
            TagEnd::Heading(_) => {
                let heading = std::mem::take(&mut self.buffer);
                let heading = if self.color {
                    ui::colors::markdown_heading(&heading, self.heading_level).to_string()
                } else {
                    heading
                };
                self.line(&heading);
                self.line("");
                self.heading_level = 0;
            }
            TagEnd::Paragraph => {
                if !self.buffer.is_empty() {
                    let text = self.styled_buffer();
                    self.line(&text);
                    self.buffer.clear();
                }
                if self.list_depth == 0 {
                    self.line("");
                }
            }
            TagEnd::Emphasis => self.in_italic = false,
            TagEnd::Strong => self.in_bold = false,
            TagEnd::CodeBlock => {
                let code = std::mem::take(&mut self.buffer);
                for line in code.lines() {
                    let line = format!("    {}", line);
                    let line = if self.color {
                        ui::colors::secondary(&line).to_string()
                    } else {
                        line
                    };
                    self.line(line.trim_end());
                }
                self.line("");
            }
            TagEnd::List(_) => {
                if self.list_depth > 0 {
                    self.list_depth -= 1;
                    self.ordered_list_depth.pop();
                }
                if self.list_depth == 0 {
                    self.line("");
                }
            }
            TagEnd::Item => {
                if !self.buffer.is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.line(&text);
                }
            }
            _ => {}
        }
    }

    fn styled_buffer(&self) -> String {
        if !self.color {
            return self.buffer.clone();
        }
        use colored::Colorize;
        match (self.in_bold, self.in_italic) {
            (true, true) => self.buffer.bold().italic().to_string(),
            (true, false) => self.buffer.bold().to_string(),
            (false, true) => self.buffer.italic().to_string(),
            (false, false) => self.buffer.clone(),
        }
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let text = self.styled_buffer();
            self.out.push_str(&text);
            self.buffer.clear();
        }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn finish(mut self) -> String {
        self.flush();
        while self.out.ends_with("\n\n") {
            self.out.pop();
        }
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::{self, topics};

    #[test]
    fn test_raw_style_prints_both_examples_verbatim() {
        let topic = topic::find(1).unwrap();
        let doc = topic.doc().unwrap();
        let text = render_topic(topic, &DisplayOptions::default(), false).unwrap();

        let bad = text.find("--- Bad Example ---").unwrap();
        let good = text.find("--- Good Example ---").unwrap();
        assert!(bad < good);
        assert!(text.contains(&doc.bad.code));
        assert!(text.contains(&doc.good.code));
        assert!(!text.contains("\x1b["));
    }

    #[test]
    fn test_raw_style_is_deterministic() {
        for topic in topics() {
            let first = render_topic(topic, &DisplayOptions::default(), false).unwrap();
            let second = render_topic(topic, &DisplayOptions::default(), false).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_sections_filter() {
        let topic = topic::find(2).unwrap();
        let options = DisplayOptions {
            style: Style::Raw,
            sections: Sections::only(ExampleKind::Good),
        };
        let text = render_topic(topic, &options, false).unwrap();
        assert!(!text.contains("--- Bad Example ---"));
        assert!(text.contains("--- Good Example ---"));
        assert!(text.contains("GoldDiscount"));
    }

    #[test]
    fn test_markdown_style_includes_prose() {
        let topic = topic::find(3).unwrap();
        let options = DisplayOptions {
            style: Style::Markdown,
            sections: Sections::ALL,
        };
        let text = render_topic(topic, &options, false).unwrap();
        assert!(text.starts_with("Liskov Substitution Principle (LSP)\n\n"));
        assert!(text.contains("Bad example"));
        assert!(text.contains("Good example"));
        assert!(text.contains("    trait FlyingBird: Bird {"));
        assert!(!text.contains("```"));
    }

    #[test]
    fn test_markdown_style_drops_hidden_section() {
        let topic = topic::find(4).unwrap();
        let options = DisplayOptions {
            style: Style::Markdown,
            sections: Sections::only(ExampleKind::Bad),
        };
        let text = render_topic(topic, &options, false).unwrap();
        assert!(text.contains("Bad example"));
        assert!(!text.contains("Good example"));
        assert!(!text.contains("trait Workable"));
    }

    #[test]
    fn test_render_markdown_elements() {
        let markdown = "# Title\n\nSome `code` here.\n\n- one\n- two\n\n1. first\n2. second\n\n---\n\n```\nlet x = 1;\n```\n";
        let text = render_markdown(markdown, false);
        assert_eq!(
            text,
            "Title\n\nSome `code` here.\n\n• one\n• two\n\n1. first\n2. second\n\n────────────────────────────────────────\n    let x = 1;\n"
        );
    }

    #[test]
    fn test_render_markdown_colored_has_escapes() {
        colored::control::set_override(true);
        let text = render_markdown("# Title\n", true);
        colored::control::unset_override();
        assert!(text.contains("\x1b["));
        assert!(text.contains("Title"));
    }

    #[test]
    fn test_sections_helpers() {
        assert_eq!(Sections::default(), Sections::ALL);
        assert!(Sections::only(ExampleKind::Bad).includes(ExampleKind::Bad));
        assert!(!Sections::only(ExampleKind::Bad).includes(ExampleKind::Good));
    }
}
