//! Topic catalog and topic document parsing.
//!
//! The five design-principle topics are compiled into the binary from the
//! markdown files under `topics/`. Each document has an H1 title, an intro,
//! and `## Bad example` / `## Good example` sections that each hold some
//! commentary and exactly one fenced code block.

use anyhow::{bail, Context, Result};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};
use std::fmt;

/// Menu value that ends the interactive loop.
pub const EXIT_ID: u8 = 6;

/// One design-principle entry shown in the menu.
#[derive(Debug, PartialEq, Eq)]
pub struct Topic {
    pub id: u8,
    /// Abbreviation shown next to the name, e.g. `SRP`
    pub code: &'static str,
    pub name: &'static str,
    /// Directory-style key, e.g. `1-srp`
    pub slug: &'static str,
    /// Markdown body with the bad/good contrast
    pub description: &'static str,
}

static TOPICS: [Topic; 5] = [
    Topic {
        id: 1,
        code: "SRP",
        name: "Single Responsibility Principle",
        slug: "1-srp",
        description: include_str!("../topics/1-srp.md"),
    },
    Topic {
        id: 2,
        code: "OCP",
        name: "Open/Closed Principle",
        slug: "2-ocp",
        description: include_str!("../topics/2-ocp.md"),
    },
    Topic {
        id: 3,
        code: "LSP",
        name: "Liskov Substitution Principle",
        slug: "3-lsp",
        description: include_str!("../topics/3-lsp.md"),
    },
    Topic {
        id: 4,
        code: "ISP",
        name: "Interface Segregation Principle",
        slug: "4-isp",
        description: include_str!("../topics/4-isp.md"),
    },
    Topic {
        id: 5,
        code: "DIP",
        name: "Dependency Inversion Principle",
        slug: "5-dip",
        description: include_str!("../topics/5-dip.md"),
    },
];

/// All topics, ordered by id.
pub fn topics() -> &'static [Topic] {
    &TOPICS
}

/// Look up a topic by its numeric id.
pub fn find(id: u8) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| topic.id == id)
}

/// Look up a topic by id (`"3"`), code (`"lsp"`, any case), or slug (`"3-lsp"`).
pub fn find_by_key(key: &str) -> Option<&'static Topic> {
    let key = key.trim();
    if let Ok(id) = key.parse::<u8>() {
        return find(id);
    }

    TOPICS
        .iter()
        .find(|topic| topic.code.eq_ignore_ascii_case(key) || topic.slug.eq_ignore_ascii_case(key))
}

impl Topic {
    /// Label used in the numbered menu: `1. Single Responsibility Principle (SRP)`
    pub fn menu_label(&self) -> String {
        format!("{}. {} ({})", self.id, self.name, self.code)
    }

    /// Parse the embedded description into its sections.
    pub fn doc(&self) -> Result<TopicDoc<'static>> {
        TopicDoc::parse(self.description)
            .with_context(|| format!("Failed to parse topic document {}", self.slug))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Which half of the bad/good contrast an example belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleKind {
    Bad,
    Good,
}

impl ExampleKind {
    pub fn label(self) -> &'static str {
        match self {
            ExampleKind::Bad => "Bad Example",
            ExampleKind::Good => "Good Example",
        }
    }

    fn from_heading(heading: &str) -> Option<Self> {
        match heading.trim().to_ascii_lowercase().as_str() {
            "bad example" => Some(ExampleKind::Bad),
            "good example" => Some(ExampleKind::Good),
            _ => None,
        }
    }
}

/// One example section of a topic document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example<'a> {
    pub kind: ExampleKind,
    /// Prose paragraphs preceding the code, joined by blank lines
    pub commentary: String,
    /// Code block contents, ending in a newline
    pub code: String,
    /// Fenced code block language tag, if any
    pub language: Option<String>,
    /// The section's markdown source, heading included
    pub source: &'a str,
}

/// Structured view of a topic description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDoc<'a> {
    pub title: String,
    pub intro: String,
    /// Markdown source before the first example section
    pub intro_source: &'a str,
    pub bad: Example<'a>,
    pub good: Example<'a>,
}

impl<'a> TopicDoc<'a> {
    pub fn parse(markdown: &'a str) -> Result<Self> {
        let mut title: Option<String> = None;
        let mut intro: Vec<String> = Vec::new();
        let mut bad = SectionParts::default();
        let mut good = SectionParts::default();

        let mut current: Option<ExampleKind> = None;
        let mut heading: Option<(HeadingLevel, usize)> = None;
        let mut language: Option<String> = None;
        let mut text = String::new();

        for (event, range) in Parser::new(markdown).into_offset_iter() {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    heading = Some((level, range.start));
                    text.clear();
                }
                Event::End(TagEnd::Heading(_)) => {
                    let Some((level, start)) = heading.take() else {
                        continue;
                    };
                    match level {
                        HeadingLevel::H1 if title.is_none() => {
                            title = Some(text.trim().to_string());
                        }
                        HeadingLevel::H2 => {
                            let Some(kind) = ExampleKind::from_heading(&text) else {
                                bail!("Unexpected section heading '{}'", text.trim());
                            };
                            let parts = match kind {
                                ExampleKind::Bad => &mut bad,
                                ExampleKind::Good => &mut good,
                            };
                            if parts.start.is_some() {
                                bail!("Duplicate section '{}'", kind.label());
                            }
                            parts.start = Some(start);
                            current = Some(kind);
                        }
                        _ => {}
                    }
                    text.clear();
                }
                Event::Start(Tag::Paragraph) => text.clear(),
                Event::End(TagEnd::Paragraph) => {
                    let paragraph = text.trim().to_string();
                    text.clear();
                    if paragraph.is_empty() {
                        continue;
                    }
                    match current {
                        None => intro.push(paragraph),
                        Some(ExampleKind::Bad) => bad.commentary.push(paragraph),
                        Some(ExampleKind::Good) => good.commentary.push(paragraph),
                    }
                }
                Event::Start(Tag::CodeBlock(kind)) => {
                    language = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(|lang| lang.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    text.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let code = std::mem::take(&mut text);
                    let Some(kind) = current else {
                        bail!("Code block found before the first example section");
                    };
                    let parts = match kind {
                        ExampleKind::Bad => &mut bad,
                        ExampleKind::Good => &mut good,
                    };
                    if parts.code.is_some() {
                        bail!("Section '{}' has more than one code block", kind.label());
                    }
                    parts.code = Some(code);
                    parts.language = language.take();
                }
                Event::Text(t) => text.push_str(&t),
                Event::Code(code) => {
                    text.push('`');
                    text.push_str(&code);
                    text.push('`');
                }
                Event::SoftBreak => text.push(' '),
                Event::HardBreak => text.push('\n'),
                _ => {}
            }
        }

        let title = title.context("Missing '#' title heading")?;
        let bad_start = bad.start.context("Missing '## Bad example' section")?;
        let good_start = good.start.context("Missing '## Good example' section")?;

        let first = bad_start.min(good_start);
        let (bad_end, good_end) = if bad_start < good_start {
            (good_start, markdown.len())
        } else {
            (markdown.len(), bad_start)
        };

        Ok(Self {
            title,
            intro: intro.join("\n\n"),
            intro_source: &markdown[..first],
            bad: bad.finish(ExampleKind::Bad, &markdown[bad_start..bad_end])?,
            good: good.finish(ExampleKind::Good, &markdown[good_start..good_end])?,
        })
    }

    pub fn example(&self, kind: ExampleKind) -> &Example<'a> {
        match kind {
            ExampleKind::Bad => &self.bad,
            ExampleKind::Good => &self.good,
        }
    }
}

#[derive(Default)]
struct SectionParts {
    start: Option<usize>,
    commentary: Vec<String>,
    code: Option<String>,
    language: Option<String>,
}

impl SectionParts {
    fn finish(self, kind: ExampleKind, source: &str) -> Result<Example<'_>> {
        let code = match self.code {
            Some(code) if !code.trim().is_empty() => code,
            _ => bail!("Section '{}' has no code block", kind.label()),
        };

        Ok(Example {
            kind,
            commentary: self.commentary.join("\n\n"),
            code,
            language: self.language,
            source,
        })
    }
}
