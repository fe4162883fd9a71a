//! Consolidated document built from headings and paragraphs.
//!
//! [`ReportSink`] is the only capability the batch scan needs. [`Document`]
//! implements it and renders to HTML (via a handlebars template) or Markdown.

use crate::sequence::{Result, ScanError};
use handlebars::Handlebars;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Structured report output: append headings and paragraphs, then persist.
pub trait ReportSink {
    /// Append a heading. Level 1 is the document title.
    fn add_heading(&mut self, text: &str, level: u8);

    /// Append a paragraph.
    fn add_paragraph(&mut self, text: &str);

    /// Write the document to `path`.
    fn save(&self, path: &Path) -> Result<()>;
}

/// Output format of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Html,
    Markdown,
}

impl DocumentFormat {
    /// Parse format from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Some(Self::Html),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
        }
    }
}

/// One block of document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
}

/// Template view of a block.
#[derive(Serialize)]
struct BlockView<'a> {
    heading: bool,
    level: u8,
    text: &'a str,
}

#[derive(Serialize)]
struct DocumentView<'a> {
    title: &'a str,
    blocks: Vec<BlockView<'a>>,
}

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<style>
body { font-family: sans-serif; margin: 2em; }
p { word-break: break-all; }
</style>
</head>
<body>
{{#each blocks}}
{{#if heading}}<h{{level}}>{{text}}</h{{level}}>{{else}}<p>{{text}}</p>{{/if}}
{{/each}}
</body>
</html>
"#;

/// In-memory document accumulated over a run.
#[derive(Debug, Clone, Default)]
pub struct Document {
    format: DocumentFormat,
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            blocks: Vec::new(),
        }
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Text of the first heading, used as the HTML page title.
    fn title(&self) -> &str {
        self.blocks
            .iter()
            .find_map(|b| match b {
                Block::Heading { text, .. } => Some(text.as_str()),
                Block::Paragraph(_) => None,
            })
            .unwrap_or("")
    }

    /// Render the document in its configured format.
    pub fn render(&self) -> Result<String> {
        match self.format {
            DocumentFormat::Html => self.render_html(),
            DocumentFormat::Markdown => Ok(self.render_markdown()),
        }
    }

    /// Render as an HTML page. Text is HTML-escaped.
    pub fn render_html(&self) -> Result<String> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string("document", HTML_TEMPLATE)
            .map_err(|e| ScanError::Render(e.to_string()))?;

        let view = DocumentView {
            title: self.title(),
            blocks: self
                .blocks
                .iter()
                .map(|b| match b {
                    Block::Heading { level, text } => BlockView {
                        heading: true,
                        level: *level,
                        text,
                    },
                    Block::Paragraph(text) => BlockView {
                        heading: false,
                        level: 0,
                        text,
                    },
                })
                .collect(),
        };

        handlebars
            .render("document", &view)
            .map_err(|e| ScanError::Render(e.to_string()))
    }

    /// Render as Markdown.
    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                Block::Heading { level, text } => {
                    out.push_str(&"#".repeat(*level as usize));
                    out.push(' ');
                    out.push_str(text);
                }
                Block::Paragraph(text) => out.push_str(text),
            }
            out.push_str("\n\n");
        }
        out
    }
}

impl ReportSink for Document {
    fn add_heading(&mut self, text: &str, level: u8) {
        self.blocks.push(Block::Heading {
            level: level.clamp(1, 6),
            text: text.to_string(),
        });
    }

    fn add_paragraph(&mut self, text: &str) {
        self.blocks.push(Block::Paragraph(text.to_string()));
    }

    /// Render, then replace `path` atomically through a temporary file in the same directory.
    fn save(&self, path: &Path) -> Result<()> {
        let rendered = self.render()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let write_err = |source: std::io::Error| ScanError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(rendered.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}
