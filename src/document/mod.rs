//! Line-indexed text documents and the edit primitive.
//!
//! A [`TextDocument`] stores its text as a vector of lines without line
//! terminators, the way editors expose documents: `"a\nb\n"` has three lines,
//! the last one empty, and an empty document has one empty line.
//!
//! All mutation goes through [`TextDocument::apply_edits`]. Edits are computed
//! against one snapshot of the lines and applied together, highest position
//! first, so earlier edits never shift the positions of later ones.
//!
//! Columns are counted in characters and clamped to the line length; a line
//! index past the end addresses the end of the document.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::utils::fs::atomic_write;

const BOM: char = '\u{feff}';

/// Line terminator used when the document is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// The dominant terminator of `text`; `\n` when there is none.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        let total = text.matches('\n').count();
        let crlf = text.matches("\r\n").count();
        if crlf > 0 && crlf * 2 >= total {
            Self::CrLf
        } else {
            Self::Lf
        }
    }
}

/// A zero-based line and character offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line index
    pub line: usize,
    /// Character offset within the line
    pub character: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(line: usize, character: usize) -> Self {
        Self {
            line,
            character,
        }
    }
}

/// A half-open span between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// Inclusive start
    pub start: Position,
    /// Exclusive end
    pub end: Position,
}

impl Range {
    /// Create a range.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
        }
    }
}

/// Replace the text in `range` with `new_text`. An empty range inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Span being replaced
    pub range: Range,
    /// Replacement text; `\n` separates lines
    pub new_text: String,
}

impl TextEdit {
    /// Insert `text` at `position`.
    pub fn insert(position: Position, text: impl Into<String>) -> Self {
        Self {
            range: Range::new(position, position),
            new_text: text.into(),
        }
    }

    /// Replace `range` with `text`.
    pub fn replace(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: text.into(),
        }
    }
}

/// An open text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    path: PathBuf,
    language_id: String,
    lines: Vec<String>,
    eol: LineEnding,
    bom: bool,
    dirty: bool,
}

impl TextDocument {
    /// Create a clean document from its full text.
    ///
    /// A leading byte order mark is kept out of the lines and restored by
    /// [`Self::to_text`].
    pub fn from_text(path: impl Into<PathBuf>, language_id: impl Into<String>, text: &str) -> Self {
        let (text, bom) = match text.strip_prefix(BOM) {
            Some(rest) => (rest, true),
            None => (text, false),
        };
        let eol = LineEnding::detect(text);
        let lines = split_lines(text);

        Self {
            path: path.into(),
            language_id: language_id.into(),
            lines,
            eol,
            bom,
            dirty: false,
        }
    }

    /// Read a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not UTF-8.
    pub async fn open(path: impl Into<PathBuf>, language_id: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let text = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        debug!("Opened {} ({} bytes)", path.display(), text.len());
        Ok(Self::from_text(path, language_id, &text))
    }

    /// Write the document back to its file atomically and mark it saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&mut self) -> Result<()> {
        atomic_write(&self.path, self.to_text().as_bytes())
            .with_context(|| format!("Failed to save {}", self.path.display()))?;
        self.dirty = false;
        Ok(())
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Editor language identifier.
    #[must_use]
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// Number of lines; never zero.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of line `index`, without its terminator.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// An owned copy of the lines, for computing edits.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.clone()
    }

    /// The line terminator used by [`Self::to_text`].
    #[must_use]
    pub const fn line_ending(&self) -> LineEnding {
        self.eol
    }

    /// Whether the file starts with a byte order mark.
    #[must_use]
    pub const fn has_bom(&self) -> bool {
        self.bom
    }

    /// Whether the document has unsaved changes.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flag the document as modified.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Flag the document as saved.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Full text joined with the document's line ending.
    #[must_use]
    pub fn to_text(&self) -> String {
        let text = self.lines.join(self.eol.as_str());
        if self.bom { format!("{BOM}{text}") } else { text }
    }

    fn offset_at(&self, text: &str, position: Position) -> usize {
        if position.line >= self.lines.len() {
            return text.len();
        }

        let line_start: usize = self.lines[..position.line].iter().map(|l| l.len() + 1).sum();
        let line = &self.lines[position.line];
        let column = line.char_indices().nth(position.character).map_or(line.len(), |(i, _)| i);

        line_start + column
    }

    /// Apply a batch of edits computed against the current lines.
    ///
    /// Edits are applied from the highest start position down; edits at the
    /// same position keep their given order in the result. Returns `true`
    /// when anything changed.
    pub fn apply_edits(&mut self, edits: Vec<TextEdit>) -> bool {
        if edits.is_empty() {
            return false;
        }

        let mut text = self.lines.join("\n");
        let mut spans: Vec<(usize, usize, usize, String)> = edits
            .into_iter()
            .enumerate()
            .map(|(index, edit)| {
                let start = self.offset_at(&text, edit.range.start);
                let end = self.offset_at(&text, edit.range.end).max(start);
                (start, end, index, edit.new_text)
            })
            .collect();

        spans.sort_by(|a, b| b.0.cmp(&a.0).then(b.2.cmp(&a.2)));

        let before = text.clone();
        for (start, end, _, new_text) in spans {
            trace!("Applying edit at bytes {start}..{end}: {new_text:?}");
            text.replace_range(start..end, &new_text);
        }

        if text == before {
            return false;
        }

        self.lines = split_lines(&text);
        self.dirty = true;
        true
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line).to_string()).collect()
}
