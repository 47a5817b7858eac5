//! Built-in comment delimiters keyed by language id.
//!
//! The table is a static, immutable slice; records that omit a delimiter are
//! completed from here.

/// Begin marker, body prefix and end marker of a header comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    /// Line opening the header
    pub begin: &'static str,
    /// Prefix of every body line
    pub prefix: &'static str,
    /// Line closing the header
    pub end: &'static str,
}

/// C-style block comment, used for every language without a table entry.
pub const DEFAULT_COMMENT_STYLE: CommentStyle = CommentStyle {
    begin: "/*",
    prefix: " * ",
    end: " */",
};

const HASH_STYLE: CommentStyle = CommentStyle {
    begin: "#",
    prefix: "#",
    end: "#",
};

const MARKUP_STYLE: CommentStyle = CommentStyle {
    begin: "<!--",
    prefix: "",
    end: "-->",
};

static COMMENT_STYLES: &[(&str, CommentStyle)] = &[
    (
        "swift",
        CommentStyle {
            begin: "/**",
            prefix: " * ",
            end: " */",
        },
    ),
    (
        "lua",
        CommentStyle {
            begin: "--[[",
            prefix: "--",
            end: "--]]",
        },
    ),
    ("perl", HASH_STYLE),
    ("ruby", HASH_STYLE),
    (
        "vb",
        CommentStyle {
            begin: "'",
            prefix: "'",
            end: "'",
        },
    ),
    (
        "clojure",
        CommentStyle {
            begin: ";;",
            prefix: ";",
            end: ";;",
        },
    ),
    (
        "python",
        CommentStyle {
            begin: "'''",
            prefix: "",
            end: "'''",
        },
    ),
    ("xml", MARKUP_STYLE),
    ("html", MARKUP_STYLE),
    (
        "matlab",
        CommentStyle {
            begin: "%{",
            prefix: "%",
            end: "%}",
        },
    ),
];

/// Look up the comment style for a language id (exact match).
///
/// Falls back to [`DEFAULT_COMMENT_STYLE`] when the id has no entry.
#[must_use]
pub fn comment_style_for(language_id: &str) -> CommentStyle {
    COMMENT_STYLES
        .iter()
        .find(|(id, _)| *id == language_id)
        .map_or(DEFAULT_COMMENT_STYLE, |(_, style)| *style)
}
