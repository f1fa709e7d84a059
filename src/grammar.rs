//! Comment grammar descriptors
//!
//! This module resolves a language identifier into the comment grammar the
//! scan engine works from: which single-line delimiter applies, which block
//! delimiters bound multi-line comments, and the per-language quirks
//! (first-line exemption, plain-text mode, doc-block support).

use crate::languages;

/// Comment grammar for one language
///
/// Delimiters are stored as pattern-safe fragments: escaped at resolution
/// time unless the table entry is whitelisted as a raw pattern. Immutable
/// once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGrammar {
    /// Language identifier this grammar was resolved for
    pub language_id: String,
    /// Single-line comment delimiter (None = single-line recognition off)
    pub line_delimiter: Option<String>,
    /// Block comment opening delimiter
    pub block_start: Option<String>,
    /// Block comment closing delimiter
    pub block_end: Option<String>,
    /// Whether the language has a `/** ... */` doc-comment convention
    pub supports_doc_block: bool,
    /// Match tags at line start instead of after a delimiter
    pub treat_as_plain_text: bool,
    /// Exempt a match at document offset 0 (shebang/header convention)
    pub ignore_first_line: bool,
    /// Whether the language is known at all
    pub is_supported: bool,
}

impl CommentGrammar {
    /// Resolve the grammar for a language identifier
    ///
    /// Pure function of the static language table. The `plaintext`
    /// pseudo-language is supported only while plain-text highlighting is
    /// enabled; every unknown identifier resolves to an unsupported grammar.
    pub fn resolve(language_id: &str, highlight_plain_text: bool) -> Self {
        if language_id == "plaintext" {
            return Self {
                language_id: language_id.to_string(),
                line_delimiter: None,
                block_start: None,
                block_end: None,
                supports_doc_block: false,
                treat_as_plain_text: true,
                ignore_first_line: false,
                is_supported: highlight_plain_text,
            };
        }

        match languages::entry_for(language_id) {
            Some(entry) => Self {
                language_id: language_id.to_string(),
                line_delimiter: entry.line.map(|d| {
                    if entry.raw_line {
                        d.to_string()
                    } else {
                        regex::escape(d)
                    }
                }),
                block_start: entry.block.map(|(start, _)| regex::escape(start)),
                block_end: entry.block.map(|(_, end)| regex::escape(end)),
                supports_doc_block: entry.doc_block,
                treat_as_plain_text: false,
                ignore_first_line: entry.ignore_first_line,
                is_supported: true,
            },
            None => Self::unsupported(language_id),
        }
    }

    /// Grammar for a language the table does not know
    pub fn unsupported(language_id: &str) -> Self {
        Self {
            language_id: language_id.to_string(),
            line_delimiter: None,
            block_start: None,
            block_end: None,
            supports_doc_block: false,
            treat_as_plain_text: false,
            ignore_first_line: false,
            is_supported: false,
        }
    }

    /// Whether single-line recognition applies
    pub fn supports_line(&self) -> bool {
        self.line_delimiter.is_some()
    }

    /// Whether block recognition applies
    pub fn supports_block(&self) -> bool {
        self.block_start.is_some() && self.block_end.is_some()
    }
}
