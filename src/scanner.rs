//! Comment tag scanning
//!
//! Three independent scans over a document snapshot: single-line comments,
//! delimiter-bounded block comments, and doc-style block comments. Each is a
//! pure function of the document text, the resolved grammar, and the tag
//! registry, and returns per-tag range lists in document order.
//!
//! Block scanning is two-stage: locate whole comment regions first, then
//! re-scan each region line by line. A single combined pattern cannot
//! express "tag at the start of a line inside a comment body", so the two
//! matchers stay separate.

use regex::{Match, Regex};
use tracing::debug;

use crate::error::{Result, ScanError};
use crate::grammar::CommentGrammar;
use crate::style::Span;
use crate::tags::TagRegistry;

/// Per-tag spans collected by one or more scans
///
/// Indexed parallel to the registry's tag order. Spans for each tag are
/// appended in document order within a scan.
#[derive(Debug, Clone)]
pub struct TagMatches {
    per_tag: Vec<Vec<Span>>,
}

impl TagMatches {
    /// Create an empty match set for a registry of the given size
    pub fn new(tag_count: usize) -> Self {
        Self {
            per_tag: vec![Vec::new(); tag_count],
        }
    }

    fn push(&mut self, tag_index: usize, span: Span) {
        if let Some(spans) = self.per_tag.get_mut(tag_index) {
            spans.push(span);
        }
    }

    /// Append another scan's spans onto this set
    pub fn merge(&mut self, other: TagMatches) {
        debug_assert_eq!(self.per_tag.len(), other.per_tag.len());
        for (ours, theirs) in self.per_tag.iter_mut().zip(other.per_tag) {
            ours.extend(theirs);
        }
    }

    /// Spans collected for the tag at a registry index
    pub fn for_tag(&self, tag_index: usize) -> &[Span] {
        self.per_tag
            .get(tag_index)
            .map(|s| s.as_slice())
            .unwrap_or(&[])
    }

    /// Number of tag slots
    pub fn tag_count(&self) -> usize {
        self.per_tag.len()
    }

    /// Total spans across all tags
    pub fn total(&self) -> usize {
        self.per_tag.iter().map(|s| s.len()).sum()
    }

    /// Check whether no spans were collected
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Scan for tags in single-line comments
///
/// Matches the grammar's single-line delimiter, optional horizontal
/// whitespace, then a registered marker; the emitted span runs from the
/// marker through the end of the line. In plain-text mode the match anchors
/// to line start instead of a delimiter. With `ignore_first_line`, a match
/// beginning at document offset 0 is discarded.
pub fn find_line_tags(
    text: &str,
    grammar: &CommentGrammar,
    registry: &TagRegistry,
) -> Result<TagMatches> {
    let mut matches = TagMatches::new(registry.len());
    if !grammar.is_supported || registry.is_empty() {
        return Ok(matches);
    }

    let pattern = if grammar.treat_as_plain_text {
        format!(r"(?im)^[ \t]*({})[^\r\n]*", registry.alternation())
    } else {
        match &grammar.line_delimiter {
            Some(delimiter) => format!(
                r"(?im)(?:{})[ \t]*({})[^\r\n]*",
                delimiter,
                registry.alternation()
            ),
            None => return Ok(matches),
        }
    };
    let regex = compile(&pattern)?;

    let mut pos = 0;
    while let Some((whole, tag)) = next_match(&regex, text, pos) {
        pos = advance(text, pos, whole.end());
        if grammar.ignore_first_line && whole.start() == 0 {
            continue;
        }
        match registry.position(tag.as_str()) {
            Some(index) => matches.push(index, Span::new(tag.start(), whole.end())),
            None => debug!(marker = tag.as_str(), "matched marker not in registry"),
        }
    }
    Ok(matches)
}

/// Scan for tags in delimiter-bounded block comments
///
/// Stage one finds whole `block_start ... block_end` regions; stage two
/// re-scans each region line by line for a marker after optional leading
/// whitespace and an optional `*` continuation marker, with an optional
/// trailing `:` before the highlighted remainder.
pub fn find_block_tags(
    text: &str,
    grammar: &CommentGrammar,
    registry: &TagRegistry,
) -> Result<TagMatches> {
    let mut matches = TagMatches::new(registry.len());
    if !grammar.is_supported || registry.is_empty() || !grammar.supports_block() {
        return Ok(matches);
    }
    let (start, end) = match (&grammar.block_start, &grammar.block_end) {
        (Some(start), Some(end)) => (start, end),
        _ => return Ok(matches),
    };

    let region_regex = compile(&format!(r"(?s){}.*?{}", start, end))?;
    let line_regex = compile(&format!(
        r"(?im)^[ \t]*(?:\*[ \t]*)?({}):?[ \t]*(?:[^*/\r\n][^\r\n]*)?",
        registry.alternation()
    ))?;

    scan_regions(text, &region_regex, &line_regex, registry, &mut matches);
    Ok(matches)
}

/// Scan for tags in doc-style block comments
///
/// Same two-stage shape as [`find_block_tags`], with the outer region fixed
/// to the `/** ... */` convention and the inner line requiring the leading
/// `*` emphasis marker.
pub fn find_doc_tags(
    text: &str,
    grammar: &CommentGrammar,
    registry: &TagRegistry,
) -> Result<TagMatches> {
    let mut matches = TagMatches::new(registry.len());
    if !grammar.is_supported || registry.is_empty() {
        return Ok(matches);
    }

    let region_regex = compile(r"(?s)/\*\*.*?\*/")?;
    let line_regex = compile(&format!(
        r"(?im)^[ \t]*\*[ \t]*({}):?[ \t]*(?:[^*/\r\n][^\r\n]*)?",
        registry.alternation()
    ))?;

    scan_regions(text, &region_regex, &line_regex, registry, &mut matches);
    Ok(matches)
}

/// Run the inner line matcher over every outer region, translating spans
/// back to absolute document offsets
fn scan_regions(
    text: &str,
    region_regex: &Regex,
    line_regex: &Regex,
    registry: &TagRegistry,
    matches: &mut TagMatches,
) {
    let mut pos = 0;
    while let Some(region) = next_find(region_regex, text, pos) {
        pos = advance(text, pos, region.end());
        let body = region.as_str();

        let mut inner = 0;
        while let Some((whole, tag)) = next_match(line_regex, body, inner) {
            inner = advance(body, inner, whole.end());
            match registry.position(tag.as_str()) {
                Some(index) => matches.push(
                    index,
                    Span::new(region.start() + tag.start(), region.start() + whole.end()),
                ),
                None => debug!(marker = tag.as_str(), "matched marker not in registry"),
            }
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ScanError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Find the next match at or after a position, with its marker group
fn next_match<'t>(regex: &Regex, text: &'t str, pos: usize) -> Option<(Match<'t>, Match<'t>)> {
    if pos > text.len() {
        return None;
    }
    let caps = regex.captures_at(text, pos)?;
    let whole = caps.get(0)?;
    let tag = caps.get(1)?;
    Some((whole, tag))
}

/// Find the next plain match at or after a position
fn next_find<'t>(regex: &Regex, text: &'t str, pos: usize) -> Option<Match<'t>> {
    if pos > text.len() {
        return None;
    }
    regex.find_at(text, pos)
}

/// Advance the scan position past a match, always making forward progress
fn advance(text: &str, pos: usize, match_end: usize) -> usize {
    if match_end > pos {
        return match_end;
    }
    let mut next = pos + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}
