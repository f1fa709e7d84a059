//! Highlight pass orchestration
//!
//! This module coordinates one full pass over a document snapshot: resolve
//! the language grammar, gate each scan mode on the global settings, and
//! merge the scans into a single result for the rendering collaborator.

use tracing::trace;

use crate::config::Settings;
use crate::error::Result;
use crate::grammar::CommentGrammar;
use crate::scanner::{self, TagMatches};
use crate::style::{Span, TagStyle};
use crate::tags::TagRegistry;

/// Ranges collected for one tag in one pass
#[derive(Debug, Clone)]
pub struct TagRanges {
    /// The tag's configured marker
    pub marker: String,
    /// Style attributes passed through to the renderer
    pub style: TagStyle,
    /// Ranges to decorate, in scan order
    pub ranges: Vec<Span>,
}

/// Result of one highlight pass
///
/// Ordered like the tag configuration. Rebuilt wholesale every pass; a
/// failed pass produces no result at all, so callers keep their previous
/// ranges on error.
#[derive(Debug, Clone)]
pub struct ScanResult {
    entries: Vec<TagRanges>,
}

impl ScanResult {
    fn from_matches(registry: &TagRegistry, matches: TagMatches) -> Self {
        let entries = registry
            .iter()
            .enumerate()
            .map(|(index, tag)| TagRanges {
                marker: tag.marker.clone(),
                style: tag.style.clone(),
                ranges: matches.for_tag(index).to_vec(),
            })
            .collect();
        Self { entries }
    }

    /// Iterate per-tag results in configuration order
    pub fn iter(&self) -> impl Iterator<Item = &TagRanges> {
        self.entries.iter()
    }

    /// Ranges for a marker (case-insensitive, first configured wins)
    pub fn ranges_for(&self, marker: &str) -> Option<&[Span]> {
        let lowered = marker.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.marker.to_lowercase() == lowered)
            .map(|e| e.ranges.as_slice())
    }

    /// Total ranges across all tags
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.ranges.len()).sum()
    }

    /// Check whether the pass found nothing to decorate
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Comment-tag highlighter for one configuration version
///
/// Holds the registry built from the settings' tag list. Rebuilt wholesale
/// when configuration changes; individual passes share it read-only.
#[derive(Debug, Clone)]
pub struct Highlighter {
    settings: Settings,
    registry: TagRegistry,
}

impl Highlighter {
    /// Create a highlighter from settings
    ///
    /// Fails fast on malformed tag configuration.
    pub fn new(settings: Settings) -> Result<Self> {
        let registry = TagRegistry::build(&settings.tags)?;
        Ok(Self { settings, registry })
    }

    /// The active settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The tag registry built from the settings
    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    /// Run one full pass over a document snapshot
    ///
    /// The single-line scan checks its own applicability; the block scan
    /// runs only with multiline highlighting on; the doc scan runs for
    /// doc-block languages under multiline highlighting, or for every
    /// supported language when JSDoc-style highlighting is forced on.
    pub fn scan(&self, language_id: &str, text: &str) -> Result<ScanResult> {
        let grammar = CommentGrammar::resolve(language_id, self.settings.highlight_plain_text);
        trace!(
            language = language_id,
            supported = grammar.is_supported,
            "highlight pass"
        );

        let mut merged = TagMatches::new(self.registry.len());
        merged.merge(scanner::find_line_tags(text, &grammar, &self.registry)?);
        if self.settings.multiline_comments && grammar.supports_block() {
            merged.merge(scanner::find_block_tags(text, &grammar, &self.registry)?);
        }
        if (self.settings.multiline_comments && grammar.supports_doc_block)
            || self.settings.highlight_jsdoc
        {
            merged.merge(scanner::find_doc_tags(text, &grammar, &self.registry)?);
        }
        Ok(ScanResult::from_matches(&self.registry, merged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagDefinition;

    fn highlighter(markers: &[&str]) -> Highlighter {
        let mut settings = Settings::default();
        settings.tags = markers
            .iter()
            .map(|m| TagDefinition::new(m, TagStyle::default()))
            .collect();
        Highlighter::new(settings).unwrap()
    }

    fn range_texts<'a>(result: &ScanResult, marker: &str, text: &'a str) -> Vec<&'a str> {
        result
            .ranges_for(marker)
            .unwrap_or(&[])
            .iter()
            .map(|s| s.text(text))
            .collect()
    }

    #[test]
    fn test_scan_single_line_pass() {
        let highlighter = highlighter(&["!", "todo"]);
        let text = "// TODO: fix this\nlet x = 1; // ! urgent";
        let result = highlighter.scan("javascript", text).unwrap();

        assert_eq!(range_texts(&result, "todo", text), vec!["TODO: fix this"]);
        assert_eq!(range_texts(&result, "!", text), vec!["! urgent"]);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn test_scan_merges_block_pass() {
        let highlighter = highlighter(&["!"]);
        let text = "// ! line\n/*\n * ! block\n */";
        let result = highlighter.scan("c", text).unwrap();
        assert_eq!(range_texts(&result, "!", text), vec!["! line", "! block"]);
    }

    #[test]
    fn test_scan_multiline_disabled_skips_blocks() {
        let mut settings = Settings::default();
        settings.multiline_comments = false;
        settings.tags = vec![TagDefinition::new("!", TagStyle::default())];
        let highlighter = Highlighter::new(settings).unwrap();

        let text = "/*\n * ! hidden\n */\n// ! visible";
        let result = highlighter.scan("c", text).unwrap();
        assert_eq!(range_texts(&result, "!", text), vec!["! visible"]);
    }

    #[test]
    fn test_scan_doc_pass_for_doc_languages() {
        let highlighter = highlighter(&["todo"]);
        let text = "/**\n * todo refactor\n */";
        let result = highlighter.scan("typescript", text).unwrap();
        let ranges = result.ranges_for("todo").unwrap();
        // Both the block and doc scans see a `/** */` region; the doc scan
        // contributes the duplicate for the same line.
        assert!(!ranges.is_empty());
        assert!(ranges
            .iter()
            .all(|s| s.text(text) == "todo refactor"));
    }

    #[test]
    fn test_scan_jsdoc_flag_forces_doc_pass() {
        let mut settings = Settings::default();
        settings.multiline_comments = false;
        settings.highlight_jsdoc = true;
        settings.tags = vec![TagDefinition::new("todo", TagStyle::default())];
        let highlighter = Highlighter::new(settings).unwrap();

        // Rust has no doc-block convention in the grammar table; the flag
        // still turns the doc scan on.
        let text = "/**\n * todo forced\n */";
        let result = highlighter.scan("rust", text).unwrap();
        assert_eq!(range_texts(&result, "todo", text), vec!["todo forced"]);
    }

    #[test]
    fn test_scan_unknown_language_is_empty() {
        let highlighter = highlighter(&["!", "todo"]);
        let text = "// todo\n/* ! */\n/** * ! */";
        let result = highlighter.scan("unknownlang", text).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_result_order_follows_configuration() {
        let highlighter = highlighter(&["todo", "!"]);
        let result = highlighter.scan("rust", "// nothing").unwrap();
        let markers: Vec<&str> = result.iter().map(|e| e.marker.as_str()).collect();
        assert_eq!(markers, vec!["todo", "!"]);
    }

    #[test]
    fn test_scan_result_styles_pass_through() {
        let mut settings = Settings::default();
        settings.tags = vec![TagDefinition::new(
            "!",
            TagStyle::color("#FF2D00").with_bold(),
        )];
        let highlighter = Highlighter::new(settings).unwrap();
        let result = highlighter.scan("rust", "// ! styled").unwrap();
        let entry = result.iter().next().unwrap();
        assert_eq!(entry.style.color.as_deref(), Some("#FF2D00"));
        assert!(entry.style.bold);
    }

    #[test]
    fn test_default_settings_scan() {
        let highlighter = Highlighter::new(Settings::default()).unwrap();
        let text = "// ! alert\n// ? question\n// todo later";
        let result = highlighter.scan("rust", text).unwrap();
        assert_eq!(range_texts(&result, "!", text), vec!["! alert"]);
        assert_eq!(range_texts(&result, "?", text), vec!["? question"]);
        assert_eq!(range_texts(&result, "todo", text), vec!["todo later"]);
    }
}
