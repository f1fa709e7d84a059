//! Tag registry
//!
//! This module turns the configured tag markers into pattern-safe fragments
//! and holds them, in configuration order, for the scan engine. The registry
//! is rebuilt wholesale whenever configuration changes; it is never mutated
//! in place.

use tracing::debug;

use crate::error::{Result, ScanError};
use crate::style::TagStyle;

/// A configured tag before registry construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefinition {
    /// User-facing literal marker (e.g. `"todo"`, `"!"`)
    pub marker: String,
    /// Style attributes passed through to the renderer
    pub style: TagStyle,
}

impl TagDefinition {
    /// Create a definition from a marker and style
    pub fn new(marker: &str, style: TagStyle) -> Self {
        Self {
            marker: marker.to_string(),
            style,
        }
    }
}

/// A registered tag
#[derive(Debug, Clone)]
pub struct Tag {
    /// User-facing literal marker
    pub marker: String,
    /// Escaped pattern fragment for this marker
    pub pattern: String,
    /// Style attributes passed through to the renderer
    pub style: TagStyle,
}

/// Ordered set of registered tags plus the shared marker alternation
///
/// Configuration order determines lookup precedence (first registered wins
/// for markers that compare equal case-insensitively). The alternation is
/// ordered longest marker first so a marker that is a strict prefix of
/// another never shadows it.
#[derive(Debug, Clone)]
pub struct TagRegistry {
    tags: Vec<Tag>,
    alternation: String,
}

impl TagRegistry {
    /// Build a registry from configured tag definitions
    ///
    /// Fails on an empty marker string. An empty definition list builds a
    /// valid registry that yields no ranges.
    pub fn build(definitions: &[TagDefinition]) -> Result<Self> {
        let mut tags = Vec::with_capacity(definitions.len());
        for definition in definitions {
            if definition.marker.is_empty() {
                return Err(ScanError::EmptyMarker);
            }
            tags.push(Tag {
                marker: definition.marker.clone(),
                pattern: regex::escape(&definition.marker),
                style: definition.style.clone(),
            });
        }

        // Longest marker first; stable sort keeps configuration order
        // among equal lengths.
        let mut ordered: Vec<&Tag> = tags.iter().collect();
        ordered.sort_by(|a, b| b.marker.len().cmp(&a.marker.len()));
        let alternation = ordered
            .iter()
            .map(|t| t.pattern.as_str())
            .collect::<Vec<_>>()
            .join("|");

        debug!(tags = tags.len(), "tag registry built");
        Ok(Self { tags, alternation })
    }

    /// The escaped marker alternation shared by all scan modes
    pub fn alternation(&self) -> &str {
        &self.alternation
    }

    /// Number of registered tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check whether no tags are registered
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over tags in configuration order
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Get a tag by index
    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.tags.get(index)
    }

    /// Find the index of the tag for matched marker text
    ///
    /// Case-insensitive; first registered wins.
    pub fn position(&self, marker_text: &str) -> Option<usize> {
        let lowered = marker_text.to_lowercase();
        self.tags
            .iter()
            .position(|t| t.marker.to_lowercase() == lowered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs(markers: &[&str]) -> Vec<TagDefinition> {
        markers
            .iter()
            .map(|m| TagDefinition::new(m, TagStyle::default()))
            .collect()
    }

    #[test]
    fn test_marker_escaping() {
        let registry = TagRegistry::build(&defs(&["*", "//", "?"])).unwrap();
        assert_eq!(registry.get(0).unwrap().pattern, r"\*");
        assert_eq!(registry.get(1).unwrap().pattern, "//");
        assert_eq!(registry.get(2).unwrap().pattern, r"\?");
    }

    #[test]
    fn test_alternation_longest_first() {
        let registry = TagRegistry::build(&defs(&["*", "**", "todo"])).unwrap();
        assert_eq!(registry.alternation(), r"todo|\*\*|\*");
    }

    #[test]
    fn test_alternation_stable_for_equal_lengths() {
        let registry = TagRegistry::build(&defs(&["!", "?"])).unwrap();
        assert_eq!(registry.alternation(), r"!|\?");
    }

    #[test]
    fn test_empty_marker_rejected() {
        let result = TagRegistry::build(&defs(&["!", ""]));
        assert!(matches!(result, Err(ScanError::EmptyMarker)));
    }

    #[test]
    fn test_empty_list_is_valid() {
        let registry = TagRegistry::build(&[]).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.alternation(), "");
    }

    #[test]
    fn test_position_case_insensitive() {
        let registry = TagRegistry::build(&defs(&["!", "todo"])).unwrap();
        assert_eq!(registry.position("TODO"), Some(1));
        assert_eq!(registry.position("todo"), Some(1));
        assert_eq!(registry.position("!"), Some(0));
        assert_eq!(registry.position("missing"), None);
    }

    #[test]
    fn test_case_variant_markers_collapse() {
        // Two markers differing only by case resolve to the first
        // registered; the second is unreachable through lookup.
        let registry = TagRegistry::build(&defs(&["TODO", "todo"])).unwrap();
        assert_eq!(registry.position("todo"), Some(0));
        assert_eq!(registry.position("TODO"), Some(0));
    }
}
