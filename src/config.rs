//! Configuration file support
//!
//! Loads settings from ~/.tagscan.toml (or %USERPROFILE%\.tagscan.toml on
//! Windows).
//!
//! Example:
//! ```toml
//! multiline-comments = true
//! highlight-plain-text = false
//! highlight-jsdoc = false
//!
//! [[tags]]
//! marker = "todo"
//! color = "#FF8C00"
//! bold = true
//! ```

use std::fs;
use std::path::PathBuf;

use crate::error::{Result, ScanError};
use crate::style::TagStyle;
use crate::tags::TagDefinition;

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Whether block comment scanning is enabled
    pub multiline_comments: bool,
    /// Whether plain-text documents are scanned for line-start tags
    pub highlight_plain_text: bool,
    /// Force doc-style scanning regardless of language doc support
    pub highlight_jsdoc: bool,
    /// Configured tags, in precedence order
    pub tags: Vec<TagDefinition>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            multiline_comments: true,
            highlight_plain_text: false,
            highlight_jsdoc: false,
            tags: default_tags(),
        }
    }
}

/// The stock tag set
fn default_tags() -> Vec<TagDefinition> {
    vec![
        TagDefinition::new("!", TagStyle::color("#FF2D00")),
        TagDefinition::new("?", TagStyle::color("#3498DB")),
        TagDefinition::new("//", TagStyle::color("#474747").with_strikethrough()),
        TagDefinition::new("todo", TagStyle::color("#FF8C00")),
        TagDefinition::new("*", TagStyle::color("#98C379")),
    ]
}

impl Settings {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".tagscan.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".tagscan.toml"))
        }
    }

    /// Load configuration from the config file
    ///
    /// A missing file yields the defaults; a present but malformed file is
    /// a configuration error, with no partial settings applied.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => match fs::read_to_string(&path) {
                Ok(contents) => Self::from_toml(&contents),
                Err(_) => Ok(Self::default()),
            },
            None => Ok(Self::default()),
        }
    }

    /// Parse settings from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let table: toml::Table = contents
            .parse()
            .map_err(|e: toml::de::Error| ScanError::Config(e.to_string()))?;
        let mut settings = Self::default();
        settings.apply(&table)?;
        Ok(settings)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &toml::Table) -> Result<()> {
        if let Some(value) = table.get("multiline-comments").and_then(|v| v.as_bool()) {
            self.multiline_comments = value;
        }

        if let Some(value) = table.get("highlight-plain-text").and_then(|v| v.as_bool()) {
            self.highlight_plain_text = value;
        }

        if let Some(value) = table.get("highlight-jsdoc").and_then(|v| v.as_bool()) {
            self.highlight_jsdoc = value;
        }

        if let Some(value) = table.get("tags") {
            let items = value
                .as_array()
                .ok_or_else(|| ScanError::Config("tags must be an array of tables".into()))?;
            let mut tags = Vec::with_capacity(items.len());
            for item in items {
                tags.push(parse_tag(item)?);
            }
            self.tags = tags;
        }

        Ok(())
    }
}

/// Parse one tag entry
fn parse_tag(value: &toml::Value) -> Result<TagDefinition> {
    let table = value
        .as_table()
        .ok_or_else(|| ScanError::Config("tag entry must be a table".into()))?;

    let marker = table
        .get("marker")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ScanError::Config("tag entry requires a string marker".into()))?;

    let mut style = TagStyle::default();
    if let Some(color) = table.get("color").and_then(|v| v.as_str()) {
        style.color = Some(color.to_string());
    }
    if let Some(color) = table.get("background-color").and_then(|v| v.as_str()) {
        style.background_color = Some(color.to_string());
    }
    if let Some(value) = table.get("bold").and_then(|v| v.as_bool()) {
        style.bold = value;
    }
    if let Some(value) = table.get("italic").and_then(|v| v.as_bool()) {
        style.italic = value;
    }
    if let Some(value) = table.get("underline").and_then(|v| v.as_bool()) {
        style.underline = value;
    }
    if let Some(value) = table.get("strikethrough").and_then(|v| v.as_bool()) {
        style.strikethrough = value;
    }

    Ok(TagDefinition::new(marker, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.multiline_comments);
        assert!(!settings.highlight_plain_text);
        assert!(!settings.highlight_jsdoc);
        assert_eq!(settings.tags.len(), 5);
        assert_eq!(settings.tags[0].marker, "!");
        assert!(settings.tags[2].style.strikethrough);
    }

    #[test]
    fn test_from_toml_flags() {
        let settings = Settings::from_toml(
            "multiline-comments = false\nhighlight-plain-text = true\n",
        )
        .unwrap();
        assert!(!settings.multiline_comments);
        assert!(settings.highlight_plain_text);
        assert!(!settings.highlight_jsdoc);
        // Tags untouched when the file does not list any
        assert_eq!(settings.tags.len(), 5);
    }

    #[test]
    fn test_from_toml_tags() {
        let contents = r##"
[[tags]]
marker = "fixme"
color = "#FF0000"
bold = true

[[tags]]
marker = "note"
background-color = "#222222"
underline = true
"##;
        let settings = Settings::from_toml(contents).unwrap();
        assert_eq!(settings.tags.len(), 2);
        assert_eq!(settings.tags[0].marker, "fixme");
        assert_eq!(settings.tags[0].style.color.as_deref(), Some("#FF0000"));
        assert!(settings.tags[0].style.bold);
        assert_eq!(
            settings.tags[1].style.background_color.as_deref(),
            Some("#222222")
        );
        assert!(settings.tags[1].style.underline);
    }

    #[test]
    fn test_from_toml_missing_marker() {
        let contents = "[[tags]]\ncolor = \"#FF0000\"\n";
        assert!(matches!(
            Settings::from_toml(contents),
            Err(ScanError::Config(_))
        ));
    }

    #[test]
    fn test_from_toml_non_string_marker() {
        let contents = "[[tags]]\nmarker = 3\n";
        assert!(matches!(
            Settings::from_toml(contents),
            Err(ScanError::Config(_))
        ));
    }

    #[test]
    fn test_from_toml_invalid_syntax() {
        assert!(matches!(
            Settings::from_toml("tags = ["),
            Err(ScanError::Config(_))
        ));
    }

    #[test]
    fn test_from_toml_empty_tag_list() {
        let settings = Settings::from_toml("tags = []\n").unwrap();
        assert!(settings.tags.is_empty());
    }
}
