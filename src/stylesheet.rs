//! Stylesheet system for diagram color palettes
//!
//! This module provides symbolic color tokens that can be resolved to
//! concrete values via stylesheets, so a tree can be re-rendered in a
//! different theme without touching the input.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping symbolic colors to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> value
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - the reference diagram colors: amber folders, blue
/// files, gray guides and comments on a white canvas
const DEFAULT_PALETTE: &str = r##"
[colors]
# Canvas
background = "#ffffff"

# Text
text = "#1f2937"
comment = "#6b7280"

# Guide lines connecting rows
guide = "#d1d5db"

# Folder icon (back flap / front face)
folder-primary = "#ffa000"
folder-secondary = "#ffca28"

# File icon (body / corner fold)
file-primary = "#90caf9"
file-secondary = "#e1f5fe"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic color token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic color token with fallback to the default palette
    ///
    /// Fallback order:
    /// 1. Check this stylesheet for the exact token
    /// 2. Check the default palette for the exact token
    /// 3. Use a category default (folder-* → amber, file-* → blue, etc.)
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        if token.starts_with("folder") {
            return "#ffa000".to_string();
        }
        if token.starts_with("file") {
            return "#90caf9".to_string();
        }
        if token.starts_with("background") {
            return "#ffffff".to_string();
        }
        if token.starts_with("comment") {
            return "#6b7280".to_string();
        }
        if token.starts_with("guide") {
            return "#d1d5db".to_string();
        }

        // Unknown category - render in the text color
        "#1f2937".to_string()
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        assert!(stylesheet.colors.contains_key("background"));
        assert!(stylesheet.colors.contains_key("folder-primary"));
        assert!(stylesheet.colors.contains_key("file-primary"));
        assert!(stylesheet.colors.contains_key("guide"));
    }

    #[test]
    fn test_resolve_existing_token() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("folder-primary"), Some("#ffa000"));
        assert_eq!(stylesheet.resolve("guide"), Some("#d1d5db"));
    }

    #[test]
    fn test_resolve_missing_token() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("nonexistent"), None);
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        // Empty stylesheet should fall back to defaults
        let empty = Stylesheet {
            name: None,
            description: None,
            colors: HashMap::new(),
        };
        assert_eq!(empty.resolve_or_default("folder-primary"), "#ffa000");
        assert_eq!(empty.resolve_or_default("background"), "#ffffff");
    }

    #[test]
    fn test_resolve_or_default_category_fallback() {
        let empty = Stylesheet {
            name: None,
            description: None,
            colors: HashMap::new(),
        };
        // Unknown specific token but known category
        assert_eq!(empty.resolve_or_default("folder-highlight"), "#ffa000");
        assert_eq!(empty.resolve_or_default("file-accent"), "#90caf9");
    }

    #[test]
    fn test_custom_overrides_default() {
        let custom = Stylesheet::from_str(
            r##"
[colors]
folder-primary = "#123456"
"##,
        )
        .expect("Should parse");
        assert_eq!(custom.resolve_or_default("folder-primary"), "#123456");
        // Unset tokens still come from the default palette
        assert_eq!(custom.resolve_or_default("file-primary"), "#90caf9");
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Dark"
description = "Dark canvas theme"

[colors]
background = "#111111"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Dark".to_string()));
        assert_eq!(stylesheet.resolve("background"), Some("#111111"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Stylesheet::from_str(invalid);
        assert!(result.is_err());
    }
}
