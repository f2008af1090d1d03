//! dirsketch - directory tree diagrams from JSON
//!
//! This library parses a JSON description of a directory structure,
//! normalizes it (folders before files, then alphabetical), and renders it
//! as a self-contained SVG tree diagram.
//!
//! # Example
//!
//! ```rust
//! use dirsketch::render;
//!
//! let svg = render(r#"{ "type": "folder", "name": "src", "children": [] }"#).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod error;
pub mod export;
pub mod layout;
pub mod normalize;
pub mod parser;
pub mod renderer;
pub mod stylesheet;

pub use error::ParseError;
pub use layout::{LayoutConfig, LayoutResult};
pub use normalize::normalize;
pub use parser::{parse, to_json, Node};
pub use renderer::{render_svg, render_svg_with_stylesheet, SvgConfig};
pub use stylesheet::Stylesheet;

use thiserror::Error;

/// Errors that can occur during the render pipeline
///
/// Parsing is the only fallible stage: normalization and layout are total
/// over well-formed trees.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during parsing or validation of the input JSON
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
    /// Minify the output document
    pub optimize: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
            stylesheet: Stylesheet::default(),
            optimize: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable output minification
    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }
}

/// Render tree JSON to SVG with default configuration
///
/// This is the main entry point for the library. It parses and validates
/// the source, normalizes the tree, computes layout, and generates SVG.
///
/// # Example
///
/// ```rust
/// use dirsketch::render;
///
/// let svg = render(r#"{
///     "type": "folder",
///     "name": "project",
///     "children": [
///         { "type": "file", "name": "Cargo.toml" },
///         { "type": "folder", "name": "src", "children": [] }
///     ]
/// }"#).unwrap();
///
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains("Cargo.toml"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render tree JSON to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use dirsketch::{render_with_config, LayoutConfig, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::default().with_indent(30.0))
///     .with_svg(SvgConfig::default().with_viewbox_padding(40.0))
///     .with_optimize(true);
///
/// let source = r#"{ "type": "folder", "name": "root", "children": [] }"#;
/// let svg = render_with_config(source, config).unwrap();
/// assert!(svg.contains("<svg"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let root = parse(source)?;
    let sorted = normalize(&root);
    let result = layout::compute(&sorted, &config.layout);
    let svg = render_svg_with_stylesheet(&result, &config.svg, &config.stylesheet);

    Ok(if config.optimize {
        export::optimize(&svg)
    } else {
        svg
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_simple_tree() {
        let svg = render(r#"{ "type": "folder", "name": "root", "children": [] }"#).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("root"));
    }

    #[test]
    fn test_render_sorts_before_drawing() {
        let svg = render(
            r#"{
                "type": "folder",
                "name": "root",
                "children": [
                    { "type": "file", "name": "zzz.txt" },
                    { "type": "folder", "name": "aaa", "children": [] }
                ]
            }"#,
        )
        .unwrap();
        // The folder row must come before the file row in document order
        let folder_pos = svg.find(">aaa<").expect("folder label should render");
        let file_pos = svg.find(">zzz.txt<").expect("file label should render");
        assert!(folder_pos < file_pos);
    }

    #[test]
    fn test_render_includes_comments() {
        let svg = render(
            r#"{
                "type": "folder",
                "name": "root",
                "children": [
                    { "type": "file", "name": "lib.rs", "comment": "library root" }
                ]
            }"#,
        )
        .unwrap();
        assert!(svg.contains("// library root"));
    }

    #[test]
    fn test_render_invalid_json_error() {
        let result = render("{ not valid");
        assert!(matches!(result, Err(RenderError::Parse(_))));
    }

    #[test]
    fn test_render_file_root_error() {
        let result = render(r#"{ "type": "file", "name": "orphan.txt" }"#);
        assert!(matches!(
            result,
            Err(RenderError::Parse(ParseError::RootNotFolder { .. }))
        ));
    }

    #[test]
    fn test_render_optimized_output_is_single_line() {
        let config = RenderConfig::new().with_optimize(true);
        let svg = render_with_config(
            r#"{ "type": "folder", "name": "root", "children": [] }"#,
            config,
        )
        .unwrap();
        assert!(!svg.contains('\n'));
    }
}
