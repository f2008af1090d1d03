//! Configuration for the layout engine

/// Configuration options for layout computation
///
/// Defaults reproduce the metrics of the reference diagram style: 20px
/// indentation per level and 20px icons with a small gap to the label.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Horizontal indentation added per nesting level
    pub indent: f64,

    /// Height of one row
    pub row_height: f64,

    /// Width and height of the folder/file icons
    pub icon_size: f64,

    /// Gap between icon and name label
    pub label_gap: f64,

    /// Gap between name label and the `// comment` annotation
    pub comment_gap: f64,

    /// Font size for name labels
    pub font_size: f64,

    /// Font size for comment annotations
    pub comment_font_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            indent: 20.0,
            row_height: 24.0,
            icon_size: 20.0,
            label_gap: 6.0,
            comment_gap: 10.0,
            font_size: 13.0,
            comment_font_size: 11.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation per nesting level
    pub fn with_indent(mut self, indent: f64) -> Self {
        self.indent = indent;
        self
    }

    /// Set the row height
    pub fn with_row_height(mut self, height: f64) -> Self {
        self.row_height = height;
        self
    }

    /// Set the icon size
    pub fn with_icon_size(mut self, size: f64) -> Self {
        self.icon_size = size;
        self
    }

    /// Set the label font size
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }
}
