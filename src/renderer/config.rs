//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Padding around the viewBox
    pub viewbox_padding: f64,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "ds-" for "ds-guide")
    pub class_prefix: Option<String>,

    /// Corner radius of the canvas background rect
    pub canvas_radius: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 20.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("ds-".to_string()),
            canvas_radius: 6.0,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewBox padding
    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
