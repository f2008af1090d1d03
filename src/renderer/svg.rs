//! SVG generation from layout results

use std::collections::BTreeMap;

use crate::layout::{BoundingBox, GuideSegment, IconKind, LayoutResult, NodeRow, RowMetrics};
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// Folder icon geometry (20x20 viewBox): back flap and front face
const FOLDER_ICON_PATHS: [(&str, &str); 2] = [
    (
        "M15.8333 5H9.16663L7.49996 3.33333H3.33329C2.41663 3.33333 1.66663 4.08333 1.66663 5V15C1.66663 15.9167 2.41663 16.6667 3.33329 16.6667H16.25C16.9583 16.6667 17.5 16.125 17.5 15.4167V6.66667C17.5 5.75 16.75 5 15.8333 5Z",
        "folder-primary",
    ),
    (
        "M17.5834 7.5H6.37504C5.58337 7.5 4.87504 8.08333 4.75004 8.875L3.33337 16.6667H16.5417C17.3334 16.6667 18.0417 16.0833 18.1667 15.2917L19.2084 9.45833C19.4167 8.45833 18.625 7.5 17.5834 7.5Z",
        "folder-secondary",
    ),
];

/// File icon geometry (20x20 viewBox): page body and corner fold
const FILE_ICON_PATHS: [(&str, &str); 2] = [
    (
        "M16.6667 18.75H3.33337V1.25H12.5L16.6667 5.41667V18.75Z",
        "file-primary",
    ),
    (
        "M16.0417 5.83333H12.0834V1.875L16.0417 5.83333Z",
        "file-secondary",
    ),
];

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    styles: Vec<String>,
    guides: Vec<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            styles: vec![],
            guides: vec![],
            elements: vec![],
        }
    }

    /// Add CSS custom properties from a stylesheet
    ///
    /// Every color the document references is defined inside its own
    /// `<style>` block, keeping the output self-contained. A partial
    /// stylesheet only overrides the tokens it names: the remaining ones
    /// are resolved through the default palette, so `var(--...)` references
    /// in the document are always defined.
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let prefix = self.prefix();
        let pretty = self.config.pretty_print;

        // BTreeMap keeps output order deterministic
        let mut tokens: BTreeMap<String, String> = Stylesheet::default()
            .colors
            .keys()
            .map(|token| (token.clone(), stylesheet.resolve_or_default(token)))
            .collect();
        for (token, value) in &stylesheet.colors {
            tokens.insert(token.clone(), value.clone());
        }

        let mut css = String::from(":root {");
        for (token, value) in &tokens {
            css.push_str(if pretty { "\n    " } else { " " });
            css.push_str(&format!("--{}: {};", token, value));
        }
        css.push_str(if pretty { "\n  }\n  " } else { " } " });

        let font = stylesheet
            .colors
            .get("font-family")
            .cloned()
            .unwrap_or_else(|| "system-ui, sans-serif".to_string());
        css.push_str(&format!(
            ".{prefix}label, .{prefix}comment {{ font-family: {font}; }}"
        ));
        self.styles.push(css);
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the icon `<symbol>` definition for one icon kind
    pub fn add_icon_def(&mut self, kind: IconKind) {
        let prefix = self.prefix();
        let (id, paths) = match kind {
            IconKind::Folder => ("icon-folder", &FOLDER_ICON_PATHS),
            IconKind::File => ("icon-file", &FILE_ICON_PATHS),
        };
        let body: String = paths
            .iter()
            .map(|(d, token)| format!(r#"<path d="{}" fill="var(--{})"/>"#, d, token))
            .collect();
        self.defs.push(format!(
            r#"<symbol id="{prefix}{id}" viewBox="0 0 20 20">{body}</symbol>"#
        ));
    }

    /// Add the canvas background rect covering the padded viewBox
    pub fn add_canvas(&mut self, bounds: BoundingBox) {
        let prefix = self.prefix();
        let padding = self.config.viewbox_padding;
        let x = bounds.x - padding;
        let y = bounds.y - padding;
        self.elements.push(format!(
            r#"{}<rect class="{}canvas" x="{}" y="{}" width="{}" height="{}" rx="{}" fill="var(--background)"/>"#,
            self.indent_str(),
            prefix,
            fmt(x),
            fmt(y),
            fmt(bounds.right() + padding - x),
            fmt(bounds.bottom() + padding - y),
            fmt(self.config.canvas_radius),
        ));
    }

    /// Add one guide-line segment
    pub fn add_guide(&mut self, segment: &GuideSegment) {
        let prefix = self.prefix();
        self.guides.push(format!(
            r#"{}<line class="{}guide" x1="{}" y1="{}" x2="{}" y2="{}" stroke="var(--guide)" stroke-width="2"/>"#,
            self.indent_str(),
            prefix,
            fmt(segment.start.x),
            fmt(segment.start.y),
            fmt(segment.end.x),
            fmt(segment.end.y),
        ));
    }

    /// Add one tree row: icon, name label, and optional comment
    pub fn add_row(&mut self, row: &NodeRow, metrics: &RowMetrics) {
        let prefix = self.prefix();
        let icon_id = match row.icon {
            IconKind::Folder => "icon-folder",
            IconKind::File => "icon-file",
        };
        let icon_y = row.y + (metrics.row_height - metrics.icon_size) / 2.0;
        let text_y = row.y + metrics.row_height / 2.0;

        self.elements.push(format!(
            r##"{}<use href="#{}{}" x="{}" y="{}" width="{}" height="{}"/>"##,
            self.indent_str(),
            prefix,
            icon_id,
            fmt(row.x),
            fmt(icon_y),
            fmt(metrics.icon_size),
            fmt(metrics.icon_size),
        ));

        self.elements.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" dominant-baseline="middle" font-size="{}" fill="var(--text)">{}</text>"#,
            self.indent_str(),
            prefix,
            fmt(row.label_x),
            fmt(text_y),
            fmt(metrics.font_size),
            escape_xml(&row.name),
        ));

        if let (Some(comment), Some(comment_x)) = (&row.comment, row.comment_x) {
            self.elements.push(format!(
                r#"{}<text class="{}comment" x="{}" y="{}" dominant-baseline="middle" font-size="{}" fill="var(--comment)">{}</text>"#,
                self.indent_str(),
                prefix,
                fmt(comment_x),
                fmt(text_y),
                fmt(metrics.comment_font_size),
                escape_xml(&format!("// {}", comment)),
            ));
        }
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.right() + padding - vb_x;
        let vb_h = viewbox.bottom() + padding - vb_y;

        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            fmt(vb_x),
            fmt(vb_y),
            fmt(vb_w),
            fmt(vb_h)
        ));
        svg.push_str(nl);

        let ind = self.indent_str();

        if !self.styles.is_empty() {
            svg.push_str(ind);
            svg.push_str("<style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str(ind);
                svg.push_str(ind);
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str(ind);
            svg.push_str("</style>");
            svg.push_str(nl);
        }

        if !self.defs.is_empty() {
            svg.push_str(ind);
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(ind);
                svg.push_str(ind);
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(ind);
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        // Guides render beneath icons and labels
        for guide in &self.guides {
            svg.push_str(guide);
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a LayoutResult to an SVG string (with the default stylesheet)
pub fn render_svg(result: &LayoutResult, config: &SvgConfig) -> String {
    render_svg_with_stylesheet(result, config, &Stylesheet::default())
}

/// Render a LayoutResult to an SVG string with a custom stylesheet
pub fn render_svg_with_stylesheet(
    result: &LayoutResult,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    builder.add_stylesheet(stylesheet);

    // Only define the symbols the document actually uses
    if result.rows.iter().any(|r| r.icon == IconKind::Folder) {
        builder.add_icon_def(IconKind::Folder);
    }
    if result.rows.iter().any(|r| r.icon == IconKind::File) {
        builder.add_icon_def(IconKind::File);
    }

    builder.add_canvas(result.bounds);

    for guide in &result.guides {
        builder.add_guide(guide);
    }

    for row in &result.rows {
        builder.add_row(row, &result.metrics);
    }

    builder.build(result.bounds)
}

/// Format a coordinate, trimming the noise floats would otherwise add
fn fmt(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Escape a string for inclusion in XML text content or attributes
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
