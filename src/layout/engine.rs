//! Layout computation: projecting a tree onto rows and guide lines

use crate::parser::Node;

use super::config::LayoutConfig;
use super::types::{BoundingBox, GuideSegment, IconKind, LayoutResult, NodeRow, RowMetrics};

/// Compute the visual structure for a tree.
///
/// Rows are emitted depth-first in render order, one per node, with the root
/// at depth 0. For every folder with children, guide lines are emitted: a
/// horizontal connector at each child's row midline, and a vertical guide
/// running from the folder's row down to the last child's connector. Ending
/// the vertical at the last connector gives the last child its short stub
/// instead of a line running past it.
///
/// Pure projection: no state survives between calls.
pub fn compute(root: &Node, config: &LayoutConfig) -> LayoutResult {
    let mut rows = Vec::with_capacity(root.node_count());
    let mut guides = Vec::new();
    let mut cursor = 0.0;

    place(root, 0, config, &mut rows, &mut guides, &mut cursor);

    let width = rows
        .iter()
        .map(|row| row_extent(row, config))
        .fold(0.0, f64::max);

    LayoutResult {
        rows,
        guides,
        bounds: BoundingBox::new(0.0, 0.0, width, cursor),
        metrics: RowMetrics {
            row_height: config.row_height,
            icon_size: config.icon_size,
            font_size: config.font_size,
            comment_font_size: config.comment_font_size,
        },
    }
}

fn place(
    node: &Node,
    depth: usize,
    config: &LayoutConfig,
    rows: &mut Vec<NodeRow>,
    guides: &mut Vec<GuideSegment>,
    cursor: &mut f64,
) {
    let y = *cursor;
    *cursor += config.row_height;

    let x = depth as f64 * config.indent;
    let label_x = x + config.icon_size + config.label_gap;
    let comment_x = node
        .comment()
        .map(|_| label_x + text_width(node.name(), config.font_size) + config.comment_gap);

    rows.push(NodeRow {
        depth,
        icon: if node.is_folder() {
            IconKind::Folder
        } else {
            IconKind::File
        },
        name: node.name().to_string(),
        comment: node.comment().map(str::to_string),
        x,
        y,
        label_x,
        comment_x,
    });

    let children = node.children();
    if children.is_empty() {
        return;
    }

    // Guide column sits under the center of the folder's icon; connectors
    // run from there to the left edge of each child's icon.
    let guide_x = x + config.icon_size / 2.0;
    let child_x = (depth + 1) as f64 * config.indent;
    let top = y + config.row_height;
    let mut last_mid = top;

    for child in children {
        let mid = *cursor + config.row_height / 2.0;
        guides.push(GuideSegment::horizontal(mid, guide_x, child_x));
        last_mid = mid;
        place(child, depth + 1, config, rows, guides, cursor);
    }

    guides.push(GuideSegment::vertical(guide_x, top, last_mid));
}

/// Rightmost extent of a row, including its comment annotation
fn row_extent(row: &NodeRow, config: &LayoutConfig) -> f64 {
    match (&row.comment, row.comment_x) {
        (Some(comment), Some(comment_x)) => {
            // Comments render with a `// ` prefix
            comment_x + text_width(comment, config.comment_font_size)
                + text_width("// ", config.comment_font_size)
        }
        _ => row.label_x + text_width(&row.name, config.font_size),
    }
}

/// Estimate rendered text width without font rasterization.
///
/// Approximate: ~0.6 × font size per character, which tracks common
/// sans-serif faces closely enough for viewBox sizing.
fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * 0.6
}
