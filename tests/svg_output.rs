//! End-to-end SVG output tests
//!
//! Rather than byte-for-byte snapshots, these verify the structure of the
//! rendered document: envelope, self-containment, row and guide counts, and
//! the behavior of the optimize pass.

use dirsketch::{
    export, layout, normalize, parse, render, render_with_config, LayoutConfig, RenderConfig,
    SvgConfig,
};

const SAMPLE: &str = r#"{
    "type": "folder",
    "name": "project",
    "children": [
        { "type": "file", "name": "README.md", "comment": "start here" },
        { "type": "folder", "name": "src", "children": [
            { "type": "file", "name": "main.rs" },
            { "type": "file", "name": "lib.rs" }
        ] },
        { "type": "folder", "name": "assets", "children": [] }
    ]
}"#;

#[test]
fn test_sample_renders_valid_envelope() {
    let svg = render(SAMPLE).expect("sample should render");
    assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(svg.contains(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="#));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_sample_contains_every_entry() {
    let svg = render(SAMPLE).expect("sample should render");
    for name in ["project", "README.md", "src", "main.rs", "lib.rs", "assets"] {
        assert!(svg.contains(name), "missing entry: {name}");
    }
    assert!(svg.contains("// start here"));
}

#[test]
fn test_one_icon_use_per_node() {
    let svg = render(SAMPLE).expect("sample should render");
    // 6 nodes in the sample tree
    assert_eq!(svg.matches("<use ").count(), 6);
}

#[test]
fn test_guide_counts_match_tree_shape() {
    let root = normalize(&parse(SAMPLE).expect("sample should parse"));
    let result = layout::compute(&root, &LayoutConfig::default());

    // One connector per non-root node
    let connectors = result.guides.iter().filter(|g| !g.is_vertical()).count();
    assert_eq!(connectors, 5);

    // One vertical guide per folder with children: project and src.
    // assets is empty and gets none.
    let verticals = result.guides.iter().filter(|g| g.is_vertical()).count();
    assert_eq!(verticals, 2);
}

#[test]
fn test_empty_folder_has_no_children_block() {
    let input = r#"{ "type": "folder", "name": "lonely", "children": [] }"#;
    let root = normalize(&parse(input).expect("should parse"));
    let result = layout::compute(&root, &LayoutConfig::default());

    assert_eq!(result.rows.len(), 1);
    assert!(result.guides.is_empty());
}

#[test]
fn test_depth_maps_to_indentation() {
    let config = LayoutConfig::default();
    let root = normalize(&parse(SAMPLE).expect("sample should parse"));
    let result = layout::compute(&root, &config);

    for row in &result.rows {
        assert_eq!(row.x, row.depth as f64 * config.indent);
    }
    // Root renders at depth 0
    assert_eq!(result.rows[0].depth, 0);
    assert_eq!(result.rows[0].x, 0.0);
}

#[test]
fn test_optimized_render_is_equivalent_markup() {
    let pretty = render(SAMPLE).expect("sample should render");
    let optimized = render_with_config(SAMPLE, RenderConfig::new().with_optimize(true))
        .expect("sample should render");

    assert_eq!(export::optimize(&pretty), optimized);
    assert!(!optimized.contains('\n'));
}

#[test]
fn test_output_is_self_contained() {
    let svg = render(SAMPLE).expect("sample should render");
    assert!(svg.contains("<style>"));
    assert!(svg.contains("<defs>"));
    assert!(svg.contains("ds-canvas"));
    // Icon uses reference local symbols only
    assert!(svg.contains(r##"href="#ds-icon-folder""##));
    assert!(svg.contains(r##"href="#ds-icon-file""##));
    assert!(!svg.contains(r#"href="http"#));
}

#[test]
fn test_without_class_prefix() {
    let config = RenderConfig::new().with_svg(SvgConfig::default().without_class_prefix());
    let svg = render_with_config(SAMPLE, config).expect("sample should render");
    assert!(svg.contains(r#"class="guide""#));
    assert!(!svg.contains("ds-guide"));
}

#[test]
fn test_render_failure_leaves_no_artifact() {
    // A parse failure yields an error value, not partial output
    let result = render("{ broken");
    assert!(result.is_err());
}
