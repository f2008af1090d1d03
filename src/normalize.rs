//! Deterministic reordering of sibling lists
//!
//! Normalization makes rendering independent of the order entries appear in
//! the input: every folder's children are sorted folders-first, then
//! alphabetically. The input tree is never mutated; a reordered copy is
//! returned.

use std::cmp::Ordering;

use crate::parser::Node;

/// Return a copy of `node` with every folder's children sorted.
///
/// Applied bottom-up: children are normalized before the parent's own list
/// is sorted, so ordering is consistent at every nesting level. The sort is
/// stable, so entries with identical names keep their input order.
pub fn normalize(node: &Node) -> Node {
    match node {
        Node::File { .. } => node.clone(),
        Node::Folder {
            name,
            children,
            comment,
        } => {
            let mut sorted: Vec<Node> = children.iter().map(normalize).collect();
            sorted.sort_by(compare_siblings);
            Node::Folder {
                name: name.clone(),
                children: sorted,
                comment: comment.clone(),
            }
        }
    }
}

/// Two-key sibling comparator: folders before files, then name order.
fn compare_siblings(a: &Node, b: &Node) -> Ordering {
    match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => collate(a.name(), b.name()),
    }
}

/// Case-folded name comparison with a case-sensitive tiebreak.
///
/// Stands in for locale collation so that `README.md` and `readme.md` sort
/// together regardless of case, while remaining deterministic on every
/// machine.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Node {
        Node::folder(
            "root",
            vec![
                Node::file("b.txt"),
                Node::folder("zeta", vec![Node::file("y"), Node::file("x")]),
                Node::file("a.txt"),
                Node::folder("alpha", vec![]),
            ],
        )
    }

    #[test]
    fn test_folders_sort_before_files() {
        let sorted = normalize(&sample());
        let names: Vec<&str> = sorted.children().iter().map(Node::name).collect();
        assert_eq!(names, vec!["alpha", "zeta", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_sorting_recurses_into_subfolders() {
        let sorted = normalize(&sample());
        let zeta = &sorted.children()[1];
        let names: Vec<&str> = zeta.children().iter().map(Node::name).collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn test_case_insensitive_ordering() {
        let tree = Node::folder(
            "root",
            vec![Node::file("Zebra"), Node::file("apple"), Node::file("Mango")],
        );
        let names: Vec<String> = normalize(&tree)
            .children()
            .iter()
            .map(|n| n.name().to_string())
            .collect();
        assert_eq!(names, vec!["apple", "Mango", "Zebra"]);
    }

    #[test]
    fn test_idempotent() {
        let once = normalize(&sample());
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_input_not_mutated() {
        let tree = sample();
        let _ = normalize(&tree);
        assert_eq!(tree.children()[0].name(), "b.txt");
    }

    #[test]
    fn test_structure_preserved() {
        let tree = sample();
        let sorted = normalize(&tree);
        assert_eq!(sorted.node_count(), tree.node_count());

        fn collect_names(node: &Node, out: &mut Vec<String>) {
            out.push(node.name().to_string());
            for child in node.children() {
                collect_names(child, out);
            }
        }
        let mut before = Vec::new();
        let mut after = Vec::new();
        collect_names(&tree, &mut before);
        collect_names(&sorted, &mut after);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_duplicate_names_keep_input_order() {
        let tree = Node::folder(
            "root",
            vec![
                Node::File {
                    name: "dup".to_string(),
                    comment: Some("first".to_string()),
                },
                Node::File {
                    name: "dup".to_string(),
                    comment: Some("second".to_string()),
                },
            ],
        );
        let sorted = normalize(&tree);
        assert_eq!(sorted.children()[0].comment(), Some("first"));
        assert_eq!(sorted.children()[1].comment(), Some("second"));
    }

    #[test]
    fn test_empty_folder_unchanged() {
        let tree = Node::folder("empty", vec![]);
        assert_eq!(normalize(&tree), tree);
    }
}
