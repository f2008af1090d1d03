//! Core types for the layout engine

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box representing the spatial extent of the diagram
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Which icon a row displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Folder,
    File,
}

/// One rendered row: a single tree entry with resolved positions
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRow {
    /// Nesting level; the root row is depth 0
    pub depth: usize,
    pub icon: IconKind,
    pub name: String,
    pub comment: Option<String>,
    /// Left edge of the icon
    pub x: f64,
    /// Top of the row
    pub y: f64,
    /// Left edge of the name label
    pub label_x: f64,
    /// Left edge of the `// comment` annotation, if any
    pub comment_x: Option<f64>,
}

/// An axis-aligned guide-line segment connecting rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideSegment {
    pub start: Point,
    pub end: Point,
}

impl GuideSegment {
    /// Vertical guide below a folder, spanning down to its last child
    pub fn vertical(x: f64, y1: f64, y2: f64) -> Self {
        Self {
            start: Point::new(x, y1),
            end: Point::new(x, y2),
        }
    }

    /// Horizontal connector from a parent's guide to a child row
    pub fn horizontal(y: f64, x1: f64, x2: f64) -> Self {
        Self {
            start: Point::new(x1, y),
            end: Point::new(x2, y),
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}

/// Text metrics the renderer needs to place labels inside rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    pub row_height: f64,
    pub icon_size: f64,
    pub font_size: f64,
    pub comment_font_size: f64,
}

/// The complete visual structure computed from a tree
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Rows in render order (depth-first)
    pub rows: Vec<NodeRow>,
    /// Guide lines, both vertical spans and horizontal connectors
    pub guides: Vec<GuideSegment>,
    /// Extent of all rows and guides
    pub bounds: BoundingBox,
    pub metrics: RowMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_edges() {
        let b = BoundingBox::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(b.right(), 110.0);
        assert_eq!(b.bottom(), 70.0);
    }

    #[test]
    fn test_guide_orientation() {
        assert!(GuideSegment::vertical(5.0, 0.0, 10.0).is_vertical());
        assert!(!GuideSegment::horizontal(5.0, 0.0, 10.0).is_vertical());
    }
}
