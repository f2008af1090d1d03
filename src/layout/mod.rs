//! Layout engine: turns a normalized tree into a positioned visual structure

pub mod config;
pub mod engine;
pub mod types;

pub use config::LayoutConfig;
pub use engine::compute;
pub use types::{BoundingBox, GuideSegment, IconKind, LayoutResult, NodeRow, Point, RowMetrics};
