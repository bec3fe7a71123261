//! Graph structures built from interval sets before layout.
//!
//! The [`OverlapGraph`] is the only structure: one vertex per interval and
//! an undirected edge between every pair of intervals that overlap within
//! the configured tolerance.

mod overlap_graph;

pub use overlap_graph::{OverlapGraph, VertexIndex};
