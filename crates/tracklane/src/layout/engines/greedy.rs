//! Per-round greedy coloring engine
//!
//! Each round colors a whole independent set instead of a single vertex:
//! the uncolored vertices are ordered, then scanned, and every vertex not yet
//! blocked this round takes the current row and blocks its neighbors. Colored
//! vertices drop out and the next round opens a new row.
//!
//! The result is always collision-free but can use more rows than the sweep
//! engine. With the default [`WidestFirst`] ordering, wide features settle in
//! the low rows, which gives a stable visual ordering.

use fixedbitset::FixedBitSet;
use log::{debug, trace};

use tracklane_core::assignment::RowAssignment;

use crate::{
    layout::{
        engines::RowEngine,
        ordering::{VertexOrdering, WidestFirst},
    },
    structure::{OverlapGraph, VertexIndex},
};

/// Deterministic per-round coloring under a fixed vertex ordering.
#[derive(Debug, Default, Clone)]
pub struct Engine<O = WidestFirst> {
    ordering: O,
}

impl Engine {
    /// Create a new greedy engine ordering vertices widest first
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O> Engine<O>
where
    O: VertexOrdering + Clone,
{
    /// Create a greedy engine with a custom vertex ordering
    ///
    /// The ordering is cloned for every layout so engines stay reusable.
    pub fn with_ordering(ordering: O) -> Self {
        Self { ordering }
    }
}

impl<O> RowEngine for Engine<O>
where
    O: VertexOrdering + Clone,
{
    fn calculate(&self, graph: &OverlapGraph) -> RowAssignment {
        let mut ordering = self.ordering.clone();
        let assignment = color_by_rounds(graph, &mut ordering);
        debug!(
            intervals = graph.len(),
            rows = assignment.row_count();
            "Greedy layout finished"
        );
        assignment
    }
}

/// Colors `graph` one maximal independent set per round.
///
/// `remaining` is reset to input order before each call to `ordering`, so an
/// ordering sees the same starting point regardless of previous rounds. Every
/// round colors at least the first vertex it scans, so the loop runs at most
/// once per vertex.
pub(super) fn color_by_rounds<O>(graph: &OverlapGraph, ordering: &mut O) -> RowAssignment
where
    O: VertexOrdering + ?Sized,
{
    let mut rows = vec![0; graph.len()];
    let mut colored = FixedBitSet::with_capacity(graph.len());
    let mut blocked = FixedBitSet::with_capacity(graph.len());
    let mut remaining: Vec<VertexIndex> = graph.vertex_indices().collect();
    let mut row = 0;

    while !remaining.is_empty() {
        ordering.order(&mut remaining, graph);
        blocked.clear();

        let mut placed = 0;
        for &vertex in &remaining {
            if blocked.contains(vertex.index()) {
                continue;
            }
            rows[vertex.index()] = row;
            colored.insert(vertex.index());
            blocked.insert(vertex.index());
            for neighbor in graph.neighbors(vertex) {
                blocked.insert(neighbor.index());
            }
            placed += 1;
        }
        trace!(row, placed, left = remaining.len() - placed; "Colored round");

        remaining.retain(|vertex| !colored.contains(vertex.index()));
        remaining.sort_unstable();
        row += 1;
    }

    graph
        .vertices()
        .iter()
        .zip(rows)
        .map(|(interval, row)| (interval.id(), row))
        .collect()
}
