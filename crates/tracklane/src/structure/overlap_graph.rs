//! Overlap graph over a set of intervals.
//!
//! # Architecture
//!
//! The graph is an arena:
//! - vertices are stored once, in input order, in a flat `Vec<Interval>`
//! - [`VertexIndex`] is a typed position in that arena
//! - adjacency is one ascending `Vec<VertexIndex>` per vertex
//! - an `IndexMap<Id, VertexIndex>` resolves identities
//!
//! Construction compares every pair of intervals, so it is quadratic in the
//! number of intervals. Annotation sets are bounded by on-screen density,
//! which keeps this cheap in practice.
//!
//! The graph is immutable once built. Layout strategies that peel vertices
//! away keep their own "removed" state in a bitset indexed by
//! [`VertexIndex`] instead of copying the adjacency.

use indexmap::{IndexMap, map::Entry};
use log::debug;

use tracklane_core::{assignment::RowAssignment, identifier::Id, interval::Interval};

use crate::error::TracklaneError;

/// Position of a vertex in an [`OverlapGraph`].
///
/// Indices follow the order of the intervals the graph was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexIndex(usize);

impl VertexIndex {
    /// Returns the raw position in the input slice.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Undirected overlap relation over a set of intervals.
///
/// Invariants:
/// - adjacency is symmetric: `b` is a neighbor of `a` iff `a` is a neighbor of `b`
/// - there are no self-loops
/// - every neighbor list is sorted ascending with no duplicates
#[derive(Debug, Clone)]
pub struct OverlapGraph {
    vertices: Vec<Interval>,
    index: IndexMap<Id, VertexIndex>,
    adjacency: Vec<Vec<VertexIndex>>,
    edge_count: usize,
    tolerance: f64,
}

impl OverlapGraph {
    /// Builds the overlap graph of `intervals` padded by `tolerance`.
    ///
    /// Two intervals are adjacent iff [`Interval::overlaps`] holds for them.
    /// The test runs once per unordered pair, so adjacency is symmetric even
    /// where floating-point rounding would make the two directions disagree.
    ///
    /// # Errors
    ///
    /// - [`TracklaneError::InvalidTolerance`] if `tolerance` is negative, infinite or NaN.
    /// - [`TracklaneError::DuplicateId`] if two intervals share an identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracklane::{interval::Interval, structure::OverlapGraph};
    ///
    /// let intervals = [
    ///     Interval::new("A", 0.0, 10.0),
    ///     Interval::new("B", 5.0, 15.0),
    ///     Interval::new("C", 12.0, 20.0),
    /// ];
    /// let graph = OverlapGraph::new(&intervals, 0.0).unwrap();
    ///
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn new(intervals: &[Interval], tolerance: f64) -> Result<Self, TracklaneError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(TracklaneError::InvalidTolerance(tolerance));
        }

        let mut index = IndexMap::with_capacity(intervals.len());
        for (position, interval) in intervals.iter().enumerate() {
            match index.entry(interval.id()) {
                Entry::Occupied(_) => {
                    return Err(TracklaneError::DuplicateId(interval.id().to_string()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(VertexIndex(position));
                }
            }
        }

        let mut adjacency = vec![Vec::new(); intervals.len()];
        let mut edge_count = 0;
        for (i, a) in intervals.iter().enumerate() {
            for (j, b) in intervals.iter().enumerate().skip(i + 1) {
                if a.overlaps(b, tolerance) {
                    adjacency[i].push(VertexIndex(j));
                    adjacency[j].push(VertexIndex(i));
                    edge_count += 1;
                }
            }
        }

        debug!(
            vertices = intervals.len(),
            edges = edge_count,
            tolerance;
            "Built overlap graph"
        );

        Ok(Self {
            vertices: intervals.to_vec(),
            index,
            adjacency,
            edge_count,
            tolerance,
        })
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the tolerance the graph was built with.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns all intervals in input order.
    pub fn vertices(&self) -> &[Interval] {
        &self.vertices
    }

    /// Iterates every vertex index in input order.
    pub fn vertex_indices(&self) -> impl Iterator<Item = VertexIndex> + use<> {
        (0..self.vertices.len()).map(VertexIndex)
    }

    /// Returns the interval stored at `idx`.
    ///
    /// # Panics
    /// Panics if `idx` does not belong to this graph.
    pub fn vertex(&self, idx: VertexIndex) -> &Interval {
        &self.vertices[idx.0]
    }

    /// Resolves an identity to its vertex index.
    pub fn index_of(&self, id: Id) -> Option<VertexIndex> {
        self.index.get(&id).copied()
    }

    /// Returns the interval with identity `id`, if present.
    pub fn interval(&self, id: Id) -> Option<&Interval> {
        self.index_of(id).map(|idx| self.vertex(idx))
    }

    /// Returns the neighbors of `idx`, sorted ascending.
    ///
    /// # Panics
    /// Panics if `idx` does not belong to this graph.
    pub fn neighbors(&self, idx: VertexIndex) -> &[VertexIndex] {
        &self.adjacency[idx.0]
    }

    /// Iterates the intervals overlapping the one with identity `id`.
    ///
    /// Yields nothing for an unknown identity.
    pub fn neighbors_of(&self, id: Id) -> impl Iterator<Item = &Interval> + '_ {
        self.index_of(id)
            .into_iter()
            .flat_map(|idx| self.neighbors(idx))
            .map(|&n| self.vertex(n))
    }

    /// Returns the number of neighbors of `idx`.
    pub fn degree(&self, idx: VertexIndex) -> usize {
        self.adjacency[idx.0].len()
    }

    /// Returns true if `a` and `b` overlap.
    pub fn are_adjacent(&self, a: VertexIndex, b: VertexIndex) -> bool {
        self.adjacency[a.0].binary_search(&b).is_ok()
    }

    /// Iterates every edge once as `(a, b)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .filter(move |b| b.0 > a)
                .map(move |&b| (VertexIndex(a), b))
        })
    }

    /// Lists the overlapping pairs that `assignment` puts in the same row.
    ///
    /// Rows are looked up the way a renderer would, so an identity missing
    /// from the assignment counts as row 0. An empty result means the
    /// assignment is collision-free.
    pub fn conflicts(&self, assignment: &RowAssignment) -> Vec<(Id, Id)> {
        self.edges()
            .map(|(a, b)| (self.vertex(a).id(), self.vertex(b).id()))
            .filter(|&(a, b)| assignment.row(a) == assignment.row(b))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<Interval> {
        vec![
            Interval::new("A", 0.0, 10.0),
            Interval::new("B", 5.0, 15.0),
            Interval::new("C", 12.0, 20.0),
        ]
    }

    fn ids(intervals: impl Iterator<Item = Interval>) -> Vec<String> {
        let mut names: Vec<String> = intervals.map(|i| i.id().name()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_empty_graph() {
        let graph = OverlapGraph::new(&[], 0.0).unwrap();

        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_scenario_edges() {
        let graph = OverlapGraph::new(&scenario(), 0.0).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(ids(graph.neighbors_of(Id::new("A")).copied()), vec!["B"]);
        assert_eq!(
            ids(graph.neighbors_of(Id::new("B")).copied()),
            vec!["A", "C"]
        );
        assert_eq!(ids(graph.neighbors_of(Id::new("C")).copied()), vec!["B"]);
    }

    #[test]
    fn test_tolerance_adds_edges() {
        let graph = OverlapGraph::new(&scenario(), 3.0).unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.tolerance(), 3.0);
        let a = graph.index_of(Id::new("A")).unwrap();
        let c = graph.index_of(Id::new("C")).unwrap();
        assert!(graph.are_adjacent(a, c));
        assert!(graph.are_adjacent(c, a));
    }

    #[test]
    fn test_no_self_loops() {
        let graph = OverlapGraph::new(&scenario(), 100.0).unwrap();

        for idx in graph.vertex_indices() {
            assert!(!graph.are_adjacent(idx, idx));
            assert_eq!(graph.degree(idx), 2);
        }
    }

    #[test]
    fn test_neighbor_lists_sorted() {
        let intervals: Vec<Interval> = (0..8)
            .map(|i| Interval::new(format!("n{i}").as_str(), 0.0, 1.0 + i as f64))
            .collect();
        let graph = OverlapGraph::new(&intervals, 0.0).unwrap();

        for idx in graph.vertex_indices() {
            let neighbors = graph.neighbors(idx);
            assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(neighbors.len(), 7);
        }
        assert_eq!(graph.edge_count(), 28);
    }

    #[test]
    fn test_lookup_by_id() {
        let graph = OverlapGraph::new(&scenario(), 0.0).unwrap();

        let b = graph.index_of(Id::new("B")).unwrap();
        assert_eq!(b.index(), 1);
        assert_eq!(graph.vertex(b).start(), 5.0);
        assert_eq!(graph.interval(Id::new("C")).map(Interval::end), Some(20.0));
        assert!(graph.interval(Id::new("Z")).is_none());
        assert_eq!(graph.neighbors_of(Id::new("Z")).count(), 0);
    }

    #[test]
    fn test_edges_listed_once() {
        let graph = OverlapGraph::new(&scenario(), 0.0).unwrap();
        let edges: Vec<(usize, usize)> = graph
            .edges()
            .map(|(a, b)| (a.index(), b.index()))
            .collect();

        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let intervals = [
            Interval::new("dup", 0.0, 1.0),
            Interval::new("other", 5.0, 6.0),
            Interval::new("dup", 10.0, 11.0),
        ];

        match OverlapGraph::new(&intervals, 0.0) {
            Err(TracklaneError::DuplicateId(id)) => assert_eq!(id, "dup"),
            other => panic!("Expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        for tolerance in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                OverlapGraph::new(&scenario(), tolerance),
                Err(TracklaneError::InvalidTolerance(_))
            ));
        }
    }

    #[test]
    fn test_zero_width_vertices() {
        let intervals = [
            Interval::new("p1", 5.0, 5.0),
            Interval::new("p2", 5.0, 5.0),
            Interval::new("p3", 7.0, 7.0),
        ];
        let graph = OverlapGraph::new(&intervals, 0.0).unwrap();

        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_conflicts() {
        let graph = OverlapGraph::new(&scenario(), 0.0).unwrap();

        let valid: RowAssignment = [(Id::new("A"), 0), (Id::new("B"), 1), (Id::new("C"), 0)]
            .into_iter()
            .collect();
        assert!(graph.conflicts(&valid).is_empty());

        let invalid: RowAssignment = [(Id::new("A"), 0), (Id::new("B"), 0), (Id::new("C"), 1)]
            .into_iter()
            .collect();
        assert_eq!(graph.conflicts(&invalid), vec![(Id::new("A"), Id::new("B"))]);
    }
}
