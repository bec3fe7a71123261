//! Start-ordered sweep layout engine
//!
//! Intervals are visited by ascending start. Each row remembers the interval
//! in it that reaches furthest right (its frontier) and an interval goes into
//! the first row whose frontier it does not overlap, or into a new row.
//! Clearing the furthest-reaching member clears every member of the row,
//! inverted intervals included.
//!
//! For interval overlaps this first-fit sweep is optimal: the number of rows
//! equals the largest number of intervals covering a single coordinate.
//! Overlap is read from the graph's adjacency rather than recomputed, so the
//! result honors the tolerance the graph was built with.

use log::{debug, trace};

use tracklane_core::assignment::RowAssignment;

use crate::{
    layout::engines::RowEngine,
    structure::{OverlapGraph, VertexIndex},
};

/// Exact, deterministic row assignment for interval overlaps.
#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

impl Engine {
    /// Create a new sweep layout engine
    pub fn new() -> Self {
        Self
    }
}

impl RowEngine for Engine {
    fn calculate(&self, graph: &OverlapGraph) -> RowAssignment {
        let mut order: Vec<VertexIndex> = graph.vertex_indices().collect();
        // Stable, so equal starts keep input order.
        order.sort_by(|&a, &b| graph.vertex(a).start().total_cmp(&graph.vertex(b).start()));

        let mut frontiers: Vec<VertexIndex> = Vec::new();
        let mut rows = vec![0; graph.len()];

        for vertex in order {
            let row = match frontiers
                .iter()
                .position(|&frontier| !graph.are_adjacent(frontier, vertex))
            {
                Some(row) => {
                    let frontier = graph.vertex(frontiers[row]);
                    if graph.vertex(vertex).end().total_cmp(&frontier.end()).is_gt() {
                        frontiers[row] = vertex;
                    }
                    row
                }
                None => {
                    frontiers.push(vertex);
                    frontiers.len() - 1
                }
            };
            trace!(id:% = graph.vertex(vertex).id(), row; "Placed interval");
            rows[vertex.index()] = row;
        }

        debug!(intervals = graph.len(), rows = frontiers.len(); "Sweep layout finished");

        graph
            .vertices()
            .iter()
            .zip(rows)
            .map(|(interval, row)| (interval.id(), row))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use tracklane_core::{identifier::Id, interval::Interval};

    use super::*;

    fn layout(intervals: &[Interval], tolerance: f64) -> RowAssignment {
        let graph = OverlapGraph::new(intervals, tolerance).unwrap();
        Engine::new().calculate(&graph)
    }

    #[test]
    fn test_empty_input() {
        let assignment = layout(&[], 0.0);

        assert_eq!(assignment.row_count(), 0);
        assert!(assignment.is_empty());
    }

    #[test]
    fn test_single_interval() {
        let assignment = layout(&[Interval::new("only", 3.0, 9.0)], 0.0);

        assert_eq!(assignment.row_count(), 1);
        assert_eq!(assignment.row(Id::new("only")), 0);
    }

    #[test]
    fn test_scenario_without_tolerance() {
        let assignment = layout(
            &[
                Interval::new("A", 0.0, 10.0),
                Interval::new("B", 5.0, 15.0),
                Interval::new("C", 12.0, 20.0),
            ],
            0.0,
        );

        assert_eq!(assignment.row_count(), 2);
        assert_eq!(assignment.row(Id::new("A")), 0);
        assert_eq!(assignment.row(Id::new("B")), 1);
        assert_eq!(assignment.row(Id::new("C")), 0);
    }

    #[test]
    fn test_scenario_with_tolerance() {
        let assignment = layout(
            &[
                Interval::new("A", 0.0, 10.0),
                Interval::new("B", 5.0, 15.0),
                Interval::new("C", 12.0, 20.0),
            ],
            3.0,
        );

        assert_eq!(assignment.row_count(), 3);
        assert_eq!(assignment.row(Id::new("C")), 2);
    }

    #[test]
    fn test_common_point_needs_one_row_each() {
        let assignment = layout(
            &[
                Interval::new("x", 0.0, 10.0),
                Interval::new("y", 2.0, 8.0),
                Interval::new("z", 4.0, 6.0),
            ],
            0.0,
        );

        assert_eq!(assignment.row_count(), 3);
    }

    #[test]
    fn test_end_to_end_shares_one_row() {
        let assignment = layout(
            &[
                Interval::new("x", 0.0, 10.0),
                Interval::new("y", 11.0, 20.0),
                Interval::new("z", 21.0, 30.0),
            ],
            0.0,
        );

        assert_eq!(assignment.row_count(), 1);
    }

    #[test]
    fn test_unsorted_input() {
        let assignment = layout(
            &[
                Interval::new("late", 50.0, 60.0),
                Interval::new("early", 0.0, 55.0),
                Interval::new("middle", 20.0, 30.0),
            ],
            0.0,
        );

        // early (0..55) takes row 0, middle overlaps it, late overlaps early only.
        assert_eq!(assignment.row(Id::new("early")), 0);
        assert_eq!(assignment.row(Id::new("middle")), 1);
        assert_eq!(assignment.row(Id::new("late")), 1);
        assert_eq!(assignment.row_count(), 2);
    }

    #[test]
    fn test_equal_starts_keep_input_order() {
        let assignment = layout(
            &[
                Interval::new("first", 0.0, 5.0),
                Interval::new("second", 0.0, 50.0),
            ],
            0.0,
        );

        assert_eq!(assignment.row(Id::new("first")), 0);
        assert_eq!(assignment.row(Id::new("second")), 1);
    }

    #[test]
    fn test_row_reused_after_gap() {
        let assignment = layout(
            &[
                Interval::new("long", 0.0, 100.0),
                Interval::new("a", 10.0, 20.0),
                Interval::new("b", 30.0, 40.0),
                Interval::new("c", 50.0, 60.0),
            ],
            0.0,
        );

        assert_eq!(assignment.row_count(), 2);
        for id in ["a", "b", "c"] {
            assert_eq!(assignment.row(Id::new(id)), 1);
        }
    }

    #[test]
    fn test_zero_width_intervals() {
        let assignment = layout(
            &[
                Interval::new("snp1", 5.0, 5.0),
                Interval::new("snp2", 5.0, 5.0),
                Interval::new("snp3", 6.0, 6.0),
            ],
            0.0,
        );

        assert_eq!(assignment.row_count(), 2);
        assert_eq!(assignment.row(Id::new("snp3")), 0);
    }

    #[test]
    fn test_inverted_interval_keeps_frontier() {
        let intervals = [
            Interval::new("g", 0.0, 10.0),
            Interval::new("f", 5.0, -1.0),
            Interval::new("v", 6.0, 8.0),
        ];
        let graph = OverlapGraph::new(&intervals, 0.0).unwrap();
        let assignment = Engine::new().calculate(&graph);

        // "f" fits beside "g" but must not hide "g" from "v".
        assert_eq!(assignment.row(Id::new("g")), 0);
        assert_eq!(assignment.row(Id::new("f")), 0);
        assert_eq!(assignment.row(Id::new("v")), 1);
        assert!(graph.conflicts(&assignment).is_empty());
    }

    #[test]
    fn test_output_in_input_order() {
        let assignment = layout(
            &[
                Interval::new("z", 40.0, 50.0),
                Interval::new("y", 20.0, 30.0),
                Interval::new("x", 0.0, 10.0),
            ],
            0.0,
        );

        let ids: Vec<String> = assignment.iter().map(|(id, _)| id.name()).collect();
        assert_eq!(ids, vec!["z", "y", "x"]);
    }
}
