//! Vertex orderings for the per-round coloring strategies.
//!
//! At the start of every round the greedy and heuristic engines hand the
//! vertices that still lack a row to a [`VertexOrdering`], then color an
//! independent set by scanning them in the resulting order. The ordering is
//! the only thing that differs between the two engines.

use std::cmp::Ordering;

use rand::{Rng, seq::SliceRandom};

use tracklane_core::interval::Interval;

use crate::structure::{OverlapGraph, VertexIndex};

/// Decides the scan order of the remaining vertices for one round.
///
/// `remaining` arrives in ascending [`VertexIndex`] order (input order).
/// Implementations must only permute it.
pub trait VertexOrdering {
    /// Permutes `remaining` into the scan order for the next round.
    fn order(&mut self, remaining: &mut [VertexIndex], graph: &OverlapGraph);
}

/// Widest interval first.
///
/// Sorting is stable, so equally wide intervals keep their input order and
/// the result is fully deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct WidestFirst;

impl VertexOrdering for WidestFirst {
    fn order(&mut self, remaining: &mut [VertexIndex], graph: &OverlapGraph) {
        remaining.sort_by(|&a, &b| {
            graph
                .vertex(b)
                .width()
                .total_cmp(&graph.vertex(a).width())
        });
    }
}

/// Keeps the input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputOrder;

impl VertexOrdering for InputOrder {
    fn order(&mut self, _remaining: &mut [VertexIndex], _graph: &OverlapGraph) {}
}

/// Orders vertices with a caller-supplied interval comparator.
///
/// The sort is stable, so intervals the comparator considers equal keep
/// their input order.
///
/// # Examples
///
/// ```
/// use tracklane::{interval::Interval, layout::{CompareBy, Greedy}};
///
/// // Leftmost first, ties broken by the narrower feature.
/// let engine = Greedy::with_ordering(CompareBy::new(|a: &Interval, b: &Interval| {
///     a.start()
///         .total_cmp(&b.start())
///         .then(a.width().total_cmp(&b.width()))
/// }));
/// # let _ = engine;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompareBy<F> {
    compare: F,
}

impl<F> CompareBy<F>
where
    F: FnMut(&Interval, &Interval) -> Ordering,
{
    /// Wraps `compare` as a vertex ordering.
    pub fn new(compare: F) -> Self {
        Self { compare }
    }
}

impl<F> VertexOrdering for CompareBy<F>
where
    F: FnMut(&Interval, &Interval) -> Ordering,
{
    fn order(&mut self, remaining: &mut [VertexIndex], graph: &OverlapGraph) {
        remaining.sort_by(|&a, &b| (self.compare)(graph.vertex(a), graph.vertex(b)));
    }
}

/// Uniformly random permutation every round.
#[derive(Debug, Clone)]
pub struct Shuffled<R> {
    rng: R,
}

impl<R: Rng> Shuffled<R> {
    /// Shuffles with `rng`, which advances across rounds.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> VertexOrdering for Shuffled<R> {
    fn order(&mut self, remaining: &mut [VertexIndex], _graph: &OverlapGraph) {
        remaining.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn graph() -> OverlapGraph {
        let intervals = [
            Interval::new("narrow", 0.0, 1.0),
            Interval::new("wide", 0.0, 100.0),
            Interval::new("medium", 0.0, 10.0),
            Interval::new("also-medium", 50.0, 60.0),
        ];
        OverlapGraph::new(&intervals, 0.0).unwrap()
    }

    fn names(graph: &OverlapGraph, order: &[VertexIndex]) -> Vec<String> {
        order.iter().map(|&v| graph.vertex(v).id().name()).collect()
    }

    #[test]
    fn test_widest_first() {
        let graph = graph();
        let mut order: Vec<VertexIndex> = graph.vertex_indices().collect();

        WidestFirst.order(&mut order, &graph);

        assert_eq!(
            names(&graph, &order),
            vec!["wide", "medium", "also-medium", "narrow"]
        );
    }

    #[test]
    fn test_input_order_is_identity() {
        let graph = graph();
        let mut order: Vec<VertexIndex> = graph.vertex_indices().collect();
        let before = order.clone();

        InputOrder.order(&mut order, &graph);

        assert_eq!(order, before);
    }

    #[test]
    fn test_compare_by_start_descending() {
        let graph = graph();
        let mut order: Vec<VertexIndex> = graph.vertex_indices().collect();

        CompareBy::new(|a: &Interval, b: &Interval| b.start().total_cmp(&a.start()))
            .order(&mut order, &graph);

        assert_eq!(
            names(&graph, &order),
            vec!["also-medium", "narrow", "wide", "medium"]
        );
    }

    #[test]
    fn test_shuffled_is_a_permutation() {
        let graph = graph();
        let mut order: Vec<VertexIndex> = graph.vertex_indices().collect();

        Shuffled::new(StdRng::seed_from_u64(7)).order(&mut order, &graph);

        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, graph.vertex_indices().collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffled_reproducible_with_seed() {
        let graph = graph();
        let mut first: Vec<VertexIndex> = graph.vertex_indices().collect();
        let mut second = first.clone();

        Shuffled::new(StdRng::seed_from_u64(42)).order(&mut first, &graph);
        Shuffled::new(StdRng::seed_from_u64(42)).order(&mut second, &graph);

        assert_eq!(first, second);
    }
}
