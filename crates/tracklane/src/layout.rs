//! Row-assignment engines and their shared plumbing.
//!
//! Every engine implements [`RowEngine`]: it takes an
//! [`OverlapGraph`](crate::structure::OverlapGraph) and returns a
//! [`RowAssignment`](tracklane_core::assignment::RowAssignment) in which no
//! two adjacent vertices share a row. [`EngineBuilder`] picks the engine for
//! a [`LayoutStrategy`](tracklane_core::strategy::LayoutStrategy).

mod engines;
mod ordering;

pub use engines::{EngineBuilder, Greedy, Heuristic, RowEngine, Sweep, TrialOutcome, Trials};
pub use ordering::{CompareBy, InputOrder, Shuffled, VertexOrdering, WidestFirst};
