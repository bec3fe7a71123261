//! The output contract shared by every layout strategy.
//!
//! A [`RowAssignment`] maps each annotation identity to a zero-based row
//! index and records how many rows were used. The rendering side only needs
//! this type; it never has to know which strategy produced it.

use indexmap::IndexMap;
use log::trace;

use crate::identifier::Id;

/// Row index per annotation, plus the number of rows in use.
///
/// Entries keep the order in which they were inserted, which for the
/// built-in strategies is the order of the input intervals. The value is
/// read-only once constructed.
///
/// # Examples
///
/// ```
/// use tracklane_core::{assignment::RowAssignment, identifier::Id};
///
/// let assignment: RowAssignment = [(Id::new("A"), 0), (Id::new("B"), 1), (Id::new("C"), 0)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(assignment.row_count(), 2);
/// assert_eq!(assignment.row(Id::new("B")), 1);
/// assert_eq!(assignment.try_row(Id::new("missing")), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowAssignment {
    rows: IndexMap<Id, usize>,
    row_count: usize,
}

impl RowAssignment {
    /// Creates an empty assignment with zero rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the row of `id`, or row 0 if `id` was never laid out.
    ///
    /// The fallback keeps rendering working when the caller's annotation
    /// list has drifted from the one that was laid out. Use
    /// [`try_row`](Self::try_row) to detect that case.
    pub fn row(&self, id: Id) -> usize {
        self.try_row(id).unwrap_or_else(|| {
            trace!(id = id.to_string(); "Unknown identity, defaulting to row 0");
            0
        })
    }

    /// Returns the row of `id`, or `None` if `id` was never laid out.
    pub fn try_row(&self, id: Id) -> Option<usize> {
        self.rows.get(&id).copied()
    }

    /// Returns true if `id` has a row.
    pub fn contains(&self, id: Id) -> bool {
        self.rows.contains_key(&id)
    }

    /// Returns the number of rows in use: one more than the highest row
    /// index, or 0 for an empty assignment.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of laid-out identities.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing was laid out.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates `(id, row)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, usize)> + '_ {
        self.rows.iter().map(|(&id, &row)| (id, row))
    }

    /// Groups identities by row. The outer vector has `row_count` entries.
    pub fn rows(&self) -> Vec<Vec<Id>> {
        let mut grouped = vec![Vec::new(); self.row_count];
        for (id, row) in self.iter() {
            grouped[row].push(id);
        }
        grouped
    }
}

impl FromIterator<(Id, usize)> for RowAssignment {
    fn from_iter<T: IntoIterator<Item = (Id, usize)>>(iter: T) -> Self {
        let rows: IndexMap<Id, usize> = iter.into_iter().collect();
        let row_count = rows.values().max().map_or(0, |max| max + 1);
        Self { rows, row_count }
    }
}
