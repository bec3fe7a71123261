//! Annotated genomic intervals.
//!
//! An [`Interval`] is the unit the layout engine places into rows: an
//! identity plus start and end coordinates. Coordinates are not validated;
//! zero-width and inverted intervals are legal input and take part in the
//! overlap test exactly as written.

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// A single annotation span.
///
/// # Examples
///
/// ```
/// use tracklane_core::interval::Interval;
///
/// let a = Interval::new("A", 0.0, 10.0);
/// let c = Interval::new("C", 12.0, 20.0);
///
/// assert!(!a.overlaps(&c, 0.0));
/// assert!(a.overlaps(&c, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    id: Id,
    start: f64,
    end: f64,
}

impl Interval {
    /// Creates an interval covering `start..end`.
    pub fn new(id: impl Into<Id>, start: f64, end: f64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Returns the identity of this interval.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the start coordinate.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the end coordinate.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `end - start`. Negative for inverted intervals.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Returns true if the two intervals overlap once both are padded by
    /// `tolerance` on each side.
    ///
    /// The test is inclusive: intervals that merely touch overlap even at a
    /// tolerance of zero.
    pub fn overlaps(&self, other: &Interval, tolerance: f64) -> bool {
        self.start - tolerance <= other.end && self.end + tolerance >= other.start
    }
}
