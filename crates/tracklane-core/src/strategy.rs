//! Selectable row-assignment strategies.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Algorithm used to assign annotations to rows.
///
/// The names match external configuration strings (snake_case).
///
/// # Variants
///
/// - `Sweep` - Exact start-ordered sweep, optimal for interval overlaps (default)
/// - `Greedy` - Deterministic per-round coloring, widest features first
/// - `Heuristic` - Best of many randomized per-round colorings
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    #[default]
    Sweep,
    Greedy,
    Heuristic,
}

impl FromStr for LayoutStrategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sweep" => Ok(Self::Sweep),
            "greedy" => Ok(Self::Greedy),
            "heuristic" => Ok(Self::Heuristic),
            _ => Err("Unsupported layout strategy"),
        }
    }
}

impl From<LayoutStrategy> for &'static str {
    fn from(val: LayoutStrategy) -> Self {
        match val {
            LayoutStrategy::Sweep => "sweep",
            LayoutStrategy::Greedy => "greedy",
            LayoutStrategy::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
