//! Tracklane Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Tracklane layout
//! engine and its callers. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Intervals**: Annotated genomic spans and the overlap test ([`interval::Interval`])
//! - **Row assignments**: The output of every layout strategy ([`assignment::RowAssignment`])
//! - **Strategies**: The selectable layout algorithms ([`strategy::LayoutStrategy`])

pub mod assignment;
pub mod identifier;
pub mod interval;
pub mod strategy;
