//! Entity grouping over co-occurring values.
//!
//! This crate provides:
//! - A two-column observation table with missing-value aware cells
//! - Co-occurrence graph construction (deduplicated vertices, edges, singletons)
//! - Connected-component grouping with stable in-call group identifiers
//!
//! Core invariants:
//! - Values observed together in any row end up in the same group (transitively)
//! - Co-occurrence evidence wins over isolation: a value that was ever paired
//!   never forms its own singleton group
//! - Components are numbered first, singletons continue after the last component
//!
//! ## Quick Start
//!
//! ```rust
//! use dataid_canonical::Value;
//! use dataid_linkage::{find_groups, ObservationTable};
//!
//! let table = ObservationTable::pairs([
//!     (Some(Value::Int(1)), Some(Value::Int(2))),
//!     (Some(Value::Int(2)), Some(Value::Int(3))),
//!     (Some(Value::Int(4)), None),
//! ]);
//! let groups = find_groups(&table);
//! assert_eq!(groups.group_count(), 2);
//! assert_eq!(groups.len(), 4);
//! ```
//!
#![deny(missing_docs)]

/// Disjoint-set forest.
pub mod dsu;
/// Error types for linkage operations.
pub mod errors;
/// Co-occurrence graph construction.
pub mod graph;
/// Connected-component grouping.
pub mod grouping;
/// Observation and group tables.
pub mod table;

pub use dsu::DisjointSet;
pub use errors::LinkageError;
pub use graph::{build_graph, CooccurrenceGraph};
pub use grouping::{find_groups, group};
pub use table::{GroupRow, GroupTable, ObservationTable};
