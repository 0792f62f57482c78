//! Schema reconciliation between a source database and its Spanner
//! counterpart.
//!
//! - [`model`]: raw table and column types from the session artifact
//! - [`session`]: the [`Schema`] container with its derived name and
//!   identifier lookups
//!
//! The raw types are keyed by the conversion tool's internal identifiers,
//! which are stable across both sides of a migration. Names are a lookup
//! layer built on top of that identifier space, so a name reused
//! differently on the two sides cannot cross wires.

pub mod model;
pub mod session;

pub use model::{ColumnDef, ColumnType, NameAndCols, SourceTable, SyntheticPk, TargetTable};
pub use session::Schema;
