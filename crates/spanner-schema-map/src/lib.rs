//! # spanner-schema-map
//!
//! Bidirectional schema reconciliation for source-to-Spanner migration
//! pipelines.
//!
//! An upstream conversion step produces a session artifact that describes
//! the same logical database twice: once as it exists in the origin
//! database and once as it exists on Spanner. Tables and columns may have
//! been renamed or dropped along the way, and target tables may have
//! gained generated key columns. This library
//! builds the lookup structures that let the rest of the pipeline
//! translate between table/column names and the conversion tool's
//! internal identifiers on both sides:
//!
//! - **Name translations** in both directions, skipping dropped and
//!   synthetic columns
//! - **Identifier indexes** resolving names to internal ids on each side
//! - **Presence validation** distinguishing "never in the artifact" from
//!   "legitimately dropped"
//! - **Ordered column lookup** matching the physical target column order
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use spanner_schema_map::{ColumnDef, ColumnType, Schema, SourceTable, TargetTable};
//!
//! fn column(id: &str, name: &str, ty: &str) -> (String, ColumnDef) {
//!     (
//!         id.to_string(),
//!         ColumnDef {
//!             id: id.to_string(),
//!             name: name.to_string(),
//!             ty: ColumnType {
//!                 name: ty.to_string(),
//!                 mods: vec![],
//!                 array_bounds: vec![],
//!             },
//!         },
//!     )
//! }
//!
//! let source = SourceTable {
//!     id: "t1".to_string(),
//!     name: "orders".to_string(),
//!     col_ids: vec!["c1".to_string()],
//!     col_defs: BTreeMap::from([column("c1", "order_id", "bigint")]),
//! };
//! let target = TargetTable {
//!     id: "t1".to_string(),
//!     name: "orders_v2".to_string(),
//!     col_ids: vec!["c1".to_string()],
//!     col_defs: BTreeMap::from([column("c1", "order_id", "INT64")]),
//! };
//!
//! let mut schema = Schema::from_artifact(
//!     BTreeMap::from([("t1".to_string(), source)]),
//!     BTreeMap::from([("t1".to_string(), target)]),
//!     BTreeMap::new(),
//! );
//! schema.generate_mappings();
//!
//! schema.verify_table_presence("orders")?;
//! assert_eq!(schema.target_column_names("orders_v2")?, vec!["order_id"]);
//! # Ok::<(), spanner_schema_map::SchemaMapError>(())
//! ```

pub mod connection;
pub mod error;
pub mod schema;

// Re-exports for convenient access
pub use connection::{ConnectionHelper, ConnectionHelperRequest};
pub use error::{Result, SchemaMapError};
pub use schema::{
    ColumnDef, ColumnType, NameAndCols, Schema, SourceTable, SyntheticPk, TargetTable,
};
