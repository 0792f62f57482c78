//! Raw schema types from the conversion tool's session artifact.
//!
//! These types mirror the per-table records the artifact stores for both
//! sides of a migration: the schema as discovered in the origin database
//! and the schema as created on Spanner. The mapping engine treats type
//! information as opaque and passes it through unchanged.
//!
//! Field names follow the artifact's PascalCase JSON keys.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Type and length metadata for a column.
///
/// Opaque to the mapping engine; downstream row translation interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnType {
    /// Type name (e.g. "varchar", "INT64").
    pub name: String,

    /// Length/precision modifiers, empty when the type takes none.
    #[serde(default)]
    pub mods: Vec<i64>,

    /// Array dimension bounds, empty for scalar types.
    #[serde(default)]
    pub array_bounds: Vec<i64>,
}

/// One column of a source or target table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnDef {
    /// Column identifier, unique within the owning table.
    pub id: String,

    /// Display name of the column.
    pub name: String,

    /// Type metadata, carried through unchanged.
    #[serde(rename = "Type")]
    pub ty: ColumnType,
}

/// A table as discovered in the origin database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceTable {
    /// Table identifier, stable across source and target for the same
    /// logical table.
    pub id: String,

    /// Display name in the origin database.
    pub name: String,

    /// Column identifiers in physical column order.
    pub col_ids: Vec<String>,

    /// Column definitions keyed by column identifier. Every id in
    /// `col_ids` has an entry here.
    pub col_defs: BTreeMap<String, ColumnDef>,
}

/// A table as created on Spanner by the conversion step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetTable {
    /// Table identifier, shared with the source table it was derived from.
    pub id: String,

    /// Display name on Spanner.
    pub name: String,

    /// Column identifiers in physical column order.
    pub col_ids: Vec<String>,

    /// Column definitions keyed by column identifier. Every id in
    /// `col_ids` has an entry here.
    pub col_defs: BTreeMap<String, ColumnDef>,
}

/// Annotation for a target table that gained a generated primary key.
///
/// The column it names exists only on the target side and therefore never
/// appears in the name-to-name translations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SyntheticPk {
    /// Identifier of the generated primary-key column.
    pub col_id: String,

    /// Sequence ordinal the conversion tool assigned to the key.
    pub sequence: i64,
}

/// Derived record pairing a canonical name with a column mapping.
///
/// The common output shape of the four derived lookups on
/// [`Schema`](super::Schema). Which side the canonical name belongs to and
/// what the column map translates depend on the lookup the record lives
/// in: name-to-name in the two translation maps, name-to-identifier in the
/// two index maps. Built by the mapping builder, never by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAndCols {
    name: String,
    cols: HashMap<String, String>,
}

impl NameAndCols {
    pub(crate) fn new(name: String, cols: HashMap<String, String>) -> Self {
        Self { name, cols }
    }

    /// Canonical name: the destination table name in the translation
    /// lookups, the table identifier in the index lookups.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column mapping for the table.
    pub fn cols(&self) -> &HashMap<String, String> {
        &self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_table_artifact_round_trip() {
        let json = r#"{
            "Id": "t1",
            "Name": "orders",
            "ColIds": ["c2", "c1"],
            "ColDefs": {
                "c1": {"Id": "c1", "Name": "order_id", "Type": {"Name": "bigint"}},
                "c2": {"Id": "c2", "Name": "amount", "Type": {"Name": "numeric", "Mods": [10, 2]}}
            }
        }"#;

        let table: SourceTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.id, "t1");
        // Column order comes from ColIds, not from the definition map.
        assert_eq!(table.col_ids, vec!["c2", "c1"]);
        assert_eq!(table.col_defs["c2"].ty.mods, vec![10, 2]);

        let back: SourceTable =
            serde_json::from_str(&serde_json::to_string(&table).unwrap()).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_synthetic_pk_round_trip() {
        let json = r#"{"ColId": "c9", "Sequence": 1}"#;
        let pk: SyntheticPk = serde_json::from_str(json).unwrap();
        assert_eq!(pk.col_id, "c9");
        assert_eq!(pk.sequence, 1);

        let back: SyntheticPk =
            serde_json::from_str(&serde_json::to_string(&pk).unwrap()).unwrap();
        assert_eq!(back, pk);
    }

    #[test]
    fn test_column_type_defaults_to_scalar() {
        let ty: ColumnType = serde_json::from_str(r#"{"Name": "STRING"}"#).unwrap();
        assert!(ty.mods.is_empty());
        assert!(ty.array_bounds.is_empty());
    }
}
