//! Session-derived schema container and its name/identifier lookups.

use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaMapError};

use super::model::{NameAndCols, SourceTable, SyntheticPk, TargetTable};

/// Reconciled view of the source and target schemas from one conversion
/// session.
///
/// The three raw maps come straight from the session artifact and are
/// fixed at construction. The four derived lookups are computed from them
/// by [`generate_mappings`](Schema::generate_mappings) in a second phase;
/// once that has run, the instance is read-mostly and safe to share
/// across worker tasks as long as nothing mutates it concurrently.
///
/// Equality and hashing cover only the raw maps and the empty flag. The
/// derived lookups are a pure function of the raw maps, so including them
/// would be redundant and would make comparisons needlessly expensive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Table id to source table, as discovered in the origin database.
    source_tables: BTreeMap<String, SourceTable>,

    /// Table id to target table, as created on Spanner. A source id
    /// missing here means the table was dropped during conversion.
    target_tables: BTreeMap<String, TargetTable>,

    /// Table id to synthetic primary key, for target tables that gained
    /// a generated key column.
    synthetic_pks: BTreeMap<String, SyntheticPk>,

    /// Source table name to target table name and column-name pairs.
    to_target: HashMap<String, NameAndCols>,

    /// Target table name to source table name and column-name pairs.
    to_source: HashMap<String, NameAndCols>,

    /// Source table name to table id and column-name-to-id pairs.
    src_to_id: HashMap<String, NameAndCols>,

    /// Target table name to table id and column-name-to-id pairs.
    target_to_id: HashMap<String, NameAndCols>,

    /// True when the schema was default-constructed instead of populated
    /// from an artifact.
    empty: bool,
}

impl Schema {
    /// Create an empty schema. Lookup operations on it fail until a
    /// populated schema replaces it; callers check [`is_empty`](Schema::is_empty)
    /// first.
    pub fn new() -> Self {
        Self {
            source_tables: BTreeMap::new(),
            target_tables: BTreeMap::new(),
            synthetic_pks: BTreeMap::new(),
            to_target: HashMap::new(),
            to_source: HashMap::new(),
            src_to_id: HashMap::new(),
            target_to_id: HashMap::new(),
            empty: true,
        }
    }

    /// Create a schema from the raw maps of a session artifact.
    ///
    /// All three maps share one table-identifier space. Every id in
    /// `target_tables` must also appear in `source_tables`; the reverse
    /// need not hold (dropped tables). Call
    /// [`generate_mappings`](Schema::generate_mappings) before using any
    /// lookup operation.
    pub fn from_artifact(
        source_tables: BTreeMap<String, SourceTable>,
        target_tables: BTreeMap<String, TargetTable>,
        synthetic_pks: BTreeMap<String, SyntheticPk>,
    ) -> Self {
        Self {
            source_tables,
            target_tables,
            synthetic_pks,
            to_target: HashMap::new(),
            to_source: HashMap::new(),
            src_to_id: HashMap::new(),
            target_to_id: HashMap::new(),
            empty: false,
        }
    }

    /// Source tables keyed by table id.
    pub fn source_tables(&self) -> &BTreeMap<String, SourceTable> {
        &self.source_tables
    }

    /// Target tables keyed by table id.
    pub fn target_tables(&self) -> &BTreeMap<String, TargetTable> {
        &self.target_tables
    }

    /// Synthetic primary keys keyed by target table id.
    pub fn synthetic_pks(&self) -> &BTreeMap<String, SyntheticPk> {
        &self.synthetic_pks
    }

    /// Source-name to target-name translation.
    pub fn to_target(&self) -> &HashMap<String, NameAndCols> {
        &self.to_target
    }

    /// Target-name to source-name translation.
    pub fn to_source(&self) -> &HashMap<String, NameAndCols> {
        &self.to_source
    }

    /// Source-name to identifier index.
    pub fn src_to_id(&self) -> &HashMap<String, NameAndCols> {
        &self.src_to_id
    }

    /// Target-name to identifier index.
    pub fn target_to_id(&self) -> &HashMap<String, NameAndCols> {
        &self.target_to_id
    }

    /// Replace the source-name to target-name translation.
    pub fn set_to_target(&mut self, to_target: HashMap<String, NameAndCols>) {
        self.to_target = to_target;
    }

    /// Replace the target-name to source-name translation.
    pub fn set_to_source(&mut self, to_source: HashMap<String, NameAndCols>) {
        self.to_source = to_source;
    }

    /// Replace the source-name to identifier index.
    pub fn set_src_to_id(&mut self, src_to_id: HashMap<String, NameAndCols>) {
        self.src_to_id = src_to_id;
    }

    /// Replace the target-name to identifier index.
    pub fn set_target_to_id(&mut self, target_to_id: HashMap<String, NameAndCols>) {
        self.target_to_id = target_to_id;
    }

    /// Whether the schema was populated from an artifact.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Override the empty flag.
    pub fn set_empty(&mut self, empty: bool) {
        self.empty = empty;
    }

    /// Build all four derived lookups from the raw maps.
    ///
    /// Idempotent: each call rebuilds the lookups wholesale. Expected to
    /// run once, after construction and before any lookup operation.
    pub fn generate_mappings(&mut self) {
        self.compute_to_target();
        self.compute_to_source();
        self.compute_src_to_id();
        self.compute_target_to_id();
        tracing::debug!(
            to_target = self.to_target.len(),
            to_source = self.to_source.len(),
            src_to_id = self.src_to_id.len(),
            target_to_id = self.target_to_id.len(),
            "rebuilt derived schema lookups"
        );
    }

    fn compute_to_target(&mut self) {
        let mut to_target = HashMap::with_capacity(self.target_tables.len());
        // Driven by the target table set: the source side may still list
        // tables the conversion dropped.
        for (table_id, target_table) in &self.target_tables {
            let source_table = self
                .source_tables
                .get(table_id)
                .expect("target table without a source counterpart in the session artifact");
            let mut cols = HashMap::new();
            // Target column order. Ids the source lacks are target-only
            // columns (synthetic keys) and get no entry.
            for col_id in &target_table.col_ids {
                if let Some(source_col) = source_table.col_defs.get(col_id) {
                    cols.insert(
                        source_col.name.clone(),
                        target_table.col_defs[col_id].name.clone(),
                    );
                }
            }
            to_target.insert(
                source_table.name.clone(),
                NameAndCols::new(target_table.name.clone(), cols),
            );
        }
        self.to_target = to_target;
    }

    fn compute_to_source(&mut self) {
        let mut to_source = HashMap::with_capacity(self.target_tables.len());
        for (table_id, target_table) in &self.target_tables {
            let source_table = self
                .source_tables
                .get(table_id)
                .expect("target table without a source counterpart in the session artifact");
            let mut cols = HashMap::new();
            for col_id in &target_table.col_ids {
                if let Some(source_col) = source_table.col_defs.get(col_id) {
                    cols.insert(
                        target_table.col_defs[col_id].name.clone(),
                        source_col.name.clone(),
                    );
                }
            }
            to_source.insert(
                target_table.name.clone(),
                NameAndCols::new(source_table.name.clone(), cols),
            );
        }
        self.to_source = to_source;
    }

    fn compute_src_to_id(&mut self) {
        let mut src_to_id = HashMap::with_capacity(self.source_tables.len());
        // Built from the full source set, dropped tables included, so the
        // validator can tell "never existed" from "dropped".
        for (table_id, source_table) in &self.source_tables {
            let cols = source_table
                .col_ids
                .iter()
                .map(|col_id| (source_table.col_defs[col_id].name.clone(), col_id.clone()))
                .collect();
            src_to_id.insert(
                source_table.name.clone(),
                NameAndCols::new(table_id.clone(), cols),
            );
        }
        self.src_to_id = src_to_id;
    }

    fn compute_target_to_id(&mut self) {
        let mut target_to_id = HashMap::with_capacity(self.target_tables.len());
        for (table_id, target_table) in &self.target_tables {
            let cols = target_table
                .col_ids
                .iter()
                .map(|col_id| (target_table.col_defs[col_id].name.clone(), col_id.clone()))
                .collect();
            target_to_id.insert(
                target_table.name.clone(),
                NameAndCols::new(table_id.clone(), cols),
            );
        }
        self.target_to_id = target_to_id;
    }

    /// Verify that a source table is still representable on the target
    /// side.
    ///
    /// A pure precondition gate: returns `Ok(())` when the table exists
    /// end-to-end, otherwise the failure mode tells the caller what went
    /// wrong.
    ///
    /// # Errors
    ///
    /// - [`SchemaMapError::Config`] if the artifact never described the
    ///   table, or the derived lookups disagree with the raw target map.
    /// - [`SchemaMapError::DroppedTable`] if the table existed in the
    ///   source but the conversion dropped it. Expected and recoverable;
    ///   callers skip the table.
    pub fn verify_table_presence(&self, source_table_name: &str) -> Result<()> {
        let id_entry = self.src_to_id.get(source_table_name).ok_or_else(|| {
            SchemaMapError::config(format!(
                "missing entry for table '{source_table_name}' in the source schema; \
                 supply a valid session artifact"
            ))
        })?;
        if !self.to_target.contains_key(source_table_name) {
            tracing::warn!(
                table = source_table_name,
                "table has no target mapping; treating as dropped"
            );
            return Err(SchemaMapError::dropped_table(format!(
                "no target mapping for table '{source_table_name}'; \
                 it is likely this table was dropped during conversion"
            )));
        }
        let table_id = id_entry.name();
        if !self.target_tables.contains_key(table_id) {
            return Err(SchemaMapError::config(format!(
                "missing entry for table id '{table_id}' in the target schema; \
                 supply a valid session artifact"
            )));
        }
        Ok(())
    }

    /// Column display names of a target table, in the table's stored
    /// column order.
    ///
    /// Downstream row translation aligns this sequence positionally with
    /// row data, so the order is the physical target order, never sorted.
    ///
    /// # Errors
    ///
    /// [`SchemaMapError::NotFound`] if no target table has that name.
    pub fn target_column_names(&self, target_table_name: &str) -> Result<Vec<String>> {
        let id_entry = self.target_to_id.get(target_table_name).ok_or_else(|| {
            SchemaMapError::not_found(format!("table '{target_table_name}' does not exist"))
        })?;
        let table = &self.target_tables[id_entry.name()];
        Ok(table
            .col_ids
            .iter()
            .map(|col_id| table.col_defs[col_id].name.clone())
            .collect())
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

// Equality and hashing cover the raw maps and the empty flag only; the
// derived lookups are a function of the raw maps.
impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.empty == other.empty
            && self.source_tables == other.source_tables
            && self.target_tables == other.target_tables
            && self.synthetic_pks == other.synthetic_pks
    }
}

impl Eq for Schema {}

impl Hash for Schema {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.empty.hash(state);
        self.source_tables.hash(state);
        self.target_tables.hash(state);
        self.synthetic_pks.hash(state);
    }
}
