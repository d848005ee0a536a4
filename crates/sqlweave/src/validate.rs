//! Structural checks for foreign keys and indexes.

use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::literal::pack_identifier;
use crate::table::{Column, Table};
use std::collections::{BTreeSet, HashSet};
use std::hash::{Hash, Hasher};

/// Check that `keys` and `refs` can form a foreign key on `owning_table`.
///
/// Fails if either list is empty, the lengths differ, a key column belongs to
/// another table, or the reference columns span more than one table.
pub fn validate_foreign_key(keys: &[Column], refs: &[Column], owning_table: &Table) -> SqlResult<()> {
    if keys.is_empty() || refs.is_empty() {
        return Err(SqlError::syntax("foreign key needs at least one column"));
    }
    if keys.len() != refs.len() {
        return Err(SqlError::syntax(format!(
            "foreign key has {} key columns but {} reference columns",
            keys.len(),
            refs.len()
        )));
    }
    if let Some(stray) = keys.iter().find(|k| k.table() != owning_table.name()) {
        return Err(SqlError::syntax(format!(
            "foreign key column {} does not belong to table {}",
            stray.qualified_name(),
            owning_table.name()
        )));
    }
    let ref_table = refs[0].table();
    if refs.iter().any(|r| r.table() != ref_table) {
        return Err(SqlError::syntax(
            "foreign key reference columns span more than one table",
        ));
    }
    Ok(())
}

/// A validated foreign key.
///
/// Equality and hashing use the *sets* of qualified key and reference names, so
/// column order does not matter.
#[derive(Debug, Clone)]
pub struct ForeignKey {
    keys: Vec<Column>,
    refs: Vec<Column>,
    key_names: BTreeSet<String>,
    ref_names: BTreeSet<String>,
}

impl ForeignKey {
    pub fn new(keys: Vec<Column>, refs: Vec<Column>, owning_table: &Table) -> SqlResult<Self> {
        validate_foreign_key(&keys, &refs, owning_table)?;
        let key_names = keys.iter().map(Column::qualified_name).collect();
        let ref_names = refs.iter().map(Column::qualified_name).collect();
        Ok(Self {
            keys,
            refs,
            key_names,
            ref_names,
        })
    }

    pub fn keys(&self) -> &[Column] {
        &self.keys
    }

    pub fn refs(&self) -> &[Column] {
        &self.refs
    }

    /// The table the reference columns belong to.
    pub fn ref_table(&self) -> &str {
        // Construction guarantees at least one reference column.
        self.refs.first().map(Column::table).unwrap_or_default()
    }

    /// `FOREIGN KEY (k1, k2) REFERENCES table (r1, r2)`
    pub fn to_sql(&self, dialect: &Dialect) -> String {
        let keys: Vec<String> = self.keys.iter().map(|c| c.render(dialect)).collect();
        let refs: Vec<String> = self.refs.iter().map(|c| c.render(dialect)).collect();
        format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            keys.join(", "),
            pack_identifier(self.ref_table(), dialect),
            refs.join(", ")
        )
    }
}

impl PartialEq for ForeignKey {
    fn eq(&self, other: &Self) -> bool {
        self.key_names == other.key_names && self.ref_names == other.ref_names
    }
}

impl Eq for ForeignKey {}

impl Hash for ForeignKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_names.hash(state);
        self.ref_names.hash(state);
    }
}

/// A validated index definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Index {
    name: String,
    table: Table,
    columns: Vec<Column>,
    unique: bool,
}

impl Index {
    /// Fails when `columns` is empty, a column belongs to another table, or a
    /// column repeats.
    pub fn new(
        name: impl Into<String>,
        table: Table,
        columns: Vec<Column>,
        unique: bool,
    ) -> SqlResult<Self> {
        let name = name.into();
        if columns.is_empty() {
            return Err(SqlError::syntax(format!("index {name} has no columns")));
        }
        let mut seen = HashSet::new();
        for column in &columns {
            if column.table() != table.name() {
                return Err(SqlError::syntax(format!(
                    "index {name} column {} does not belong to table {}",
                    column.qualified_name(),
                    table.name()
                )));
            }
            if !seen.insert(column.name()) {
                return Err(SqlError::syntax(format!(
                    "index {name} repeats column {}",
                    column.name()
                )));
            }
        }
        Ok(Self {
            name,
            table,
            columns,
            unique,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub(crate) fn render_name(&self, dialect: &Dialect) -> String {
        pack_identifier(&self.name, dialect)
    }
}
