//! Table and column references.
//!
//! These carry just enough identity for quoting and structural checks; they are
//! not schema declarations.

use crate::dialect::{Dialect, Substitution};
use crate::literal::pack_identifier;

/// A table reference.
///
/// # Example
///
/// ```rust
/// use sqlweave::{Dialect, Table};
///
/// let users = Table::new("users");
/// let id = users.column("id");
/// assert_eq!(id.qualified_name(), "users.id");
/// assert_eq!(users.render(&Dialect::ansi()), "users");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    name: String,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A column owned by this table.
    pub fn column(&self, name: impl Into<String>) -> Column {
        Column::new(self.name.clone(), name)
    }

    pub fn render(&self, dialect: &Dialect) -> String {
        pack_identifier(&self.name, dialect)
    }
}

/// A column reference: owning table name plus column name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    table: String,
    name: String,
}

impl Column {
    pub fn new(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `table.column`, unquoted. Used for identity comparisons.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.table, self.name)
    }

    /// The bare column name, quoted when needed.
    pub fn render(&self, dialect: &Dialect) -> String {
        pack_identifier(&self.name, dialect)
    }

    /// `table.column`, each part quoted when needed.
    pub fn render_qualified(&self, dialect: &Dialect) -> String {
        format!(
            "{}.{}",
            pack_identifier(&self.table, dialect),
            pack_identifier(&self.name, dialect)
        )
    }
}

/// Column types the dialect can name in casts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Char,
    Int32,
    Float,
    Double,
}

impl ColumnType {
    pub fn render(self, dialect: &Dialect) -> &str {
        dialect.text(match self {
            ColumnType::Char => Substitution::CharType,
            ColumnType::Int32 => Substitution::Int32Type,
            ColumnType::Float => Substitution::FloatType,
            ColumnType::Double => Substitution::DoubleType,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_renders_bare_name() {
        let c = Table::new("users").column("id");
        assert_eq!(c.render(&Dialect::ansi()), "id");
        assert_eq!(c.render_qualified(&Dialect::ansi()), "users.id");
    }

    #[test]
    fn names_with_spaces_get_quoted() {
        let c = Column::new("order items", "unit price");
        assert_eq!(c.render(&Dialect::mysql()), "`unit price`");
        assert_eq!(
            c.render_qualified(&Dialect::ansi()),
            "\"order items\".\"unit price\""
        );
    }

    #[test]
    fn column_types_follow_dialect() {
        assert_eq!(ColumnType::Int32.render(&Dialect::ansi()), "INTEGER");
        assert_eq!(ColumnType::Int32.render(&Dialect::mysql()), "SIGNED");
        assert_eq!(ColumnType::Char.render(&Dialect::postgres()), "VARCHAR");
    }
}
