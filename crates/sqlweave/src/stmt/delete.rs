//! DELETE statement builder.

use crate::clause::Clause;
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::stmt::parts::Parts;
use crate::stmt::traits::{Statement, StatementKind};
use crate::stmt::with::WithTable;
use crate::table::Table;

/// DELETE builder.
///
/// Without a WHERE clause the statement deletes every row; nothing guards
/// against that here.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    table: Table,
    parts: Parts,
}

impl Delete {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            parts: Parts::default(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Attach the WHERE clause.
    pub fn filter(&self, clause: Clause) -> Self {
        let mut next = self.clone();
        next.parts.set_where(clause);
        next
    }

    /// Raw text appended after the WHERE clause.
    pub fn suffix(&self, suffix: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.parts.set_suffix(suffix.into());
        next
    }

    pub fn with_tables(&self, tables: Vec<WithTable>) -> Self {
        let mut next = self.clone();
        next.parts.set_with(tables);
        next
    }

    pub fn errors(&self) -> &[String] {
        self.parts.errors()
    }

    pub fn where_clause(&self) -> Option<&Clause> {
        self.parts.where_clause()
    }
}

impl Statement for Delete {
    fn kind(&self) -> StatementKind {
        StatementKind::Delete
    }

    fn render(&self, dialect: &Dialect) -> SqlResult<String> {
        self.parts.check(self.kind())?;

        let mut sql = self.parts.render_with(dialect)?;
        sql.push_str("DELETE FROM ");
        sql.push_str(&self.table.render(dialect));

        if dialect.with_delete_requires_using {
            if let Some(names) = self.parts.with_names(dialect) {
                sql.push_str(" USING ");
                sql.push_str(&names);
            }
        }

        sql.push_str(&self.parts.render_tail(dialect)?);
        Ok(sql)
    }
}
