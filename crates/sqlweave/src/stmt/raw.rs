//! Raw SQL statement with the usual WHERE/suffix/WITH slots.

use crate::clause::Clause;
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::stmt::parts::Parts;
use crate::stmt::traits::{Statement, StatementKind};
use crate::stmt::with::WithTable;
use crate::table::Table;

/// Caller-written SQL text plus the tables it touches.
///
/// The text is emitted verbatim. Parameters can still be used in the attached
/// WHERE clause and are numbered with the rest of the statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    sql: String,
    tables: Vec<Table>,
    parts: Parts,
}

impl Raw {
    pub fn new(sql: impl Into<String>, tables: Vec<Table>) -> Self {
        Self {
            sql: sql.into(),
            tables,
            parts: Parts::default(),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn filter(&self, clause: Clause) -> Self {
        let mut next = self.clone();
        next.parts.set_where(clause);
        next
    }

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
}

impl Statement for Raw {
    fn kind(&self) -> StatementKind {
        StatementKind::Raw
    }

    fn render(&self, dialect: &Dialect) -> SqlResult<String> {
        self.parts.check(self.kind())?;

        let mut sql = self.parts.render_with(dialect)?;
        sql.push_str(&self.sql);
        sql.push_str(&self.parts.render_tail(dialect)?);
        Ok(sql)
    }
}
