//! Clause slots shared by the statement builders.

use crate::clause::Clause;
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::stmt::traits::StatementKind;
use crate::stmt::with::WithTable;

/// WHERE / suffix / WITH slots plus the deferred error list.
///
/// Each slot may be filled once. A second attempt leaves the first value in
/// place and records a message that surfaces when the statement renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Parts {
    where_clause: Option<Clause>,
    suffix: Option<String>,
    with_tables: Option<Vec<WithTable>>,
    errors: Vec<String>,
}

impl Parts {
    pub(crate) fn set_where(&mut self, clause: Clause) {
        if self.where_clause.is_some() {
            self.errors.push("multiple where clauses".to_string());
        } else {
            self.where_clause = Some(clause);
        }
    }

    pub(crate) fn set_suffix(&mut self, suffix: String) {
        if self.suffix.is_some() {
            self.errors.push("multiple suffixes".to_string());
        } else {
            self.suffix = Some(suffix);
        }
    }

    pub(crate) fn set_with(&mut self, tables: Vec<WithTable>) {
        if self.with_tables.is_some() {
            self.errors.push("multiple with clauses".to_string());
        } else if tables.is_empty() {
            self.errors
                .push("with clause requires at least one table".to_string());
        } else {
            self.with_tables = Some(tables);
        }
    }

    pub(crate) fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub(crate) fn where_clause(&self) -> Option<&Clause> {
        self.where_clause.as_ref()
    }

    pub(crate) fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Fail with every recorded message, if any.
    pub(crate) fn check(&self, kind: StatementKind) -> SqlResult<()> {
        if self.errors.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            target: "sqlweave.sql",
            kind = %kind,
            errors = self.errors.len(),
            "statement rejected"
        );
        Err(SqlError::syntax(self.errors.join("; ")))
    }

    /// `WITH a AS (...), b AS (...) `, or empty.
    pub(crate) fn render_with(&self, dialect: &Dialect) -> SqlResult<String> {
        let Some(tables) = &self.with_tables else {
            return Ok(String::new());
        };
        let parts = tables
            .iter()
            .map(|t| t.render(dialect))
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(format!("WITH {} ", parts.join(", ")))
    }

    /// Comma-separated WITH table names, if a WITH clause is attached.
    pub(crate) fn with_names(&self, dialect: &Dialect) -> Option<String> {
        self.with_tables.as_ref().map(|tables| {
            tables
                .iter()
                .map(|t| t.render_name(dialect))
                .collect::<Vec<_>>()
                .join(", ")
        })
    }

    /// ` WHERE ...` followed by ` <suffix>`, each only when present.
    pub(crate) fn render_tail(&self, dialect: &Dialect) -> SqlResult<String> {
        let mut sql = String::new();
        if let Some(clause) = &self.where_clause {
            sql.push_str(" WHERE ");
            sql.push_str(&clause.render(dialect)?);
        }
        self.push_suffix(&mut sql);
        Ok(sql)
    }

    pub(crate) fn push_suffix(&self, sql: &mut String) {
        if let Some(suffix) = &self.suffix {
            sql.push(' ');
            sql.push_str(suffix);
        }
    }
}
