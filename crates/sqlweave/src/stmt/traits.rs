//! Trait definitions for statement builders.

use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::exec::{Executor, Outcome};
use crate::literal::Value;
use crate::param::{self, NamedParameters};
use std::fmt;

/// Statement category, used in log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Raw,
    CreateIndex,
    DropIndex,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
            StatementKind::Raw => "raw",
            StatementKind::CreateIndex => "create_index",
            StatementKind::DropIndex => "drop_index",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base trait for all statement builders.
///
/// Implementors provide [`render`](Statement::render), which produces the text
/// with parameter sentinels still in place. [`build`](Statement::build) is the
/// terminal operation: it renders and then runs the numbering pass exactly once.
pub trait Statement: Sync {
    fn kind(&self) -> StatementKind;

    /// Render the statement without numbering parameters.
    ///
    /// Sub-queries are embedded through this method so that numbering happens
    /// once, over the outermost text.
    fn render(&self, dialect: &Dialect) -> SqlResult<String>;

    /// Render and number positional parameters.
    ///
    /// Fails when the text holds both unnamed and named sentinels: the two
    /// numbering passes each count from 1, so no binding order would be right.
    /// Dialects with a named marker never emit named sentinels and are unaffected.
    fn build(&self, dialect: &Dialect) -> SqlResult<String> {
        let raw = self.render(dialect)?;
        let placeholders = param::count_unnamed(&raw);

        if placeholders > 0 && param::has_named(&raw) {
            tracing::debug!(
                target: "sqlweave.sql",
                kind = %self.kind(),
                placeholders,
                "statement rejected: mixed unnamed and named parameters"
            );
            return Err(SqlError::syntax(
                "statement mixes unnamed and named parameters",
            ));
        }

        let sql = param::renumber(&raw, dialect);
        tracing::debug!(
            target: "sqlweave.sql",
            kind = %self.kind(),
            dialect = %dialect.name,
            sql_len = sql.len(),
            placeholders,
            "statement built"
        );
        Ok(sql)
    }

    /// Build and resolve named parameters into numbered markers.
    fn build_named(&self, dialect: &Dialect) -> SqlResult<NamedParameters> {
        let sql = self.build(dialect)?;
        param::resolve_named(&sql, dialect)
    }

    /// Debug helper: build against the default dialect.
    fn to_sql(&self) -> SqlResult<String> {
        self.build(&Dialect::default())
    }

    /// Build and hand the text to `executor`.
    fn execute_on<E: Executor>(
        &self,
        executor: &E,
        dialect: &Dialect,
        params: &[Value],
    ) -> impl std::future::Future<Output = SqlResult<Outcome>> + Send {
        async move {
            let sql = self.build(dialect)?;
            executor.execute(&sql, params).await
        }
    }
}
