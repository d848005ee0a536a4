//! INSERT statement builder.

use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::operand::Operand;
use crate::stmt::parts::Parts;
use crate::stmt::traits::{Statement, StatementKind};
use crate::stmt::with::WithTable;
use crate::table::{Column, Table};

/// INSERT builder for a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    table: Table,
    values: Vec<(Column, Operand)>,
    parts: Parts,
}

impl Insert {
    /// Create an INSERT from `(column, value)` pairs. Fails if there are none.
    pub fn new<I, V>(table: Table, values: I) -> SqlResult<Self>
    where
        I: IntoIterator<Item = (Column, V)>,
        V: Into<Operand>,
    {
        let values: Vec<(Column, Operand)> =
            values.into_iter().map(|(c, v)| (c, v.into())).collect();
        if values.is_empty() {
            return Err(SqlError::syntax(format!(
                "insert into {} has no values",
                table.name()
            )));
        }
        Ok(Self {
            table,
            values,
            parts: Parts::default(),
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Append one more column/value pair.
    pub fn set(&self, column: Column, value: impl Into<Operand>) -> Self {
        let mut next = self.clone();
        next.values.push((column, value.into()));
        next
    }

    /// Raw text appended after `VALUES (...)` (e.g. `RETURNING id`).
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

impl Statement for Insert {
    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn render(&self, dialect: &Dialect) -> SqlResult<String> {
        self.parts.check(self.kind())?;

        let columns: Vec<String> = self.values.iter().map(|(c, _)| c.render(dialect)).collect();
        let values = self
            .values
            .iter()
            .map(|(_, v)| v.render(dialect))
            .collect::<SqlResult<Vec<_>>>()?;

        let mut sql = self.parts.render_with(dialect)?;
        sql.push_str("INSERT INTO ");
        sql.push_str(&self.table.render(dialect));
        sql.push_str(" (");
        sql.push_str(&columns.join(", "));
        sql.push_str(") VALUES (");
        sql.push_str(&values.join(", "));
        sql.push(')');
        self.parts.push_suffix(&mut sql);
        Ok(sql)
    }
}
