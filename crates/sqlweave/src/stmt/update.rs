//! UPDATE statement builder.

use crate::clause::Clause;
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::operand::Operand;
use crate::stmt::parts::Parts;
use crate::stmt::traits::{Statement, StatementKind};
use crate::stmt::with::WithTable;
use crate::table::{Column, Table};

/// UPDATE builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    table: Table,
    assignments: Vec<(Column, Operand)>,
    parts: Parts,
}

impl Update {
    /// Create an UPDATE with its SET list. Fails if the list is empty.
    pub fn new<I, V>(table: Table, assignments: I) -> SqlResult<Self>
    where
        I: IntoIterator<Item = (Column, V)>,
        V: Into<Operand>,
    {
        let assignments: Vec<(Column, Operand)> = assignments
            .into_iter()
            .map(|(c, v)| (c, v.into()))
            .collect();
        if assignments.is_empty() {
            return Err(SqlError::syntax(format!(
                "update of {} has no assignments",
                table.name()
            )));
        }
        Ok(Self {
            table,
            assignments,
            parts: Parts::default(),
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn assignments(&self) -> &[(Column, Operand)] {
        &self.assignments
    }

    /// Append one more `column = value` pair.
    pub fn set(&self, column: Column, value: impl Into<Operand>) -> Self {
        let mut next = self.clone();
        next.assignments.push((column, value.into()));
        next
    }

    /// Attach the WHERE clause.
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

impl Statement for Update {
    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn render(&self, dialect: &Dialect) -> SqlResult<String> {
        self.parts.check(self.kind())?;

        let mut sql = self.parts.render_with(dialect)?;
        sql.push_str("UPDATE ");
        sql.push_str(&self.table.render(dialect));
        sql.push_str(" SET ");

        let sets = self
            .assignments
            .iter()
            .map(|(column, value)| -> SqlResult<String> {
                Ok(format!("{} = {}", column.render(dialect), value.render(dialect)?))
            })
            .collect::<SqlResult<Vec<_>>>()?;
        sql.push_str(&sets.join(", "));

        if dialect.with_update_requires_from {
            if let Some(names) = self.parts.with_names(dialect) {
                sql.push_str(" FROM ");
                sql.push_str(&names);
            }
        }

        sql.push_str(&self.parts.render_tail(dialect)?);
        Ok(sql)
    }
}
