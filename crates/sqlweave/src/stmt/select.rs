//! SELECT statement builder.

use crate::clause::Clause;
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::operand::Operand;
use crate::stmt::parts::Parts;
use crate::stmt::traits::{Statement, StatementKind};
use crate::stmt::with::WithTable;
use crate::table::{Column, Table};

/// SELECT builder.
///
/// Every method takes `&self` and returns a modified copy, so one base query can
/// be refined in several directions.
///
/// ```rust
/// use sqlweave::{Clause, Dialect, Parameter, Select, Statement, Table};
///
/// let users = Table::new("users");
/// let base = Select::new(users.clone()).columns(vec![users.column("id")]);
/// let active = base.filter(Clause::eq(users.column("status"), Parameter::unnamed()));
///
/// assert_eq!(base.build(&Dialect::postgres()).unwrap(), "SELECT id FROM users");
/// assert_eq!(
///     active.build(&Dialect::postgres()).unwrap(),
///     "SELECT id FROM users WHERE status = $1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    table: Table,
    columns: Vec<Operand>,
    distinct: bool,
    group_by: Vec<Column>,
    having: Option<Clause>,
    parts: Parts,
}

impl Select {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            columns: Vec::new(),
            distinct: false,
            group_by: Vec::new(),
            having: None,
            parts: Parts::default(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Set the projection list. An empty list selects `*`.
    pub fn columns<I>(&self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let mut next = self.clone();
        next.columns = columns.into_iter().map(Into::into).collect();
        next
    }

    pub fn distinct(&self) -> Self {
        let mut next = self.clone();
        next.distinct = true;
        next
    }

    /// Attach the WHERE clause.
    pub fn filter(&self, clause: Clause) -> Self {
        let mut next = self.clone();
        next.parts.set_where(clause);
        next
    }

    pub fn group_by(&self, columns: Vec<Column>) -> Self {
        let mut next = self.clone();
        next.group_by = columns;
        next
    }

    /// Attach the HAVING clause.
    pub fn having(&self, clause: Clause) -> Self {
        let mut next = self.clone();
        if next.having.is_some() {
            next.parts.push_error("multiple having clauses");
        } else {
            next.having = Some(clause);
        }
        next
    }

    /// Raw text appended after everything else (ORDER BY, LIMIT, ...).
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

    /// Messages recorded so far; non-empty means rendering will fail.
    pub fn errors(&self) -> &[String] {
        self.parts.errors()
    }

    pub fn where_clause(&self) -> Option<&Clause> {
        self.parts.where_clause()
    }
}

impl Statement for Select {
    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn render(&self, dialect: &Dialect) -> SqlResult<String> {
        self.parts.check(self.kind())?;

        let mut sql = self.parts.render_with(dialect)?;
        sql.push_str("SELECT ");
        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        if self.columns.is_empty() {
            sql.push('*');
        } else {
            let cols = self
                .columns
                .iter()
                .map(|c| c.render(dialect))
                .collect::<SqlResult<Vec<_>>>()?;
            sql.push_str(&cols.join(", "));
        }
        sql.push_str(" FROM ");
        sql.push_str(&self.table.render(dialect));

        if let Some(clause) = self.parts.where_clause() {
            sql.push_str(" WHERE ");
            sql.push_str(&clause.render(dialect)?);
        }
        if !self.group_by.is_empty() {
            let cols: Vec<String> = self.group_by.iter().map(|c| c.render(dialect)).collect();
            sql.push_str(" GROUP BY ");
            sql.push_str(&cols.join(", "));
        }
        if let Some(clause) = &self.having {
            sql.push_str(" HAVING ");
            sql.push_str(&clause.render(dialect)?);
        }
        self.parts.push_suffix(&mut sql);
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ColumnExpr;

    #[test]
    fn star_when_no_columns() {
        let s = Select::new(Table::new("users"));
        assert_eq!(s.build(&Dialect::ansi()).unwrap(), "SELECT * FROM users");
    }

    #[test]
    fn distinct_group_by_having() {
        let orders = Table::new("orders");
        let s = Select::new(orders.clone())
            .distinct()
            .columns(vec![
                Operand::from(orders.column("customer")),
                Operand::from(ColumnExpr::CountAll),
            ])
            .group_by(vec![orders.column("customer")])
            .having(Clause::gt(ColumnExpr::CountAll, 3))
            .suffix("ORDER BY customer");
        assert_eq!(
            s.build(&Dialect::ansi()).unwrap(),
            "SELECT DISTINCT customer, COUNT(*) FROM orders GROUP BY customer \
             HAVING COUNT(*) > 3 ORDER BY customer"
        );
    }

    #[test]
    fn second_having_is_recorded() {
        let t = Table::new("t");
        let s = Select::new(t.clone())
            .having(Clause::gt(t.column("a"), 1))
            .having(Clause::gt(t.column("b"), 1));
        let err = s.build(&Dialect::ansi()).unwrap_err();
        assert!(err.message().contains("multiple having clauses"));
    }

    #[test]
    fn with_clause_prefix() {
        let orders = Table::new("orders");
        let big = Select::new(orders.clone()).filter(Clause::gt(orders.column("total"), 100));
        let s = Select::new(Table::new("big_orders"))
            .with_tables(vec![WithTable::new("big_orders", big)]);
        assert_eq!(
            s.build(&Dialect::ansi()).unwrap(),
            "WITH big_orders AS (SELECT * FROM orders WHERE total > 100) SELECT * FROM big_orders"
        );
    }

    #[test]
    fn empty_with_list_is_rejected() {
        let s = Select::new(Table::new("t")).with_tables(Vec::new());
        assert!(s.build(&Dialect::ansi()).unwrap_err().is_syntax());
    }
}
