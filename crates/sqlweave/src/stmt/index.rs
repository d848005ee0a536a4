//! CREATE INDEX / DROP INDEX.

use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::stmt::parts::Parts;
use crate::stmt::traits::{Statement, StatementKind};
use crate::validate::Index;

/// `CREATE [UNIQUE] INDEX name ON table (cols)`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndex {
    index: Index,
    parts: Parts,
}

impl CreateIndex {
    pub fn new(index: Index) -> Self {
        Self {
            index,
            parts: Parts::default(),
        }
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn suffix(&self, suffix: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.parts.set_suffix(suffix.into());
        next
    }
}

impl Statement for CreateIndex {
    fn kind(&self) -> StatementKind {
        StatementKind::CreateIndex
    }

    fn render(&self, dialect: &Dialect) -> SqlResult<String> {
        self.parts.check(self.kind())?;

        let columns: Vec<String> = self
            .index
            .columns()
            .iter()
            .map(|c| c.render(dialect))
            .collect();
        let mut sql = String::from("CREATE ");
        if self.index.is_unique() {
            sql.push_str("UNIQUE ");
        }
        sql.push_str("INDEX ");
        sql.push_str(&self.index.render_name(dialect));
        sql.push_str(" ON ");
        sql.push_str(&self.index.table().render(dialect));
        sql.push_str(" (");
        sql.push_str(&columns.join(", "));
        sql.push(')');
        self.parts.push_suffix(&mut sql);
        Ok(sql)
    }
}

/// `DROP INDEX name`, or `DROP INDEX name ON table` where the dialect needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct DropIndex {
    index: Index,
    parts: Parts,
}

impl DropIndex {
    pub fn new(index: Index) -> Self {
        Self {
            index,
            parts: Parts::default(),
        }
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn suffix(&self, suffix: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.parts.set_suffix(suffix.into());
        next
    }
}

impl Statement for DropIndex {
    fn kind(&self) -> StatementKind {
        StatementKind::DropIndex
    }

    fn render(&self, dialect: &Dialect) -> SqlResult<String> {
        self.parts.check(self.kind())?;

        let mut sql = format!("DROP INDEX {}", self.index.render_name(dialect));
        if dialect.drop_index_requires_on_table_name {
            sql.push_str(" ON ");
            sql.push_str(&self.index.table().render(dialect));
        }
        self.parts.push_suffix(&mut sql);
        Ok(sql)
    }
}
