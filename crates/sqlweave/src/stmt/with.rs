//! Common table expressions.

use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::literal::pack_identifier;
use crate::stmt::select::Select;
use crate::stmt::traits::Statement;

/// One `name AS (SELECT ...)` entry of a WITH clause.
#[derive(Debug, Clone, PartialEq)]
pub struct WithTable {
    name: String,
    select: Select,
}

impl WithTable {
    pub fn new(name: impl Into<String>, select: Select) -> Self {
        Self {
            name: name.into(),
            select,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn select(&self) -> &Select {
        &self.select
    }

    pub(crate) fn render_name(&self, dialect: &Dialect) -> String {
        pack_identifier(&self.name, dialect)
    }

    pub fn render(&self, dialect: &Dialect) -> SqlResult<String> {
        Ok(format!(
            "{} AS ({})",
            self.render_name(dialect),
            self.select.render(dialect)?
        ))
    }
}
