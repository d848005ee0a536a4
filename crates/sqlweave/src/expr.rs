//! Column-derived expressions rendered through dialect substitutions.

use crate::dialect::{Dialect, Substitution};
use crate::table::{Column, ColumnType};

/// An expression over a column (or the current time).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnExpr {
    /// The dialect's current-timestamp text.
    Now,
    /// Upper-case the column: `UPPER(col)`.
    Upper(Column),
    /// Lower-case the column: `LOWER(col)`.
    Lower(Column),
    /// `CAST(col AS <type>)`.
    Cast(Column, ColumnType),
    /// `table.col`.
    Qualified(Column),
    /// `COUNT(col)`.
    Count(Column),
    /// `COUNT(*)`.
    CountAll,
}

impl ColumnExpr {
    pub fn upper(column: Column) -> Self {
        ColumnExpr::Upper(column)
    }

    pub fn lower(column: Column) -> Self {
        ColumnExpr::Lower(column)
    }

    pub fn cast(column: Column, ty: ColumnType) -> Self {
        ColumnExpr::Cast(column, ty)
    }

    pub fn qualified(column: Column) -> Self {
        ColumnExpr::Qualified(column)
    }

    pub fn count(column: Column) -> Self {
        ColumnExpr::Count(column)
    }

    pub fn render(&self, dialect: &Dialect) -> String {
        match self {
            ColumnExpr::Now => dialect.text(Substitution::Now).to_string(),
            ColumnExpr::Upper(c) => {
                format!("{}({})", dialect.text(Substitution::UCase), c.render(dialect))
            }
            ColumnExpr::Lower(c) => {
                format!("{}({})", dialect.text(Substitution::LCase), c.render(dialect))
            }
            ColumnExpr::Cast(c, ty) => {
                format!("CAST({} AS {})", c.render(dialect), ty.render(dialect))
            }
            ColumnExpr::Qualified(c) => c.render_qualified(dialect),
            ColumnExpr::Count(c) => format!("COUNT({})", c.render(dialect)),
            ColumnExpr::CountAll => "COUNT(*)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    #[test]
    fn case_functions_follow_dialect() {
        let name = Table::new("users").column("name");
        assert_eq!(ColumnExpr::upper(name.clone()).render(&Dialect::ansi()), "UPPER(name)");
        assert_eq!(ColumnExpr::upper(name.clone()).render(&Dialect::mysql()), "UCASE(name)");
        assert_eq!(ColumnExpr::lower(name).render(&Dialect::mysql()), "LCASE(name)");
    }

    #[test]
    fn now_follows_dialect() {
        assert_eq!(ColumnExpr::Now.render(&Dialect::ansi()), "CURRENT_TIMESTAMP");
        assert_eq!(ColumnExpr::Now.render(&Dialect::postgres()), "NOW()");
        assert_eq!(ColumnExpr::Now.render(&Dialect::sqlserver()), "GETDATE()");
    }

    #[test]
    fn cast_uses_type_text() {
        let age = Table::new("users").column("age");
        assert_eq!(
            ColumnExpr::cast(age.clone(), ColumnType::Double).render(&Dialect::ansi()),
            "CAST(age AS DOUBLE PRECISION)"
        );
        assert_eq!(
            ColumnExpr::cast(age, ColumnType::Char).render(&Dialect::sqlite()),
            "CAST(age AS TEXT)"
        );
    }

    #[test]
    fn qualified_and_count() {
        let id = Table::new("orders").column("id");
        assert_eq!(ColumnExpr::qualified(id.clone()).render(&Dialect::ansi()), "orders.id");
        assert_eq!(ColumnExpr::count(id).render(&Dialect::ansi()), "COUNT(id)");
        assert_eq!(ColumnExpr::CountAll.render(&Dialect::ansi()), "COUNT(*)");
    }
}
