//! Operands usable on either side of a [`Clause`].
//!
//! [`Operand`] is a closed sum type: the clause assembler matches on it
//! exhaustively, so a new operand kind has to be handled at every render site.

use crate::clause::Clause;
use crate::dialect::{Dialect, Substitution};
use crate::error::{SqlError, SqlResult};
use crate::expr::ColumnExpr;
use crate::literal::{Value, pack_literal_for};
use crate::param::{Parameter, reject_reserved};
use crate::stmt::{Select, Statement};
use crate::table::Column;
use chrono::NaiveDateTime;

/// One side of a conditional clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A nested clause, rendered in parentheses.
    Clause(Box<Clause>),

    String(String),
    Int(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Date(NaiveDateTime),

    Strings(Vec<String>),
    Ints(Vec<i64>),
    Floats(Vec<f32>),
    Doubles(Vec<f64>),
    Bools(Vec<bool>),
    Dates(Vec<NaiveDateTime>),

    Column(Column),
    Expr(ColumnExpr),
    Param(Parameter),
    Params(Vec<Parameter>),

    /// `(SELECT ...)`
    SubQuery(Box<Select>),
    /// `ANY (SELECT ...)`
    Any(Box<Select>),
    /// `ALL (SELECT ...)`
    All(Box<Select>),
}

impl Operand {
    pub fn subquery(select: Select) -> Self {
        Operand::SubQuery(Box::new(select))
    }

    pub fn any(select: Select) -> Self {
        Operand::Any(Box::new(select))
    }

    pub fn all(select: Select) -> Self {
        Operand::All(Box::new(select))
    }

    /// Whether this is one of the array variants.
    pub fn is_array(&self) -> bool {
        self.array_len().is_some()
    }

    /// Element count of an array variant.
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Operand::Strings(v) => Some(v.len()),
            Operand::Ints(v) => Some(v.len()),
            Operand::Floats(v) => Some(v.len()),
            Operand::Doubles(v) => Some(v.len()),
            Operand::Bools(v) => Some(v.len()),
            Operand::Dates(v) => Some(v.len()),
            Operand::Params(v) => Some(v.len()),
            _ => None,
        }
    }

    /// Render each element of an array variant; `None` for every other variant.
    pub fn render_elements(&self, dialect: &Dialect) -> SqlResult<Option<Vec<String>>> {
        fn pack<T: Clone + Into<Value>>(items: &[T], dialect: &Dialect) -> Vec<String> {
            items
                .iter()
                .map(|v| pack_literal_for(&v.clone().into(), dialect))
                .collect()
        }

        let elements = match self {
            Operand::Strings(v) => {
                for text in v {
                    reject_reserved(text, "string literal")?;
                }
                pack(v, dialect)
            }
            Operand::Ints(v) => pack(v, dialect),
            Operand::Floats(v) => pack(v, dialect),
            Operand::Doubles(v) => pack(v, dialect),
            Operand::Bools(v) => pack(v, dialect),
            Operand::Dates(v) => pack(v, dialect),
            Operand::Params(v) => v
                .iter()
                .map(|p| p.render(dialect))
                .collect::<SqlResult<Vec<_>>>()?,
            _ => return Ok(None),
        };
        Ok(Some(elements))
    }

    /// Render this operand on its own.
    ///
    /// Array variants render as empty text here; only BETWEEN and IN give them a
    /// shape (see [`Clause::render`]).
    pub fn render(&self, dialect: &Dialect) -> SqlResult<String> {
        let sql = match self {
            Operand::Clause(clause) => format!("({})", clause.render(dialect)?),

            Operand::String(v) => {
                reject_reserved(v, "string literal")?;
                pack_literal_for(&Value::String(v.clone()), dialect)
            }
            Operand::Int(v) => pack_literal_for(&Value::Int(*v), dialect),
            Operand::Float(v) => pack_literal_for(&Value::Float(*v), dialect),
            Operand::Double(v) => pack_literal_for(&Value::Double(*v), dialect),
            Operand::Bool(v) => pack_literal_for(&Value::Bool(*v), dialect),
            Operand::Date(v) => pack_literal_for(&Value::Date(*v), dialect),

            Operand::Strings(_)
            | Operand::Ints(_)
            | Operand::Floats(_)
            | Operand::Doubles(_)
            | Operand::Bools(_)
            | Operand::Dates(_)
            | Operand::Params(_) => String::new(),

            Operand::Column(c) => c.render(dialect),
            Operand::Expr(e) => e.render(dialect),
            Operand::Param(p) => p.render(dialect)?,

            Operand::SubQuery(select) => format!("({})", select.render(dialect)?),
            Operand::Any(select) => {
                if !dialect.any_on_subquery_supported {
                    return Err(SqlError::syntax(format!(
                        "ANY on a sub-query is not supported by dialect '{}'",
                        dialect.name
                    )));
                }
                format!(
                    "{} ({})",
                    dialect.text(Substitution::Any),
                    select.render(dialect)?
                )
            }
            Operand::All(select) => format!(
                "{} ({})",
                dialect.text(Substitution::All),
                select.render(dialect)?
            ),
        };
        Ok(sql)
    }
}

// ==================== Conversions ====================

macro_rules! impl_from_operand {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(v: $ty) -> Self {
                    Operand::$variant(v)
                }
            }
        )*
    };
}

impl_from_operand! {
    String => String,
    i64 => Int,
    f32 => Float,
    f64 => Double,
    bool => Bool,
    NaiveDateTime => Date,
    Vec<String> => Strings,
    Vec<i64> => Ints,
    Vec<f32> => Floats,
    Vec<f64> => Doubles,
    Vec<bool> => Bools,
    Vec<NaiveDateTime> => Dates,
    Column => Column,
    ColumnExpr => Expr,
    Parameter => Param,
    Vec<Parameter> => Params,
}

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Operand::String(v.to_string())
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Int(v.into())
    }
}

impl From<Vec<&str>> for Operand {
    fn from(v: Vec<&str>) -> Self {
        Operand::Strings(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<i32>> for Operand {
    fn from(v: Vec<i32>) -> Self {
        Operand::Ints(v.into_iter().map(i64::from).collect())
    }
}

impl From<Clause> for Operand {
    fn from(v: Clause) -> Self {
        Operand::Clause(Box::new(v))
    }
}

impl From<Select> for Operand {
    fn from(v: Select) -> Self {
        Operand::subquery(v)
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => Operand::String(s),
            Value::Int(i) => Operand::Int(i),
            Value::Float(f) => Operand::Float(f),
            Value::Double(d) => Operand::Double(d),
            Value::Bool(b) => Operand::Bool(b),
            Value::Date(d) => Operand::Date(d),
        }
    }
}
