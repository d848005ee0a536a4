//! Literal and identifier packing.
//!
//! String and date literals are single-quoted **verbatim**: embedded quote
//! characters are not escaped. Callers that render untrusted text must bind it
//! through a [`Parameter`](crate::param::Parameter) instead. Raw-SQL suffixes rely
//! on this passthrough, so it is kept as-is.
//!
//! The packers here do not inspect their input. Text containing the reserved
//! placeholder bytes `0x01`..=`0x06` would be rewritten by the numbering pass, so
//! string operands are checked for them when a clause renders and rejected with a
//! syntax error.

use crate::dialect::{Dialect, Substitution};
use chrono::NaiveDateTime;

/// A scalar SQL value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Date(NaiveDateTime),
}

/// Render a value as a SQL literal without consulting a dialect.
///
/// Booleans become `TRUE`/`FALSE` and dates a quoted `YYYY-MM-DD HH:MM:SS` string.
pub fn pack_literal(value: &Value) -> String {
    match value {
        Value::String(s) => quote(s),
        Value::Int(v) => v.to_string(),
        Value::Float(v) => v.to_string(),
        Value::Double(v) => v.to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Date(d) => quote(&d.to_string()),
    }
}

/// Render a value as a SQL literal for `dialect`.
pub fn pack_literal_for(value: &Value, dialect: &Dialect) -> String {
    match value {
        Value::Bool(true) => dialect.text(Substitution::BooleanTrue).to_string(),
        Value::Bool(false) => dialect.text(Substitution::BooleanFalse).to_string(),
        Value::Date(d) => dialect.format_date(d).unwrap_or_else(|| quote(&d.to_string())),
        other => pack_literal(other),
    }
}

/// Quote `name` with the dialect's identifier quote if it contains a space and is
/// not already quoted.
///
/// This is a narrow heuristic, not an identifier-safety check.
pub fn pack_identifier(name: &str, dialect: &Dialect) -> String {
    let q = dialect.text(Substitution::IdentifierQuote);
    if q.is_empty() || !name.contains(' ') {
        return name.to_string();
    }
    let already_quoted = name.len() >= 2 * q.len() && name.starts_with(q) && name.ends_with(q);
    if already_quoted {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 2 * q.len());
    out.push_str(q);
    out.push_str(name);
    out.push_str(q);
    out
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    out.push_str(s);
    out.push('\'');
    out
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Date(v)
    }
}
