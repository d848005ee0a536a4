//! Parameter placeholders.
//!
//! Parameters are rendered in two phases. While the expression tree is rendered,
//! each [`Parameter`] emits a sentinel made of reserved control bytes. Once the
//! full statement text exists, [`renumber`] and [`resolve_named`] rewrite the
//! sentinels into the dialect's marker syntax, strictly left to right, so the
//! position numbers follow the order of appearance in the final string.
//!
//! # Reserved bytes
//!
//! The sentinels use the bytes `0x01`..=`0x06`. Dialect text, literals and
//! parameter names must never contain them; [`Parameter::render`] rejects names
//! that do. Because the alphabet is closed, the passes can use plain substring
//! search.

use crate::dialect::{Dialect, Substitution};
use crate::error::{SqlError, SqlResult};
use crate::literal::Value;
use std::collections::{BTreeMap, HashMap};

/// Sentinel for an unnamed (positional) parameter.
pub const PARAM_SENTINEL: &str = "\u{1}\u{2}\u{3}\u{4}";
/// Opens a named parameter sentinel; followed by the name and [`NAMED_END`].
pub const NAMED_START: &str = "\u{5}\u{6}";
/// Closes a named parameter sentinel.
pub const NAMED_END: &str = "\u{6}\u{5}";

fn is_reserved(ch: char) -> bool {
    ('\u{1}'..='\u{6}').contains(&ch)
}

/// Fail if `text` contains any reserved placeholder byte.
pub(crate) fn reject_reserved(text: &str, what: &str) -> SqlResult<()> {
    if text.chars().any(is_reserved) {
        return Err(SqlError::syntax(format!(
            "{what} {text:?} contains reserved placeholder bytes"
        )));
    }
    Ok(())
}

/// An unresolved parameter, optionally named.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: Option<String>,
}

impl Parameter {
    /// A positional parameter.
    pub fn unnamed() -> Self {
        Self { name: None }
    }

    /// A named parameter. The same name may appear several times in a statement.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Emit the sentinel (or the dialect's named marker) for this parameter.
    pub fn render(&self, dialect: &Dialect) -> SqlResult<String> {
        let Some(name) = &self.name else {
            return Ok(PARAM_SENTINEL.to_string());
        };
        if name.is_empty() {
            return Err(SqlError::syntax("parameter name cannot be empty"));
        }
        reject_reserved(name, "parameter name")?;
        match dialect.get(Substitution::NamedParameter) {
            Some(marker) => Ok(format!("{marker}{name}")),
            None => Ok(format!("{NAMED_START}{name}{NAMED_END}")),
        }
    }
}

/// Number of unnamed sentinels in `sql`.
pub fn count_unnamed(sql: &str) -> usize {
    sql.matches(PARAM_SENTINEL).count()
}

/// Whether `sql` still holds named sentinels.
pub fn has_named(sql: &str) -> bool {
    sql.contains(NAMED_START)
}

/// Rewrite unnamed sentinels into the dialect's positional markers.
///
/// With `add_numbers_to_parameters` the n-th sentinel becomes `marker + n`;
/// otherwise each becomes the bare marker. Text without sentinels is returned
/// unchanged.
pub fn renumber(sql: &str, dialect: &Dialect) -> String {
    if !sql.contains(PARAM_SENTINEL) {
        return sql.to_string();
    }
    let marker = dialect.text(Substitution::NumberedParameter);

    if !dialect.add_numbers_to_parameters {
        tracing::trace!(
            target: "sqlweave.param",
            replaced = count_unnamed(sql),
            "replaced positional sentinels"
        );
        return sql.replace(PARAM_SENTINEL, marker);
    }

    let mut out = String::with_capacity(sql.len());
    let mut rest = sql;
    let mut n = 0usize;
    while let Some(pos) = rest.find(PARAM_SENTINEL) {
        out.push_str(&rest[..pos]);
        n += 1;
        out.push_str(marker);
        out.push_str(&n.to_string());
        rest = &rest[pos + PARAM_SENTINEL.len()..];
    }
    out.push_str(rest);

    tracing::trace!(target: "sqlweave.param", replaced = n, "numbered positional sentinels");
    out
}

/// The result of [`resolve_named`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamedParameters {
    /// SQL with every named sentinel replaced.
    pub sql: String,
    /// For each distinct name, the 1-based positions it occupies, in order.
    pub positions: BTreeMap<String, Vec<usize>>,
    /// Total number of named occurrences.
    pub count: usize,
}

impl NamedParameters {
    /// Positions occupied by `name`.
    pub fn positions_of(&self, name: &str) -> Option<&[usize]> {
        self.positions.get(name).map(Vec::as_slice)
    }

    /// Expand values keyed by name into the positional argument list.
    ///
    /// A value bound to a name that occurs several times is repeated at each
    /// position. Fails if any name has no value.
    pub fn bind(&self, values: &HashMap<&str, Value>) -> SqlResult<Vec<Value>> {
        let mut slots: Vec<Option<Value>> = vec![None; self.count];
        for (name, positions) in &self.positions {
            let value = values.get(name.as_str()).ok_or_else(|| {
                SqlError::syntax(format!("no value bound for parameter '{name}'"))
            })?;
            for &p in positions {
                slots[p - 1] = Some(value.clone());
            }
        }
        slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.ok_or_else(|| SqlError::syntax(format!("no value for position {}", i + 1)))
            })
            .collect()
    }
}

/// Rewrite named sentinels into numbered markers and record where each name went.
///
/// Occurrences are numbered 1, 2, ... left to right; with
/// `add_numbers_to_parameters` the number is appended to the marker. Text without
/// named sentinels comes back unchanged with an empty position map.
pub fn resolve_named(sql: &str, dialect: &Dialect) -> SqlResult<NamedParameters> {
    if !has_named(sql) {
        return Ok(NamedParameters {
            sql: sql.to_string(),
            ..NamedParameters::default()
        });
    }
    let marker = dialect.text(Substitution::NumberedParameter);

    let mut out = String::with_capacity(sql.len());
    let mut positions: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    let mut rest = sql;
    let mut count = 0usize;

    while let Some(start) = rest.find(NAMED_START) {
        out.push_str(&rest[..start]);
        let after = &rest[start + NAMED_START.len()..];
        let end = after
            .find(NAMED_END)
            .ok_or_else(|| SqlError::syntax("unterminated named parameter sentinel"))?;
        let name = &after[..end];

        count += 1;
        positions.entry(name.to_string()).or_default().push(count);
        out.push_str(marker);
        if dialect.add_numbers_to_parameters {
            out.push_str(&count.to_string());
        }
        rest = &after[end + NAMED_END.len()..];
    }
    out.push_str(rest);

    tracing::trace!(
        target: "sqlweave.param",
        replaced = count,
        names = positions.len(),
        "resolved named sentinels"
    );
    Ok(NamedParameters {
        sql: out,
        positions,
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Dialect {
        Dialect::ansi().with_numbered_parameters("$", true)
    }

    fn sentinel_sql(names: &[Option<&str>]) -> String {
        let d = Dialect::ansi();
        let mut sql = String::from("SELECT * FROM t WHERE");
        for (i, name) in names.iter().enumerate() {
            let p = match name {
                Some(n) => Parameter::named(*n),
                None => Parameter::unnamed(),
            };
            if i > 0 {
                sql.push_str(" AND");
            }
            sql.push_str(&format!(" c{i} = {}", p.render(&d).unwrap()));
        }
        sql
    }

    #[test]
    fn renumber_without_sentinels_is_identity() {
        let sql = "SELECT 1 WHERE a = '$1' AND b = ?";
        assert_eq!(renumber(sql, &numbered()), sql);
        assert_eq!(renumber(sql, &Dialect::ansi()), sql);
    }

    #[test]
    fn renumber_numbers_left_to_right() {
        let sql = sentinel_sql(&[None, None, None]);
        assert_eq!(
            renumber(&sql, &numbered()),
            "SELECT * FROM t WHERE c0 = $1 AND c1 = $2 AND c2 = $3"
        );
    }

    #[test]
    fn renumber_bare_markers() {
        let sql = sentinel_sql(&[None, None]);
        assert_eq!(
            renumber(&sql, &Dialect::ansi()),
            "SELECT * FROM t WHERE c0 = ? AND c1 = ?"
        );
    }

    #[test]
    fn renumber_is_stable_across_calls() {
        let sql = sentinel_sql(&[None, None]);
        let d = numbered();
        assert_eq!(renumber(&sql, &d), renumber(&sql, &d));
    }

    #[test]
    fn named_positions_repeat() {
        let sql = sentinel_sql(&[Some("x"), Some("y"), Some("x")]);
        let resolved = resolve_named(&sql, &numbered()).unwrap();

        assert_eq!(resolved.sql, "SELECT * FROM t WHERE c0 = $1 AND c1 = $2 AND c2 = $3");
        assert_eq!(resolved.count, 3);
        assert_eq!(resolved.positions_of("x"), Some(&[1, 3][..]));
        assert_eq!(resolved.positions_of("y"), Some(&[2][..]));
    }

    #[test]
    fn named_without_numbers() {
        let sql = sentinel_sql(&[Some("a"), Some("b")]);
        let resolved = resolve_named(&sql, &Dialect::ansi()).unwrap();
        assert_eq!(resolved.sql, "SELECT * FROM t WHERE c0 = ? AND c1 = ?");
        assert_eq!(resolved.count, 2);
    }

    #[test]
    fn resolve_named_without_sentinels_is_identity() {
        let resolved = resolve_named("DELETE FROM t", &numbered()).unwrap();
        assert_eq!(resolved.sql, "DELETE FROM t");
        assert_eq!(resolved.count, 0);
        assert!(resolved.positions.is_empty());
    }

    #[test]
    fn unterminated_named_sentinel_fails() {
        let sql = format!("SELECT {NAMED_START}oops");
        assert!(resolve_named(&sql, &Dialect::ansi()).unwrap_err().is_syntax());
    }

    #[test]
    fn dialect_named_marker_skips_sentinels() {
        let p = Parameter::named("id");
        assert_eq!(p.render(&Dialect::sqlite()).unwrap(), ":id");
        assert_eq!(p.render(&Dialect::sqlserver()).unwrap(), "@id");
    }

    #[test]
    fn reserved_bytes_in_name_rejected() {
        let p = Parameter::named("bad\u{5}name");
        assert!(p.render(&Dialect::ansi()).is_err());
        assert!(Parameter::named("").render(&Dialect::ansi()).is_err());
    }

    #[test]
    fn bind_expands_repeated_names() {
        let sql = sentinel_sql(&[Some("x"), Some("y"), Some("x")]);
        let resolved = resolve_named(&sql, &numbered()).unwrap();

        let mut values = HashMap::new();
        values.insert("x", Value::Int(7));
        values.insert("y", Value::from("hi"));
        let bound = resolved.bind(&values).unwrap();
        assert_eq!(bound, vec![Value::Int(7), Value::from("hi"), Value::Int(7)]);
    }

    #[test]
    fn bind_reports_missing_name() {
        let sql = sentinel_sql(&[Some("x"), Some("y")]);
        let resolved = resolve_named(&sql, &numbered()).unwrap();

        let mut values = HashMap::new();
        values.insert("x", Value::Int(1));
        let err = resolved.bind(&values).unwrap_err();
        assert!(err.message().contains("'y'"));
    }
}
