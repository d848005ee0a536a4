//! Conditional clauses for WHERE/HAVING.
//!
//! Every predicate, including AND/OR composition and NULL tests, is a single
//! [`Clause`] shape: an operator plus an optional left and right [`Operand`].
//! Operand presence is checked when the clause renders, not when it is built.
//!
//! # Example
//!
//! ```rust
//! use sqlweave::{Clause, Dialect, Table};
//!
//! let users = Table::new("users");
//! let clause = Clause::and(
//!     Clause::eq(users.column("status"), "active"),
//!     Clause::between(users.column("age"), vec![18, 65]),
//! );
//! assert_eq!(
//!     clause.render(&Dialect::ansi()).unwrap(),
//!     "(status = 'active') AND (age BETWEEN 18 AND 65)"
//! );
//! ```

use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::operand::Operand;
use crate::stmt::Select;
use std::fmt;

/// Clause operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Like,
    NotLike,
    In,
    NotIn,
    Between,
    NotBetween,
    IsNull,
    IsNotNull,
    Exists,
    NotExists,
    And,
    Or,
}

impl Condition {
    pub fn as_sql(self) -> &'static str {
        match self {
            Condition::Eq => "=",
            Condition::Ne => "<>",
            Condition::Lt => "<",
            Condition::Lte => "<=",
            Condition::Gt => ">",
            Condition::Gte => ">=",
            Condition::Like => "LIKE",
            Condition::NotLike => "NOT LIKE",
            Condition::In => "IN",
            Condition::NotIn => "NOT IN",
            Condition::Between => "BETWEEN",
            Condition::NotBetween => "NOT BETWEEN",
            Condition::IsNull => "IS NULL",
            Condition::IsNotNull => "IS NOT NULL",
            Condition::Exists => "EXISTS",
            Condition::NotExists => "NOT EXISTS",
            Condition::And => "AND",
            Condition::Or => "OR",
        }
    }

    /// Operators that take no left operand.
    pub fn is_prefix(self) -> bool {
        matches!(self, Condition::Exists | Condition::NotExists)
    }

    /// Operators that take no right operand.
    pub fn is_postfix(self) -> bool {
        matches!(self, Condition::IsNull | Condition::IsNotNull)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// `<left> <condition> <right>`, with either side optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    condition: Condition,
    left: Option<Operand>,
    right: Option<Operand>,
}

impl Clause {
    /// Create a clause from its parts. No shape checking happens here.
    pub fn new(condition: Condition, left: Option<Operand>, right: Option<Operand>) -> Self {
        Self {
            condition,
            left,
            right,
        }
    }

    /// `left <condition> right`
    pub fn binary(
        left: impl Into<Operand>,
        condition: Condition,
        right: impl Into<Operand>,
    ) -> Self {
        Self::new(condition, Some(left.into()), Some(right.into()))
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn left(&self) -> Option<&Operand> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&Operand> {
        self.right.as_ref()
    }

    // ==================== Comparisons ====================

    pub fn eq(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(left, Condition::Eq, right)
    }

    pub fn ne(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(left, Condition::Ne, right)
    }

    pub fn lt(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(left, Condition::Lt, right)
    }

    pub fn lte(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(left, Condition::Lte, right)
    }

    pub fn gt(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(left, Condition::Gt, right)
    }

    pub fn gte(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(left, Condition::Gte, right)
    }

    pub fn like(left: impl Into<Operand>, pattern: impl Into<Operand>) -> Self {
        Self::binary(left, Condition::Like, pattern)
    }

    pub fn not_like(left: impl Into<Operand>, pattern: impl Into<Operand>) -> Self {
        Self::binary(left, Condition::NotLike, pattern)
    }

    /// `left BETWEEN a AND b`; `range` must be a 2-element array operand.
    pub fn between(left: impl Into<Operand>, range: impl Into<Operand>) -> Self {
        Self::binary(left, Condition::Between, range)
    }

    pub fn not_between(left: impl Into<Operand>, range: impl Into<Operand>) -> Self {
        Self::binary(left, Condition::NotBetween, range)
    }

    /// `left IN (...)`; `values` must be an array operand or a sub-query.
    pub fn in_list(left: impl Into<Operand>, values: impl Into<Operand>) -> Self {
        Self::binary(left, Condition::In, values)
    }

    pub fn not_in(left: impl Into<Operand>, values: impl Into<Operand>) -> Self {
        Self::binary(left, Condition::NotIn, values)
    }

    // ==================== Unary ====================

    pub fn is_null(left: impl Into<Operand>) -> Self {
        Self::new(Condition::IsNull, Some(left.into()), None)
    }

    pub fn is_not_null(left: impl Into<Operand>) -> Self {
        Self::new(Condition::IsNotNull, Some(left.into()), None)
    }

    pub fn exists(select: Select) -> Self {
        Self::new(Condition::Exists, None, Some(Operand::subquery(select)))
    }

    pub fn not_exists(select: Select) -> Self {
        Self::new(Condition::NotExists, None, Some(Operand::subquery(select)))
    }

    // ==================== Composition ====================

    /// `(left) AND (right)`
    pub fn and(left: Clause, right: Clause) -> Self {
        Self::binary(left, Condition::And, right)
    }

    /// `(left) OR (right)`
    pub fn or(left: Clause, right: Clause) -> Self {
        Self::binary(left, Condition::Or, right)
    }

    /// Fold clauses with AND. Returns `None` for an empty list.
    pub fn all(clauses: impl IntoIterator<Item = Clause>) -> Option<Self> {
        clauses.into_iter().reduce(Clause::and)
    }

    /// Fold clauses with OR. Returns `None` for an empty list.
    pub fn any(clauses: impl IntoIterator<Item = Clause>) -> Option<Self> {
        clauses.into_iter().reduce(Clause::or)
    }

    // ==================== Render ====================

    /// Render the clause text.
    ///
    /// Operand shape is checked here. EXISTS / NOT EXISTS take only a right
    /// operand and IS NULL / IS NOT NULL only a left one; a clause carrying the
    /// operand its operator has no place for is a syntax error. An empty IN list
    /// renders `1=0` and an empty NOT IN list `1=1`, since `IN ()` is not valid
    /// SQL.
    pub fn render(&self, dialect: &Dialect) -> SqlResult<String> {
        let op = self.condition.as_sql();

        let Some(left) = &self.left else {
            if !self.condition.is_prefix() {
                return Err(SqlError::syntax(format!("missing left operand for {op}")));
            }
            let right = self
                .right
                .as_ref()
                .ok_or_else(|| SqlError::syntax(format!("missing right operand for {op}")))?;
            return Ok(format!("{op} {}", right.render(dialect)?));
        };

        let Some(right) = &self.right else {
            if !self.condition.is_postfix() {
                return Err(SqlError::syntax(format!("missing right operand for {op}")));
            }
            return Ok(format!("{} {op}", left.render(dialect)?));
        };

        if self.condition.is_postfix() {
            return Err(SqlError::syntax(format!("unexpected right operand for {op}")));
        }
        if self.condition.is_prefix() {
            return Err(SqlError::syntax(format!("unexpected left operand for {op}")));
        }

        let left_sql = left.render(dialect)?;
        match self.condition {
            Condition::Between | Condition::NotBetween => {
                match right.render_elements(dialect)? {
                    Some(elems) if elems.len() == 2 => {
                        Ok(format!("{left_sql} {op} {} AND {}", elems[0], elems[1]))
                    }
                    Some(elems) => Err(SqlError::syntax(format!(
                        "{op} requires a 2-element array, got {} elements",
                        elems.len()
                    ))),
                    None => Err(SqlError::syntax(format!(
                        "{op} requires a 2-element array operand"
                    ))),
                }
            }
            Condition::In | Condition::NotIn => match right {
                Operand::SubQuery(_) => Ok(format!("{left_sql} {op} {}", right.render(dialect)?)),
                _ => match right.render_elements(dialect)? {
                    // An empty list matches nothing (IN) or everything (NOT IN).
                    Some(elems) if elems.is_empty() => Ok(if self.condition == Condition::In {
                        "1=0".to_string()
                    } else {
                        "1=1".to_string()
                    }),
                    Some(elems) => Ok(format!("{left_sql} {op} ({})", elems.join(", "))),
                    None => Err(SqlError::syntax(format!(
                        "{op} requires an array or sub-query operand"
                    ))),
                },
            },
            _ => Ok(format!("{left_sql} {op} {}", right.render(dialect)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::Parameter;
    use crate::table::Table;

    fn d() -> Dialect {
        Dialect::ansi()
    }

    #[test]
    fn binary_renders_with_single_spaces() {
        let id = Table::new("users").column("id");
        assert_eq!(Clause::eq(id.clone(), 5).render(&d()).unwrap(), "id = 5");
        assert_eq!(Clause::ne(id.clone(), 5).render(&d()).unwrap(), "id <> 5");
        assert_eq!(Clause::gte(id, 2.5).render(&d()).unwrap(), "id >= 2.5");
    }

    #[test]
    fn between_requires_two_elements() {
        let age = Table::new("users").column("age");
        assert_eq!(
            Clause::between(age.clone(), vec![18, 65]).render(&d()).unwrap(),
            "age BETWEEN 18 AND 65"
        );
        assert_eq!(
            Clause::not_between(age.clone(), vec!["a", "m"]).render(&d()).unwrap(),
            "age NOT BETWEEN 'a' AND 'm'"
        );
        assert!(Clause::between(age.clone(), vec![1]).render(&d()).is_err());
        assert!(Clause::between(age.clone(), vec![1, 2, 3]).render(&d()).is_err());
        assert!(Clause::between(age, 1).render(&d()).is_err());
    }

    #[test]
    fn between_with_parameters() {
        let age = Table::new("users").column("age");
        let clause = Clause::between(age, vec![Parameter::unnamed(), Parameter::unnamed()]);
        let sql = clause.render(&d()).unwrap();
        assert_eq!(crate::param::count_unnamed(&sql), 2);
        assert_eq!(crate::param::renumber(&sql, &d()), "age BETWEEN ? AND ?");
    }

    #[test]
    fn in_list_shapes_with_empty_list_shortcut() {
        let role = Table::new("users").column("role");
        assert_eq!(
            Clause::in_list(role.clone(), vec!["admin", "owner"]).render(&d()).unwrap(),
            "role IN ('admin', 'owner')"
        );
        assert_eq!(
            Clause::not_in(role.clone(), vec![1, 2]).render(&d()).unwrap(),
            "role NOT IN (1, 2)"
        );
        assert_eq!(
            Clause::in_list(role.clone(), Vec::<i64>::new()).render(&d()).unwrap(),
            "1=0"
        );
        assert_eq!(
            Clause::not_in(role.clone(), Vec::<i64>::new()).render(&d()).unwrap(),
            "1=1"
        );
        assert!(Clause::in_list(role, "admin").render(&d()).unwrap_err().is_syntax());
    }

    #[test]
    fn in_subquery() {
        let users = Table::new("users");
        let admins = Table::new("admins");
        let sub = Select::new(admins.clone()).columns(vec![admins.column("user_id")]);
        assert_eq!(
            Clause::in_list(users.column("id"), sub).render(&d()).unwrap(),
            "id IN (SELECT user_id FROM admins)"
        );
    }

    #[test]
    fn is_null_takes_no_right_operand() {
        let deleted = Table::new("users").column("deleted_at");
        assert_eq!(
            Clause::is_null(deleted.clone()).render(&d()).unwrap(),
            "deleted_at IS NULL"
        );
        assert_eq!(
            Clause::is_not_null(deleted.clone()).render(&d()).unwrap(),
            "deleted_at IS NOT NULL"
        );
        let bad = Clause::new(Condition::IsNull, Some(deleted.into()), Some(1.into()));
        assert!(bad.render(&d()).unwrap_err().is_syntax());
    }

    #[test]
    fn exists_takes_no_left_operand() {
        let orders = Table::new("orders");
        let sub = Select::new(orders.clone()).filter(Clause::gt(orders.column("total"), 100));
        assert_eq!(
            Clause::exists(sub.clone()).render(&d()).unwrap(),
            "EXISTS (SELECT * FROM orders WHERE total > 100)"
        );
        assert_eq!(
            Clause::not_exists(sub.clone()).render(&d()).unwrap(),
            "NOT EXISTS (SELECT * FROM orders WHERE total > 100)"
        );

        let bad = Clause::new(
            Condition::Exists,
            Some(orders.column("id").into()),
            Some(Operand::subquery(sub)),
        );
        let err = bad.render(&d()).unwrap_err();
        assert!(err.message().contains("unexpected left operand"));
    }

    #[test]
    fn missing_operands_are_reported() {
        let err = Clause::new(Condition::Eq, None, Some(1.into()))
            .render(&d())
            .unwrap_err();
        assert!(err.message().contains("missing left operand"));

        let err = Clause::new(Condition::Eq, Some(1.into()), None)
            .render(&d())
            .unwrap_err();
        assert!(err.message().contains("missing right operand"));

        let err = Clause::new(Condition::Exists, None, None).render(&d()).unwrap_err();
        assert!(err.message().contains("missing right operand"));
    }

    #[test]
    fn nested_clauses_are_parenthesized() {
        let users = Table::new("users");
        let clause = Clause::or(
            Clause::eq(users.column("role"), "admin"),
            Clause::and(
                Clause::eq(users.column("role"), "user"),
                Clause::gt(users.column("reputation"), 100),
            ),
        );
        assert_eq!(
            clause.render(&d()).unwrap(),
            "(role = 'admin') OR ((role = 'user') AND (reputation > 100))"
        );
    }

    #[test]
    fn fold_all_and_any() {
        let t = Table::new("t");
        assert!(Clause::all(Vec::new()).is_none());
        let single = Clause::all(vec![Clause::eq(t.column("a"), 1)]).unwrap();
        assert_eq!(single.render(&d()).unwrap(), "a = 1");

        let folded = Clause::any(vec![
            Clause::eq(t.column("a"), 1),
            Clause::eq(t.column("b"), 2),
            Clause::eq(t.column("c"), 3),
        ])
        .unwrap();
        assert_eq!(folded.render(&d()).unwrap(), "((a = 1) OR (b = 2)) OR (c = 3)");
    }

    #[test]
    fn errors_propagate_from_nested_operands() {
        let t = Table::new("t");
        let clause = Clause::and(
            Clause::eq(t.column("a"), 1),
            Clause::between(t.column("b"), vec![1]),
        );
        assert!(clause.render(&d()).unwrap_err().is_syntax());
    }
}
