//! # sqlweave
//!
//! A dialect-aware SQL statement compiler.
//!
//! ## Features
//!
//! - **Expression trees**: predicates are [`Clause`] values over a closed set of [`Operand`]s
//! - **Dialects as data**: booleans, quoting, markers and type names come from a [`Dialect`]
//! - **Immutable builders**: attaching a clause returns a new statement
//! - **Deferred errors**: problems are collected and reported once, by `build()`
//! - **One numbering pass**: placeholders are numbered left to right over the final text
//! - **No execution**: an [`Executor`] is the seam where a driver plugs in
//!
//! ## Usage
//!
//! ```rust
//! use sqlweave::{Clause, Dialect, Parameter, Select, Statement, Table, Update};
//!
//! let users = Table::new("users");
//!
//! // SELECT
//! let select = Select::new(users.clone())
//!     .columns(vec![users.column("id"), users.column("name")])
//!     .filter(Clause::and(
//!         Clause::eq(users.column("status"), "active"),
//!         Clause::gt(users.column("age"), Parameter::unnamed()),
//!     ))
//!     .suffix("ORDER BY name");
//! assert_eq!(
//!     select.build(&Dialect::postgres()).unwrap(),
//!     "SELECT id, name FROM users WHERE (status = 'active') AND (age > $1) ORDER BY name"
//! );
//!
//! // UPDATE
//! let update = Update::new(users.clone(), vec![(users.column("status"), Parameter::unnamed())])
//!     .unwrap()
//!     .filter(Clause::eq(users.column("id"), Parameter::unnamed()));
//! assert_eq!(
//!     update.build(&Dialect::ansi()).unwrap(),
//!     "UPDATE users SET status = ? WHERE id = ?"
//! );
//! ```

pub mod clause;
pub mod dialect;
pub mod error;
pub mod exec;
pub mod expr;
pub mod literal;
pub mod operand;
pub mod param;
pub mod stmt;
pub mod table;
pub mod validate;

pub use clause::{Clause, Condition};
pub use dialect::{Dialect, Substitution};
pub use error::{SqlError, SqlResult};
pub use exec::{Executor, Outcome};
pub use expr::ColumnExpr;
pub use literal::{Value, pack_identifier, pack_literal, pack_literal_for};
pub use operand::Operand;
pub use param::{NamedParameters, Parameter, renumber, resolve_named};
pub use table::{Column, ColumnType, Table};
pub use validate::{ForeignKey, Index, validate_foreign_key};

pub use stmt::{
    CreateIndex, Delete, DropIndex, Insert, Raw, Select, Statement, StatementKind, Update,
    WithTable,
};
