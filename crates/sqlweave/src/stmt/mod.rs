//! Statement builders.
//!
//! Builders are immutable values. Attaching a clause returns a modified copy, so
//! two statements derived from the same base never see each other's changes.
//! Problems found while attaching (a second WHERE clause, say) are recorded on
//! the copy and reported by [`Statement::build`], the only fallible step.
//!
//! # Usage
//!
//! ```rust
//! use sqlweave::{Clause, Delete, Dialect, Statement, Table};
//!
//! let users = Table::new("Users");
//! let delete = Delete::new(users.clone()).filter(Clause::eq(users.column("id"), 5));
//! assert_eq!(
//!     delete.build(&Dialect::ansi()).unwrap(),
//!     "DELETE FROM Users WHERE id = 5"
//! );
//!
//! // A second WHERE clause is recorded and reported at build time.
//! let twice = delete.filter(Clause::eq(users.column("id"), 6));
//! assert!(twice.build(&Dialect::ansi()).is_err());
//! ```

mod delete;
mod index;
mod insert;
mod parts;
mod raw;
mod select;
mod traits;
mod update;
mod with;

pub use delete::Delete;
pub use index::{CreateIndex, DropIndex};
pub use insert::Insert;
pub use raw::Raw;
pub use select::Select;
pub use traits::{Statement, StatementKind};
pub use update::Update;
pub use with::WithTable;
