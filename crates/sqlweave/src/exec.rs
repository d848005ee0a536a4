//! The execution contract consumed by built statements.
//!
//! This crate only produces SQL text. An [`Executor`] is whatever runs it; no
//! implementation ships here.

use crate::error::SqlResult;
use crate::literal::Value;

/// What running a statement produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Result rows, each an ordered list of column values.
    Rows(Vec<Vec<Value>>),
    /// A single value (e.g. `COUNT(*)` or an affected-row count).
    Scalar(Value),
    /// The statement succeeded without producing data.
    NoData,
}

impl Outcome {
    pub fn rows(&self) -> Option<&[Vec<Value>]> {
        match self {
            Outcome::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn scalar(&self) -> Option<&Value> {
        match self {
            Outcome::Scalar(v) => Some(v),
            _ => None,
        }
    }
}

/// Runs rendered SQL with an ordered list of parameter values.
///
/// Implementations report driver failures as
/// [`SqlError::Execution`](crate::SqlError::Execution).
pub trait Executor: Sync {
    fn execute(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = SqlResult<Outcome>> + Send;
}
