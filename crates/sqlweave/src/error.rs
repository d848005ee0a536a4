//! Error types for sqlweave

use thiserror::Error;

/// Result type alias for sqlweave operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for statement compilation.
///
/// Rendering only ever produces [`SqlError::Syntax`]; the other variants belong to
/// the configuration and execution seams around the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// The expression tree cannot be rendered as valid SQL.
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// A dialect description could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reported by an [`Executor`](crate::exec::Executor) implementation.
    #[error("Execution error: {0}")]
    Execution(String),
}

impl SqlError {
    /// Create a syntax error
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax(message.into())
    }

    /// Create an execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    /// Check if this is a syntax error
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// The human-readable message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Syntax(m) | Self::Config(m) | Self::Execution(m) => m,
        }
    }
}

impl From<toml::de::Error> for SqlError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
