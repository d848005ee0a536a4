//! Dialect descriptors.
//!
//! A [`Dialect`] is read-only configuration supplied to every render call. It maps a
//! fixed set of [`Substitution`] keys to database-specific text and carries the
//! feature flags the statement builders consult.
//!
//! Dialects can be built in code (presets plus `with_*` overrides) or loaded from
//! TOML:
//!
//! ```toml
//! name = "custom"
//! add-numbers-to-parameters = true
//! date-format = "'%Y-%m-%d'"
//!
//! [substitutions]
//! numbered-parameter = "$"
//! boolean-true = "1"
//! ```

use crate::error::{SqlError, SqlResult};
use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Keys a dialect supplies text for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Substitution {
    BooleanTrue,
    BooleanFalse,
    IdentifierQuote,
    /// Positional marker (`?`, `$`, `@p`); a number is appended when the dialect
    /// numbers its parameters.
    NumberedParameter,
    /// Prefix for named markers (`:`, `@`). Has no default: dialects without it
    /// resolve named parameters through the numbering pass.
    NamedParameter,
    Any,
    All,
    Now,
    #[serde(rename = "ucase")]
    UCase,
    #[serde(rename = "lcase")]
    LCase,
    CharType,
    Int32Type,
    FloatType,
    DoubleType,
}

impl Substitution {
    /// ANSI text used when a dialect does not override the key.
    pub fn default_text(self) -> Option<&'static str> {
        match self {
            Substitution::BooleanTrue => Some("TRUE"),
            Substitution::BooleanFalse => Some("FALSE"),
            Substitution::IdentifierQuote => Some("\""),
            Substitution::NumberedParameter => Some("?"),
            Substitution::NamedParameter => None,
            Substitution::Any => Some("ANY"),
            Substitution::All => Some("ALL"),
            Substitution::Now => Some("CURRENT_TIMESTAMP"),
            Substitution::UCase => Some("UPPER"),
            Substitution::LCase => Some("LOWER"),
            Substitution::CharType => Some("CHAR"),
            Substitution::Int32Type => Some("INTEGER"),
            Substitution::FloatType => Some("REAL"),
            Substitution::DoubleType => Some("DOUBLE PRECISION"),
        }
    }
}

/// Database-specific rendering rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Dialect {
    /// Display name, used in logs only.
    pub name: String,
    /// Overrides for [`Substitution::default_text`].
    pub substitutions: BTreeMap<Substitution, String>,
    /// Append `1, 2, ...` to the numbered parameter marker.
    pub add_numbers_to_parameters: bool,
    /// Whether `= ANY (SELECT ...)` is accepted.
    pub any_on_subquery_supported: bool,
    /// Render `DROP INDEX name ON table` instead of `DROP INDEX name`.
    pub drop_index_requires_on_table_name: bool,
    /// DELETE must name WITH tables in a `USING` list to reference them.
    pub with_delete_requires_using: bool,
    /// UPDATE must name WITH tables in a `FROM` list to reference them.
    pub with_update_requires_from: bool,
    /// chrono `strftime` pattern whose output is the complete date literal.
    pub date_format: Option<String>,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::ansi()
    }
}

impl Dialect {
    /// Plain ANSI rendering: `?` markers, `"` quoting, every default substitution.
    pub fn ansi() -> Self {
        Self {
            name: "ansi".to_string(),
            substitutions: BTreeMap::new(),
            add_numbers_to_parameters: false,
            any_on_subquery_supported: true,
            drop_index_requires_on_table_name: false,
            with_delete_requires_using: false,
            with_update_requires_from: false,
            date_format: None,
        }
    }

    /// PostgreSQL: `$1, $2, ...` markers.
    pub fn postgres() -> Self {
        Self {
            name: "postgres".to_string(),
            add_numbers_to_parameters: true,
            with_delete_requires_using: true,
            with_update_requires_from: true,
            date_format: Some("'%Y-%m-%d %H:%M:%S'::timestamp".to_string()),
            ..Self::ansi()
        }
        .with_substitution(Substitution::NumberedParameter, "$")
        .with_substitution(Substitution::Now, "NOW()")
        .with_substitution(Substitution::CharType, "VARCHAR")
    }

    /// MySQL / MariaDB.
    pub fn mysql() -> Self {
        Self {
            name: "mysql".to_string(),
            drop_index_requires_on_table_name: true,
            ..Self::ansi()
        }
        .with_substitution(Substitution::IdentifierQuote, "`")
        .with_substitution(Substitution::Now, "NOW()")
        .with_substitution(Substitution::UCase, "UCASE")
        .with_substitution(Substitution::LCase, "LCASE")
        .with_substitution(Substitution::Int32Type, "SIGNED")
        .with_substitution(Substitution::FloatType, "FLOAT")
        .with_substitution(Substitution::DoubleType, "DOUBLE")
    }

    /// SQLite: no `ANY (SELECT ...)`, integer booleans, `:name` markers.
    pub fn sqlite() -> Self {
        Self {
            name: "sqlite".to_string(),
            any_on_subquery_supported: false,
            ..Self::ansi()
        }
        .with_substitution(Substitution::BooleanTrue, "1")
        .with_substitution(Substitution::BooleanFalse, "0")
        .with_substitution(Substitution::NamedParameter, ":")
        .with_substitution(Substitution::CharType, "TEXT")
        .with_substitution(Substitution::DoubleType, "REAL")
    }

    /// SQL Server: `@p1, @p2, ...` markers and `@name` named markers.
    pub fn sqlserver() -> Self {
        Self {
            name: "sqlserver".to_string(),
            add_numbers_to_parameters: true,
            drop_index_requires_on_table_name: true,
            ..Self::ansi()
        }
        .with_substitution(Substitution::NumberedParameter, "@p")
        .with_substitution(Substitution::NamedParameter, "@")
        .with_substitution(Substitution::BooleanTrue, "1")
        .with_substitution(Substitution::BooleanFalse, "0")
        .with_substitution(Substitution::Now, "GETDATE()")
        .with_substitution(Substitution::CharType, "NVARCHAR")
        .with_substitution(Substitution::Int32Type, "INT")
        .with_substitution(Substitution::DoubleType, "FLOAT")
    }

    /// Load a dialect from TOML. Missing keys fall back to [`Dialect::ansi`].
    pub fn from_toml_str(raw: &str) -> SqlResult<Self> {
        let dialect: Dialect = toml::from_str(raw)?;
        dialect.validate()?;
        Ok(dialect)
    }

    /// Check that the configuration is internally consistent.
    pub fn validate(&self) -> SqlResult<()> {
        if let Some(pattern) = &self.date_format {
            check_date_format(&self.name, pattern)?;
        }
        if self.get(Substitution::NumberedParameter).is_none_or(str::is_empty) {
            return Err(SqlError::Config(format!(
                "dialect '{}': numbered-parameter marker cannot be empty",
                self.name
            )));
        }
        Ok(())
    }

    // ==================== Overrides ====================

    /// Override the text for one substitution key.
    pub fn with_substitution(mut self, key: Substitution, text: impl Into<String>) -> Self {
        self.substitutions.insert(key, text.into());
        self
    }

    /// Set the positional marker and whether it gets numbered.
    pub fn with_numbered_parameters(mut self, marker: impl Into<String>, add_numbers: bool) -> Self {
        self.substitutions
            .insert(Substitution::NumberedParameter, marker.into());
        self.add_numbers_to_parameters = add_numbers;
        self
    }

    /// Set whether `ANY (SELECT ...)` is supported.
    pub fn with_any_on_subquery(mut self, supported: bool) -> Self {
        self.any_on_subquery_supported = supported;
        self
    }

    /// Set whether `DROP INDEX` names the owning table.
    pub fn with_drop_index_on_table(mut self, required: bool) -> Self {
        self.drop_index_requires_on_table_name = required;
        self
    }

    /// Set whether DELETE lists WITH tables under `USING`.
    pub fn with_delete_using(mut self, required: bool) -> Self {
        self.with_delete_requires_using = required;
        self
    }

    /// Set whether UPDATE lists WITH tables under `FROM`.
    pub fn with_update_from(mut self, required: bool) -> Self {
        self.with_update_requires_from = required;
        self
    }

    /// Set the date literal pattern. Fails if chrono cannot parse it.
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> SqlResult<Self> {
        let pattern = pattern.into();
        check_date_format(&self.name, &pattern)?;
        self.date_format = Some(pattern);
        Ok(self)
    }

    // ==================== Lookups ====================

    /// Text for `key`: the override if present, else the ANSI default.
    pub fn get(&self, key: Substitution) -> Option<&str> {
        self.substitutions
            .get(&key)
            .map(String::as_str)
            .or_else(|| key.default_text())
    }

    /// Like [`Dialect::get`], with an empty string for keys without any text.
    pub fn text(&self, key: Substitution) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Render a date through the configured pattern.
    ///
    /// Returns `None` when no pattern is configured or it fails to format.
    pub fn format_date(&self, value: &NaiveDateTime) -> Option<String> {
        let pattern = self.date_format.as_deref()?;
        let mut out = String::new();
        write!(out, "{}", value.format(pattern)).ok()?;
        Some(out)
    }
}

fn check_date_format(dialect: &str, pattern: &str) -> SqlResult<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(SqlError::Config(format!(
            "dialect '{dialect}': invalid date-format pattern '{pattern}'"
        )));
    }
    Ok(())
}
