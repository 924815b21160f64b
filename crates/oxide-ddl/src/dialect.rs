//! Supported database dialects.
//!
//! A [`Dialect`] is chosen once per table and drives every type and clause
//! decision made while rendering. The set is closed: adding a backend means
//! adding a variant and fixing every non-exhaustive `match` the compiler
//! reports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DdlError;

/// Database backend targeted by the generated DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    /// H2 database.
    H2,
    /// `MySQL` (`InnoDB`).
    MySql,
    /// `PostgreSQL`.
    PostgreSql,
    /// Microsoft SQL Server.
    MsSql,
    /// Oracle.
    Oracle,
}

impl Dialect {
    /// All supported dialects.
    pub const ALL: [Self; 5] = [
        Self::H2,
        Self::MySql,
        Self::PostgreSql,
        Self::MsSql,
        Self::Oracle,
    ];

    /// Returns the stable identifier of the dialect.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::H2 => "H2",
            Self::MySql => "MYSQL",
            Self::PostgreSql => "POSTGRESQL",
            Self::MsSql => "MSSQL",
            Self::Oracle => "ORACLE",
        }
    }

    /// Clause appended after the NULL marker of an auto-increment column.
    ///
    /// `PostgreSQL` swaps the column type for a serial type instead, and Oracle
    /// has no native auto-increment at all (see
    /// [`emulates_auto_increment`](Self::emulates_auto_increment)).
    #[must_use]
    pub const fn auto_increment_clause(self) -> Option<&'static str> {
        match self {
            Self::PostgreSql | Self::Oracle => None,
            Self::MsSql => Some(" IDENTITY (0,1)"),
            Self::MySql => Some(" AUTO_INCREMENT"),
            Self::H2 => Some(" AUTO_INCREMENT (0,1)"),
        }
    }

    /// Table options appended after the closing parenthesis of CREATE TABLE.
    #[must_use]
    pub const fn table_options(self) -> Option<&'static str> {
        match self {
            Self::MySql => Some(" ENGINE=InnoDB CHARACTER SET utf8 COLLATE utf8_bin"),
            Self::H2 | Self::PostgreSql | Self::MsSql | Self::Oracle => None,
        }
    }

    /// Whether auto-increment needs a sequence and trigger next to the table.
    #[must_use]
    pub const fn emulates_auto_increment(self) -> bool {
        match self {
            Self::Oracle => true,
            Self::H2 | Self::MySql | Self::PostgreSql | Self::MsSql => false,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Dialect {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| DdlError::UnsupportedDialect(id.to_string()))
    }
}

impl TryFrom<String> for Dialect {
    type Error = DdlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.id().to_string()
    }
}
