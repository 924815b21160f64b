//! Column definitions.
//!
//! A [`ColumnDef`] pairs a validated column name and a nullability marker
//! with a [`ColumnType`], which knows how to spell itself for each
//! [`Dialect`].

use crate::dialect::Dialect;
use crate::error::Result;
use crate::identifier::validate_column_name;

/// Default precision of a DECIMAL column.
pub const DEFAULT_DECIMAL_PRECISION: u8 = 38;

/// Default scale of a DECIMAL column.
pub const DEFAULT_DECIMAL_SCALE: u8 = 20;

/// Column type catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInteger,
    /// Boolean.
    Boolean,
    /// Variable-length character string.
    Varchar {
        /// Maximum number of characters.
        limit: u32,
    },
    /// Fixed-point number.
    Decimal {
        /// Total number of digits.
        precision: u8,
        /// Digits after the decimal point.
        scale: u8,
    },
    /// Character large object.
    Clob,
    /// Binary large object.
    Blob,
    /// Small integer, at least 0..=99.
    TinyInt,
}

impl ColumnType {
    /// Returns the SQL type of this column for `dialect`.
    #[must_use]
    pub fn sql_type(&self, dialect: Dialect) -> String {
        match *self {
            Self::Integer => match dialect {
                Dialect::MsSql => "INT".to_string(),
                Dialect::H2 | Dialect::MySql | Dialect::PostgreSql | Dialect::Oracle => {
                    "INTEGER".to_string()
                }
            },
            Self::BigInteger => match dialect {
                Dialect::Oracle => "NUMBER (38)".to_string(),
                Dialect::H2 | Dialect::MySql | Dialect::PostgreSql | Dialect::MsSql => {
                    "BIGINT".to_string()
                }
            },
            Self::Boolean => "BOOLEAN".to_string(),
            Self::Varchar { limit } => match dialect {
                Dialect::MsSql => format!("NVARCHAR ({limit})"),
                Dialect::Oracle => format!("VARCHAR2 ({limit} CHAR)"),
                Dialect::H2 | Dialect::MySql | Dialect::PostgreSql => format!("VARCHAR ({limit})"),
            },
            Self::Decimal { precision, scale } => match dialect {
                Dialect::PostgreSql | Dialect::Oracle => format!("NUMERIC ({precision},{scale})"),
                Dialect::H2 | Dialect::MySql | Dialect::MsSql => {
                    format!("DECIMAL ({precision},{scale})")
                }
            },
            Self::Clob => (match dialect {
                Dialect::H2 | Dialect::Oracle => "CLOB",
                Dialect::MySql => "LONGTEXT",
                Dialect::PostgreSql => "TEXT",
                Dialect::MsSql => "NVARCHAR (MAX)",
            })
            .to_string(),
            Self::Blob => (match dialect {
                Dialect::H2 | Dialect::Oracle => "BLOB",
                Dialect::MySql => "LONGBLOB",
                Dialect::PostgreSql => "BYTEA",
                Dialect::MsSql => "VARBINARY(MAX)",
            })
            .to_string(),
            Self::TinyInt => (match dialect {
                Dialect::H2 | Dialect::MsSql => "TINYINT",
                Dialect::MySql => "TINYINT(2)",
                Dialect::PostgreSql => "SMALLINT",
                Dialect::Oracle => "NUMBER(3)",
            })
            .to_string(),
        }
    }

    /// Whether a column of this type may carry the auto-increment flag.
    #[must_use]
    pub const fn is_auto_incrementable(&self) -> bool {
        matches!(self, Self::Integer | Self::BigInteger)
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    name: String,
    nullable: bool,
    column_type: ColumnType,
}

impl ColumnDef {
    /// Creates a column definition, validating its name.
    ///
    /// # Errors
    ///
    /// Fails if `name` is not a valid column name.
    pub fn new(name: &str, column_type: ColumnType, nullable: bool) -> Result<Self> {
        Ok(Self {
            name: validate_column_name(name)?,
            nullable,
            column_type,
        })
    }

    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the column accepts NULL.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Column type.
    #[must_use]
    pub const fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// SQL type of this column for `dialect`.
    #[must_use]
    pub fn sql_type(&self, dialect: Dialect) -> String {
        self.column_type.sql_type(dialect)
    }
}

/// Fluent builder for [`ColumnDef`]. Columns are nullable unless
/// [`not_null`](Self::not_null) is called.
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    name: String,
    column_type: ColumnType,
    nullable: bool,
}

impl ColumnBuilder {
    /// Creates a new column builder with name and type.
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
        }
    }

    /// Marks the column as NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Marks the column as nullable (default).
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Builds the column definition.
    ///
    /// # Errors
    ///
    /// Fails if the column name is not a valid identifier.
    pub fn build(self) -> Result<ColumnDef> {
        ColumnDef::new(&self.name, self.column_type, self.nullable)
    }
}

// =============================================================================
// Shorthand Functions
// =============================================================================

/// Creates an INTEGER column builder.
#[must_use]
pub fn integer(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::Integer)
}

/// Creates a BIGINT column builder.
#[must_use]
pub fn bigint(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::BigInteger)
}

/// Creates a BOOLEAN column builder.
#[must_use]
pub fn boolean(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::Boolean)
}

/// Creates a VARCHAR column builder.
#[must_use]
pub fn varchar(name: impl Into<String>, limit: u32) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::Varchar { limit })
}

/// Creates a DECIMAL column builder.
#[must_use]
pub fn decimal(name: impl Into<String>, precision: u8, scale: u8) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::Decimal { precision, scale })
}

/// Creates a CLOB column builder.
#[must_use]
pub fn clob(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::Clob)
}

/// Creates a BLOB column builder.
#[must_use]
pub fn blob(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::Blob)
}

/// Creates a TINYINT column builder.
#[must_use]
pub fn tinyint(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, ColumnType::TinyInt)
}
