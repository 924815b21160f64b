//! Serializable table definitions.
//!
//! A [`TableDefinition`] is the document form of a [`CreateTableBuilder`]
//! call chain. Rendering replays the document through the builder, so the
//! same validation applies whether a table is declared in code or in JSON.
//! Unknown keys are rejected rather than ignored.

use serde::{Deserialize, Serialize};

use crate::column::{ColumnDef, ColumnType, DEFAULT_DECIMAL_PRECISION, DEFAULT_DECIMAL_SCALE};
use crate::dialect::Dialect;
use crate::error::{DdlError, Result};
use crate::table_builder::{ColumnFlag, CreateTableBuilder};

/// A column entry of a [`TableDefinition`].
///
/// On the wire the type is spelled as a `type` key next to its parameters:
/// `{ "name": "kee", "type": "varchar", "limit": 400, "nullable": false }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawColumnSpec", into = "RawColumnSpec")]
pub struct ColumnSpec {
    /// Column name.
    pub name: String,
    /// Column type.
    pub column_type: ColumnType,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Auto-increment flag. Only primary key columns may set it.
    pub auto_increment: bool,
}

impl ColumnSpec {
    fn to_column_def(&self) -> Result<ColumnDef> {
        ColumnDef::new(&self.name, self.column_type, self.nullable)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ColumnKind {
    Integer,
    #[serde(alias = "bigint")]
    BigInteger,
    Boolean,
    Varchar,
    Decimal,
    Clob,
    Blob,
    #[serde(alias = "tinyint")]
    TinyInt,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawColumnSpec {
    name: String,
    #[serde(rename = "type")]
    kind: ColumnKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    precision: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scale: Option<u8>,
    #[serde(default = "default_nullable")]
    nullable: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    auto_increment: bool,
}

const fn default_nullable() -> bool {
    true
}

impl TryFrom<RawColumnSpec> for ColumnSpec {
    type Error = String;

    fn try_from(raw: RawColumnSpec) -> std::result::Result<Self, Self::Error> {
        let name = raw.name;
        if raw.limit.is_some() && !matches!(raw.kind, ColumnKind::Varchar) {
            return Err(format!("column '{name}': 'limit' only applies to varchar columns"));
        }
        if (raw.precision.is_some() || raw.scale.is_some())
            && !matches!(raw.kind, ColumnKind::Decimal)
        {
            return Err(format!(
                "column '{name}': 'precision' and 'scale' only apply to decimal columns"
            ));
        }
        let column_type = match raw.kind {
            ColumnKind::Integer => ColumnType::Integer,
            ColumnKind::BigInteger => ColumnType::BigInteger,
            ColumnKind::Boolean => ColumnType::Boolean,
            ColumnKind::Varchar => ColumnType::Varchar {
                limit: raw
                    .limit
                    .ok_or_else(|| format!("column '{name}': varchar columns need a 'limit'"))?,
            },
            ColumnKind::Decimal => ColumnType::Decimal {
                precision: raw.precision.unwrap_or(DEFAULT_DECIMAL_PRECISION),
                scale: raw.scale.unwrap_or(DEFAULT_DECIMAL_SCALE),
            },
            ColumnKind::Clob => ColumnType::Clob,
            ColumnKind::Blob => ColumnType::Blob,
            ColumnKind::TinyInt => ColumnType::TinyInt,
        };
        Ok(Self {
            name,
            column_type,
            nullable: raw.nullable,
            auto_increment: raw.auto_increment,
        })
    }
}

impl From<ColumnSpec> for RawColumnSpec {
    fn from(spec: ColumnSpec) -> Self {
        let (kind, limit, precision, scale) = match spec.column_type {
            ColumnType::Integer => (ColumnKind::Integer, None, None, None),
            ColumnType::BigInteger => (ColumnKind::BigInteger, None, None, None),
            ColumnType::Boolean => (ColumnKind::Boolean, None, None, None),
            ColumnType::Varchar { limit } => (ColumnKind::Varchar, Some(limit), None, None),
            ColumnType::Decimal { precision, scale } => {
                (ColumnKind::Decimal, None, Some(precision), Some(scale))
            }
            ColumnType::Clob => (ColumnKind::Clob, None, None, None),
            ColumnType::Blob => (ColumnKind::Blob, None, None, None),
            ColumnType::TinyInt => (ColumnKind::TinyInt, None, None, None),
        };
        Self {
            name: spec.name,
            kind,
            limit,
            precision,
            scale,
            nullable: spec.nullable,
            auto_increment: spec.auto_increment,
        }
    }
}

/// Document describing one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDefinition {
    /// Table name.
    pub name: String,
    /// Primary key constraint name; `pk_<name>` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pk_constraint_name: Option<String>,
    /// Primary key columns, in key order.
    #[serde(default)]
    pub primary_key: Vec<ColumnSpec>,
    /// Regular columns.
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

impl TableDefinition {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::Serialization`] if the document is malformed or
    /// carries unknown keys.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the definition to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replays the definition into a builder for `dialect`.
    ///
    /// # Errors
    ///
    /// Fails with [`DdlError::InvalidAutoIncrement`] if a regular column sets
    /// `auto_increment`, and propagates any validation error raised by the
    /// builder or the column catalog.
    pub fn to_builder(&self, dialect: Dialect) -> Result<CreateTableBuilder> {
        let mut builder = CreateTableBuilder::new(dialect, &self.name)?;
        for spec in &self.primary_key {
            let flags: &[ColumnFlag] = if spec.auto_increment {
                &[ColumnFlag::AutoIncrement]
            } else {
                &[]
            };
            builder = builder.add_pk_column(spec.to_column_def()?, flags)?;
        }
        for spec in &self.columns {
            if spec.auto_increment {
                return Err(DdlError::InvalidAutoIncrement(
                    "Auto increment is only supported on primary key columns",
                ));
            }
            builder = builder.add_column(spec.to_column_def()?);
        }
        if let Some(name) = &self.pk_constraint_name {
            builder = builder.with_pk_constraint_name(name)?;
        }
        Ok(builder)
    }

    /// Renders the statements creating this table on `dialect`.
    ///
    /// # Errors
    ///
    /// See [`to_builder`](Self::to_builder) and [`CreateTableBuilder::build`].
    pub fn render(&self, dialect: Dialect) -> Result<Vec<String>> {
        self.to_builder(dialect)?.build()
    }
}
