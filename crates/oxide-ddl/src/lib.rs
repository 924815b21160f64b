//! # oxide-ddl
//!
//! Dialect-aware `CREATE TABLE` generation for schema migrations.
//!
//! A table is declared once, against a dialect-neutral column catalog, and
//! rendered into the statements each backend needs:
//!
//! - **H2** and **`MySQL`** use an `AUTO_INCREMENT` clause (`MySQL` tables also
//!   get an `InnoDB` / `utf8_bin` suffix)
//! - **`PostgreSQL`** swaps auto-increment columns for `SERIAL` / `BIGSERIAL`
//! - **SQL Server** uses `IDENTITY (0,1)`
//! - **Oracle** has no auto-increment column, so a sequence and a trigger are
//!   created after the table
//!
//! ## Example
//!
//! ```rust
//! use oxide_ddl::prelude::*;
//!
//! let statements = CreateTableBuilder::new(Dialect::Oracle, "issues")?
//!     .add_pk_column(bigint("id").not_null().build()?, &[ColumnFlag::AutoIncrement])?
//!     .add_column(varchar("kee", 50).not_null().build()?)
//!     .add_column(clob("message").build()?)
//!     .build()?;
//!
//! assert_eq!(statements.len(), 3);
//! assert_eq!(
//!     statements[0],
//!     "CREATE TABLE issues (id NUMBER (38) NOT NULL,kee VARCHAR2 (50 CHAR) NOT NULL,\
//!      message CLOB NULL, CONSTRAINT pk_issues PRIMARY KEY (id))"
//! );
//! assert_eq!(statements[1], "CREATE SEQUENCE issues_seq START WITH 1 INCREMENT BY 1");
//! # Ok::<(), DdlError>(())
//! ```
//!
//! Statements carry no trailing delimiter; executing them, in order, is up to
//! the caller.

pub mod column;
pub mod definition;
pub mod dialect;
pub mod error;
pub mod identifier;
mod table_builder;

pub use column::{
    bigint, blob, boolean, clob, decimal, integer, tinyint, varchar, ColumnBuilder, ColumnDef,
    ColumnType,
};
pub use definition::{ColumnSpec, TableDefinition};
pub use dialect::Dialect;
pub use error::{DdlError, Result};
pub use table_builder::{ColumnFlag, CreateTableBuilder};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::column::{
        bigint, blob, boolean, clob, decimal, integer, tinyint, varchar, ColumnBuilder, ColumnDef,
        ColumnType,
    };
    pub use crate::definition::{ColumnSpec, TableDefinition};
    pub use crate::dialect::Dialect;
    pub use crate::error::{DdlError, Result};
    pub use crate::table_builder::{ColumnFlag, CreateTableBuilder};
}
