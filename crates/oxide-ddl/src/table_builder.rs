//! CREATE TABLE builder.
//!
//! [`CreateTableBuilder`] accumulates primary key and regular columns for a
//! single table and renders them into the statements needed to create it on
//! the selected [`Dialect`]. Most dialects need a single statement; Oracle
//! has no auto-increment column type, so an auto-increment primary key there
//! also produces a sequence and a trigger feeding it.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::column::{ColumnDef, ColumnType};
use crate::dialect::Dialect;
use crate::error::{DdlError, Result};
use crate::identifier::{check_db_identifier, CONSTRAINT_NAME_MAX_SIZE, TABLE_NAME_MAX_SIZE};

/// Flags that can be attached to a primary key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnFlag {
    /// The database assigns increasing values on insert.
    AutoIncrement,
}

/// A primary key column together with its flags.
#[derive(Debug, Clone)]
struct PkColumn {
    def: ColumnDef,
    flags: BTreeSet<ColumnFlag>,
}

impl PkColumn {
    fn is_auto_increment(&self) -> bool {
        self.flags.contains(&ColumnFlag::AutoIncrement)
    }
}

/// Builder for the statements creating one table.
///
/// Primary key columns are rendered first, in insertion order, followed by
/// regular columns. When at least one primary key column was added, a
/// `CONSTRAINT <name> PRIMARY KEY (...)` clause closes the column list.
///
/// # Example
///
/// ```rust
/// use oxide_ddl::{CreateTableBuilder, ColumnFlag, Dialect, integer, varchar};
///
/// let statements = CreateTableBuilder::new(Dialect::PostgreSql, "projects")?
///     .add_pk_column(integer("id").not_null().build()?, &[ColumnFlag::AutoIncrement])?
///     .add_column(varchar("kee", 400).not_null().build()?)
///     .build()?;
///
/// assert_eq!(
///     statements,
///     vec![
///         "CREATE TABLE projects (id SERIAL NOT NULL,kee VARCHAR (400) NOT NULL, \
///          CONSTRAINT pk_projects PRIMARY KEY (id))"
///     ]
/// );
/// # Ok::<(), oxide_ddl::DdlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    dialect: Dialect,
    table_name: String,
    columns: Vec<ColumnDef>,
    pk_columns: Vec<PkColumn>,
    pk_constraint_name: Option<String>,
}

impl CreateTableBuilder {
    /// Creates a builder for `table_name` on `dialect`.
    ///
    /// # Errors
    ///
    /// Fails if `table_name` is empty, longer than
    /// [`TABLE_NAME_MAX_SIZE`] or not a valid identifier.
    pub fn new(dialect: Dialect, table_name: &str) -> Result<Self> {
        let table_name = check_db_identifier(table_name, "Table name", TABLE_NAME_MAX_SIZE)?;
        debug!(table = %table_name, dialect = %dialect, "New CREATE TABLE builder");
        Ok(Self {
            dialect,
            table_name,
            columns: Vec::new(),
            pk_columns: Vec::with_capacity(2),
            pk_constraint_name: None,
        })
    }

    /// Target dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Table name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Adds a regular column.
    #[must_use]
    pub fn add_column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Adds a primary key column with optional flags.
    ///
    /// # Errors
    ///
    /// With [`ColumnFlag::AutoIncrement`], fails with
    /// [`DdlError::InvalidAutoIncrement`] unless the column is named `id`, is
    /// an integer or big integer and is not nullable, and with
    /// [`DdlError::DuplicateAutoIncrement`] if another primary key column is
    /// already auto-increment.
    pub fn add_pk_column(mut self, column: ColumnDef, flags: &[ColumnFlag]) -> Result<Self> {
        let mut accepted = BTreeSet::new();
        for &flag in flags {
            match flag {
                ColumnFlag::AutoIncrement => {
                    self.check_auto_increment(&column, &accepted)?;
                }
            }
            trace!(column = column.name(), ?flag, "Flag accepted");
            accepted.insert(flag);
        }
        self.pk_columns.push(PkColumn {
            def: column,
            flags: accepted,
        });
        Ok(self)
    }

    /// Overrides the primary key constraint name, `pk_<table name>` by default.
    ///
    /// # Errors
    ///
    /// Fails if `name` is empty, longer than [`CONSTRAINT_NAME_MAX_SIZE`] or
    /// not a valid identifier.
    pub fn with_pk_constraint_name(mut self, name: &str) -> Result<Self> {
        self.pk_constraint_name = Some(check_db_identifier(
            name,
            "Primary key constraint name",
            CONSTRAINT_NAME_MAX_SIZE,
        )?);
        Ok(self)
    }

    /// Name of the primary key constraint as it will be rendered.
    #[must_use]
    pub fn pk_constraint_name(&self) -> String {
        self.pk_constraint_name.as_ref().map_or_else(
            || format!("pk_{}", self.table_name),
            |name| name.to_ascii_lowercase(),
        )
    }

    /// Renders the statements creating the table, to be run in order.
    ///
    /// The builder is left untouched, so calling this again returns the same
    /// statements.
    ///
    /// # Errors
    ///
    /// Fails with [`DdlError::EmptyTable`] if no column was added.
    pub fn build(&self) -> Result<Vec<String>> {
        if self.columns.is_empty() && self.pk_columns.is_empty() {
            return Err(DdlError::EmptyTable);
        }

        let mut statements = vec![self.create_table_statement()?];
        if self.dialect.emulates_auto_increment()
            && self.pk_columns.iter().any(PkColumn::is_auto_increment)
        {
            statements.push(self.create_sequence_statement());
            statements.push(self.create_trigger_statement());
        }

        debug!(
            table = %self.table_name,
            dialect = %self.dialect,
            count = statements.len(),
            "Rendered CREATE TABLE statements"
        );
        for sql in &statements {
            trace!(sql = %sql, "Statement");
        }
        Ok(statements)
    }

    fn check_auto_increment(
        &self,
        column: &ColumnDef,
        accepted: &BTreeSet<ColumnFlag>,
    ) -> Result<()> {
        if column.name() != "id" {
            return Err(DdlError::InvalidAutoIncrement("Auto increment column name must be id"));
        }
        if !column.column_type().is_auto_incrementable() {
            return Err(DdlError::InvalidAutoIncrement(
                "Auto increment column must either be BigInteger or Integer",
            ));
        }
        if column.is_nullable() {
            return Err(DdlError::InvalidAutoIncrement("Auto increment column can't be nullable"));
        }
        if accepted.contains(&ColumnFlag::AutoIncrement)
            || self.pk_columns.iter().any(PkColumn::is_auto_increment)
        {
            return Err(DdlError::DuplicateAutoIncrement);
        }
        Ok(())
    }

    fn create_table_statement(&self) -> Result<String> {
        let mut sql = format!("CREATE TABLE {} (", self.table_name);

        let pk_defs = self
            .pk_columns
            .iter()
            .map(|pk| self.column_definition(&pk.def, pk.is_auto_increment()));
        let defs = self
            .columns
            .iter()
            .map(|column| self.column_definition(column, false));
        let column_defs = pk_defs.chain(defs).collect::<Result<Vec<_>>>()?;
        sql.push_str(&column_defs.join(","));

        if !self.pk_columns.is_empty() {
            let pk_names: Vec<&str> = self.pk_columns.iter().map(|pk| pk.def.name()).collect();
            sql.push_str(", CONSTRAINT ");
            sql.push_str(&self.pk_constraint_name());
            sql.push_str(" PRIMARY KEY (");
            sql.push_str(&pk_names.join(","));
            sql.push(')');
        }

        sql.push(')');
        if let Some(options) = self.dialect.table_options() {
            sql.push_str(options);
        }
        Ok(sql)
    }

    fn column_definition(&self, column: &ColumnDef, auto_increment: bool) -> Result<String> {
        let mut sql = format!("{} {}", column.name(), self.data_type(column, auto_increment)?);
        sql.push_str(if column.is_nullable() { " NULL" } else { " NOT NULL" });
        if auto_increment {
            if let Some(clause) = self.dialect.auto_increment_clause() {
                sql.push_str(clause);
            }
        }
        Ok(sql)
    }

    fn data_type(&self, column: &ColumnDef, auto_increment: bool) -> Result<String> {
        if self.dialect != Dialect::PostgreSql || !auto_increment {
            return Ok(column.sql_type(self.dialect));
        }
        // PostgreSQL expresses auto-increment through the serial types.
        match column.column_type() {
            ColumnType::Integer => Ok("SERIAL".to_string()),
            ColumnType::BigInteger => Ok("BIGSERIAL".to_string()),
            other => Err(DdlError::IllegalState(format!(
                "Column with autoincrement is neither BigInteger nor Integer: {other:?}"
            ))),
        }
    }

    fn create_sequence_statement(&self) -> String {
        format!(
            "CREATE SEQUENCE {}_seq START WITH 1 INCREMENT BY 1",
            self.table_name
        )
    }

    fn create_trigger_statement(&self) -> String {
        let table = &self.table_name;
        format!(
            "CREATE OR REPLACE TRIGGER {table}_idt \
             BEFORE INSERT ON {table} \
             FOR EACH ROW \
             BEGIN \
             IF :new.id IS null THEN \
             SELECT {table}_seq.nextval INTO :new.id FROM dual; \
             END IF; \
             END;"
        )
    }
}
