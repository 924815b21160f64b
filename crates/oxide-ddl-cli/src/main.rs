//! oxide-ddl CLI
//!
//! Renders a JSON table definition into CREATE TABLE statements.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use oxide_ddl::prelude::*;

/// Render table definitions to CREATE TABLE statements.
#[derive(Parser)]
#[command(name = "oxide-ddl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON table definition.
    definition: PathBuf,

    /// Target dialect (H2, MYSQL, POSTGRESQL, MSSQL, ORACLE).
    #[arg(short, long, env = "OXIDE_DDL_DIALECT", required_unless_present = "all")]
    dialect: Option<Dialect>,

    /// Render for every supported dialect.
    #[arg(long)]
    all: bool,

    /// Text appended after each statement.
    #[arg(long, default_value = "")]
    delimiter: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let json = std::fs::read_to_string(&cli.definition)
        .with_context(|| format!("failed to read {}", cli.definition.display()))?;
    let definition = TableDefinition::from_json(&json)
        .with_context(|| format!("invalid table definition {}", cli.definition.display()))?;
    debug!(table = %definition.name, "Loaded table definition");

    let dialects: Vec<Dialect> = match (cli.all, cli.dialect) {
        (true, _) => Dialect::ALL.to_vec(),
        (false, Some(dialect)) => vec![dialect],
        (false, None) => anyhow::bail!("no dialect selected, use --dialect or --all"),
    };

    for (i, dialect) in dialects.iter().enumerate() {
        let statements = definition
            .render(*dialect)
            .with_context(|| format!("cannot render table '{}' for {dialect}", definition.name))?;
        if cli.all {
            if i > 0 {
                println!();
            }
            println!("-- {dialect}");
        }
        for sql in &statements {
            println!("{sql}{}", cli.delimiter);
        }
        info!(
            "Rendered {} statement(s) for {} on {}",
            statements.len(),
            definition.name,
            dialect
        );
    }

    Ok(())
}
