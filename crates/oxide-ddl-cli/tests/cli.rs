//! End-to-end tests running the `oxide-ddl` binary.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const ISSUES: &str = r#"{
    "name": "issues",
    "primary_key": [
        { "name": "id", "type": "big_integer", "nullable": false, "auto_increment": true }
    ],
    "columns": [
        { "name": "kee", "type": "varchar", "limit": 50, "nullable": false }
    ]
}"#;

fn definition_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_oxide-ddl"))
        .env_remove("OXIDE_DDL_DIALECT")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn renders_postgresql() {
    let file = definition_file(ISSUES);
    let output = run(&[file.path().to_str().unwrap(), "--dialect", "postgresql"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "CREATE TABLE issues (id BIGSERIAL NOT NULL,kee VARCHAR (50) NOT NULL, \
         CONSTRAINT pk_issues PRIMARY KEY (id))\n"
    );
}

#[test]
fn renders_oracle_with_delimiter() {
    let file = definition_file(ISSUES);
    let output = run(&[
        file.path().to_str().unwrap(),
        "-d",
        "ORACLE",
        "--delimiter",
        "\n/",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("CREATE TABLE issues (id NUMBER (38) NOT NULL"));
    assert_eq!(lines[1], "/");
    assert_eq!(
        lines[2],
        "CREATE SEQUENCE issues_seq START WITH 1 INCREMENT BY 1"
    );
    assert!(lines[4].starts_with("CREATE OR REPLACE TRIGGER issues_idt"));
}

#[test]
fn dialect_from_environment() {
    let file = definition_file(ISSUES);
    let output = Command::new(env!("CARGO_BIN_EXE_oxide-ddl"))
        .env("OXIDE_DDL_DIALECT", "MSSQL")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains("id BIGINT NOT NULL IDENTITY (0,1)"),
        "{stdout}"
    );
}

#[test]
fn renders_all_dialects() {
    let file = definition_file(ISSUES);
    let output = run(&[file.path().to_str().unwrap(), "--all"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for header in ["-- H2", "-- MYSQL", "-- POSTGRESQL", "-- MSSQL", "-- ORACLE"] {
        assert!(stdout.lines().any(|l| l == header), "missing {header}");
    }
    assert_eq!(stdout.matches("CREATE TABLE").count(), 5);
}

#[test]
fn rejects_unknown_dialect() {
    let file = definition_file(ISSUES);
    let output = run(&[file.path().to_str().unwrap(), "--dialect", "sqlite"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unsupported dialect id sqlite"), "{stderr}");
}

#[test]
fn reports_invalid_table() {
    let file =
        definition_file(r#"{ "name": "Issues", "columns": [{ "name": "a", "type": "clob" }] }"#);
    let output = run(&[file.path().to_str().unwrap(), "--dialect", "h2"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Table name must be lower case"), "{stderr}");
}
