// Copyright (c) 2025 Finlog Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finlog::{cli, commands::exporter, store};
use rusqlite::Connection;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE income(id INTEGER PRIMARY KEY AUTOINCREMENT, date TEXT NOT NULL, source TEXT NOT NULL, amount REAL NOT NULL);
        CREATE TABLE expenses(id INTEGER PRIMARY KEY AUTOINCREMENT, date TEXT NOT NULL, category TEXT NOT NULL, amount REAL NOT NULL, description TEXT);
        CREATE TABLE savings(id INTEGER PRIMARY KEY AUTOINCREMENT, date TEXT NOT NULL, amount REAL NOT NULL);
        "#,
    )
    .unwrap();
    conn
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn export_expenses_writes_csv() {
    let conn = setup();
    store::append_expense(&conn, d("2024-01-02"), "FOOD", dec("200"), Some("weekly run"))
        .unwrap();
    store::append_expense(&conn, d("2024-01-05"), "FUEL", dec("40"), None).unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("expenses.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "finlog", "export", "expenses", "--format", "csv", "--out", &out_str,
    ]);
    if let Some(("export", em)) = matches.subcommand() {
        exporter::handle(&conn, em).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let content = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next().unwrap(), "id,date,category,amount,description");
    assert!(content.contains("FOOD"));
    assert!(content.contains("weekly run"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn export_income_writes_pretty_json() {
    let conn = setup();
    store::append_income(&conn, d("2024-01-01"), "JOB", dec("1000")).unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("income.json");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "finlog", "export", "income", "--format", "json", "--out", &out_str,
    ]);
    if let Some(("export", em)) = matches.subcommand() {
        exporter::handle(&conn, em).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["source"], "JOB");
    assert_eq!(rows[0]["date"], "2024-01-01");
}
