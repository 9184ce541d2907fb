// Copyright (c) 2025 Finlog Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finlog::error::{Error, ValidationError};
use finlog::store;
use rusqlite::Connection;
use rust_decimal::Decimal;

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
fn empty_tables_fetch_empty() {
    let conn = setup();
    assert!(store::fetch_income(&conn).unwrap().is_empty());
    assert!(store::fetch_expenses(&conn).unwrap().is_empty());
    assert!(store::fetch_savings(&conn).unwrap().is_empty());
}

#[test]
fn append_and_fetch_roundtrip() {
    let conn = setup();
    store::append_income(&conn, d("2024-01-01"), "job", dec("1000.50")).unwrap();
    store::append_expense(
        &conn,
        d("2024-01-02"),
        "food",
        dec("200"),
        Some("groceries"),
    )
    .unwrap();
    store::append_savings(&conn, d("2024-01-03"), dec("75.25")).unwrap();

    let income = store::fetch_income(&conn).unwrap();
    assert_eq!(income.len(), 1);
    assert_eq!(income[0].date, d("2024-01-01"));
    assert_eq!(income[0].source, "JOB");
    assert_eq!(income[0].amount, dec("1000.50"));

    let expenses = store::fetch_expenses(&conn).unwrap();
    assert_eq!(expenses[0].category, "FOOD");
    assert_eq!(expenses[0].amount, dec("200"));
    assert_eq!(expenses[0].description.as_deref(), Some("groceries"));

    let savings = store::fetch_savings(&conn).unwrap();
    assert_eq!(savings[0].amount, dec("75.25"));
}

#[test]
fn ids_are_assigned_in_insert_order() {
    let conn = setup();
    let a = store::append_savings(&conn, d("2024-01-01"), dec("10")).unwrap();
    let b = store::append_savings(&conn, d("2024-01-02"), dec("20")).unwrap();
    assert_eq!(a, 1);
    assert_eq!(b, 2);
}

#[test]
fn negative_amount_is_rejected_and_not_stored() {
    let conn = setup();
    let err = store::append_expense(&conn, d("2024-01-01"), "FOOD", dec("-5"), None).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::NegativeAmount(_))
    ));
    assert!(store::fetch_expenses(&conn).unwrap().is_empty());
}

#[test]
fn zero_amount_is_allowed() {
    let conn = setup();
    store::append_savings(&conn, d("2024-01-01"), Decimal::ZERO).unwrap();
    assert_eq!(store::fetch_savings(&conn).unwrap().len(), 1);
}

#[test]
fn blank_required_text_is_rejected() {
    let conn = setup();
    let err = store::append_income(&conn, d("2024-01-01"), "   ", dec("10")).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::EmptyField("source"))
    ));
    let err = store::append_expense(&conn, d("2024-01-01"), "", dec("10"), None).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::EmptyField("category"))
    ));
    assert!(store::fetch_income(&conn).unwrap().is_empty());
    assert!(store::fetch_expenses(&conn).unwrap().is_empty());
}

#[test]
fn text_fields_are_upper_cased_on_insert() {
    let conn = setup();
    store::append_expense(&conn, d("2024-01-01"), "  groceries ", dec("12"), None).unwrap();
    let rows = store::fetch_expenses(&conn).unwrap();
    assert_eq!(rows[0].category, "GROCERIES");
}

#[test]
fn missing_description_stays_none() {
    let conn = setup();
    store::append_expense(&conn, d("2024-01-01"), "FOOD", dec("12"), None).unwrap();
    let rows = store::fetch_expenses(&conn).unwrap();
    assert_eq!(rows[0].description, None);
}
