// Copyright (c) 2025 Finlog Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finlog::{db, store};
use rust_decimal::Decimal;
use tempfile::tempdir;

#[test]
fn init_is_idempotent_and_preserves_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("finlog.sqlite");

    let conn = db::open_or_init(&path).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    store::append_income(&conn, date, "JOB", Decimal::new(100050, 2)).unwrap();
    drop(conn);

    // Re-opening an existing database must not disturb its contents.
    let conn = db::open_or_init(&path).unwrap();
    let income = store::fetch_income(&conn).unwrap();
    assert_eq!(income.len(), 1);
    assert_eq!(income[0].amount, Decimal::new(100050, 2));
}

#[test]
fn fresh_database_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fresh.sqlite");
    let conn = db::open_or_init(&path).unwrap();
    assert!(store::fetch_income(&conn).unwrap().is_empty());
    assert!(store::fetch_expenses(&conn).unwrap().is_empty());
    assert!(store::fetch_savings(&conn).unwrap().is_empty());
}
