// Copyright (c) 2025 Finlog Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, ValidationError};
use crate::models::{ExpenseRecord, IncomeRecord, SavingsRecord};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;

pub type Result<T> = std::result::Result<T, Error>;

fn check_amount(amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount(amount).into());
    }
    Ok(())
}

fn check_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field).into());
    }
    Ok(())
}

/// Insert one income row and return its id. Sources are folded to
/// upper case so later grouping is an exact string match.
pub fn append_income(
    conn: &Connection,
    date: NaiveDate,
    source: &str,
    amount: Decimal,
) -> Result<i64> {
    check_text("source", source)?;
    check_amount(amount)?;
    conn.execute(
        "INSERT INTO income(date, source, amount) VALUES (?1, ?2, ?3)",
        params![
            date.to_string(),
            source.trim().to_uppercase(),
            amount.to_string()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn append_expense(
    conn: &Connection,
    date: NaiveDate,
    category: &str,
    amount: Decimal,
    description: Option<&str>,
) -> Result<i64> {
    check_text("category", category)?;
    check_amount(amount)?;
    conn.execute(
        "INSERT INTO expenses(date, category, amount, description) VALUES (?1, ?2, ?3, ?4)",
        params![
            date.to_string(),
            category.trim().to_uppercase(),
            amount.to_string(),
            description
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn append_savings(conn: &Connection, date: NaiveDate, amount: Decimal) -> Result<i64> {
    check_amount(amount)?;
    conn.execute(
        "INSERT INTO savings(date, amount) VALUES (?1, ?2)",
        params![date.to_string(), amount.to_string()],
    )?;
    Ok(conn.last_insert_rowid())
}

fn date_at(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let s: String = row.get(idx)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn amount_at(row: &Row, idx: usize) -> rusqlite::Result<Decimal> {
    let f: f64 = row.get(idx)?;
    Decimal::try_from(f)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Real, Box::new(e)))
}

/// All rows of the income table, in whatever order SQLite returns
/// them; callers sort when ordering matters. Empty table, empty Vec.
pub fn fetch_income(conn: &Connection) -> Result<Vec<IncomeRecord>> {
    let mut stmt = conn.prepare("SELECT id, date, source, amount FROM income")?;
    let rows = stmt.query_map([], |r| {
        Ok(IncomeRecord {
            id: r.get(0)?,
            date: date_at(r, 1)?,
            source: r.get(2)?,
            amount: amount_at(r, 3)?,
        })
    })?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}

pub fn fetch_expenses(conn: &Connection) -> Result<Vec<ExpenseRecord>> {
    let mut stmt = conn.prepare("SELECT id, date, category, amount, description FROM expenses")?;
    let rows = stmt.query_map([], |r| {
        Ok(ExpenseRecord {
            id: r.get(0)?,
            date: date_at(r, 1)?,
            category: r.get(2)?,
            amount: amount_at(r, 3)?,
            description: r.get(4)?,
        })
    })?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}

pub fn fetch_savings(conn: &Connection) -> Result<Vec<SavingsRecord>> {
    let mut stmt = conn.prepare("SELECT id, date, amount FROM savings")?;
    let rows = stmt.query_map([], |r| {
        Ok(SavingsRecord {
            id: r.get(0)?,
            date: date_at(r, 1)?,
            amount: amount_at(r, 2)?,
        })
    })?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}
