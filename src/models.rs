// Copyright (c) 2025 Finlog Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub source: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Date/amount view shared by all three record kinds; the generic
/// filtering and resampling helpers in `report` work through it.
pub trait Dated {
    fn date(&self) -> NaiveDate;
    fn amount(&self) -> Decimal;
}

impl Dated for IncomeRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Dated for ExpenseRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Dated for SavingsRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn amount(&self) -> Decimal {
        self.amount
    }
}
