// Copyright (c) 2025 Finlog Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived monitoring views. Every function here is a pure function of
//! record slices plus a date range; storage access stays in `store`.

use crate::models::{Dated, ExpenseRecord, IncomeRecord, SavingsRecord};
use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Closed calendar-date interval `[start, end]`.
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    pub fn past_days(end: NaiveDate, days: i64) -> Self {
        DateRange {
            start: end - Duration::days(days),
            end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Keep the records whose date falls inside the range. A reversed
/// range (start > end) selects nothing.
pub fn filter_range<T: Dated>(records: Vec<T>, range: DateRange) -> Vec<T> {
    records
        .into_iter()
        .filter(|r| range.contains(r.date()))
        .collect()
}

pub fn total<T: Dated>(records: &[T]) -> Decimal {
    records.iter().map(Dated::amount).sum()
}

#[derive(Debug, Clone, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
    pub balance: Decimal,
}

pub fn totals(
    income: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    savings: &[SavingsRecord],
) -> Totals {
    let income_total = total(income);
    let expense_total = total(expenses);
    Totals {
        income: income_total,
        expenses: expense_total,
        savings: total(savings),
        balance: income_total - expense_total,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

/// Per-category expense sums, categories in first-seen order.
pub fn spend_by_category(expenses: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    let mut sums: Vec<CategoryTotal> = Vec::new();
    for e in expenses {
        match sums.iter_mut().find(|c| c.category == e.category) {
            Some(c) => c.amount += e.amount,
            None => sums.push(CategoryTotal {
                category: e.category.clone(),
                amount: e.amount,
            }),
        }
    }
    sums
}

/// Largest `n` category sums. The sort is stable, so equal sums keep
/// their first-seen order.
pub fn top_categories(mut breakdown: Vec<CategoryTotal>, n: usize) -> Vec<CategoryTotal> {
    breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
    breakdown.truncate(n);
    breakdown
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowKind {
    Income,
    Expenses,
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowKind::Income => write!(f, "Income"),
            FlowKind::Expenses => write!(f, "Expenses"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowPoint {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub kind: FlowKind,
}

/// Income rows tagged `Income`, expense rows tagged `Expenses`,
/// concatenated in that order. No dedup; both kinds may share a date.
pub fn merge_timeline(income: &[IncomeRecord], expenses: &[ExpenseRecord]) -> Vec<FlowPoint> {
    let mut points: Vec<FlowPoint> = income
        .iter()
        .map(|r| FlowPoint {
            date: r.date,
            amount: r.amount,
            kind: FlowKind::Income,
        })
        .collect();
    points.extend(expenses.iter().map(|r| FlowPoint {
        date: r.date,
        amount: r.amount,
        kind: FlowKind::Expenses,
    }));
    points
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTotal {
    pub period: NaiveDate,
    pub amount: Decimal,
}

// Period-complete: every bucket between the first and last populated
// one appears, zero when nothing landed in it.
fn resample<T: Dated>(
    records: &[T],
    bucket: impl Fn(NaiveDate) -> NaiveDate,
    next: impl Fn(NaiveDate) -> NaiveDate,
) -> Vec<PeriodTotal> {
    let mut sums: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for r in records {
        *sums.entry(bucket(r.date())).or_insert(Decimal::ZERO) += r.amount();
    }
    let Some((&first, _)) = sums.first_key_value() else {
        return Vec::new();
    };
    let Some((&last, _)) = sums.last_key_value() else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let mut cur = first;
    while cur <= last {
        out.push(PeriodTotal {
            period: cur,
            amount: sums.get(&cur).copied().unwrap_or(Decimal::ZERO),
        });
        cur = next(cur);
    }
    out
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn daily_expenses(expenses: &[ExpenseRecord]) -> Vec<PeriodTotal> {
    resample(expenses, |d| d, |d| d + Duration::days(1))
}

/// Weekly income buckets, weeks starting Monday.
pub fn weekly_income(income: &[IncomeRecord]) -> Vec<PeriodTotal> {
    resample(income, week_start, |d| d + Duration::days(7))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyFlow {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Month-by-month income vs. expense totals, keyed `YYYY-MM`. Inner
/// join: a month present on only one side is dropped, reproducing the
/// observed behavior of the system this replaces.
pub fn monthly_comparison(
    income: &[IncomeRecord],
    expenses: &[ExpenseRecord],
) -> Vec<MonthlyFlow> {
    let mut income_by_month: BTreeMap<String, Decimal> = BTreeMap::new();
    for r in income {
        *income_by_month
            .entry(r.date.format("%Y-%m").to_string())
            .or_insert(Decimal::ZERO) += r.amount;
    }
    let mut expenses_by_month: BTreeMap<String, Decimal> = BTreeMap::new();
    for r in expenses {
        *expenses_by_month
            .entry(r.date.format("%Y-%m").to_string())
            .or_insert(Decimal::ZERO) += r.amount;
    }
    income_by_month
        .into_iter()
        .filter_map(|(month, income)| {
            expenses_by_month.get(&month).map(|&expenses| MonthlyFlow {
                month,
                income,
                expenses,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsPoint {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub cumulative: Decimal,
}

/// Running savings total, dated ascending. The sort is stable, so
/// same-day deposits keep their insertion order.
pub fn cumulative_savings(savings: &[SavingsRecord]) -> Vec<SavingsPoint> {
    let mut ordered: Vec<&SavingsRecord> = savings.iter().collect();
    ordered.sort_by_key(|r| r.date);
    let mut running = Decimal::ZERO;
    ordered
        .into_iter()
        .map(|r| {
            running += r.amount;
            SavingsPoint {
                date: r.date,
                amount: r.amount,
                cumulative: running,
            }
        })
        .collect()
}
