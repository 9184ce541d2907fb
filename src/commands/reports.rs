// Copyright (c) 2025 Finlog Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::report_range;
use crate::report;
use crate::store;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("overview", sub)) => overview(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        Some(("timeline", sub)) => timeline(conn, sub)?,
        Some(("daily-expenses", sub)) => daily_expenses(conn, sub)?,
        Some(("weekly-income", sub)) => weekly_income(conn, sub)?,
        Some(("monthly", sub)) => monthly(conn, sub)?,
        Some(("savings", sub)) => savings(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn overview(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let range = report_range(sub)?;
    let income = report::filter_range(store::fetch_income(conn)?, range);
    let expenses = report::filter_range(store::fetch_expenses(conn)?, range);
    let savings = report::filter_range(store::fetch_savings(conn)?, range);
    let totals = report::totals(&income, &expenses, &savings);
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        println!("Overview {} to {}", range.start, range.end);
        let data = vec![
            vec!["Total Income".into(), format!("{:.2}", totals.income)],
            vec!["Total Expenses".into(), format!("{:.2}", totals.expenses)],
            vec!["Total Savings".into(), format!("{:.2}", totals.savings)],
            vec!["Current Balance".into(), format!("{:.2}", totals.balance)],
        ];
        println!("{}", pretty_table(&["Metric", "Amount"], data));
    }
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let range = report_range(sub)?;
    let expenses = report::filter_range(store::fetch_expenses(conn)?, range);
    let mut breakdown = report::spend_by_category(&expenses);
    if let Some(&top) = sub.get_one::<usize>("top") {
        breakdown = report::top_categories(breakdown, top);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &breakdown)? {
        let data = breakdown
            .iter()
            .map(|c| vec![c.category.clone(), format!("{:.2}", c.amount)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }
    Ok(())
}

fn timeline(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let range = report_range(sub)?;
    let income = report::filter_range(store::fetch_income(conn)?, range);
    let expenses = report::filter_range(store::fetch_expenses(conn)?, range);
    let points = report::merge_timeline(&income, &expenses);
    if !maybe_print_json(json_flag, jsonl_flag, &points)? {
        let data = points
            .iter()
            .map(|p| {
                vec![
                    p.date.to_string(),
                    format!("{:.2}", p.amount),
                    p.kind.to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "Amount", "Type"], data));
    }
    Ok(())
}

fn daily_expenses(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let range = report_range(sub)?;
    let expenses = report::filter_range(store::fetch_expenses(conn)?, range);
    let series = report::daily_expenses(&expenses);
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let data = series
            .iter()
            .map(|p| vec![p.period.to_string(), format!("{:.2}", p.amount)])
            .collect();
        println!("{}", pretty_table(&["Day", "Spent"], data));
    }
    Ok(())
}

fn weekly_income(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let range = report_range(sub)?;
    let income = report::filter_range(store::fetch_income(conn)?, range);
    let series = report::weekly_income(&income);
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let data = series
            .iter()
            .map(|p| vec![p.period.to_string(), format!("{:.2}", p.amount)])
            .collect();
        println!("{}", pretty_table(&["Week Starting", "Income"], data));
    }
    Ok(())
}

fn monthly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let range = report_range(sub)?;
    let income = report::filter_range(store::fetch_income(conn)?, range);
    let expenses = report::filter_range(store::fetch_expenses(conn)?, range);
    let rows = report::monthly_comparison(&income, &expenses);
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.month.clone(),
                    format!("{:.2}", r.income),
                    format!("{:.2}", r.expenses),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expenses"], data));
    }
    Ok(())
}

fn savings(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let range = report_range(sub)?;
    let savings = report::filter_range(store::fetch_savings(conn)?, range);
    let points = report::cumulative_savings(&savings);
    if !maybe_print_json(json_flag, jsonl_flag, &points)? {
        // Table shows the trailing rows; JSON output carries the full series.
        let tail = sub.get_one::<usize>("tail").copied().unwrap_or(10);
        let skip = points.len().saturating_sub(tail);
        let data = points
            .iter()
            .skip(skip)
            .map(|p| {
                vec![
                    p.date.to_string(),
                    format!("{:.2}", p.amount),
                    format!("{:.2}", p.cumulative),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Amount", "Cumulative"], data)
        );
    }
    Ok(())
}
