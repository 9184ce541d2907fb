// Copyright (c) 2025 Finlog Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::maybe_range;
use crate::report::filter_range;
use crate::store;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let source = sub.get_one::<String>("source").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let id = store::append_income(conn, date, source, amount)?;
    println!("Recorded income #{}: {} {} on {}", id, source, amount, date);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut rows = store::fetch_income(conn)?;
    if let Some(range) = maybe_range(sub)? {
        rows = filter_range(rows, range);
    }
    rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(&limit) = sub.get_one::<usize>("limit") {
        rows.truncate(limit);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.to_string(),
                    r.source.clone(),
                    format!("{:.2}", r.amount),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["ID", "Date", "Source", "Amount"], data));
    }
    Ok(())
}
