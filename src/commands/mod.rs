// Copyright (c) 2025 Finlog Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod exporter;
pub mod expenses;
pub mod income;
pub mod reports;
pub mod savings;

use crate::report::DateRange;
use crate::utils::parse_date;
use anyhow::Result;
use chrono::{Duration, Utc};

// Default view is the past week, same as the dashboard this replaces.
const DEFAULT_PAST_DAYS: i64 = 7;

pub(crate) fn report_range(sub: &clap::ArgMatches) -> Result<DateRange> {
    let today = Utc::now().date_naive();
    if let Some(period) = sub.get_one::<String>("period") {
        let days = if period == "week" { 7 } else { 30 };
        return Ok(DateRange::past_days(today, days));
    }
    let from = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let to = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;
    Ok(DateRange::new(
        from.unwrap_or_else(|| today - Duration::days(DEFAULT_PAST_DAYS)),
        to.unwrap_or(today),
    ))
}

// List commands show everything unless the user asked for a range.
pub(crate) fn maybe_range(sub: &clap::ArgMatches) -> Result<Option<DateRange>> {
    let ranged = sub.get_one::<String>("period").is_some()
        || sub.get_one::<String>("from").is_some()
        || sub.get_one::<String>("to").is_some();
    if ranged {
        Ok(Some(report_range(sub)?))
    } else {
        Ok(None)
    }
}
