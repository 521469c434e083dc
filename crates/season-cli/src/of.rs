use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use season_filter::{season_of_date, Hemisphere};
use std::io::Write;

pub fn exec(date: &str, hemisphere: Hemisphere, out: &mut impl Write) -> Result<()> {
    let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .with_context(|| format!("`{date}` is not a YYYY-MM-DD date"))?;

    let season = season_of_date(parsed.year(), parsed.month(), parsed.day(), hemisphere)?;

    writeln!(out, "{season}")?;
    Ok(())
}
