use anyhow::Context;
use campo_core::format::{parse_date_br, parse_iso_date};
use campo_core::reports::ReportFilter;
use chrono::{NaiveDate, NaiveTime};
use serde::de::DeserializeOwned;

use crate::cli::subcommands::RangeArgs;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Accept `YYYY-MM-DD` or the Brazilian `DD/MM/YYYY`.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    let parsed = if raw.contains('/') {
        parse_date_br(raw)
    } else {
        parse_iso_date(raw)
    };
    parsed.with_context(|| format!("invalid {field}"))
}

pub fn parse_optional_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| parse_date(value, field)).transpose()
}

/// Accept `HH:MM` or `HH:MM:SS`.
pub fn parse_time(raw: &str, field: &str) -> anyhow::Result<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| anyhow::anyhow!("invalid {field} '{raw}': expected HH:MM"))
}

pub fn parse_range(range: &RangeArgs) -> anyhow::Result<ReportFilter> {
    Ok(ReportFilter {
        start: parse_optional_date(range.from.as_deref(), "--from")?,
        end: parse_optional_date(range.to.as_deref(), "--to")?,
    })
}
