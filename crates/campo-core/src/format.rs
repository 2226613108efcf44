//! pt-BR display formatting: BRL currency, Brazilian dates, weights, percentages.
//!
//! The locale is fixed. Separators are `.` for thousands and `,` for decimals;
//! a plain space separates the currency symbol from the amount.

use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::metrics::kg_to_arrobas;

const ISO_DATE: &str = "%Y-%m-%d";
const BR_DATE: &str = "%d/%m/%Y";

/// Format a BRL amount, e.g. `1234.5` → `"R$ 1.234,50"`, `-10.0` → `"-R$ 10,00"`.
#[must_use]
pub fn format_brl(value: f64) -> String {
    let body = format_decimal(value.abs(), 2);
    if value < 0.0 && body != "0,00" {
        format!("-R$ {body}")
    } else {
        format!("R$ {body}")
    }
}

/// Format a non-negative or negative number with pt-BR separators and a fixed
/// number of decimals.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_decimal(value: f64, decimals: u32) -> String {
    let scale = 10_u64.pow(decimals);
    let scaled = (value.abs() * scale as f64).round() as u64;
    let integer = group_thousands(scaled / scale);
    let sign = if value < 0.0 && scaled > 0 { "-" } else { "" };
    if decimals == 0 {
        return format!("{sign}{integer}");
    }
    let fraction = scaled % scale;
    format!("{sign}{integer},{fraction:0width$}", width = decimals as usize)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// `"1.234,5 kg"`
#[must_use]
pub fn format_kg(weight_kg: f64) -> String {
    format!("{} kg", format_decimal(weight_kg, 1))
}

/// Weight in arrobas, e.g. `300.0` kg → `"20,00 @"`.
#[must_use]
pub fn format_arrobas(weight_kg: f64) -> String {
    format!("{} @", format_decimal(kg_to_arrobas(weight_kg), 2))
}

/// `"12,3%"`
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value, 1))
}

/// GMD for display; undefined values render as `"-"`.
#[must_use]
pub fn format_gmd(gmd: Option<f64>) -> String {
    gmd.map_or_else(|| "-".to_string(), |v| format!("{} kg/dia", format_decimal(v, 3)))
}

#[must_use]
pub fn format_naive_date_br(date: NaiveDate) -> String {
    date.format(BR_DATE).to_string()
}

/// Convert an ISO date (`2026-10-15`) to the Brazilian form (`15/10/2026`).
///
/// # Errors
///
/// Returns `CoreError::Validation` if `iso` is not a valid `YYYY-MM-DD` date.
pub fn format_date_br(iso: &str) -> Result<String, CoreError> {
    parse_iso_date(iso).map(format_naive_date_br)
}

/// Parse an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `CoreError::Validation` on malformed input.
pub fn parse_iso_date(iso: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(iso.trim(), ISO_DATE)
        .map_err(|_| CoreError::validation(format!("Invalid date '{iso}': expected YYYY-MM-DD")))
}

/// Parse a Brazilian `DD/MM/YYYY` date.
///
/// # Errors
///
/// Returns `CoreError::Validation` on malformed input.
pub fn parse_date_br(br: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(br.trim(), BR_DATE)
        .map_err(|_| CoreError::validation(format!("Invalid date '{br}': expected DD/MM/YYYY")))
}
