use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::Set;
use tracing::warn;

use crate::entities::unicorns;
use crate::error::SeedError;
use crate::source::{self, RawRecord};

/// Typed fields of one unicorn, ready to insert. `id` is left to the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUnicorn {
    pub company: String,
    pub valuation: f64,
    pub date_joined: NaiveDate,
    pub country: String,
    pub city: String,
    pub industry: String,
    pub select_investors: String,
}

impl NewUnicorn {
    /// Derives typed fields from a raw CSV row. Errors carry the row's line.
    pub fn from_raw(record: &RawRecord) -> Result<Self, SeedError> {
        Self::parse_fields(record).map_err(|e| e.at_line(record.line))
    }

    fn parse_fields(record: &RawRecord) -> Result<Self, SeedError> {
        let date_joined = to_calendar_date(&parse_date(field(record, source::DATE_JOINED)?)?)?;
        let valuation = parse_valuation(field(record, source::VALUATION)?)?;

        Ok(NewUnicorn {
            company: field(record, source::COMPANY)?.to_string(),
            valuation,
            date_joined,
            country: field(record, source::COUNTRY)?.to_string(),
            city: field(record, source::CITY)?.to_string(),
            industry: field(record, source::INDUSTRY)?.to_string(),
            select_investors: field(record, source::SELECT_INVESTORS)?.to_string(),
        })
    }

    /// Builds the insert model.
    ///
    /// The valuation goes through its shortest decimal form and is rounded half
    /// away from zero to the column's 2 fractional digits, so `2.125` stores as `2.13`.
    pub fn into_active_model(self) -> Result<unicorns::ActiveModel, SeedError> {
        let valuation = Decimal::from_str(&self.valuation.to_string())
            .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
            .map_err(|e| SeedError::ValuationFormat(format!("{} is not a storable number: {}", self.valuation, e)))?;

        Ok(unicorns::ActiveModel {
            company: Set(self.company),
            valuation: Set(valuation),
            date_joined: Set(Some(self.date_joined)),
            country: Set(self.country),
            city: Set(self.city),
            industry: Set(self.industry),
            select_investors: Set(self.select_investors),
            ..Default::default() // id is SERIAL
        })
    }
}

fn field<'a>(record: &'a RawRecord, column: &str) -> Result<&'a str, SeedError> {
    record
        .get(column)
        .map(str::trim)
        .ok_or_else(|| SeedError::SourceRead(format!("missing column '{}'", column)))
}

/// Rewrites a day-first `D/M/YYYY` date as `YYYY-MM-DD`.
///
/// Day and month are left-padded to two digits; the year is kept verbatim.
/// Anything that is not exactly three slash-separated parts is rejected.
pub fn parse_date(date_str: &str) -> Result<String, SeedError> {
    let parts: Vec<&str> = date_str.split('/').collect();
    if let [day, month, year] = parts.as_slice() {
        return Ok(format!("{}-{:0>2}-{:0>2}", year, month, day));
    }
    warn!("Could not parse date: {}", date_str);
    Err(SeedError::DateFormat(format!("'{}' is not in D/M/YYYY form", date_str)))
}

fn to_calendar_date(iso: &str) -> Result<NaiveDate, SeedError> {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map_err(|e| SeedError::DateFormat(format!("'{}' is not a calendar date: {}", iso, e)))
}

/// Parses a `$`-prefixed valuation in billions, e.g. `$12,000.0`.
///
/// Only the first `$` and the first `,` are removed before taking the longest
/// leading decimal literal, so `$1,234,567.0` reads as `1234`.
pub fn parse_valuation(raw: &str) -> Result<f64, SeedError> {
    let stripped = raw.replacen('$', "", 1).replacen(',', "", 1);
    leading_float(&stripped)
        .ok_or_else(|| SeedError::ValuationFormat(format!("'{}' has no numeric value", raw)))
}

fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+') | Some(b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
