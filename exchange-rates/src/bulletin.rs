//! Bulletin text parsing.
//!
//! A bulletin is two header lines (publication date with a sequence number,
//! then the column names) followed by one `|`-separated rate per line:
//!
//! ```text
//! 17 Jan 2025 #12
//! Country|Currency|Amount|Code|Rate
//! EMU|euro|1|EUR|25.270
//! ```
//!
//! Parsing never fails. Degraded columns are carried on the record (see
//! [`QuotedAmount::Malformed`]) and lines that do not have exactly five
//! columns are skipped and reported in [`Bulletin::skipped`].

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rate::{ExchangeRate, QuotedAmount};

const FIELD_SEPARATOR: char = '|';
const FIELD_COUNT: usize = 5;
const HEADER_LINES: usize = 2;
const DATE_FORMAT: &str = "%d %b %Y";

/// Best-effort reading of the publication line, e.g. `17 Jan 2025 #12`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletinHeader {
    pub date: Option<NaiveDate>,
    pub sequence: Option<u32>,
    pub raw: String,
}

impl BulletinHeader {
    pub fn parse(line: &str) -> Self {
        let raw = line.trim();
        let (date_part, sequence_part) = match raw.split_once('#') {
            Some((date, sequence)) => (date.trim(), Some(sequence.trim())),
            None => (raw, None),
        };

        Self {
            date: NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok(),
            sequence: sequence_part.and_then(|s| s.parse().ok()),
            raw: raw.to_string(),
        }
    }
}

/// A data line that was left out of the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number within the trimmed bulletin text.
    pub line: usize,
    pub field_count: usize,
    pub content: String,
}

/// A parsed bulletin snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bulletin {
    pub header: Option<BulletinHeader>,
    pub rates: Vec<ExchangeRate>,
    pub skipped: Vec<SkippedLine>,
}

impl Bulletin {
    /// Parses raw bulletin text.
    ///
    /// The first two lines are dropped whatever they contain. Blank lines are
    /// ignored, and records keep their source order.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.trim().lines();

        let header = lines.next().map(BulletinHeader::parse);
        let _columns = lines.next();

        let mut rates = Vec::new();
        let mut skipped = Vec::new();

        for (index, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_no = index + HEADER_LINES + 1;

            match parse_line(line) {
                Ok(rate) => rates.push(rate),
                Err(field_count) => {
                    tracing::warn!(
                        line = line_no,
                        field_count,
                        "skipping bulletin line without {} fields",
                        FIELD_COUNT
                    );
                    skipped.push(SkippedLine {
                        line: line_no,
                        field_count,
                        content: line.trim().to_string(),
                    });
                }
            }
        }

        warn_on_duplicate_codes(&rates);

        Self {
            header,
            rates,
            skipped,
        }
    }

    pub fn find(&self, code: &str) -> Option<&ExchangeRate> {
        find_rate(&self.rates, code)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }
}

/// Parses raw bulletin text into its rate records.
pub fn parse_rates(text: &str) -> Vec<ExchangeRate> {
    Bulletin::parse(text).rates
}

/// Looks a record up by currency code, ignoring ASCII case.
pub fn find_rate<'a>(rates: &'a [ExchangeRate], code: &str) -> Option<&'a ExchangeRate> {
    let code = code.trim();
    rates.iter().find(|r| r.code().eq_ignore_ascii_case(code))
}

/// Returns the field count on a column mismatch.
fn parse_line(line: &str) -> Result<ExchangeRate, usize> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [country, currency, amount, code, rate] = fields.as_slice() else {
        return Err(fields.len());
    };

    let amount = QuotedAmount::parse(amount);
    if amount.is_malformed() {
        tracing::debug!(code = %code, amount = %amount, "non-numeric amount column");
    }

    Ok(ExchangeRate::unchecked(
        country.to_string(),
        currency.to_string(),
        amount,
        code.to_string(),
        parse_rate(rate),
    ))
}

/// Accepts `,` as the decimal separator. Unreadable values become `NaN`.
fn parse_rate(raw: &str) -> f64 {
    raw.trim().replacen(',', ".", 1).parse().unwrap_or(f64::NAN)
}

fn warn_on_duplicate_codes(rates: &[ExchangeRate]) {
    let mut seen = HashSet::with_capacity(rates.len());
    for rate in rates {
        if !seen.insert(rate.code()) {
            tracing::warn!(code = rate.code(), "duplicate currency code in bulletin");
        }
    }
}
