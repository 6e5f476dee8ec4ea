//! Data types for J-Quants API responses.
//!
//! Field names follow the API's own casing. Several endpoints have returned
//! their rows under different keys across API versions (`info`, `daily_quotes`
//! and `statements` versus a plain `data`), so each envelope accepts both.

use crate::{Result, error::JQuantsError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalizes a user-entered security code.
///
/// J-Quants identifies listings by 5-digit codes; a 4-digit code as commonly
/// written gets a trailing `0`.
///
/// # Errors
///
/// Returns [`JQuantsError::InvalidCode`] if the code is blank.
pub fn normalize_code(raw: &str) -> Result<String> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(JQuantsError::InvalidCode);
    }
    if code.chars().count() == 4 {
        Ok(format!("{code}0"))
    } else {
        Ok(code.to_string())
    }
}

/// Parses a J-Quants date in `YYYY-MM-DD` or `YYYYMMDD` form.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y%m%d"))
        .ok()
}

/// Listed company master record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Security code.
    #[serde(rename = "Code", default)]
    pub code: String,
    /// Company name.
    #[serde(rename = "CoName", alias = "CompanyName", default)]
    pub company_name: String,
}

/// Response envelope of `equities/master`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MasterResponse {
    #[serde(default)]
    info: Option<Vec<CompanyInfo>>,
    #[serde(default)]
    data: Option<Vec<CompanyInfo>>,
}

impl MasterResponse {
    /// The company rows, whichever key they arrived under.
    #[must_use]
    pub fn into_companies(self) -> Vec<CompanyInfo> {
        self.info.or(self.data).unwrap_or_default()
    }
}

/// Daily price bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyQuote {
    /// Trading date.
    #[serde(rename = "Date")]
    pub date: String,
    /// Security code.
    #[serde(rename = "Code", default)]
    pub code: String,
    /// Closing price; absent on days without trades.
    #[serde(rename = "C", alias = "Close", default)]
    pub close: Option<f64>,
}

impl DailyQuote {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Response envelope of `equities/bars/daily`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyBarsResponse {
    #[serde(default)]
    daily_quotes: Option<Vec<DailyQuote>>,
    #[serde(default)]
    data: Option<Vec<DailyQuote>>,
}

impl DailyBarsResponse {
    /// The quote rows, whichever key they arrived under.
    #[must_use]
    pub fn into_quotes(self) -> Vec<DailyQuote> {
        self.daily_quotes.or(self.data).unwrap_or_default()
    }
}

/// Returns the most recent quote, regardless of the order they arrived in.
#[must_use]
pub fn latest_quote(mut quotes: Vec<DailyQuote>) -> Option<DailyQuote> {
    quotes.sort_by(|a, b| a.date.cmp(&b.date));
    quotes.pop()
}

/// A per-share figure as reported: J-Quants sends these as strings, with an
/// empty string when not disclosed, but numeric values are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Figure {
    /// A numeric value.
    Number(f64),
    /// A textual value, possibly empty.
    Text(String),
}

impl Figure {
    /// Whether this figure counts as disclosed (non-empty, nonzero).
    #[must_use]
    pub fn is_disclosed(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// The numeric value, or NaN if the text does not start with a number.
    ///
    /// Text is read up to the end of its leading number, so `"123abc"` is 123.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_leading_float(s),
        }
    }
}

/// Parses the longest decimal number at the start of `text`.
///
/// Leading whitespace is skipped. An exponent is only consumed when digits
/// follow it. Returns NaN when there is no leading number.
fn parse_leading_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let int_start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = digits_from(int_start);
    let mut has_digits = end > int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1 + usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Financial statement summary row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementSummary {
    /// Disclosure date.
    #[serde(rename = "DiscDate", alias = "DisclosedDate", default)]
    pub disclosed_date: Option<String>,
    /// Consolidated earnings per share.
    #[serde(rename = "EPS", alias = "EarningsPerShare", default)]
    pub eps: Option<Figure>,
    /// Non-consolidated earnings per share.
    #[serde(rename = "NCEPS", default)]
    pub nc_eps: Option<Figure>,
    /// Consolidated book value per share.
    #[serde(rename = "BPS", alias = "BookValuePerShare", default)]
    pub bps: Option<Figure>,
    /// Non-consolidated book value per share.
    #[serde(rename = "NCBPS", default)]
    pub nc_bps: Option<Figure>,
}

impl StatementSummary {
    /// Consolidated EPS if disclosed, else non-consolidated.
    #[must_use]
    pub fn eps_figure(&self) -> Option<&Figure> {
        pick(self.eps.as_ref(), self.nc_eps.as_ref())
    }

    /// Consolidated BPS if disclosed, else non-consolidated.
    #[must_use]
    pub fn bps_figure(&self) -> Option<&Figure> {
        pick(self.bps.as_ref(), self.nc_bps.as_ref())
    }
}

fn pick<'a>(primary: Option<&'a Figure>, fallback: Option<&'a Figure>) -> Option<&'a Figure> {
    primary
        .filter(|f| f.is_disclosed())
        .or_else(|| fallback.filter(|f| f.is_disclosed()))
}

/// Response envelope of `fins/summary`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    statements: Option<Vec<StatementSummary>>,
    #[serde(default)]
    data: Option<Vec<StatementSummary>>,
}

impl SummaryResponse {
    /// The statement rows, whichever key they arrived under.
    #[must_use]
    pub fn into_statements(self) -> Vec<StatementSummary> {
        self.statements.or(self.data).unwrap_or_default()
    }
}

/// Latest EPS and BPS extracted from statement summaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerShare {
    /// Earnings per share; 0 when never disclosed.
    pub eps: f64,
    /// Book value per share; 0 when never disclosed.
    pub bps: f64,
}

impl PerShare {
    /// Scans statements (oldest first) from the newest backwards, taking
    /// the first disclosed EPS and the first disclosed BPS independently.
    ///
    /// A figure that is never disclosed, or does not parse, becomes 0.
    #[must_use]
    pub fn from_statements(statements: &[StatementSummary]) -> Self {
        let mut eps: Option<f64> = None;
        let mut bps: Option<f64> = None;

        for s in statements.iter().rev() {
            if eps.is_none() {
                eps = s.eps_figure().map(Figure::value);
            }
            if bps.is_none() {
                bps = s.bps_figure().map(Figure::value);
            }
            if eps.is_some() && bps.is_some() {
                break;
            }
        }

        Self {
            eps: or_zero(eps),
            bps: or_zero(bps),
        }
    }
}

fn or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| !v.is_nan()).unwrap_or(0.0)
}
