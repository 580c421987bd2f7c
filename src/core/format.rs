//! Display formatting for money and dates.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

/// Paise counts up to 2^53 are exact in an `f64`.
const MAX_EXACT_PAISE: f64 = 9_007_199_254_740_992.0;

/// Format a rupee amount the way the `en-IN` locale does: two decimals and
/// Indian digit grouping (`₹12,34,567.80`).
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹NaN".to_string();
    }
    let paise = (amount.abs() * 100.0).round();
    let (rupees, fraction) = if paise < MAX_EXACT_PAISE {
        let paise = paise as u64;
        ((paise / 100).to_string(), paise % 100)
    } else {
        // no fractional digits left at this magnitude
        (amount.abs().round().to_string(), 0)
    };
    let sign = if amount < 0.0 && paise > 0.0 { "-" } else { "" };
    format!("{}₹{}.{:02}", sign, group_indian(&rupees), fraction)
}

/// Group a run of digits as lakh/crore: the last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Whether `pattern` renders a calendar date without error.
pub fn is_valid_date_format(pattern: &str) -> bool {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let mut out = String::new();
    write!(out, "{}", NaiveDate::MIN.format(pattern)).is_ok()
}

/// Render `date` with a strftime pattern, or as `YYYY-MM-DD` if the pattern
/// cannot be rendered.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(pattern)) {
        Ok(()) => out,
        Err(_) => date.to_string(),
    }
}

/// Plain integer with Indian grouping, used for quantities on the overview.
pub fn format_count(value: u64) -> String {
    group_indian(&value.to_string())
}
