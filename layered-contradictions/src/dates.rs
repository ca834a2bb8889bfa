//! Calendar dates written in Norwegian correspondence.
//!
//! Two forms are recognized: "15. mars 2024" (the period is optional) and
//! numeric "15.03.2024", "15/03/24" or "15-03-2024". Two-digit years are read
//! as 20yy. Matches that do not name a real calendar day are skipped.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

const MONTHS: [&str; 12] = [
    "januar", "februar", "mars", "april", "mai", "juni", "juli", "august", "september",
    "oktober", "november", "desember",
];

static WRITTEN_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})\.?\s*(januar|februar|mars|april|mai|juni|juli|august|september|oktober|november|desember)\s+(\d{4})\b",
    )
    .unwrap()
});

static NUMERIC_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})[./-](\d{1,2})[./-](\d{4}|\d{2})\b").unwrap());

/// All valid dates in `text`, in order of appearance.
pub fn extract_dates(text: &str) -> Vec<NaiveDate> {
    let mut found: Vec<(usize, NaiveDate)> = Vec::new();

    for caps in WRITTEN_DATE.captures_iter(text) {
        let month = MONTHS
            .iter()
            .position(|name| caps[2].eq_ignore_ascii_case(name))
            .map(|idx| idx as u32 + 1);
        let date = match (caps[1].parse::<u32>(), month, caps[3].parse::<i32>()) {
            (Ok(day), Some(month), Ok(year)) => NaiveDate::from_ymd_opt(year, month, day),
            _ => None,
        };
        if let (Some(date), Some(whole)) = (date, caps.get(0)) {
            found.push((whole.start(), date));
        }
    }

    for caps in NUMERIC_DATE.captures_iter(text) {
        let year = match caps[3].parse::<i32>() {
            Ok(yy) if caps[3].len() == 2 => Some(2000 + yy),
            Ok(yyyy) => Some(yyyy),
            Err(_) => None,
        };
        let date = match (caps[1].parse::<u32>(), caps[2].parse::<u32>(), year) {
            (Ok(day), Ok(month), Some(year)) => NaiveDate::from_ymd_opt(year, month, day),
            _ => None,
        };
        if let (Some(date), Some(whole)) = (date, caps.get(0)) {
            found.push((whole.start(), date));
        }
    }

    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, date)| date).collect()
}

/// The first valid date in `text`.
pub fn first_date(text: &str) -> Option<NaiveDate> {
    extract_dates(text).into_iter().next()
}
