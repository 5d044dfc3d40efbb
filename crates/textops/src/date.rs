//! Date normalization into canonical `YYYY-MM-DD`.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, TextOpsError};

static RE_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)/(\d+)$").unwrap());
static RE_NAMED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+) +(\d+), +(\d+)$").unwrap());

const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Input grammar, chosen by a single classification pass over structural
/// cues before any extraction happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateFormat {
    /// `Y-M-D` — first character is a digit and the text contains `-`.
    Iso,
    /// `M/D/Y` — first character is a digit, contains `/`, no `-`.
    UsSlash,
    /// `MONTH DAY, YEAR` with a full English month name.
    LongName,
    /// `MON DAY, YEAR` with a 3-letter month abbreviation.
    Abbreviated,
}

fn classify(input: &str) -> Option<DateFormat> {
    let first = input.chars().next()?;
    if first.is_ascii_digit() {
        if input.contains('-') {
            Some(DateFormat::Iso)
        } else if input.contains('/') {
            Some(DateFormat::UsSlash)
        } else {
            None
        }
    } else if first.is_ascii_alphabetic() {
        let token_len = input.chars().take_while(char::is_ascii_alphabetic).count();
        if token_len == 3 {
            Some(DateFormat::Abbreviated)
        } else {
            Some(DateFormat::LongName)
        }
    } else {
        None
    }
}

/// Resolve a month token case-insensitively. Abbreviated tokens match the
/// first three letters of a month name, full tokens the whole name.
fn month_number(token: &str, abbreviated: bool) -> Option<u32> {
    let lower = token.to_ascii_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| {
            if abbreviated {
                name[..3] == lower
            } else {
                *name == lower
            }
        })
        .map(|i| i as u32 + 1)
}

fn invalid(msg: impl Into<String>) -> TextOpsError {
    TextOpsError::InvalidDate(msg.into())
}

fn parse_num(digits: &str, what: &str) -> Result<u32> {
    digits
        .parse::<u32>()
        .map_err(|_| invalid(format!("{what} {digits:?} is not a valid number")))
}

fn check_ranges(year: u32, month: u32, day: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(invalid(format!("month {month} out of range [1, 12]")));
    }
    if !(1..=31).contains(&day) {
        return Err(invalid(format!("day {day} out of range [1, 31]")));
    }
    if !(1900..=2099).contains(&year) {
        return Err(invalid(format!("year {year} out of range [1900, 2099]")));
    }
    Ok(())
}

/// Reformat a date string into `YYYY-MM-DD`.
///
/// Accepts four input grammars: ISO `Y-M-D`, US `M/D/Y`, `MONTH DAY, YEAR`
/// with a full English month name, and `MON DAY, YEAR` with a 3-letter
/// abbreviation (month names are case-insensitive). Leading and trailing
/// spaces are ignored. Day must fall in [1, 31] and year in [1900, 2099];
/// anything that matches no grammar or fails a range check is `InvalidDate`.
///
/// Month and day are emitted as plain decimal values without zero padding.
/// ISO-shaped input is passed through trimmed but otherwise untouched, with
/// no component validation.
pub fn reformat_date(input: &str) -> Result<String> {
    let trimmed = input.trim_matches(' ');
    let format = classify(trimmed)
        .ok_or_else(|| invalid(format!("{trimmed:?} matches no supported date pattern")))?;
    tracing::trace!(?format, "classified date input");

    match format {
        DateFormat::Iso => Ok(trimmed.to_string()),
        DateFormat::UsSlash => {
            let caps = RE_SLASH
                .captures(trimmed)
                .ok_or_else(|| invalid(format!("{trimmed:?} is not a valid M/D/Y date")))?;
            let month = parse_num(&caps[1], "month")?;
            let day = parse_num(&caps[2], "day")?;
            let year = parse_num(&caps[3], "year")?;
            check_ranges(year, month, day)?;
            Ok(format!("{year}-{month}-{day}"))
        }
        DateFormat::LongName | DateFormat::Abbreviated => {
            let caps = RE_NAMED
                .captures(trimmed)
                .ok_or_else(|| invalid(format!("{trimmed:?} is not a valid MONTH DAY, YEAR date")))?;
            let abbreviated = format == DateFormat::Abbreviated;
            let month = month_number(&caps[1], abbreviated)
                .ok_or_else(|| invalid(format!("unknown month {:?}", &caps[1])))?;
            let day = parse_num(&caps[2], "day")?;
            let year = parse_num(&caps[3], "year")?;
            check_ranges(year, month, day)?;
            Ok(format!("{year}-{month}-{day}"))
        }
    }
}
