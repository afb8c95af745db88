//! Normalization of the free-form dates found in résumés into a short
//! `"{month} {year}"` label.

use crate::locale::Locale;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use std::fmt;

/// Separates the two endpoints of a date range
pub const RANGE_SEPARATOR: &str = " - ";

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NormalizedDate {
    /// The input matched a known format and was reformatted
    Formatted(String),
    /// The input matched no known format and is kept as written (with its
    /// whitespace cleaned up)
    Unparsed(String),
}

impl NormalizedDate {
    pub fn as_str(&self) -> &str {
        match self {
            NormalizedDate::Formatted(s) | NormalizedDate::Unparsed(s) => s.as_str(),
        }
    }

    pub fn into_string(self) -> String {
        match self {
            NormalizedDate::Formatted(s) | NormalizedDate::Unparsed(s) => s,
        }
    }
}

impl fmt::Display for NormalizedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

enum DateFormat {
    /// A date-time led by a weekday name (`"Tue, "`). The name must be a
    /// weekday but need not match the date.
    WeekdayDateTime(&'static str),
    Date(&'static str),
    /// Formats without a day; parsed by anchoring to the first of the month
    MonthYear(&'static str),
}

const FORMATS: [DateFormat; 6] = [
    DateFormat::WeekdayDateTime("%d %b %Y %H:%M:%S GMT"),
    DateFormat::MonthYear("%b %Y"),
    DateFormat::Date("%Y-%m-%d"),
    DateFormat::Date("%m/%d/%Y"),
    DateFormat::Date("%d/%m/%Y"),
    DateFormat::MonthYear("%B %Y"),
];

impl DateFormat {
    fn parse(&self, s: &str) -> Option<NaiveDate> {
        match self {
            DateFormat::WeekdayDateTime(format) => {
                let (weekday, rest) = s.split_once(", ")?;
                weekday.parse::<Weekday>().ok()?;
                NaiveDateTime::parse_from_str(rest, format)
                    .ok()
                    .map(|dt| dt.date())
            }
            DateFormat::Date(format) => NaiveDate::parse_from_str(s, format).ok(),
            DateFormat::MonthYear(format) => {
                NaiveDate::parse_from_str(&format!("1 {s}"), &format!("%d {format}")).ok()
            }
        }
    }
}

/// Collapse every run of whitespace into a single space and trim the ends
pub fn clean_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Turn a raw date into a `"{month abbreviation} {year}"` label in the
/// given locale. Returns [None] for blank input.
///
/// For a range (`"a - b"`) only the start is normalized.
pub fn normalize(raw: &str, locale: Locale) -> Option<NormalizedDate> {
    let cleaned = clean_whitespace(raw);
    if cleaned.is_empty() {
        return None;
    }

    if let Some((start, _)) = cleaned.split_once(RANGE_SEPARATOR) {
        return normalize(start, locale);
    }

    match FORMATS.iter().find_map(|format| format.parse(&cleaned)) {
        Some(date) => Some(NormalizedDate::Formatted(format!(
            "{} {}",
            locale.month_abbreviation(date.month()),
            date.year()
        ))),
        None => {
            log::warn!("could not parse date `{cleaned}`");
            Some(NormalizedDate::Unparsed(cleaned))
        }
    }
}

/// Split a combined `"start - end"` field into its endpoints. A missing or
/// blank end yields [None].
pub fn split_range(raw: &str) -> (String, Option<String>) {
    let cleaned = clean_whitespace(raw);
    if let Some(start) = cleaned.strip_suffix(RANGE_SEPARATOR.trim_end()) {
        return (start.to_string(), None);
    }
    match cleaned.split_once(RANGE_SEPARATOR) {
        Some((start, end)) => {
            let end = end.trim();
            (
                start.trim().to_string(),
                (!end.is_empty()).then(|| end.to_string()),
            )
        }
        None => (cleaned, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatted(raw: &str, locale: Locale) -> String {
        match normalize(raw, locale) {
            Some(NormalizedDate::Formatted(s)) => s,
            other => panic!("`{raw}` was not formatted: {other:?}"),
        }
    }

    #[test]
    fn blank_dates_are_absent() {
        assert_eq!(normalize("", Locale::En), None);
        assert_eq!(normalize(" \t\n ", Locale::En), None);
    }

    #[test]
    fn every_supported_format_is_recognized() {
        assert_eq!(formatted("Tue, 01 Mar 2022 00:00:00 GMT", Locale::En), "Mar 2022");
        // the weekday doesn't have to agree with the date
        assert_eq!(formatted("Mon, 01 Mar 2022 00:00:00 GMT", Locale::En), "Mar 2022");
        assert_eq!(
            normalize("Xyz, 01 Mar 2022 00:00:00 GMT", Locale::En),
            Some(NormalizedDate::Unparsed("Xyz, 01 Mar 2022 00:00:00 GMT".to_string()))
        );
        assert_eq!(formatted("Mar 2025", Locale::En), "Mar 2025");
        assert_eq!(formatted("2021-09-15", Locale::En), "Sep 2021");
        assert_eq!(formatted("02/13/2020", Locale::En), "Feb 2020");
        assert_eq!(formatted("13/02/2020", Locale::En), "Feb 2020");
        assert_eq!(formatted("December 2019", Locale::En), "Dec 2019");
    }

    #[test]
    fn month_names_follow_the_locale() {
        assert_eq!(formatted("2021-02-01", Locale::Fr), "Fév 2021");
        assert_eq!(formatted("2021-08-01", Locale::Tr), "Ağu 2021");
        assert_eq!(formatted("2021-07-01", Locale::Fr), "Juil 2021");
    }

    #[test]
    fn whitespace_is_collapsed_before_parsing() {
        assert_eq!(formatted("  Mar \n  2025 ", Locale::En), "Mar 2025");
    }

    #[test]
    fn unknown_formats_are_kept_as_written() {
        assert_eq!(
            normalize("Summer   2019", Locale::En),
            Some(NormalizedDate::Unparsed("Summer 2019".to_string()))
        );
    }

    #[test]
    fn ranges_keep_only_their_start() {
        assert_eq!(formatted("2020-01-01 - 2021-06-30", Locale::En), "Jan 2020");
        // the start has a day, which no supported format allows with a month name
        assert_eq!(
            normalize("15 Mar 2021 - 20 Apr 2022", Locale::En),
            Some(NormalizedDate::Unparsed("15 Mar 2021".to_string()))
        );
    }

    #[test]
    fn ranges_split_into_endpoints() {
        assert_eq!(
            split_range("Jan 2020  -  Mar 2021"),
            ("Jan 2020".to_string(), Some("Mar 2021".to_string()))
        );
        assert_eq!(split_range("2021-09-15"), ("2021-09-15".to_string(), None));
        assert_eq!(split_range("Jan 2020 - "), ("Jan 2020".to_string(), None));
    }
}
