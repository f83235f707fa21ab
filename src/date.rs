//! Date display helpers
//!
//! Resume dates are ISO `YYYY-MM-DD` strings, the sentinel `"Present"`, or
//! free text. Only the first form is reformatted.

use chrono::NaiveDate;

/// Sentinel for an ongoing role
pub const PRESENT: &str = "Present";

/// Format `YYYY-MM-DD` as `"<Month> <Year>"`
///
/// `"Present"` and anything that does not parse are returned unchanged.
pub fn format_date(date: &str) -> String {
    if date == PRESENT {
        return PRESENT.to_string();
    }
    // chrono's %Y takes signs and extra digits, %m/%d take single digits
    if !is_iso_shape(date) {
        return date.to_string();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Exactly `DDDD-DD-DD` with ASCII digits
fn is_iso_shape(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Format both ends of a range independently, joined with `" - "`
pub fn format_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

/// Unformatted start and end of a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

impl DateRange<'_> {
    pub fn format(&self) -> String {
        format_range(self.start, self.end)
    }
}

/// Overall span of a set of `(start, end)` periods
///
/// ISO dates order correctly as strings, so the earliest non-empty start and
/// the latest non-empty end are picked lexicographically. Any `"Present"` end
/// makes the whole span ongoing.
pub fn aggregate_range<'a, I>(periods: I) -> DateRange<'a>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut range = DateRange::default();
    let mut ongoing = false;

    for (start, end) in periods {
        if !start.is_empty() && (range.start.is_empty() || start < range.start) {
            range.start = start;
        }
        if !end.is_empty() && end > range.end {
            range.end = end;
        }
        ongoing |= end == PRESENT;
    }

    if ongoing {
        range.end = PRESENT;
    }
    range
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_date("2021-03-05"), "March 2021");
        assert_eq!(format_date("1999-12-31"), "December 1999");
        assert_eq!(format_date("2020-01-01"), "January 2020");
    }

    #[test]
    fn test_format_present() {
        assert_eq!(format_date("Present"), "Present");
        // Case-sensitive: only the exact sentinel is special
        assert_eq!(format_date("present"), "present");
    }

    #[test]
    fn test_format_passthrough() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("Summer 2019"), "Summer 2019");
        assert_eq!(format_date("2021-03"), "2021-03");
        assert_eq!(format_date("2021-02-30"), "2021-02-30");
    }

    #[test]
    fn test_format_requires_exact_iso_shape() {
        assert_eq!(format_date("+2021-01-01"), "+2021-01-01");
        assert_eq!(format_date("20210-01-01"), "20210-01-01");
        assert_eq!(format_date("2021-3-5"), "2021-3-5");
        assert_eq!(format_date("2021-03-05 "), "2021-03-05 ");
        assert_eq!(format_date("０２０２-01-01"), "０２０２-01-01");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_range("2020-01-01", "Present"), "January 2020 - Present");
        assert_eq!(format_range("", ""), " - ");
    }

    #[test]
    fn test_aggregate_min_max() {
        let range = aggregate_range([
            ("2019-05-01", "2020-06-30"),
            ("2016-01-01", "2019-04-30"),
            ("2020-07-01", "2022-01-31"),
        ]);
        assert_eq!(range.start, "2016-01-01");
        assert_eq!(range.end, "2022-01-31");
    }

    #[test]
    fn test_aggregate_present_overrides() {
        let range = aggregate_range([("2016-01-01", "Present"), ("2012-01-01", "2015-12-31")]);
        insta::assert_snapshot!(range.format(), @"January 2012 - Present");
    }

    #[test]
    fn test_aggregate_skips_empty_dates() {
        let range = aggregate_range([("", ""), ("2018-02-01", ""), ("", "2019-03-01")]);
        assert_eq!(range.start, "2018-02-01");
        assert_eq!(range.end, "2019-03-01");
    }

    #[test]
    fn test_aggregate_no_periods() {
        let range = aggregate_range(std::iter::empty());
        assert_eq!(range, DateRange::default());
        assert_eq!(range.format(), " - ");
    }
}
