use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Date-only formats accepted for the birth date, tried in order.
const BIRTH_FORMATS: [&str; 5] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y年%m月%d日",
    "%B %d, %Y",
];

/// Local date-times without an offset; only the date part is kept.
const BIRTH_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// `1998年4月12日`, without zero padding.
pub fn format_japanese_date(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// The "as of" stamp printed under the title, e.g. `2025年11月30日現在`.
pub fn as_of_stamp(today: NaiveDate) -> String {
    format!("{}現在", format_japanese_date(today))
}

/// Parses a submitted birth date. Unparseable input is returned verbatim.
pub fn format_birth(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse_date(raw.trim()) {
        Some(date) => format_japanese_date(date),
        None => raw.to_string(),
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    BIRTH_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            BIRTH_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| parse_partial_date(s))
}

/// `YYYY-MM` (first of the month) and `YYYY` (1 January).
fn parse_partial_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-');
    let year = parse_fixed_digits(parts.next()?, 4)?;
    let month = match parts.next() {
        Some(month) => parse_fixed_digits(month, 2)?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, month, 1)
}

fn parse_fixed_digits(s: &str, len: usize) -> Option<u32> {
    if s.len() == len && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_birth_date_is_localized() {
        assert_eq!(format_birth("1998-04-12"), "1998年4月12日");
    }

    #[test]
    fn test_slash_and_dot_separators() {
        assert_eq!(format_birth("1998/4/2"), "1998年4月2日");
        assert_eq!(format_birth("2001.12.31"), "2001年12月31日");
    }

    #[test]
    fn test_rfc3339_timestamp_uses_its_date() {
        assert_eq!(format_birth("1998-04-12T09:30:00+09:00"), "1998年4月12日");
    }

    #[test]
    fn test_local_datetime_keeps_date_part() {
        assert_eq!(format_birth("1998-04-12T09:30"), "1998年4月12日");
        assert_eq!(format_birth("1998-04-12 09:30"), "1998年4月12日");
        assert_eq!(format_birth("1998/04/12 10:00"), "1998年4月12日");
    }

    #[test]
    fn test_year_month_defaults_to_first_day() {
        assert_eq!(format_birth("1998-04"), "1998年4月1日");
    }

    #[test]
    fn test_year_only_defaults_to_new_year() {
        assert_eq!(format_birth("1998"), "1998年1月1日");
    }

    #[test]
    fn test_english_month_name() {
        assert_eq!(format_birth("April 12, 1998"), "1998年4月12日");
    }

    #[test]
    fn test_partial_dates_reject_out_of_range() {
        assert_eq!(format_birth("1998-13"), "1998-13");
        assert_eq!(format_birth("98"), "98");
    }

    #[test]
    fn test_already_japanese_is_normalized() {
        assert_eq!(format_birth("1998年04月12日"), "1998年4月12日");
    }

    #[test]
    fn test_unparseable_is_verbatim() {
        assert_eq!(format_birth("not-a-date"), "not-a-date");
        assert_eq!(format_birth("平成10年4月12日"), "平成10年4月12日");
        assert_eq!(format_birth("1998-02-30"), "1998-02-30");
    }

    #[test]
    fn test_empty_birth_stays_empty() {
        assert_eq!(format_birth(""), "");
    }

    #[test]
    fn test_as_of_stamp() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        assert_eq!(as_of_stamp(date), "2025年11月30日現在");
    }
}
