use chrono::{Datelike, Duration, NaiveDate};
use teamdo_domain::shared::DomainError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Parse a `YYYY-MM-DD` request parameter. Years outside `1..=9999` are
/// rejected so that week and range arithmetic cannot leave chrono's range.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DomainError> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| DomainError::InvalidInput(format!("Invalid date '{}': {}", raw, e)))?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(DomainError::InvalidInput(format!(
            "Date '{}' is outside years {}-{}",
            raw.trim(),
            MIN_YEAR,
            MAX_YEAR
        )));
    }
    Ok(date)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Monday of the week containing `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2024-06-15 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert!(matches!(
            parse_date("15/06/2024"),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_date_rejects_extreme_years() {
        for raw in ["+262142-12-31", "+10000-01-01", "0000-12-31", "-0001-01-01"] {
            assert!(
                matches!(parse_date(raw), Err(DomainError::InvalidInput(_))),
                "{} should be rejected",
                raw
            );
        }
        assert!(parse_date("9999-12-31").is_ok());
        assert!(parse_date("0001-01-01").is_ok());
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-06-15 is a Saturday, 2024-06-16 a Sunday
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(week_start(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), monday);
        assert_eq!(week_start(NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()), monday);
        assert_eq!(week_start(monday), monday);
    }
}
