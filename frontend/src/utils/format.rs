use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub const DEFAULT_CURRENCY: &str = "MYR";

/// Two decimals with comma-grouped thousands, prefixed with the currency code.
pub fn format_amount(amount: f64, currency: Option<&str>) -> String {
    let currency = currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY);
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{} {}{}.{:02}",
        currency,
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".into())
}

pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn parse_time_input(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .ok()
}

pub fn display_or_dash(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "-".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(1234567.5, Some("MYR")), "MYR 1,234,567.50");
        assert_eq!(format_amount(999.0, Some("USD")), "USD 999.00");
        assert_eq!(format_amount(1000.0, None), "MYR 1,000.00");
    }

    #[test]
    fn format_amount_handles_zero_negative_and_rounding() {
        assert_eq!(format_amount(0.0, None), "MYR 0.00");
        assert_eq!(format_amount(-42.125, Some(" ")), "MYR -42.13");
        assert_eq!(format_amount(0.005, None), "MYR 0.01");
    }

    #[test]
    fn parses_date_and_time_inputs() {
        assert_eq!(
            parse_date_input("2026-03-14"),
            NaiveDate::from_ymd_opt(2026, 3, 14)
        );
        assert!(parse_date_input("14/03/2026").is_none());
        assert_eq!(parse_time_input("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time_input("17:05:00"), NaiveTime::from_hms_opt(17, 5, 0));
        assert!(parse_time_input("25:00").is_none());
    }

    #[test]
    fn formats_optional_values() {
        assert_eq!(format_datetime(None), "-");
        let dt = Utc.with_ymd_and_hms(2026, 1, 2, 8, 15, 0).unwrap();
        assert_eq!(format_datetime(Some(dt)), "2026-01-02 08:15");
        assert_eq!(display_or_dash(Some("  ")), "-");
        assert_eq!(display_or_dash(Some("Studio A")), "Studio A");
        assert_eq!(display_or_dash(None), "-");
    }
}
