use chrono::{DateTime, NaiveDate, Utc};

pub fn format_with_commas(value: i64) -> String {
    let is_negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if is_negative {
        format!("-{}", out)
    } else {
        out
    }
}

pub fn format_currency(amount: f64, symbol: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as i64;
    format!(
        "{}{} {}.{:02}",
        sign,
        symbol,
        format_with_commas(cents / 100),
        cents % 100
    )
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Reads an API timestamp. Accepts RFC 3339 and bare `YYYY-MM-DD`.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.with_timezone(&Utc).date_naive());
    }
    raw.get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
}

/// `YYYY-MM` of a timestamp, taken in UTC.
pub fn month_key(raw: &str) -> Option<String> {
    parse_api_date(raw).map(|date| date.format("%Y-%m").to_string())
}

/// Value for an `<input type="date">`.
pub fn input_date(raw: &str) -> String {
    parse_api_date(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn display_date(raw: &str) -> String {
    match parse_api_date(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// "Mar 5" style label used on chart axes and insights.
pub fn short_day(raw: &str) -> String {
    match parse_api_date(raw) {
        Some(date) => date.format("%b %-d").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_group_thousands() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1_000), "1,000");
        assert_eq!(format_with_commas(-1_234_567), "-1,234,567");
    }

    #[test]
    fn currency_rounds_to_cents() {
        assert_eq!(format_currency(1234.5, "₹"), "₹ 1,234.50");
        assert_eq!(format_currency(-200.0, "$"), "-$ 200.00");
        assert_eq!(format_currency(0.005, "$"), "$ 0.01");
    }

    #[test]
    fn month_key_uses_utc() {
        assert_eq!(month_key("2024-03-31T23:30:00.000Z").as_deref(), Some("2024-03"));
        assert_eq!(month_key("2024-04-01T02:00:00+05:30").as_deref(), Some("2024-03"));
        assert_eq!(month_key("2024-12-01").as_deref(), Some("2024-12"));
        assert_eq!(month_key("garbage"), None);
    }

    #[test]
    fn input_date_strips_time() {
        assert_eq!(input_date("2024-03-05T00:00:00.000Z"), "2024-03-05");
        assert_eq!(input_date(""), "");
    }

    #[test]
    fn short_day_label() {
        assert_eq!(short_day("2024-03-05"), "Mar 5");
    }
}
