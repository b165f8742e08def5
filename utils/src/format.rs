//! Display formatting for amounts, percentages, dates and phone numbers.
//!
//! The back office runs in Indonesian locale: `.` groups thousands, `,` is the
//! decimal separator, money is Rupiah without minor units, and wall-clock
//! times are shown in WIB (UTC+7).

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// WIB offset from UTC, in hours.
const WIB_OFFSET_SECS: i32 = 7 * 3600;

/// Groups the digits of `value` in threes using `.`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Rounds to a whole number and splits off the sign.
///
/// Non-finite input is treated as zero, and values that round to zero never
/// carry a minus sign.
fn split_rounded(amount: f64) -> (bool, u64) {
    if !amount.is_finite() {
        return (false, 0);
    }
    let magnitude = amount.abs().round() as u64;
    (amount < 0.0 && magnitude > 0, magnitude)
}

/// Formats an amount as Rupiah: `1500000.0` -> `"Rp 1.500.000"`.
pub fn format_currency(amount: f64) -> String {
    let (negative, magnitude) = split_rounded(amount);
    let sign = if negative { "-" } else { "" };
    format!("{sign}Rp {}", group_thousands(magnitude))
}

/// Formats a whole number with thousands separators: `12500.0` -> `"12.500"`.
pub fn format_number(value: f64) -> String {
    let (negative, magnitude) = split_rounded(value);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{}", group_thousands(magnitude))
}

/// Formats a value that is already a percentage: `12.5` -> `"12,5%"`.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "-".to_owned();
    }
    let text = format!("{value:.decimals$}").replace('.', ",");
    // "-0,0" reads as a glitch in reports
    let text = match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == ',') => rest.to_owned(),
        _ => text,
    };
    format!("{text}%")
}

/// Formats a ratio in `0..=1` as a percentage: `0.125` -> `"12,5%"`.
pub fn format_ratio_as_percentage(ratio: f64, decimals: usize) -> String {
    format_percentage(ratio * 100.0, decimals)
}

/// `"19 Okt 2026"`
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_SHORT[date.month0() as usize],
        date.year()
    )
}

/// `"19 Oktober 2026"`
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Formats a UTC timestamp in WIB: `"19 Okt 2026 21:05"`.
pub fn format_datetime(timestamp: DateTime<Utc>) -> String {
    let Some(wib) = FixedOffset::east_opt(WIB_OFFSET_SECS) else {
        return format!("{} {}", format_date(timestamp.date_naive()), timestamp.format("%H:%M"));
    };
    let local = timestamp.with_timezone(&wib);
    format!("{} {}", format_date(local.date_naive()), local.format("%H:%M"))
}

/// Formats the month of a date, used for billing periods: `"Oktober 2026"`.
pub fn format_month(date: NaiveDate) -> String {
    format!("{} {}", MONTHS[date.month0() as usize], date.year())
}

/// Formats a `YYYY-MM` period string, returning the input unchanged when it
/// does not parse.
pub fn format_period(period: &str) -> String {
    NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d")
        .map(format_month)
        .unwrap_or_else(|_| period.to_owned())
}

/// Normalizes an Indonesian phone number to international form.
///
/// `"0812-3456-7890"` -> `"+6281234567890"`. Numbers that already start with
/// `+` keep their country code; anything else is returned digits-only.
pub fn format_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('+') {
        format!("+{digits}")
    } else if let Some(rest) = digits.strip_prefix('0') {
        format!("+62{rest}")
    } else if digits.starts_with("62") {
        format!("+{digits}")
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    #[test]
    fn test_currency_groups_thousands() {
        assert_eq!(format_currency(1_500_000.0), "Rp 1.500.000");
        assert_eq!(format_currency(999.0), "Rp 999");
        assert_eq!(format_currency(1000.0), "Rp 1.000");
        assert_eq!(format_currency(0.0), "Rp 0");
    }

    #[test]
    fn test_currency_rounds_and_signs() {
        assert_eq!(format_currency(-2500.0), "-Rp 2.500");
        assert_eq!(format_currency(1234.6), "Rp 1.235");
        assert_eq!(format_currency(-0.4), "Rp 0");
        assert_eq!(format_currency(f64::NAN), "Rp 0");
    }

    #[test]
    fn test_number() {
        assert_eq!(format_number(12_500.0), "12.500");
        assert_eq!(format_number(-1_234_567.0), "-1.234.567");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(12.5, 1), "12,5%");
        assert_eq!(format_percentage(100.0, 0), "100%");
        assert_eq!(format_percentage(-0.01, 1), "0,0%");
        assert_eq!(format_percentage(f64::INFINITY, 1), "-");
        assert_eq!(format_ratio_as_percentage(0.125, 1), "12,5%");
        assert_eq!(format_ratio_as_percentage(0.5, 2), "50,00%");
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        assert_eq!(format_date(date), "19 Okt 2026");
        assert_eq!(format_date_long(date), "19 Oktober 2026");
        assert_eq!(format_month(date), "Oktober 2026");
    }

    #[test]
    fn test_datetime_is_shown_in_wib() {
        let ts = Utc
            .with_ymd_and_hms(2026, 10, 19, 14, 5, 0)
            .single()
            .expect("valid timestamp");
        assert_eq!(format_datetime(ts), "19 Okt 2026 21:05");

        // crosses midnight into the next local day
        let late = Utc
            .with_ymd_and_hms(2026, 12, 31, 20, 0, 0)
            .single()
            .expect("valid timestamp");
        assert_eq!(format_datetime(late), "1 Jan 2027 03:00");
    }

    #[test]
    fn test_datetime_at_range_end_does_not_overflow() {
        let text = format_datetime(DateTime::<Utc>::MAX_UTC);
        assert!(text.ends_with(":59"), "{text}");
    }

    #[test]
    fn test_period() {
        assert_eq!(format_period("2026-03"), "Maret 2026");
        assert_eq!(format_period("not-a-period"), "not-a-period");
    }

    #[test]
    fn test_phone() {
        assert_eq!(format_phone("0812-3456-7890"), "+6281234567890");
        assert_eq!(format_phone("6281234567890"), "+6281234567890");
        assert_eq!(format_phone("+65 9123 4567"), "+6591234567");
        assert_eq!(format_phone("  "), "");
    }
}
