//! Heterogeneous cell values.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use ustr::Ustr;

/// A single property of a row, as the table sees it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    /// Missing or null property.
    #[default]
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::DateTime(ts) => Some(ts.date_naive()),
            _ => None,
        }
    }

    /// Display text used when a column has no custom renderer.
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Whether the display text contains `needle`, which must already be
    /// lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.to_string().to_lowercase().contains(needle)
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Date(_) | Self::DateTime(_) => 3,
            Self::Text(_) => 4,
        }
    }

    /// Total order used for sorting.
    ///
    /// Values of the same kind compare naturally; dates and timestamps are
    /// compared chronologically with dates taken at midnight UTC. Different
    /// kinds order as `Empty < Bool < Number < Date < Text`. NaN compares
    /// equal to every number.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::DateTime(a), Self::DateTime(b)) => a.cmp(b),
            (Self::Date(a), Self::DateTime(b)) => a.and_time(NaiveTime::MIN).cmp(&b.naive_utc()),
            (Self::DateTime(a), Self::Date(b)) => a.naive_utc().cmp(&b.and_time(NaiveTime::MIN)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::DateTime(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M")),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<Ustr> for CellValue {
    fn from(s: Ustr) -> Self {
        Self::Text(s.as_str().to_owned())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u64> for CellValue {
    fn from(n: u64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::DateTime(ts)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Empty,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Self::Empty, Self::Number),
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CellValue::from("Budi").display(), "Budi");
        assert_eq!(CellValue::from(30).display(), "30");
        assert_eq!(CellValue::from(2.5).display(), "2.5");
        assert_eq!(CellValue::from(true).display(), "true");
        assert_eq!(CellValue::Empty.display(), "");
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        assert_eq!(CellValue::from(date).display(), "2026-10-19");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let value = CellValue::from("Ani");
        assert!(value.matches("an"));
        assert!(!value.matches("bu"));
        assert!(CellValue::from(1250).matches("25"));
        assert!(CellValue::Empty.matches(""));
        assert!(!CellValue::Empty.matches("x"));
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(
            CellValue::from(9).compare(&CellValue::from(10)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::from(f64::NAN).compare(&CellValue::from(1)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_dates_compare_with_timestamps() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        let later = day
            .and_hms_opt(8, 0, 0)
            .expect("valid time")
            .and_utc();
        assert_eq!(
            CellValue::from(day).compare(&CellValue::from(later)),
            Ordering::Less
        );
    }

    #[test]
    fn test_mixed_kinds_have_fixed_order() {
        assert_eq!(
            CellValue::Empty.compare(&CellValue::from(false)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::from("a").compare(&CellValue::from(1)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({"a": null, "b": 3, "c": "x", "d": [1]});
        assert_eq!(CellValue::from(&json["a"]), CellValue::Empty);
        assert_eq!(CellValue::from(&json["b"]), CellValue::Number(3.0));
        assert_eq!(CellValue::from(&json["c"]), CellValue::from("x"));
        assert_eq!(CellValue::from(&json["d"]), CellValue::from("[1]"));
    }
}
