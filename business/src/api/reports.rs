//! Revenue reporting.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use backoffice_utils::format::format_period;
use backoffice_utils::query::QueryString;

use super::{ApiClient, ApiResult};
use crate::table::{CellValue, TableRow};

/// Revenue for one billing month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRow {
    /// `YYYY-MM`
    pub period: String,
    pub invoiced: f64,
    pub collected: f64,
    pub outstanding: f64,
    #[serde(default)]
    pub invoice_count: u32,
}

impl RevenueRow {
    pub const KEYS: &[&str] = &[
        "period",
        "invoiced",
        "collected",
        "outstanding",
        "invoice_count",
        "collection_rate",
    ];

    /// Share of the invoiced amount collected, in `0..=1`.
    pub fn collection_rate(&self) -> f64 {
        if self.invoiced > 0.0 {
            self.collected / self.invoiced
        } else {
            0.0
        }
    }
}

impl TableRow for RevenueRow {
    fn value(&self, key: &str) -> CellValue {
        match key {
            "period" => self.period.as_str().into(),
            "invoiced" => self.invoiced.into(),
            "collected" => self.collected.into(),
            "outstanding" => self.outstanding.into(),
            "invoice_count" => self.invoice_count.into(),
            "collection_rate" => self.collection_rate().into(),
            _ => CellValue::Empty,
        }
    }

    fn values(&self) -> Vec<CellValue> {
        let mut values: Vec<CellValue> = Self::KEYS.iter().map(|key| self.value(key)).collect();
        values.push(format_period(&self.period).into());
        values
    }
}

/// Inclusive range of billing months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl RevenueRange {
    /// The twelve months ending with the month of `today`.
    pub fn trailing_year(today: NaiveDate) -> Self {
        let to = today.with_day(1).unwrap_or(today);
        let from = to.checked_sub_months(Months::new(11)).unwrap_or(to);
        Self { from, to }
    }

    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .push("from", self.from.format("%Y-%m"))
            .push("to", self.to.format("%Y-%m"))
    }
}

impl Default for RevenueRange {
    fn default() -> Self {
        Self::trailing_year(chrono::Utc::now().date_naive())
    }
}

/// `GET /api/reports/revenue?from=YYYY-MM&to=YYYY-MM`
pub async fn revenue_report(client: &ApiClient, range: &RevenueRange) -> ApiResult<Vec<RevenueRow>> {
    client.get_list("/reports/revenue", &range.to_query()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_year() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let range = RevenueRange::trailing_year(today);
        assert_eq!(range.to_query().to_query(), "?from=2025-11&to=2026-10");
    }

    #[test]
    fn test_collection_rate() {
        let row = RevenueRow {
            period: "2026-09".to_owned(),
            invoiced: 200.0,
            collected: 150.0,
            outstanding: 50.0,
            invoice_count: 2,
        };
        assert_eq!(row.collection_rate(), 0.75);
        assert_eq!(
            RevenueRow {
                invoiced: 0.0,
                ..row
            }
            .collection_rate(),
            0.0
        );
    }
}
