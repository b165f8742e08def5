//! Field technicians and their scheduled visits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use backoffice_utils::query::QueryString;

use super::{ApiClient, ApiResult};
use crate::table::{CellValue, TableRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub active: bool,
    #[serde(default)]
    pub open_visits: u32,
}

impl Technician {
    pub const KEYS: &[&str] = &[
        "id",
        "name",
        "phone",
        "region_name",
        "skills",
        "active",
        "open_visits",
    ];
}

impl TableRow for Technician {
    fn value(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "phone" => self.phone.as_str().into(),
            "region_name" => self.region_name.as_deref().into(),
            "skills" => self.skills.join(", ").into(),
            "active" => self.active.into(),
            "open_visits" => self.open_visits.into(),
            _ => CellValue::Empty,
        }
    }

    fn values(&self) -> Vec<CellValue> {
        Self::KEYS.iter().map(|key| self.value(key)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitPurpose {
    Survey,
    Installation,
    Repair,
    Dismantle,
}

impl VisitPurpose {
    pub fn label(self) -> &'static str {
        match self {
            Self::Survey => "Survey",
            Self::Installation => "Installation",
            Self::Repair => "Repair",
            Self::Dismantle => "Dismantle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl VisitStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicianVisit {
    pub id: String,
    pub technician_id: String,
    pub technician_name: String,
    pub customer_name: String,
    pub address: String,
    pub scheduled_date: NaiveDate,
    /// `HH:MM`, when a slot was booked.
    #[serde(default)]
    pub scheduled_time: Option<String>,
    pub purpose: VisitPurpose,
    pub status: VisitStatus,
}

impl TechnicianVisit {
    pub const KEYS: &[&str] = &[
        "id",
        "technician_id",
        "technician_name",
        "customer_name",
        "address",
        "scheduled_date",
        "scheduled_time",
        "purpose",
        "status",
    ];
}

impl TableRow for TechnicianVisit {
    fn value(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "technician_id" => self.technician_id.as_str().into(),
            "technician_name" => self.technician_name.as_str().into(),
            "customer_name" => self.customer_name.as_str().into(),
            "address" => self.address.as_str().into(),
            "scheduled_date" => self.scheduled_date.into(),
            "scheduled_time" => self.scheduled_time.as_deref().into(),
            "purpose" => self.purpose.label().into(),
            "status" => self.status.label().into(),
            _ => CellValue::Empty,
        }
    }

    fn values(&self) -> Vec<CellValue> {
        Self::KEYS.iter().map(|key| self.value(key)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitFilter {
    pub date: Option<NaiveDate>,
}

impl VisitFilter {
    pub fn to_query(&self) -> QueryString {
        QueryString::new().push_opt("date", self.date.map(|d| d.format("%Y-%m-%d")))
    }
}

/// `GET /api/technicians`
pub async fn list_technicians(client: &ApiClient) -> ApiResult<Vec<Technician>> {
    client.get_list("/technicians", &QueryString::new()).await
}

/// `GET /api/technician-visits`
pub async fn list_visits(client: &ApiClient, filter: &VisitFilter) -> ApiResult<Vec<TechnicianVisit>> {
    client.get_list("/technician-visits", &filter.to_query()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_filter_formats_date() {
        let filter = VisitFilter {
            date: NaiveDate::from_ymd_opt(2026, 10, 19),
        };
        assert_eq!(filter.to_query().to_query(), "?date=2026-10-19");
        assert!(VisitFilter::default().to_query().is_empty());
    }

    #[test]
    fn test_technician_skills_are_searchable() {
        let technician = Technician {
            id: "t-1".to_owned(),
            name: "Joko".to_owned(),
            phone: "0811".to_owned(),
            region_name: None,
            skills: vec!["FTTH".to_owned(), "Wireless".to_owned()],
            active: true,
            open_visits: 2,
        };
        assert_eq!(technician.value("skills"), CellValue::from("FTTH, Wireless"));
        assert!(technician.values().iter().any(|v| v.matches("wireless")));
    }
}
