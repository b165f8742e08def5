//! Customer onboarding and verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use backoffice_utils::query::QueryString;

use super::{ApiClient, ApiResult};
use crate::table::{CellValue, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    /// Registered, documents not yet checked.
    Pending,
    Verified,
    Active,
    Suspended,
    Terminated,
}

impl CustomerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Terminated => "terminated",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending Verification",
            Self::Verified => "Verified",
            Self::Active => "Active",
            Self::Suspended => "Suspended",
            Self::Terminated => "Terminated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub customer_number: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub address: String,
    #[serde(default)]
    pub region_id: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub package_name: Option<String>,
    pub status: CustomerStatus,
    pub registered_at: DateTime<Utc>,
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Every property `value` answers for.
    pub const KEYS: &[&str] = &[
        "id",
        "customer_number",
        "name",
        "phone",
        "email",
        "address",
        "region_id",
        "region_name",
        "package_name",
        "status",
        "registered_at",
        "verified_at",
    ];

    pub fn is_verified(&self) -> bool {
        self.status != CustomerStatus::Pending
    }
}

impl TableRow for Customer {
    fn value(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "customer_number" => self.customer_number.as_str().into(),
            "name" => self.name.as_str().into(),
            "phone" => self.phone.as_str().into(),
            "email" => self.email.as_deref().into(),
            "address" => self.address.as_str().into(),
            "region_id" => self.region_id.as_deref().into(),
            "region_name" => self.region_name.as_deref().into(),
            "package_name" => self.package_name.as_deref().into(),
            "status" => self.status.label().into(),
            "registered_at" => self.registered_at.into(),
            "verified_at" => self.verified_at.into(),
            _ => CellValue::Empty,
        }
    }

    fn values(&self) -> Vec<CellValue> {
        Self::KEYS.iter().map(|key| self.value(key)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    pub status: Option<CustomerStatus>,
    pub region_id: Option<String>,
}

impl CustomerFilter {
    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .push_opt("status", self.status.map(CustomerStatus::as_str))
            .push_opt("region_id", self.region_id.as_deref())
    }
}

/// `GET /api/customers`
pub async fn list_customers(client: &ApiClient, filter: &CustomerFilter) -> ApiResult<Vec<Customer>> {
    client.get_list("/customers", &filter.to_query()).await
}

/// `POST /api/customers/{id}/verify`, returning the updated customer.
pub async fn verify_customer(client: &ApiClient, id: &str) -> ApiResult<Customer> {
    let path = format!("/customers/{}/verify", urlencoding::encode(id));
    client.post::<(), _>(&path, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query() {
        let filter = CustomerFilter {
            status: Some(CustomerStatus::Pending),
            region_id: Some("r-02".to_owned()),
        };
        assert_eq!(filter.to_query().to_query(), "?status=pending&region_id=r-02");
        assert_eq!(CustomerFilter::default().to_query().to_query(), "");
    }

    #[test]
    fn test_customer_deserializes_with_optional_fields_missing() {
        let customer: Customer = serde_json::from_value(serde_json::json!({
            "id": "c-1",
            "customer_number": "NL-0001",
            "name": "Budi Santoso",
            "phone": "081234567890",
            "address": "Jl. Merdeka 1",
            "status": "pending",
            "registered_at": "2026-10-01T03:00:00Z"
        }))
        .unwrap();
        assert!(!customer.is_verified());
        assert_eq!(customer.value("email"), CellValue::Empty);
        assert_eq!(customer.value("status"), CellValue::from("Pending Verification"));
    }
}
