//! Regions, service units and internet packages.

use serde::{Deserialize, Serialize};

use backoffice_utils::query::QueryString;

use super::{ApiClient, ApiResult};
use crate::table::{CellValue, TableRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub unit_count: u32,
    #[serde(default)]
    pub customer_count: u32,
}

impl Region {
    pub const KEYS: &[&str] = &["id", "code", "name", "unit_count", "customer_count"];
}

impl TableRow for Region {
    fn value(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "code" => self.code.as_str().into(),
            "name" => self.name.as_str().into(),
            "unit_count" => self.unit_count.into(),
            "customer_count" => self.customer_count.into(),
            _ => CellValue::Empty,
        }
    }

    fn values(&self) -> Vec<CellValue> {
        Self::KEYS.iter().map(|key| self.value(key)).collect()
    }
}

/// A service unit (branch or POP) inside a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub name: String,
    pub region_id: String,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Unit {
    pub const KEYS: &[&str] = &["id", "name", "region_id", "region_name", "address"];
}

impl TableRow for Unit {
    fn value(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "region_id" => self.region_id.as_str().into(),
            "region_name" => self.region_name.as_deref().into(),
            "address" => self.address.as_deref().into(),
            _ => CellValue::Empty,
        }
    }

    fn values(&self) -> Vec<CellValue> {
        Self::KEYS.iter().map(|key| self.value(key)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub speed_mbps: u32,
    pub monthly_price: f64,
    pub active: bool,
}

impl Package {
    pub const KEYS: &[&str] = &["id", "name", "speed_mbps", "monthly_price", "active"];
}

impl TableRow for Package {
    fn value(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "speed_mbps" => self.speed_mbps.into(),
            "monthly_price" => self.monthly_price.into(),
            "active" => self.active.into(),
            _ => CellValue::Empty,
        }
    }

    fn values(&self) -> Vec<CellValue> {
        Self::KEYS.iter().map(|key| self.value(key)).collect()
    }
}

/// `GET /api/regions`
pub async fn list_regions(client: &ApiClient) -> ApiResult<Vec<Region>> {
    client.get_list("/regions", &QueryString::new()).await
}

/// `GET /api/units`
pub async fn list_units(client: &ApiClient) -> ApiResult<Vec<Unit>> {
    client.get_list("/units", &QueryString::new()).await
}

/// `GET /api/packages`
pub async fn list_packages(client: &ApiClient) -> ApiResult<Vec<Package>> {
    client.get_list("/packages", &QueryString::new()).await
}
