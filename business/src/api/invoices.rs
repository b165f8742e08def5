//! Monthly billing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use backoffice_utils::format::format_period;
use backoffice_utils::query::QueryString;

use super::{ApiClient, ApiResult};
use crate::table::{CellValue, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Unpaid,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub customer_id: String,
    pub customer_name: String,
    /// Billing month as `YYYY-MM`.
    pub period: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
}

impl Invoice {
    pub const KEYS: &[&str] = &[
        "id",
        "invoice_number",
        "customer_id",
        "customer_name",
        "period",
        "amount",
        "due_date",
        "status",
        "paid_at",
    ];
}

impl TableRow for Invoice {
    fn value(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "invoice_number" => self.invoice_number.as_str().into(),
            "customer_id" => self.customer_id.as_str().into(),
            "customer_name" => self.customer_name.as_str().into(),
            // YYYY-MM sorts chronologically as text
            "period" => self.period.as_str().into(),
            "amount" => self.amount.into(),
            "due_date" => self.due_date.into(),
            "status" => self.status.label().into(),
            "paid_at" => self.paid_at.into(),
            _ => CellValue::Empty,
        }
    }

    fn values(&self) -> Vec<CellValue> {
        let mut values: Vec<CellValue> = Self::KEYS.iter().map(|key| self.value(key)).collect();
        // the month name shown in the table, e.g. "Oktober 2026"
        values.push(format_period(&self.period).into());
        values
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceFilter {
    pub status: Option<InvoiceStatus>,
    /// `YYYY-MM`
    pub period: Option<String>,
}

impl InvoiceFilter {
    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .push_opt("status", self.status.map(InvoiceStatus::as_str))
            .push_opt("period", self.period.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Qris,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRequest {
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// `GET /api/invoices`
pub async fn list_invoices(client: &ApiClient, filter: &InvoiceFilter) -> ApiResult<Vec<Invoice>> {
    client.get_list("/invoices", &filter.to_query()).await
}

/// `POST /api/invoices/{id}/pay`, returning the updated invoice.
pub async fn pay_invoice(
    client: &ApiClient,
    id: &str,
    payment: &PaymentRequest,
) -> ApiResult<Invoice> {
    let path = format!("/invoices/{}/pay", urlencoding::encode(id));
    client.post(&path, Some(payment)).await
}
