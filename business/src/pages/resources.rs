//! The list endpoints shown by the dashboard and how their rows render.

use std::future::Future;

use backoffice_utils::format::{
    format_currency, format_date, format_number, format_period, format_phone,
    format_ratio_as_percentage,
};

use super::Resource;
use crate::api::customers::{self, Customer, CustomerFilter, CustomerStatus};
use crate::api::invoices::{self, Invoice, InvoiceFilter, InvoiceStatus};
use crate::api::master_data::{self, Package, Region, Unit};
use crate::api::reports::{self, RevenueRange, RevenueRow};
use crate::api::technicians::{self, Technician, TechnicianVisit, VisitFilter, VisitStatus};
use crate::api::{ApiClient, ApiResult};
use crate::route::Route;
use crate::table::{Cell, CellValue, Column, TableOptions, Tone};

pub fn customer_status_tone(status: CustomerStatus) -> Tone {
    match status {
        CustomerStatus::Pending => Tone::Warning,
        CustomerStatus::Verified | CustomerStatus::Active => Tone::Positive,
        CustomerStatus::Suspended => Tone::Negative,
        CustomerStatus::Terminated => Tone::Muted,
    }
}

pub fn invoice_status_tone(status: InvoiceStatus) -> Tone {
    match status {
        InvoiceStatus::Paid => Tone::Positive,
        InvoiceStatus::Unpaid => Tone::Warning,
        InvoiceStatus::Overdue => Tone::Negative,
        InvoiceStatus::Cancelled => Tone::Muted,
    }
}

pub fn visit_status_tone(status: VisitStatus) -> Tone {
    match status {
        VisitStatus::Scheduled => Tone::Default,
        VisitStatus::InProgress => Tone::Warning,
        VisitStatus::Completed => Tone::Positive,
        VisitStatus::Cancelled => Tone::Muted,
    }
}

fn currency_cell(value: &CellValue) -> Cell {
    value
        .as_number()
        .map(|n| Cell::new(format_currency(n)))
        .unwrap_or_default()
}

fn date_cell(value: &CellValue) -> Cell {
    value
        .as_date()
        .map(|d| Cell::new(format_date(d)))
        .unwrap_or_default()
}

fn phone_cell(value: &CellValue) -> Cell {
    value
        .as_text()
        .map(|p| Cell::new(format_phone(p)))
        .unwrap_or_default()
}

fn period_cell(value: &CellValue) -> Cell {
    value
        .as_text()
        .map(|p| Cell::new(format_period(p)))
        .unwrap_or_default()
}

fn active_cell(value: &CellValue) -> Cell {
    match value.as_bool() {
        Some(true) => Cell::new("Active").with_tone(Tone::Positive),
        Some(false) => Cell::new("Inactive").with_tone(Tone::Muted),
        None => Cell::default(),
    }
}

pub struct Customers;

impl Resource for Customers {
    type Item = Customer;
    type Filter = CustomerFilter;

    const ROUTE: Route = Route::Customers;
    const ENDPOINT: &'static str = "/customers";

    fn columns() -> Vec<Column<Customer>> {
        vec![
            Column::new("customer_number", "Customer No.").sortable().width(110.0),
            Column::new("name", "Name").sortable(),
            Column::new("phone", "Phone").width(140.0).render(|v, _| phone_cell(v)),
            Column::new("region_name", "Region").sortable().width(120.0),
            Column::new("package_name", "Package").width(120.0),
            Column::new("status", "Status")
                .sortable()
                .width(150.0)
                .render(|_, c: &Customer| {
                    Cell::new(c.status.label()).with_tone(customer_status_tone(c.status))
                }),
            Column::new("registered_at", "Registered")
                .sortable()
                .width(110.0)
                .render(|v, _| date_cell(v)),
        ]
    }

    fn fetch(
        client: ApiClient,
        filter: CustomerFilter,
    ) -> impl Future<Output = ApiResult<Vec<Customer>>> + Send + 'static {
        async move { customers::list_customers(&client, &filter).await }
    }

    fn table_options() -> TableOptions {
        TableOptions::default()
            .search_placeholder("Search name, phone, customer no...")
            .empty_message("No customers found")
    }
}

pub struct Invoices;

impl Resource for Invoices {
    type Item = Invoice;
    type Filter = InvoiceFilter;

    const ROUTE: Route = Route::Invoices;
    const ENDPOINT: &'static str = "/invoices";

    fn columns() -> Vec<Column<Invoice>> {
        vec![
            Column::new("invoice_number", "Invoice No.").sortable().width(150.0),
            Column::new("customer_name", "Customer").sortable(),
            Column::new("period", "Period")
                .sortable()
                .width(120.0)
                .render(|v, _| period_cell(v)),
            Column::new("amount", "Amount")
                .sortable()
                .width(120.0)
                .render(|v, _| currency_cell(v)),
            Column::new("due_date", "Due")
                .sortable()
                .width(110.0)
                .render(|v, _| date_cell(v)),
            Column::new("status", "Status")
                .sortable()
                .width(100.0)
                .render(|_, i: &Invoice| {
                    Cell::new(i.status.label()).with_tone(invoice_status_tone(i.status))
                }),
        ]
    }

    fn fetch(
        client: ApiClient,
        filter: InvoiceFilter,
    ) -> impl Future<Output = ApiResult<Vec<Invoice>>> + Send + 'static {
        async move { invoices::list_invoices(&client, &filter).await }
    }

    fn table_options() -> TableOptions {
        TableOptions::default().empty_message("No invoices for this period")
    }
}

pub struct Technicians;

impl Resource for Technicians {
    type Item = Technician;
    type Filter = ();

    const ROUTE: Route = Route::Technicians;
    const ENDPOINT: &'static str = "/technicians";

    fn columns() -> Vec<Column<Technician>> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("phone", "Phone").width(140.0).render(|v, _| phone_cell(v)),
            Column::new("region_name", "Region").sortable().width(120.0),
            Column::new("skills", "Skills"),
            Column::new("open_visits", "Open Visits").sortable().width(90.0),
            Column::new("active", "Status").width(80.0).render(|v, _| active_cell(v)),
        ]
    }

    fn fetch(
        client: ApiClient,
        _filter: (),
    ) -> impl Future<Output = ApiResult<Vec<Technician>>> + Send + 'static {
        async move { technicians::list_technicians(&client).await }
    }
}

pub struct Visits;

impl Resource for Visits {
    type Item = TechnicianVisit;
    type Filter = VisitFilter;

    const ROUTE: Route = Route::Visits;
    const ENDPOINT: &'static str = "/technician-visits";

    fn columns() -> Vec<Column<TechnicianVisit>> {
        vec![
            Column::new("scheduled_date", "Schedule")
                .sortable()
                .width(140.0)
                .render(|v, visit: &TechnicianVisit| {
                    let mut cell = date_cell(v);
                    if let Some(time) = &visit.scheduled_time {
                        cell.text = format!("{} {time}", cell.text);
                    }
                    cell
                }),
            Column::new("technician_name", "Technician").sortable().width(140.0),
            Column::new("customer_name", "Customer").sortable(),
            Column::new("address", "Address"),
            Column::new("purpose", "Purpose").sortable().width(100.0),
            Column::new("status", "Status")
                .sortable()
                .width(100.0)
                .render(|_, visit: &TechnicianVisit| {
                    Cell::new(visit.status.label()).with_tone(visit_status_tone(visit.status))
                }),
        ]
    }

    fn fetch(
        client: ApiClient,
        filter: VisitFilter,
    ) -> impl Future<Output = ApiResult<Vec<TechnicianVisit>>> + Send + 'static {
        async move { technicians::list_visits(&client, &filter).await }
    }

    fn table_options() -> TableOptions {
        TableOptions::default().empty_message("No visits scheduled")
    }
}

pub struct Regions;

impl Resource for Regions {
    type Item = Region;
    type Filter = ();

    const ROUTE: Route = Route::Regions;
    const ENDPOINT: &'static str = "/regions";

    fn columns() -> Vec<Column<Region>> {
        vec![
            Column::new("code", "Code").sortable().width(80.0),
            Column::new("name", "Name").sortable(),
            Column::new("unit_count", "Units").sortable().width(80.0),
            Column::new("customer_count", "Customers")
                .sortable()
                .width(100.0)
                .render(|v, _| Cell::new(format_number(v.as_number().unwrap_or_default()))),
        ]
    }

    fn fetch(
        client: ApiClient,
        _filter: (),
    ) -> impl Future<Output = ApiResult<Vec<Region>>> + Send + 'static {
        async move { master_data::list_regions(&client).await }
    }
}

pub struct Units;

impl Resource for Units {
    type Item = Unit;
    type Filter = ();

    const ROUTE: Route = Route::Units;
    const ENDPOINT: &'static str = "/units";

    fn columns() -> Vec<Column<Unit>> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("region_name", "Region").sortable().width(140.0),
            Column::new("address", "Address"),
        ]
    }

    fn fetch(
        client: ApiClient,
        _filter: (),
    ) -> impl Future<Output = ApiResult<Vec<Unit>>> + Send + 'static {
        async move { master_data::list_units(&client).await }
    }
}

pub struct Packages;

impl Resource for Packages {
    type Item = Package;
    type Filter = ();

    const ROUTE: Route = Route::Packages;
    const ENDPOINT: &'static str = "/packages";

    fn columns() -> Vec<Column<Package>> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("speed_mbps", "Speed")
                .sortable()
                .width(90.0)
                .render(|v, _| Cell::new(format!("{v} Mbps"))),
            Column::new("monthly_price", "Monthly Price")
                .sortable()
                .width(130.0)
                .render(|v, _| currency_cell(v)),
            Column::new("active", "Status").width(80.0).render(|v, _| active_cell(v)),
        ]
    }

    fn fetch(
        client: ApiClient,
        _filter: (),
    ) -> impl Future<Output = ApiResult<Vec<Package>>> + Send + 'static {
        async move { master_data::list_packages(&client).await }
    }
}

pub struct Revenue;

impl Resource for Revenue {
    type Item = RevenueRow;
    type Filter = RevenueRange;

    const ROUTE: Route = Route::Revenue;
    const ENDPOINT: &'static str = "/reports/revenue";

    fn columns() -> Vec<Column<RevenueRow>> {
        vec![
            Column::new("period", "Period")
                .sortable()
                .width(140.0)
                .render(|v, _| period_cell(v)),
            Column::new("invoiced", "Invoiced")
                .sortable()
                .render(|v, _| currency_cell(v)),
            Column::new("collected", "Collected")
                .sortable()
                .render(|v, _| currency_cell(v)),
            Column::new("outstanding", "Outstanding")
                .sortable()
                .render(|v, _| {
                    let cell = currency_cell(v);
                    if v.as_number().is_some_and(|n| n > 0.0) {
                        cell.with_tone(Tone::Negative)
                    } else {
                        cell
                    }
                }),
            Column::new("collection_rate", "Collection Rate")
                .sortable()
                .width(120.0)
                .render(|v, _| {
                    let rate = v.as_number().unwrap_or_default();
                    let tone = if rate >= 0.9 {
                        Tone::Positive
                    } else if rate >= 0.7 {
                        Tone::Warning
                    } else {
                        Tone::Negative
                    };
                    Cell::new(format_ratio_as_percentage(rate, 1)).with_tone(tone)
                }),
        ]
    }

    fn fetch(
        client: ApiClient,
        range: RevenueRange,
    ) -> impl Future<Output = ApiResult<Vec<RevenueRow>>> + Send + 'static {
        async move { reports::revenue_report(&client, &range).await }
    }

    fn table_options() -> TableOptions {
        TableOptions::default()
            .searchable(false)
            .empty_message("No revenue recorded in this range")
    }
}
