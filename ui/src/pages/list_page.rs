use backoffice_business::api::invoices::InvoiceStatus;
use backoffice_business::pages::{Invoices, Visits};
use backoffice_business::{FetchStatus, ListPage, Resource};
use backoffice_utils::format::{format_date, format_datetime};
use chrono::Utc;
use egui::{Button, ComboBox, Ui};

use crate::utils::colors::COLOR_RED;
use crate::widgets::data_table;

/// Title, refresh button and fetch status.
pub fn page_header<E: Resource>(ui: &mut Ui, page: &mut ListPage<E>) {
    ui.horizontal(|ui| {
        ui.heading(page.title());

        let loading = page.status().is_loading();
        if ui
            .add_enabled(!loading, Button::new("⟳ Refresh"))
            .clicked()
        {
            page.refresh();
        }

        match page.status() {
            FetchStatus::Idle => {}
            FetchStatus::Loading => {
                ui.spinner();
                ui.label("Loading...");
            }
            FetchStatus::Loaded { at } => {
                ui.weak(format!("Updated {}", format_datetime(*at)));
            }
            FetchStatus::Failed(message) => {
                ui.colored_label(COLOR_RED, message.as_str());
            }
        }
    });
}

fn no_access(ui: &mut Ui) {
    ui.label("You do not have access to this page.");
}

pub fn list_page<E: Resource>(ui: &mut Ui, page: &mut ListPage<E>) {
    if !page.can_view() {
        no_access(ui);
        return;
    }
    page_header(ui, page);
    ui.add_space(8.0);
    data_table(ui, E::ENDPOINT, page.table_mut());
}

/// Invoices with a server-side status filter.
pub fn invoices_page(ui: &mut Ui, page: &mut ListPage<Invoices>) {
    if !page.can_view() {
        no_access(ui);
        return;
    }
    page_header(ui, page);

    let current = page.filter().status;
    let mut selected = current;
    ui.horizontal(|ui| {
        ui.label("Status");
        ComboBox::from_id_salt("invoice_status")
            .selected_text(selected.map_or("All", InvoiceStatus::label))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, None, "All");
                for status in [
                    InvoiceStatus::Unpaid,
                    InvoiceStatus::Paid,
                    InvoiceStatus::Overdue,
                    InvoiceStatus::Cancelled,
                ] {
                    ui.selectable_value(&mut selected, Some(status), status.label());
                }
            });
    });
    if selected != current {
        let mut filter = page.filter().clone();
        filter.status = selected;
        page.set_filter(filter);
    }

    ui.add_space(8.0);
    data_table(ui, Invoices::ENDPOINT, page.table_mut());
}

/// Technician visits, optionally limited to today.
pub fn visits_page(ui: &mut Ui, page: &mut ListPage<Visits>) {
    if !page.can_view() {
        no_access(ui);
        return;
    }
    page_header(ui, page);

    let today = Utc::now().date_naive();
    let mut today_only = page.filter().date.is_some();
    ui.horizontal(|ui| {
        ui.checkbox(&mut today_only, format!("Today only ({})", format_date(today)));
    });
    if today_only != page.filter().date.is_some() {
        let mut filter = page.filter().clone();
        filter.date = today_only.then_some(today);
        page.set_filter(filter);
    }

    ui.add_space(8.0);
    data_table(ui, Visits::ENDPOINT, page.table_mut());
}
