use backoffice_business::api::customers::{Customer, CustomerStatus};
use backoffice_business::pages::Customers;
use backoffice_business::{CustomersPage, Resource};
use egui::{ComboBox, Ui};

use super::page_header;
use crate::widgets::{DataTableWidget, data_table};

const STATUS_FILTERS: [CustomerStatus; 5] = [
    CustomerStatus::Pending,
    CustomerStatus::Verified,
    CustomerStatus::Active,
    CustomerStatus::Suspended,
    CustomerStatus::Terminated,
];

pub fn customers_page(ui: &mut Ui, page: &mut CustomersPage) {
    if !page.list().can_view() {
        ui.label("You do not have access to this page.");
        return;
    }
    page_header(ui, page.list_mut());

    let current = page.list().filter().status;
    let mut selected = current;
    ui.horizontal(|ui| {
        ui.label("Status");
        ComboBox::from_id_salt("customer_status")
            .selected_text(selected.map_or("All", CustomerStatus::label))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, None, "All");
                for status in STATUS_FILTERS {
                    ui.selectable_value(&mut selected, Some(status), status.label());
                }
            });
    });
    if selected != current {
        let mut filter = page.list().filter().clone();
        filter.status = selected;
        page.list_mut().set_filter(filter);
    }
    ui.add_space(8.0);

    if !page.can_verify() {
        data_table(ui, Customers::ENDPOINT, page.list_mut().table_mut());
        return;
    }

    let pending = page.pending().clone();
    let output = DataTableWidget::new(Customers::ENDPOINT, page.list_mut().table_mut())
        .row_actions("Action", 80.0, |ui, customer: &Customer| {
            if customer.status != CustomerStatus::Pending {
                return None;
            }
            if pending.contains(&customer.id) {
                ui.spinner();
                return None;
            }
            ui.small_button("Verify")
                .clicked()
                .then(|| customer.id.clone())
        })
        .show(ui);

    if let Some(id) = output.action {
        page.verify(&id);
    }
}
