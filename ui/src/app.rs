use backoffice_business::Route;

use crate::{pages, state::State, widgets};

pub struct BackofficeApp {
    state: State,
}

impl BackofficeApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Draws one frame of the dashboard into `ctx`.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.state.poll();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                top_bar(ui, &mut self.state);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let route = self.state.route;
            if !self.state.session.can(route.permission()) {
                ui.heading("Backoffice");
                ui.label("Set BACKOFFICE_API_TOKEN to sign in.");
                return;
            }

            self.state.pages.ensure_loaded(route);
            egui::ScrollArea::vertical().show(ui, |ui| {
                let pages = &mut self.state.pages;
                match route {
                    Route::Customers => pages::customers_page(ui, &mut pages.customers),
                    Route::Invoices => pages::invoices_page(ui, &mut pages.invoices),
                    Route::Technicians => pages::list_page(ui, &mut pages.technicians),
                    Route::Visits => pages::visits_page(ui, &mut pages.visits),
                    Route::Regions => pages::list_page(ui, &mut pages.regions),
                    Route::Units => pages::list_page(ui, &mut pages.units),
                    Route::Packages => pages::list_page(ui, &mut pages.packages),
                    Route::Revenue => pages::list_page(ui, &mut pages.revenue),
                }
            });
        });

        self.state.toasts.show(ctx);
    }
}

fn top_bar(ui: &mut egui::Ui, state: &mut State) {
    for route in Route::visible_to(&state.session) {
        if ui
            .selectable_label(state.route == route, route.title())
            .clicked()
        {
            state.navigate(route);
        }
    }

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        widgets::env_version(ui);
        if let Some(user) = &state.session.user {
            ui.label(format!("{} · {}", user.name, user.role.label()));
        }
    });
}

impl eframe::App for BackofficeApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
