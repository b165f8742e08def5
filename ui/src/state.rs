use backoffice_business::pages::{
    Invoices, Notify, Packages, Regions, Revenue, Technicians, Units, Visits,
};
use backoffice_business::{
    ApiClient, BusinessConfig, CustomersPage, ListPage, PageEvent, Resource, Route, Session,
};

use crate::widgets::{Toast, Toasts};

/// One page per route. Each keeps its rows and view state while another
/// route is shown.
pub struct Pages {
    pub customers: CustomersPage,
    pub invoices: ListPage<Invoices>,
    pub technicians: ListPage<Technicians>,
    pub visits: ListPage<Visits>,
    pub regions: ListPage<Regions>,
    pub units: ListPage<Units>,
    pub packages: ListPage<Packages>,
    pub revenue: ListPage<Revenue>,
}

impl Pages {
    pub fn new(client: &ApiClient, notify: Option<Notify>) -> Self {
        fn page<E: Resource>(client: &ApiClient, notify: Option<&Notify>) -> ListPage<E> {
            let page = ListPage::new(client.clone());
            match notify {
                Some(notify) => page.with_notify(notify.clone()),
                None => page,
            }
        }

        Self {
            customers: CustomersPage::from_list(page(client, notify.as_ref())),
            invoices: page(client, notify.as_ref()),
            technicians: page(client, notify.as_ref()),
            visits: page(client, notify.as_ref()),
            regions: page(client, notify.as_ref()),
            units: page(client, notify.as_ref()),
            packages: page(client, notify.as_ref()),
            revenue: page(client, notify.as_ref()),
        }
    }

    /// Fetch-on-mount for `route`.
    pub fn ensure_loaded(&mut self, route: Route) -> bool {
        match route {
            Route::Customers => self.customers.list_mut().ensure_loaded(),
            Route::Invoices => self.invoices.ensure_loaded(),
            Route::Technicians => self.technicians.ensure_loaded(),
            Route::Visits => self.visits.ensure_loaded(),
            Route::Regions => self.regions.ensure_loaded(),
            Route::Units => self.units.ensure_loaded(),
            Route::Packages => self.packages.ensure_loaded(),
            Route::Revenue => self.revenue.ensure_loaded(),
        }
    }

    /// Applies every finished request, on every page.
    pub fn poll(&mut self) -> Vec<PageEvent> {
        let mut events = self.customers.poll();
        events.extend(self.invoices.poll());
        events.extend(self.technicians.poll());
        events.extend(self.visits.poll());
        events.extend(self.regions.poll());
        events.extend(self.units.poll());
        events.extend(self.packages.poll());
        events.extend(self.revenue.poll());
        events
    }
}

/// The main application state.
pub struct State {
    pub session: Session,
    pub route: Route,
    pub pages: Pages,
    pub toasts: Toasts,
}

impl State {
    pub fn new(config: BusinessConfig, session: Session, notify: Option<Notify>) -> Self {
        let client = ApiClient::new(config, session.clone());
        let route = Route::visible_to(&session)
            .first()
            .copied()
            .unwrap_or_default();
        Self {
            pages: Pages::new(&client, notify),
            session,
            route,
            toasts: Toasts::default(),
        }
    }

    /// State against a mock API at `base_url`.
    pub fn test(base_url: String, session: Session) -> Self {
        Self::new(BusinessConfig::new(base_url), session, None)
    }

    pub fn navigate(&mut self, route: Route) {
        if route != self.route {
            log::info!("Navigating to {}", route.title());
            self.route = route;
        }
    }

    /// Polls every page and turns its events into toasts.
    pub fn poll(&mut self) {
        for event in self.pages.poll() {
            if let Some(toast) = Toast::from_event(&event) {
                self.toasts.push(toast);
            }
        }
    }
}
