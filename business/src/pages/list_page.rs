use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};

use super::{FetchStatus, PageEvent, Resource, spawn};
use crate::api::{ApiClient, ApiResult};
use crate::table::DataTable;

/// Called from the fetch task once a result is queued, so the UI can wake up
/// and poll.
pub type Notify = Arc<dyn Fn() + Send + Sync>;

struct Delivery<T> {
    generation: u64,
    result: ApiResult<Vec<T>>,
}

/// A data table that loads its rows from `E`'s endpoint.
pub struct ListPage<E: Resource> {
    client: ApiClient,
    filter: E::Filter,
    table: DataTable<E::Item>,
    status: FetchStatus,
    /// Id of the newest refresh; deliveries from older ones are dropped.
    generation: u64,
    tx: flume::Sender<Delivery<E::Item>>,
    rx: flume::Receiver<Delivery<E::Item>>,
    notify: Option<Notify>,
}

impl<E: Resource> ListPage<E> {
    pub fn new(client: ApiClient) -> Self {
        let (tx, rx) = flume::unbounded();
        let options = E::table_options().default_page_size(client.config().default_page_size);
        Self {
            client,
            filter: E::default_filter(),
            table: DataTable::with_options(E::columns(), options),
            status: FetchStatus::Idle,
            generation: 0,
            tx,
            rx,
            notify: None,
        }
    }

    pub fn with_notify(mut self, notify: Notify) -> Self {
        self.notify = Some(notify);
        self
    }

    pub fn title(&self) -> &'static str {
        E::title()
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn can_view(&self) -> bool {
        self.client.session().can(E::permission())
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn filter(&self) -> &E::Filter {
        &self.filter
    }

    pub fn table(&self) -> &DataTable<E::Item> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DataTable<E::Item> {
        &mut self.table
    }

    pub(crate) fn notify(&self) -> Option<Notify> {
        self.notify.clone()
    }

    /// Fetch-on-mount: starts the first load. Returns whether a fetch was
    /// started.
    pub fn ensure_loaded(&mut self) -> bool {
        if self.status != FetchStatus::Idle {
            return false;
        }
        self.refresh();
        true
    }

    /// Replaces the filter and refetches.
    pub fn set_filter(&mut self, filter: E::Filter) -> u64 {
        self.filter = filter;
        self.refresh()
    }

    /// Starts a fetch and returns its generation. Any fetch still in flight
    /// becomes stale.
    pub fn refresh(&mut self) -> u64 {
        if !self.can_view() {
            warn!("Session may not view {}, not fetching", E::ENDPOINT);
            self.status = FetchStatus::Failed("Not allowed".to_owned());
            return self.generation;
        }

        self.generation += 1;
        let generation = self.generation;
        self.status = FetchStatus::Loading;
        info!("Fetching {} (generation {generation})", E::ENDPOINT);

        let request = E::fetch(self.client.clone(), self.filter.clone());
        let tx = self.tx.clone();
        let notify = self.notify.clone();
        spawn(async move {
            let result = request.await;
            if tx.send(Delivery { generation, result }).is_err() {
                debug!("{} page dropped before generation {generation} arrived", E::ENDPOINT);
            }
            if let Some(notify) = notify {
                notify();
            }
        });
        generation
    }

    /// Applies every queued result. Call once per frame.
    pub fn poll(&mut self) -> Vec<PageEvent> {
        let mut events = Vec::new();
        while let Ok(delivery) = self.rx.try_recv() {
            events.extend(self.apply(delivery));
        }
        events
    }

    /// Waits until the newest fetch has been applied.
    pub async fn settle(&mut self) -> Vec<PageEvent> {
        let mut events = self.poll();
        while self.status.is_loading() {
            match self.rx.recv_async().await {
                Ok(delivery) => events.extend(self.apply(delivery)),
                Err(_) => break,
            }
        }
        events
    }

    fn apply(&mut self, delivery: Delivery<E::Item>) -> Option<PageEvent> {
        if delivery.generation != self.generation {
            debug!(
                "Dropping stale {} result (generation {}, current {})",
                E::ENDPOINT,
                delivery.generation,
                self.generation
            );
            return None;
        }

        match delivery.result {
            Ok(rows) => {
                let count = rows.len();
                info!("Loaded {count} rows from {}", E::ENDPOINT);
                self.table.replace_rows(rows);
                self.status = FetchStatus::Loaded { at: Utc::now() };
                Some(PageEvent::Loaded { count })
            }
            Err(err) => {
                warn!("Fetching {} failed: {err}", E::ENDPOINT);
                let message = format!("Failed to load {}: {err}", E::title().to_lowercase());
                self.status = FetchStatus::Failed(message.clone());
                Some(PageEvent::Failed(message))
            }
        }
    }
}
