use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use super::{Customers, ListPage, PageEvent, spawn};
use crate::api::customers::{Customer, CustomerStatus, verify_customer};
use crate::api::{ApiClient, ApiResult};
use crate::session::Permission;

struct VerifyOutcome {
    id: String,
    previous_status: CustomerStatus,
    previous_verified_at: Option<DateTime<Utc>>,
    result: ApiResult<Customer>,
}

/// The customer list plus the verify action.
///
/// Verifying is optimistic: the row flips to verified immediately and is
/// reverted if the server rejects it.
pub struct CustomersPage {
    list: ListPage<Customers>,
    pending: HashSet<String>,
    tx: flume::Sender<VerifyOutcome>,
    rx: flume::Receiver<VerifyOutcome>,
}

impl CustomersPage {
    pub fn new(client: ApiClient) -> Self {
        Self::from_list(ListPage::new(client))
    }

    pub fn from_list(list: ListPage<Customers>) -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            list,
            pending: HashSet::new(),
            tx,
            rx,
        }
    }

    pub fn list(&self) -> &ListPage<Customers> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListPage<Customers> {
        &mut self.list
    }

    pub fn can_verify(&self) -> bool {
        self.list.client().session().can(Permission::VerifyCustomers)
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    /// Ids of customers with a verify request in flight.
    pub fn pending(&self) -> &HashSet<String> {
        &self.pending
    }

    /// Marks the customer verified and sends the request. Returns `false`
    /// when nothing was sent.
    pub fn verify(&mut self, id: &str) -> bool {
        if !self.can_verify() {
            warn!("Session may not verify customers");
            return false;
        }
        if self.pending.contains(id) {
            return false;
        }
        let table = self.list.table_mut();
        let Some(index) = table.position(|c| c.id == id) else {
            warn!("Customer {id} is not loaded");
            return false;
        };
        let Some(current) = table.rows().get(index) else {
            return false;
        };
        if current.is_verified() {
            return false;
        }
        let previous_status = current.status;
        let previous_verified_at = current.verified_at;

        table.update_row(index, |c| {
            c.status = CustomerStatus::Verified;
            c.verified_at = Some(Utc::now());
        });
        self.pending.insert(id.to_owned());
        info!("Verifying customer {id}");

        let client = self.list.client().clone();
        let tx = self.tx.clone();
        let notify = self.list.notify();
        let id = id.to_owned();
        spawn(async move {
            let result = verify_customer(&client, &id).await;
            let outcome = VerifyOutcome {
                id,
                previous_status,
                previous_verified_at,
                result,
            };
            if tx.send(outcome).is_err() {
                debug!("Customers page dropped before verify finished");
            }
            if let Some(notify) = notify {
                notify();
            }
        });
        true
    }

    /// Applies finished list loads and verify requests.
    pub fn poll(&mut self) -> Vec<PageEvent> {
        let mut events = self.list.poll();
        while let Ok(outcome) = self.rx.try_recv() {
            events.push(self.apply(outcome));
        }
        events
    }

    /// Waits for the newest list load and every pending verify.
    pub async fn settle(&mut self) -> Vec<PageEvent> {
        let mut events = self.list.settle().await;
        events.extend(self.poll());
        while !self.pending.is_empty() {
            match self.rx.recv_async().await {
                Ok(outcome) => events.push(self.apply(outcome)),
                Err(_) => break,
            }
        }
        events
    }

    fn apply(&mut self, outcome: VerifyOutcome) -> PageEvent {
        self.pending.remove(&outcome.id);
        let table = self.list.table_mut();
        let index = table.position(|c| c.id == outcome.id);

        match outcome.result {
            Ok(customer) => {
                info!("Customer {} verified", outcome.id);
                let message = format!("{} verified", customer.name);
                if let Some(index) = index {
                    table.update_row(index, |row| *row = customer);
                }
                PageEvent::ActionSucceeded(message)
            }
            Err(err) => {
                warn!("Verifying customer {} failed: {err}", outcome.id);
                let mut name = outcome.id.clone();
                if let Some(index) = index {
                    table.update_row(index, |row| {
                        row.status = outcome.previous_status;
                        row.verified_at = outcome.previous_verified_at;
                        name = row.name.clone();
                    });
                }
                PageEvent::ActionFailed(format!("Failed to verify {name}: {err}"))
            }
        }
    }
}
