//! Route state for page navigation.
//!
//! The dashboard is a flat page switcher; each route maps to one list page
//! and the permission needed to open it.

use serde::{Deserialize, Serialize};

use crate::session::{Permission, Session};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Customers,
    Invoices,
    Technicians,
    Visits,
    Regions,
    Units,
    Packages,
    Revenue,
}

impl Route {
    /// Navigation order.
    pub const ALL: [Route; 8] = [
        Route::Customers,
        Route::Invoices,
        Route::Technicians,
        Route::Visits,
        Route::Regions,
        Route::Units,
        Route::Packages,
        Route::Revenue,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Customers => "Customers",
            Self::Invoices => "Invoices",
            Self::Technicians => "Technicians",
            Self::Visits => "Technician Visits",
            Self::Regions => "Regions",
            Self::Units => "Units",
            Self::Packages => "Packages",
            Self::Revenue => "Revenue Report",
        }
    }

    pub fn permission(self) -> Permission {
        match self {
            Self::Customers => Permission::ViewCustomers,
            Self::Invoices => Permission::ViewInvoices,
            Self::Technicians => Permission::ViewTechnicians,
            Self::Visits => Permission::ViewVisits,
            Self::Regions | Self::Units | Self::Packages => Permission::ViewMasterData,
            Self::Revenue => Permission::ViewReports,
        }
    }

    /// Routes `session` may open, in navigation order.
    pub fn visible_to(session: &Session) -> Vec<Route> {
        Self::ALL
            .into_iter()
            .filter(|route| session.can(route.permission()))
            .collect()
    }
}
