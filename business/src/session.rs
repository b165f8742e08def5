//! Who is using the dashboard and what they may do.
//!
//! A [`Session`] is built once by the shell and handed to the API client and
//! to every page at construction; nothing reads it from global state.

use std::env::vars;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Finance,
    CustomerService,
    Technician,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Finance => "Finance",
            Self::CustomerService => "Customer Service",
            Self::Technician => "Technician",
        }
    }

    pub fn permissions(self) -> &'static [Permission] {
        use Permission::*;
        match self {
            Self::Admin => &[
                ViewCustomers,
                VerifyCustomers,
                ViewInvoices,
                MarkInvoicesPaid,
                ViewTechnicians,
                ViewVisits,
                ViewMasterData,
                ViewReports,
            ],
            Self::Finance => &[ViewCustomers, ViewInvoices, MarkInvoicesPaid, ViewReports],
            Self::CustomerService => &[ViewCustomers, VerifyCustomers, ViewInvoices, ViewVisits],
            Self::Technician => &[ViewTechnicians, ViewVisits],
        }
    }
}

impl FromStr for Role {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "admin" => Ok(Self::Admin),
            "finance" => Ok(Self::Finance),
            "customer_service" | "cs" => Ok(Self::CustomerService),
            "technician" => Ok(Self::Technician),
            other => Err(ConfigError::Env(format!("unknown role {other:?}"))),
        }
    }
}

/// A page or action right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    ViewCustomers,
    VerifyCustomers,
    ViewInvoices,
    MarkInvoicesPaid,
    ViewTechnicians,
    ViewVisits,
    ViewMasterData,
    ViewReports,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Default, Deserialize)]
struct RawSession {
    backoffice_api_token: Option<String>,
    backoffice_user_id: Option<String>,
    backoffice_user_name: Option<String>,
    backoffice_user_role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(user: SessionUser, token: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            token: Some(token.into()),
        }
    }

    /// Reads the operator session from `BACKOFFICE_API_TOKEN` and
    /// `BACKOFFICE_USER_*`. Without a token the session is anonymous.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw: RawSession =
            serde_env::from_iter(vars).map_err(|e| ConfigError::Env(e.to_string()))?;
        let Some(token) = raw.backoffice_api_token.filter(|t| !t.is_empty()) else {
            log::warn!("BACKOFFICE_API_TOKEN is not set, running anonymously");
            return Ok(Self::anonymous());
        };
        let role = raw
            .backoffice_user_role
            .as_deref()
            .map(Role::from_str)
            .transpose()?
            .unwrap_or(Role::Admin);
        let user = SessionUser {
            id: raw.backoffice_user_id.unwrap_or_else(|| "local".to_owned()),
            name: raw
                .backoffice_user_name
                .unwrap_or_else(|| "Operator".to_owned()),
            role,
        };
        log::info!("Signed in as {} ({})", user.name, role.label());
        Ok(Self::new(user, token))
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Anonymous sessions can do nothing.
    pub fn can(&self, permission: Permission) -> bool {
        self.role()
            .is_some_and(|role| role.permissions().contains(&permission))
    }
}
