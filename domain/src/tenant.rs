//! Tenant context value object

use serde::{Deserialize, Serialize};

/// Identifies whose data the dashboard shows and over which range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantContext {
    pub tenant_id: String,
    pub client_name: String,
    pub date_range: String,
}

impl TenantContext {
    pub fn new(
        tenant_id: impl Into<String>,
        client_name: impl Into<String>,
        date_range: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            client_name: client_name.into(),
            date_range: date_range.into(),
        }
    }
}

impl Default for TenantContext {
    fn default() -> Self {
        Self::new("default-tenant", "default-client", "last_30_days")
    }
}
