//! Tenant configuration from TOML (`[tenant]` section)

use askads_domain::TenantContext;
use serde::{Deserialize, Serialize};

/// Raw tenant configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTenantConfig {
    pub tenant_id: String,
    pub client_name: String,
    /// Date range key understood by the backend (e.g. `last_30_days`)
    pub date_range: String,
}

impl Default for FileTenantConfig {
    fn default() -> Self {
        let tenant = TenantContext::default();
        Self {
            tenant_id: tenant.tenant_id,
            client_name: tenant.client_name,
            date_range: tenant.date_range,
        }
    }
}

impl FileTenantConfig {
    pub fn to_tenant_context(&self) -> TenantContext {
        TenantContext::new(&self.tenant_id, &self.client_name, &self.date_range)
    }
}
