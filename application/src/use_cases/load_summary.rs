//! Load Summary use case.
//!
//! Fetches the KPI summary from the backend and stores it in the shared
//! dashboard state, with user-facing error texts per failure class.

use crate::ports::backend_client::BackendClient;
use crate::ports::provider_error::ProviderError;
use crate::state::SharedState;
use askads_domain::TenantContext;
use std::sync::Arc;
use tracing::{error, info};

/// Use case for refreshing the dashboard KPI table.
#[derive(Clone)]
pub struct LoadSummaryUseCase {
    backend: Arc<dyn BackendClient>,
    state: SharedState,
    tenant: TenantContext,
}

impl LoadSummaryUseCase {
    pub fn new(backend: Arc<dyn BackendClient>, state: SharedState, tenant: TenantContext) -> Self {
        Self {
            backend,
            state,
            tenant,
        }
    }

    /// Refresh the KPI rows. Returns `true` on success.
    ///
    /// `summary.is_loading` is cleared on every path. Rows are left untouched
    /// on failure.
    pub async fn execute(&self) -> bool {
        {
            let mut state = self.state.lock().await;
            state.summary.is_loading = true;
            state.summary.error.clear();
        }

        let result = self.backend.metrics_summary(&self.tenant).await;

        let mut state = self.state.lock().await;
        let ok = match result {
            Ok(rows) => {
                info!("Loaded {} KPI rows for {}", rows.len(), self.tenant.client_name);
                state.kpi_rows = rows;
                true
            }
            Err(e) => {
                error!("Error loading summary: {}", e);
                state.summary.error = summary_error_message(&e);
                false
            }
        };
        state.summary.is_loading = false;
        ok
    }
}

/// Banner text shown above the KPI table.
pub fn summary_error_message(error: &ProviderError) -> String {
    match error {
        ProviderError::HttpStatus { status, .. } => format!(
            "API Error: {}. Please ensure the api-backend service is running and accessible.",
            status
        ),
        ProviderError::Connection(_) => {
            "Connection Error: Cannot connect to the API backend. Is the service running?"
                .to_string()
        }
        other => format!("An unexpected error occurred: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DashboardState;
    use askads_domain::KpiRow;
    use async_trait::async_trait;

    struct MockBackend {
        summary: Result<Vec<KpiRow>, ProviderError>,
    }

    #[async_trait]
    impl BackendClient for MockBackend {
        async fn ask(
            &self,
            _question: &str,
            _tenant: &TenantContext,
        ) -> Result<String, ProviderError> {
            unreachable!("summary loading never queries the copilot endpoint")
        }

        async fn metrics_summary(
            &self,
            _tenant: &TenantContext,
        ) -> Result<Vec<KpiRow>, ProviderError> {
            self.summary.clone()
        }
    }

    fn use_case(summary: Result<Vec<KpiRow>, ProviderError>) -> (LoadSummaryUseCase, SharedState) {
        let state = DashboardState::shared();
        let uc = LoadSummaryUseCase::new(
            Arc::new(MockBackend { summary }),
            state.clone(),
            TenantContext::default(),
        );
        (uc, state)
    }

    #[tokio::test]
    async fn test_rows_are_stored() {
        let row = KpiRow {
            platform: "meta_ads".into(),
            total_spend: 50.0,
            total_clicks: 10,
            total_conversions: 2,
            total_revenue: 120.0,
        };
        let (uc, state) = use_case(Ok(vec![row.clone()]));

        assert!(uc.execute().await);

        let s = state.lock().await;
        assert_eq!(s.kpi_rows, vec![row]);
        assert!(!s.summary.is_loading);
        assert!(s.summary.error.is_empty());
    }

    #[tokio::test]
    async fn test_http_status_message() {
        let (uc, state) = use_case(Err(ProviderError::HttpStatus {
            status: 502,
            message: "Bad Gateway".into(),
        }));

        assert!(!uc.execute().await);

        let s = state.lock().await;
        assert_eq!(
            s.summary.error,
            "API Error: 502. Please ensure the api-backend service is running and accessible."
        );
        assert!(!s.summary.is_loading);
    }

    #[test]
    fn test_connection_and_other_messages() {
        assert_eq!(
            summary_error_message(&ProviderError::Connection("refused".into())),
            "Connection Error: Cannot connect to the API backend. Is the service running?"
        );
        assert_eq!(
            summary_error_message(&ProviderError::Protocol("bad json".into())),
            "An unexpected error occurred: Protocol error: bad json"
        );
    }
}
