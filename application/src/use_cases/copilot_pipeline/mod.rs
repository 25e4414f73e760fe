//! Copilot pipeline use case.
//!
//! Turns one user question into exactly one assistant message by walking an
//! ordered list of [`CopilotTier`]s:
//!
//! 1. **Tool service**: MCP session + `list_objects` (needs a bearer token)
//! 2. **Hosted LLM**: chat completion grounded on the KPI rows (needs an API key)
//! 3. **Backend**: the application's own `/ai/query` endpoint (always tried)
//!
//! Each attempt yields a [`TierOutcome`]. A missing credential is `Skipped`
//! silently; a runtime failure is logged and the next tier runs. Only when
//! every tier has been tried without an answer does the turn surface an
//! error banner plus an apology message.
//!
//! State mutations go through [`SharedState`] with the lock held only for
//! the mutation itself.

pub mod tiers;

pub use tiers::{
    BackendTier, CopilotTier, HostedLlmTier, ToolServiceTier, TurnContext, default_tiers,
};

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{CopilotProgressNotifier, NoCopilotProgress};
use crate::ports::provider_error::ProviderError;
use crate::state::SharedState;
use askads_domain::{
    APOLOGY_MESSAGE, ChatMessage, Question, TenantContext, Tier, TierOutcome, TurnReport,
    UNAVAILABLE_MESSAGE,
};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Orchestrates the copilot fallback chain for one dashboard session.
#[derive(Clone)]
pub struct CopilotPipeline {
    state: SharedState,
    tenant: TenantContext,
    tiers: Vec<Arc<dyn CopilotTier>>,
    progress: Arc<dyn CopilotProgressNotifier>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl CopilotPipeline {
    pub fn new(
        state: SharedState,
        tenant: TenantContext,
        tiers: Vec<Arc<dyn CopilotTier>>,
    ) -> Self {
        Self {
            state,
            tenant,
            tiers,
            progress: Arc::new(NoCopilotProgress),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Attach a progress notifier.
    pub fn with_progress(mut self, progress: Arc<dyn CopilotProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Fallback order, first to last.
    pub fn tier_order(&self) -> Vec<Tier> {
        self.tiers.iter().map(|t| t.tier()).collect()
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    /// Process one turn.
    ///
    /// Returns `None` (and touches nothing) when the question is blank.
    /// Otherwise the transcript grows by exactly one user and one assistant
    /// message, and `is_loading` is false again when this returns.
    pub async fn handle_turn(&self, raw_question: &str) -> Option<TurnReport> {
        let Some(question) = Question::try_new(raw_question) else {
            debug!("Ignoring blank copilot question");
            return None;
        };

        let kpi_rows = {
            let mut state = self.state.lock().await;
            state.append(ChatMessage::user(question.content()));
            state.chat.begin();
            state.kpi_rows.clone()
        };

        info!("Copilot turn started ({} tiers)", self.tiers.len());
        self.progress.on_turn_start(question.content());
        self.conversation_logger.log(ConversationEvent::new(
            "turn_started",
            serde_json::json!({ "question": question.content() }),
        ));

        let ctx = TurnContext {
            question: &question,
            kpi_rows: &kpi_rows,
            tenant: &self.tenant,
        };

        let mut report = TurnReport::default();
        let mut answer = None;

        for tier in &self.tiers {
            let name = tier.tier();
            let outcome = self.run_tier(tier.as_ref(), &ctx).await;

            match &outcome {
                TierOutcome::Answered(_) => info!("Copilot tier {} answered", name),
                TierOutcome::Skipped => {
                    debug!("Copilot tier {} not configured, skipping", name);
                    self.progress.on_tier_skipped(name);
                }
                TierOutcome::Failed(cause) => {
                    warn!("Copilot tier {} failed, falling back: {}", name, cause);
                    self.progress.on_tier_failed(name, cause);
                }
            }

            self.conversation_logger.log(ConversationEvent::new(
                "tier_attempt",
                serde_json::json!({
                    "tier": name.as_str(),
                    "outcome": outcome.label(),
                    "cause": match &outcome {
                        TierOutcome::Failed(cause) => Some(cause.as_str()),
                        _ => None,
                    },
                }),
            ));

            if let TierOutcome::Answered(text) = &outcome {
                answer = Some(text.clone());
            }
            report.record(name, outcome);
            if answer.is_some() {
                break;
            }
        }

        {
            let mut state = self.state.lock().await;
            match &answer {
                Some(text) => state.append(ChatMessage::assistant(text.clone())),
                None => {
                    error!("All copilot tiers exhausted: {:?}", report.attempted());
                    state.chat.last_error = UNAVAILABLE_MESSAGE.to_string();
                    state.append(ChatMessage::assistant(APOLOGY_MESSAGE));
                }
            }
            state.chat.finish();
        }

        self.conversation_logger.log(ConversationEvent::new(
            "turn_finished",
            serde_json::json!({
                "answered_by": report.answered_by().map(|t| t.as_str()),
                "reply": answer.as_deref().unwrap_or(APOLOGY_MESSAGE),
            }),
        ));
        self.progress.on_turn_complete(&report);

        Some(report)
    }

    /// Run one tier under its time bound. Panics become `Failed`.
    async fn run_tier(&self, tier: &dyn CopilotTier, ctx: &TurnContext<'_>) -> TierOutcome {
        if !tier.is_configured() {
            return TierOutcome::Skipped;
        }
        self.progress.on_tier_start(tier.tier());

        let attempt = tokio::time::timeout(tier.timeout(), tier.attempt(ctx));
        match AssertUnwindSafe(attempt).catch_unwind().await {
            Ok(Ok(Ok(text))) => TierOutcome::Answered(text),
            Ok(Ok(Err(e))) if e.is_not_configured() => TierOutcome::Skipped,
            Ok(Ok(Err(e))) => TierOutcome::Failed(e.to_string()),
            Ok(Err(_elapsed)) => TierOutcome::Failed(ProviderError::Timeout.to_string()),
            Err(_panic) => TierOutcome::Failed(format!("tier {} panicked", tier.tier())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CopilotParams;
    use crate::ports::backend_client::BackendClient;
    use crate::ports::llm_client::LlmClient;
    use crate::ports::tool_service::{ToolService, ToolServiceFactory};
    use crate::state::DashboardState;
    use askads_domain::KpiRow;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    // ==================== Test Mocks ====================

    #[derive(Default)]
    struct ToolCounters {
        created: AtomicUsize,
        health_checks: AtomicUsize,
        calls: AtomicUsize,
        closed: AtomicUsize,
    }

    #[derive(Clone, Copy, Default)]
    enum Misbehaviour {
        #[default]
        None,
        HangOnHealthCheck,
        PanicOnCall,
    }

    struct MockToolService {
        healthy: bool,
        reply: Result<serde_json::Value, ProviderError>,
        misbehaviour: Misbehaviour,
        counters: Arc<ToolCounters>,
    }

    #[async_trait]
    impl ToolService for MockToolService {
        async fn health_check(&self) -> bool {
            self.counters.health_checks.fetch_add(1, Ordering::SeqCst);
            if let Misbehaviour::HangOnHealthCheck = self.misbehaviour {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
            self.healthy
        }

        async fn call_tool(
            &self,
            _name: &str,
            _arguments: serde_json::Value,
        ) -> Result<serde_json::Value, ProviderError> {
            self.counters.calls.fetch_add(1, Ordering::SeqCst);
            if let Misbehaviour::PanicOnCall = self.misbehaviour {
                panic!("tool call blew up");
            }
            self.reply.clone()
        }

        async fn close(&self) {
            self.counters.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct MockToolFactory {
        configured: bool,
        healthy: bool,
        reply: Result<serde_json::Value, ProviderError>,
        misbehaviour: Misbehaviour,
        counters: Arc<ToolCounters>,
    }

    impl MockToolFactory {
        fn new(healthy: bool, reply: Result<serde_json::Value, ProviderError>) -> Self {
            Self {
                configured: true,
                healthy,
                reply,
                misbehaviour: Misbehaviour::None,
                counters: Arc::new(ToolCounters::default()),
            }
        }

        fn misbehaving(misbehaviour: Misbehaviour) -> Self {
            Self {
                misbehaviour,
                ..Self::new(true, Ok(serde_json::json!({"rows": 1})))
            }
        }

        fn unconfigured() -> Self {
            Self {
                configured: false,
                ..Self::new(true, Ok(serde_json::json!({})))
            }
        }
    }

    impl ToolServiceFactory for MockToolFactory {
        fn is_configured(&self) -> bool {
            self.configured
        }

        fn create(&self) -> Result<Box<dyn ToolService>, ProviderError> {
            self.counters.created.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(MockToolService {
                healthy: self.healthy,
                reply: self.reply.clone(),
                misbehaviour: self.misbehaviour,
                counters: Arc::clone(&self.counters),
            }))
        }
    }

    struct MockLlm {
        configured: bool,
        reply: Result<String, ProviderError>,
        calls: AtomicUsize,
        seen_rows: Mutex<Vec<usize>>,
    }

    impl MockLlm {
        fn new(reply: Result<String, ProviderError>) -> Self {
            Self {
                configured: true,
                reply,
                calls: AtomicUsize::new(0),
                seen_rows: Mutex::new(Vec::new()),
            }
        }

        fn unconfigured() -> Self {
            Self {
                configured: false,
                ..Self::new(Err(ProviderError::NotConfigured("MISTRAL_API_KEY".into())))
            }
        }
    }

    #[async_trait]
    impl LlmClient for MockLlm {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn ask(
            &self,
            _question: &str,
            context_rows: &[KpiRow],
        ) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_rows.lock().unwrap().push(context_rows.len());
            self.reply.clone()
        }
    }

    struct MockBackend {
        reply: Result<String, ProviderError>,
        calls: AtomicUsize,
    }

    impl MockBackend {
        fn new(reply: Result<String, ProviderError>) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BackendClient for MockBackend {
        async fn ask(
            &self,
            _question: &str,
            _tenant: &TenantContext,
        ) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }

        async fn metrics_summary(
            &self,
            _tenant: &TenantContext,
        ) -> Result<Vec<KpiRow>, ProviderError> {
            Ok(vec![])
        }
    }

    struct PanickingTier;

    #[async_trait]
    impl CopilotTier for PanickingTier {
        fn tier(&self) -> Tier {
            Tier::ToolService
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn timeout(&self) -> Duration {
            Duration::from_secs(1)
        }

        async fn attempt(&self, _ctx: &TurnContext<'_>) -> Result<String, ProviderError> {
            panic!("tool tier blew up");
        }
    }

    struct GatedTier {
        gate: Arc<Notify>,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl CopilotTier for GatedTier {
        fn tier(&self) -> Tier {
            Tier::HostedLlm
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn timeout(&self) -> Duration {
            Duration::from_secs(30)
        }

        async fn attempt(&self, _ctx: &TurnContext<'_>) -> Result<String, ProviderError> {
            match self.delay {
                Some(delay) => tokio::time::sleep(delay).await,
                None => self.gate.notified().await,
            }
            Ok("late answer".to_string())
        }
    }

    struct Fixture {
        pipeline: CopilotPipeline,
        state: SharedState,
        tool: Option<Arc<MockToolFactory>>,
        llm: Arc<MockLlm>,
        backend: Arc<MockBackend>,
    }

    fn fixture(tool: Option<MockToolFactory>, llm: MockLlm, backend: MockBackend) -> Fixture {
        let state = DashboardState::shared();
        let tool = tool.map(Arc::new);
        let llm = Arc::new(llm);
        let backend = Arc::new(backend);
        let tiers = default_tiers(
            tool.clone().map(|t| t as Arc<dyn ToolServiceFactory>),
            llm.clone(),
            backend.clone(),
            &CopilotParams::default(),
        );
        let pipeline = CopilotPipeline::new(state.clone(), TenantContext::default(), tiers);
        Fixture {
            pipeline,
            state,
            tool,
            llm,
            backend,
        }
    }

    fn transport_error() -> ProviderError {
        ProviderError::Connection("connection refused".into())
    }

    // ==================== Tests ====================

    #[test]
    fn test_tier_order_is_tool_llm_backend() {
        let f = fixture(
            None,
            MockLlm::unconfigured(),
            MockBackend::new(Ok("x".into())),
        );
        assert_eq!(
            f.pipeline.tier_order(),
            vec![Tier::ToolService, Tier::HostedLlm, Tier::Backend]
        );
    }

    #[tokio::test]
    async fn test_blank_question_is_ignored() {
        let f = fixture(
            Some(MockToolFactory::new(true, Ok(serde_json::json!({})))),
            MockLlm::new(Ok("llm".into())),
            MockBackend::new(Ok("backend".into())),
        );

        assert!(f.pipeline.handle_turn("   ").await.is_none());

        let state = f.state.lock().await;
        assert!(state.transcript.is_empty());
        assert!(!state.chat.is_loading);
        assert_eq!(f.tool.as_ref().unwrap().counters.created.load(Ordering::SeqCst), 0);
        assert_eq!(f.llm.calls.load(Ordering::SeqCst), 0);
        assert_eq!(f.backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_tool_service_answers_first() {
        let f = fixture(
            Some(MockToolFactory::new(
                true,
                Ok(serde_json::json!({"objects": ["campaigns"]})),
            )),
            MockLlm::new(Ok("llm".into())),
            MockBackend::new(Ok("backend".into())),
        );

        let report = f.pipeline.handle_turn("what objects exist?").await.unwrap();
        assert_eq!(report.answered_by(), Some(Tier::ToolService));

        let state = f.state.lock().await;
        let reply = state.transcript.last().unwrap();
        assert!(!reply.is_user());
        assert!(
            reply
                .content()
                .starts_with("MCP tool 'list_objects' executed. Result: ")
        );
        assert!(reply.content().contains("campaigns"));

        let counters = &f.tool.as_ref().unwrap().counters;
        assert_eq!(counters.closed.load(Ordering::SeqCst), 1);
        assert_eq!(f.llm.calls.load(Ordering::SeqCst), 0);
        assert_eq!(f.backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unhealthy_tool_service_falls_back_to_llm() {
        let f = fixture(
            Some(MockToolFactory::new(false, Ok(serde_json::json!({})))),
            MockLlm::new(Ok("ROAS is up 12%".into())),
            MockBackend::new(Ok("backend".into())),
        );

        let report = f.pipeline.handle_turn("how is ROAS?").await.unwrap();

        assert_eq!(report.answered_by(), Some(Tier::HostedLlm));
        let counters = &f.tool.as_ref().unwrap().counters;
        assert_eq!(counters.health_checks.load(Ordering::SeqCst), 1);
        assert_eq!(counters.calls.load(Ordering::SeqCst), 0);
        assert_eq!(counters.closed.load(Ordering::SeqCst), 1);

        let state = f.state.lock().await;
        assert_eq!(state.transcript.last().unwrap().content(), "ROAS is up 12%");
        assert!(state.chat.last_error.is_empty());
    }

    #[tokio::test]
    async fn test_tool_call_error_falls_back_and_closes() {
        let f = fixture(
            Some(MockToolFactory::new(
                true,
                Err(ProviderError::Remote(serde_json::json!({"code": -32000}))),
            )),
            MockLlm::new(Ok("llm".into())),
            MockBackend::new(Ok("backend".into())),
        );

        let report = f.pipeline.handle_turn("q").await.unwrap();

        assert!(matches!(
            report.attempts[0].outcome,
            TierOutcome::Failed(_)
        ));
        assert_eq!(report.answered_by(), Some(Tier::HostedLlm));
        assert_eq!(
            f.tool.as_ref().unwrap().counters.closed.load(Ordering::SeqCst),
            1
        );
        assert!(f.state.lock().await.chat.last_error.is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_tool_service_is_skipped_without_client() {
        let f = fixture(
            Some(MockToolFactory::unconfigured()),
            MockLlm::new(Ok("llm".into())),
            MockBackend::new(Ok("backend".into())),
        );

        let report = f.pipeline.handle_turn("q").await.unwrap();

        assert_eq!(report.attempts[0].outcome, TierOutcome::Skipped);
        assert_eq!(
            f.tool.as_ref().unwrap().counters.created.load(Ordering::SeqCst),
            0
        );
    }

    #[tokio::test]
    async fn test_total_failure_sets_error_and_apology() {
        let f = fixture(
            None,
            MockLlm::unconfigured(),
            MockBackend::new(Err(transport_error())),
        );

        let report = f.pipeline.handle_turn("anything?").await.unwrap();

        assert!(report.is_exhausted());
        assert_eq!(
            report.attempts.iter().map(|a| a.outcome.label()).collect::<Vec<_>>(),
            vec!["skipped", "skipped", "failed"]
        );
        assert_eq!(f.llm.calls.load(Ordering::SeqCst), 0);

        let state = f.state.lock().await;
        assert_eq!(state.chat.last_error, UNAVAILABLE_MESSAGE);
        assert_eq!(state.transcript.len(), 2);
        assert_eq!(state.transcript.last().unwrap().content(), APOLOGY_MESSAGE);
        assert!(!state.chat.is_loading);
    }

    #[tokio::test]
    async fn test_llm_not_configured_at_call_time_is_a_skip() {
        let mut llm = MockLlm::new(Err(ProviderError::NotConfigured("MISTRAL_API_KEY".into())));
        llm.configured = true;
        let f = fixture(None, llm, MockBackend::new(Ok("from backend".into())));

        let report = f.pipeline.handle_turn("q").await.unwrap();

        assert_eq!(report.attempts[1].outcome, TierOutcome::Skipped);
        assert_eq!(report.answered_by(), Some(Tier::Backend));
    }

    #[tokio::test]
    async fn test_llm_failure_falls_back_to_backend() {
        let f = fixture(
            None,
            MockLlm::new(Err(ProviderError::HttpStatus {
                status: 500,
                message: "boom".into(),
            })),
            MockBackend::new(Ok("backend answer".into())),
        );

        let report = f.pipeline.handle_turn("q").await.unwrap();

        assert_eq!(report.answered_by(), Some(Tier::Backend));
        let state = f.state.lock().await;
        assert_eq!(state.transcript.last().unwrap().content(), "backend answer");
        assert!(state.chat.last_error.is_empty());
    }

    #[tokio::test]
    async fn test_transcript_grows_by_two_per_turn() {
        let f = fixture(
            None,
            MockLlm::new(Ok("llm".into())),
            MockBackend::new(Err(transport_error())),
        );

        for (i, q) in ["one", "two", "three"].iter().enumerate() {
            f.pipeline.handle_turn(q).await.unwrap();
            let state = f.state.lock().await;
            assert_eq!(state.transcript.len(), (i + 1) * 2);
        }
        f.pipeline.handle_turn("").await;

        let state = f.state.lock().await;
        assert_eq!(state.transcript.len(), 6);
        assert!(state.transcript.is_well_formed());
    }

    #[tokio::test]
    async fn test_error_is_cleared_by_next_turn() {
        let f = fixture(
            None,
            MockLlm::unconfigured(),
            MockBackend::new(Err(transport_error())),
        );
        f.pipeline.handle_turn("first").await;
        assert_eq!(f.state.lock().await.chat.last_error, UNAVAILABLE_MESSAGE);

        let ok = fixture(None, MockLlm::new(Ok("fine".into())), MockBackend::new(Ok("b".into())));
        let pipeline = CopilotPipeline::new(
            f.state.clone(),
            TenantContext::default(),
            default_tiers(None, ok.llm.clone(), ok.backend.clone(), &CopilotParams::default()),
        );
        pipeline.handle_turn("second").await;

        let state = f.state.lock().await;
        assert!(state.chat.last_error.is_empty());
        assert_eq!(state.transcript.len(), 4);
    }

    #[tokio::test]
    async fn test_llm_sees_current_kpi_rows() {
        let f = fixture(
            None,
            MockLlm::new(Ok("llm".into())),
            MockBackend::new(Ok("b".into())),
        );
        f.state.lock().await.kpi_rows = vec![
            KpiRow {
                platform: "google_ads".into(),
                total_spend: 10.0,
                total_clicks: 1,
                total_conversions: 1,
                total_revenue: 20.0,
            };
            3
        ];

        f.pipeline.handle_turn("q").await;

        assert_eq!(*f.llm.seen_rows.lock().unwrap(), vec![3]);
    }

    #[tokio::test]
    async fn test_panicking_tier_does_not_stop_the_chain() {
        let state = DashboardState::shared();
        let backend = Arc::new(MockBackend::new(Ok("still here".into())));
        let tiers: Vec<Arc<dyn CopilotTier>> = vec![
            Arc::new(PanickingTier),
            Arc::new(BackendTier::new(backend, Duration::from_secs(60))),
        ];
        let pipeline = CopilotPipeline::new(state.clone(), TenantContext::default(), tiers);

        let report = pipeline.handle_turn("q").await.unwrap();

        assert!(matches!(report.attempts[0].outcome, TierOutcome::Failed(_)));
        let state = state.lock().await;
        assert_eq!(state.transcript.last().unwrap().content(), "still here");
        assert!(!state.chat.is_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_tier_times_out() {
        let state = DashboardState::shared();
        let backend = Arc::new(MockBackend::new(Ok("backend".into())));
        let tiers: Vec<Arc<dyn CopilotTier>> = vec![
            Arc::new(GatedTier {
                gate: Arc::new(Notify::new()),
                delay: Some(Duration::from_secs(3600)),
            }),
            Arc::new(BackendTier::new(backend, Duration::from_secs(60))),
        ];
        let pipeline = CopilotPipeline::new(state.clone(), TenantContext::default(), tiers);

        let report = pipeline.handle_turn("q").await.unwrap();

        assert_eq!(
            report.attempts[0].outcome,
            TierOutcome::Failed("Request timed out".to_string())
        );
        assert_eq!(report.answered_by(), Some(Tier::Backend));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_tool_health_check_still_closes_client() {
        let f = fixture(
            Some(MockToolFactory::misbehaving(Misbehaviour::HangOnHealthCheck)),
            MockLlm::new(Ok("llm answer".into())),
            MockBackend::new(Ok("backend".into())),
        );

        let report = f.pipeline.handle_turn("q").await.unwrap();

        assert_eq!(
            report.attempts[0].outcome,
            TierOutcome::Failed("Request timed out".to_string())
        );
        assert_eq!(report.answered_by(), Some(Tier::HostedLlm));
        let counters = &f.tool.as_ref().unwrap().counters;
        assert_eq!(counters.health_checks.load(Ordering::SeqCst), 1);
        assert_eq!(counters.calls.load(Ordering::SeqCst), 0);
        assert_eq!(counters.closed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_panicking_tool_call_still_closes_client() {
        let f = fixture(
            Some(MockToolFactory::misbehaving(Misbehaviour::PanicOnCall)),
            MockLlm::new(Ok("llm answer".into())),
            MockBackend::new(Ok("backend".into())),
        );

        let report = f.pipeline.handle_turn("q").await.unwrap();

        assert!(matches!(report.attempts[0].outcome, TierOutcome::Failed(_)));
        assert_eq!(report.answered_by(), Some(Tier::HostedLlm));
        let counters = &f.tool.as_ref().unwrap().counters;
        assert_eq!(counters.calls.load(Ordering::SeqCst), 1);
        assert_eq!(counters.closed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_loading_is_visible_while_tier_in_flight() {
        let state = DashboardState::shared();
        let gate = Arc::new(Notify::new());
        let tiers: Vec<Arc<dyn CopilotTier>> = vec![Arc::new(GatedTier {
            gate: Arc::clone(&gate),
            delay: None,
        })];
        let pipeline = CopilotPipeline::new(state.clone(), TenantContext::default(), tiers);

        let handle = tokio::spawn(async move { pipeline.handle_turn("slow one").await });

        loop {
            {
                let s = state.lock().await;
                if s.transcript.len() == 1 {
                    assert!(s.chat.is_loading);
                    break;
                }
            }
            tokio::task::yield_now().await;
        }

        gate.notify_one();
        handle.await.unwrap();

        let s = state.lock().await;
        assert!(!s.chat.is_loading);
        assert_eq!(s.transcript.last().unwrap().content(), "late answer");
    }
}
