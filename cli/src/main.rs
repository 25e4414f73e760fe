//! CLI entrypoint for ask-your-ads
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use askads_application::{
    BackendClient, ConversationLogger, CopilotPipeline, DashboardState, HandleWebhookUseCase,
    LlmClient, LoadSummaryUseCase, NoConversationLogger, SharedState, ToolServiceFactory,
    default_tiers,
};
use askads_domain::TenantContext;
use askads_infrastructure::{
    ConfigLoader, FileConfig, HmacWebhookVerifier, HttpBackendClient, JsonlConversationLogger,
    McpToolClientFactory, MistralClient,
};
use askads_presentation::{
    ChatRepl, Cli, Command, ConsoleFormatter, progress_for, webhook_routes,
};
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Everything a subcommand needs, built once from the config.
struct App {
    config: FileConfig,
    state: SharedState,
    pipeline: CopilotPipeline,
    summary: LoadSummaryUseCase,
}

impl App {
    fn build(config: FileConfig, quiet: bool) -> Result<Self> {
        let tenant: TenantContext = config.tenant_context();
        let state = DashboardState::shared();

        // === Dependency Injection ===
        let backend: Arc<dyn BackendClient> = Arc::new(
            HttpBackendClient::new(config.backend_settings())
                .context("Failed to create backend client")?,
        );
        let llm: Arc<dyn LlmClient> =
            Arc::new(MistralClient::new(config.mistral_settings(), tenant.clone()));
        let tool_service: Arc<dyn ToolServiceFactory> =
            Arc::new(McpToolClientFactory::new(config.mcp_settings()));

        if !tool_service.is_configured() {
            info!("Tool service bearer token not set; tool tier will be skipped");
        }
        if !llm.is_configured() {
            info!("LLM API key not set; hosted LLM tier will be skipped");
        }

        let tiers = default_tiers(
            Some(tool_service),
            llm,
            backend.clone(),
            &config.copilot_params(),
        );

        let progress = progress_for(quiet, std::io::stderr().is_terminal());

        let conversation_logger: Arc<dyn ConversationLogger> = match &config
            .logging
            .conversation_log
        {
            Some(path) => match JsonlConversationLogger::open(path, &tenant.tenant_id) {
                Some(logger) => {
                    info!("Conversation log: {}", logger.path().display());
                    Arc::new(logger)
                }
                None => Arc::new(NoConversationLogger),
            },
            None => Arc::new(NoConversationLogger),
        };

        let pipeline = CopilotPipeline::new(state.clone(), tenant.clone(), tiers)
            .with_progress(progress)
            .with_conversation_logger(conversation_logger);
        let summary = LoadSummaryUseCase::new(backend, state.clone(), tenant);

        Ok(Self {
            config,
            state,
            pipeline,
            summary,
        })
    }

    async fn ask(&self, question: &str) -> Result<()> {
        // The LLM tier answers from the KPI table; a failed load is not fatal.
        if !self.summary.execute().await {
            warn!("Continuing without KPI context");
        }

        if self.pipeline.handle_turn(question).await.is_none() {
            bail!("Question must not be empty.");
        }

        let state = self.state.lock().await;
        if let Some(reply) = state.transcript.last_assistant() {
            println!("{}", ConsoleFormatter::format_message(reply));
        }
        if state.chat.has_error() {
            bail!("{}", state.chat.last_error);
        }
        Ok(())
    }

    async fn summary(&self, json: bool) -> Result<()> {
        let ok = self.summary.execute().await;
        let state = self.state.lock().await;
        if !ok {
            bail!("{}", state.summary.error);
        }
        if json {
            println!("{}", ConsoleFormatter::format_kpi_json(&state.kpi_rows));
        } else {
            println!("{}", ConsoleFormatter::format_kpi_table(&state.kpi_rows));
        }
        Ok(())
    }

    async fn chat(&self) -> Result<()> {
        if !self.summary.execute().await {
            let state = self.state.lock().await;
            eprintln!("{}", ConsoleFormatter::format_error(&state.summary.error));
        }
        let repl = ChatRepl::new(self.pipeline.clone()).with_summary(self.summary.clone());
        repl.run().await?;
        Ok(())
    }

    async fn serve(&self, bind: Option<String>) -> Result<()> {
        let verifier = HmacWebhookVerifier::new(self.config.webhook_secret());
        if !verifier.is_configured() {
            warn!("Webhook secret not configured; every webhook will be rejected with 500");
        }
        let use_case = HandleWebhookUseCase::new(Arc::new(verifier)).with_sync(self.summary.clone());

        let bind = bind.unwrap_or_else(|| self.config.webhook.bind.clone());
        let addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Webhook endpoint listening on http://{}", addr);
        axum::serve(listener, webhook_routes(use_case))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await?;
        Ok(())
    }
}

/// Install the tracing subscriber. Returns the appender guard when logging to files.
fn init_logging(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &config.logging.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "ask-your-ads.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    let _log_guard = init_logging(cli.verbose, &config);
    info!("Starting ask-your-ads for tenant {}", config.tenant.tenant_id);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let app = App::build(config, cli.quiet)?;
    match command {
        Command::Ask { question } => app.ask(&question).await,
        Command::Chat => app.chat().await,
        Command::Summary { json } => app.summary(json).await,
        Command::Serve { bind } => app.serve(bind).await,
    }
}
