use anyhow::Context;
use better_health::{
    api,
    cli::{output::Output, Cli, Commands},
    types::HealthStatus,
    utils::config::{Config, LogFormat},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let mut config = Config::from_env().context("Failed to load configuration")?;
    cli.apply(&mut config);

    match cli.command() {
        Commands::Serve => serve(config, &output).await,
        Commands::Config => show_config(&config, &output),
        Commands::Probe => probe(config, &output).await,
    }
}

fn init_tracing(config: &Config) {
    // RUST_LOG wins over LOG_LEVEL when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "better_health={level},tower_http={level}",
            level = config.server.log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn serve(config: Config, output: &Output) -> anyhow::Result<()> {
    init_tracing(&config);
    output.banner();

    if config.model.uses_placeholder_key() {
        output.warning("CUSTOM_MODEL_API_KEY is not set; /ai/chat will fail until it is");
    }

    let address = config.bind_address();
    let state = AppState::new(config.clone()).context("Failed to initialize application state")?;
    let app = api::create_app(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!(
        address = %address,
        model_url = %config.model.url,
        origins = ?config.cors.allowed_origins,
        "Better Health server listening"
    );
    output.success(&format!("Listening on http://{}", address));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn show_config(config: &Config, output: &Output) -> anyhow::Result<()> {
    output.header("Configuration");
    output.kv("bind", &config.bind_address());
    output.kv("model url", &config.model.url);
    output.kv("log level", &config.server.log_level);
    output.kv("allowed origins", &config.cors.allowed_origins.join(", "));

    let rendered = serde_json::to_string_pretty(config)?;
    println!("\n{}", rendered);

    if config.model.uses_placeholder_key() {
        output.hint("Set CUSTOM_MODEL_URL and CUSTOM_MODEL_API_KEY in .env to reach your model");
    }
    Ok(())
}

async fn probe(config: Config, output: &Output) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    output.info("Probing the hosted model...");

    let report = state.relay.health_check().await;
    output.health_report(state.relay.endpoint(), &report);

    if report.status != HealthStatus::Healthy {
        std::process::exit(1);
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
