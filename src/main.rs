use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use nexus_progress::application::use_cases::ResolveTokenUseCase;
use nexus_progress::infrastructure::{
    AppConfig, CliArgs, KeyringTokenStorage, ProgressClient, StorageManager,
};
use nexus_progress::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(
        version = nexus_progress::VERSION,
        api = %config.api_base_url,
        "Starting nexus-progress"
    );

    let resolver = ResolveTokenUseCase::new(Arc::new(KeyringTokenStorage::new()));

    if args.forget_token {
        resolver.forget().await?;
        println!("Stored token removed from the system keyring");
        return Ok(());
    }

    let token = match resolver.execute(args.token.clone(), args.save_token).await? {
        Some(resolved) => {
            info!(
                source = %resolved.source,
                persisted = resolved.persisted,
                "Using API token"
            );
            Some(resolved.token)
        }
        None => None,
    };

    let client = ProgressClient::new(config.api_base_url.clone(), config.request_timeout())?
        .with_token(token);
    let app = App::new(Arc::new(client), &config.ui);

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
