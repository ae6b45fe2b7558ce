use async_openai::config::OpenAIConfig;
use async_openai::Client;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agrimater_tts::infrastructure::config::{Config, LogFormat};
use agrimater_tts::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Agrimater TTS Server on {}:{}",
        config.host,
        config.port
    );

    // Create OpenAI client
    tracing::info!(
        model = %config.tts_model,
        voice = %config.tts_voice,
        "Initializing OpenAI TTS client"
    );
    let openai_client = Arc::new(Client::with_config(
        OpenAIConfig::new().with_api_key(config.openai_api_key.clone()),
    ));

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject the OpenAI client)
    let tts_repo = Arc::new(
        agrimater_tts::infrastructure::repositories::OpenAiTtsRepository::new(
            openai_client,
            config.tts_model.clone(),
        ),
    );

    // 2. Instantiate services (inject repositories)
    let tts_service = Arc::new(agrimater_tts::domain::tts::TtsService::new(
        tts_repo,
        config.tts_voice.clone(),
        config.temp_dir.clone(),
    ));

    // 3. Instantiate controllers (inject services)
    let tts_controller = Arc::new(agrimater_tts::controllers::tts::TtsController::new(
        tts_service,
    ));

    // Start HTTP server with all routes
    start_http_server(config, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "agrimater_tts=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "agrimater_tts=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
