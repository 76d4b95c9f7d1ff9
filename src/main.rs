use teegen::{logger, Config};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    logger::init_with_config(logger::LoggerConfig::from_app_config(&config))?;

    for warning in &config.warnings {
        log::warn!("⚠️  {}", warning);
    }

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    if config.gateway.api_key.is_none() {
        log::error!("❌ GATEWAY_API_KEY is not set; design requests will fail until it is");
    }

    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), &config);

    teegen::server::run(config).await?;
    Ok(())
}
