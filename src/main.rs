use clap::Parser;
use contact_mailer::adapters::http::CONTACT_PATH;
use contact_mailer::utils::{logger, validation::Validate};
use contact_mailer::{router, ContactHandler, ResendClient, ServerConfig};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting contact-mailer");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let addr = SocketAddr::new(config.host.parse()?, config.port);

    let sender = ResendClient::from_config(&config);
    let handler = Arc::new(ContactHandler::new(sender, config));
    let app = router(handler);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("📮 Listening on {} (POST {})", addr, CONTACT_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
