use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use rw_news::{NewsClient, NewsClientConfig};
use rw_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about = "City-safety API: news proxy + red zone reader", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:5000")]
    listen: String,
    /// Backing store URL (falls back to DATABASE_URL, then sqlite:red_zones.db)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let database_url = cli
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:red_zones.db".to_string());

    let api_key = std::env::var("NEWS_API_KEY").context("NEWS_API_KEY must be set")?;
    let mut news_config = NewsClientConfig::new(api_key);
    if let Ok(query) = std::env::var("NEWS_QUERY") {
        news_config = news_config.with_query(query);
    }

    let storage = rw_storage::create_storage(&database_url)
        .await
        .with_context(|| format!("failed to open storage at {}", database_url))?;
    info!("💾 Storage connected ({})", database_url);

    let state = AppState {
        news: Arc::new(NewsClient::new(news_config)),
        red_zones: storage,
    };
    let app = create_app(state).await;

    let listener = tokio::net::TcpListener::bind(&cli.listen)
        .await
        .with_context(|| format!("failed to bind to {}", cli.listen))?;
    info!("🌐 Listening on {}", cli.listen);

    axum::serve(listener, app).await?;

    Ok(())
}
