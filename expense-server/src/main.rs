#[macro_use]
extern crate tracing;

use std::error::Error;
use std::path::PathBuf;

use actix_web::{App, HttpServer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use expense_lib::config::Config;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default());
    tracing::subscriber::set_global_default(subscriber)?;
    info!("tracing initialized");

    let config = match get_config_file() {
        Some(config_path) => {
            info!(config_path = %config_path.display(), "Loading config file");
            Config::from_file(config_path)?
        }
        None => Config::from_env()?,
    };

    let (transaction_repo, health_check) =
        expense_repo::sqlx_repo::create_repos(&config.database_url, config.max_pool_size)
            .await?;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(expense_lib::tracing::create_middleware())
            .wrap(expense_lib::cors())
            .configure(expense_lib::app_config_func(
                transaction_repo.clone(),
                health_check.clone(),
            ))
    })
    .bind(("0.0.0.0", config.port))?;

    info!("Server is running on http://localhost:{}", config.port);
    server.run().await?;

    Ok(())
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}
