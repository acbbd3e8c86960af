#[macro_use]
extern crate tracing;

use std::error::Error;
use std::path::PathBuf;

use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use expense_lib::config::Config;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default());
    tracing::subscriber::set_global_default(subscriber).context("Unable to set up tracing")?;
    info!("tracing initialized");

    if let Ok(env_file) = dotenvy::dotenv() {
        info!(path = %env_file.display(), "Loaded environment file");
    }

    let config = match get_config_file() {
        Some(config_path) => {
            info!(path = %config_path.display(), "Reading config file");
            Config::from_file(config_path)?
        }
        None => Config::from_env()?,
    };
    let error_reporting = config.error_reporting();
    info!(environment = ?config.environment, ?error_reporting, "Loaded config");

    let repos = expense_repo::sqlx_repo::create_repos(
        config.database.connect_options(),
        config.database.max_connections,
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(expense_lib::tracing::create_middleware())
            .wrap(expense_lib::error::error_reporting(error_reporting))
            .configure(expense_lib::app_config_func(repos.clone()))
    })
    .bind(("0.0.0.0", config.port))?;

    info!("Server running on http://localhost:{}", config.port);
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
