mod bot;
mod cog;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;
mod version;

use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    model::start_time::StartTime,
    version::{VersionChecker, LOCAL_VERSION},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Arc::new(Config::from_env()?);
    let started_at = StartTime::now();

    let http_client = startup::setup_reqwest_client()?;
    VersionChecker::new(http_client, config.upstream_version_url.clone())
        .run(LOCAL_VERSION)
        .await;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting nameless v{}", LOCAL_VERSION);

    let client = bot::start::init_bot(config, db.clone(), started_at).await?;
    bot::start::start_bot(client, db).await
}
