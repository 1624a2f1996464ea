use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents, ShardManager};

use crate::{
    bot::handler::Handler, config::Config, error::AppError, model::start_time::StartTime,
    startup::close_database,
};

/// Releases resources before the process exits.
pub struct ShutdownHook {
    db: DatabaseConnection,
    shard_manager: Arc<ShardManager>,
}

impl ShutdownHook {
    pub fn new(db: DatabaseConnection, shard_manager: Arc<ShardManager>) -> Self {
        Self { db, shard_manager }
    }

    /// Closes the database pool, then disconnects every shard.
    pub async fn run(self) {
        tracing::warn!("Shutting down...");

        close_database(self.db).await;
        self.shard_manager.shutdown_all().await;
    }
}

/// Creates the Discord client without connecting it.
///
/// # Arguments
/// - `config` - Application configuration holding the token and cog settings
/// - `db` - Database connection for the handlers and cogs to use
/// - `started_at` - Process start time reported by `/uptime`
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - The token was rejected while building the client
pub async fn init_bot(
    config: Arc<Config>,
    db: DatabaseConnection,
    started_at: StartTime,
) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, config.clone(), started_at);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the Discord bot until it stops or a shutdown signal arrives.
///
/// Either way the shutdown hook runs before this returns.
///
/// # Returns
/// - `Ok(())` - The bot was shut down
/// - `Err(AppError)` - The gateway connection failed
pub async fn start_bot(mut client: Client, db: DatabaseConnection) -> Result<(), AppError> {
    let hook = ShutdownHook::new(db, client.shard_manager.clone());

    tracing::info!("Starting Discord bot...");

    let result = tokio::select! {
        result = client.start_autosharded() => result.map_err(AppError::from),
        _ = shutdown_signal() => Ok(()),
    };

    hook.run().await;

    result
}

/// Completes on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
