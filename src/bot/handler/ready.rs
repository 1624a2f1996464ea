//! Ready event handler for bot initialization.
//!
//! Each shard fires `ready` after completing its gateway handshake. The first
//! one to arrive activates the configured cogs and syncs their slash commands;
//! shards arriving concurrently wait for that to finish. Presence is set per
//! shard afterwards since Discord tracks it per connection.

use std::sync::Arc;

use serenity::all::{Context, Ready};
use tokio::sync::OnceCell;

use crate::{
    bot::{
        handler::Handler,
        sync::{sync_commands, CommandRegistrar, HttpRegistrar},
    },
    cog::{
        registry::{load_cogs, CogRegistry, LoadedCogs},
        CogDeps,
    },
    config::Config,
};

/// Handles the ready event when a shard connects to Discord.
///
/// # Arguments
/// - `handler` - Event handler holding configuration and the cog slot
/// - `ctx` - Discord context for syncing commands and setting presence
/// - `ready` - Ready event data containing bot user and shard information
pub async fn handle_ready(handler: &Handler, ctx: Context, ready: Ready) {
    let shard_id = ready.shard.map(|shard| shard.id.0).unwrap_or(ctx.shard_id.0);
    tracing::info!("Shard #{} is ready", shard_id);

    let deps = CogDeps {
        db: handler.db.clone(),
        started_at: handler.started_at,
    };
    let identity = format!("{} (ID: {})", ready.user.name, ready.user.id);

    activate_once(
        &handler.cogs,
        &handler.config,
        &handler.registry,
        &deps,
        &HttpRegistrar::new(&ctx.http),
        &identity,
    )
    .await;

    let presence = &handler.config.presence;
    ctx.set_presence(presence.activity(), presence.status);
}

/// Activates cogs and syncs commands the first time it is called.
///
/// Concurrent callers wait for the first one and all get the same cogs.
///
/// # Arguments
/// - `slot` - Cell holding the activated cogs
/// - `identity` - Bot user, logged once activation finished
pub async fn activate_once(
    slot: &OnceCell<Arc<LoadedCogs>>,
    config: &Config,
    registry: &CogRegistry,
    deps: &CogDeps,
    registrar: &dyn CommandRegistrar,
    identity: &str,
) -> Arc<LoadedCogs> {
    let cogs = slot
        .get_or_init(|| async move {
            let cogs = activate_cogs(config, registry, deps, registrar).await;
            tracing::info!("Logged in as {}", identity);
            cogs
        })
        .await;

    Arc::clone(cogs)
}

/// Loads the allowed cogs and registers their commands.
async fn activate_cogs(
    config: &Config,
    registry: &CogRegistry,
    deps: &CogDeps,
    registrar: &dyn CommandRegistrar,
) -> Arc<LoadedCogs> {
    let report = load_cogs(&config.cogs, registry, deps);
    tracing::info!(
        "Loaded {} cog(s): {}",
        report.loaded.len(),
        report.loaded.names().join(", ")
    );

    let targets = sync_commands(registrar, &config.guild_ids, report.loaded.definitions()).await;
    tracing::debug!("Synced commands on {} target(s)", targets);

    Arc::new(report.loaded)
}
