use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, Member, User};

use crate::{
    bot::{handler::error::handle_error, outlet::SerenityOutlet},
    model::member::MemberInfo,
    service::greeting::{GreetingOutcome, GreetingService},
};

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(db: &DatabaseConnection, ctx: Context, new_member: Member) {
    let member = MemberInfo::from_member(&new_member);
    let outlet = SerenityOutlet::new(&ctx);

    match GreetingService::new(db).welcome(&member, &outlet).await {
        Ok(outcome) => log_outcome("welcome", &member, outcome),
        Err(e) => handle_error("guild_member_addition", &e),
    }
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    member_data_if_available: Option<Member>,
) {
    let member = MemberInfo::from_departed(guild_id, &user, member_data_if_available.as_ref());
    let outlet = SerenityOutlet::new(&ctx);

    match GreetingService::new(db).goodbye(&member, &outlet).await {
        Ok(outcome) => log_outcome("goodbye", &member, outcome),
        Err(e) => handle_error("guild_member_removal", &e),
    }
}

fn log_outcome(kind: &str, member: &MemberInfo, outcome: GreetingOutcome) {
    match outcome {
        GreetingOutcome::Sent(channel_id) => tracing::debug!(
            "Sent {} message for {} in guild {} to channel {}",
            kind,
            member.display_name,
            member.guild_id,
            channel_id
        ),
        skipped => tracing::debug!(
            "Skipped {} message for {} in guild {}: {:?}",
            kind,
            member.display_name,
            member.guild_id,
            skipped
        ),
    }
}
