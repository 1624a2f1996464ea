use serenity::all::{GuildId, Member, Mentionable, User};

/// The member a greeting is about, reduced to what templates can reference.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberInfo {
    pub guild_id: u64,
    /// Nickname, global display name or username, substituted for `{name}`.
    pub display_name: String,
    /// Legacy discriminator, `"0"` for migrated accounts; substituted for `{tag}`.
    pub tag: String,
    /// `<@id>` mention, substituted for `{@user}`.
    pub mention: String,
}

impl MemberInfo {
    /// Builds the info for a member that just joined.
    pub fn from_member(member: &Member) -> Self {
        Self {
            guild_id: member.guild_id.get(),
            display_name: member.display_name().to_string(),
            tag: tag(&member.user),
            mention: member.mention().to_string(),
        }
    }

    /// Builds the info for a member that left.
    ///
    /// Discord only guarantees the user on removal; the cached member, when
    /// available, still provides the guild nickname.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the user left
    /// - `user` - User delivered with the removal event
    /// - `member` - Cached member data, if the cache had it
    pub fn from_departed(guild_id: GuildId, user: &User, member: Option<&Member>) -> Self {
        let display_name = member
            .and_then(|m| m.nick.as_deref())
            .unwrap_or_else(|| user.display_name());

        Self {
            guild_id: guild_id.get(),
            display_name: display_name.to_string(),
            tag: tag(user),
            mention: user.mention().to_string(),
        }
    }
}

fn tag(user: &User) -> String {
    user.discriminator
        .map(|d| format!("{:04}", d.get()))
        .unwrap_or_else(|| "0".to_string())
}
