//! Welcome and goodbye messages.
//!
//! When a member joins or leaves, the guild's settings decide whether a message
//! is sent: the greeting must be enabled, its template non-empty and its channel
//! resolvable. Templates support `{guild}`, `{name}`, `{tag}` and `{@user}`;
//! goodbye messages leave `{@user}` untouched since the member is gone and a
//! mention would not resolve.

use std::fmt;

use sea_orm::DatabaseConnection;
use serenity::all::ChannelId;
use serenity::async_trait;

use crate::{
    data::GuildSettingsRepository,
    error::AppError,
    model::{guild_settings::GuildSettings, member::MemberInfo},
};

/// Where greetings are delivered.
///
/// Implemented over Serenity's cache and HTTP client by the bot, and by
/// recording fakes in tests.
#[async_trait]
pub trait MessageOutlet: Send + Sync {
    /// Looks up a channel or thread of the guild, `None` if it is not known.
    fn resolve(&self, guild_id: u64, channel_id: u64) -> Option<ChannelId>;

    /// Name of the guild, substituted for `{guild}`.
    async fn guild_name(&self, guild_id: u64) -> String;

    /// Sends a plain text message to a resolved channel.
    async fn send(&self, channel_id: ChannelId, content: String) -> Result<(), AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingKind {
    Welcome,
    Goodbye,
}

impl fmt::Display for GreetingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreetingKind::Welcome => write!(f, "welcome"),
            GreetingKind::Goodbye => write!(f, "goodbye"),
        }
    }
}

/// What happened to a greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingOutcome {
    Sent(ChannelId),
    Disabled,
    EmptyTemplate,
    ChannelUnresolved,
}

/// Substitutes member details into a greeting template.
///
/// The template is scanned once, so substituted values are never scanned
/// again: a guild named `{name} fans` renders as is. `{@user}` is only known
/// to welcomes; any other text, including unknown tokens, is kept verbatim.
///
/// # Arguments
/// - `template` - The configured message
/// - `guild_name` - Name of the guild the member joined or left
/// - `member` - The member joining or leaving
/// - `kind` - Whether this is a welcome or goodbye message
pub fn render(template: &str, guild_name: &str, member: &MemberInfo, kind: GreetingKind) -> String {
    let mut tokens = vec![
        ("{guild}", guild_name),
        ("{name}", member.display_name.as_str()),
        ("{tag}", member.tag.as_str()),
    ];
    if kind == GreetingKind::Welcome {
        tokens.push(("{@user}", member.mention.as_str()));
    }

    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        rest = &rest[start..];

        match tokens.iter().find(|(token, _)| rest.starts_with(*token)) {
            Some((token, value)) => {
                rendered.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                rendered.push('{');
                rest = &rest[1..];
            }
        }
    }
    rendered.push_str(rest);

    rendered
}

pub struct GreetingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GreetingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Greets a member that joined, if the guild configured a welcome message.
    pub async fn welcome(
        &self,
        member: &MemberInfo,
        outlet: &dyn MessageOutlet,
    ) -> Result<GreetingOutcome, AppError> {
        self.relay(GreetingKind::Welcome, member, outlet).await
    }

    /// Announces a member that left, if the guild configured a goodbye message.
    pub async fn goodbye(
        &self,
        member: &MemberInfo,
        outlet: &dyn MessageOutlet,
    ) -> Result<GreetingOutcome, AppError> {
        self.relay(GreetingKind::Goodbye, member, outlet).await
    }

    /// Loads the guild's settings and sends the greeting when all conditions hold.
    ///
    /// # Returns
    /// - `Ok(GreetingOutcome::Sent)` - Exactly one message was sent
    /// - `Ok(_)` - The greeting was skipped, nothing was sent
    /// - `Err(AppError)` - Loading settings or sending the message failed
    async fn relay(
        &self,
        kind: GreetingKind,
        member: &MemberInfo,
        outlet: &dyn MessageOutlet,
    ) -> Result<GreetingOutcome, AppError> {
        let repo = GuildSettingsRepository::new(self.db);
        let settings = GuildSettings::from_entity(repo.get_or_create(member.guild_id).await?)?;

        let (enabled, template, channel_id) = match kind {
            GreetingKind::Welcome => (
                settings.is_welcome_enabled,
                settings.welcome_message,
                settings.welcome_channel_id,
            ),
            GreetingKind::Goodbye => (
                settings.is_goodbye_enabled,
                settings.goodbye_message,
                settings.goodbye_channel_id,
            ),
        };

        if !enabled {
            return Ok(GreetingOutcome::Disabled);
        }
        if template.is_empty() {
            return Ok(GreetingOutcome::EmptyTemplate);
        }

        let Some(channel) = channel_id.and_then(|id| outlet.resolve(member.guild_id, id)) else {
            return Ok(GreetingOutcome::ChannelUnresolved);
        };

        let guild_name = outlet.guild_name(member.guild_id).await;
        outlet
            .send(channel, render(&template, &guild_name, member, kind))
            .await?;

        Ok(GreetingOutcome::Sent(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use test_utils::{builder::TestBuilder, factory::guild_settings::GuildSettingsFactory};

    const GUILD_ID: u64 = 4242;

    /// Outlet that knows a fixed set of channels and records what it sends.
    struct RecordingOutlet {
        channels: Vec<u64>,
        sent: Mutex<Vec<(ChannelId, String)>>,
        name_lookups: AtomicUsize,
    }

    impl RecordingOutlet {
        fn with_channels(channels: &[u64]) -> Self {
            Self {
                channels: channels.to_vec(),
                sent: Mutex::new(Vec::new()),
                name_lookups: AtomicUsize::new(0),
            }
        }

        fn name_lookups(&self) -> usize {
            self.name_lookups.load(Ordering::SeqCst)
        }

        fn sent(&self) -> Vec<(ChannelId, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageOutlet for RecordingOutlet {
        fn resolve(&self, guild_id: u64, channel_id: u64) -> Option<ChannelId> {
            (guild_id == GUILD_ID && self.channels.contains(&channel_id))
                .then(|| ChannelId::new(channel_id))
        }

        async fn guild_name(&self, _guild_id: u64) -> String {
            self.name_lookups.fetch_add(1, Ordering::SeqCst);
            "Rustaceans".to_string()
        }

        async fn send(&self, channel_id: ChannelId, content: String) -> Result<(), AppError> {
            self.sent.lock().unwrap().push((channel_id, content));
            Ok(())
        }
    }

    fn member() -> MemberInfo {
        MemberInfo {
            guild_id: GUILD_ID,
            display_name: "Ferris".to_string(),
            tag: "0042".to_string(),
            mention: "<@1001>".to_string(),
        }
    }

    #[test]
    fn renders_only_known_tokens() {
        let rendered = render("Hi {name} in {guild}! {unknown}", "Rustaceans", &member(), GreetingKind::Welcome);

        assert_eq!(rendered, "Hi Ferris in Rustaceans! {unknown}");
    }

    #[test]
    fn renders_every_welcome_token() {
        let rendered = render(
            "{@user} ({name}#{tag}) joined {guild}",
            "Rustaceans",
            &member(),
            GreetingKind::Welcome,
        );

        assert_eq!(rendered, "<@1001> (Ferris#0042) joined Rustaceans");
    }

    #[test]
    fn goodbye_keeps_mention_token() {
        let rendered = render("{name} left {guild}, bye {@user}", "Rustaceans", &member(), GreetingKind::Goodbye);

        assert_eq!(rendered, "Ferris left Rustaceans, bye {@user}");
    }

    #[test]
    fn keeps_tokens_inside_substituted_values() {
        let mut member = member();
        member.display_name = "{@user}".to_string();

        let rendered = render("{guild}: {name}", "{name} fans", &member, GreetingKind::Welcome);

        assert_eq!(rendered, "{name} fans: {@user}");
    }

    #[test]
    fn keeps_stray_braces() {
        let rendered = render("{{name}} {", "Rustaceans", &member(), GreetingKind::Welcome);

        assert_eq!(rendered, "{Ferris} {");
    }

    /// Tests the welcome path with everything configured.
    ///
    /// Expected: exactly one message with `{name}` and `{guild}` replaced
    #[tokio::test]
    async fn sends_welcome_message() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db();
        GuildSettingsFactory::new(db)
            .guild_id(GUILD_ID.to_string())
            .welcome("Hi {name} in {guild}!", Some("200"))
            .build()
            .await?;
        let outlet = RecordingOutlet::with_channels(&[200]);

        let outcome = GreetingService::new(db).welcome(&member(), &outlet).await?;

        assert_eq!(outcome, GreetingOutcome::Sent(ChannelId::new(200)));
        assert_eq!(
            outlet.sent(),
            vec![(ChannelId::new(200), "Hi Ferris in Rustaceans!".to_string())]
        );
        assert_eq!(outlet.name_lookups(), 1);

        Ok(())
    }

    /// Tests that a disabled welcome sends nothing, whatever the template.
    ///
    /// Expected: Disabled and no message
    #[tokio::test]
    async fn skips_disabled_welcome() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db();
        GuildSettingsFactory::new(db)
            .guild_id(GUILD_ID.to_string())
            .welcome("Hi {name}!", Some("200"))
            .welcome_enabled(false)
            .build()
            .await?;
        let outlet = RecordingOutlet::with_channels(&[200]);

        let outcome = GreetingService::new(db).welcome(&member(), &outlet).await?;

        assert_eq!(outcome, GreetingOutcome::Disabled);
        assert!(outlet.sent().is_empty());
        assert_eq!(outlet.name_lookups(), 0);

        Ok(())
    }

    /// Tests that an enabled goodbye with an empty template sends nothing.
    ///
    /// Expected: EmptyTemplate and no message
    #[tokio::test]
    async fn skips_empty_goodbye_template() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db();
        GuildSettingsFactory::new(db)
            .guild_id(GUILD_ID.to_string())
            .goodbye("", Some("300"))
            .build()
            .await?;
        let outlet = RecordingOutlet::with_channels(&[300]);

        let outcome = GreetingService::new(db).goodbye(&member(), &outlet).await?;

        assert_eq!(outcome, GreetingOutcome::EmptyTemplate);
        assert!(outlet.sent().is_empty());

        Ok(())
    }

    /// Tests that a channel the bot cannot see silently skips the greeting.
    ///
    /// Expected: ChannelUnresolved and no message
    #[tokio::test]
    async fn skips_unresolved_channel() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db();
        GuildSettingsFactory::new(db)
            .guild_id(GUILD_ID.to_string())
            .goodbye("{name} left", Some("999"))
            .build()
            .await?;
        let outlet = RecordingOutlet::with_channels(&[300]);

        let outcome = GreetingService::new(db).goodbye(&member(), &outlet).await?;

        assert_eq!(outcome, GreetingOutcome::ChannelUnresolved);
        assert!(outlet.sent().is_empty());
        assert_eq!(outlet.name_lookups(), 0);

        Ok(())
    }

    /// Tests the goodbye path with everything configured.
    ///
    /// Expected: one message without the mention substituted
    #[tokio::test]
    async fn sends_goodbye_message() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db();
        GuildSettingsFactory::new(db)
            .guild_id(GUILD_ID.to_string())
            .goodbye("{name} ({@user}) left {guild}", Some("300"))
            .build()
            .await?;
        let outlet = RecordingOutlet::with_channels(&[300]);

        GreetingService::new(db).goodbye(&member(), &outlet).await?;

        assert_eq!(
            outlet.sent(),
            vec![(
                ChannelId::new(300),
                "Ferris ({@user}) left Rustaceans".to_string()
            )]
        );

        Ok(())
    }

    /// Tests the first event of an unknown guild.
    ///
    /// Verifies that settings are created on the fly and, being disabled by
    /// default, nothing is sent.
    ///
    /// Expected: Disabled, no message, settings row created
    #[tokio::test]
    async fn creates_settings_for_unknown_guild() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db();
        let outlet = RecordingOutlet::with_channels(&[200]);

        let outcome = GreetingService::new(db).welcome(&member(), &outlet).await?;

        assert_eq!(outcome, GreetingOutcome::Disabled);
        assert!(outlet.sent().is_empty());
        assert!(GuildSettingsRepository::new(db)
            .find_by_guild_id(GUILD_ID)
            .await?
            .is_some());

        Ok(())
    }
}
