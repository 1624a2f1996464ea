//! Bot status and activity shown in the member list.

use std::str::FromStr;

use serenity::all::{ActivityData, OnlineStatus};

use crate::error::config::ConfigError;

/// Activity kinds accepted in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Playing,
    Streaming,
    Listening,
    Watching,
    Competing,
    Custom,
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "playing" => Ok(Self::Playing),
            "streaming" => Ok(Self::Streaming),
            "listening" => Ok(Self::Listening),
            "watching" => Ok(Self::Watching),
            "competing" => Ok(Self::Competing),
            "custom" => Ok(Self::Custom),
            other => Err(format!(
                "unknown activity type '{}', expected playing, streaming, listening, watching, competing or custom",
                other
            )),
        }
    }
}

/// Parses a status name into Serenity's `OnlineStatus`.
pub fn parse_status(name: &str, value: &str) -> Result<OnlineStatus, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "online" => Ok(OnlineStatus::Online),
        "idle" => Ok(OnlineStatus::Idle),
        "dnd" | "do_not_disturb" => Ok(OnlineStatus::DoNotDisturb),
        "invisible" => Ok(OnlineStatus::Invisible),
        "offline" => Ok(OnlineStatus::Offline),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected online, idle, dnd, invisible or offline".to_string(),
        }),
    }
}

/// Presence the bot sets once commands are synced.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceConfig {
    pub status: OnlineStatus,
    pub activity_kind: Option<ActivityKind>,
    pub activity_name: String,
    pub activity_url: Option<String>,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            status: OnlineStatus::Online,
            activity_kind: None,
            activity_name: String::new(),
            activity_url: None,
        }
    }
}

impl PresenceConfig {
    /// Activity kind actually shown.
    ///
    /// An unset kind means playing. Streaming needs a URL, without one it
    /// degrades to playing.
    pub fn effective_kind(&self) -> ActivityKind {
        match (self.activity_kind, self.activity_url.as_deref()) {
            (None, _) => ActivityKind::Playing,
            (Some(ActivityKind::Streaming), None) => ActivityKind::Playing,
            (Some(kind), _) => kind,
        }
    }

    /// Builds the Serenity activity, `None` when no activity name is configured.
    pub fn activity(&self) -> Option<ActivityData> {
        if self.activity_name.is_empty() {
            return None;
        }
        let name = self.activity_name.clone();

        let activity = match self.effective_kind() {
            ActivityKind::Playing => ActivityData::playing(name),
            ActivityKind::Streaming => {
                let url = self.activity_url.as_deref().unwrap_or_default();
                match ActivityData::streaming(name.clone(), url) {
                    Ok(activity) => activity,
                    Err(e) => {
                        tracing::warn!("Invalid streaming URL '{}', playing instead: {}", url, e);
                        ActivityData::playing(name)
                    }
                }
            }
            ActivityKind::Listening => ActivityData::listening(name),
            ActivityKind::Watching => ActivityData::watching(name),
            ActivityKind::Competing => ActivityData::competing(name),
            ActivityKind::Custom => ActivityData::custom(name),
        };

        Some(activity)
    }
}
