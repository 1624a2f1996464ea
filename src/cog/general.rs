use chrono::Utc;
use serenity::all::{CommandInteraction, Context};
use serenity::async_trait;

use crate::{
    cog::{respond, Cog, CogCommand, CogDeps},
    error::{cog::CogError, AppError},
    model::start_time::{format_uptime, StartTime},
};

/// Basic commands every deployment wants.
pub struct GeneralCog {
    started_at: StartTime,
}

impl GeneralCog {
    pub fn new(deps: &CogDeps) -> Self {
        Self {
            started_at: deps.started_at,
        }
    }

    fn uptime_message(&self) -> String {
        format!(
            "I have been up for {}.",
            format_uptime(self.started_at.uptime_at(Utc::now()))
        )
    }
}

#[async_trait]
impl Cog for GeneralCog {
    fn name(&self) -> &'static str {
        "General"
    }

    fn commands(&self) -> Vec<CogCommand> {
        vec![
            CogCommand::new("ping", "Check whether the bot is responding"),
            CogCommand::new("uptime", "Show how long the bot has been running"),
        ]
    }

    async fn run(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
        match command.data.name.as_str() {
            "ping" => respond(ctx, command, "Pong!", false).await,
            "uptime" => respond(ctx, command, self.uptime_message(), false).await,
            other => Err(CogError::UnknownCommand(other.to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn reports_uptime_since_start() {
        let cog = GeneralCog {
            started_at: StartTime::at(Utc::now() - Duration::hours(2)),
        };

        let message = cog.uptime_message();

        assert!(message.starts_with("I have been up for 2h"));
    }

    #[test]
    fn declares_ping_and_uptime() {
        let cog = GeneralCog {
            started_at: StartTime::now(),
        };

        let names: Vec<_> = cog.commands().iter().map(|c| c.name).collect();

        assert_eq!(names, vec!["ping", "uptime"]);
    }
}
