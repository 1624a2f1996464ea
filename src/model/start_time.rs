use chrono::{DateTime, Duration, Utc};

/// Moment the process started, captured once in `main`.
///
/// Passed by value to whatever reports uptime instead of living in a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartTime(DateTime<Utc>);

impl StartTime {
    /// Captures the current time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wraps an explicit instant, mainly for tests.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// Time elapsed between the start and `now`, never negative.
    pub fn uptime_at(&self, now: DateTime<Utc>) -> Duration {
        (now - self.0).max(Duration::zero())
    }
}

/// Renders a duration as `1d 2h 3m 4s`, omitting leading zero units.
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.num_seconds().max(0);
    let (days, hours, minutes, seconds) = (
        total / 86_400,
        (total % 86_400) / 3_600,
        (total % 3_600) / 60,
        total % 60,
    );

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if days > 0 || hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if days > 0 || hours > 0 || minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{}s", seconds));

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_uptime() {
        let start = StartTime::at(Utc::now() - Duration::seconds(90));

        let uptime = start.uptime_at(start.instant() + Duration::seconds(90));

        assert_eq!(uptime.num_seconds(), 90);
    }

    #[test]
    fn uptime_never_negative() {
        let start = StartTime::now();

        let uptime = start.uptime_at(start.instant() - Duration::seconds(5));

        assert_eq!(uptime, Duration::zero());
    }

    #[test]
    fn formats_uptime() {
        assert_eq!(format_uptime(Duration::seconds(5)), "5s");
        assert_eq!(format_uptime(Duration::seconds(65)), "1m 5s");
        assert_eq!(format_uptime(Duration::seconds(3_600)), "1h 0m 0s");
        assert_eq!(
            format_uptime(Duration::seconds(86_400 + 2 * 3_600 + 3 * 60 + 4)),
            "1d 2h 3m 4s"
        );
    }
}
