use {
    clap::Args,
    std::time::Duration,
};

/// Lifetime of an auction when nothing (or nothing parsable) is configured.
pub const DEFAULT_AUCTION_DURATION: Duration = Duration::from_secs(5 * 60);

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Auction Options")]
#[group(id = "Auction")]
pub struct Options {
    /// How long an auction stays active before it is closed, e.g. "5m", "30s" or "1h30m".
    /// Falls back to 5 minutes when unset or malformed.
    #[arg(long = "auction-duration")]
    #[arg(env = "AUCTION_DURATION")]
    pub auction_duration: Option<String>,
}

impl Options {
    pub fn duration_source(&self) -> ConfiguredDuration {
        ConfiguredDuration::new(self.auction_duration.clone())
    }
}

pub trait DurationSource {
    fn get(&self) -> Duration;
}

#[derive(Clone, Debug)]
pub struct ConfiguredDuration {
    raw:     Option<String>,
    default: Duration,
}

impl ConfiguredDuration {
    pub fn new(raw: Option<String>) -> Self {
        Self::with_default(raw, DEFAULT_AUCTION_DURATION)
    }

    pub fn with_default(raw: Option<String>, default: Duration) -> Self {
        Self { raw, default }
    }
}

impl DurationSource for ConfiguredDuration {
    fn get(&self) -> Duration {
        resolve_auction_duration(self.raw.as_deref(), self.default)
    }
}

pub fn resolve_auction_duration(raw: Option<&str>, default: Duration) -> Duration {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return default,
    };
    match humantime::parse_duration(raw) {
        Ok(duration) => duration,
        Err(err) => {
            tracing::debug!(
                error = %err,
                value = raw,
                default = ?default,
                "Invalid auction duration, using default"
            );
            default
        }
    }
}
