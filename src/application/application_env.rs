use anyhow::anyhow;
use std::time::Duration;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub toast_lifespan: Duration,
    pub moderation_timeout: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("MEDIA_CLUB_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("MEDIA_CLUB_NOTIFIER_LOG_FILENAME")?;
        let toast_lifespan_millis = Self::env_var_or(
            "MEDIA_CLUB_NOTIFIER_TOAST_LIFESPAN_MILLIS",
            "5000",
        )
        .parse()?;
        let toast_lifespan = Duration::from_millis(toast_lifespan_millis);
        let moderation_timeout_seconds = Self::env_var_or(
            "MEDIA_CLUB_NOTIFIER_MODERATION_TIMEOUT_SECONDS",
            "5",
        )
        .parse()?;
        let moderation_timeout = Duration::from_secs(moderation_timeout_seconds);

        Ok(Self {
            log_directory,
            log_filename,
            toast_lifespan,
            moderation_timeout,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn env_var_or(name: &'static str, default: &str) -> String {
        std::env::var(name).unwrap_or_else(|_| default.to_string())
    }
}
