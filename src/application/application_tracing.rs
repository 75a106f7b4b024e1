use super::ApplicationEnv;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

///
/// Install the engine's hourly rolling file layer as the global
/// subscriber. Hosts that already own a subscriber skip this and wire
/// the crate's events into their own layers instead; calling it twice
/// errors rather than replacing the host's setup.
///
pub fn setup_tracing(env: &ApplicationEnv) -> anyhow::Result<()> {
    let file_appender = tracing_appender::rolling::hourly(&env.log_directory, &env.log_filename);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(false)
        .with_filter(log_filter()?);

    tracing_subscriber::registry().with(file_layer).try_init()?;

    Ok(())
}

///
/// Filter for the file layer. Defaults to info for this crate only so
/// the host's own targets never leak into the engine log; overridable
/// through `MEDIA_CLUB_NOTIFIER_LOG` with the usual directive syntax.
///
fn log_filter() -> anyhow::Result<EnvFilter> {
    let filter = EnvFilter::builder()
        .with_default_directive("media_club_notifier=info".parse()?)
        .with_env_var("MEDIA_CLUB_NOTIFIER_LOG")
        .from_env()?;

    Ok(filter)
}
