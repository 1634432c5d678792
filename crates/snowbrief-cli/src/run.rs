//! One scheduled cycle: gate, fetch, compose, deliver.

use snowbrief_core::{
    compose_post, deliver, CommandPublisher, FallbackLog, MarketClock, PublishOutcome,
    SessionSchedule,
};

use crate::config::Config;
use crate::error::CliError;

pub async fn run() -> Result<(), CliError> {
    let config = Config::from_env()?;
    let clock = MarketClock::from_offset_hours(config.utc_offset_hours)?;
    let now = clock.now();

    let schedule = SessionSchedule::default();
    if !schedule.decide(now.time()).proceeds() {
        // Not an error: the next trigger will land inside the session.
        tracing::debug!(time = %now.time(), "outside session window, skipping cycle");
        return Ok(());
    }

    let source = config.snapshot_source()?;
    let outcome = source.fetch().await?;
    let placeholder = outcome.is_placeholder();
    let snapshot = outcome.into_snapshot();
    if let Some(note) = &snapshot.note {
        tracing::info!(%note, "snapshot carries a diagnostic note");
    }

    let post = compose_post(&snapshot, now);
    let fallback = FallbackLog::new(&config.log_dir);

    let outcome = if placeholder && !config.publish_placeholder {
        // Keep placeholder text off the wire; log it for operator review.
        let path = fallback.append(now.date(), &post)?;
        tracing::warn!(
            path = %path.display(),
            "placeholder snapshot not published; set SNOWBRIEF_PUBLISH_PLACEHOLDER=1 to override"
        );
        PublishOutcome::LoggedOnly { path }
    } else {
        let publisher = CommandPublisher::new(&config.post_program);
        deliver(&post, &publisher, &fallback, now.date())?
    };

    match outcome {
        PublishOutcome::Published | PublishOutcome::LoggedOnly { .. } => Ok(()),
        PublishOutcome::FailedAndLogged { path, error } => {
            Err(CliError::PublishFailedAndLogged { source: error, path })
        }
    }
}
