use std::fmt::Write;
use tracing_subscriber::prelude::*;

static ENV_NAME: &str = "MATCHUP_TRACE";

/// Prints search events to stderr when `MATCHUP_TRACE` names a level,
/// e.g. `MATCHUP_TRACE=DEBUG matchup package.json`.
pub fn enable_by_env() {
    let is_enabled = std::env::var(ENV_NAME).map_or(false, |var| {
        matches!(var.as_str(), "TRACE" | "DEBUG" | "INFO" | "WARN" | "ERROR")
    });
    if !is_enabled {
        return;
    }
    // a subscriber may already be installed by the embedding program
    let _ = tracing_subscriber::Registry::default()
        .with(Formatter)
        .with(tracing_subscriber::EnvFilter::from_env(ENV_NAME))
        .try_init();
}

/// One line per event: `matchup DEBUG scan step=0 dir=/a/b`.
struct Formatter;

impl<S> tracing_subscriber::Layer<S> for Formatter
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _: tracing_subscriber::layer::Context<'_, S>) {
        let mut line = Line::default();
        event.record(&mut line);
        eprintln!(
            "matchup {:>5} {}{}",
            event.metadata().level(),
            line.message,
            line.fields
        );
    }
}

#[derive(Default)]
struct Line {
    message: String,
    fields: String,
}

impl tracing::field::Visit for Line {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}
