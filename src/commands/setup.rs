//! Shared command setup: roster loading, store and generator wiring

use anyhow::{Context, Result};
use docent::config::Config;
use docent::infrastructure::{ConsoleNotificationSink, JsonNotificationSink};
use docent::presentation::RosterArgs;
use docent::{HttpScheduleGenerator, Roster, SessionStore};

use crate::ui::context::UiContext;
use crate::ui::output;

/// Resolve `--roster` / `--sample` into a roster (empty when neither is given).
pub(crate) fn load_roster(args: &RosterArgs) -> Result<Roster> {
    if let Some(path) = &args.roster {
        return Roster::load(path)
            .with_context(|| format!("failed to load roster {}", path.display()));
    }
    if args.sample {
        return Ok(Roster::sample());
    }
    Ok(Roster::default())
}

/// Build the session store for `command`, seeded from the roster args.
pub(crate) fn open_store(
    args: &RosterArgs,
    config: &Config,
    ui: &UiContext,
    command: &'static str,
) -> Result<SessionStore> {
    let roster = load_roster(args)?;
    output::verbose(
        ui,
        format!(
            "Roster: {} faculty, {} halls",
            roster.faculty.len(),
            roster.halls.len()
        ),
    );

    let store = SessionStore::new().with_duplicate_policy(config.roster.duplicates);
    let mut store = if ui.json {
        store.with_sink(JsonNotificationSink::stdout(command))
    } else {
        store.with_sink(ConsoleNotificationSink::stderr(ui.color, ui.unicode))
    };
    roster
        .apply(&mut store)
        .context("failed to seed the session roster")?;
    Ok(store)
}

/// Build the HTTP generator from config, logging its settings at `-v`.
pub(crate) fn build_generator(config: &Config, ui: &UiContext) -> Result<HttpScheduleGenerator> {
    let generator = HttpScheduleGenerator::from_config(&config.generator)
        .context("cannot configure the generation service")?;
    output::verbose(ui, format!("Endpoint: {}", generator.endpoint()));
    output::verbose(ui, format!("Model: {}", generator.model()));
    match config.generator.timeout() {
        Some(timeout) => output::verbose(ui, format!("Timeout: {}s", timeout.as_secs())),
        None => output::verbose(ui, "Timeout: none"),
    }
    Ok(generator)
}
