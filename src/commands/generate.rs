//! `docent generate` - one schedule request against the configured service

use std::time::Instant;

use anyhow::Result;
use docent::application::GENERIC_FAILURE;
use docent::config::Config;
use docent::domain::services::render_prompt;
use docent::presentation::RosterArgs;
use docent::{GenerationRequest, ScheduleRequester};

use super::setup;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, ErrorEvent, StartEvent, StatusEvent};
use crate::ui::output;
use crate::ui::views::schedule::{render_integrity, render_schedule};

/// Returns `Ok(false)` when the service call failed (exit code 1).
pub fn cmd_generate(
    args: &RosterArgs,
    constraints: &str,
    config: &Config,
    ui: &UiContext,
) -> Result<bool> {
    if ui.json {
        emit_event(&StartEvent::new("generate"))?;
    }

    let mut store = setup::open_store(args, config, ui, "generate")?;
    let generator = setup::build_generator(config, ui)?;

    if ui.is_debug() {
        let request = GenerationRequest::new(store.faculty(), store.halls(), constraints);
        output::debug(ui, render_prompt(&request));
    }

    let mut requester =
        ScheduleRequester::new(generator).with_integrity_check(config.generator.check_integrity);
    let started = Instant::now();
    let outcome = requester.generate_with(&mut store, constraints, |status| {
        if ui.json {
            let _ = emit_event(&StatusEvent::new("generate", status.as_str()));
        } else {
            output::verbose(ui, format!("Request {}", status.as_str()));
        }
    });
    let elapsed = started.elapsed();
    output::verbose(ui, format!("Finished in {} ms", elapsed.as_millis()));

    let report = match outcome {
        Ok(report) => report,
        Err(err) => {
            output::debug(ui, format!("Cause: {}", err));
            if ui.json {
                emit_event(
                    &ErrorEvent::new("generate", GENERIC_FAILURE).with_cause(err.to_string()),
                )?;
                emit_event(
                    &CompleteEvent::failure("generate").with_duration(elapsed.as_millis() as u64),
                )?;
            }
            return Ok(false);
        }
    };

    if ui.json {
        emit_event(&DataEvent::new("generate", "schedule", store.schedule()))?;
        if let Some(integrity) = &report.integrity {
            let issues: Vec<String> = integrity.issues.iter().map(|i| i.to_string()).collect();
            emit_event(&DataEvent::new("generate", "integrity", issues))?;
        }
        emit_event(
            &CompleteEvent::success("generate").with_duration(elapsed.as_millis() as u64),
        )?;
        return Ok(true);
    }

    println!();
    print!(
        "{}",
        render_schedule(
            store.schedule(),
            store.schedule_stored_at(),
            ui.color,
            ui.unicode
        )
    );
    if let Some(block) = report
        .integrity
        .as_ref()
        .and_then(|integrity| render_integrity(integrity, ui.color, ui.unicode))
    {
        println!();
        print!("{}", block);
    }
    Ok(true)
}
