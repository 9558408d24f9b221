//! `docent prompt` - show the prompt a generate request would send

use anyhow::Result;
use docent::config::Config;
use docent::domain::services::{render_prompt, SYSTEM_PROMPT};
use docent::presentation::RosterArgs;
use docent::GenerationRequest;

use super::setup;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::output;

pub fn cmd_prompt(
    args: &RosterArgs,
    constraints: &str,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new("prompt"))?;
    }

    let store = setup::open_store(args, config, ui, "prompt")?;
    let request = GenerationRequest::new(store.faculty(), store.halls(), constraints);
    let prompt = render_prompt(&request);

    if ui.json {
        emit_event(&DataEvent::new(
            "prompt",
            "prompt",
            serde_json::json!({
                "system": SYSTEM_PROMPT,
                "user": prompt,
                "request": request,
            }),
        ))?;
        emit_event(&CompleteEvent::success("prompt"))?;
        return Ok(());
    }

    output::verbose(ui, format!("System: {}", SYSTEM_PROMPT));
    print!("{}", prompt);
    Ok(())
}
