//! `docent version`

use anyhow::Result;
use docent::config::Config;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;
use crate::ui::views::version::render_version;

pub fn cmd_version(config: &Config, ui: &UiContext) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    if ui.json {
        emit_event(&DataEvent::new(
            "version",
            "version",
            serde_json::json!({
                "version": version,
                "endpoint": config.generator.endpoint,
                "model": config.generator.model,
            }),
        ))?;
        return Ok(());
    }

    print!(
        "{}",
        render_version(
            version,
            &config.generator.endpoint,
            &config.generator.model,
            ui.color
        )
    );
    Ok(())
}
