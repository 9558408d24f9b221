use docent::{DocentError, GenerationError};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One-line hint for errors the user can fix themselves
fn hint(err: &anyhow::Error) -> Option<String> {
    if let Some(generation) = err.downcast_ref::<GenerationError>() {
        return generation_hint(generation);
    }
    match err.downcast_ref::<DocentError>()? {
        DocentError::Generation(generation) => generation_hint(generation),
        DocentError::InvalidRosterEntry { .. } => {
            Some("Fix the entry in the roster file and run again.".to_string())
        }
        DocentError::UnsupportedRosterFormat { .. } => {
            Some("Use a .toml, .json, .yaml or .yml roster file.".to_string())
        }
        DocentError::InvalidConfig { .. } => {
            Some("Check the [generator], [roster] and [output] sections.".to_string())
        }
        DocentError::DuplicateName { .. } => Some(
            "Pick a different name, or set roster.duplicates = \"allow\" in docent.toml."
                .to_string(),
        ),
        _ => None,
    }
}

fn generation_hint(err: &GenerationError) -> Option<String> {
    match err {
        GenerationError::MissingApiKey { var } => Some(format!(
            "Export {} or set generator.api_key_env in docent.toml.",
            var
        )),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).render(supports_color)
    );
    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            cause
        ));
    }
    if let Some(hint) = hint(err) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(format!("hint: {}", hint)).render(supports_color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext, command: &str) {
    if ui.json {
        let mut event = ErrorEvent::new(command, err.to_string());
        if let Some(cause) = err.chain().nth(1) {
            event = event.with_cause(cause.to_string());
        }
        let _ = emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
