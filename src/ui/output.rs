use docent::config::{ConfigSource, ConfigWarning};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json || ui.is_quiet() {
        return;
    }
    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!(
                "{} Unknown config key '{}' in {}:{}",
                icon,
                w.key,
                w.file.display(),
                line
            );
        } else {
            eprintln!("{} Unknown config key '{}' in {}", icon, w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// `-v` diagnostic line on stderr
pub fn verbose(ui: &UiContext, message: impl AsRef<str>) {
    if ui.is_verbose() && !ui.json {
        eprintln!("{} {}", Icon::Arrow.colored(ui.color, ui.unicode), message.as_ref());
    }
}

/// `-vv` diagnostic line on stderr
pub fn debug(ui: &UiContext, message: impl AsRef<str>) {
    if ui.is_debug() && !ui.json {
        eprintln!("{}", message.as_ref());
    }
}

pub fn describe_source(source: &ConfigSource) -> String {
    match source {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Defaults => "built-in defaults".to_string(),
    }
}
