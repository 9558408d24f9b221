use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the Docent CLI UI.
///
/// Only 5 semantic colors (`colors::*`). All icons and borders are sourced
/// from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
    pub const POINTER: &str = "›";

    // Command identifiers (used in headers).
    pub const FACULTY: &str = "👩‍🏫";
    pub const HALL: &str = "🏛";
    pub const SCHEDULE: &str = "📅";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";
    pub const POINTER: &str = ">";

    pub const FACULTY: &str = "[FACULTY]";
    pub const HALL: &str = "[HALLS]";
    pub const SCHEDULE: &str = "[SCHEDULE]";
}

pub mod borders {
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

// ----------------------------------------------------------------------------
// DocentTheme - dialoguer theme with the Docent pointer icon
// ----------------------------------------------------------------------------

/// Theme for the interactive session menus.
///
/// Wraps `ColorfulTheme` and only overrides select items so the active
/// entry uses our pointer (`›`, or `>` in ASCII mode).
pub struct DocentTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl DocentTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn pointer_icon(&self) -> &'static str {
        if self.unicode {
            icons::POINTER
        } else {
            icons_ascii::POINTER
        }
    }
}

impl Theme for DocentTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner.format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.inner.format_input_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_input_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_select_prompt_selection(f, prompt, sel)
    }

    // Only select items are customized
    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "{} {}", self.pointer_icon(), text)
        } else {
            write!(f, "  {}", text)
        }
    }
}
