use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// A titled list of non-fatal warnings
#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(self.title.as_str())
                .bold()
                .render(supports_color)
        );
        let bullet = Icon::Arrow.colored(supports_color, supports_unicode);
        for line in &self.lines {
            out.push_str(&format!("  {} {}\n", bullet, line));
        }
        out
    }
}
