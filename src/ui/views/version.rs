use crate::ui::primitives::text::ColoredText;

pub fn render_version(
    version: &str,
    endpoint: &str,
    model: &str,
    supports_color: bool,
) -> String {
    let mut out = String::new();
    out.push_str(
        &ColoredText::info(format!("Docent v{}", version))
            .bold()
            .render(supports_color),
    );
    out.push('\n');
    out.push_str(&format!("Endpoint: {}\n", endpoint));
    out.push_str(&format!("Model:    {}\n", model));
    out
}
