//! Prompt-driven form filling

use anyhow::Result;
use dialoguer::{Confirm, Input};
use docent::Form;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::DocentTheme;

/// Walk every field of `form`, then submit.
///
/// Invalid input lists every field error and offers another pass with the
/// typed text kept. Returns `None` when the user gives up.
pub(super) fn run_form<F: Form>(
    theme: &DocentTheme,
    mut form: F,
    color: bool,
    unicode: bool,
) -> Result<Option<F::Output>> {
    println!("{}", ColoredText::info(F::TITLE).bold().render(color));
    loop {
        for field in F::fields() {
            let prompt = format!("{} ({})", field.label, field.placeholder);
            let value: String = Input::with_theme(theme)
                .with_prompt(prompt)
                .with_initial_text(form.value(field.key))
                .allow_empty(true)
                .interact_text()?;
            form.set_value(field.key, value);
        }

        let mut submitted = None;
        match form.submit(|entity| submitted = Some(entity), || {}) {
            Ok(()) => return Ok(submitted),
            Err(errors) => {
                eprint!("{}", describe_errors::<F>(&errors, color, unicode));
                let retry = Confirm::with_theme(theme)
                    .with_prompt("Fix and try again?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(None);
                }
            }
        }
    }
}

pub(super) fn describe_errors<F: Form>(
    errors: &docent::FormErrors,
    color: bool,
    unicode: bool,
) -> String {
    let mut out = String::new();
    for error in errors.iter() {
        let label = F::fields()
            .iter()
            .find(|field| field.key == error.field)
            .map_or(error.field, |field| field.label);
        out.push_str(&format!(
            "  {} {}: {}\n",
            Icon::Error.colored(color, unicode),
            label,
            ColoredText::error(error.message).render(color)
        ));
    }
    out
}
