//! Schedule menu: generate, view, edit, clear

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use docent::{ScheduleEntry, ScheduleRequester};

use super::Session;
use crate::commands::setup;
use crate::ui::error::print_error;
use crate::ui::output;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::schedule::{render_integrity, render_schedule};

/// Pick-list label for one schedule row (1-based)
pub(super) fn entry_label(index: usize, entry: &ScheduleEntry) -> String {
    format!(
        "{}. {} - {}, {} ({})",
        index + 1,
        entry.course_name,
        entry.faculty_name,
        entry.hall_name,
        entry.time_slot
    )
}

impl Session<'_> {
    pub(super) fn schedule_menu(&mut self) -> Result<()> {
        loop {
            println!();
            let items = vec![
                "Generate schedule",
                "View schedule",
                "Edit entry",
                "Clear schedule",
                "Back",
            ];
            let selection = Select::with_theme(&self.theme)
                .with_prompt("Schedule Dashboard")
                .items(&items)
                .default(0)
                .interact_opt()?;

            match selection {
                Some(0) => self.generate()?,
                Some(1) => self.print_schedule(),
                Some(2) => self.edit_entry()?,
                Some(3) => self.clear_schedule()?,
                _ => return Ok(()),
            }
        }
    }

    fn generate(&mut self) -> Result<()> {
        let constraints: String = Input::with_theme(&self.theme)
            .with_prompt("Additional constraints (optional)")
            .allow_empty(true)
            .interact_text()?;

        if self.requester.is_none() {
            match setup::build_generator(self.config, self.ui) {
                Ok(generator) => {
                    self.requester = Some(
                        ScheduleRequester::new(generator)
                            .with_integrity_check(self.config.generator.check_integrity),
                    );
                }
                Err(err) => {
                    print_error(&err, self.ui, "session");
                    return Ok(());
                }
            }
        }
        let Some(requester) = self.requester.as_mut() else {
            return Ok(());
        };

        let ui = self.ui;
        eprintln!(
            "{} Generating schedule...",
            Icon::Progress.colored(ui.color, ui.unicode)
        );
        let outcome = requester.generate_with(&mut self.store, &constraints, |status| {
            output::verbose(ui, format!("Request {}", status.as_str()));
        });

        match outcome {
            Ok(report) => {
                self.print_schedule();
                if let Some(block) = report
                    .integrity
                    .as_ref()
                    .and_then(|integrity| render_integrity(integrity, ui.color, ui.unicode))
                {
                    println!();
                    print!("{}", block);
                }
            }
            Err(err) => output::debug(ui, format!("Cause: {}", err)),
        }
        Ok(())
    }

    fn print_schedule(&self) {
        print!(
            "{}",
            render_schedule(
                self.store.schedule(),
                self.store.schedule_stored_at(),
                self.ui.color,
                self.ui.unicode
            )
        );
    }

    fn edit_entry(&mut self) -> Result<()> {
        let labels: Vec<String> = match self.store.schedule() {
            Some(schedule) if !schedule.is_empty() => schedule
                .entries
                .iter()
                .enumerate()
                .map(|(i, entry)| entry_label(i, entry))
                .collect(),
            _ => {
                println!(
                    "{}",
                    ColoredText::dim("No Schedule Generated").render(self.ui.color)
                );
                return Ok(());
            }
        };

        let Some(index) = Select::with_theme(&self.theme)
            .with_prompt("Edit which entry?")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };
        let Some(current) = self
            .store
            .schedule()
            .and_then(|schedule| schedule.entries.get(index))
            .cloned()
        else {
            return Ok(());
        };

        let course_name = self.ask("Course", &current.course_name)?;
        let faculty_name = self.ask("Faculty", &current.faculty_name)?;
        let hall_name = self.ask("Hall", &current.hall_name)?;
        let time_slot = self.ask("Time Slot", &current.time_slot)?;

        self.store.update_schedule_entry(
            index,
            ScheduleEntry::new(faculty_name, hall_name, time_slot, course_name),
        );
        Ok(())
    }

    fn ask(&self, prompt: &str, initial: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn clear_schedule(&mut self) -> Result<()> {
        if self.store.schedule().is_none() {
            println!(
                "{}",
                ColoredText::dim("No Schedule Generated").render(self.ui.color)
            );
            return Ok(());
        }
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt("Discard the current schedule?")
            .default(false)
            .interact()?;
        if confirmed {
            self.store.set_schedule(None);
            println!(
                "{} {}",
                Icon::Success.colored(self.ui.color, self.ui.unicode),
                ColoredText::success("Schedule cleared.").render(self.ui.color)
            );
        }
        Ok(())
    }
}
