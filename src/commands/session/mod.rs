//! Interactive session
//!
//! The terminal stand-in for a browser session: one in-memory store that
//! lives until the user quits. Nothing is written back to disk.

mod form;
mod roster_menu;
mod schedule_menu;

use anyhow::{bail, Result};
use dialoguer::Select;
use docent::config::Config;
use docent::presentation::RosterArgs;
use docent::{HttpScheduleGenerator, ScheduleRequester, SessionStore};

use super::setup;
use crate::ui::context::UiContext;
use crate::ui::theme::DocentTheme;

use roster_menu::{FacultyRoster, HallRoster};

pub fn cmd_session(args: &RosterArgs, config: &Config, ui: &UiContext) -> Result<()> {
    if ui.json {
        bail!("the interactive session does not support --json (use roster, prompt or generate)");
    }
    if !ui.caps.stdin_tty {
        bail!(
            "the interactive session needs a terminal (use roster, prompt or generate in scripts)"
        );
    }

    let store = setup::open_store(args, config, ui, "session")?;
    let mut session = Session {
        store,
        config,
        ui,
        theme: DocentTheme::new(ui.unicode),
        requester: None,
    };
    session.run()
}

pub(crate) struct Session<'a> {
    store: SessionStore,
    config: &'a Config,
    ui: &'a UiContext,
    theme: DocentTheme,
    /// Built on the first generate so a missing API key only matters then
    requester: Option<ScheduleRequester<HttpScheduleGenerator>>,
}

impl Session<'_> {
    fn run(&mut self) -> Result<()> {
        loop {
            let items = vec![
                format!("Faculty ({})", self.store.faculty().len()),
                format!("Halls ({})", self.store.halls().len()),
                match self.store.schedule() {
                    Some(schedule) => format!("Schedule ({} entries)", schedule.len()),
                    None => "Schedule".to_string(),
                },
                "Quit".to_string(),
            ];
            let selection = Select::with_theme(&self.theme)
                .with_prompt("What would you like to manage?")
                .items(&items)
                .default(0)
                .interact_opt()?;

            match selection {
                Some(0) => self.roster_menu::<FacultyRoster>()?,
                Some(1) => self.roster_menu::<HallRoster>()?,
                Some(2) => self.schedule_menu()?,
                _ => return Ok(()),
            }
            println!();
        }
    }
}
