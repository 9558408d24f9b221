//! `docent roster` - print the starting roster

use anyhow::Result;
use docent::config::Config;
use docent::presentation::RosterArgs;
use docent::Roster;

use super::setup;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::views::roster::{render_faculty, render_halls};

pub fn cmd_roster(args: &RosterArgs, config: &Config, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new("roster"))?;
    }

    let store = setup::open_store(args, config, ui, "roster")?;

    if ui.json {
        let roster = Roster::new(store.faculty().to_vec(), store.halls().to_vec());
        emit_event(&DataEvent::new("roster", "roster", &roster))?;
        emit_event(&CompleteEvent::success("roster"))?;
        return Ok(());
    }

    print!("{}", render_faculty(store.faculty(), ui.color, ui.unicode));
    println!();
    print!("{}", render_halls(store.halls(), ui.color, ui.unicode));
    Ok(())
}
