//! Faculty and hall management menus

use anyhow::Result;
use dialoguer::{Confirm, Select};
use docent::{DocentResult, Faculty, FacultyForm, Form, Hall, HallForm, SessionStore};

use super::form::run_form;
use super::Session;
use crate::ui::error::print_error;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::roster::{faculty_label, hall_label, render_faculty, render_halls};

/// One of the two session rosters, as seen by the generic menu
pub(super) trait RosterKind {
    type Entity;
    type EditForm: Form<Output = Self::Entity> + Default;

    /// Menu title
    const TITLE: &'static str;
    const EMPTY: &'static str;

    fn entries(store: &SessionStore) -> &[Self::Entity];
    fn name(entity: &Self::Entity) -> &str;
    fn label(entity: &Self::Entity) -> String;
    fn edit_form(entity: &Self::Entity) -> Self::EditForm;
    fn add(store: &mut SessionStore, entity: Self::Entity) -> DocentResult<()>;
    fn update(store: &mut SessionStore, name: &str, entity: Self::Entity) -> DocentResult<bool>;
    fn delete(store: &mut SessionStore, name: &str) -> usize;
    fn render(store: &SessionStore, color: bool, unicode: bool) -> String;
}

pub(super) struct FacultyRoster;

impl RosterKind for FacultyRoster {
    type Entity = Faculty;
    type EditForm = FacultyForm;

    const TITLE: &'static str = "Faculty Management";
    const EMPTY: &'static str = "No faculty found.";

    fn entries(store: &SessionStore) -> &[Faculty] {
        store.faculty()
    }

    fn name(entity: &Faculty) -> &str {
        &entity.name
    }

    fn label(entity: &Faculty) -> String {
        faculty_label(entity)
    }

    fn edit_form(entity: &Faculty) -> FacultyForm {
        FacultyForm::from_entity(entity)
    }

    fn add(store: &mut SessionStore, entity: Faculty) -> DocentResult<()> {
        store.add_faculty(entity)
    }

    fn update(store: &mut SessionStore, name: &str, entity: Faculty) -> DocentResult<bool> {
        store.update_faculty(name, entity)
    }

    fn delete(store: &mut SessionStore, name: &str) -> usize {
        store.delete_faculty(name)
    }

    fn render(store: &SessionStore, color: bool, unicode: bool) -> String {
        render_faculty(store.faculty(), color, unicode)
    }
}

pub(super) struct HallRoster;

impl RosterKind for HallRoster {
    type Entity = Hall;
    type EditForm = HallForm;

    const TITLE: &'static str = "Hall Management";
    const EMPTY: &'static str = "No halls found.";

    fn entries(store: &SessionStore) -> &[Hall] {
        store.halls()
    }

    fn name(entity: &Hall) -> &str {
        &entity.name
    }

    fn label(entity: &Hall) -> String {
        hall_label(entity)
    }

    fn edit_form(entity: &Hall) -> HallForm {
        HallForm::from_entity(entity)
    }

    fn add(store: &mut SessionStore, entity: Hall) -> DocentResult<()> {
        store.add_hall(entity)
    }

    fn update(store: &mut SessionStore, name: &str, entity: Hall) -> DocentResult<bool> {
        store.update_hall(name, entity)
    }

    fn delete(store: &mut SessionStore, name: &str) -> usize {
        store.delete_hall(name)
    }

    fn render(store: &SessionStore, color: bool, unicode: bool) -> String {
        render_halls(store.halls(), color, unicode)
    }
}

impl Session<'_> {
    pub(super) fn roster_menu<K: RosterKind>(&mut self) -> Result<()> {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        loop {
            println!();
            let items = vec!["List", "Add", "Edit", "Delete", "Back"];
            let selection = Select::with_theme(&self.theme)
                .with_prompt(K::TITLE)
                .items(&items)
                .default(0)
                .interact_opt()?;

            match selection {
                Some(0) => print!("{}", K::render(&self.store, color, unicode)),
                Some(1) => {
                    let form = K::EditForm::default();
                    if let Some(entity) = run_form(&self.theme, form, color, unicode)? {
                        if let Err(err) = K::add(&mut self.store, entity) {
                            print_error(&anyhow::Error::from(err), self.ui, "session");
                        }
                    }
                }
                Some(2) => {
                    let Some(index) = self.pick::<K>("Edit which entry?")? else {
                        continue;
                    };
                    let current = &K::entries(&self.store)[index];
                    let name = K::name(current).to_string();
                    let form = K::edit_form(current);
                    if let Some(entity) = run_form(&self.theme, form, color, unicode)? {
                        if let Err(err) = K::update(&mut self.store, &name, entity) {
                            print_error(&anyhow::Error::from(err), self.ui, "session");
                        }
                    }
                }
                Some(3) => {
                    let Some(index) = self.pick::<K>("Delete which entry?")? else {
                        continue;
                    };
                    let current = &K::entries(&self.store)[index];
                    let name = K::name(current).to_string();
                    let confirmed = Confirm::with_theme(&self.theme)
                        .with_prompt(format!("Delete {}?", K::label(current)))
                        .default(false)
                        .interact()?;
                    if confirmed {
                        K::delete(&mut self.store, &name);
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Index of the chosen entry, or `None` for an empty roster or Esc
    fn pick<K: RosterKind>(&self, prompt: &str) -> Result<Option<usize>> {
        let entries = K::entries(&self.store);
        if entries.is_empty() {
            println!("{}", ColoredText::dim(K::EMPTY).render(self.ui.color));
            return Ok(None);
        }
        let labels: Vec<String> = entries.iter().map(K::label).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact_opt()?;
        Ok(selection)
    }
}
