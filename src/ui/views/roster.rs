use docent::domain::entities::{Faculty, Hall};
use docent::CommaList;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::Table;

pub fn render_faculty(faculty: &[Faculty], supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Faculty, "Faculty Management");
    header.add("Members", faculty.len().to_string());
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');

    if faculty.is_empty() {
        out.push_str(&ColoredText::dim("No faculty found.").render(supports_color));
        out.push('\n');
        return out;
    }

    let mut table = Table::new([
        "Name",
        "Department",
        "Preferred Halls",
        "Preferred Times",
        "Max Classes",
    ]);
    for member in faculty {
        table.add_row([
            member.name.clone(),
            member.department.clone(),
            CommaList::join(&member.preferred_halls),
            CommaList::join(&member.preferred_time_slots),
            member.max_classes.to_string(),
        ]);
    }
    out.push_str(&table.render(supports_color, supports_unicode));
    out
}

pub fn render_halls(halls: &[Hall], supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Hall, "Hall Management");
    header.add("Halls", halls.len().to_string());
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');

    if halls.is_empty() {
        out.push_str(&ColoredText::dim("No halls found.").render(supports_color));
        out.push('\n');
        return out;
    }

    let mut table = Table::new(["Name", "Capacity", "Available Times", "Equipment"]);
    for hall in halls {
        table.add_row([
            hall.name.clone(),
            hall.capacity.to_string(),
            CommaList::join(&hall.available_times),
            CommaList::join(&hall.equipment),
        ]);
    }
    out.push_str(&table.render(supports_color, supports_unicode));
    out
}

/// One-line label used in session pick lists
pub fn faculty_label(member: &Faculty) -> String {
    format!("{} ({})", member.name, member.department)
}

pub fn hall_label(hall: &Hall) -> String {
    format!("{} (capacity {})", hall.name, hall.capacity)
}
