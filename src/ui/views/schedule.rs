use chrono::{DateTime, Local, Utc};
use docent::domain::entities::Schedule;
use docent::domain::services::IntegrityReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::Table;

pub fn render_schedule(
    schedule: Option<&Schedule>,
    stored_at: Option<DateTime<Utc>>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Schedule, "Schedule Dashboard");
    let Some(schedule) = schedule else {
        let mut out = header.render(supports_color, supports_unicode);
        out.push('\n');
        out.push_str(
            &ColoredText::dim("No Schedule Generated").bold().render(supports_color),
        );
        out.push('\n');
        out.push_str(
            "Generate a schedule to create a new timetable from the defined faculty and hall data.\n",
        );
        return out;
    };

    header.add("Entries", schedule.len().to_string());
    if let Some(at) = stored_at {
        header.add(
            "Generated",
            at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        );
    }
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');

    if schedule.is_empty() {
        out.push_str(&ColoredText::dim("The schedule has no entries.").render(supports_color));
        out.push('\n');
    } else {
        let mut table = Table::new(["#", "Course", "Faculty", "Hall", "Time Slot"]);
        for (i, entry) in schedule.entries.iter().enumerate() {
            table.add_row([
                (i + 1).to_string(),
                entry.course_name.clone(),
                entry.faculty_name.clone(),
                entry.hall_name.clone(),
                entry.time_slot.clone(),
            ]);
        }
        out.push_str(&table.render(supports_color, supports_unicode));
    }

    if !schedule.summary.trim().is_empty() {
        out.push('\n');
        out.push_str(&ColoredText::info("Summary").bold().render(supports_color));
        out.push('\n');
        out.push_str(schedule.summary.trim());
        out.push('\n');
    }
    out
}

pub fn render_integrity(
    report: &IntegrityReport,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    if report.is_clean() {
        return None;
    }
    let title = match report.len() {
        1 => "1 schedule issue".to_string(),
        n => format!("{} schedule issues", n),
    };
    let mut block = WarningBlock::new(title);
    for issue in &report.issues {
        block.add_line(issue.to_string());
    }
    Some(block.render(supports_color, supports_unicode))
}
