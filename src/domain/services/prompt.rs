//! Prompt rendering for the generation service.
//!
//! The request is flattened into one natural-language prompt: every faculty
//! member, every hall, the free-text constraints, then the assignment rules
//! and the exact JSON shape expected back.

use std::fmt::Write;

use crate::domain::ports::GenerationRequest;
use crate::domain::value_objects::CommaList;

/// System message sent ahead of the rendered prompt
pub const SYSTEM_PROMPT: &str = "You are a world-class university schedule optimizer. \
You answer with a single JSON object and nothing else.";

const NONE: &str = "none";

fn list(items: &[String]) -> String {
    if items.is_empty() {
        NONE.to_string()
    } else {
        CommaList::join(items)
    }
}

/// Render the user prompt for a generation request.
pub fn render_prompt(request: &GenerationRequest) -> String {
    let mut out = String::new();

    out.push_str(
        "Given faculty preferences and hall availabilities, generate an optimal class \
schedule that satisfies as many preferences as possible while adhering to all constraints.\n",
    );

    out.push_str("\nFaculty Preferences:\n");
    if request.faculty_preferences.is_empty() {
        out.push_str("  (no faculty defined)\n");
    }
    for f in &request.faculty_preferences {
        let _ = writeln!(
            out,
            "  - Name: {}, Department: {}, Preferred Halls: {}, Preferred Time Slots: {}, Max Classes: {}",
            f.name,
            f.department,
            list(&f.preferred_halls),
            list(&f.preferred_time_slots),
            f.max_classes
        );
    }

    out.push_str("\nHall Availabilities:\n");
    if request.hall_availabilities.is_empty() {
        out.push_str("  (no halls defined)\n");
    }
    for h in &request.hall_availabilities {
        let _ = writeln!(
            out,
            "  - Name: {}, Capacity: {}, Available Times: {}, Equipment: {}",
            h.name,
            h.capacity,
            list(&h.available_times),
            list(&h.equipment)
        );
    }

    let _ = writeln!(
        out,
        "\nConstraints: {}",
        request.constraints.as_deref().unwrap_or(NONE)
    );

    out.push_str(
        "
Rules:
  - Assign every course offered to exactly one faculty member and one hall.
  - Never assign a faculty member more classes than their Max Classes.
  - Only use a hall at one of its Available Times.
  - Consider the equipment a course needs when choosing its hall.
  - When several halls would work, prefer the faculty member's preferred halls and preferred time slots.

Respond with JSON of exactly this shape:
{\"schedule\": [{\"facultyName\": string, \"hallName\": string, \"timeSlot\": string, \"courseName\": string}], \"summary\": string}

The summary describes the generated schedule, including any conflicts and any unassigned faculty.
",
    );

    out
}
