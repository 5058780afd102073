//! Read-only views for the public site: event sections, project filter,
//! member roster and card summaries.

use chrono::{DateTime, Utc};

use crate::models::{BlockDocument, Event, EventStatus, Member, MemberStatus, Project};

/// Filter value that matches every project.
pub const ALL_PROJECTS: &str = "all";

pub fn completed_events(events: &[Event]) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| event.status == EventStatus::Completed)
        .collect()
}

/// Upcoming events, soonest first. Events without a schedule sort last.
pub fn upcoming_events(events: &[Event]) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events
        .iter()
        .filter(|event| event.status == EventStatus::Upcoming)
        .collect();
    upcoming.sort_by_key(|event| {
        event
            .date_range()
            .map(|(start, _)| start)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    });
    upcoming
}

/// Human-readable "start - end" dates for an event card.
pub fn event_date_range(event: &Event) -> Option<String> {
    let (start, end) = event.date_range()?;
    let start_text = start.format("%b %-d, %Y").to_string();
    let end_text = end.format("%b %-d, %Y").to_string();
    if start_text == end_text {
        Some(start_text)
    } else {
        Some(format!("{} - {}", start_text, end_text))
    }
}

/// Projects carrying a tag named `filter`, or all of them for [`ALL_PROJECTS`].
pub fn filter_projects<'a>(projects: &'a [Project], filter: &str) -> Vec<&'a Project> {
    let filter = filter.trim();
    if filter.is_empty() || filter.eq_ignore_ascii_case(ALL_PROJECTS) {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|project| project.has_tag_named(filter))
        .collect()
}

pub fn active_members(members: &[Member]) -> Vec<&Member> {
    members
        .iter()
        .filter(|member| member.status == MemberStatus::Active)
        .collect()
}

/// Plain-text excerpt of a stored description, cut at `max_chars` on a
/// character boundary with a trailing ellipsis.
pub fn summary(description: &str, max_chars: usize) -> String {
    let text = BlockDocument::parse(description).plain_text();
    if text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
