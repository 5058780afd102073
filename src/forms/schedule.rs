//! Positional editing of an event's ordered schedule entries.
//!
//! New entries get a `temp-` placeholder id; payload building strips it so the
//! backend inserts them as new rows. Entry order is significant: the first
//! start and the last end give the event's overall date range.

use crate::errors::{ClientError, FieldErrors};
use crate::models::{timestamp, ScheduleEntry, ScheduleId, SchedulePayload};

const FIELD: &str = "eventSchedule";

/// Raw values from the schedule inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleInput {
    pub description: String,
    pub start: String,
    pub end: String,
}

impl ScheduleInput {
    pub fn new(
        description: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}

fn rejected(message: &str) -> ClientError {
    let mut errors = FieldErrors::new();
    errors.set(FIELD, message);
    ClientError::Validation(errors)
}

fn build_entry(id: ScheduleId, input: &ScheduleInput) -> Result<ScheduleEntry, ClientError> {
    let description = input.description.trim();
    if description.is_empty() || input.start.trim().is_empty() || input.end.trim().is_empty() {
        return Err(rejected("Description, start and end are required"));
    }

    let start_date = timestamp::parse(&input.start).ok_or_else(|| rejected("Invalid start date"))?;
    let end_date = timestamp::parse(&input.end).ok_or_else(|| rejected("Invalid end date"))?;
    if end_date < start_date {
        return Err(rejected("End date must be after start date"));
    }

    Ok(ScheduleEntry {
        id,
        description: description.to_string(),
        start_date,
        end_date,
    })
}

fn out_of_range(index: usize, len: usize) -> ClientError {
    ClientError::NotFound(format!(
        "Schedule entry {} does not exist ({} entries)",
        index, len
    ))
}

/// Append a new entry. Rejected input leaves `schedule` unchanged.
pub fn add_schedule_entry<'a>(
    schedule: &'a mut Vec<ScheduleEntry>,
    input: &ScheduleInput,
) -> Result<&'a ScheduleEntry, ClientError> {
    let entry = build_entry(ScheduleId::temporary(), input)?;
    tracing::debug!("Adding schedule entry {}", entry.id.as_str());
    schedule.push(entry);
    Ok(&schedule[schedule.len() - 1])
}

/// Replace the entry at `index`, keeping its id.
pub fn update_schedule_entry(
    schedule: &mut [ScheduleEntry],
    index: usize,
    input: &ScheduleInput,
) -> Result<(), ClientError> {
    let len = schedule.len();
    let slot = schedule.get_mut(index).ok_or_else(|| out_of_range(index, len))?;
    *slot = build_entry(slot.id.clone(), input)?;
    Ok(())
}

/// Remove the entry at `index`.
pub fn remove_schedule_entry(
    schedule: &mut Vec<ScheduleEntry>,
    index: usize,
) -> Result<ScheduleEntry, ClientError> {
    if index >= schedule.len() {
        return Err(out_of_range(index, schedule.len()));
    }
    Ok(schedule.remove(index))
}

/// Wire form of the whole list, placeholder ids stripped.
pub fn schedule_payload(schedule: &[ScheduleEntry]) -> Vec<SchedulePayload> {
    schedule.iter().map(ScheduleEntry::to_payload).collect()
}
