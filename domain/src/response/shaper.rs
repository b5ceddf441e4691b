//! Response shaper
//!
//! Flattens [`DomainRecords`] into [`ResponseEntry`] values, one shaping
//! function per record kind. Shaping never fails: a record that cannot be
//! rendered is logged and dropped instead of aborting the response.

use super::entry::ResponseEntry;
use super::number::format_significant;
use crate::calendar::{day_name, format_minute_range};
use crate::record::{
    AssignmentItem, AssistantContact, DomainRecords, GradeItem, InformationItem, ScheduleSlot,
};
use std::collections::HashMap;
use tracing::warn;

/// Image reference used until records carry their own
pub const PLACEHOLDER_IMAGE: &str = "/api/v1/file/error/not-found.png";

/// Path prefix for assignment detail links
pub const ASSIGNMENT_URL_PREFIX: &str = "/api/v1/assignment/";

/// Significant digits for rendered scores
const SCORE_DIGITS: usize = 3;

/// Shape records into response entries, dispatching on the record kind
pub fn shape(records: DomainRecords) -> Vec<ResponseEntry> {
    match records {
        DomainRecords::Assistant(records) => shape_assistants(&records),
        DomainRecords::Information(records) => records.iter().map(shape_information).collect(),
        DomainRecords::Schedule(records) => records.iter().filter_map(shape_schedule).collect(),
        DomainRecords::Assignment(records) => records.iter().map(shape_assignment).collect(),
        DomainRecords::Grade(records) => records.iter().filter_map(shape_grade).collect(),
    }
}

/// One entry per distinct assistant, in order of first appearance.
///
/// The first record seeds the entry; later records for the same assistant
/// only add their course name, and only if it is not listed yet.
pub fn shape_assistants(records: &[AssistantContact]) -> Vec<ResponseEntry> {
    let mut entries: Vec<ResponseEntry> = Vec::new();
    let mut index_by_assistant: HashMap<i64, usize> = HashMap::new();

    for record in records {
        if let Some(&index) = index_by_assistant.get(&record.assistant_id) {
            entries[index].push_unique("courses", &record.course_name);
            continue;
        }

        index_by_assistant.insert(record.assistant_id, entries.len());
        entries.push(
            ResponseEntry::new()
                .with("name", record.name.as_str())
                .with("phone", record.phone.clone().unwrap_or_default())
                .with("line_id", record.line_id.clone().unwrap_or_default())
                .with("courses", vec![record.course_name.clone()])
                .with("image", PLACEHOLDER_IMAGE),
        );
    }

    entries
}

pub fn shape_information(record: &InformationItem) -> ResponseEntry {
    ResponseEntry::new()
        .with("title", record.title.as_str())
        .with("description", record.description.clone().unwrap_or_default())
        .with("image", PLACEHOLDER_IMAGE)
}

pub fn shape_schedule(record: &ScheduleSlot) -> Option<ResponseEntry> {
    let Some(day) = day_name(record.day) else {
        warn!(
            "Dropping schedule {}: day code {} out of range",
            record.schedule_id, record.day
        );
        return None;
    };
    let Some(time) = format_minute_range(record.start_minute, record.end_minute) else {
        warn!(
            "Dropping schedule {}: minutes {}..{} out of range",
            record.schedule_id, record.start_minute, record.end_minute
        );
        return None;
    };

    Some(
        ResponseEntry::new()
            .with("course_name", record.course_name.as_str())
            .with("day", day)
            .with("place", record.place.as_str())
            .with("time", time),
    )
}

pub fn shape_assignment(record: &AssignmentItem) -> ResponseEntry {
    ResponseEntry::new()
        .with("url", format!("{}{}", ASSIGNMENT_URL_PREFIX, record.id))
        .with("name", record.name.as_str())
        .with("description", record.description.clone().unwrap_or_default())
        .with("due_date", record.due_date.timestamp())
        .with("course_name", record.course_name.as_str())
}

pub fn shape_grade(record: &GradeItem) -> Option<ResponseEntry> {
    let Some(score) = format_significant(record.score, SCORE_DIGITS) else {
        warn!(
            "Dropping grade for assignment {}: score is not finite",
            record.assignment_id
        );
        return None;
    };

    Some(
        ResponseEntry::new()
            .with("url", format!("{}{}", ASSIGNMENT_URL_PREFIX, record.assignment_id))
            .with("name", record.name.as_str())
            .with("score", score)
            .with("scored_time", record.updated_at.timestamp())
            .with("course_name", record.course_name.as_str()),
    )
}
