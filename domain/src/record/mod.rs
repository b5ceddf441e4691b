//! Domain records and the sum type that carries them to shaping.

pub mod entities;

pub use entities::{
    AssignmentItem, AssistantContact, Enrollment, GradeItem, InformationItem, ScheduleSlot,
};

use crate::intent::Intent;

/// Records of one lookup, tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum DomainRecords {
    Assistant(Vec<AssistantContact>),
    Information(Vec<InformationItem>),
    Schedule(Vec<ScheduleSlot>),
    Assignment(Vec<AssignmentItem>),
    Grade(Vec<GradeItem>),
}

impl DomainRecords {
    /// Intent the records answer
    pub fn intent(&self) -> Intent {
        match self {
            DomainRecords::Assistant(_) => Intent::Assistant,
            DomainRecords::Information(_) => Intent::Information,
            DomainRecords::Schedule(_) => Intent::Schedule,
            DomainRecords::Assignment(_) => Intent::Assignment,
            DomainRecords::Grade(_) => Intent::Grade,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DomainRecords::Assistant(r) => r.len(),
            DomainRecords::Information(r) => r.len(),
            DomainRecords::Schedule(r) => r.len(),
            DomainRecords::Assignment(r) => r.len(),
            DomainRecords::Grade(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
