use thiserror::Error;

use crate::ui::scheduler::EventId;

/// Errors surfaced by the scheduler state container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// The configuration enables none of day/week/month.
    #[error("No views enabled: enable at least one of day, week or month")]
    NoViewsEnabled,

    /// A created event reuses the id of an event already in the list.
    #[error("Event '{event_id}' already exists")]
    DuplicateEvent { event_id: EventId },
}
