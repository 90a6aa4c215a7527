//! Intents for the scheduler state reducer.

use chrono::NaiveDate;

use crate::ui::mvi::Intent;

use super::fields::FieldProps;
use super::model::{ProcessedEvent, Resource, ResourceViewMode, Selection, ViewKind};
use super::state::ExternalProps;

/// A typed single-field write.
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    View(ViewKind),
    Events(Vec<ProcessedEvent>),
    Loading(bool),
    Fields(Vec<FieldProps>),
    Resources(Vec<Resource>),
    ResourceViewMode(ResourceViewMode),
    SelectedDate(NaiveDate),
    Mounted(bool),
}

impl StateValue {
    /// Name of the state field this value targets.
    pub fn field(&self) -> &'static str {
        match self {
            StateValue::View(_) => "view",
            StateValue::Events(_) => "events",
            StateValue::Loading(_) => "loading",
            StateValue::Fields(_) => "fields",
            StateValue::Resources(_) => "resources",
            StateValue::ResourceViewMode(_) => "resource_view_mode",
            StateValue::SelectedDate(_) => "selected_date",
            StateValue::Mounted(_) => "mounted",
        }
    }
}

/// Intents that can be dispatched to the scheduler reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerIntent {
    /// Replace one field, leave the rest alone.
    Set(StateValue),

    /// Host configuration changed. Overwrites host-owned fields only.
    UpdateProps(ExternalProps),

    /// Open or close the editor together with its selection.
    /// `status: None` opens iff a selection is given.
    TriggerDialog {
        status: Option<bool>,
        selected: Option<Selection>,
    },

    /// Show or hide the busy indicator.
    TriggerLoading(bool),
}

impl SchedulerIntent {
    pub fn kind(&self) -> &'static str {
        match self {
            SchedulerIntent::Set(_) => "set",
            SchedulerIntent::UpdateProps(_) => "update_props",
            SchedulerIntent::TriggerDialog { .. } => "trigger_dialog",
            SchedulerIntent::TriggerLoading(_) => "trigger_loading",
        }
    }
}

impl Intent for SchedulerIntent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_match_state_fields() {
        assert_eq!(StateValue::View(ViewKind::Day).field(), "view");
        assert_eq!(StateValue::Mounted(true).field(), "mounted");
        assert_eq!(
            StateValue::ResourceViewMode(ResourceViewMode::Tabs).field(),
            "resource_view_mode"
        );
        assert_eq!(StateValue::Events(Vec::new()).field(), "events");
    }
}
