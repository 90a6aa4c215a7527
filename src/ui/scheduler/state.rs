//! State of the scheduler widget.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::SchedulerProps;
use crate::error::SchedulerError;
use crate::ui::mvi::UiState;

use super::fields::{merge_fields, FieldProps};
use super::model::{
    duplicate_event_id, DayConfig, Direction, EventId, MonthConfig, ProcessedEvent, Resource,
    ResourceViewMode, Selection, ViewKind, WeekConfig,
};
use super::views::{resolve_view, view_configured, ViewSource};

/// Everything descendants of the widget can read.
///
/// Host-owned fields (`events` through `loading`) mirror the last applied
/// configuration. `dialog`, `mounted`, `selected_range` and
/// `selected_date` belong to the widget and are never overwritten by a
/// configuration sync.
///
/// `Default` is only a placeholder used while a value is moved through the
/// reducer; real states come from [`SchedulerState::initial`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SchedulerState {
    pub view: ViewKind,
    pub events: Vec<ProcessedEvent>,
    pub resources: Vec<Resource>,
    pub resource_view_mode: ResourceViewMode,
    pub month: Option<MonthConfig>,
    pub week: Option<WeekConfig>,
    pub day: Option<DayConfig>,
    pub fields: Vec<FieldProps>,
    pub locale: String,
    pub direction: Direction,
    pub loading: bool,
    pub dialog: bool,
    pub mounted: bool,
    pub selected_range: Option<Selection>,
    pub selected_date: Option<NaiveDate>,
}

impl UiState for SchedulerState {}

impl SchedulerState {
    /// Build the first state from host configuration.
    ///
    /// Keeps the requested view when it is enabled, otherwise falls back to
    /// the first enabled one. Fails if no view is enabled at all, or if two
    /// events share an id.
    pub fn initial(props: &SchedulerProps) -> Result<Self, SchedulerError> {
        let view = resolve_view(props, props.view)?;
        if let Some(event_id) = duplicate_event_id(&props.events) {
            return Err(SchedulerError::DuplicateEvent {
                event_id: event_id.clone(),
            });
        }
        Ok(Self {
            view,
            events: props.events.clone(),
            resources: props.resources.clone(),
            resource_view_mode: props.resource_view_mode,
            month: props.month.clone(),
            week: props.week.clone(),
            day: props.day.clone(),
            fields: merge_fields(&props.fields),
            locale: props.locale.clone(),
            direction: props.direction,
            loading: props.loading,
            dialog: false,
            mounted: false,
            selected_range: None,
            selected_date: props.selected_date,
        })
    }

    pub fn event(&self, event_id: &EventId) -> Option<&ProcessedEvent> {
        self.events.iter().find(|e| &e.event_id == event_id)
    }
}

impl ViewSource for SchedulerState {
    fn view_enabled(&self, view: ViewKind) -> bool {
        view_configured(view, &self.day, &self.week, &self.month)
    }
}

/// Host-owned part of the state, pushed on every configuration change.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalProps {
    pub events: Vec<ProcessedEvent>,
    pub resources: Vec<Resource>,
    pub resource_view_mode: ResourceViewMode,
    pub month: Option<MonthConfig>,
    pub week: Option<WeekConfig>,
    pub day: Option<DayConfig>,
    pub fields: Vec<FieldProps>,
    pub locale: String,
    pub direction: Direction,
    pub loading: bool,
}

impl ViewSource for ExternalProps {
    fn view_enabled(&self, view: ViewKind) -> bool {
        view_configured(view, &self.day, &self.week, &self.month)
    }
}
