//! Domain types mirrored into the scheduler state.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A calendar display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewKind {
    /// Scan order used whenever a fallback view has to be picked.
    pub const CANONICAL: [ViewKind; 3] = [ViewKind::Day, ViewKind::Week, ViewKind::Month];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Day => "day",
            ViewKind::Week => "week",
            ViewKind::Month => "month",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Month view settings. Present means the month view is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthConfig {
    /// Visible weekdays, 0 = Sunday.
    #[serde(default = "default_week_days")]
    pub week_days: Vec<u8>,
    #[serde(default = "default_week_start_on")]
    pub week_start_on: u8,
    #[serde(default = "default_start_hour")]
    pub start_hour: u8,
    #[serde(default = "default_end_hour")]
    pub end_hour: u8,
}

/// Week view settings. Present means the week view is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekConfig {
    #[serde(default = "default_week_days")]
    pub week_days: Vec<u8>,
    #[serde(default = "default_week_start_on")]
    pub week_start_on: u8,
    #[serde(default = "default_start_hour")]
    pub start_hour: u8,
    #[serde(default = "default_end_hour")]
    pub end_hour: u8,
    /// Cell length in minutes.
    #[serde(default = "default_step")]
    pub step: u16,
}

/// Day view settings. Present means the day view is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayConfig {
    #[serde(default = "default_start_hour")]
    pub start_hour: u8,
    #[serde(default = "default_end_hour")]
    pub end_hour: u8,
    #[serde(default = "default_step")]
    pub step: u16,
}

fn default_week_days() -> Vec<u8> {
    (0..7).collect()
}

fn default_week_start_on() -> u8 {
    6
}

fn default_start_hour() -> u8 {
    9
}

fn default_end_hour() -> u8 {
    17
}

fn default_step() -> u16 {
    60
}

impl Default for MonthConfig {
    fn default() -> Self {
        Self {
            week_days: default_week_days(),
            week_start_on: default_week_start_on(),
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
        }
    }
}

impl Default for WeekConfig {
    fn default() -> Self {
        Self {
            week_days: default_week_days(),
            week_start_on: default_week_start_on(),
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            step: default_step(),
        }
    }
}

impl Default for DayConfig {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            step: default_step(),
        }
    }
}

/// How resources are laid out when the widget shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceViewMode {
    #[default]
    Default,
    Tabs,
    Vertical,
}

/// Text direction passed through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// A bookable resource (room, person, machine). Unknown keys are kept.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Event identity. Hosts use either numeric or string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{}", n),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EventId {
    fn from(value: i64) -> Self {
        EventId::Number(value)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        EventId::Text(value.to_string())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        EventId::Text(value)
    }
}

/// A calendar event as held by the widget.
///
/// Only `event_id` takes part in upsert matching; two events with the
/// same id are the same event regardless of their other fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedEvent {
    pub event_id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<EventId>,
    /// Custom field values, keyed by field name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProcessedEvent {
    pub fn new(
        event_id: impl Into<EventId>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            title: title.into(),
            start,
            end,
            disabled: None,
            color: None,
            admin_id: None,
            extra: Map::new(),
        }
    }
}

/// First id that occurs more than once in `events`, if any.
pub fn duplicate_event_id(events: &[ProcessedEvent]) -> Option<&EventId> {
    let mut seen = HashSet::new();
    events
        .iter()
        .map(|event| &event.event_id)
        .find(|id| !seen.insert(*id))
}

/// What the editor dialog is confirming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    Create,
    Edit,
}

/// A time span picked on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Context of the editor dialog: an empty slot or an existing event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Selection {
    Range(SelectedRange),
    Event(ProcessedEvent),
}

impl Selection {
    /// The action the dialog will confirm for this selection.
    pub fn status(&self) -> EventAction {
        match self {
            Selection::Range(_) => EventAction::Create,
            Selection::Event(_) => EventAction::Edit,
        }
    }
}
