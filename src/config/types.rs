use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ui::scheduler::{
    merge_fields, view_configured, DayConfig, Direction, ExternalProps, FieldProps, MonthConfig,
    ProcessedEvent, Resource, ResourceViewMode, ViewKind, ViewSource, WeekConfig,
};

/// Locale used when the configuration does not name one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Configuration handed to the widget by its host.
///
/// A view kind is enabled iff its settings table is present. In a config
/// file an absent `[day]`, `[week]` or `[month]` table disables that view;
/// `SchedulerProps::default()` enables all three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerProps {
    /// Requested initial view. Ignored if that view is disabled.
    #[serde(default)]
    pub view: ViewKind,
    #[serde(default)]
    pub month: Option<MonthConfig>,
    #[serde(default)]
    pub week: Option<WeekConfig>,
    #[serde(default)]
    pub day: Option<DayConfig>,
    #[serde(default)]
    pub events: Vec<ProcessedEvent>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub resource_view_mode: ResourceViewMode,
    /// Custom editor fields, appended after the built-in ones.
    #[serde(default)]
    pub fields: Vec<FieldProps>,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub loading: bool,
    /// Date the widget opens on.
    #[serde(default)]
    pub selected_date: Option<NaiveDate>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for SchedulerProps {
    fn default() -> Self {
        Self {
            view: ViewKind::default(),
            month: Some(MonthConfig::default()),
            week: Some(WeekConfig::default()),
            day: Some(DayConfig::default()),
            events: Vec::new(),
            resources: Vec::new(),
            resource_view_mode: ResourceViewMode::default(),
            fields: Vec::new(),
            locale: default_locale(),
            direction: Direction::default(),
            loading: false,
            selected_date: None,
        }
    }
}

impl SchedulerProps {
    /// Snapshot of the fields the widget mirrors from its host.
    ///
    /// `fields` comes back with the built-in fields prepended, so a
    /// synchronized state keeps the same layout as a freshly built one.
    pub fn external(&self) -> ExternalProps {
        ExternalProps {
            events: self.events.clone(),
            resources: self.resources.clone(),
            resource_view_mode: self.resource_view_mode,
            month: self.month.clone(),
            week: self.week.clone(),
            day: self.day.clone(),
            fields: merge_fields(&self.fields),
            locale: self.locale.clone(),
            direction: self.direction,
            loading: self.loading,
        }
    }
}

impl ViewSource for SchedulerProps {
    fn view_enabled(&self, view: ViewKind) -> bool {
        view_configured(view, &self.day, &self.week, &self.month)
    }
}
