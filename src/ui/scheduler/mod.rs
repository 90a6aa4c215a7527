//! Scheduler widget state feature module.
//!
//! Holds the view mode, event list, resources, editor fields and dialog
//! flags of a calendar widget, and the rules for changing them.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `SchedulerState` snapshot and host-owned `ExternalProps`
//! - `intent.rs` - Closed set of transitions (Set, UpdateProps, TriggerDialog, TriggerLoading)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `provider.rs` - Owner of the state: queueing, config sync, navigation, event upserts

mod fields;
mod intent;
mod model;
mod provider;
mod reducer;
mod state;
mod views;

pub use fields::{default_fields, merge_fields, FieldConfig, FieldKind, FieldOption, FieldProps};
pub use intent::{SchedulerIntent, StateValue};
pub use model::{
    duplicate_event_id, DayConfig, Direction, EventAction, EventId, MonthConfig, ProcessedEvent,
    Resource, ResourceViewMode, SelectedRange, Selection, ViewKind, WeekConfig,
};
pub use provider::{SchedulerContext, SchedulerProvider, SyncOutcome};
pub use reducer::SchedulerReducer;
pub use state::{ExternalProps, SchedulerState};
pub use views::{available_views, one_view, resolve_view, view_configured, ViewSource};
