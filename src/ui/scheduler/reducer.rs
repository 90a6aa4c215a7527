//! Reducer for the scheduler state.

use crate::ui::mvi::Reducer;

use super::intent::{SchedulerIntent, StateValue};
use super::state::SchedulerState;
use super::views::{one_view, ViewSource};

/// Pure transition table for [`SchedulerState`].
///
/// Logging, navigation policy and event upserts live in the provider;
/// this only moves values into place. `UpdateProps` expects at least one
/// enabled view in its payload: the provider rejects props without one
/// before dispatch, and given such props anyway the reducer keeps the
/// current view even though it is no longer enabled.
pub struct SchedulerReducer;

impl Reducer for SchedulerReducer {
    type State = SchedulerState;
    type Intent = SchedulerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SchedulerIntent::Set(value) => set(state, value),

            SchedulerIntent::UpdateProps(props) => {
                let mut next = SchedulerState {
                    events: props.events,
                    resources: props.resources,
                    resource_view_mode: props.resource_view_mode,
                    month: props.month,
                    week: props.week,
                    day: props.day,
                    fields: props.fields,
                    locale: props.locale,
                    direction: props.direction,
                    loading: props.loading,
                    ..state
                };
                // Narrowed views: move off a view that just got disabled.
                // With nothing enabled the view stays put; the provider never
                // dispatches such props.
                if !next.view_enabled(next.view) {
                    if let Ok(view) = one_view(&next) {
                        next.view = view;
                    }
                }
                next
            }

            SchedulerIntent::TriggerDialog { status, selected } => SchedulerState {
                dialog: status.unwrap_or(selected.is_some()),
                selected_range: selected,
                ..state
            },

            SchedulerIntent::TriggerLoading(loading) => SchedulerState { loading, ..state },
        }
    }
}

fn set(state: SchedulerState, value: StateValue) -> SchedulerState {
    match value {
        StateValue::View(view) => {
            if state.view_enabled(view) {
                SchedulerState { view, ..state }
            } else {
                state
            }
        }
        StateValue::Events(events) => SchedulerState { events, ..state },
        StateValue::Loading(loading) => SchedulerState { loading, ..state },
        StateValue::Fields(fields) => SchedulerState { fields, ..state },
        StateValue::Resources(resources) => SchedulerState { resources, ..state },
        StateValue::ResourceViewMode(resource_view_mode) => SchedulerState {
            resource_view_mode,
            ..state
        },
        StateValue::SelectedDate(date) => SchedulerState {
            selected_date: Some(date),
            ..state
        },
        // One-way: once mounted, stays mounted.
        StateValue::Mounted(mounted) => SchedulerState {
            mounted: state.mounted || mounted,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerProps;
    use crate::ui::scheduler::model::{SelectedRange, Selection, ViewKind};
    use chrono::{NaiveDate, NaiveDateTime};

    fn initial() -> SchedulerState {
        SchedulerState::initial(&SchedulerProps::default()).unwrap()
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 20)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn set_loading_is_idempotent() {
        let once =
            SchedulerReducer::reduce(initial(), SchedulerIntent::Set(StateValue::Loading(true)));
        let twice = SchedulerReducer::reduce(
            once.clone(),
            SchedulerIntent::Set(StateValue::Loading(true)),
        );
        assert!(once.loading);
        assert_eq!(once, twice);
    }

    #[test]
    fn set_view_to_disabled_view_is_noop() {
        let mut state = initial();
        state.month = None;
        let next = SchedulerReducer::reduce(
            state.clone(),
            SchedulerIntent::Set(StateValue::View(ViewKind::Month)),
        );
        assert_eq!(next, state);
    }

    #[test]
    fn mounted_never_goes_back() {
        let state =
            SchedulerReducer::reduce(initial(), SchedulerIntent::Set(StateValue::Mounted(true)));
        let state =
            SchedulerReducer::reduce(state, SchedulerIntent::Set(StateValue::Mounted(false)));
        assert!(state.mounted);
    }

    #[test]
    fn update_props_moves_off_disabled_view() {
        let mut state = initial();
        state.view = ViewKind::Day;
        let mut props = SchedulerProps::default();
        props.day = None;
        let next =
            SchedulerReducer::reduce(state, SchedulerIntent::UpdateProps(props.external()));
        assert_eq!(next.view, ViewKind::Week);
        assert!(next.day.is_none());
    }

    #[test]
    fn update_props_without_views_keeps_view() {
        let state = initial();
        let view = state.view;
        let mut props = SchedulerProps::default();
        props.day = None;
        props.week = None;
        props.month = None;
        let next =
            SchedulerReducer::reduce(state, SchedulerIntent::UpdateProps(props.external()));
        assert_eq!(next.view, view);
        assert!(!next.view_enabled(next.view));
    }

    #[test]
    fn trigger_dialog_without_status_follows_selection() {
        let selection = Selection::Range(SelectedRange {
            start: at(9),
            end: at(10),
        });
        let opened = SchedulerReducer::reduce(
            initial(),
            SchedulerIntent::TriggerDialog {
                status: None,
                selected: Some(selection.clone()),
            },
        );
        assert!(opened.dialog);
        assert_eq!(opened.selected_range, Some(selection));

        let closed = SchedulerReducer::reduce(
            opened,
            SchedulerIntent::TriggerDialog {
                status: None,
                selected: None,
            },
        );
        assert!(!closed.dialog);
        assert_eq!(closed.selected_range, None);
    }

    #[test]
    fn trigger_loading_sets_flag() {
        let next = SchedulerReducer::reduce(initial(), SchedulerIntent::TriggerLoading(true));
        assert!(next.loading);
        let next = SchedulerReducer::reduce(next, SchedulerIntent::TriggerLoading(false));
        assert!(!next.loading);
    }
}
