//! Owner of the scheduler state.
//!
//! The provider builds the first state from host configuration, queues
//! intents coming from descendants, applies them through
//! [`SchedulerReducer`] before the next read, and publishes every changed
//! snapshot to subscribers.
//!
//! Host configuration is pushed explicitly with [`SchedulerProvider::sync`].
//! The first call only marks the widget as mounted (the construction-time
//! configuration is already in place); later calls merge host-owned fields
//! whenever they differ from the last merged snapshot.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::watch;

use crate::config::SchedulerProps;
use crate::error::SchedulerError;
use crate::ui::mvi::Reducer;

use super::intent::{SchedulerIntent, StateValue};
use super::model::{duplicate_event_id, EventAction, ProcessedEvent, Selection, ViewKind};
use super::reducer::SchedulerReducer;
use super::state::{ExternalProps, SchedulerState};
use super::views::available_views;

/// What a [`SchedulerProvider::sync`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// First pass: the widget is now mounted, nothing merged.
    Mounted,
    /// Host-owned fields equal the last merged snapshot.
    Unchanged,
    /// Host-owned fields were merged into the state.
    Applied,
}

/// Capabilities handed to descendant components.
///
/// Writes are queued and take effect before the next read through this
/// trait, in the order they were issued.
pub trait SchedulerContext {
    /// Current snapshot, with every queued write applied.
    fn state(&mut self) -> &SchedulerState;

    /// Generic single-field write.
    fn handle_state(&mut self, value: StateValue);

    /// Enabled views in canonical order.
    fn get_views(&mut self) -> Vec<ViewKind>;

    /// Open or close the editor. `status: None` opens iff `selected` is set.
    fn trigger_dialog(&mut self, status: Option<bool>, selected: Option<Selection>);

    fn trigger_loading(&mut self, status: bool);

    /// Jump to `day` in the day view, or the week view if there is no day
    /// view. Without either, logs a warning and changes nothing.
    fn handle_goto_day(&mut self, day: NaiveDate);

    /// Replace (`Edit`) or append (`Create`) `event`, matched by `event_id`.
    fn confirm_event(
        &mut self,
        event: ProcessedEvent,
        action: EventAction,
    ) -> Result<(), SchedulerError>;
}

pub struct SchedulerProvider {
    state: Arc<SchedulerState>,
    pending: VecDeque<SchedulerIntent>,
    /// Host-owned fields as last merged (or as given at construction).
    last_external: ExternalProps,
    publisher: watch::Sender<Arc<SchedulerState>>,
}

impl SchedulerProvider {
    /// Create a provider from host configuration.
    ///
    /// # Errors
    /// Returns [`SchedulerError::NoViewsEnabled`] if the configuration
    /// enables none of day/week/month, and [`SchedulerError::DuplicateEvent`]
    /// if two of its events share an id.
    pub fn new(props: &SchedulerProps) -> Result<Self, SchedulerError> {
        let state = Arc::new(SchedulerState::initial(props)?);
        let (publisher, _) = watch::channel(Arc::clone(&state));

        tracing::info!(
            view = %state.view,
            events = state.events.len(),
            fields = state.fields.len(),
            "Scheduler state initialized"
        );

        Ok(Self {
            state,
            pending: VecDeque::new(),
            last_external: props.external(),
            publisher,
        })
    }

    /// Queue an intent. Applied on the next read or [`flush`](Self::flush).
    pub fn dispatch(&mut self, intent: SchedulerIntent) {
        self.pending.push_back(intent);
    }

    /// Number of intents waiting to be applied.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Apply every queued intent in order and publish the result if it
    /// differs from the last published snapshot. Returns how many intents
    /// were applied.
    pub fn flush(&mut self) -> usize {
        if self.pending.is_empty() {
            return 0;
        }

        let mut state = Arc::unwrap_or_clone(std::mem::take(&mut self.state));
        let mut applied = 0;
        while let Some(intent) = self.pending.pop_front() {
            match &intent {
                SchedulerIntent::Set(value) => tracing::debug!(
                    intent = intent.kind(),
                    field = value.field(),
                    "Applying scheduler intent"
                ),
                _ => tracing::debug!(intent = intent.kind(), "Applying scheduler intent"),
            }
            state = SchedulerReducer::reduce(state, intent);
            applied += 1;
        }
        self.state = Arc::new(state);

        let next = Arc::clone(&self.state);
        self.publisher.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });

        applied
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&mut self) -> Arc<SchedulerState> {
        self.flush();
        Arc::clone(&self.state)
    }

    /// Receiver that sees every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SchedulerState>> {
        self.publisher.subscribe()
    }

    /// Push host configuration into the widget.
    ///
    /// # Errors
    /// Returns [`SchedulerError::NoViewsEnabled`] if `props` would leave the
    /// widget without any view, and [`SchedulerError::DuplicateEvent`] if two
    /// of its events share an id. The state is left as it was in both cases.
    pub fn sync(&mut self, props: &SchedulerProps) -> Result<SyncOutcome, SchedulerError> {
        // Anything queued (the mount mark in particular) lands first.
        self.flush();

        if !self.state.mounted {
            self.dispatch(SchedulerIntent::Set(StateValue::Mounted(true)));
            return Ok(SyncOutcome::Mounted);
        }

        let external = props.external();
        if external == self.last_external {
            return Ok(SyncOutcome::Unchanged);
        }

        if available_views(&external).is_empty() {
            tracing::warn!("Ignoring configuration without any enabled view");
            return Err(SchedulerError::NoViewsEnabled);
        }

        if let Some(event_id) = duplicate_event_id(&external.events) {
            tracing::warn!(event_id = %event_id, "Ignoring configuration with duplicate event id");
            return Err(SchedulerError::DuplicateEvent {
                event_id: event_id.clone(),
            });
        }

        self.last_external = external.clone();
        self.dispatch(SchedulerIntent::UpdateProps(external));
        Ok(SyncOutcome::Applied)
    }
}

impl SchedulerContext for SchedulerProvider {
    fn state(&mut self) -> &SchedulerState {
        self.flush();
        &self.state
    }

    fn handle_state(&mut self, value: StateValue) {
        self.dispatch(SchedulerIntent::Set(value));
    }

    fn get_views(&mut self) -> Vec<ViewKind> {
        available_views(self.state())
    }

    fn trigger_dialog(&mut self, status: Option<bool>, selected: Option<Selection>) {
        self.dispatch(SchedulerIntent::TriggerDialog { status, selected });
    }

    fn trigger_loading(&mut self, status: bool) {
        self.dispatch(SchedulerIntent::TriggerLoading(status));
    }

    fn handle_goto_day(&mut self, day: NaiveDate) {
        let views = self.get_views();
        let target = [ViewKind::Day, ViewKind::Week]
            .into_iter()
            .find(|view| views.contains(view));

        let Some(view) = target else {
            tracing::warn!(date = %day, "No Day/Week views available");
            return;
        };

        tracing::debug!(date = %day, view = %view, "Navigating to day");
        self.handle_state(StateValue::View(view));
        self.handle_state(StateValue::SelectedDate(day));
    }

    fn confirm_event(
        &mut self,
        event: ProcessedEvent,
        action: EventAction,
    ) -> Result<(), SchedulerError> {
        let events = &self.state().events;
        let existing = events.iter().position(|e| e.event_id == event.event_id);

        let updated = match (action, existing) {
            (EventAction::Edit, Some(index)) => {
                let mut updated = events.clone();
                updated[index] = event;
                updated
            }
            (EventAction::Edit, None) => {
                tracing::warn!(event_id = %event.event_id, "Edited event not found, ignoring");
                return Ok(());
            }
            (EventAction::Create, Some(_)) => {
                return Err(SchedulerError::DuplicateEvent {
                    event_id: event.event_id,
                });
            }
            (EventAction::Create, None) => {
                let mut updated = events.clone();
                updated.push(event);
                updated
            }
        };

        self.handle_state(StateValue::Events(updated));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::scheduler::model::EventId;
    use chrono::NaiveDateTime;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn provider() -> SchedulerProvider {
        SchedulerProvider::new(&SchedulerProps::default()).unwrap()
    }

    #[test]
    fn writes_are_queued_until_read() {
        let mut provider = provider();
        provider.trigger_loading(true);
        provider.trigger_loading(false);
        assert_eq!(provider.pending(), 2);
        assert!(!provider.state().loading);
        assert_eq!(provider.pending(), 0);
    }

    #[test]
    fn flush_applies_in_dispatch_order() {
        let mut provider = provider();
        provider.handle_state(StateValue::View(ViewKind::Month));
        provider.handle_state(StateValue::View(ViewKind::Day));
        assert_eq!(provider.flush(), 2);
        assert_eq!(provider.state().view, ViewKind::Day);
    }

    #[test]
    fn create_with_existing_id_is_rejected() {
        let mut provider = provider();
        let event = ProcessedEvent::new(1_i64, "Standup", at(19, 9), at(19, 10));
        provider.confirm_event(event.clone(), EventAction::Create).unwrap();
        let err = provider.confirm_event(event, EventAction::Create).unwrap_err();
        assert_eq!(
            err,
            SchedulerError::DuplicateEvent {
                event_id: EventId::Number(1)
            }
        );
        assert_eq!(provider.state().events.len(), 1);
    }

    #[test]
    fn edit_of_unknown_event_changes_nothing() {
        let mut provider = provider();
        let before = provider.snapshot();
        let event = ProcessedEvent::new("ghost", "Nope", at(19, 9), at(19, 10));
        provider.confirm_event(event, EventAction::Edit).unwrap();
        assert_eq!(provider.pending(), 0);
        assert_eq!(*provider.snapshot(), *before);
    }

    #[test]
    fn sync_rejects_props_without_views() {
        let mut provider = provider();
        provider.sync(&SchedulerProps::default()).unwrap();
        let props = SchedulerProps {
            day: None,
            week: None,
            month: None,
            loading: true,
            ..SchedulerProps::default()
        };
        assert_eq!(provider.sync(&props), Err(SchedulerError::NoViewsEnabled));
        assert!(!provider.state().loading);
        assert!(provider.state().week.is_some());
    }
}
