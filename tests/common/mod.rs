//! Shared fixtures for scheduler state tests.

#![allow(dead_code, unused_imports)]

use chrono::{NaiveDate, NaiveDateTime};
use scheduler_state::config::SchedulerProps;
use scheduler_state::ui::scheduler::{
    ProcessedEvent, SchedulerProvider, SelectedRange, Selection, ViewKind,
};

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, day).expect("valid date")
}

pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    date(day).and_hms_opt(hour, 0, 0).expect("valid time")
}

pub fn event(id: i64, title: &str) -> ProcessedEvent {
    ProcessedEvent::new(id, title, at(19, 9), at(19, 10))
}

pub fn range_selection() -> Selection {
    Selection::Range(SelectedRange {
        start: at(20, 14),
        end: at(20, 15),
    })
}

/// Props with exactly the given views enabled.
pub fn props_with_views(views: &[ViewKind]) -> SchedulerProps {
    let defaults = SchedulerProps::default();
    SchedulerProps {
        day: views.contains(&ViewKind::Day).then(|| defaults.day.clone()).flatten(),
        week: views.contains(&ViewKind::Week).then(|| defaults.week.clone()).flatten(),
        month: views.contains(&ViewKind::Month).then(|| defaults.month.clone()).flatten(),
        view: views.first().copied().unwrap_or_default(),
        ..defaults
    }
}

pub fn props_with_events(events: Vec<ProcessedEvent>) -> SchedulerProps {
    SchedulerProps {
        events,
        ..SchedulerProps::default()
    }
}

/// Provider that has already gone through its mount pass.
pub fn mounted_provider(props: &SchedulerProps) -> SchedulerProvider {
    let mut provider = SchedulerProvider::new(props).expect("valid props");
    provider.sync(props).expect("mount pass");
    provider.flush();
    provider
}
