//! State container for a scheduler/calendar widget.
//!
//! [`ui::scheduler::SchedulerProvider`] owns the widget state, derives it
//! from [`config::SchedulerProps`], and hands descendants the
//! [`ui::scheduler::SchedulerContext`] capability surface.

pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

pub use error::SchedulerError;
