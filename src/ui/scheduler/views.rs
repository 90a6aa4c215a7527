//! View availability queries.

use crate::error::SchedulerError;

use super::model::ViewKind;

/// Anything that can say which view kinds are switched on.
pub trait ViewSource {
    fn view_enabled(&self, view: ViewKind) -> bool;
}

/// A view kind is enabled iff its settings are present.
pub fn view_configured<D, W, M>(
    view: ViewKind,
    day: &Option<D>,
    week: &Option<W>,
    month: &Option<M>,
) -> bool {
    match view {
        ViewKind::Day => day.is_some(),
        ViewKind::Week => week.is_some(),
        ViewKind::Month => month.is_some(),
    }
}

/// Enabled views in canonical order. Recomputed on every call.
pub fn available_views<S: ViewSource + ?Sized>(source: &S) -> Vec<ViewKind> {
    ViewKind::CANONICAL
        .into_iter()
        .filter(|view| source.view_enabled(*view))
        .collect()
}

/// First enabled view in canonical order.
pub fn one_view<S: ViewSource + ?Sized>(source: &S) -> Result<ViewKind, SchedulerError> {
    ViewKind::CANONICAL
        .into_iter()
        .find(|view| source.view_enabled(*view))
        .ok_or(SchedulerError::NoViewsEnabled)
}

/// `requested` if enabled, otherwise the first enabled view.
pub fn resolve_view<S: ViewSource + ?Sized>(
    source: &S,
    requested: ViewKind,
) -> Result<ViewKind, SchedulerError> {
    if source.view_enabled(requested) {
        Ok(requested)
    } else {
        one_view(source)
    }
}
