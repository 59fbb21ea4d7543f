// SPDX: CC0-1.0

use crate::{coords::ViewState, Number, PlotError};
use core::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

/// Handle returned by [`ZoomController::subscribe`], used to unsubscribe.
#[derive(Debug, PartialEq, Eq, Hash)]
#[must_use = "dropping a subscription makes the observer impossible to remove"]
pub struct Subscription(u64);

/// Shared by every controller, so a handle only ever matches the observer
/// it was issued for.
static NEXT_SUBSCRIPTION: AtomicU64 = AtomicU64::new(0);

type Observer<'a, E> = Box<dyn FnMut(&ViewState) -> Result<(), E> + 'a>;

/// Owns the zoom level and tells observers whenever it changes.
///
/// Observers run synchronously in registration order. They only ever see
/// the new [`ViewState`], never the controller, so they cannot zoom from
/// inside a redraw.
pub struct ZoomController<'a, E = PlotError> {
    view: ViewState,
    observers: Vec<(u64, Observer<'a, E>)>,
}

impl<'a, E> ZoomController<'a, E> {
    pub fn new() -> Self {
        Self::with_view(ViewState::default())
    }

    pub fn with_view(view: ViewState) -> Self {
        Self {
            view,
            observers: Vec::new(),
        }
    }

    #[inline]
    pub const fn view(&self) -> ViewState {
        self.view
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&ViewState) -> Result<(), E> + 'a,
    {
        let id = NEXT_SUBSCRIPTION.fetch_add(1, Ordering::Relaxed);
        self.observers.push((id, Box::new(observer)));
        tracing::trace!(id, "observer subscribed");
        Subscription(id)
    }

    /// Removes an observer. Returns false if it was already gone, or was
    /// never registered here.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        let Subscription(id) = sub;
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        let removed = self.observers.len() != before;
        tracing::trace!(id, removed, "observer unsubscribed");
        removed
    }

    /// Handles one wheel event. A positive delta zooms out by one tick,
    /// anything else zooms in by one tick, whatever its magnitude.
    pub fn on_scroll(&mut self, delta_y: Number) -> Result<ViewState, E> {
        let by = if delta_y > 0.0 { -1 } else { 1 };
        self.set_view(self.view.zoomed(by))
    }

    pub fn zoom_in(&mut self) -> Result<ViewState, E> {
        self.set_view(self.view.zoomed(1))
    }

    pub fn zoom_out(&mut self) -> Result<ViewState, E> {
        self.set_view(self.view.zoomed(-1))
    }

    pub fn reset(&mut self) -> Result<ViewState, E> {
        self.set_view(ViewState::default())
    }

    /// Runs every observer against the current view, stopping at the first
    /// error.
    pub fn redraw(&mut self) -> Result<(), E> {
        let view = self.view;
        for (_, observer) in &mut self.observers {
            observer(&view)?;
        }
        Ok(())
    }

    fn set_view(&mut self, view: ViewState) -> Result<ViewState, E> {
        self.view = view;
        tracing::debug!(
            zoom_ticks = view.zoom_ticks(),
            observers = self.observers.len(),
            "zoom changed"
        );
        self.redraw()?;
        Ok(view)
    }
}

impl<E> Default for ZoomController<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ZoomController<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomController")
            .field("view", &self.view)
            .field("observers", &self.observers.len())
            .finish()
    }
}
