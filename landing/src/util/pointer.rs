//! Pointer parallax tracking.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decorative shapes on the page drift with the pointer. The tracker turns raw
//! client coordinates into a position normalized to [-1, 1] per axis, with
//! (0, 0) at the viewport centre, and broadcasts it to subscribers. Consumers
//! multiply by a per-shape scale to get a pixel offset.
//!
//! Each tracker is an owned value; two trackers never share state.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const HERO_SPHERE_SCALE: f64 = -20.0;
pub const HERO_CUBE_SCALE: f64 = 30.0;
pub const HERO_GLOW_SCALE: f64 = -10.0;
pub const FORMAT_SPHERE_SCALE: f64 = -15.0;

/// Raw pointer sample in client pixels plus the viewport size at that moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

/// Pointer position normalized to [-1, 1] on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    /// Normalize a raw sample. Degenerate input collapses to the centre on
    /// the affected axis; pointers outside the viewport clamp to the edge.
    pub fn from_sample(sample: PointerSample) -> Self {
        Self {
            x: normalize_axis(sample.client_x, sample.viewport_width),
            y: normalize_axis(sample.client_y, sample.viewport_height),
        }
    }

    /// Pixel displacement for a decoration moving at `scale` px per unit.
    pub fn offset(self, scale: f64) -> (f64, f64) {
        (self.x * scale, self.y * scale)
    }

    /// CSS `translate(...)` for a decoration moving at `scale` px per unit.
    pub fn translate(self, scale: f64) -> String {
        let (dx, dy) = self.offset(scale);
        // `+ 0.0` folds negative zero so the centre renders as `0px`.
        format!("translate({}px, {}px)", dx + 0.0, dy + 0.0)
    }
}

fn normalize_axis(coord: f64, extent: f64) -> f64 {
    if !coord.is_finite() || !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    ((coord / extent) * 2.0 - 1.0).clamp(-1.0, 1.0)
}

/// Handle returned by [`PointerSource::listen`].
pub trait ListenerHandle {
    /// Detach the listener.
    fn remove(self);
}

/// Host capability that delivers global pointer-move samples.
pub trait PointerSource {
    type Handle: ListenerHandle;

    fn listen(&self, on_move: Box<dyn Fn(PointerSample)>) -> Self::Handle;
}

/// Identifies a subscriber registered with [`PointerTracker::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Rc<dyn Fn(PointerPosition)>;

#[derive(Default)]
struct TrackerInner {
    position: Cell<PointerPosition>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(SubscriberId, Subscriber)>>,
}

/// Latest normalized pointer position with a subscriber list.
///
/// Cloning yields another handle to the same tracker.
#[derive(Clone, Default)]
pub struct PointerTracker {
    inner: Rc<TrackerInner>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> PointerPosition {
        self.inner.position.get()
    }

    /// Register `on_change`; it receives every subsequent position.
    pub fn subscribe(&self, on_change: impl Fn(PointerPosition) + 'static) -> SubscriberId {
        let id = SubscriberId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(on_change)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Recompute the position from a raw sample and notify subscribers.
    pub fn handle_move(&self, sample: PointerSample) -> PointerPosition {
        let position = PointerPosition::from_sample(sample);
        self.inner.position.set(position);
        // Snapshot so subscribers may (un)subscribe while being notified.
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            subscriber(position);
        }
        position
    }

    /// Feed this tracker from `source` until the returned handle is removed.
    pub fn connect<S: PointerSource>(&self, source: &S) -> S::Handle {
        let tracker = self.clone();
        source.listen(Box::new(move |sample| {
            tracker.handle_move(sample);
        }))
    }
}
