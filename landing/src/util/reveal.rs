//! One-shot viewport reveal.
//!
//! A block starts hidden and becomes visible the first time it overlaps the
//! viewport by at least [`REVEAL_THRESHOLD`]. The observation is then retired:
//! leaving and re-entering the viewport never hides the block again.
//!
//! DESIGN
//! ======
//! The browser `IntersectionObserver` sits behind [`ViewportObserver`] so the
//! flag logic can be driven by a fake observer in tests. When no observer is
//! available the block is revealed immediately rather than left invisible.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Fraction of a block that must overlap the viewport before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Monotonic visibility flag: hidden until the first qualifying intersection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealFlag {
    visible: bool,
}

impl RevealFlag {
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Feed one intersection ratio.
    ///
    /// Returns `true` only on the hidden -> visible transition. A ratio of zero
    /// means the block is not intersecting at all and never reveals, even with
    /// a zero threshold.
    pub fn observe_ratio(&mut self, ratio: f64, threshold: f64) -> bool {
        if self.visible || !ratio.is_finite() || ratio <= 0.0 || ratio < threshold {
            return false;
        }
        self.visible = true;
        true
    }

    /// Reveal unconditionally. Returns `true` if the flag changed.
    pub fn reveal(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }
}

/// The host cannot observe viewport intersections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObserverUnavailable;

impl fmt::Display for ObserverUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("viewport intersection observer unavailable")
    }
}

impl std::error::Error for ObserverUnavailable {}

/// Handle to an active intersection subscription.
pub trait ObserverSubscription {
    /// Stop delivering callbacks. Must be idempotent and safe to call from
    /// inside the subscription's own callback.
    fn cancel(&mut self);
}

/// Host capability that reports intersection ratios for a target.
pub trait ViewportObserver {
    type Target: ?Sized;
    type Subscription: ObserverSubscription;

    /// Start observing `target`, calling `on_ratio` with the current
    /// intersection ratio whenever it crosses `threshold`. Implementations may
    /// invoke `on_ratio` before returning.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverUnavailable`] when the host has no intersection
    /// primitive.
    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_ratio: Box<dyn FnMut(f64)>,
    ) -> Result<Self::Subscription, ObserverUnavailable>;
}

struct RevealInner<S> {
    flag: Cell<RevealFlag>,
    released: Cell<bool>,
    subscription: RefCell<Option<S>>,
    on_reveal: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl<S: ObserverSubscription> RevealInner<S> {
    fn mark_visible(&self) {
        let mut flag = self.flag.get();
        if !flag.reveal() {
            return;
        }
        self.flag.set(flag);
        self.retire();
        let on_reveal = self.on_reveal.borrow_mut().take();
        if let Some(on_reveal) = on_reveal {
            on_reveal();
        }
    }

    fn handle_ratio(&self, ratio: f64, threshold: f64) {
        let mut probe = self.flag.get();
        if self.released.get() || !probe.observe_ratio(ratio, threshold) {
            return;
        }
        self.mark_visible();
    }

    fn teardown(&self) {
        self.released.set(true);
        let subscription = self.subscription.borrow_mut().take();
        if let Some(mut subscription) = subscription {
            subscription.cancel();
        }
        self.on_reveal.borrow_mut().take();
    }

    fn retire(&self) {
        // The slot is empty while `observe` is still running; `watch` retires
        // the subscription itself once it is stored.
        if let Ok(mut slot) = self.subscription.try_borrow_mut() {
            if let Some(subscription) = slot.as_mut() {
                subscription.cancel();
            }
        }
    }
}

/// Drives a [`RevealFlag`] from a [`ViewportObserver`].
///
/// Dropping the revealer (or calling [`Revealer::release`]) cancels the
/// subscription; callbacks that still arrive afterwards are ignored.
pub struct Revealer<S: ObserverSubscription> {
    inner: Rc<RevealInner<S>>,
}

impl<S: ObserverSubscription + 'static> Revealer<S> {
    /// Observe `target` and run `on_reveal` once, on the first intersection of
    /// at least `threshold`.
    pub fn watch<O>(
        observer: &O,
        target: &O::Target,
        threshold: f64,
        on_reveal: impl FnOnce() + 'static,
    ) -> Self
    where
        O: ViewportObserver<Subscription = S>,
    {
        let inner = Rc::new(RevealInner {
            flag: Cell::new(RevealFlag::default()),
            released: Cell::new(false),
            subscription: RefCell::new(None),
            on_reveal: RefCell::new(Some(Box::new(on_reveal))),
        });

        let weak = Rc::downgrade(&inner);
        let callback = Box::new(move |ratio: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.handle_ratio(ratio, threshold);
            }
        });

        match observer.observe(target, threshold, callback) {
            Ok(mut subscription) => {
                if inner.flag.get().is_visible() {
                    subscription.cancel();
                }
                *inner.subscription.borrow_mut() = Some(subscription);
            }
            Err(ObserverUnavailable) => {
                #[cfg(feature = "hydrate")]
                log::warn!("{}; revealing block immediately", ObserverUnavailable);
                inner.mark_visible();
            }
        }

        Self { inner }
    }

    pub fn is_visible(&self) -> bool {
        self.inner.flag.get().is_visible()
    }

    /// Cancel the subscription and ignore any callback that is still queued.
    pub fn release(&self) {
        self.inner.teardown();
    }
}

impl<S: ObserverSubscription> Drop for Revealer<S> {
    fn drop(&mut self) {
        self.inner.teardown();
    }
}
