use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<RefCell<Box<dyn FnMut(f64)>>>;

/// Observer that records callbacks and fires them on demand.
#[derive(Default)]
struct FakeObserver {
    callbacks: RefCell<Vec<(Callback, Rc<Cell<bool>>)>>,
    thresholds: RefCell<Vec<f64>>,
    cancels: Rc<Cell<u32>>,
    fire_on_observe: Option<f64>,
    unavailable: bool,
}

struct FakeSubscription {
    active: Rc<Cell<bool>>,
    cancels: Rc<Cell<u32>>,
}

impl ObserverSubscription for FakeSubscription {
    fn cancel(&mut self) {
        if self.active.replace(false) {
            self.cancels.set(self.cancels.get() + 1);
        }
    }
}

impl ViewportObserver for FakeObserver {
    type Target = str;
    type Subscription = FakeSubscription;

    fn observe(
        &self,
        _target: &str,
        threshold: f64,
        mut on_ratio: Box<dyn FnMut(f64)>,
    ) -> Result<FakeSubscription, ObserverUnavailable> {
        if self.unavailable {
            return Err(ObserverUnavailable);
        }
        if let Some(ratio) = self.fire_on_observe {
            on_ratio(ratio);
        }
        let active = Rc::new(Cell::new(true));
        self.thresholds.borrow_mut().push(threshold);
        self.callbacks
            .borrow_mut()
            .push((Rc::new(RefCell::new(on_ratio)), Rc::clone(&active)));
        Ok(FakeSubscription { active, cancels: Rc::clone(&self.cancels) })
    }
}

impl FakeObserver {
    fn fire(&self, ratio: f64) {
        let callbacks = self.callbacks.borrow().clone();
        for (callback, active) in callbacks {
            if active.get() {
                let mut callback = callback.borrow_mut();
                (*callback)(ratio);
            }
        }
    }

    /// Deliver a callback regardless of cancellation, like a queued browser task.
    fn fire_stale(&self, ratio: f64) {
        let callbacks = self.callbacks.borrow().clone();
        for (callback, _) in callbacks {
            let mut callback = callback.borrow_mut();
            (*callback)(ratio);
        }
    }

    fn active_count(&self) -> usize {
        self.callbacks
            .borrow()
            .iter()
            .filter(|(_, active)| active.get())
            .count()
    }
}

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let count = Rc::new(Cell::new(0));
    let inner = Rc::clone(&count);
    (count, move || inner.set(inner.get() + 1))
}

// =============================================================
// RevealFlag
// =============================================================

#[test]
fn flag_starts_hidden() {
    assert!(!RevealFlag::default().is_visible());
}

#[test]
fn flag_reveals_at_threshold() {
    let mut flag = RevealFlag::default();
    assert!(!flag.observe_ratio(0.05, REVEAL_THRESHOLD));
    assert!(!flag.is_visible());
    assert!(flag.observe_ratio(REVEAL_THRESHOLD, REVEAL_THRESHOLD));
    assert!(flag.is_visible());
}

#[test]
fn flag_ignores_zero_and_non_finite_ratios() {
    let mut flag = RevealFlag::default();
    assert!(!flag.observe_ratio(0.0, 0.0));
    assert!(!flag.observe_ratio(f64::NAN, REVEAL_THRESHOLD));
    assert!(!flag.observe_ratio(f64::INFINITY, REVEAL_THRESHOLD));
    assert!(!flag.is_visible());
}

#[test]
fn flag_transitions_only_once() {
    let mut flag = RevealFlag::default();
    assert!(flag.observe_ratio(0.5, REVEAL_THRESHOLD));
    assert!(!flag.observe_ratio(1.0, REVEAL_THRESHOLD));
    assert!(!flag.reveal());
    assert!(flag.is_visible());
}

#[test]
fn flag_never_rehides_for_any_ratio_sequence() {
    let ratios = [0.0, 0.02, 0.3, 0.0, 0.09, 1.0, 0.0, f64::NAN, -1.0];
    let mut flag = RevealFlag::default();
    let mut seen_visible = false;
    for ratio in ratios {
        flag.observe_ratio(ratio, REVEAL_THRESHOLD);
        if seen_visible {
            assert!(flag.is_visible());
        }
        seen_visible |= flag.is_visible();
    }
    assert!(seen_visible);
}

// =============================================================
// Revealer
// =============================================================

#[test]
fn revealer_passes_threshold_to_observer() {
    let observer = FakeObserver::default();
    let _revealer = Revealer::watch(&observer, "pain-1", REVEAL_THRESHOLD, || {});
    assert_eq!(*observer.thresholds.borrow(), vec![REVEAL_THRESHOLD]);
}

#[test]
fn revealer_stays_hidden_below_threshold() {
    let observer = FakeObserver::default();
    let (count, on_reveal) = counter();
    let revealer = Revealer::watch(&observer, "pain-1", REVEAL_THRESHOLD, on_reveal);

    observer.fire(0.05);

    assert!(!revealer.is_visible());
    assert_eq!(count.get(), 0);
    assert_eq!(observer.active_count(), 1);
}

#[test]
fn revealer_fires_once_and_retires_observation() {
    let observer = FakeObserver::default();
    let (count, on_reveal) = counter();
    let revealer = Revealer::watch(&observer, "pain-1", REVEAL_THRESHOLD, on_reveal);

    observer.fire(0.4);
    assert!(revealer.is_visible());
    assert_eq!(count.get(), 1);
    assert_eq!(observer.active_count(), 0);
    assert_eq!(observer.cancels.get(), 1);

    // Leaving and re-entering the viewport changes nothing.
    observer.fire_stale(0.0);
    observer.fire_stale(0.8);
    assert!(revealer.is_visible());
    assert_eq!(count.get(), 1);
}

#[test]
fn revealer_handles_callback_during_observe() {
    let observer = FakeObserver { fire_on_observe: Some(1.0), ..FakeObserver::default() };
    let (count, on_reveal) = counter();
    let revealer = Revealer::watch(&observer, "hero", REVEAL_THRESHOLD, on_reveal);

    assert!(revealer.is_visible());
    assert_eq!(count.get(), 1);
    assert_eq!(observer.active_count(), 0);
}

#[test]
fn revealer_reveals_immediately_without_observer() {
    let observer = FakeObserver { unavailable: true, ..FakeObserver::default() };
    let (count, on_reveal) = counter();
    let revealer = Revealer::watch(&observer, "hero", REVEAL_THRESHOLD, on_reveal);

    assert!(revealer.is_visible());
    assert_eq!(count.get(), 1);
}

#[test]
fn release_cancels_subscription() {
    let observer = FakeObserver::default();
    let revealer = Revealer::watch(&observer, "pain-1", REVEAL_THRESHOLD, || {});
    revealer.release();
    assert_eq!(observer.active_count(), 0);
    assert_eq!(observer.cancels.get(), 1);
}

#[test]
fn stale_callback_after_release_is_ignored() {
    let observer = FakeObserver::default();
    let (count, on_reveal) = counter();
    let revealer = Revealer::watch(&observer, "pain-1", REVEAL_THRESHOLD, on_reveal);

    revealer.release();
    observer.fire_stale(1.0);

    assert!(!revealer.is_visible());
    assert_eq!(count.get(), 0);
}

#[test]
fn drop_cancels_subscription_and_outlives_callbacks() {
    let observer = FakeObserver::default();
    let (count, on_reveal) = counter();
    drop(Revealer::watch(&observer, "pain-1", REVEAL_THRESHOLD, on_reveal));

    assert_eq!(observer.active_count(), 0);
    observer.fire_stale(1.0);
    assert_eq!(count.get(), 0);
}

#[test]
fn independent_revealers_do_not_interfere() {
    let first = FakeObserver::default();
    let second = FakeObserver::default();
    let a = Revealer::watch(&first, "a", REVEAL_THRESHOLD, || {});
    let b = Revealer::watch(&second, "b", REVEAL_THRESHOLD, || {});

    first.fire(1.0);

    assert!(a.is_visible());
    assert!(!b.is_visible());
}
