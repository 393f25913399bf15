//! Browser bindings for the reveal and parallax adapters.
//!
//! Only compiled with the `hydrate` feature; everything here wraps a DOM
//! primitive and forwards plain values to the logic in [`super::reveal`] and
//! [`super::pointer`].

use leptos::leptos_dom::helpers::{WindowListenerHandle, window_event_listener};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::pointer::{ListenerHandle, PointerSample, PointerSource};
use super::reveal::{ObserverSubscription, ObserverUnavailable, ViewportObserver};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// `IntersectionObserver`, one instance per observed element.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntersectionObserverAdapter;

pub struct IntersectionSubscription {
    observer: web_sys::IntersectionObserver,
    // Dropped only after `disconnect`, never from inside its own invocation.
    _callback: EntriesCallback,
}

impl ObserverSubscription for IntersectionSubscription {
    fn cancel(&mut self) {
        self.observer.disconnect();
    }
}

impl ViewportObserver for IntersectionObserverAdapter {
    type Target = web_sys::Element;
    type Subscription = IntersectionSubscription;

    fn observe(
        &self,
        target: &web_sys::Element,
        threshold: f64,
        mut on_ratio: Box<dyn FnMut(f64)>,
    ) -> Result<IntersectionSubscription, ObserverUnavailable> {
        let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, _: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let ratio = if entry.is_intersecting() { entry.intersection_ratio() } else { 0.0 };
                on_ratio(ratio);
            }
        });

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
        let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|_| ObserverUnavailable)?;
        observer.observe(target);

        Ok(IntersectionSubscription { observer, _callback: callback })
    }
}

/// Global `mousemove` on the window.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowPointerSource;

pub struct WindowPointerHandle(WindowListenerHandle);

impl ListenerHandle for WindowPointerHandle {
    fn remove(self) {
        self.0.remove();
    }
}

impl PointerSource for WindowPointerSource {
    type Handle = WindowPointerHandle;

    fn listen(&self, on_move: Box<dyn Fn(PointerSample)>) -> WindowPointerHandle {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            let (viewport_width, viewport_height) = viewport_size();
            on_move(PointerSample {
                client_x: f64::from(ev.client_x()),
                client_y: f64::from(ev.client_y()),
                viewport_width,
                viewport_height,
            });
        });
        WindowPointerHandle(handle)
    }
}

fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}
