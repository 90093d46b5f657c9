//! Viewport-crossing detection for scroll reveals.
//!
//! Strategies are tried in order: native `IntersectionObserver`, scroll and
//! resize polling, then fail-open (report visible right away). Content must
//! never stay hidden because detection is missing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use crate::config;

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("no browser window available")]
    NoWindow,
    #[error("{0} is not supported in this browser")]
    Unsupported(&'static str),
    #[error("browser rejected the observer: {0}")]
    Js(String),
}

impl From<JsValue> for ObserveError {
    fn from(value: JsValue) -> Self {
        ObserveError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Per-side adjustment of the viewport in px. Negative values shrink it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub const fn uniform(px: f64) -> Self {
        RootMargin {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }

    pub const fn shrink(px: f64) -> Self {
        RootMargin::uniform(-px)
    }

    pub fn css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    pub margin: RootMargin,
    /// Stop reporting after the first crossing into view.
    pub once: bool,
    pub threshold: f64,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        ObserveOptions {
            margin: RootMargin::shrink(config::REVEAL_MARGIN_PX),
            once: true,
            threshold: 0.0,
        }
    }
}

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Bounds {
    pub fn viewport(width: f64, height: f64) -> Self {
        Bounds {
            top: 0.0,
            left: 0.0,
            bottom: height,
            right: width,
        }
    }

    pub fn with_margin(&self, margin: &RootMargin) -> Self {
        Bounds {
            top: self.top - margin.top,
            left: self.left - margin.left,
            bottom: self.bottom + margin.bottom,
            right: self.right + margin.right,
        }
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.top < other.bottom
            && self.bottom > other.top
            && self.left < other.right
            && self.right > other.left
    }

    fn of_element(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Bounds {
            top: rect.top(),
            left: rect.left(),
            bottom: rect.bottom(),
            right: rect.right(),
        }
    }
}

/// Keeps an observation alive; dropping it releases every listener.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Subscription {
            release: Some(Box::new(release)),
        }
    }

    /// Nothing to release.
    pub fn detached() -> Self {
        Subscription { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Runs `handler` on each of the window `events` until the subscription drops.
pub fn listen_window(
    events: &'static [&'static str],
    handler: impl FnMut() + 'static,
) -> Result<Subscription, ObserveError> {
    let window = web_sys::window().ok_or(ObserveError::NoWindow)?;
    let listener = Rc::new(Closure::wrap(Box::new(handler) as Box<dyn FnMut()>));

    let subscription = {
        let window = window.clone();
        let listener = listener.clone();
        Subscription::new(move || {
            for event in events {
                let _ = window.remove_event_listener_with_callback(
                    event,
                    (*listener).as_ref().unchecked_ref(),
                );
            }
        })
    };
    for event in events {
        window.add_event_listener_with_callback(event, (*listener).as_ref().unchecked_ref())?;
    }
    Ok(subscription)
}

pub trait ViewportObserver {
    fn name(&self) -> &'static str;

    /// Reports `true`/`false` whenever `element` crosses the margin-adjusted
    /// viewport until the returned subscription is dropped.
    fn observe(
        &self,
        element: &Element,
        options: &ObserveOptions,
        on_change: Callback<bool>,
    ) -> Result<Subscription, ObserveError>;
}

pub struct NativeObserver;

impl ViewportObserver for NativeObserver {
    fn name(&self) -> &'static str {
        "IntersectionObserver"
    }

    fn observe(
        &self,
        element: &Element,
        options: &ObserveOptions,
        on_change: Callback<bool>,
    ) -> Result<Subscription, ObserveError> {
        let window = web_sys::window().ok_or(ObserveError::NoWindow)?;
        if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
            return Err(ObserveError::Unsupported("IntersectionObserver"));
        }

        let once = options.once;
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let latest = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .last();
                if let Some(entry) = latest {
                    let intersecting = entry.is_intersecting();
                    on_change.emit(intersecting);
                    if intersecting && once {
                        observer.disconnect();
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.margin.css());
        init.set_threshold(&JsValue::from_f64(options.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

/// Finish line for a polled observation. With `once`, the first hit drops the
/// window listeners instead of leaving them to run until unmount.
#[derive(Default)]
struct PollLatch {
    done: Cell<bool>,
    listeners: RefCell<Option<Subscription>>,
}

impl PollLatch {
    fn is_done(&self) -> bool {
        self.done.get()
    }

    fn hold(&self, listeners: Subscription) {
        if !self.is_done() {
            *self.listeners.borrow_mut() = Some(listeners);
        }
    }

    /// Whether a sample should still be reported.
    fn accept(&self, intersecting: bool, once: bool) -> bool {
        if self.is_done() {
            return false;
        }
        if intersecting && once {
            self.done.set(true);
            self.release();
        }
        true
    }

    fn release(&self) {
        let listeners = self.listeners.borrow_mut().take();
        drop(listeners);
    }
}

/// Checks the element's bounding box on every scroll and resize.
pub struct ScrollPollObserver;

impl ViewportObserver for ScrollPollObserver {
    fn name(&self) -> &'static str {
        "scroll polling"
    }

    fn observe(
        &self,
        element: &Element,
        options: &ObserveOptions,
        on_change: Callback<bool>,
    ) -> Result<Subscription, ObserveError> {
        let window = web_sys::window().ok_or(ObserveError::NoWindow)?;
        let latch = Rc::new(PollLatch::default());

        let check = {
            let element = element.clone();
            let options = *options;
            let latch = latch.clone();
            move || {
                if latch.is_done() {
                    return;
                }
                let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let area = Bounds::viewport(width, height).with_margin(&options.margin);
                let intersecting = Bounds::of_element(&element).intersects(&area);
                if latch.accept(intersecting, options.once) {
                    on_change.emit(intersecting);
                }
            }
        };

        check();
        if latch.is_done() {
            return Ok(Subscription::detached());
        }
        latch.hold(listen_window(&["scroll", "resize"], check)?);
        Ok(Subscription::new(move || latch.release()))
    }
}

fn fail_open(on_change: &Callback<bool>) -> Subscription {
    on_change.emit(true);
    Subscription::detached()
}

/// Last resort: treat the element as already in view.
pub struct FailOpen;

impl ViewportObserver for FailOpen {
    fn name(&self) -> &'static str {
        "fail-open"
    }

    fn observe(
        &self,
        _element: &Element,
        _options: &ObserveOptions,
        on_change: Callback<bool>,
    ) -> Result<Subscription, ObserveError> {
        Ok(fail_open(&on_change))
    }
}

/// Runs `attempts` in order and keeps the first that succeeds.
fn first_ok<T, F>(attempts: impl IntoIterator<Item = (&'static str, F)>) -> Option<T>
where
    F: FnOnce() -> Result<T, ObserveError>,
{
    for (name, attempt) in attempts {
        match attempt() {
            Ok(value) => {
                debug!("observing section with {}", name);
                return Some(value);
            }
            Err(err) => warn!("{} unavailable, degrading: {}", name, err),
        }
    }
    None
}

pub fn observe_with(
    strategies: &[&dyn ViewportObserver],
    element: &Element,
    options: &ObserveOptions,
    on_change: Callback<bool>,
) -> Subscription {
    let callback = &on_change;
    let attempts = strategies.iter().map(|strategy| {
        (strategy.name(), move || {
            strategy.observe(element, options, callback.clone())
        })
    });
    first_ok(attempts).unwrap_or_else(|| fail_open(&on_change))
}

pub fn observe_with_fallback(
    element: &Element,
    options: &ObserveOptions,
    on_change: Callback<bool>,
) -> Subscription {
    let strategies: [&dyn ViewportObserver; 3] = [&NativeObserver, &ScrollPollObserver, &FailOpen];
    observe_with(&strategies, element, options, on_change)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_shrink_by_reveal_margin() {
        let options = ObserveOptions::default();
        assert!(options.once);
        assert_eq!(options.margin, RootMargin::uniform(-100.0));
        assert_eq!(options.margin.css(), "-100px -100px -100px -100px");
    }

    #[test]
    fn shrunk_viewport_fires_before_fully_on_screen() {
        let area = Bounds::viewport(1200.0, 800.0).with_margin(&RootMargin::shrink(100.0));
        assert_eq!(area.bottom, 700.0);

        let peeking = Bounds { top: 650.0, left: 0.0, bottom: 1400.0, right: 1200.0 };
        assert!(peeking.intersects(&area));

        let inside_margin = Bounds { top: 750.0, left: 0.0, bottom: 1400.0, right: 1200.0 };
        assert!(!inside_margin.intersects(&area));
    }

    #[test]
    fn element_above_viewport_is_out() {
        let area = Bounds::viewport(1200.0, 800.0).with_margin(&RootMargin::shrink(100.0));
        let scrolled_past = Bounds { top: -900.0, left: 0.0, bottom: 50.0, right: 1200.0 };
        assert!(!scrolled_past.intersects(&area));
    }

    #[test]
    fn expanding_margin_grows_area() {
        let area = Bounds::viewport(100.0, 100.0).with_margin(&RootMargin::uniform(20.0));
        assert_eq!(area, Bounds { top: -20.0, left: -20.0, bottom: 120.0, right: 120.0 });
    }

    #[test]
    fn subscription_releases_once_on_drop() {
        let released = Rc::new(Cell::new(0));
        {
            let released = released.clone();
            let _subscription = Subscription::new(move || released.set(released.get() + 1));
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn detached_subscription_drops_quietly() {
        drop(Subscription::detached());
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, Callback<bool>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let seen = seen.clone();
            Callback::from(move |value: bool| seen.borrow_mut().push(value))
        };
        (seen, callback)
    }

    type Attempt = Box<dyn FnOnce() -> Result<Subscription, ObserveError>>;

    #[test]
    fn chain_ends_visible_when_every_strategy_fails() {
        let (seen, on_change) = recorder();
        let attempts: Vec<(&'static str, Attempt)> = vec![
            (
                "IntersectionObserver",
                Box::new(|| Err(ObserveError::Unsupported("IntersectionObserver"))) as Attempt,
            ),
            ("scroll polling", Box::new(|| Err(ObserveError::NoWindow)) as Attempt),
        ];
        let _subscription = first_ok(attempts).unwrap_or_else(|| fail_open(&on_change));
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn first_working_strategy_wins() {
        let tried = Rc::new(Cell::new(0));
        let attempt = |result: Result<u8, ObserveError>| {
            let tried = tried.clone();
            move || {
                tried.set(tried.get() + 1);
                result
            }
        };
        let found = first_ok([
            ("native", attempt(Err(ObserveError::NoWindow))),
            ("polling", attempt(Ok(2))),
            ("fail-open", attempt(Ok(3))),
        ]);
        assert_eq!(found, Some(2));
        assert_eq!(tried.get(), 2);
    }

    #[test]
    fn fail_open_reports_visible_immediately() {
        let (seen, on_change) = recorder();
        drop(fail_open(&on_change));
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn poll_latch_drops_listeners_on_first_hit() {
        let released = Rc::new(Cell::new(0));
        let latch = PollLatch::default();
        {
            let released = released.clone();
            latch.hold(Subscription::new(move || released.set(released.get() + 1)));
        }

        assert!(latch.accept(false, true));
        assert_eq!(released.get(), 0);

        assert!(latch.accept(true, true));
        assert_eq!(released.get(), 1);
        assert!(!latch.accept(true, true));
        assert!(!latch.accept(false, true));

        latch.release();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn poll_latch_keeps_listening_without_once() {
        let released = Rc::new(Cell::new(0));
        let latch = PollLatch::default();
        {
            let released = released.clone();
            latch.hold(Subscription::new(move || released.set(released.get() + 1)));
        }

        assert!(latch.accept(true, false));
        assert!(latch.accept(false, false));
        assert_eq!(released.get(), 0);

        latch.release();
        assert_eq!(released.get(), 1);
    }
}
