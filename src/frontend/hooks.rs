//! Scoped browser resources and the hooks built on them. Every listener,
//! animation loop and observer here is released when its guard drops, so
//! an effect destructor only has to drop what it created.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

use crate::motion::clock::{FrameClock, FrameTime};
use crate::motion::reveal::{in_viewport, RevealLatch, RevealVariant};

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const FINE_POINTER_QUERY: &str = "(hover: hover) and (pointer: fine)";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerGuard {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop. The tick returns whether it wants another
/// frame; a loop that returned `false` is parked until [`wake`] is called.
///
/// [`wake`]: AnimationFrameLoop::wake
pub struct AnimationFrameLoop {
    callback: FrameCallback,
    handle: Rc<Cell<Option<i32>>>,
}

impl AnimationFrameLoop {
    pub fn start<F>(mut tick: F) -> Option<Self>
    where
        F: FnMut(FrameTime) -> bool + 'static,
    {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let mut clock = FrameClock::default();

        let this_frame: Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::downgrade(&callback);
        let frame_handle = handle.clone();
        *callback.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
            frame_handle.set(None);
            if !tick(clock.advance(now_ms)) {
                clock.park();
                return;
            }
            if let Some(callback) = this_frame.upgrade() {
                frame_handle.set(request_frame(&callback));
            }
        }));

        let frame = Self { callback, handle };
        frame.wake();
        frame.handle.get().map(|_| frame)
    }

    /// Schedules a frame unless one is already pending.
    pub fn wake(&self) {
        if self.handle.get().is_none() {
            self.handle.set(request_frame(&self.callback));
        }
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), window()) {
            let _ = window.cancel_animation_frame(handle);
        }
        if let Ok(mut slot) = self.callback.try_borrow_mut() {
            slot.take();
        }
    }
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let window = window()?;
    let slot = callback.try_borrow().ok()?;
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn observe<F>(element: &Element, root_margin: &str, mut on_change: F) -> Option<Self>
    where
        F: FnMut(bool) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                on_change(intersecting);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Live result of a media query; re-renders when it flips.
#[hook]
pub fn use_media_query(query: &'static str) -> bool {
    let matches = use_state_eq(|| media_matches(query));

    {
        let matches = matches.clone();
        use_effect_with(query, move |query| {
            let query = *query;
            let guard = window()
                .and_then(|w| w.match_media(query).ok().flatten())
                .and_then(|list| {
                    let target: EventTarget = list.clone().into();
                    EventListenerGuard::new(&target, "change", move |_| matches.set(list.matches()))
                });
            move || drop(guard)
        });
    }

    *matches
}

#[hook]
pub fn use_prefers_reduced_motion() -> bool {
    use_media_query(REDUCED_MOTION_QUERY)
}

impl Reducible for RevealLatch {
    type Action = bool;

    fn reduce(self: Rc<Self>, intersecting: bool) -> Rc<Self> {
        let next = self.observe(intersecting);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// One-shot reveal latch for the element behind `node`. Fires from the
/// initial measurement when the element is already on screen; falls back
/// to revealed when the observer cannot be created.
#[hook]
pub fn use_reveal(node: NodeRef, variant: RevealVariant) -> RevealLatch {
    let latch = use_reducer_eq(RevealLatch::default);
    let revealed = latch.is_revealed();

    {
        let dispatcher = latch.dispatcher();
        use_effect_with((variant, revealed), move |(variant, revealed)| {
            let mut observer = None;
            if !*revealed {
                match node.cast::<Element>() {
                    Some(element) => {
                        let rect = element.get_bounding_client_rect();
                        let (_, viewport_height) = viewport_size();
                        if in_viewport(rect.top(), rect.bottom(), viewport_height, variant.bottom_inset()) {
                            dispatcher.dispatch(true);
                        } else {
                            let on_change = {
                                let dispatcher = dispatcher.clone();
                                move |intersecting| dispatcher.dispatch(intersecting)
                            };
                            observer = ViewportObserver::observe(&element, variant.root_margin(), on_change);
                            if observer.is_none() {
                                dispatcher.dispatch(true);
                            }
                        }
                    }
                    None => dispatcher.dispatch(true),
                }
            }
            move || drop(observer)
        });
    }

    *latch
}
