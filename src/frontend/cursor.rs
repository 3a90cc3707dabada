use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{window, EventTarget, MouseEvent};
use yew::prelude::*;

use super::hooks::{
    use_media_query, use_prefers_reduced_motion, AnimationFrameLoop, EventListenerGuard,
    FINE_POINTER_QUERY,
};
use crate::motion::cursor::{CursorTrail, MarkerFrame};

/// Pointer follower mounted once at the app root. Renders nothing on touch
/// devices or when reduced motion is requested.
#[function_component(RiverCursor)]
pub fn river_cursor() -> Html {
    let fine_pointer = use_media_query(FINE_POINTER_QUERY);
    let reduced_motion = use_prefers_reduced_motion();
    let enabled = fine_pointer && !reduced_motion;
    let frames = use_state(|| CursorTrail::new().frames());

    {
        let frames = frames.clone();
        use_effect_with(enabled, move |enabled| {
            let mut resources = None;
            if *enabled {
                resources = install(frames);
            }
            move || drop(resources)
        });
    }

    if !enabled {
        return Html::default();
    }

    html! {
        <div class="river-cursor" aria-hidden="true">
            { for frames.iter().enumerate().map(|(index, frame)| marker(index, frame)) }
        </div>
    }
}

fn marker(index: usize, frame: &MarkerFrame) -> Html {
    let class = if index == 0 {
        "cursor-marker cursor-lead"
    } else {
        "cursor-marker cursor-tail"
    };
    html! { <div key={index} class={class} style={frame.style()} /> }
}

type CursorResources = (Rc<AnimationFrameLoop>, Vec<EventListenerGuard>);

fn install(frames: UseStateHandle<Vec<MarkerFrame>>) -> Option<CursorResources> {
    let document = window()?.document()?;
    let trail = Rc::new(RefCell::new(CursorTrail::new()));

    let frame_loop = {
        let trail = trail.clone();
        Rc::new(AnimationFrameLoop::start(move |frame| {
            let mut trail = trail.borrow_mut();
            let moving = trail.step(frame.dt);
            frames.set(trail.frames());
            moving
        })?)
    };

    let root: EventTarget = document.document_element()?.into();
    let window_target: EventTarget = window()?.into();

    let on_move = {
        let trail = trail.clone();
        let frame_loop = frame_loop.clone();
        move |event: web_sys::Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                trail
                    .borrow_mut()
                    .pointer_moved(f64::from(event.client_x()), f64::from(event.client_y()));
                frame_loop.wake();
            }
        }
    };
    let on_enter = {
        let trail = trail.clone();
        let frame_loop = frame_loop.clone();
        move |_: web_sys::Event| {
            trail.borrow_mut().pointer_entered();
            frame_loop.wake();
        }
    };
    let on_leave = {
        let frame_loop = frame_loop.clone();
        move |_: web_sys::Event| {
            trail.borrow_mut().pointer_left();
            frame_loop.wake();
        }
    };

    let listeners = [
        EventListenerGuard::new(&window_target, "mousemove", on_move),
        EventListenerGuard::new(&root, "mouseenter", on_enter),
        EventListenerGuard::new(&root, "mouseleave", on_leave),
    ]
    .into_iter()
    .flatten()
    .collect();

    Some((frame_loop, listeners))
}
