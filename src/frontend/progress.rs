use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{window, EventTarget};
use yew::prelude::*;

use super::hooks::{use_prefers_reduced_motion, AnimationFrameLoop, EventListenerGuard};
use crate::motion::progress::{
    highlight_offset, particle_frame, scroll_fraction, ParticleFrame, ScrollProgress, PARTICLE_COUNT,
};

#[derive(Clone, Debug, PartialEq)]
struct BarFrame {
    scale: f64,
    visible: bool,
    highlight: f64,
    particles: Vec<ParticleFrame>,
}

impl Default for BarFrame {
    fn default() -> Self {
        Self {
            scale: 0.0,
            visible: false,
            highlight: 0.0,
            particles: Vec::new(),
        }
    }
}

fn read_scroll_fraction() -> f64 {
    let Some(document) = window().and_then(|w| w.document()) else {
        return 0.0;
    };
    let Some(root) = document.document_element() else {
        return 0.0;
    };
    let scroll_top = window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_else(|| f64::from(root.scroll_top()));

    scroll_fraction(
        scroll_top,
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    )
}

/// Thin bar pinned to the top of the viewport tracking page scroll.
#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let frame = use_state_eq(BarFrame::default);
    let reduced_motion = use_prefers_reduced_motion();

    {
        let frame = frame.clone();
        use_effect_with(reduced_motion, move |reduced_motion| {
            let resources = install(frame, *reduced_motion);
            move || drop(resources)
        });
    }

    let bar_style = format!(
        "transform: scaleX({:.4}); opacity: {};",
        frame.scale,
        if frame.visible { 1 } else { 0 }
    );
    let highlight_style = format!("left: {:.2}%;", frame.highlight);

    html! {
        <div class="scroll-progress" aria-hidden="true">
            <div class="scroll-progress-bar" style={bar_style}>
                <div class="scroll-progress-highlight" style={highlight_style} />
            </div>
            if frame.visible {
                <div class="scroll-progress-particles">
                    { for frame.particles.iter().enumerate().map(|(index, particle)| html! {
                        <span
                            key={index}
                            class="scroll-particle"
                            style={format!(
                                "left: {}%; transform: translateX({:.1}px); opacity: {:.3};",
                                particle.left_percent, particle.x, particle.opacity
                            )}
                        />
                    }) }
                </div>
            }
        </div>
    }
}

fn install(
    frame: UseStateHandle<BarFrame>,
    reduced_motion: bool,
) -> Option<(Rc<AnimationFrameLoop>, Vec<EventListenerGuard>)> {
    let window = window()?;
    let progress = Rc::new(RefCell::new(ScrollProgress::default()));
    progress.borrow_mut().update(read_scroll_fraction());

    let frame_loop = {
        let progress = progress.clone();
        Rc::new(AnimationFrameLoop::start(move |time| {
            let mut progress = progress.borrow_mut();
            let settled = progress.step(time.dt);
            let visible = progress.visible();
            let elapsed = if reduced_motion { 0.0 } else { time.elapsed };
            let (width, _) = super::hooks::viewport_size();

            frame.set(BarFrame {
                scale: progress.bar_scale(),
                visible,
                highlight: highlight_offset(elapsed),
                particles: if visible {
                    (0..PARTICLE_COUNT)
                        .map(|index| particle_frame(index, elapsed, width))
                        .collect()
                } else {
                    Vec::new()
                },
            });

            !settled || (visible && !reduced_motion)
        })?)
    };

    let target: EventTarget = window.into();
    let on_scroll = {
        let frame_loop = frame_loop.clone();
        move |_: web_sys::Event| {
            progress.borrow_mut().update(read_scroll_fraction());
            frame_loop.wake();
        }
    };
    let on_resize = on_scroll.clone();

    let listeners = [
        EventListenerGuard::new(&target, "scroll", on_scroll),
        EventListenerGuard::new(&target, "resize", on_resize),
    ]
    .into_iter()
    .flatten()
    .collect();

    Some((frame_loop, listeners))
}
