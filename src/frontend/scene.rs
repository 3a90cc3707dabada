use std::cell::Cell;
use std::rc::Rc;

use web_sys::{window, Element, EventTarget};
use yew::prelude::*;

use super::hooks::{use_prefers_reduced_motion, AnimationFrameLoop, EventListenerGuard};
use crate::motion::scene::{render_frame, FloatingShape, HERO_CAMERA, HERO_MESHES};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Stage {
    width: f64,
    height: f64,
    elapsed: f64,
}

fn measure(node: &NodeRef) -> Option<(f64, f64)> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    (rect.width() > 0.0 && rect.height() > 0.0).then(|| (rect.width(), rect.height()))
}

/// Frame-driven hero: a handful of meshes projected through an orbiting
/// camera into CSS 3D transforms. Frozen at its first frame under reduced
/// motion.
#[function_component(HeroScene)]
pub fn hero_scene() -> Html {
    let node = use_node_ref();
    let reduced_motion = use_prefers_reduced_motion();
    let stage = use_state_eq(|| Stage {
        width: 0.0,
        height: 0.0,
        elapsed: 0.0,
    });

    {
        let node = node.clone();
        let stage = stage.clone();
        use_effect_with(reduced_motion, move |reduced_motion| {
            let resources = install(node, stage, *reduced_motion);
            move || drop(resources)
        });
    }

    let nodes = if stage.width > 0.0 {
        render_frame(&HERO_MESHES, &HERO_CAMERA, stage.elapsed, stage.width, stage.height)
    } else {
        Vec::new()
    };

    html! {
        <div class="hero-scene" ref={node} aria-hidden="true">
            { for nodes.into_iter().map(|mesh| html! {
                <div key={mesh.index} class={mesh.class} style={mesh.style}>
                    if let Some(label) = mesh.label {
                        <span class="scene-label-text">{label}</span>
                    }
                </div>
            }) }
        </div>
    }
}

type SceneResources = (Option<AnimationFrameLoop>, Option<EventListenerGuard>);

fn install(node: NodeRef, stage: UseStateHandle<Stage>, reduced_motion: bool) -> SceneResources {
    let size = Rc::new(Cell::new(measure(&node).unwrap_or((0.0, 0.0))));
    let (width, height) = size.get();
    stage.set(Stage {
        width,
        height,
        elapsed: 0.0,
    });

    let resize = window().and_then(|window| {
        let target: EventTarget = window.into();
        let size = size.clone();
        let node = node.clone();
        let stage = stage.clone();
        EventListenerGuard::new(&target, "resize", move |_| {
            if let Some((width, height)) = measure(&node) {
                size.set((width, height));
                if reduced_motion {
                    stage.set(Stage {
                        width,
                        height,
                        elapsed: 0.0,
                    });
                }
            }
        })
    });

    if reduced_motion {
        return (None, resize);
    }

    let frame_loop = AnimationFrameLoop::start(move |time| {
        let (mut width, mut height) = size.get();
        if width <= 0.0 || height <= 0.0 {
            let Some(measured) = measure(&node) else {
                return true;
            };
            size.set(measured);
            (width, height) = measured;
        }
        stage.set(Stage {
            width,
            height,
            elapsed: time.elapsed,
        });
        true
    });

    (frame_loop, resize)
}

#[derive(Properties, PartialEq)]
pub struct FloatingShapesProps {
    pub shapes: &'static [FloatingShape],
    #[prop_or_default]
    pub class: Classes,
}

/// CSS-only hero backdrop. Each shape floats on its own keyframe timing.
#[function_component(FloatingShapes)]
pub fn floating_shapes(props: &FloatingShapesProps) -> Html {
    html! {
        <div class={classes!("floating-shapes", props.class.clone())} aria-hidden="true">
            { for props.shapes.iter().enumerate().map(|(index, shape)| html! {
                <span key={index} class={shape.kind.class()} style={shape.style()} />
            }) }
        </div>
    }
}
