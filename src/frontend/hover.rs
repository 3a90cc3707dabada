use yew::prelude::*;

use super::hooks::{use_prefers_reduced_motion, AnimationFrameLoop};
use crate::motion::hover::{glow_style, wrapper_style};

#[derive(Properties, PartialEq)]
pub struct RiverHoverProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub class: Classes,
}

/// Paints a colour-cycling glow under its children while the pointer is
/// over them. The frame loop only exists while hovered.
#[function_component(RiverHover)]
pub fn river_hover(props: &RiverHoverProps) -> Html {
    let hovered = use_state_eq(|| false);
    let glow_elapsed = use_state_eq(|| None::<f64>);
    let reduced_motion = use_prefers_reduced_motion();

    {
        let glow_elapsed = glow_elapsed.clone();
        use_effect_with((*hovered, reduced_motion), move |(hovered, reduced_motion)| {
            let mut frames = None;
            if !*hovered {
                glow_elapsed.set(None);
            } else if *reduced_motion {
                glow_elapsed.set(Some(0.0));
            } else {
                frames = AnimationFrameLoop::start(move |frame| {
                    glow_elapsed.set(Some(frame.elapsed));
                    true
                });
            }
            move || drop(frames)
        });
    }

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div
            class={classes!("river-hover", props.class.clone())}
            style={wrapper_style(*hovered)}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <div class="river-glow" style={glow_style(*glow_elapsed)} aria-hidden="true" />
            <div class="river-hover-content">{props.children.clone()}</div>
        </div>
    }
}
