use yew::prelude::*;

use super::hooks::use_reveal;
use crate::motion::reveal::RevealVariant;

#[derive(Properties, PartialEq)]
pub struct FlowingSectionProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub delay: f64,
}

/// Full-width block that rises into place the first time it scrolls in.
#[function_component(FlowingSection)]
pub fn flowing_section(props: &FlowingSectionProps) -> Html {
    let node = use_node_ref();
    let latch = use_reveal(node.clone(), RevealVariant::Section);
    let style = RevealVariant::Section.style(latch, props.delay, false);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("flowing-section", props.class.clone())}
            style={style}
        >
            if latch.is_revealed() {
                <div class="flow-backdrop" aria-hidden="true" />
            }
            {props.children.clone()}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FlowingCardProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: f64,
}

/// Tile that swings in once and tilts toward the pointer while hovered.
#[function_component(FlowingCard)]
pub fn flowing_card(props: &FlowingCardProps) -> Html {
    let node = use_node_ref();
    let latch = use_reveal(node.clone(), RevealVariant::Card);
    let hovered = use_state_eq(|| false);

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
            ref={node}
            class={classes!("flowing-card", props.class.clone())}
            style={RevealVariant::Card.style(latch, props.delay, *hovered)}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <div class="flow-card-sheen" aria-hidden="true" />
            {props.children.clone()}
        </div>
    }
}
