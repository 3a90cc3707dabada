use yew::prelude::*;

use super::hooks::use_reveal;
use crate::motion::reveal::RevealVariant;
use crate::motion::text::{tokenize, TokenMode};

#[derive(Properties, PartialEq)]
pub struct FlowingTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: f64,
}

fn tokens(text: &str, mode: TokenMode, delay: f64, latch: crate::motion::RevealLatch) -> Html {
    tokenize(text, mode, delay)
        .into_iter()
        .map(|token| {
            let style = token.style(mode, latch);
            html! {
                <span key={token.index} class="flow-token" style={style}>
                    <span class="flow-token-face">{token.text}</span>
                </span>
            }
        })
        .collect()
}

/// Body copy revealed one word at a time.
#[function_component(FlowingText)]
pub fn flowing_text(props: &FlowingTextProps) -> Html {
    let node = use_node_ref();
    let latch = use_reveal(node.clone(), RevealVariant::Card);

    html! {
        <div ref={node} class={classes!("flowing-text", props.class.clone())} aria-label={props.text.clone()}>
            <span class="flow-tokens" aria-hidden="true">
                {tokens(&props.text, TokenMode::Words, props.delay, latch)}
            </span>
        </div>
    }
}

/// Heading text revealed one character at a time, with a shimmer sweeping
/// across once it is in. Wrap it in the heading element it belongs to.
#[function_component(FlowingTitle)]
pub fn flowing_title(props: &FlowingTextProps) -> Html {
    let node = use_node_ref();
    let latch = use_reveal(node.clone(), RevealVariant::Card);

    html! {
        <span ref={node} class={classes!("flowing-title", props.class.clone())} aria-label={props.text.clone()}>
            <span class="flow-tokens" aria-hidden="true">
                {tokens(&props.text, TokenMode::Letters, props.delay, latch)}
            </span>
            if latch.is_revealed() {
                <span class="flow-title-shimmer" aria-hidden="true" />
            }
        </span>
    }
}
