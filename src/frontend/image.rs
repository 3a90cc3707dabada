use yew::prelude::*;

use crate::content::PLACEHOLDER_IMAGE;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// `<img>` that swaps to the placeholder the first time its source fails.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state_eq(|| false);

    {
        let failed = failed.clone();
        use_effect_with(props.src.clone(), move |_| {
            failed.set(false);
            || ()
        });
    }

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    let src = if *failed {
        AttrValue::from(PLACEHOLDER_IMAGE)
    } else {
        props.src.clone()
    };

    html! {
        <img
            class={props.class.clone()}
            src={src}
            alt={props.alt.clone()}
            loading="lazy"
            onerror={(!*failed).then_some(onerror)}
        />
    }
}
