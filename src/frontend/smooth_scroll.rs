use wasm_bindgen::JsCast;
use web_sys::{
    window, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::prelude::*;

use super::hooks::EventListenerGuard;
use crate::anchor::{classify_click, AnchorClick, ScrollHost, SmoothScrollScope};

/// Eased scrolling for the whole document plus interception of `#fragment`
/// links. Renders nothing; all of its work lives in the mount effect.
#[function_component(SmoothScroll)]
pub fn smooth_scroll() -> Html {
    use_effect_with((), |_| {
        let scope = DocumentScroll::new().map(SmoothScrollScope::install);
        move || drop(scope)
    });

    Html::default()
}

struct DocumentScroll {
    root: HtmlElement,
    document: EventTarget,
}

impl DocumentScroll {
    fn new() -> Option<Self> {
        let document = window()?.document()?;
        let root = document.document_element()?.dyn_into::<HtmlElement>().ok()?;
        Some(Self {
            root,
            document: document.into(),
        })
    }
}

impl ScrollHost for DocumentScroll {
    type Listener = EventListenerGuard;

    fn set_scroll_behavior(&self, value: &'static str) {
        let _ = self.root.style().set_property("scroll-behavior", value);
    }

    fn intercept_clicks(&self) -> Option<EventListenerGuard> {
        EventListenerGuard::new(&self.document, "click", intercept_anchor_click)
    }
}

fn intercept_anchor_click(event: Event) {
    let Some(anchor) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("a").ok().flatten())
    else {
        return;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let id = match classify_click(&href) {
        AnchorClick::Ignore => return,
        AnchorClick::Suppress => {
            event.prevent_default();
            return;
        }
        AnchorClick::ScrollTo(id) => id,
    };

    event.prevent_default();
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|document| document.get_element_by_id(&id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
