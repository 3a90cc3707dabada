use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Storage};
use yew::prelude::*;

use super::hooks::{media_matches, use_media_query, DARK_SCHEME_QUERY, REDUCED_MOTION_QUERY};
use crate::theme::{Theme, ThemePreference, THEME_KEY};

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub preference: ThemePreference,
    pub resolved: Theme,
    pub cycle: Callback<()>,
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_preference() -> ThemePreference {
    local_storage()
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten())
        .and_then(|value| ThemePreference::from_str(&value))
        .unwrap_or_default()
}

fn persist_preference(preference: ThemePreference) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, preference.as_str());
    }
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn apply_theme_with_transition(theme: Theme) {
    if media_matches(REDUCED_MOTION_QUERY) {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition
        .call1(&document_js, callback.unchecked_ref())
        .is_err()
    {
        apply_theme(theme);
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Html,
}

/// Owns the visitor's theme preference. `System` tracks the OS setting live.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let preference = use_state_eq(read_stored_preference);
    let system_dark = use_media_query(DARK_SCHEME_QUERY);
    let resolved = preference.resolve(system_dark);
    let painted = use_mut_ref(|| None::<Theme>);

    {
        let painted = painted.clone();
        use_effect_with(resolved, move |resolved| {
            if *painted.borrow() != Some(*resolved) {
                apply_theme(*resolved);
                *painted.borrow_mut() = Some(*resolved);
            }
            || ()
        });
    }

    let cycle = {
        let preference = preference.clone();
        let painted = painted.clone();
        Callback::from(move |_| {
            let next = (*preference).next();
            let next_theme = next.resolve(media_matches(DARK_SCHEME_QUERY));
            persist_preference(next);
            if *painted.borrow() != Some(next_theme) {
                apply_theme_with_transition(next_theme);
                *painted.borrow_mut() = Some(next_theme);
            }
            preference.set(next);
        })
    };

    let context = Rc::new(ThemeContext {
        preference: *preference,
        resolved,
        cycle,
    });

    html! {
        <ContextProvider<Rc<ThemeContext>> context={context}>
            {props.children.clone()}
        </ContextProvider<Rc<ThemeContext>>>
    }
}

#[hook]
pub fn use_theme() -> Option<Rc<ThemeContext>> {
    use_context::<Rc<ThemeContext>>()
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let Some(theme) = use_theme() else {
        return Html::default();
    };

    let onclick = {
        let cycle = theme.cycle.clone();
        Callback::from(move |_: MouseEvent| cycle.emit(()))
    };

    html! {
        <button
            class="theme-toggle"
            type="button"
            aria-label={theme.preference.toggle_label()}
            title={theme.preference.toggle_label()}
            onclick={onclick}
        >
            <span aria-hidden="true">{theme.preference.icon()}</span>
        </button>
    }
}
