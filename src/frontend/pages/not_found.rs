use yew::prelude::*;
use yew_router::prelude::*;

use crate::frontend::reveal::FlowingSection;
use crate::frontend::text::FlowingTitle;
use crate::frontend::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <FlowingSection class="section-block not-found">
            <h1><FlowingTitle text="404" class="gradient-text" /></h1>
            <p class="muted">{"This page drifted off downstream."}</p>
            <Link<Route> to={Route::Home} classes="button button-primary">{"Back home"}</Link<Route>>
        </FlowingSection>
    }
}
