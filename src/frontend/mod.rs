//! Browser half of the site: the app shell, router and every component
//! that touches the DOM.

mod cursor;
mod hooks;
mod hover;
mod image;
mod pages;
mod progress;
mod reveal;
mod scene;
mod smooth_scroll;
mod text;
mod theme;

use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contact::{ConsoleDelivery, ContactDelivery};
use crate::content::{OWNER_NAME, SOCIAL_LINKS};

use cursor::RiverCursor;
use progress::ScrollProgressBar;
use smooth_scroll::SmoothScroll;
use theme::{ThemeProvider, ThemeToggle};

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/blog")]
    Blog,
    #[at("/projects")]
    Projects,
    #[at("/skills")]
    Skills,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    const NAV: [(Route, &'static str); 6] = [
        (Route::Home, "Home"),
        (Route::About, "About"),
        (Route::Projects, "Projects"),
        (Route::Skills, "Skills"),
        (Route::Blog, "Blog"),
        (Route::Contact, "Contact"),
    ];
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::HomePage /> },
        Route::About => html! { <pages::AboutPage /> },
        Route::Blog => html! { <pages::BlogPage /> },
        Route::Projects => html! { <pages::ProjectsPage /> },
        Route::Skills => html! { <pages::SkillsPage /> },
        Route::Contact => html! { <pages::ContactPage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}

/// The contact page's delivery collaborator, swappable at the root.
#[derive(Clone)]
pub struct DeliveryContext(pub Rc<dyn ContactDelivery>);

impl PartialEq for DeliveryContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for DeliveryContext {
    fn default() -> Self {
        Self(Rc::new(ConsoleDelivery))
    }
}

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Outbound link that always opens a new tab and says so to screen readers.
#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={props.label.clone()}
        >
            if props.children == Html::default() {
                {props.label.clone()}
            } else {
                {props.children.clone()}
            }
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let current = use_route::<Route>();

    html! {
        <header class="site-header">
            <Link<Route> to={Route::Home} classes="brand">{OWNER_NAME}</Link<Route>>
            <nav aria-label="Primary">
                <ul class="nav-links">
                    { for Route::NAV.into_iter().map(|(route, label)| {
                        let active = current.as_ref() == Some(&route);
                        html! {
                            <li key={label}>
                                <Link<Route>
                                    to={route}
                                    classes={classes!("nav-link", active.then_some("is-active"))}
                                >
                                    {label}
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
            <ThemeToggle />
        </header>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <ul class="social-links">
                { for SOCIAL_LINKS.iter().map(|link| html! {
                    <li key={link.label}>
                        <ExternalLink href={link.href} label={link.label} class="social-link">
                            <span aria-hidden="true">{link.glyph}</span>
                        </ExternalLink>
                    </li>
                }) }
            </ul>
            <p class="muted">{format!("© {OWNER_NAME}. Built with Rust and Yew.")}</p>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    let delivery = use_memo((), |_| DeliveryContext::default());

    html! {
        <ThemeProvider>
            <ContextProvider<DeliveryContext> context={(*delivery).clone()}>
                <BrowserRouter>
                    <SmoothScroll />
                    <ScrollProgressBar />
                    <RiverCursor />
                    <a class="skip-link" href="#content">{"Skip to main content"}</a>
                    <div class="page-shell">
                        <Navigation />
                        <main id="content">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                    </div>
                </BrowserRouter>
            </ContextProvider<DeliveryContext>>
        </ThemeProvider>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
