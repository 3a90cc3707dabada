mod about;
mod blog;
mod contact;
mod home;
mod not_found;
mod projects;
mod skills;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use skills::SkillsPage;

use yew::prelude::*;

use crate::filter::{FilterState, ALL_CATEGORIES};

#[derive(Properties, PartialEq)]
pub struct CategoryPillsProps {
    pub categories: &'static [&'static str],
    pub filter: UseStateHandle<FilterState>,
}

/// Row of category buttons bound to a page's filter state.
#[function_component(CategoryPills)]
pub fn category_pills(props: &CategoryPillsProps) -> Html {
    html! {
        <div class="category-pills" role="group" aria-label="Filter by category">
            { for props.categories.iter().map(|category| {
                let selected = props.filter.is_category_selected(category);
                let onclick = {
                    let filter = props.filter.clone();
                    let category = *category;
                    Callback::from(move |_: MouseEvent| {
                        filter.set((*filter).clone().with_category(category));
                    })
                };
                html! {
                    <button
                        key={*category}
                        type="button"
                        class={classes!("pill", selected.then_some("is-selected"))}
                        aria-pressed={selected.to_string()}
                        onclick={onclick}
                    >
                        {*category}
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub filter: UseStateHandle<FilterState>,
    pub placeholder: AttrValue,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let oninput = {
        let filter = props.filter.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<web_sys::HtmlInputElement>().value();
            filter.set((*filter).clone().with_search(value));
        })
    };

    html! {
        <label class="search-box">
            <span class="sr-only">{props.placeholder.clone()}</span>
            <span class="search-glyph" aria-hidden="true">{"⌕"}</span>
            <input
                type="search"
                placeholder={props.placeholder.clone()}
                value={props.filter.search.clone()}
                oninput={oninput}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoResultsProps {
    pub what: AttrValue,
    pub filter: UseStateHandle<FilterState>,
}

/// Shown in place of an empty listing, with a way back to everything.
#[function_component(NoResults)]
pub fn no_results(props: &NoResultsProps) -> Html {
    let onclick = {
        let filter = props.filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(FilterState::default()))
    };
    let narrowed = props.filter.category != ALL_CATEGORIES
        || !props.filter.search.trim().is_empty()
        || props.filter.featured_only;

    html! {
        <div class="no-results" role="status">
            <p>{format!("No {} found matching your criteria.", props.what)}</p>
            if narrowed {
                <button type="button" class="button button-ghost" onclick={onclick}>
                    {"Clear filters"}
                </button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TagListProps {
    pub tags: &'static [&'static str],
    #[prop_or(usize::MAX)]
    pub limit: usize,
}

#[function_component(TagList)]
pub fn tag_list(props: &TagListProps) -> Html {
    let (shown, hidden) = crate::content::visible_tags(props.tags, props.limit);
    html! {
        <ul class="tag-list">
            { for shown.iter().map(|tag| html! { <li key={*tag} class="tag">{*tag}</li> }) }
            if hidden > 0 {
                <li class="tag tag-more">{format!("+{hidden}")}</li>
            }
        </ul>
    }
}
