use serde_json::json;
use yew::prelude::*;

use crate::contact::{email_domain, looks_like_email};
use crate::content::{display_date, BlogPost, BLOG_CATEGORIES, BLOG_POSTS};
use crate::filter::{partition_featured, FilterState};
use crate::frontend::hover::RiverHover;
use crate::frontend::image::FallbackImage;
use crate::frontend::reveal::{FlowingCard, FlowingSection};
use crate::frontend::text::{FlowingText, FlowingTitle};
use crate::telemetry::{log_event, LogLevel, BROWSER_LOG_LEVEL};

use super::{CategoryPills, NoResults, SearchBox, TagList};

fn post_card(post: &BlogPost, index: usize, featured: bool) -> Html {
    html! {
        <FlowingCard
            key={post.id}
            delay={index as f64 * 0.1}
            class={classes!("post-card", featured.then_some("post-card-featured"))}
        >
            <FallbackImage
                src={format!("/blog/{}.jpg", post.id)}
                alt={post.title}
                class="post-cover"
            />
            <div class="post-meta">
                <span class="pill pill-static">{post.category}</span>
                <time datetime={post.date}>{display_date(post.date)}</time>
                <span>{post.read_time}</span>
            </div>
            <h3>{post.title}</h3>
            <p class="muted">{post.excerpt}</p>
            if featured {
                <p class="post-body">{post.body}</p>
            }
            <TagList tags={post.tags} limit={if featured { usize::MAX } else { 3 }} />
        </FlowingCard>
    }
}

#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    let filter = use_state_eq(FilterState::default);
    let (featured, regular) = partition_featured(filter.apply(BLOG_POSTS));
    let empty = featured.is_empty() && regular.is_empty();

    html! {
        <>
            <section class="page-hero compact" aria-labelledby="blog-heading">
                <h1 id="blog-heading"><FlowingTitle text="Blog & Insights" class="gradient-text" /></h1>
                <FlowingText
                    text="Thoughts, tutorials, and insights about web development, 3D graphics, and the latest technologies."
                    class="lead"
                    delay={0.3}
                />
            </section>

            <FlowingSection class="section-block filter-bar">
                <SearchBox filter={filter.clone()} placeholder="Search articles..." />
                <CategoryPills categories={BLOG_CATEGORIES} filter={filter.clone()} />
            </FlowingSection>

            if empty {
                <NoResults what="articles" filter={filter.clone()} />
            } else {
                if !featured.is_empty() {
                    <FlowingSection class="section-block">
                        <h2><FlowingTitle text="Featured Articles" /></h2>
                        <div class="card-grid two-up">
                            { for featured.iter().enumerate().map(|(index, post)| post_card(post, index, true)) }
                        </div>
                    </FlowingSection>
                }
                if !regular.is_empty() {
                    <FlowingSection class="section-block">
                        <h2><FlowingTitle text="Latest Articles" /></h2>
                        <div class="card-grid three-up">
                            { for regular.iter().enumerate().map(|(index, post)| post_card(post, index, false)) }
                        </div>
                    </FlowingSection>
                }
            }

            <Newsletter />
        </>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SignupStatus {
    Idle,
    Invalid,
    Subscribed,
}

#[function_component(Newsletter)]
fn newsletter() -> Html {
    let email = use_state_eq(String::new);
    let status = use_state_eq(|| SignupStatus::Idle);

    let oninput = {
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |event: InputEvent| {
            email.set(event.target_unchecked_into::<web_sys::HtmlInputElement>().value());
            status.set(SignupStatus::Idle);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let address = email.trim();
            if !looks_like_email(address) {
                status.set(SignupStatus::Invalid);
                return;
            }
            log_event(
                BROWSER_LOG_LEVEL,
                LogLevel::Info,
                "newsletter_signup",
                json!({ "domain": email_domain(address) }),
            );
            email.set(String::new());
            status.set(SignupStatus::Subscribed);
        })
    };

    let message = match *status {
        SignupStatus::Idle => None,
        SignupStatus::Invalid => Some(("form-error", "Enter an email address like name@example.com.")),
        SignupStatus::Subscribed => Some(("form-success", "Thanks! You're on the list.")),
    };

    html! {
        <FlowingSection class="section-block newsletter">
            <h2><FlowingTitle text="Stay Updated" /></h2>
            <p class="muted">{"Get the latest articles and insights delivered straight to your inbox."}</p>
            <form class="newsletter-form" onsubmit={onsubmit} novalidate={true}>
                <label class="sr-only" for="newsletter-email">{"Email address"}</label>
                <input
                    id="newsletter-email"
                    type="email"
                    placeholder="Enter your email"
                    value={(*email).clone()}
                    oninput={oninput}
                    aria-invalid={(*status == SignupStatus::Invalid).to_string()}
                />
                <RiverHover>
                    <button type="submit" class="button button-primary">{"Subscribe"}</button>
                </RiverHover>
            </form>
            if let Some((class, text)) = message {
                <p class={class} role="status">{text}</p>
            }
        </FlowingSection>
    }
}
