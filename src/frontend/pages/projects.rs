use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{Project, PROJECTS, PROJECT_CATEGORIES};
use crate::filter::FilterState;
use crate::frontend::hover::RiverHover;
use crate::frontend::reveal::{FlowingCard, FlowingSection};
use crate::frontend::text::{FlowingText, FlowingTitle};
use crate::frontend::{ExternalLink, Route};

use super::{CategoryPills, NoResults, SearchBox, TagList};

fn project_card(project: &Project, index: usize) -> Html {
    html! {
        <FlowingCard key={project.id} delay={index as f64 * 0.1} class="project-card">
            <div class={classes!("project-swatch", project.gradient)} aria-hidden="true">
                if project.featured {
                    <span class="pill pill-static featured-badge">{"Featured"}</span>
                }
            </div>
            <p class="card-meta">{project.category}</p>
            <h3>{project.title}</h3>
            <p class="muted">{project.description}</p>
            <p class="project-long">{project.long_description}</p>
            <TagList tags={project.tech} limit={4} />
            <div class="card-actions">
                <ExternalLink href={project.demo} label={format!("{} live demo", project.title)}>
                    {"Live Demo"}
                </ExternalLink>
                <ExternalLink href={project.repository} label={format!("{} source code", project.title)}>
                    {"Code"}
                </ExternalLink>
            </div>
        </FlowingCard>
    }
}

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let filter = use_state_eq(FilterState::default);
    let visible = filter.apply(PROJECTS);

    let toggle_featured = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| {
            let featured_only = !filter.featured_only;
            filter.set((*filter).clone().with_featured_only(featured_only));
        })
    };

    html! {
        <>
            <section class="page-hero compact" aria-labelledby="projects-heading">
                <h1 id="projects-heading"><FlowingTitle text="My Projects" class="gradient-text" /></h1>
                <FlowingText
                    text="A showcase of my latest work in web development, 3D experiences, and innovative digital solutions."
                    class="lead"
                    delay={0.3}
                />
            </section>

            <FlowingSection class="section-block filter-bar">
                <SearchBox filter={filter.clone()} placeholder="Search projects..." />
                <CategoryPills categories={PROJECT_CATEGORIES} filter={filter.clone()} />
                <button
                    type="button"
                    class={classes!("pill", filter.featured_only.then_some("is-selected"))}
                    aria-pressed={filter.featured_only.to_string()}
                    onclick={toggle_featured}
                >
                    {"Featured Only"}
                </button>
            </FlowingSection>

            <FlowingSection class="section-block">
                if visible.is_empty() {
                    <NoResults what="projects" filter={filter.clone()} />
                } else {
                    <div class="card-grid three-up">
                        { for visible.iter().enumerate().map(|(index, project)| project_card(project, index)) }
                    </div>
                }
            </FlowingSection>

            <FlowingSection class="section-block cta-block">
                <h2><FlowingTitle text="Have a project in mind?" /></h2>
                <FlowingText text="I'm always excited to work on new challenges and bring creative ideas to life." />
                <RiverHover>
                    <Link<Route> to={Route::Contact} classes="button button-primary">{"Let's Work Together"}</Link<Route>>
                </RiverHover>
            </FlowingSection>
        </>
    }
}
