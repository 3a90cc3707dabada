use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{HOME_HIGHLIGHTS, OWNER_NAME, OWNER_ROLE, OWNER_TAGLINE, PROJECTS};
use crate::frontend::hover::RiverHover;
use crate::frontend::reveal::{FlowingCard, FlowingSection};
use crate::frontend::scene::HeroScene;
use crate::frontend::text::{FlowingText, FlowingTitle};
use crate::frontend::Route;

use super::TagList;

const FEATURED_ON_HOME: usize = 3;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <section class="hero" aria-labelledby="hero-heading">
                <HeroScene />
                <div class="hero-copy">
                    <p class="eyebrow">{OWNER_ROLE}</p>
                    <h1 id="hero-heading">
                        <FlowingTitle text={OWNER_NAME} class="gradient-text" />
                    </h1>
                    <FlowingText text={OWNER_TAGLINE} class="lead" delay={0.4} />
                    <div class="hero-actions">
                        <RiverHover>
                            <Link<Route> to={Route::Projects} classes="button button-primary">
                                {"View My Work"}
                            </Link<Route>>
                        </RiverHover>
                        <RiverHover>
                            <Link<Route> to={Route::Contact} classes="button button-ghost">
                                {"Get In Touch"}
                            </Link<Route>>
                        </RiverHover>
                    </div>
                    <a class="scroll-cue" href="#highlights" aria-label="Scroll to highlights">
                        <span aria-hidden="true">{"↓"}</span>
                    </a>
                </div>
            </section>

            <FlowingSection id="highlights" class="section-block">
                <h2><FlowingTitle text="What I Do" /></h2>
                <FlowingText
                    text="I specialize in creating cutting-edge web experiences that combine beautiful design with powerful functionality."
                    class="section-lead"
                />
                <div class="card-grid three-up">
                    { for HOME_HIGHLIGHTS.iter().enumerate().map(|(index, highlight)| html! {
                        <FlowingCard key={highlight.title} delay={index as f64 * 0.1}>
                            <div class={classes!("card-glyph", highlight.gradient)} aria-hidden="true">
                                {highlight.glyph}
                            </div>
                            <h3>{highlight.title}</h3>
                            <p class="muted">{highlight.description}</p>
                        </FlowingCard>
                    }) }
                </div>
            </FlowingSection>

            <FlowingSection class="section-block">
                <h2><FlowingTitle text="Featured Projects" /></h2>
                <div class="card-grid three-up">
                    { for PROJECTS.iter().filter(|project| project.featured).take(FEATURED_ON_HOME).enumerate().map(|(index, project)| html! {
                        <FlowingCard key={project.id} delay={index as f64 * 0.1} class="project-card">
                            <div class={classes!("project-swatch", project.gradient)} aria-hidden="true" />
                            <h3>{project.title}</h3>
                            <p class="muted">{project.description}</p>
                            <TagList tags={project.tech} limit={3} />
                        </FlowingCard>
                    }) }
                </div>
                <div class="section-actions">
                    <Link<Route> to={Route::Projects} classes="button button-ghost">
                        {"View All Projects"}
                    </Link<Route>>
                </div>
            </FlowingSection>

            <FlowingSection class="section-block cta-block">
                <h2><FlowingTitle text="Let's Create Something Amazing" /></h2>
                <FlowingText
                    text="Ready to bring your ideas to life? Let's discuss your next project and create something extraordinary together."
                />
                <RiverHover>
                    <Link<Route> to={Route::Contact} classes="button button-primary">
                        {"Start a Project"}
                    </Link<Route>>
                </RiverHover>
            </FlowingSection>
        </>
    }
}
