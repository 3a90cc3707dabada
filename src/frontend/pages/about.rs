use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{
    ABOUT_FACTS, ABOUT_SKILL_GROUPS, CERTIFICATIONS, MILESTONES, OWNER_NAME, RESUME_PATH, VALUES,
};
use crate::frontend::image::FallbackImage;
use crate::frontend::reveal::{FlowingCard, FlowingSection};
use crate::frontend::scene::FloatingShapes;
use crate::frontend::text::{FlowingText, FlowingTitle};
use crate::frontend::Route;
use crate::motion::scene::ABOUT_SHAPES;

use super::TagList;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <>
            <section class="page-hero" aria-labelledby="about-heading">
                <FloatingShapes shapes={ABOUT_SHAPES} />
                <div class="page-hero-grid">
                    <div class="hero-copy">
                        <h1 id="about-heading">
                            <FlowingTitle text="About Me" class="gradient-text" />
                        </h1>
                        <FlowingText
                            text="I'm a passionate web designer and developer who loves building immersive digital experiences. With over five years of experience I turn ideas into fast, accessible, animated interfaces."
                            class="lead"
                            delay={0.3}
                        />
                        <ul class="fact-list">
                            { for ABOUT_FACTS.iter().map(|fact| html! { <li key={*fact}>{*fact}</li> }) }
                        </ul>
                        <div class="hero-actions">
                            <a class="button button-primary" href={RESUME_PATH} download="">
                                {"Download Resume"}
                            </a>
                            <Link<Route> to={Route::Contact} classes="button button-ghost">
                                {"Let's Talk"}
                            </Link<Route>>
                        </div>
                    </div>
                    <FlowingCard class="portrait-card">
                        <FallbackImage
                            src="/portrait.jpg"
                            alt={format!("Portrait of {OWNER_NAME}")}
                            class="portrait"
                        />
                    </FlowingCard>
                </div>
            </section>

            <FlowingSection class="section-block">
                <h2><FlowingTitle text="My Journey" /></h2>
                <ol class="timeline">
                    { for MILESTONES.iter().enumerate().map(|(index, milestone)| html! {
                        <li key={milestone.year} class="timeline-item">
                            <FlowingCard delay={index as f64 * 0.1}>
                                <span class="timeline-year">{milestone.year}</span>
                                <h3>{milestone.title}</h3>
                                <p class="muted">{milestone.description}</p>
                            </FlowingCard>
                        </li>
                    }) }
                </ol>
            </FlowingSection>

            <FlowingSection class="section-block">
                <h2><FlowingTitle text="Skills & Expertise" /></h2>
                <div class="card-grid two-up">
                    { for ABOUT_SKILL_GROUPS.iter().map(|group| html! {
                        <FlowingCard key={group.title}>
                            <h3>{group.title}</h3>
                            <TagList tags={group.items} />
                        </FlowingCard>
                    }) }
                </div>
            </FlowingSection>

            <FlowingSection class="section-block">
                <h2><FlowingTitle text="Certifications" /></h2>
                <div class="card-grid four-up">
                    { for CERTIFICATIONS.iter().enumerate().map(|(index, certification)| html! {
                        <FlowingCard key={certification.title} delay={index as f64 * 0.1}>
                            <div class="card-badge" aria-hidden="true">{certification.badge}</div>
                            <h3>{certification.title}</h3>
                            <p class="muted">{certification.issuer}</p>
                            <p class="card-meta">{certification.year}</p>
                        </FlowingCard>
                    }) }
                </div>
            </FlowingSection>

            <FlowingSection class="section-block">
                <h2><FlowingTitle text="What Drives Me" /></h2>
                <div class="card-grid three-up">
                    { for VALUES.iter().map(|value| html! {
                        <FlowingCard key={value.title}>
                            <div class="card-glyph" aria-hidden="true">{value.glyph}</div>
                            <h3>{value.title}</h3>
                            <p class="muted">{value.description}</p>
                        </FlowingCard>
                    }) }
                </div>
            </FlowingSection>
        </>
    }
}
