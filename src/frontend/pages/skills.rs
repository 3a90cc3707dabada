use yew::prelude::*;

use crate::content::{SkillCategory, SKILL_CATEGORIES, TOOL_GROUPS};
use crate::filter::FilterState;
use crate::frontend::hover::RiverHover;
use crate::frontend::reveal::{FlowingCard, FlowingSection};
use crate::frontend::scene::FloatingShapes;
use crate::frontend::text::{FlowingText, FlowingTitle};
use crate::motion::scene::SKILLS_SHAPES;

use super::{NoResults, SearchBox, TagList};

fn skill_card(category: &SkillCategory, index: usize) -> Html {
    html! {
        <FlowingCard key={category.title} delay={index as f64 * 0.1} class="skill-card">
            <div class={classes!("card-glyph", category.gradient)} aria-hidden="true">
                {category.glyph}
            </div>
            <h3>{category.title}</h3>
            <p class="muted">{category.description}</p>
            <ul class="skill-bars">
                { for category.skills.iter().map(|skill| {
                    let level = skill.level();
                    html! {
                        <li key={skill.name} class="skill-bar">
                            <div class="skill-bar-label">
                                <span>{skill.name}</span>
                                <span class="muted">{format!("{level}%")}</span>
                            </div>
                            <div
                                class="skill-bar-track"
                                role="progressbar"
                                aria-label={skill.name}
                                aria-valuemin="0"
                                aria-valuemax="100"
                                aria-valuenow={level.to_string()}
                            >
                                <div class={classes!("skill-bar-fill", category.gradient)} style={format!("width: {level}%;")} />
                            </div>
                        </li>
                    }
                }) }
            </ul>
        </FlowingCard>
    }
}

#[function_component(SkillsPage)]
pub fn skills_page() -> Html {
    let filter = use_state_eq(FilterState::default);
    let visible = filter.apply(SKILL_CATEGORIES);

    html! {
        <>
            <section class="page-hero" aria-labelledby="skills-heading">
                <FloatingShapes shapes={SKILLS_SHAPES} />
                <h1 id="skills-heading"><FlowingTitle text="Skills & Expertise" class="gradient-text" /></h1>
                <FlowingText
                    text="A comprehensive overview of my technical skills and the tools I use to bring ideas to life."
                    class="lead"
                    delay={0.3}
                />
            </section>

            <FlowingSection class="section-block filter-bar">
                <SearchBox filter={filter.clone()} placeholder="Search skills..." />
            </FlowingSection>

            <FlowingSection class="section-block">
                if visible.is_empty() {
                    <NoResults what="skills" filter={filter.clone()} />
                } else {
                    <div class="card-grid three-up">
                        { for visible.iter().enumerate().map(|(index, category)| skill_card(category, index)) }
                    </div>
                }
            </FlowingSection>

            <FlowingSection class="section-block">
                <h2><FlowingTitle text="Tools & Technologies" /></h2>
                <div class="card-grid three-up">
                    { for TOOL_GROUPS.iter().map(|group| html! {
                        <FlowingCard key={group.title}>
                            <h3>{group.title}</h3>
                            <TagList tags={group.items} />
                        </FlowingCard>
                    }) }
                </div>
            </FlowingSection>

            <FlowingSection class="section-block cta-block">
                <h2><FlowingTitle text="Always Learning" /></h2>
                <FlowingText text="Technology evolves quickly, and so do I. I'm constantly exploring new tools and techniques to deliver the best results." />
                <RiverHover>
                    <a class="button button-ghost" href="#skills-heading">{"Back to top"}</a>
                </RiverHover>
            </FlowingSection>
        </>
    }
}
