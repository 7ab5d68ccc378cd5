use yew::prelude::*;

use crate::content::{OBJECTIVES, ORGANIZATION_BLURB, TEAM, WHY_WE_EXIST};
use crate::hooks::page_top::use_scroll_to_top;
use crate::hooks::scroll_reveal::{use_scroll_reveal, use_scroll_reveal_multiple};
use crate::motion;

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();
    let (hero_ref, hero_visible) = use_scroll_reveal();
    let (mission_ref, mission_visible) = use_scroll_reveal();
    let (vision_ref, vision_visible) = use_scroll_reveal();
    let (objective_refs, objective_visible) = use_scroll_reveal_multiple(OBJECTIVES.len());
    let (team_refs, team_visible) = use_scroll_reveal_multiple(TEAM.len());
    let (why_refs, why_visible) = use_scroll_reveal_multiple(WHY_WE_EXIST.len());

    html! {
        <div class="about-page">
            <section class="page-hero section-dark globe-bg">
                <div class="container hero-split">
                    <div ref={hero_ref} class={classes!("reveal-left", hero_visible.then(|| "visible"))}>
                        <h1>{"About Us"}</h1>
                        <p class="hero-lead">{ ORGANIZATION_BLURB }</p>
                    </div>
                    <div
                        class={classes!("hero-globe", "reveal-right", hero_visible.then(|| "visible"))}
                        style="transition-delay: 200ms;"
                    ></div>
                </div>
            </section>

            <section class="section">
                <div class="container grid-2">
                    <div ref={mission_ref} class={classes!("reveal-left", mission_visible.then(|| "visible"))}>
                        <h2>{"◎ Our Mission"}</h2>
                        <p class="muted">
                            {"To empower engineering students with the knowledge, skills, and opportunities \
                              needed to excel in their academic and professional careers. We strive to create \
                              an environment that encourages innovation, collaboration, and continuous learning."}
                        </p>
                    </div>
                    <div ref={vision_ref} class={classes!("reveal-right", vision_visible.then(|| "visible"))}>
                        <h2>{"◉ Our Vision"}</h2>
                        <p class="muted">
                            {"To be the leading student organization that bridges the gap between academic \
                              education and industry requirements, producing engineers who are not just \
                              technically proficient but also innovative leaders ready to shape the future."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="section section-secondary">
                <div class="container narrow">
                    <h2 class="section-title">{"Our Objectives"}</h2>
                    { for OBJECTIVES.iter().enumerate().map(|(index, objective)| html! {
                        <div
                            ref={objective_refs[index].clone()}
                            class={classes!("objective", "reveal-left", motion::flag(&objective_visible, index).then(|| "visible"))}
                            style={motion::stagger_delay(index, 100)}
                        >
                            <span class="objective-number">{ format!("{:02}", index + 1) }</span>
                            <p>{ *objective }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2 class="section-title">{"Organizational Structure"}</h2>
                    <div class="grid-4">
                        { for TEAM.iter().enumerate().map(|(index, member)| html! {
                            <div
                                ref={team_refs[index].clone()}
                                class={classes!("card-mono", "team-card", "reveal-pop", motion::flag(&team_visible, index).then(|| "visible"))}
                                style={motion::stagger_delay(index, 100)}
                            >
                                <div class="avatar">{ motion::initials(member.name) }</div>
                                <h3>{ member.name }</h3>
                                <p class="muted">{ member.role }</p>
                                <p class="muted small">{ member.department }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container">
                    <h2 class="section-title">{"Why We Exist"}</h2>
                    <div class="grid-3">
                        { for WHY_WE_EXIST.iter().enumerate().map(|(index, item)| html! {
                            <div
                                ref={why_refs[index].clone()}
                                class={classes!("why-item", "reveal-up", motion::flag(&why_visible, index).then(|| "visible"))}
                                style={motion::stagger_delay(index, 150)}
                            >
                                <div class="icon-box">{ item.icon }</div>
                                <h3>{ item.title }</h3>
                                <p>{ item.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>
        </div>
    }
}
