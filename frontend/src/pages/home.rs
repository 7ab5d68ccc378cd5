use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ascii_hero::{AsciiHero, HeroCta};
use crate::config;
use crate::content::{HIGHLIGHT_CARDS, MARQUEE_WORDS, ORGANIZATION_BLURB};
use crate::hooks::page_top::use_scroll_to_top;
use crate::hooks::scroll_reveal::{use_scroll_reveal, use_scroll_reveal_multiple};
use crate::motion;
use crate::Route;

fn marquee_strip() -> Html {
    html! {
        <div class="animate-marquee marquee-strip">
            { for MARQUEE_WORDS.iter().chain(MARQUEE_WORDS.iter()).map(|word| html! {
                <>
                    <span>{ *word }</span>
                    <span>{"•"}</span>
                </>
            }) }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    let (about_ref, about_visible) = use_scroll_reveal();
    let (card_refs, card_visible) = use_scroll_reveal_multiple(HIGHLIGHT_CARDS.len());

    let ctas = vec![
        HeroCta { label: "JOIN US", route: Route::Membership },
        HeroCta { label: "EXPLORE EVENTS", route: Route::Events },
    ];

    html! {
        <div class="home-page">
            <AsciiHero
                project_id={config::HOME_HERO_PROJECT}
                title="INSTITUTION OF ENGINEERS "
                title_tail={Some("(INDIA)")}
                tagline="Empowering engineering students with knowledge, skills, and opportunities to excel. We bridge the gap between academic learning and industry practices, fostering innovation and continuous growth."
                {ctas}
            />

            <section class="marquee-section">
                <div class="marquee-track">
                    { marquee_strip() }
                    { marquee_strip() }
                </div>
            </section>

            <section class="section">
                <div class="container grid-3">
                    { for HIGHLIGHT_CARDS.iter().enumerate().map(|(index, link)| {
                        let visible = motion::flag(&card_visible, index);
                        html! {
                            <div
                                ref={card_refs[index].clone()}
                                class={classes!("reveal-pop", visible.then(|| "visible"))}
                                style={motion::stagger_delay(index, 100)}
                            >
                                <Link<Route> to={link.route.clone()} classes="card-mono card-link">
                                    <div class="card-icon">{ link.card.icon }</div>
                                    <h3>{ link.card.title }</h3>
                                    <p class="muted">{ link.card.description }</p>
                                </Link<Route>>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section class="section section-secondary">
                <div
                    ref={about_ref}
                    class={classes!("container", "about-preview", "reveal-up", about_visible.then(|| "visible"))}
                >
                    <div class="animated-line"></div>
                    <div>
                        <h2>{"Who We Are"}</h2>
                        <p class="muted">
                            { ORGANIZATION_BLURB }
                        </p>
                        <Link<Route> to={Route::About} classes="link-underline">{"Learn More"}</Link<Route>>
                    </div>
                </div>
            </section>
        </div>
    }
}
