use yew::prelude::*;

use crate::components::ascii_hero::reveal_spans;
use crate::content::{EventCategory, PAST_EVENTS, TIMELINE, UPCOMING_EVENTS};
use crate::hooks::page_top::use_scroll_to_top;
use crate::hooks::scroll_reveal::{use_scroll_reveal, use_scroll_reveal_group, use_scroll_reveal_multiple};
use crate::motion;

const HEADLINE: &str = "Connecting Engineers, Building ";
const HEADLINE_TAIL: &str = "Futures";

#[function_component(Events)]
pub fn events() -> Html {
    use_scroll_to_top();
    let selected = use_state_eq(|| None::<EventCategory>);

    let upcoming: Vec<_> = UPCOMING_EVENTS
        .iter()
        .filter(|event| selected.map_or(true, |category| event.category == category))
        .collect();

    let (events_ref, events_visible) = use_scroll_reveal();
    let (event_refs, event_visible) = use_scroll_reveal_group(upcoming.len(), *selected);
    let (past_refs, past_visible) = use_scroll_reveal_multiple(PAST_EVENTS.len());
    let (timeline_ref, timeline_visible) = use_scroll_reveal();

    let headline = motion::text_reveal(HEADLINE, 0, 50);
    let tail = motion::text_reveal(HEADLINE_TAIL, headline.len(), 50);

    let filter_button = |category: Option<EventCategory>, label: &'static str| {
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(category))
        };
        html! {
            <button class={classes!("filter-button", (*selected == category).then(|| "active"))} {onclick}>
                { label }
            </button>
        }
    };

    html! {
        <div class="events-page">
            <section class="events-hero section-dark hills-bg">
                <div class="events-hero-copy">
                    <h1>
                        <span class="events-kicker">{"IE(I) Events & Activities"}</span>
                        <br />
                        <span>
                            { reveal_spans(headline) }
                            <span class="nowrap">{ reveal_spans(tail) }</span>
                        </span>
                    </h1>
                    <p class="hero-subtle">
                        {"Workshops, Seminars, Conventions, Technical Sessions"}
                        <br />
                        {"Join us for innovative learning experiences"}
                    </p>
                </div>
            </section>

            <section class="filter-bar">
                <div class="container filter-buttons">
                    { filter_button(None, "All") }
                    { for EventCategory::ALL.into_iter().map(|category| filter_button(Some(category), category.label())) }
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2 class="section-title">{"Upcoming Events"}</h2>
                    <div ref={events_ref} class={classes!("grid-3", "reveal-up", events_visible.then(|| "visible"))}>
                        if upcoming.is_empty() {
                            <p class="muted empty-state">{"No upcoming events in this category yet."}</p>
                        }
                        { for upcoming.iter().enumerate().map(|(index, event)| html! {
                            <div
                                ref={event_refs[index].clone()}
                                class={classes!("card-mono", "event-card", "reveal-pop", motion::flag(&event_visible, index).then(|| "visible"))}
                                style={motion::stagger_delay(index, 100)}
                            >
                                <div class="meta">{"📅 "}{ event.date }</div>
                                <h3>{ event.title }</h3>
                                <p class="muted">{ event.description }</p>
                                <div class="meta small">{"⌖ "}{ event.location }</div>
                                <button class="link-underline">{"Register Now"}</button>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section section-secondary">
                <div class="container">
                    <h2 class="section-title">{"Past Events Gallery"}</h2>
                    <div class="grid-3">
                        { for PAST_EVENTS.iter().enumerate().map(|(index, event)| html! {
                            <div
                                ref={past_refs[index].clone()}
                                class={classes!("past-event", "reveal-up", motion::flag(&past_visible, index).then(|| "visible"))}
                                style={motion::stagger_delay(index, 50)}
                            >
                                <div class="image-placeholder">{"Event Image"}</div>
                                <h3>{ event.name }</h3>
                                <div class="meta">{"⌖ "}{ event.location }</div>
                                <div class="meta">{ event.year }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container narrow">
                    <h2 class="section-title">{"Our Journey"}</h2>
                    <div ref={timeline_ref} class={classes!("timeline", "reveal-up", timeline_visible.then(|| "visible"))}>
                        <div class="timeline-line"></div>
                        { for TIMELINE.iter().enumerate().map(|(index, milestone)| html! {
                            <div class={classes!("timeline-item", if index % 2 == 0 { "left" } else { "right" })}>
                                <div class="timeline-dot"></div>
                                <div class="timeline-content">
                                    <div class="timeline-year">{ milestone.year }</div>
                                    <h3>{ milestone.title }</h3>
                                    <p class="muted">{ milestone.description }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>
        </div>
    }
}
