use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::lightbox::{use_lightbox_keys, Lightbox};
use crate::gallery::{CategoryFilter, LightboxAction, LightboxState};
use crate::hooks::page_top::use_scroll_to_top;
use crate::hooks::scroll_reveal::use_scroll_reveal_group;
use crate::motion;

const GRID_ID: &str = "gallery-grid";

fn scroll_to_grid() {
    let Some(grid) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(GRID_ID))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    grid.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    use_scroll_to_top();
    let state = use_reducer_eq(LightboxState::default);
    let filtered = state.filtered();
    let (image_refs, image_visible) = use_scroll_reveal_group(filtered.len(), state.category);

    let on_action = {
        let state = state.clone();
        Callback::from(move |action: LightboxAction| state.dispatch(action))
    };

    use_lightbox_keys(state.listens_for_keys(), on_action.clone());

    let explore = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_grid();
    });

    let lightbox = state
        .is_open
        .then(|| state.current_image())
        .flatten()
        .map(|image| {
            html! {
                <Lightbox
                    image={image.clone()}
                    index={state.current_index()}
                    total={filtered.len()}
                    on_action={on_action.clone()}
                />
            }
        });

    html! {
        <div class="gallery-page">
            <section class="gallery-hero section-dark">
                <div class="container">
                    <p class="kicker">{"A Visual Archive of Engineering Excellence"}</p>
                    <h1>
                        <span class="gradient-text">{"IE(I) Gallery"}</span>
                        {" Collection"}
                    </h1>
                    <p class="hero-subtle">
                        {"Explore our visual archive showcasing workshops, seminars, conventions, industrial visits, and student activities that define engineering excellence."}
                    </p>
                    <a href={format!("#{}", GRID_ID)} class="pill-button" role="button" onclick={explore}>
                        {"Explore Gallery"}
                    </a>
                    <div class="hero-note">{"↗ New events and activities added regularly"}</div>
                </div>
            </section>

            <section class="filter-bar">
                <div class="container filter-buttons">
                    { for CategoryFilter::choices().map(|choice| {
                        let onclick = {
                            let on_action = on_action.clone();
                            Callback::from(move |_: MouseEvent| on_action.emit(LightboxAction::SelectCategory(choice)))
                        };
                        html! {
                            <button class={classes!("filter-button", (state.category == choice).then(|| "active"))} {onclick}>
                                { choice.label() }
                            </button>
                        }
                    }) }
                </div>
            </section>

            <section id={GRID_ID} class="section">
                <div class="container grid-3">
                    { for filtered.iter().enumerate().map(|(index, image)| {
                        let onclick = {
                            let on_action = on_action.clone();
                            let id = image.id;
                            Callback::from(move |_: MouseEvent| on_action.emit(LightboxAction::Open(id)))
                        };
                        html! {
                            <div
                                ref={image_refs[index].clone()}
                                class={classes!("gallery-item", "reveal-up", motion::flag(&image_visible, index).then(|| "visible"))}
                                style={motion::stagger_delay(index, 50)}
                                {onclick}
                            >
                                <div class="gallery-thumb">
                                    <img src={image.image} alt={image.name} loading="lazy" />
                                </div>
                                <h3>{ image.name }</h3>
                                <div class="meta">
                                    <span>{ image.location }</span>
                                    <span>{"•"}</span>
                                    <span>{ image.year }</span>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </section>

            { for lightbox }
        </div>
    }
}
