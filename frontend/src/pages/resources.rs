use yew::prelude::*;

use crate::components::ascii_hero::{AsciiHero, HeroCta};
use crate::config;
use crate::content::{DOWNLOADS, EXTERNAL_LINKS, PROJECT_IDEAS, RESOURCE_CATEGORIES};
use crate::hooks::page_top::use_scroll_to_top;
use crate::hooks::scroll_reveal::{use_scroll_reveal, use_scroll_reveal_multiple};
use crate::motion;
use crate::Route;

#[function_component(Resources)]
pub fn resources() -> Html {
    use_scroll_to_top();
    let (categories_ref, categories_visible) = use_scroll_reveal();
    let (category_refs, category_visible) = use_scroll_reveal_multiple(RESOURCE_CATEGORIES.len());
    let (downloads_ref, downloads_visible) = use_scroll_reveal();
    let (link_refs, link_visible) = use_scroll_reveal_multiple(EXTERNAL_LINKS.len());
    let (project_refs, project_visible) = use_scroll_reveal_multiple(PROJECT_IDEAS.len());

    html! {
        <div class="resources-page">
            <AsciiHero
                project_id={config::RESOURCES_HERO_PROJECT}
                title="RESOURCE HUB"
                tagline="Study materials, examination papers, journals and project ideas, collected for engineers at every stage."
                marker="001"
                notation="IE(I).ARCHIVE"
                ctas={vec![HeroCta { label: "BROWSE EVENTS", route: Route::Events }]}
            />

            <section class="section">
                <div ref={categories_ref} class={classes!("container", "grid-3", "reveal-up", categories_visible.then(|| "visible"))}>
                    { for RESOURCE_CATEGORIES.iter().enumerate().map(|(index, category)| html! {
                        <div
                            ref={category_refs[index].clone()}
                            class={classes!("card-mono", "reveal-pop", motion::flag(&category_visible, index).then(|| "visible"))}
                            style={motion::stagger_delay(index, 100)}
                        >
                            <div class="card-icon">{ category.icon }</div>
                            <h3>{ category.title }</h3>
                            <p class="muted">{ category.description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section section-secondary">
                <div class="container narrow">
                    <h2 class="section-title">{"Downloadable Resources"}</h2>
                    <div ref={downloads_ref} class={classes!("download-list", "reveal-up", downloads_visible.then(|| "visible"))}>
                        { for DOWNLOADS.iter().enumerate().map(|(index, download)| html! {
                            <div class="download-row" style={motion::stagger_delay(index, 50)}>
                                <div>
                                    <h3>{ download.title }</h3>
                                    <p class="muted small">{ format!("{} • {}", download.kind, download.size) }</p>
                                </div>
                                <button class="link-underline">{"⤓ Download"}</button>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2 class="section-title">{"External Learning Resources"}</h2>
                    <div class="grid-3">
                        { for EXTERNAL_LINKS.iter().enumerate().map(|(index, link)| html! {
                            <a
                                ref={link_refs[index].clone()}
                                href={link.url}
                                target="_blank"
                                rel="noopener noreferrer"
                                class={classes!("card-mono", "card-link", "reveal-up", motion::flag(&link_visible, index).then(|| "visible"))}
                                style={motion::stagger_delay(index, 100)}
                            >
                                <div class="card-icon">{"↗"}</div>
                                <h3>{ link.title }</h3>
                                <p class="muted">{ link.description }</p>
                            </a>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section section-secondary">
                <div class="container">
                    <h2 class="section-title">{"Project Ideas"}</h2>
                    <div class="grid-3">
                        { for PROJECT_IDEAS.iter().enumerate().map(|(index, (title, description))| html! {
                            <div
                                ref={project_refs[index].clone()}
                                class={classes!("project-idea", "reveal-up", motion::flag(&project_visible, index).then(|| "visible"))}
                                style={motion::stagger_delay(index, 100)}
                            >
                                <span class="objective-number">{ format!("{:02}", index + 1) }</span>
                                <h3>{ *title }</h3>
                                <p class="muted">{ *description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>
        </div>
    }
}
