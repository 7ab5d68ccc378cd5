use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::scroll_reveal::{use_scroll_reveal_with, RevealOptions};
use crate::motion::{self, RevealChar};
use crate::services::branding::{install_branding_styles, BrandingPruner};
use crate::services::script_loader;
use crate::Route;

const TEXT_REVEAL_STEP_MS: u32 = 50;

#[derive(Clone, PartialEq)]
pub struct HeroCta {
    pub label: &'static str,
    pub route: Route,
}

#[derive(Properties, PartialEq)]
pub struct AsciiHeroProps {
    /// Animation project rendered behind the copy on wide screens.
    pub project_id: &'static str,
    pub title: &'static str,
    /// Kept on one line after the title, e.g. "(INDIA)".
    #[prop_or_default]
    pub title_tail: Option<&'static str>,
    pub tagline: &'static str,
    #[prop_or("∞")]
    pub marker: &'static str,
    #[prop_or("IE(I).PROTOCOL")]
    pub notation: &'static str,
    #[prop_or_default]
    pub ctas: Vec<HeroCta>,
}

/// One span per character, each with its own animation delay.
pub fn reveal_spans(chars: Vec<RevealChar>) -> Html {
    chars
        .into_iter()
        .map(|ch| {
            html! {
                <span
                    class="animate-text-reveal"
                    style={format!("animation-delay: {}ms; animation-fill-mode: both;", ch.delay_ms)}
                >
                    { ch.glyph.to_string() }
                </span>
            }
        })
        .collect()
}

/// Full-height hero with a lazily mounted animated background. The runtime
/// script is only requested once the container comes near the viewport.
#[function_component(AsciiHero)]
pub fn ascii_hero(props: &AsciiHeroProps) -> Html {
    let (container, near) = use_scroll_reveal_with(RevealOptions::lazy_mount());
    let loading = use_state_eq(|| true);
    let project_id = props.project_id;

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |near| {
                let mounted = Rc::new(Cell::new(true));
                let pruner: Rc<RefCell<Option<BrandingPruner>>> = Rc::new(RefCell::new(None));

                if *near {
                    install_branding_styles(project_id);
                    let load = script_loader::global().load();
                    let mounted = mounted.clone();
                    let pruner = pruner.clone();
                    spawn_local(async move {
                        let outcome = load.await;
                        if !mounted.get() {
                            return;
                        }
                        loading.set(false);
                        match outcome {
                            Ok(()) => {
                                let scheduled = BrandingPruner::schedule(project_id);
                                debug!("{} follow-up prunes pending for {}", scheduled.pending(), project_id);
                                *pruner.borrow_mut() = Some(scheduled);
                            }
                            Err(err) => error!("Failed to load animation runtime: {}", err),
                        }
                    });
                }

                move || {
                    mounted.set(false);
                    if let Some(scheduled) = pruner.borrow_mut().take() {
                        scheduled.cancel();
                    }
                }
            },
            near,
        );
    }

    let title = motion::text_reveal(props.title, 0, TEXT_REVEAL_STEP_MS);
    let tail = props
        .title_tail
        .map(|tail| motion::text_reveal(tail, title.len(), TEXT_REVEAL_STEP_MS));

    html! {
        <section class="ascii-hero">
            <div ref={container} class="ascii-hero-canvas">
                if near {
                    <div data-us-project={project_id} class="ascii-hero-project"></div>
                }
                if near && *loading {
                    <div class="ascii-hero-spinner"><div class="spinner"></div></div>
                }
            </div>

            <div class="ascii-hero-stars stars-bg"></div>

            <div class="corner corner-tl"></div>
            <div class="corner corner-tr"></div>
            <div class="corner corner-bl"></div>
            <div class="corner corner-br"></div>

            <div class="ascii-hero-content container">
                <div class="ascii-hero-copy">
                    <div class="hero-rule">
                        <div class="hero-rule-short"></div>
                        <span>{ props.marker }</span>
                        <div class="hero-rule-long"></div>
                    </div>

                    <h1 class="ascii-hero-title">
                        { reveal_spans(title) }
                        if let Some(tail) = tail {
                            <span class="nowrap">{ reveal_spans(tail) }</span>
                        }
                    </h1>

                    <div class="hero-dots">
                        { for (0..40).map(|_| html! { <div class="hero-dot"></div> }) }
                    </div>

                    <p class="ascii-hero-tagline">{ props.tagline }</p>

                    <div class="ascii-hero-actions">
                        { for props.ctas.iter().map(|cta| html! {
                            <Link<Route> to={cta.route.clone()} classes="hero-button">{ cta.label }</Link<Route>>
                        }) }
                    </div>

                    <div class="hero-rule hero-notation">
                        <span>{"∞"}</span>
                        <div class="hero-rule-long"></div>
                        <span>{ props.notation }</span>
                    </div>
                </div>
            </div>

            <div class="ascii-hero-status">
                <span>{"SYSTEM.ACTIVE"}</span>
                <span>{"V1.0.0"}</span>
                <span>{ if near && *loading { "◐ LOADING" } else { "◐ RENDERING" } }</span>
            </div>
        </section>
    }
}
