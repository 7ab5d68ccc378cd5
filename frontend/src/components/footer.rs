use chrono::Datelike;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::config;
use crate::content::{NAV_ITEMS, SOCIAL_LINKS};
use crate::Route;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let show_scroll_top = use_state_eq(|| false);

    {
        let show_scroll_top = show_scroll_top.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            show_scroll_top.set(scroll_y > config::SCROLL_TOP_BUTTON_Y);
        });
    }

    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <h3 class="footer-brand">{"IE(I)"}</h3>
                    <p class="footer-muted">
                        {"The Institution of Engineers (India)"}
                        <br />
                        {"Empowering Engineers of Tomorrow"}
                    </p>
                </div>

                <div>
                    <h4 class="footer-heading">{"Quick Links"}</h4>
                    <div class="footer-links">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <Link<Route> to={item.route.clone()} classes="footer-link">{ item.name }</Link<Route>>
                        }) }
                    </div>
                </div>

                <div>
                    <h4 class="footer-heading">{"Connect"}</h4>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a
                                href={social.url}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="social-link"
                                aria-label={social.name}
                            >
                                { social.glyph }
                            </a>
                        }) }
                    </div>
                </div>
            </div>

            <div class="container footer-bottom">
                <p class="footer-muted">
                    { format!("© {} The Institution of Engineers (India). All rights reserved.", year) }
                </p>
            </div>

            <button
                class={classes!("scroll-top", show_scroll_top.then(|| "visible"))}
                aria-label="Scroll to top"
                onclick={Callback::from(|_: MouseEvent| scroll_to_top())}
            >
                {"↑"}
            </button>
        </footer>
    }
}
