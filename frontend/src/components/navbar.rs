use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::NAV_ITEMS;
use crate::hooks::scroll_direction::use_scroll_direction;
use crate::motion;
use crate::Route;

/// Whether a nav entry should be highlighted for `current_path`. The home
/// entry only matches exactly, every other one also owns its sub-paths.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    current_path == item_path || (item_path != "/" && current_path.starts_with(item_path))
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let header = use_scroll_direction();
    let faded_in = use_state(|| false);
    let menu_open = use_state(|| false);
    let current_path = use_location().map(|location| location.path().to_string()).unwrap_or_default();

    {
        let faded_in = faded_in.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::NAV_FADE_IN_MS, move || faded_in.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            current_path.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let header_class = classes!(
        "site-header",
        faded_in.then(|| "faded-in"),
        header.hidden.then(|| "header-hidden"),
        header.scrolled.then(|| "scrolled"),
    );

    html! {
        <header class={header_class}>
            <nav class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/assets/logo.svg" alt="IE(I) Logo" />
                    <span>{"IE(I)"}</span>
                </Link<Route>>

                <div class="nav-desktop">
                    { for NAV_ITEMS.iter().map(|item| {
                        let active = is_active(&item.route.to_path(), &current_path);
                        html! {
                            <Link<Route> to={item.route.clone()} classes={classes!("nav-link", active.then(|| "active"))}>
                                { item.name }
                            </Link<Route>>
                        }
                    }) }
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </nav>

            <div class={classes!("nav-mobile", menu_open.then(|| "open"))}>
                <ul>
                    { for NAV_ITEMS.iter().enumerate().map(|(index, item)| {
                        let active = is_active(&item.route.to_path(), &current_path);
                        html! {
                            <li
                                class={motion::reveal_class(*menu_open, "nav-mobile-item shown", "nav-mobile-item")}
                                style={motion::stagger_delay(index, 50)}
                            >
                                <Link<Route> to={item.route.clone()} classes={classes!("nav-link", active.then(|| "active"))}>
                                    { item.name }
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_matches_only_the_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/about"));
    }

    #[test]
    fn sections_own_their_sub_paths() {
        assert!(is_active("/events", "/events"));
        assert!(is_active("/events", "/events/2024"));
        assert!(!is_active("/events", "/gallery"));
    }
}
