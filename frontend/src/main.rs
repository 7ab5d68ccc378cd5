use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};

mod config;
mod content;
mod forms;
mod gallery;
mod motion;
mod hooks {
    pub mod mounted;
    pub mod page_top;
    pub mod scroll_direction;
    pub mod scroll_reveal;
}
mod services {
    pub mod branding;
    pub mod script_loader;
}
mod components {
    pub mod ascii_hero;
    pub mod footer;
    pub mod lightbox;
    pub mod navbar;
    pub mod toast;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod events;
    pub mod gallery;
    pub mod home;
    pub mod membership;
    pub mod not_found;
    pub mod resources;
}

use components::{footer::Footer, navbar::Navbar, toast::ToastProvider};
use pages::{
    about::About,
    contact::Contact,
    events::Events,
    gallery::Gallery,
    home::Home,
    membership::Membership,
    not_found::NotFound,
    resources::Resources,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/membership")]
    Membership,
    #[at("/events")]
    Events,
    #[at("/resources")]
    Resources,
    #[at("/gallery")]
    Gallery,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Membership => {
            info!("Rendering Membership page");
            html! { <Membership /> }
        },
        Route::Events => {
            info!("Rendering Events page");
            html! { <Events /> }
        },
        Route::Resources => {
            info!("Rendering Resources page");
            html! { <Resources /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Gallery /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            warn!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Navbar />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging; a second logger is simply not installed
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_its_own_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Gallery.to_path(), "/gallery");
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }

    #[test]
    fn nav_covers_every_page_once() {
        let paths: Vec<String> = content::NAV_ITEMS.iter().map(|item| item.route.to_path()).collect();
        assert_eq!(paths, ["/", "/about", "/membership", "/events", "/resources", "/gallery", "/contact"]);
    }
}
