use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page section-dark">
            <div class="container">
                <h1>{"404"}</h1>
                <p class="hero-subtle">{"This page does not exist."}</p>
                <Link<Route> to={Route::Home} classes="hero-button">{"BACK HOME"}</Link<Route>>
            </div>
        </div>
    }
}
