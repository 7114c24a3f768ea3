//! Admin console frontend: a Yew single-page app showing users, roles and
//! raw admin state fetched from the console backend.

mod admin_store;
mod api;
mod components;
mod config;
mod models;
mod page;
mod pages;
mod refresh_bus;
mod router;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
