use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("mx-4", "py-12")}>
            <h2>{"404 - Page not found"}</h2>
            <p>
                {"Nothing lives at this address. "}
                <Link<Route> to={Route::Admin}>{"Back to Admin"}</Link<Route>>
            </p>
        </main>
    }
}
