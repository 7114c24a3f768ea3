use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    admin_store::{AdminSnapshot, AdminStoreProvider},
    components::{error_banner::ErrorBanner, header::Header},
    page::PageMetaProvider,
    pages,
    refresh_bus::RefreshBusProvider,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Home,
    #[cfg(feature = "mock")]
    #[at("/console/")]
    Home,

    #[cfg(not(feature = "mock"))]
    #[at("/admin")]
    Admin,
    #[cfg(feature = "mock")]
    #[at("/console/admin")]
    Admin,

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/console/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Admin} /> },
        Route::Admin => html! { <pages::admin::AdminPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(StoreErrorBanner)]
fn store_error_banner() -> Html {
    let error = use_context::<AdminSnapshot>().and_then(|snapshot| snapshot.0.error.clone());
    match error {
        Some(message) => html! {
            <div class={classes!("flex", "justify-center", "px-4", "pt-3")}>
                <ErrorBanner message={message} />
            </div>
        },
        None => Html::default(),
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <RefreshBusProvider>
                <PageMetaProvider>
                    <AdminStoreProvider>
                        <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                            <Header />
                            <StoreErrorBanner />
                            <div class="flex-1 pt-[var(--space-sm)]">
                                <Switch<Route> render={switch} />
                            </div>
                        </div>
                    </AdminStoreProvider>
                </PageMetaProvider>
            </RefreshBusProvider>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::app_path;

    #[test]
    fn admin_breadcrumb_path_resolves_to_admin_route() {
        assert_eq!(Route::recognize(&app_path("/admin")), Some(Route::Admin));
    }
}
