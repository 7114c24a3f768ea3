use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    admin_store::AdminSnapshot,
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    config::{app_path, APP_NAME},
    page::{Breadcrumb, PageMetaContext},
    refresh_bus::RefreshBus,
    router::Route,
};

fn render_breadcrumb(crumb: &Breadcrumb, is_last: bool) -> Html {
    let label = html! { <span>{ crumb.label.clone() }</span> };
    let item = match Route::recognize(&app_path(&crumb.path)) {
        Some(route) if !is_last => html! {
            <Link<Route> to={route} classes={classes!("hover:text-[var(--primary)]")}>
                { label }
            </Link<Route>>
        },
        _ => label,
    };

    html! {
        <li class={classes!("inline-flex", "items-center", "gap-2")}
            aria-current={if is_last { Some("page") } else { None }}>
            { item }
            if !is_last {
                <span class="text-[var(--muted)]" aria-hidden="true">{ "/" }</span>
            }
        </li>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let page_meta = use_context::<PageMetaContext>();
    let bus = use_context::<RefreshBus>();
    let loading = use_context::<AdminSnapshot>()
        .map(|snapshot| snapshot.0.loading)
        .unwrap_or(false);

    let on_refresh = {
        let bus = bus.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(bus) = bus.as_ref() {
                bus.request_refresh();
            }
        })
    };

    let breadcrumbs = page_meta
        .as_ref()
        .map(|meta| meta.breadcrumbs.clone())
        .unwrap_or_default();
    let last = breadcrumbs.len().saturating_sub(1);

    html! {
        <header class={classes!(
            "flex", "items-center", "justify-between", "gap-4",
            "px-4", "py-3", "border-b", "border-[var(--border)]"
        )}>
            <div class={classes!("flex", "items-center", "gap-4")}>
                <Link<Route> to={Route::Admin} classes={classes!("font-semibold", "text-lg")}>
                    { APP_NAME }
                </Link<Route>>
                <nav aria-label="Breadcrumb">
                    <ol class={classes!("flex", "items-center", "gap-2", "text-sm")}>
                        { for breadcrumbs.iter().enumerate().map(|(idx, crumb)| render_breadcrumb(crumb, idx == last)) }
                    </ol>
                </nav>
            </div>
            <button
                type="button"
                class={classes!("btn-fluent-secondary", "inline-flex", "items-center", "gap-2")}
                onclick={on_refresh}
                disabled={bus.is_none()}
            >
                if loading {
                    <LoadingSpinner size={SpinnerSize::Small} inline={true} />
                }
                { "Refresh" }
            </button>
        </header>
    }
}
