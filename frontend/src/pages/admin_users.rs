use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{admin_store::AdminSnapshot, models::AdminUser, utils::matches_quick_search};

fn filter_users<'a>(users: &'a [AdminUser], query: &str) -> Vec<&'a AdminUser> {
    users
        .iter()
        .filter(|user| {
            matches_quick_search(&user.internal_identifier, query)
                || matches_quick_search(&user.login_provider, query)
                || user
                    .role_names()
                    .iter()
                    .any(|role| matches_quick_search(role, query))
        })
        .collect()
}

/// Users known to the console and the roles granted to them.
#[function_component(AdminUsers)]
pub fn admin_users() -> Html {
    let snapshot = use_context::<AdminSnapshot>().unwrap_or_default();
    let quick_search = use_state(String::new);

    let users = snapshot.info().map(|info| info.users()).unwrap_or_default();
    let visible = filter_users(&users, &quick_search);

    let on_search_input = {
        let quick_search = quick_search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                quick_search.set(target.value());
            }
        })
    };

    html! {
        <div class={classes!("admin-users", "space-y-3")}>
            <input
                type="search"
                class={classes!("form-input", "w-64")}
                placeholder="Enter search term..."
                value={(*quick_search).clone()}
                oninput={on_search_input}
            />
            <table class={classes!("w-full", "text-sm")}>
                <thead>
                    <tr>
                        <th class="text-left">{ "Identifier" }</th>
                        <th class="text-left">{ "Login Provider" }</th>
                        <th class="text-left">{ "Roles" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for visible.iter().map(|user| html! {
                        <tr key={user.internal_identifier.clone()}>
                            <td>{ user.internal_identifier.clone() }</td>
                            <td>{ user.login_provider.clone() }</td>
                            <td>{ user.role_names().join(", ") }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
            if visible.is_empty() {
                <p class="text-[var(--muted)]">{ "No users" }</p>
            }
        </div>
    }
}
