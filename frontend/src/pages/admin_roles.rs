use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{admin_store::AdminSnapshot, models::AdminRole, utils::matches_quick_search};

fn filter_roles<'a>(roles: &'a [AdminRole], query: &str) -> Vec<&'a AdminRole> {
    roles
        .iter()
        .filter(|role| {
            matches_quick_search(&role.name, query)
                || role
                    .permissions
                    .iter()
                    .any(|permission| matches_quick_search(&permission.resource_name, query))
        })
        .collect()
}

#[function_component(AdminRoles)]
pub fn admin_roles() -> Html {
    let snapshot = use_context::<AdminSnapshot>().unwrap_or_default();
    let quick_search = use_state(String::new);

    let roles = snapshot.info().map(|info| info.roles()).unwrap_or_default();
    let visible = filter_roles(&roles, &quick_search);

    let on_search_input = {
        let quick_search = quick_search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                quick_search.set(target.value());
            }
        })
    };

    html! {
        <div class={classes!("admin-roles", "space-y-3")}>
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
                        <th class="text-left">{ "Role" }</th>
                        <th class="text-left">{ "Permissions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for visible.iter().map(|role| html! {
                        <tr key={role.name.clone()}>
                            <td class="font-semibold">{ role.name.clone() }</td>
                            <td>
                                <ul>
                                    { for role.permissions.iter().map(|permission| html! {
                                        <li>{ permission.summary() }</li>
                                    }) }
                                </ul>
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
            if visible.is_empty() {
                <p class="text-[var(--muted)]">{ "No roles" }</p>
            }
        </div>
    }
}
