use yew::prelude::*;

use crate::{admin_store::AdminSnapshot, models::Subject};

fn subject_label(subject: &Subject) -> String {
    if subject.provider_name.is_empty() {
        format!("{} {}", subject.kind, subject.name)
    } else {
        format!("{} {} ({})", subject.kind, subject.name, subject.provider_name)
    }
}

/// Read-only list of role bindings. Only mounted with the `role-bindings` feature.
#[function_component(AdminRoleBindings)]
pub fn admin_role_bindings() -> Html {
    let snapshot = use_context::<AdminSnapshot>().unwrap_or_default();
    let bindings = snapshot
        .info()
        .map(|info| info.role_bindings())
        .unwrap_or_default();

    html! {
        <table class={classes!("admin-role-bindings", "w-full", "text-sm")}>
            <thead>
                <tr>
                    <th class="text-left">{ "Binding" }</th>
                    <th class="text-left">{ "Role" }</th>
                    <th class="text-left">{ "Subjects" }</th>
                </tr>
            </thead>
            <tbody>
                { for bindings.iter().map(|binding| html! {
                    <tr key={binding.ephemeral_id.to_string()}>
                        <td>{ binding.ephemeral_id.to_string() }</td>
                        <td>{ binding.role_name.clone() }</td>
                        <td>
                            { binding.subjects.iter().map(subject_label).collect::<Vec<_>>().join(", ") }
                        </td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_label_includes_provider_when_known() {
        let subject = Subject {
            kind: "group".to_string(),
            name: "engineering".to_string(),
            provider_name: "google".to_string(),
        };
        assert_eq!(subject_label(&subject), "group engineering (google)");

        let bare = Subject {
            provider_name: String::new(),
            ..subject
        };
        assert_eq!(subject_label(&bare), "group engineering");
    }
}
