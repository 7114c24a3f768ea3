use std::rc::Rc;

use yew::prelude::*;

#[cfg(feature = "role-bindings")]
use crate::pages::admin_role_bindings::AdminRoleBindings;
use crate::{
    admin_store::{AdminInfoSource, AdminSnapshot, AdminStore},
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    config::ROLE_BINDINGS_TAB_ENABLED,
    models::AdminInfo,
    page::{PageInit, PageInitHelper, PageMetaContext},
    pages::{admin_roles::AdminRoles, admin_users::AdminUsers},
    refresh_bus::{RefreshBus, RefreshRegistration},
    utils::to_json,
};

const PAGE_TITLE: &str = "Admin";
const PAGE_PATH: &str = "/admin";
const DEBUG_INDENT: usize = 4;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdminTab {
    Users,
    Roles,
    Bindings,
    Debug,
}

impl AdminTab {
    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Users => "Users",
            AdminTab::Roles => "Roles",
            AdminTab::Bindings => "Bindings",
            AdminTab::Debug => "Debug",
        }
    }

    fn key(self) -> &'static str {
        match self {
            AdminTab::Users => "users",
            AdminTab::Roles => "roles",
            AdminTab::Bindings => "bindings",
            AdminTab::Debug => "debug",
        }
    }

    /// Tabs shown on the page, in display order.
    pub fn visible() -> Vec<AdminTab> {
        let mut tabs = vec![AdminTab::Users, AdminTab::Roles];
        if ROLE_BINDINGS_TAB_ENABLED {
            tabs.push(AdminTab::Bindings);
        }
        tabs.push(AdminTab::Debug);
        tabs
    }
}

/// Which tabs exist and which one is shown. Pure view state.
#[derive(Clone, PartialEq, Debug)]
pub struct TabStrip {
    tabs: Vec<AdminTab>,
    active: AdminTab,
}

impl TabStrip {
    pub fn new(initial: AdminTab) -> Self {
        let tabs = AdminTab::visible();
        let active = if tabs.contains(&initial) { initial } else { tabs[0] };
        Self {
            tabs,
            active,
        }
    }

    pub fn tabs(&self) -> &[AdminTab] {
        &self.tabs
    }

    pub fn active(&self) -> AdminTab {
        self.active
    }

    /// Returns whether the active tab changed.
    pub fn select(&mut self, tab: AdminTab) -> bool {
        if tab == self.active || !self.tabs.contains(&tab) {
            return false;
        }
        self.active = tab;
        true
    }
}

pub fn refresh_data(source: &impl AdminInfoSource, force: bool) {
    source.refresh_admin_info(force);
}

/// Declare the page, load its data, and follow app-wide refresh requests
/// until the returned registration is dropped.
pub fn init_admin_page<P, S>(page: &mut P, source: &S, bus: &RefreshBus) -> RefreshRegistration
where
    P: PageInit,
    S: AdminInfoSource + Clone + 'static,
{
    page.set_title(PAGE_TITLE);
    page.add_breadcrumb(PAGE_TITLE, PAGE_PATH);

    refresh_data(source, false);
    let source = source.clone();
    bus.register(move || refresh_data(&source, true))
}

pub fn debug_dump(info: &AdminInfo) -> String {
    to_json(info.raw(), DEBUG_INDENT)
        .unwrap_or_else(|err| format!("Failed to serialize admin info: {}", err))
}

#[derive(Properties, PartialEq)]
pub struct AdminTabsProps {
    pub info: Rc<AdminInfo>,
    #[prop_or(AdminTab::Users)]
    pub initial_tab: AdminTab,
}

#[function_component(AdminTabs)]
pub fn admin_tabs(props: &AdminTabsProps) -> Html {
    let strip = use_state(|| TabStrip::new(props.initial_tab));

    let tab_button = |tab: AdminTab| {
        let onclick = {
            let strip = strip.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*strip).clone();
                if next.select(tab) {
                    strip.set(next);
                }
            })
        };
        let selected = strip.active() == tab;
        let class = if selected {
            classes!("btn-fluent-primary")
        } else {
            classes!("btn-fluent-secondary")
        };
        html! {
            <button
                key={tab.key()}
                type="button"
                role="tab"
                id={format!("admin-tab-{}", tab.key())}
                aria-selected={selected.to_string()}
                class={class}
                onclick={onclick}
            >
                { tab.label() }
            </button>
        }
    };

    let content = match strip.active() {
        AdminTab::Users => html! { <AdminUsers /> },
        AdminTab::Roles => html! { <AdminRoles /> },
        #[cfg(feature = "role-bindings")]
        AdminTab::Bindings => html! { <AdminRoleBindings /> },
        #[cfg(not(feature = "role-bindings"))]
        AdminTab::Bindings => Html::default(),
        AdminTab::Debug => html! {
            <code><pre class={classes!("text-xs", "overflow-auto")}>{ debug_dump(&props.info) }</pre></code>
        },
    };

    html! {
        <div class={classes!("card", "rounded-2xl", "p-4", "overflow-visible")}>
            <div role="tablist" class={classes!("flex", "flex-wrap", "gap-2", "mb-4")}>
                { for strip.tabs().iter().copied().map(tab_button) }
            </div>
            <div role="tabpanel" aria-labelledby={format!("admin-tab-{}", strip.active().key())}>
                { content }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminPageViewProps {
    pub info: Option<Rc<AdminInfo>>,
}

/// Loading placeholder until admin info exists, the tabs afterwards.
#[function_component(AdminPageView)]
pub fn admin_page_view(props: &AdminPageViewProps) -> Html {
    let Some(info) = props.info.clone() else {
        return html! { <LoadingSpinner size={SpinnerSize::Large} /> };
    };

    html! {
        <div style="margin: 0 1rem;">
            <AdminTabs info={info} />
        </div>
    }
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let store = use_context::<AdminStore>();
    let bus = use_context::<RefreshBus>();
    let page_meta = use_context::<PageMetaContext>();
    let snapshot = use_context::<AdminSnapshot>().unwrap_or_default();

    use_effect_with((), move |_| {
        let mut helper = PageInitHelper::default();
        let registration = match (store.as_ref(), bus.as_ref()) {
            (Some(store), Some(bus)) => Some(init_admin_page(&mut helper, store, bus)),
            _ => {
                web_sys::console::error_1(&"Admin page mounted without its data store".into());
                None
            },
        };
        if let Some(page_meta) = page_meta.as_ref() {
            helper.commit(page_meta);
        }
        move || drop(registration)
    });

    html! { <AdminPageView info={snapshot.info().cloned()} /> }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;
    use yew::ServerRenderer;

    use super::*;

    #[derive(Clone, Default)]
    struct RecordingSource {
        calls: Rc<RefCell<Vec<bool>>>,
    }

    impl AdminInfoSource for RecordingSource {
        fn refresh_admin_info(&self, force: bool) {
            self.calls.borrow_mut().push(force);
        }
    }

    impl RecordingSource {
        fn calls(&self) -> Vec<bool> {
            self.calls.borrow().clone()
        }
    }

    #[derive(Default)]
    struct RecordingPage {
        titles: Vec<String>,
        breadcrumbs: Vec<(String, String)>,
    }

    impl PageInit for RecordingPage {
        fn set_title(&mut self, title: &str) {
            self.titles.push(title.to_string());
        }

        fn add_breadcrumb(&mut self, label: &str, path: &str) {
            self.breadcrumbs.push((label.to_string(), path.to_string()));
        }
    }

    fn sample_info() -> AdminInfo {
        AdminInfo::new(json!({ "users": [], "roles": [] }))
    }

    async fn render_view(raw: Option<serde_json::Value>) -> String {
        ServerRenderer::<AdminPageView>::with_props(move || AdminPageViewProps {
            info: raw.map(|raw| Rc::new(AdminInfo::new(raw))),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[test]
    fn init_sets_title_and_breadcrumb_once() {
        let mut page = RecordingPage::default();
        let source = RecordingSource::default();
        let bus = RefreshBus::default();

        let _registration = init_admin_page(&mut page, &source, &bus);

        assert_eq!(page.titles, vec!["Admin".to_string()]);
        assert_eq!(page.breadcrumbs, vec![("Admin".to_string(), "/admin".to_string())]);
    }

    #[test]
    fn init_refreshes_once_unforced_and_bus_forces_refresh() {
        let mut page = RecordingPage::default();
        let source = RecordingSource::default();
        let bus = RefreshBus::default();

        let _registration = init_admin_page(&mut page, &source, &bus);
        assert_eq!(source.calls(), vec![false]);

        assert_eq!(bus.request_refresh(), 1);
        assert_eq!(source.calls(), vec![false, true]);
    }

    #[test]
    fn dropped_registration_stops_following_refreshes() {
        let mut page = RecordingPage::default();
        let source = RecordingSource::default();
        let bus = RefreshBus::default();

        let registration = init_admin_page(&mut page, &source, &bus);
        drop(registration);

        assert_eq!(bus.request_refresh(), 0);
        assert_eq!(source.calls(), vec![false]);
    }

    #[test]
    fn tab_strip_cycles_through_visible_tabs() {
        let mut strip = TabStrip::new(AdminTab::Users);
        assert!(strip.select(AdminTab::Roles));
        assert_eq!(strip.active(), AdminTab::Roles);
        assert!(strip.select(AdminTab::Debug));
        assert_eq!(strip.active(), AdminTab::Debug);
        assert!(strip.select(AdminTab::Users));
        assert_eq!(strip.active(), AdminTab::Users);
    }

    #[test]
    fn selecting_current_or_hidden_tab_is_a_no_op() {
        let mut strip = TabStrip::new(AdminTab::Users);
        assert!(!strip.select(AdminTab::Users));
        if !ROLE_BINDINGS_TAB_ENABLED {
            assert!(!strip.select(AdminTab::Bindings));
            assert_eq!(TabStrip::new(AdminTab::Bindings).active(), AdminTab::Users);
        }
    }

    #[test]
    fn visible_tabs_keep_debug_last() {
        let tabs = AdminTab::visible();
        assert_eq!(&tabs[..2], &[AdminTab::Users, AdminTab::Roles]);
        assert_eq!(tabs.last(), Some(&AdminTab::Debug));
        assert_eq!(tabs.contains(&AdminTab::Bindings), ROLE_BINDINGS_TAB_ENABLED);
    }

    #[test]
    fn debug_dump_uses_four_space_indent() {
        assert_eq!(
            debug_dump(&sample_info()),
            "{\n    \"users\": [],\n    \"roles\": []\n}"
        );
        assert_eq!(
            debug_dump(&sample_info()),
            to_json(sample_info().raw(), 4).expect("serialize")
        );
    }

    #[tokio::test]
    async fn absent_info_renders_only_placeholder() {
        let html = render_view(None).await;

        assert!(html.contains("loading-spinner"));
        assert!(!html.contains("role=\"tablist\""));
        assert!(!html.contains("role=\"tab\""));
    }

    #[cfg(not(feature = "role-bindings"))]
    #[tokio::test]
    async fn loaded_info_renders_users_roles_debug_tabs_in_order() {
        let html = render_view(Some(json!({ "users": [], "roles": [] }))).await;

        assert!(!html.contains("loading-spinner"));
        assert_eq!(html.matches("role=\"tab\"").count(), 3);
        let users = html.find("Users</button>").expect("users tab");
        let roles = html.find("Roles</button>").expect("roles tab");
        let debug = html.find("Debug</button>").expect("debug tab");
        assert!(users < roles && roles < debug);
        assert!(!html.contains("Bindings</button>"));
    }

    #[tokio::test]
    async fn debug_tab_shows_serialized_info_in_code_block() {
        let html = ServerRenderer::<AdminTabs>::with_props(|| AdminTabsProps {
            info: Rc::new(AdminInfo::new(json!({ "users": [], "roles": [] }))),
            initial_tab: AdminTab::Debug,
        })
        .hydratable(false)
        .render()
        .await;

        let pre_start = html.find("<code><pre").expect("code block");
        let body_start = pre_start + html[pre_start..].find('>').expect("pre open tag end") + 1;
        let body_start = body_start + html[body_start..].find('>').expect("pre tag end") + 1;
        let body_end = body_start + html[body_start..].find("</pre>").expect("pre close tag");
        assert_eq!(
            &html[body_start..body_end],
            "{\n    \"users\": [],\n    \"roles\": []\n}"
        );
        assert!(!html.contains("admin-users"));
    }

    #[tokio::test]
    async fn users_tab_is_shown_first() {
        let html = render_view(Some(json!({ "users": [], "roles": [] }))).await;

        assert!(html.contains("admin-users"));
        assert!(!html.contains("<pre"));
    }
}
