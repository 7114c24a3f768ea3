use std::{cell::RefCell, rc::Rc};

use yew::prelude::*;

use crate::{api::fetch_admin_info, config::ADMIN_INFO_CACHE_TTL_MS, models::AdminInfo};

/// Anything that can be asked to (re)load the shared admin info.
pub trait AdminInfoSource {
    /// Start a refresh without waiting for it; `force` bypasses every cache.
    fn refresh_admin_info(&self, force: bool);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminState {
    pub info: Option<Rc<AdminInfo>>,
    pub loading: bool,
    pub error: Option<String>,
}

pub enum AdminAction {
    FetchStarted,
    Loaded(Rc<AdminInfo>),
    /// Previous info stays visible.
    Failed(String),
}

impl Reducible for AdminState {
    type Action = AdminAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AdminAction::FetchStarted => {
                next.loading = true;
                // Each failure remounts the banner, even with identical text.
                next.error = None;
            },
            AdminAction::Loaded(info) => {
                next.info = Some(info);
                next.loading = false;
                next.error = None;
            },
            AdminAction::Failed(message) => {
                next.loading = false;
                next.error = Some(message);
            },
        }
        Rc::new(next)
    }
}

/// Request bookkeeping that must not trigger renders.
#[derive(Debug, Default)]
pub struct FetchBook {
    latest_request: u64,
    in_flight: bool,
    loaded_at_ms: Option<i64>,
}

impl FetchBook {
    /// Decide whether a refresh issues a fetch; returns its request id if so.
    pub fn begin(&mut self, force: bool, now_ms: i64) -> Option<u64> {
        if !force {
            if self.in_flight {
                return None;
            }
            if let Some(loaded_at) = self.loaded_at_ms {
                if now_ms.saturating_sub(loaded_at) < ADMIN_INFO_CACHE_TTL_MS {
                    return None;
                }
            }
        }
        self.latest_request += 1;
        self.in_flight = true;
        Some(self.latest_request)
    }

    /// Record a completed fetch. Returns false when a newer request was
    /// issued meanwhile, in which case the result must be dropped.
    pub fn finish(&mut self, request_id: u64, succeeded: bool, now_ms: i64) -> bool {
        if request_id != self.latest_request {
            return false;
        }
        self.in_flight = false;
        if succeeded {
            self.loaded_at_ms = Some(now_ms);
        }
        true
    }
}

/// Read side of the store: re-renders subscribers whenever the state changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminSnapshot(pub Rc<AdminState>);

impl AdminSnapshot {
    pub fn info(&self) -> Option<&Rc<AdminInfo>> {
        self.0.info.as_ref()
    }
}

/// Write side of the store, handed to pages as their data source.
#[derive(Clone)]
pub struct AdminStore {
    dispatcher: UseReducerDispatcher<AdminState>,
    book: Rc<RefCell<FetchBook>>,
}

impl PartialEq for AdminStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.book, &other.book)
    }
}

impl AdminInfoSource for AdminStore {
    fn refresh_admin_info(&self, force: bool) {
        let Some(request_id) = self.book.borrow_mut().begin(force, js_sys::Date::now() as i64)
        else {
            return;
        };
        self.dispatcher.dispatch(AdminAction::FetchStarted);

        let dispatcher = self.dispatcher.clone();
        let book = self.book.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_admin_info(force).await;
            let current =
                book.borrow_mut()
                    .finish(request_id, result.is_ok(), js_sys::Date::now() as i64);
            if !current {
                return;
            }
            match result {
                Ok(info) => dispatcher.dispatch(AdminAction::Loaded(Rc::new(info))),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch admin info: {}", err).into(),
                    );
                    dispatcher.dispatch(AdminAction::Failed(format!(
                        "Failed to load admin info: {}",
                        err
                    )));
                },
            }
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminStoreProviderProps {
    pub children: Html,
}

#[function_component(AdminStoreProvider)]
pub fn admin_store_provider(props: &AdminStoreProviderProps) -> Html {
    let state = use_reducer(AdminState::default);
    let book = use_mut_ref(FetchBook::default);
    let store = AdminStore {
        dispatcher: state.dispatcher(),
        book,
    };
    let snapshot = AdminSnapshot(Rc::new((*state).clone()));

    html! {
        <ContextProvider<AdminStore> context={store}>
            <ContextProvider<AdminSnapshot> context={snapshot}>
                { props.children.clone() }
            </ContextProvider<AdminSnapshot>>
        </ContextProvider<AdminStore>>
    }
}
