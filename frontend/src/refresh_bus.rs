use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use yew::prelude::*;

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    by_id: BTreeMap<u64, Listener>,
}

/// App-wide "refresh requested" signal.
///
/// Pages register a listener while mounted; the header's refresh button
/// calls [`RefreshBus::request_refresh`].
#[derive(Clone, Default)]
pub struct RefreshBus {
    listeners: Rc<RefCell<Listeners>>,
}

impl PartialEq for RefreshBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.listeners, &other.listeners)
    }
}

impl RefreshBus {
    pub fn register(&self, listener: impl Fn() + 'static) -> RefreshRegistration {
        let mut listeners = self.listeners.borrow_mut();
        listeners.next_id += 1;
        let id = listeners.next_id;
        listeners.by_id.insert(id, Rc::new(listener));
        RefreshRegistration {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Invoke every registered listener, returning how many ran.
    pub fn request_refresh(&self) -> usize {
        // Snapshot first so listeners may register or unregister while running.
        let snapshot: Vec<Listener> = self.listeners.borrow().by_id.values().cloned().collect();
        for listener in &snapshot {
            listener();
        }
        snapshot.len()
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().by_id.len()
    }
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping the registration unregisters the listener"]
pub struct RefreshRegistration {
    id: u64,
    listeners: std::rc::Weak<RefCell<Listeners>>,
}

impl Drop for RefreshRegistration {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().by_id.remove(&self.id);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RefreshBusProviderProps {
    pub children: Html,
}

#[function_component(RefreshBusProvider)]
pub fn refresh_bus_provider(props: &RefreshBusProviderProps) -> Html {
    let bus = use_memo((), |_| RefreshBus::default());
    html! {
        <ContextProvider<RefreshBus> context={(*bus).clone()}>
            { props.children.clone() }
        </ContextProvider<RefreshBus>>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn request_refresh_runs_every_live_listener() {
        let bus = RefreshBus::default();
        let hits = Rc::new(Cell::new(0));
        let _a = {
            let hits = hits.clone();
            bus.register(move || hits.set(hits.get() + 1))
        };
        let _b = {
            let hits = hits.clone();
            bus.register(move || hits.set(hits.get() + 10))
        };

        assert_eq!(bus.request_refresh(), 2);
        assert_eq!(hits.get(), 11);
    }

    #[test]
    fn dropping_registration_unregisters() {
        let bus = RefreshBus::default();
        let hits = Rc::new(Cell::new(0));
        let registration = {
            let hits = hits.clone();
            bus.register(move || hits.set(hits.get() + 1))
        };
        assert_eq!(bus.listener_count(), 1);

        drop(registration);
        assert_eq!(bus.listener_count(), 0);
        assert_eq!(bus.request_refresh(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn listener_may_drop_its_own_registration_mid_dispatch() {
        let bus = RefreshBus::default();
        let slot: Rc<RefCell<Option<RefreshRegistration>>> = Rc::new(RefCell::new(None));
        let registration = {
            let slot = slot.clone();
            bus.register(move || {
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(registration);

        assert_eq!(bus.request_refresh(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn registration_outliving_bus_is_harmless() {
        let registration = {
            let bus = RefreshBus::default();
            bus.register(|| {})
        };
        drop(registration);
    }

    #[test]
    fn clones_share_listeners() {
        let bus = RefreshBus::default();
        let other = bus.clone();
        let _registration = other.register(|| {});
        assert!(bus == other);
        assert_eq!(bus.listener_count(), 1);
        assert!(bus != RefreshBus::default());
    }
}
