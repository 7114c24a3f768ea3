use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

use crate::config::APP_NAME;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
}

/// Title and breadcrumb trail of the active page, shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMeta {
    pub title: Option<String>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl PageMeta {
    pub fn document_title(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => format!("{} - {}", title.trim(), APP_NAME),
            _ => APP_NAME.to_string(),
        }
    }
}

impl Reducible for PageMeta {
    type Action = PageMeta;

    fn reduce(self: Rc<Self>, next: Self::Action) -> Rc<Self> {
        if *self == next {
            return self;
        }
        Rc::new(next)
    }
}

pub type PageMetaContext = UseReducerHandle<PageMeta>;

/// What a page may declare about itself while initializing.
pub trait PageInit {
    fn set_title(&mut self, title: &str);
    fn add_breadcrumb(&mut self, label: &str, path: &str);
}

/// Collects page metadata during init, then commits it in one step.
#[derive(Debug, Default)]
pub struct PageInitHelper {
    meta: PageMeta,
}

impl PageInit for PageInitHelper {
    fn set_title(&mut self, title: &str) {
        if let Some(existing) = &self.meta.title {
            web_sys::console::warn_1(
                &format!("Page title already set to {:?}, ignoring {:?}", existing, title).into(),
            );
            return;
        }
        self.meta.title = Some(title.to_string());
    }

    fn add_breadcrumb(&mut self, label: &str, path: &str) {
        self.meta.breadcrumbs.push(Breadcrumb {
            label: label.to_string(),
            path: path.to_string(),
        });
    }
}

impl PageInitHelper {
    pub fn into_meta(self) -> PageMeta {
        self.meta
    }

    /// Publish the collected metadata to the header and the document title.
    pub fn commit(self, context: &PageMetaContext) {
        let meta = self.into_meta();
        set_document_title(&meta.document_title());
        context.dispatch(meta);
    }
}

pub fn set_document_title(title: &str) {
    let Some(doc) = window().and_then(|win| win.document()) else {
        return;
    };
    doc.set_title(title);
}

#[derive(Properties, PartialEq)]
pub struct PageMetaProviderProps {
    pub children: Html,
}

#[function_component(PageMetaProvider)]
pub fn page_meta_provider(props: &PageMetaProviderProps) -> Html {
    let meta = use_reducer(PageMeta::default);
    html! {
        <ContextProvider<PageMetaContext> context={meta}>
            { props.children.clone() }
        </ContextProvider<PageMetaContext>>
    }
}
