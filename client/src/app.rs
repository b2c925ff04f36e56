use chrono::Datelike;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use std::cell::RefCell;

use catalog_shared::{Catalog, FilterKey, NavEffect, Navigation};

use crate::config::{CONTRIBUTE_TRIGGER_SELECTOR, ClientConfig};
use crate::dom;
use crate::grid::{CardGrid, FilterTabs, ResultStat, SearchBar};
use crate::loader;
use crate::modals::{ContributeModal, LevelModal};
use crate::placeholder::ComingSoonPage;

struct KeydownBinding {
    window: web_sys::Window,
    _handler: Closure<dyn Fn(web_sys::KeyboardEvent)>,
}

struct TriggerBinding {
    document: web_sys::Document,
    _handler: Closure<dyn Fn(web_sys::MouseEvent)>,
}

thread_local! {
    static KEYDOWN_BINDING: RefCell<Option<KeydownBinding>> = const { RefCell::new(None) };
    static TRIGGER_BINDING: RefCell<Option<TriggerBinding>> = const { RefCell::new(None) };
}

/// Newtype wrappers so each signal gets its own Leptos context slot.
#[derive(Clone, Copy)]
pub(crate) struct CatalogState(pub RwSignal<Catalog>);
#[derive(Clone, Copy)]
pub(crate) struct CatalogLoaded(pub RwSignal<bool>);
#[derive(Clone, Copy)]
pub(crate) struct ActiveFilter(pub RwSignal<FilterKey>);
#[derive(Clone, Copy)]
pub(crate) struct SearchQuery(pub RwSignal<String>);
#[derive(Clone, Copy)]
pub(crate) struct NavState(pub RwSignal<Navigation>);

/// Resolve a clicked card by department name and route it.
pub(crate) fn activate_department(nav: RwSignal<Navigation>, catalog: RwSignal<Catalog>, name: &str) {
    let Some(department) = catalog.with_untracked(|c| c.find(name).cloned()) else {
        return;
    };
    let effect = nav
        .try_update(|n| n.activate(&department))
        .unwrap_or(NavEffect::None);
    dom::apply_nav_effect(effect);
}

pub(crate) fn go_back(nav: RwSignal<Navigation>) {
    let effect = nav.try_update(Navigation::back).unwrap_or(NavEffect::None);
    dom::apply_nav_effect(effect);
}

/// Root component. Owns all app state and provides it via context.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let catalog: RwSignal<Catalog> = RwSignal::new(Catalog::empty());
    let loaded: RwSignal<bool> = RwSignal::new(false);
    let filter: RwSignal<FilterKey> = RwSignal::new(FilterKey::All);
    let search: RwSignal<String> = RwSignal::new(String::new());
    let nav: RwSignal<Navigation> = RwSignal::new(Navigation::new());

    provide_context(CatalogState(catalog));
    provide_context(CatalogLoaded(loaded));
    provide_context(ActiveFilter(filter));
    provide_context(SearchQuery(search));
    provide_context(NavState(nav));
    provide_context(config.clone());

    let data_url = config.data_url.clone();
    Effect::new(move || {
        loader::load_catalog(data_url.clone(), catalog, loaded);
    });

    // Body scroll follows overlay state.
    Effect::new(move || {
        let locked = nav.with(Navigation::scroll_locked);
        dom::set_scroll_locked(locked);
    });

    // Escape closes the topmost overlay, then the placeholder page.
    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };

        KEYDOWN_BINDING.with(|slot| {
            if let Some(old) = slot.borrow_mut().take() {
                let _ = old.window.remove_event_listener_with_callback(
                    "keydown",
                    old._handler.as_ref().unchecked_ref(),
                );
            }
        });

        let handler =
            Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
                if e.key() != "Escape" {
                    return;
                }
                if let Some((_, effect)) = nav.try_update(Navigation::cancel).flatten() {
                    dom::apply_nav_effect(effect);
                }
            });

        if window
            .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            KEYDOWN_BINDING.with(|slot| {
                *slot.borrow_mut() = Some(KeydownBinding {
                    window: window.clone(),
                    _handler: handler,
                });
            });
        }
    });

    // Contribute triggers may live anywhere in the host page, so listen on
    // the document and match on the way up from the click target.
    Effect::new(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        TRIGGER_BINDING.with(|slot| {
            if let Some(old) = slot.borrow_mut().take() {
                let _ = old.document.remove_event_listener_with_callback(
                    "click",
                    old._handler.as_ref().unchecked_ref(),
                );
            }
        });

        let handler =
            Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |e: web_sys::MouseEvent| {
                let Some(target) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                else {
                    return;
                };
                if let Ok(Some(_)) = target.closest(CONTRIBUTE_TRIGGER_SELECTOR) {
                    e.prevent_default();
                    nav.update(Navigation::open_contribute);
                }
            });

        if document
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            TRIGGER_BINDING.with(|slot| {
                *slot.borrow_mut() = Some(TriggerBinding {
                    document: document.clone(),
                    _handler: handler,
                });
            });
        }
    });

    let on_placeholder = move || nav.with(Navigation::on_placeholder);
    let year = chrono::Local::now().year();

    view! {
        <div
            id="main-page"
            aria-hidden=move || if on_placeholder() { "true" } else { "false" }
            style:display=move || if on_placeholder() { "none" } else { "" }
        >
            <header class="site-header">
                <h1 class="site-title">"Digital Library"</h1>
                <p class="site-stats">
                    <span id="live-count">{move || catalog.with(Catalog::live_count)}</span>
                    " departments live"
                </p>
            </header>
            <main class="catalog">
                <SearchBar />
                <FilterTabs />
                {move || {
                    if loaded.get() {
                        view! {
                            <ResultStat />
                            <CardGrid />
                        }
                            .into_any()
                    } else {
                        view! { <p class="catalog-loading">"Loading departments..."</p> }.into_any()
                    }
                }}
            </main>
        </div>
        <ComingSoonPage />
        <LevelModal />
        <ContributeModal />
        <footer class="site-footer">
            <span>"\u{00A9} " <span id="year">{year}</span></span>
            <a href="#contribute" class="footer-contribute">"Contribute"</a>
        </footer>
    }
}
