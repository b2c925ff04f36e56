use leptos::prelude::*;
use wasm_bindgen::JsCast;

use catalog_shared::{Catalog, FilterKey, Navigation, Query};
use catalog_shared::view::{CardView, GridView, grid_view, summary_line};

use crate::app::{ActiveFilter, CatalogState, NavState, SearchQuery, activate_department};

#[component]
pub fn SearchBar() -> impl IntoView {
    let SearchQuery(search) = expect_context();

    let on_input = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        search.set(input.value());
    };

    let has_query = move || search.with(|q| !q.trim().is_empty());

    view! {
        <div class="search-wrap">
            <input
                id="search-input"
                type="search"
                autocomplete="off"
                placeholder="Search departments or faculties..."
                aria-label="Search departments"
                prop:value=move || search.get()
                on:input=on_input
            />
            <button
                id="search-clear"
                type="button"
                aria-label="Clear search"
                style:display=move || if has_query() { "inline-block" } else { "none" }
                on:click=move |_| search.set(String::new())
            >
                "\u{00D7}"
            </button>
        </div>
    }
}

#[component]
pub fn FilterTabs() -> impl IntoView {
    let ActiveFilter(filter) = expect_context();

    // One listener for the whole tablist; the key comes from the tab's `data-filter`.
    let on_tab_click = move |e: leptos::ev::MouseEvent| {
        let Some(tab) = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("[data-filter]").ok().flatten())
        else {
            return;
        };
        let key = tab.get_attribute("data-filter").unwrap_or_default();
        filter.set(FilterKey::parse(&key));
    };

    view! {
        <div class="tabs" role="tablist" aria-label="Filter departments" on:click=on_tab_click>
            {FilterKey::ALL
                .into_iter()
                .map(|key| {
                    let selected = move || filter.get() == key;
                    view! {
                        <button
                            class="tab"
                            class:active=selected
                            role="tab"
                            data-filter=key.as_str()
                            aria-selected=move || if selected() { "true" } else { "false" }
                        >
                            {key.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ResultStat() -> impl IntoView {
    let CatalogState(catalog) = expect_context();
    let ActiveFilter(filter) = expect_context();
    let SearchQuery(search) = expect_context();

    let text = Memo::new(move |_| {
        let query = Query::new(&search.get());
        let key = filter.get();
        catalog.with(|c| summary_line(c, c.visible(key, &query).len(), key, &query))
    });

    view! { <p id="result-count-text" class="result-count">{move || text.get()}</p> }
}

/// Card grid, or the no-results block when nothing is visible.
#[component]
pub fn CardGrid() -> impl IntoView {
    let CatalogState(catalog) = expect_context();
    let ActiveFilter(filter) = expect_context();
    let SearchQuery(search) = expect_context();
    let NavState(nav) = expect_context();

    let grid = Memo::new(move |_| {
        let query = Query::new(&search.get());
        let key = filter.get();
        catalog.with(|c| grid_view(&c.visible(key, &query), &query))
    });

    let is_empty = move || grid.with(|g| matches!(g, GridView::Empty { .. }));
    let search_term = move || {
        grid.with(|g| match g {
            GridView::Empty { search_term } => search_term.clone(),
            GridView::Cards(_) => String::new(),
        })
    };

    // Cards are rebuilt on every change so the reveal stagger replays.
    let cards = move || match grid.get() {
        GridView::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <DepartmentCard card=card nav=nav catalog=catalog /> })
            .collect_view()
            .into_any(),
        GridView::Empty { .. } => ().into_any(),
    };

    view! {
        <div
            id="dept-grid"
            class="dept-grid"
            role="list"
            style:border=move || if is_empty() { "none" } else { "" }
        >
            {cards}
        </div>
        <div id="no-results" class="no-results" class:visible=is_empty>
            <p>"No departments match \u{201C}" <span id="search-term">{search_term}</span> "\u{201D}"</p>
        </div>
    }
}

#[component]
fn DepartmentCard(
    card: CardView,
    nav: RwSignal<Navigation>,
    catalog: RwSignal<Catalog>,
) -> impl IntoView {
    let key = card.key.clone();
    let on_click = move |_: leptos::ev::MouseEvent| activate_department(nav, catalog, &key);

    view! {
        <button
            class=card.card_class()
            role="listitem"
            aria-label=card.aria_label.clone()
            style=card.animation_style()
            on:click=on_click
        >
            <div class="card-top">
                <div class="card-icon" style=card.decoration.icon_style() aria-hidden="true">
                    {card.icon.clone()}
                </div>
                <span class="card-arrow" aria-hidden="true">"\u{2197}"</span>
            </div>
            <div class="card-body">
                <div class="card-faculty">{card.faculty.clone()}</div>
                <div class="card-name">{card.name.clone()}</div>
            </div>
            <div>
                <span class=card.badge.class()>{card.badge.label()}</span>
            </div>
        </button>
    }
}
