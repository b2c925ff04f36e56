use leptos::prelude::*;

use catalog_shared::Navigation;
use catalog_shared::view::{LINK_REL, LINK_TARGET, LevelLinkView, ModalHeader, level_links};

use crate::app::{CatalogState, NavState};
use crate::config::{CONTRIBUTE_MODAL_ID, ClientConfig, LEVEL_MODAL_ID};
use crate::dom;

/// Level picker for a live department.
#[component]
pub fn LevelModal() -> impl IntoView {
    let CatalogState(catalog) = expect_context();
    let NavState(nav) = expect_context();

    let content = Memo::new(move |_| {
        let name = nav.with(|n| n.last_level_modal().map(str::to_string))?;
        catalog.with(|c| {
            c.find(&name)
                .map(|dept| (ModalHeader::new(dept), level_links(dept)))
        })
    });
    let is_open = move || nav.with(|n| n.level_modal().is_some());

    let on_backdrop = move |e: leptos::ev::MouseEvent| {
        let Some((id, class)) = dom::event_target_identity(&e) else {
            return;
        };
        if dom::is_backdrop_click(&id, &class, LEVEL_MODAL_ID, None) {
            nav.update(Navigation::close_level_modal);
        }
    };

    view! {
        <div
            id=LEVEL_MODAL_ID
            class="modal-overlay"
            class:open=is_open
            aria-hidden=move || if is_open() { "false" } else { "true" }
            on:click=on_backdrop
        >
            <div class="modal-panel" role="dialog" aria-modal="true" aria-labelledby="modal-title">
                <button
                    class="modal-close"
                    type="button"
                    aria-label="Close"
                    on:click=move |_| nav.update(Navigation::close_level_modal)
                >
                    "\u{00D7}"
                </button>
                {move || {
                    content
                        .get()
                        .map(|(header, links)| {
                            view! {
                                <div class="modal-header">
                                    <div
                                        id="modal-icon"
                                        class="modal-icon"
                                        style=header.decoration.icon_style()
                                        aria-hidden="true"
                                    >
                                        {header.icon}
                                    </div>
                                    <div>
                                        <div id="modal-faculty" class="modal-faculty">{header.faculty}</div>
                                        <h2 id="modal-title" class="modal-title">{header.name}</h2>
                                    </div>
                                </div>
                                <div id="level-grid" class="level-grid" role="list">
                                    {links.into_iter().map(level_button).collect_view()}
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}

fn level_button(link: LevelLinkView) -> impl IntoView {
    let inert = link.is_inert();
    view! {
        <a
            class="level-btn"
            href=link.href
            target=LINK_TARGET
            rel=LINK_REL
            role="listitem"
            aria-label=link.aria_label
            aria-disabled=inert.then_some("true")
            style=if inert { "opacity:0.45;cursor:not-allowed;" } else { "" }
            on:click=move |e: leptos::ev::MouseEvent| {
                if inert {
                    e.prevent_default();
                }
            }
        >
            <span class="level-number">{link.label}</span>
            <span class="level-label">"Level"</span>
        </a>
    }
}

/// "Contribute resources" overlay, opened by any contribute trigger.
#[component]
pub fn ContributeModal() -> impl IntoView {
    let NavState(nav) = expect_context();
    let config: ClientConfig = expect_context();

    let is_open = move || nav.with(Navigation::contribute_open);

    let on_backdrop = move |e: leptos::ev::MouseEvent| {
        let Some((id, class)) = dom::event_target_identity(&e) else {
            return;
        };
        if dom::is_backdrop_click(&id, &class, CONTRIBUTE_MODAL_ID, Some("container")) {
            nav.update(Navigation::close_contribute);
        }
    };

    view! {
        <div
            id=CONTRIBUTE_MODAL_ID
            class="contribute-overlay"
            class:modal-active=is_open
            aria-hidden=move || if is_open() { "false" } else { "true" }
            on:click=on_backdrop
        >
            <div class="container">
                <div class="contribute-box" role="dialog" aria-modal="true" aria-labelledby="contribute-title">
                    <button
                        class="close-modal-btn"
                        type="button"
                        aria-label="Close"
                        on:click=move |_| nav.update(Navigation::close_contribute)
                    >
                        "\u{00D7}"
                    </button>
                    <h2 id="contribute-title">"Contribute resources"</h2>
                    <p>
                        "Have lecture notes, past questions or textbooks for your department? "
                        "Send them in and we will add them to the library."
                    </p>
                    {config.contact_url.map(|href| {
                        view! {
                            <a class="contribute-contact" href=href target=LINK_TARGET rel=LINK_REL>
                                "Get in touch"
                            </a>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
