use leptos::prelude::*;

use catalog_shared::Navigation;

use crate::app::{NavState, go_back};

/// Shown in place of the catalog for departments without published resources.
#[component]
pub fn ComingSoonPage() -> impl IntoView {
    let NavState(nav) = expect_context();

    let active = move || nav.with(Navigation::on_placeholder);
    let department =
        move || nav.with(|n| n.placeholder_department().map(str::to_string).unwrap_or_default());

    view! {
        <section
            id="coming-soon-page"
            class="coming-soon-page"
            class:active=active
            aria-hidden=move || if active() { "false" } else { "true" }
        >
            <div class="cs-inner">
                <p class="cs-eyebrow">"Coming soon"</p>
                <h2 id="cs-dept-name" class="cs-title">{department}</h2>
                <p class="cs-copy">
                    "Resources for this department haven't been published yet. Check back soon, "
                    "or help us fill the gap."
                </p>
                <div class="cs-actions">
                    <button class="back-btn" type="button" on:click=move |_| go_back(nav)>
                        "\u{2190} Back to departments"
                    </button>
                    <a href="#contribute" class="open-modal-btn">"Contribute"</a>
                </div>
            </div>
        </section>
    }
}
