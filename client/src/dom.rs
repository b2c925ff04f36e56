use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use catalog_shared::NavEffect;

use crate::config::{BACK_BUTTON_SELECTOR, FOCUS_DELAY_MS, LEVEL_CLOSE_SELECTOR};

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Jump (no smooth scrolling) to the top of the page.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Instant);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Suspend or restore page scrolling behind an overlay.
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        return;
    };
    let style = body.style();
    if locked {
        style.set_property("overflow", "hidden").ok();
    } else {
        style.remove_property("overflow").ok();
    }
}

/// Focus the first element matching `selector` after `delay_ms`.
pub fn focus_after(selector: &'static str, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        let Some(doc) = document() else {
            return;
        };
        if let Some(el) = doc.query_selector(selector).ok().flatten()
            && let Ok(el) = el.dyn_into::<web_sys::HtmlElement>()
        {
            el.focus().ok();
        }
    });
}

pub fn apply_nav_effect(effect: NavEffect) {
    match effect {
        NavEffect::ScrollToTop => scroll_to_top(),
        NavEffect::ScrollToTopAndFocusBack => {
            scroll_to_top();
            focus_after(BACK_BUTTON_SELECTOR, FOCUS_DELAY_MS);
        }
        NavEffect::FocusLevelClose => focus_after(LEVEL_CLOSE_SELECTOR, FOCUS_DELAY_MS),
        NavEffect::None => {}
    }
}

/// Whether a click landed on an overlay's backdrop rather than its panel.
/// `extra_class` names an inner full-size wrapper that also counts as backdrop.
pub fn is_backdrop_click(
    target_id: &str,
    target_class: &str,
    overlay_id: &str,
    extra_class: Option<&str>,
) -> bool {
    target_id == overlay_id
        || extra_class.is_some_and(|class| target_class.split_whitespace().any(|c| c == class))
}

/// Element id and class attribute of an event's target.
pub fn event_target_identity(e: &web_sys::Event) -> Option<(String, String)> {
    let el = e.target()?.dyn_into::<web_sys::Element>().ok()?;
    Some((el.id(), el.class_name()))
}

#[cfg(test)]
mod tests {
    use super::is_backdrop_click;

    #[test]
    fn overlay_itself_is_backdrop() {
        assert!(is_backdrop_click("level-modal", "modal-overlay open", "level-modal", None));
    }

    #[test]
    fn panel_is_not_backdrop() {
        assert!(!is_backdrop_click("", "modal-panel", "level-modal", None));
        assert!(!is_backdrop_click("modal-title", "", "level-modal", None));
    }

    #[test]
    fn inner_wrapper_counts_when_allowed() {
        assert!(is_backdrop_click("", "container wide", "contribute", Some("container")));
        assert!(!is_backdrop_click("", "container", "level-modal", None));
        assert!(!is_backdrop_click("", "containers", "contribute", Some("container")));
    }
}
