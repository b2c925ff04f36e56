use std::cmp::Ordering;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use catalog_shared::{Catalog, Department};

/// Fetch the department list. One attempt, no caching.
pub async fn fetch_departments(url: &str) -> Result<Vec<Department>, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Vec<Department>>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

/// Browser `localeCompare` as an `Ordering`.
fn locale_compare(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
}

/// Sorted catalog on success, empty catalog on any failure.
pub(crate) fn catalog_from_result<F>(result: Result<Vec<Department>, String>, cmp: F) -> Catalog
where
    F: FnMut(&str, &str) -> Ordering,
{
    match result {
        Ok(departments) => Catalog::from_departments_with(departments, cmp),
        Err(_) => Catalog::empty(),
    }
}

/// Load the catalog into `catalog`, then flip `loaded`. Any failure leaves an
/// empty catalog behind and is only reported to the console.
pub fn load_catalog(url: String, catalog: RwSignal<Catalog>, loaded: RwSignal<bool>) {
    spawn_local(async move {
        let result = fetch_departments(&url).await;
        let fetched = result.is_ok();
        if let Err(e) = &result {
            web_sys::console::warn_1(&format!("Could not load {url}: {e}").into());
        }
        let next = catalog_from_result(result, locale_compare);
        if fetched {
            web_sys::console::info_1(
                &format!(
                    "catalog loaded: {} departments ({} live)",
                    next.len(),
                    next.live_count()
                )
                .into(),
            );
        }
        catalog.set(next);
        loaded.set(true);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_shared::catalog::compare_names;
    use catalog_shared::view::summary_line;
    use catalog_shared::{FilterKey, Query};
    use serde_json::json;

    fn departments(value: serde_json::Value) -> Vec<Department> {
        serde_json::from_value(value).expect("fixture should parse")
    }

    #[test]
    fn failed_fetch_yields_empty_catalog() {
        let catalog = catalog_from_result(Err("HTTP 404".into()), compare_names);
        assert!(catalog.is_empty());
        assert_eq!(
            summary_line(&catalog, 0, FilterKey::All, &Query::default()),
            "Showing all 0 departments"
        );
    }

    #[test]
    fn successful_fetch_is_sorted() {
        let list = departments(json!([
            { "name": "Zoology", "live": true },
            { "name": "agronomy", "live": false },
            { "name": "Botany", "live": true }
        ]));
        let catalog = catalog_from_result(Ok(list), compare_names);
        let names: Vec<&str> = catalog
            .departments()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["agronomy", "Botany", "Zoology"]);
        assert_eq!(catalog.live_count(), 2);
    }
}
