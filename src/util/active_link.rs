//! Marks the navigation link matching the current page.
//!
//! Must run after the header fragment has been injected, since it queries
//! the injected `.navbar` anchors.

#[cfg(test)]
#[path = "active_link_test.rs"]
mod active_link_test;

/// Derive the current page's file name from a location path. An empty
/// final segment (site root) means the home document.
pub fn page_file_name(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or("");
    if name.is_empty() {
        "index.html".to_owned()
    } else {
        name.to_owned()
    }
}

/// Mark every `.navbar` anchor whose `href` equals the current page's file
/// name: adds the `active` class and sets `aria-current="page"`. No match
/// leaves all links unmarked.
pub fn mark_active_links() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(doc) = window.document() else {
            return;
        };
        let current = page_file_name(&window.location().pathname().unwrap_or_default());

        let Ok(links) = doc.query_selector_all(".navbar a") else {
            return;
        };
        for i in 0..links.length() {
            let Some(node) = links.item(i) else {
                continue;
            };
            let Ok(link) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            if link.get_attribute("href").as_deref() == Some(current.as_str()) {
                let _ = link.class_list().add_1("active");
                let _ = link.set_attribute("aria-current", "page");
            }
        }
    }
}
