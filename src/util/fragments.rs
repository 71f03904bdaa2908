//! Shared markup fragments and the placeholder injector.
//!
//! Elements carrying a `data-fragment` attribute name the fragment they
//! want ("components/header.html" or "components/footer.html"). The
//! header ships as an embedded constant; the footer is fetched as a static
//! resource. A failed fetch is logged and the placeholder left as-is, so
//! the page degrades to "no footer" rather than breaking.
//!
//! Injection fully overwrites the placeholder's content, so re-running it
//! is safe.

#[cfg(test)]
#[path = "fragments_test.rs"]
mod fragments_test;

/// Attribute marking an element as a fragment placeholder.
pub const FRAGMENT_ATTR: &str = "data-fragment";

/// Shared navigation markup. Hrefs are bare file names so the active-link
/// marker can match them against the current page by string equality.
pub const HEADER_HTML: &str = r#"<nav class="navbar">
    <a href="index.html">Home</a>
    <a href="menu.html">Menu</a>
    <a href="about.html">About</a>
    <a href="catering.html">Catering</a>
    <a href="events.html">Events</a>
    <a href="contact.html">Contact</a>
</nav>"#;

/// Where a fragment's markup comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentSource {
    /// Embedded constant markup.
    Inline(&'static str),
    /// Relative path of a static resource returning markup text.
    Remote(&'static str),
}

/// Map a fragment name to its source. Unknown names get `None`.
pub fn fragment_source(name: &str) -> Option<FragmentSource> {
    match name {
        "components/header.html" => Some(FragmentSource::Inline(HEADER_HTML)),
        "components/footer.html" => Some(FragmentSource::Remote("components/footer.html")),
        _ => None,
    }
}

/// Resolve a fragment source to its markup.
///
/// # Errors
///
/// Returns the failure detail when a remote fragment cannot be fetched.
pub async fn resolve(source: FragmentSource) -> Result<String, String> {
    match source {
        FragmentSource::Inline(markup) => Ok(markup.to_owned()),
        FragmentSource::Remote(path) => fetch_fragment(path).await,
    }
}

/// Fetch a remote fragment's markup text.
async fn fetch_fragment(path: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("fragment request failed: {}", resp.status()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err("not available on server".to_owned())
    }
}

/// Replace the content of every `[data-fragment]` placeholder in the
/// document with its resolved markup. Failures leave the placeholder
/// unmodified and log the detail.
pub async fn inject_all() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = doc.query_selector_all(&format!("[{FRAGMENT_ATTR}]")) else {
            return;
        };

        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else {
                continue;
            };
            let Ok(el) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            let Some(name) = el.get_attribute(FRAGMENT_ATTR) else {
                continue;
            };
            let Some(source) = fragment_source(&name) else {
                leptos::logging::warn!("unknown fragment: {name}");
                continue;
            };
            match resolve(source).await {
                Ok(markup) => el.set_inner_html(&markup),
                Err(e) => leptos::logging::warn!("fragment {name} failed to load: {e}"),
            }
        }
    }
}
