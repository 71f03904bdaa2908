//! Smooth scrolling for in-page anchor links.
//!
//! One document-level click listener covers anchors inside injected
//! markup as well as component-rendered ones. A click whose nearest
//! ancestor anchor targets a fragment has its default navigation
//! prevented; if the target element exists, it is scrolled into view and
//! the mobile menu is closed. A missing target is a silent no-op.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use leptos::prelude::RwSignal;

use crate::state::nav::NavState;

/// Extract the target element id from an in-page href. `None` for hrefs
/// that do not start with `#`; a bare `"#"` yields an empty id, which no
/// element can carry.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Register the document click listener.
pub fn install(nav: RwSignal<NavState>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            let Some(target) = ev.target() else {
                return;
            };
            let Ok(el) = target.dyn_into::<web_sys::Element>() else {
                return;
            };
            let Ok(Some(anchor)) = el.closest("a[href^='#']") else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(fragment) = anchor_target(&href) else {
                return;
            };

            ev.prevent_default();

            let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(section) = doc.get_element_by_id(fragment) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                section.scroll_into_view_with_scroll_into_view_options(&opts);
                crate::util::mobile_nav::close(nav);
            }
        });
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = nav;
    }
}
