//! Site header: brand link, hamburger toggle, and the navigation
//! fragment placeholder.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::util::mobile_nav;

/// Page header shared by every route.
///
/// The navigation itself arrives via fragment injection; until the
/// injector has run, the placeholder is empty and the hamburger click
/// self-disables.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let on_toggle = move |_| mobile_nav::toggle(nav);
    let expanded = move || nav.get().menu_open.to_string();

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="index.html">
                "The Causeway Estate"
            </a>
            <button
                class="hamburger-menu"
                aria-label="Toggle navigation"
                aria-expanded=expanded
                on:click=on_toggle
            >
                <span class="hamburger-menu__bar"></span>
                <span class="hamburger-menu__bar"></span>
                <span class="hamburger-menu__bar"></span>
            </button>
            <div class="site-header__nav" data-fragment="components/header.html"></div>
        </header>
    }
}
