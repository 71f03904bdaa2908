//! Site footer fragment placeholder.

use leptos::prelude::*;

/// Footer shared by every route. Filled by the fragment injector from the
/// static footer resource; left empty if that fetch fails.
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! { <footer data-fragment="components/footer.html"></footer> }
}
