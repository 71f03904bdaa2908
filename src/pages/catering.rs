//! Catering page.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn CateringPage() -> impl IntoView {
    view! {
        <Title text="Catering - The Causeway Estate"/>
        <main class="page page--catering">
            <h1>"Catering"</h1>
            <p>
                "From buffets for club competitions to plated dinners for "
                "private parties, we cater on site and across Hereford. "
                "Sample menus are available on request."
            </p>
        </main>
    }
}
