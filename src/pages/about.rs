//! About page.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About - The Causeway Estate"/>
        <main class="page page--about">
            <h1>"About"</h1>
            <p>
                "The Causeway Estate has served the Herefordshire Golf Club "
                "and the wider city since the clubhouse opened. Our kitchen "
                "works with local growers and keeps the menu short and "
                "seasonal."
            </p>
        </main>
    }
}
