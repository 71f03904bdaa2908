//! Menu page.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn MenuPage() -> impl IntoView {
    view! {
        <Title text="Menu - The Causeway Estate"/>
        <main class="page page--menu">
            <h1>"Menu"</h1>
            <section class="menu-section">
                <h2>"Lunch"</h2>
                <p>"Sandwiches, salads, and a daily hot special, served 12:00 - 15:00."</p>
            </section>
            <section class="menu-section">
                <h2>"Sunday Roast"</h2>
                <p>"Roast beef or a vegetarian alternative with all the trimmings."</p>
            </section>
            <section class="menu-section">
                <h2>"Drinks"</h2>
                <p>"Local ales, wines by the glass, and freshly ground coffee."</p>
            </section>
        </main>
    }
}
