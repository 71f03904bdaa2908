//! Events page.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <Title text="Events - The Causeway Estate"/>
        <main class="page page--events">
            <h1>"Events"</h1>
            <p>
                "The function room seats up to eighty for weddings, wakes, "
                "and club celebrations, with the terrace available for "
                "summer drinks receptions."
            </p>
        </main>
    }
}
