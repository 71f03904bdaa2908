//! Home page with in-page anchor sections.

use leptos::prelude::*;
use leptos_meta::Title;

/// Home page — the hero links jump to sections further down the page via
/// the smooth scroll handler.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="The Causeway Estate"/>
        <main class="page page--home">
            <section class="hero">
                <h1>"The Causeway Estate"</h1>
                <p>"Restaurant and catering at the Herefordshire Golf Club."</p>
                <div class="hero__links">
                    <a href="#welcome" class="btn">
                        "Welcome"
                    </a>
                    <a href="#opening-times" class="btn">
                        "Opening times"
                    </a>
                    <a href="#find-us" class="btn">
                        "Find us"
                    </a>
                </div>
            </section>

            <section id="welcome" class="home-section">
                <h2>"Welcome"</h2>
                <p>
                    "Seasonal cooking, a relaxed clubhouse dining room, and a "
                    "terrace overlooking the course. Walk-ins are always "
                    "welcome; larger parties should book ahead."
                </p>
            </section>

            <section id="opening-times" class="home-section">
                <h2>"Opening Times"</h2>
                <p>"Monday to Sunday, 10:00 - 16:00."</p>
            </section>

            <section id="find-us" class="home-section">
                <h2>"Find Us"</h2>
                <p>"The Causeway, Hereford, HR1 1DF."</p>
            </section>
        </main>
    }
}
