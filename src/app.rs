//! Root application component: routing, shared state, and the boot
//! sequence that wires the document-level behaviors.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{StaticSegment, components::{Route, Router, Routes}};

use crate::components::{site_footer::SiteFooter, site_header::SiteHeader};
use crate::pages::{
    about::AboutPage, catering::CateringPage, contact::ContactPage, events::EventsPage,
    home::HomePage, menu::MenuPage,
};
use crate::state::nav::NavState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Consumed by the hosting `leptos_axum` server (deployed separately from
/// this crate), which serves it with the hydration scripts for every
/// route. Nothing inside the crate calls it.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the navigation state context, renders the shared header and
/// footer around the routed page, and runs the one-shot boot sequence.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    provide_context(nav);

    // Boot sequence, browser only. Fragment injection must finish before
    // the components that query injected markup initialize.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::util::fragments::inject_all().await;
            crate::util::active_link::mark_active_links();
            crate::util::mobile_nav::install_resize_close(nav);
            crate::util::smooth_scroll::install(nav);
            crate::util::page_timer::install();
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/causeway-site.css"/>
        <Title text="The Causeway Estate"/>

        <SiteHeader/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("index.html") view=HomePage/>
                <Route path=StaticSegment("menu.html") view=MenuPage/>
                <Route path=StaticSegment("about.html") view=AboutPage/>
                <Route path=StaticSegment("catering.html") view=CateringPage/>
                <Route path=StaticSegment("events.html") view=EventsPage/>
                <Route path=StaticSegment("contact.html") view=ContactPage/>
            </Routes>
        </Router>

        <SiteFooter/>
    }
}
