//! Contact page hosting the contact form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::contact_form::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact - The Causeway Estate"/>
        <main class="page page--contact">
            <h1>"Contact"</h1>
            <p>"Questions about bookings or catering? Send us a message."</p>
            <ContactForm/>
        </main>
    }
}
