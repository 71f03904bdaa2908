//! DOM side of the mobile navigation state machine.
//!
//! [`crate::state::nav::NavState`] holds the open/closed state; this
//! module applies it to the document (the `active` class on `.navbar`) and
//! wires the debounced resize close. The hamburger button's
//! `aria-expanded` is a reactive binding on the same signal, so every
//! transition keeps class and attribute in step.
//!
//! Every entry point self-disables when the toggle control or the
//! navigation container is missing from the document.

use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::{GetUntracked, Set};

use crate::state::nav::NavState;

#[cfg(feature = "hydrate")]
use crate::state::nav::RESIZE_DEBOUNCE_MS;

/// Toggle the menu in response to a hamburger click.
pub fn toggle(nav: RwSignal<NavState>) {
    #[cfg(feature = "hydrate")]
    {
        if navbar().is_none() || hamburger().is_none() {
            return;
        }
        let mut state = nav.get_untracked();
        let open = state.toggle();
        nav.set(state);
        set_navbar_class(open);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = nav;
    }
}

/// Close the menu if it is open. No-op otherwise.
pub fn close(nav: RwSignal<NavState>) {
    #[cfg(feature = "hydrate")]
    {
        if navbar().is_none() || hamburger().is_none() {
            return;
        }
        let mut state = nav.get_untracked();
        if !state.close() {
            return;
        }
        nav.set(state);
        set_navbar_class(false);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = nav;
    }
}

/// Register the window resize listener that closes the menu once the
/// viewport settles above the desktop breakpoint.
///
/// Resize events replace the pending timeout, which cancels it; only after
/// 250ms of quiescence does the width check run.
pub fn install_resize_close(nav: RwSignal<NavState>) {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::Timeout;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        if navbar().is_none() || hamburger().is_none() {
            return;
        }

        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let check = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                let width = web_sys::window()
                    .and_then(|w| w.inner_width().ok())
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                if nav.get_untracked().should_close_on_resize(width) {
                    close(nav);
                }
            });
            // Dropping the previous timeout cancels it.
            *pending.borrow_mut() = Some(check);
        });
        let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = nav;
    }
}

#[cfg(feature = "hydrate")]
fn navbar() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".navbar").ok().flatten())
}

#[cfg(feature = "hydrate")]
fn hamburger() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".hamburger-menu").ok().flatten())
}

#[cfg(feature = "hydrate")]
fn set_navbar_class(open: bool) {
    if let Some(el) = navbar() {
        let class_list = el.class_list();
        if open {
            let _ = class_list.add_1("active");
        } else {
            let _ = class_list.remove_1("active");
        }
    }
}
