//! Page-load diagnostic.
//!
//! Logs the elapsed time from navigation start to load completion once the
//! window's `load` event fires. Read-only; never touches UI state.

/// Register the window load listener.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };

        let on_load = Closure::<dyn FnMut()>::new(|| {
            let Some(perf) = web_sys::window().and_then(|w| w.performance()) else {
                return;
            };
            let timing = perf.timing();
            let end = timing.load_event_end();
            // loadEventEnd is 0 until the load event has fully completed.
            if end > 0.0 {
                let elapsed = end - timing.navigation_start();
                leptos::logging::log!("page loaded in {elapsed}ms");
            }
        });
        let _ = window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        on_load.forget();
    }
}
