//! Browser glue: fragment injection, link marking, menu DOM sync, smooth
//! scrolling, and the load-time diagnostic. Everything touching `web_sys`
//! is gated behind the `hydrate` feature.

pub mod active_link;
pub mod fragments;
pub mod mobile_nav;
pub mod page_timer;
pub mod smooth_scroll;
