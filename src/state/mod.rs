//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`nav`, `form`, `message`) so the pure
//! transition logic can be unit-tested without a live document; the DOM
//! side effects live in `crate::util`.

pub mod form;
pub mod message;
pub mod nav;
