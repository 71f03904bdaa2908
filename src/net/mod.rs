//! Outward-facing seams.
//!
//! The contact form never reaches a real endpoint in this version; the
//! transport trait marks where the future POST will plug in.

pub mod transport;
