//! One component per site page.

pub mod about;
pub mod catering;
pub mod contact;
pub mod events;
pub mod home;
pub mod menu;
