//! Shared UI components rendered on every page (header, footer) plus the
//! contact form controller.

pub mod contact_form;
pub mod site_footer;
pub mod site_header;
