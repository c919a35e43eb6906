//! HTML front end: askama templates, page handlers and landing page copy.

pub mod handlers;
pub mod site_data;
