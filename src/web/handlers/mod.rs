pub mod docs;
pub mod pages;
