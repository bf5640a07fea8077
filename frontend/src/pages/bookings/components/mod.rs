pub mod create_form;
pub mod filter;
pub mod list;
pub mod status_badge;
