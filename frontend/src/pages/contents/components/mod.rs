pub mod list;
pub mod upload_form;
