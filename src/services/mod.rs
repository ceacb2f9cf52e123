pub mod export;
pub mod link_form;

pub use export::ExportFormat;
pub use link_form::LinkForm;
