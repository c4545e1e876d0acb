pub mod login_form;
pub mod upload_form;
pub mod analysis_page;

pub use login_form::install_login_form;
pub use upload_form::install_upload_form;
pub use analysis_page::start_status_poller;
