// DOM contract shared with the server-rendered pages.

pub const LOGIN_FORM_ID: &str = "login-form";
pub const USERNAME_INPUT_ID: &str = "username";
pub const PASSWORD_INPUT_ID: &str = "password";
pub const REMEMBER_INPUT_ID: &str = "remember";

pub const UPLOAD_FORM_ID: &str = "upload-form";
pub const FILE_INPUT_ID: &str = "file-input";
pub const SUBMIT_BUTTON_ID: &str = "submit-button";

pub const PROGRESS_BAR_ID: &str = "analysis-progress";

pub const ERROR_MESSAGE_ID: &str = "error-message";
pub const ERROR_MESSAGE_CLASS: &str = "alert alert-danger mt-3";
/// Marker class of the error element embedded in rejected responses.
pub const ERROR_FRAGMENT_SELECTOR: &str = ".alert-danger";

pub const UPLOAD_BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Uploading..."#;
pub const UPLOAD_IDLE_LABEL: &str = r#"<i class="fas fa-chart-bar"></i> Analyze Chat"#;

pub const LOGIN_NETWORK_ERROR: &str = "An error occurred during login. Please try again.";
pub const UPLOAD_NETWORK_ERROR: &str = "An error occurred during file upload. Please try again.";
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed. Please try again.";
