pub mod login;
pub mod upload;
pub mod status;
pub mod submission;

pub use login::LoginSubmission;
pub use upload::{has_json_extension, UploadFile, UploadSubmission};
pub use status::{AnalysisStatus, PollStep, StatusReport};
pub use submission::SubmitOutcome;
