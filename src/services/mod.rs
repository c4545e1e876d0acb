pub mod traits;
pub mod api_client;
pub mod error_fragment;

pub use traits::AnalyzerApi;
pub use api_client::{submit_outcome, ApiClient};
pub use error_fragment::{extract_error_reason, html_error_reason, json_error_reason};
