/// How a form post ended, when the request itself completed.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The server redirected; the browser should follow to this URL.
    Redirect(String),
    /// No redirect. Carries the reason extracted from the body, if any.
    Rejected(Option<String>),
}
