/// Credentials read from the login form on submit.
#[derive(Clone, PartialEq, Debug)]
pub struct LoginSubmission {
    pub username: String,
    pub password: String,
    pub remember: bool,
}

impl LoginSubmission {
    pub fn new(username: impl Into<String>, password: impl Into<String>, remember: bool) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            remember,
        }
    }

    /// Multipart fields in submission order. `remember` is only sent when checked.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ];
        if self.remember {
            fields.push(("remember", "on"));
        }
        fields
    }
}
