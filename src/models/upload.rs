use crate::error::UploadRejection;

const JSON_EXTENSION: &str = ".json";

/// A file picked in the upload form.
pub trait UploadFile {
    fn file_name(&self) -> String;
}

impl UploadFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// A validated upload, ready to be posted.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadSubmission<F> {
    pub file: F,
    pub file_name: String,
}

impl<F: UploadFile> UploadSubmission<F> {
    /// Validates the first selected file. No request may be issued on error.
    pub fn from_selection(selected: Option<F>) -> Result<Self, UploadRejection> {
        let file = selected.ok_or(UploadRejection::MissingFile)?;
        let file_name = file.file_name();
        if !has_json_extension(&file_name) {
            return Err(UploadRejection::NotJson);
        }
        Ok(Self { file, file_name })
    }
}

pub fn has_json_extension(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(JSON_EXTENSION)
}
