#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use telegram_analyzer_web::models::{
    LoginSubmission, StatusReport, SubmitOutcome, UploadFile, UploadSubmission,
};
use telegram_analyzer_web::services::AnalyzerApi;
use telegram_analyzer_web::viewmodels::PageEffects;
use telegram_analyzer_web::ClientError;

const MAX_SLEEPS: u32 = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct FakeFile(pub String);

impl FakeFile {
    pub fn named(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl UploadFile for FakeFile {
    fn file_name(&self) -> String {
        self.0.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Login(LoginSubmission),
    Upload(String),
    Status,
}

/// Scripted analyzer endpoints.
#[derive(Default)]
pub struct FakeApi {
    login: RefCell<Option<Result<SubmitOutcome, ClientError>>>,
    upload: RefCell<Option<Result<SubmitOutcome, ClientError>>>,
    statuses: RefCell<VecDeque<Result<StatusReport, ClientError>>>,
    calls: RefCell<Vec<ApiCall>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_login(outcome: Result<SubmitOutcome, ClientError>) -> Self {
        let api = Self::default();
        *api.login.borrow_mut() = Some(outcome);
        api
    }

    pub fn with_upload(outcome: Result<SubmitOutcome, ClientError>) -> Self {
        let api = Self::default();
        *api.upload.borrow_mut() = Some(outcome);
        api
    }

    /// Status bodies served in order, given as raw JSON.
    pub fn with_status_bodies(bodies: &[&str]) -> Self {
        let api = Self::default();
        for body in bodies {
            let report = StatusReport::parse(body)
                .map_err(|e| ClientError::InvalidStatus(e.to_string()));
            api.statuses.borrow_mut().push_back(report);
        }
        api
    }

    pub fn push_status(&self, report: Result<StatusReport, ClientError>) {
        self.statuses.borrow_mut().push_back(report);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn status_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| **call == ApiCall::Status)
            .count()
    }
}

impl AnalyzerApi for &FakeApi {
    type File = FakeFile;

    async fn submit_login(&self, login: &LoginSubmission) -> Result<SubmitOutcome, ClientError> {
        self.calls.borrow_mut().push(ApiCall::Login(login.clone()));
        self.login
            .borrow_mut()
            .take()
            .unwrap_or(Ok(SubmitOutcome::Rejected(None)))
    }

    async fn submit_upload(
        &self,
        upload: &UploadSubmission<FakeFile>,
    ) -> Result<SubmitOutcome, ClientError> {
        self.calls
            .borrow_mut()
            .push(ApiCall::Upload(upload.file_name.clone()));
        self.upload
            .borrow_mut()
            .take()
            .unwrap_or(Ok(SubmitOutcome::Rejected(None)))
    }

    async fn fetch_status(&self) -> Result<StatusReport, ClientError> {
        self.calls.borrow_mut().push(ApiCall::Status);
        self.statuses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted status left".into())))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Navigate(String),
    ShowError(String),
    Progress(u8),
    UploadBusy(bool),
    Sleep(u32),
}

/// Records page effects; sleeping returns immediately.
#[derive(Default)]
pub struct FakePage {
    events: RefCell<Vec<PageEvent>>,
    sleeps: Cell<u32>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                PageEvent::ShowError(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                PageEvent::Navigate(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }
}

impl PageEffects for FakePage {
    fn navigate(&self, url: &str) {
        self.events.borrow_mut().push(PageEvent::Navigate(url.to_string()));
    }

    fn show_error(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(PageEvent::ShowError(message.to_string()));
    }

    fn set_progress(&self, percent: u8) {
        self.events.borrow_mut().push(PageEvent::Progress(percent));
    }

    fn set_upload_busy(&self, busy: bool) {
        self.events.borrow_mut().push(PageEvent::UploadBusy(busy));
    }

    async fn sleep(&self, ms: u32) {
        let count = self.sleeps.get() + 1;
        self.sleeps.set(count);
        assert!(count <= MAX_SLEEPS, "poll loop never reached a terminal state");
        self.events.borrow_mut().push(PageEvent::Sleep(ms));
    }
}
