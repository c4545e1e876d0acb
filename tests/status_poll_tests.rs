mod common;

use common::{FakeApi, FakePage, PageEvent};
use futures::executor::block_on;
use telegram_analyzer_web::models::{PollStep, StatusReport};
use telegram_analyzer_web::state::PollSession;
use telegram_analyzer_web::utils::ANALYSIS_FAILED_MESSAGE;
use telegram_analyzer_web::viewmodels::StatusViewModel;
use telegram_analyzer_web::ClientError;

const INTERVAL_MS: u32 = 2_000;
const FAILED_DELAY_MS: u32 = 3_000;

fn view_model(api: &FakeApi) -> StatusViewModel<&FakeApi> {
    StatusViewModel::with_timing(api, INTERVAL_MS, FAILED_DELAY_MS)
}

#[test]
fn running_updates_progress_then_complete_navigates() {
    let api = FakeApi::with_status_bodies(&[
        r#"{"status":"running","progress":42}"#,
        r#"{"status":"complete","redirect":"/results/7"}"#,
    ]);
    let page = FakePage::new();
    let session = PollSession::new();

    let terminal = block_on(view_model(&api).run(&session, &page));

    assert_eq!(
        terminal,
        Some(PollStep::Complete {
            redirect: Some("/results/7".into())
        })
    );
    assert_eq!(
        page.events(),
        vec![
            PageEvent::Sleep(INTERVAL_MS),
            PageEvent::Progress(42),
            PageEvent::Sleep(INTERVAL_MS),
            PageEvent::Navigate("/results/7".into()),
        ]
    );
    assert!(!session.is_active());
    assert_eq!(session.ticks(), 2);
    assert_eq!(session.last_progress(), Some(42));
}

#[test]
fn no_request_after_terminal_status() {
    let api = FakeApi::with_status_bodies(&[
        r#"{"status":"complete","redirect":"/results/7"}"#,
        r#"{"status":"running","progress":99}"#,
    ]);
    let page = FakePage::new();
    let session = PollSession::new();

    block_on(view_model(&api).run(&session, &page));

    assert_eq!(api.status_calls(), 1);
}

#[test]
fn failure_shows_error_then_redirects_after_delay() {
    let api = FakeApi::with_status_bodies(&[r#"{"status":"failed","redirect":"/upload"}"#]);
    let page = FakePage::new();
    let session = PollSession::new();

    let terminal = block_on(view_model(&api).run(&session, &page));

    assert!(matches!(terminal, Some(PollStep::Failed { .. })));
    assert_eq!(
        page.events(),
        vec![
            PageEvent::Sleep(INTERVAL_MS),
            PageEvent::ShowError(ANALYSIS_FAILED_MESSAGE.into()),
            PageEvent::Sleep(FAILED_DELAY_MS),
            PageEvent::Navigate("/upload".into()),
        ]
    );
    assert!(!session.is_active());
}

#[test]
fn tick_failures_are_swallowed_and_polling_continues() {
    let api = FakeApi::new();
    api.push_status(Err(ClientError::Network("Failed to fetch".into())));
    api.push_status(Err(ClientError::InvalidStatus("expected value".into())));
    api.push_status(Ok(StatusReport::parse(r#"{"status":"complete","redirect":"/results/1"}"#).unwrap()));
    let page = FakePage::new();
    let session = PollSession::new();

    block_on(view_model(&api).run(&session, &page));

    assert_eq!(api.status_calls(), 3);
    assert!(page.errors().is_empty());
    assert_eq!(page.navigations(), vec!["/results/1".to_string()]);
}

#[test]
fn running_without_progress_leaves_indicator_alone() {
    let api = FakeApi::with_status_bodies(&[
        r#"{"status":"processing"}"#,
        r#"{"status":"running","progress":"half"}"#,
        r#"{"status":"complete","redirect":"/results/2"}"#,
    ]);
    let page = FakePage::new();
    let session = PollSession::new();

    block_on(view_model(&api).run(&session, &page));

    assert!(!page
        .events()
        .iter()
        .any(|event| matches!(event, PageEvent::Progress(_))));
    assert_eq!(session.ticks(), 3);
}

#[test]
fn complete_without_redirect_stops_in_place() {
    let api = FakeApi::with_status_bodies(&[r#"{"status":"complete"}"#]);
    let page = FakePage::new();
    let session = PollSession::new();

    let terminal = block_on(view_model(&api).run(&session, &page));

    assert_eq!(terminal, Some(PollStep::Complete { redirect: None }));
    assert!(page.navigations().is_empty());
    assert!(!session.is_active());
}

#[test]
fn stopped_session_issues_no_request() {
    let api = FakeApi::with_status_bodies(&[r#"{"status":"running","progress":10}"#]);
    let page = FakePage::new();
    let session = PollSession::new();
    session.stop();

    let terminal = block_on(view_model(&api).run(&session, &page));

    assert_eq!(terminal, None);
    assert_eq!(api.status_calls(), 0);
    assert_eq!(page.events(), vec![PageEvent::Sleep(INTERVAL_MS)]);
}
