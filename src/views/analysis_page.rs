// ============================================================================
// ANALYSIS PAGE - Starts the status poller
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::dom::BrowserPage;
use crate::models::PollStep;
use crate::services::ApiClient;
use crate::state::PollSession;
use crate::viewmodels::StatusViewModel;

/// Spawns the poll loop and returns its session handle.
pub fn start_status_poller(api: &ApiClient, page: &BrowserPage) -> PollSession {
    let session = PollSession::new();
    let view_model = StatusViewModel::new(api.clone());
    let page = page.clone();
    let loop_session = session.clone();

    spawn_local(async move {
        match view_model.run(&loop_session, &page).await {
            Some(PollStep::Complete { .. }) => log::info!("🏁 [STATUS] Poller finished: complete"),
            Some(PollStep::Failed { .. }) => log::info!("🏁 [STATUS] Poller finished: failed"),
            Some(PollStep::Continue { .. }) | None => {
                log::info!("🏁 [STATUS] Poller finished after {} ticks", loop_session.ticks())
            }
        }
    });

    session
}
