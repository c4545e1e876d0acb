// ============================================================================
// STATUS VIEWMODEL - Analysis status poll loop
// ============================================================================
// Sequential: wait, request, handle, repeat. A slow response delays the next
// tick instead of overlapping it.
// ============================================================================

use crate::config::CONFIG;
use crate::error::ClientError;
use crate::models::PollStep;
use crate::services::AnalyzerApi;
use crate::state::PollSession;
use crate::utils::ANALYSIS_FAILED_MESSAGE;
use crate::viewmodels::{report_error, PageEffects};

pub struct StatusViewModel<A> {
    api: A,
    interval_ms: u32,
    failed_redirect_delay_ms: u32,
}

impl<A: AnalyzerApi> StatusViewModel<A> {
    pub fn new(api: A) -> Self {
        Self::with_timing(api, CONFIG.poll_interval_ms, CONFIG.failed_redirect_delay_ms)
    }

    pub fn with_timing(api: A, interval_ms: u32, failed_redirect_delay_ms: u32) -> Self {
        Self {
            api,
            interval_ms,
            failed_redirect_delay_ms,
        }
    }

    /// Polls until a terminal status arrives or `session` is stopped.
    /// Returns the terminal step, or `None` if stopped from outside.
    pub async fn run<P: PageEffects>(&self, session: &PollSession, page: &P) -> Option<PollStep> {
        log::info!("⏰ [STATUS] Polling every {} ms", self.interval_ms);

        loop {
            page.sleep(self.interval_ms).await;
            if !session.is_active() {
                log::info!("🛑 [STATUS] Session stopped, leaving poll loop");
                return None;
            }

            let tick = session.record_tick();
            let step = match self.api.fetch_status().await {
                Ok(report) => report.step(),
                Err(error) => {
                    log::warn!("⚠️ [STATUS] Tick {} failed: {}", tick, error);
                    continue;
                }
            };

            if self.apply(&step, session, page).await {
                return Some(step);
            }
        }
    }

    /// Applies one step to the page. Returns `true` for terminal steps.
    pub async fn apply<P: PageEffects>(&self, step: &PollStep, session: &PollSession, page: &P) -> bool {
        match step {
            PollStep::Continue { progress } => {
                if let Some(percent) = *progress {
                    session.record_progress(percent);
                    page.set_progress(percent);
                }
                false
            }
            PollStep::Complete { redirect } => {
                session.stop();
                log::info!("✅ [STATUS] Analysis complete");
                navigate_or_warn(page, redirect.as_deref());
                true
            }
            PollStep::Failed { redirect } => {
                session.stop();
                report_error(ClientError::AnalysisFailed, page, ANALYSIS_FAILED_MESSAGE);
                page.sleep(self.failed_redirect_delay_ms).await;
                navigate_or_warn(page, redirect.as_deref());
                true
            }
        }
    }
}

fn navigate_or_warn<P: PageEffects>(page: &P, redirect: Option<&str>) {
    match redirect.filter(|url| !url.is_empty()) {
        Some(url) => page.navigate(url),
        None => log::warn!("⚠️ [STATUS] Terminal status without redirect, staying on page"),
    }
}
