use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /status`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatusReport {
    #[serde(default)]
    pub status: String,
    /// Only numeric values count as progress.
    #[serde(default)]
    pub progress: Option<Value>,
    #[serde(default)]
    pub redirect: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisStatus {
    Complete,
    Failed,
    /// Any other value: still running.
    Running(String),
}

impl From<&str> for AnalysisStatus {
    fn from(value: &str) -> Self {
        match value {
            "complete" => AnalysisStatus::Complete,
            "failed" => AnalysisStatus::Failed,
            other => AnalysisStatus::Running(other.to_string()),
        }
    }
}

/// What the poller does with one report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollStep {
    Continue { progress: Option<u8> },
    Complete { redirect: Option<String> },
    Failed { redirect: Option<String> },
}

impl PollStep {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollStep::Continue { .. })
    }
}

impl StatusReport {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn analysis_status(&self) -> AnalysisStatus {
        AnalysisStatus::from(self.status.as_str())
    }

    /// Progress as a whole percentage, clamped to 0..=100.
    pub fn progress_percent(&self) -> Option<u8> {
        let value = self.progress.as_ref()?.as_f64()?;
        if !value.is_finite() {
            return None;
        }
        Some(value.round().clamp(0.0, 100.0) as u8)
    }

    pub fn step(&self) -> PollStep {
        match self.analysis_status() {
            AnalysisStatus::Complete => PollStep::Complete {
                redirect: self.redirect.clone(),
            },
            AnalysisStatus::Failed => PollStep::Failed {
                redirect: self.redirect.clone(),
            },
            AnalysisStatus::Running(_) => PollStep::Continue {
                progress: self.progress_percent(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_report_continues_with_progress() {
        let report = StatusReport::parse(r#"{"status":"running","progress":42}"#).unwrap();
        assert_eq!(report.step(), PollStep::Continue { progress: Some(42) });
        assert!(!report.step().is_terminal());
    }

    #[test]
    fn complete_report_carries_redirect() {
        let report = StatusReport::parse(r#"{"status":"complete","redirect":"/results/7"}"#).unwrap();
        assert_eq!(
            report.step(),
            PollStep::Complete {
                redirect: Some("/results/7".to_string())
            }
        );
    }

    #[test]
    fn failed_report_is_terminal() {
        let report = StatusReport::parse(r#"{"status":"failed","redirect":"/upload"}"#).unwrap();
        assert!(report.step().is_terminal());
        assert_eq!(report.analysis_status(), AnalysisStatus::Failed);
    }

    #[test]
    fn unknown_status_means_still_running() {
        let report = StatusReport::parse(r#"{"status":"queued"}"#).unwrap();
        assert_eq!(report.analysis_status(), AnalysisStatus::Running("queued".into()));
        assert_eq!(report.step(), PollStep::Continue { progress: None });
    }

    #[test]
    fn non_numeric_progress_is_ignored() {
        let report = StatusReport::parse(r#"{"status":"running","progress":"42"}"#).unwrap();
        assert_eq!(report.progress_percent(), None);
    }

    #[test]
    fn progress_is_rounded_and_clamped() {
        let over = StatusReport::parse(r#"{"status":"running","progress":130}"#).unwrap();
        let fractional = StatusReport::parse(r#"{"status":"running","progress":12.6}"#).unwrap();
        let negative = StatusReport::parse(r#"{"status":"running","progress":-3}"#).unwrap();
        assert_eq!(over.progress_percent(), Some(100));
        assert_eq!(fractional.progress_percent(), Some(13));
        assert_eq!(negative.progress_percent(), Some(0));
    }

    #[test]
    fn zero_progress_is_still_progress() {
        let report = StatusReport::parse(r#"{"status":"running","progress":0}"#).unwrap();
        assert_eq!(report.progress_percent(), Some(0));
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(StatusReport::parse("<html>502 Bad Gateway</html>").is_err());
    }
}
