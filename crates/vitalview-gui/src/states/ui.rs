use std::time::Instant;

use vitalview_core::config::ReportConfig;
use vitalview_core::report::AnalysisTimer;
use vitalview_core::upload::{AcceptFilter, UploadState, UploadedFile};

/// Top-level views reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Landing,
    Report,
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub page: Page,
    pub upload: UploadState,

    /// Running while the mock analysis "computes". `None` until a scan is selected.
    pub report_timer: Option<AnalysisTimer>,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn new(filter: AcceptFilter) -> Self {
        Self {
            upload: UploadState::new(filter),
            ..Default::default()
        }
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Switch views. Entering the report view with a scan selected remounts
    /// the report, which restarts the analysis delay.
    pub fn navigate(&mut self, page: Page, report: &ReportConfig, now: Instant) {
        if page == Page::Report && self.page != Page::Report && self.upload.is_complete() {
            match self.report_timer {
                Some(ref mut timer) => timer.restart(now),
                None => self.report_timer = Some(AnalysisTimer::start(now, report.delay())),
            }
        }
        self.page = page;
    }

    /// Accept a scan and show the report view with a fresh analysis delay.
    pub fn select_scan(&mut self, file: UploadedFile, report: &ReportConfig, now: Instant) {
        self.add_log(format!("Scan selected: {} ({})", file.name, file.kind));
        self.upload.select(file);
        self.report_timer = Some(AnalysisTimer::start(now, report.delay()));
        self.page = Page::Report;
    }

    /// Back to the upload prompt.
    pub fn clear_scan(&mut self) {
        self.upload.clear();
        self.report_timer = None;
    }

    pub fn report_ready(&self, now: Instant) -> bool {
        self.report_timer.is_some_and(|t| t.is_ready(now))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn report() -> ReportConfig {
        ReportConfig::default()
    }

    #[test]
    fn select_scan_completes_upload_and_starts_timer() {
        let now = Instant::now();
        let mut state = UIState::default();
        state.select_scan(UploadedFile::new("chest.dcm", None), &report(), now);

        assert!(state.upload.is_complete());
        assert_eq!(state.page, Page::Report);
        assert!(!state.report_ready(now));
        assert!(state.report_ready(now + Duration::from_secs(2)));
    }

    #[test]
    fn clear_scan_returns_to_prompt() {
        let now = Instant::now();
        let mut state = UIState::default();
        state.select_scan(UploadedFile::new("chest.dcm", None), &report(), now);
        state.clear_scan();

        assert!(!state.upload.is_complete());
        assert!(state.report_timer.is_none());
        assert!(!state.report_ready(now + Duration::from_secs(10)));
    }

    #[test]
    fn returning_to_report_restarts_delay() {
        let t0 = Instant::now();
        let mut state = UIState::default();
        state.select_scan(UploadedFile::new("chest.png", None), &report(), t0);

        let later = t0 + Duration::from_secs(30);
        assert!(state.report_ready(later));

        state.navigate(Page::Landing, &report(), later);
        state.navigate(Page::Report, &report(), later);
        assert!(!state.report_ready(later));
        assert!(state.report_ready(later + Duration::from_secs(2)));
    }

    #[test]
    fn navigating_without_scan_has_no_timer() {
        let mut state = UIState::default();
        state.navigate(Page::Report, &report(), Instant::now());
        assert_eq!(state.page, Page::Report);
        assert!(state.report_timer.is_none());
    }
}
