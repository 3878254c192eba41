//! Mock analysis report and the artificial delay shown before it.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::upload::UploadedFile;

/// Placeholder analysis shown in lieu of a real backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockReport {
    pub title: String,
    pub general_description: String,
    pub detailed_analysis: String,
    pub nodule_size_mm: f32,
    pub density: String,
    pub risk_percent: f32,
}

impl Default for MockReport {
    fn default() -> Self {
        Self {
            title: "Analysis Report".into(),
            general_description: "AI generate General Description".into(),
            detailed_analysis: "AI generate Detailed Analysis".into(),
            nodule_size_mm: 12.4,
            density: "Part-solid".into(),
            risk_percent: 18.0,
        }
    }
}

impl MockReport {
    /// Plain-text rendition for printing or saving.
    pub fn render_text(&self, file: Option<&UploadedFile>) -> String {
        let underline = "=".repeat(self.title.chars().count());
        let mut out = format!("{}\n{underline}\n\n", self.title);
        if let Some(file) = file {
            out.push_str(&format!("Scan:          {} ({})\n\n", file.name, file.kind));
        }
        out.push_str(&format!(
            "{}\n\n  - {}\n\n",
            self.general_description, self.detailed_analysis
        ));
        out.push_str(&format!("Nodule size:   {:.1} mm\n", self.nodule_size_mm));
        out.push_str(&format!("Density:       {}\n", self.density));
        out.push_str(&format!("Risk:          {:.0}%\n", self.risk_percent));
        out
    }
}

/// What the report panel should show at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReportPhase {
    Loading { remaining: Duration },
    Ready,
}

/// Fixed "analysis" delay, restarted on every mount of the report panel.
#[derive(Clone, Copy, Debug)]
pub struct AnalysisTimer {
    started: Instant,
    delay: Duration,
}

impl AnalysisTimer {
    pub fn start(now: Instant, delay: Duration) -> Self {
        Self {
            started: now,
            delay,
        }
    }

    pub fn restart(&mut self, now: Instant) {
        self.started = now;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn phase(&self, now: Instant) -> ReportPhase {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.delay {
            ReportPhase::Ready
        } else {
            ReportPhase::Loading {
                remaining: self.delay - elapsed,
            }
        }
    }

    pub fn is_ready(&self, now: Instant) -> bool {
        self.phase(now) == ReportPhase::Ready
    }

    /// Fraction of the delay elapsed, in [0.0, 1.0].
    pub fn progress(&self, now: Instant) -> f32 {
        if self.delay.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.delay.as_secs_f32()).min(1.0)
    }
}
