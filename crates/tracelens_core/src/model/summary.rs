//! Aggregate summary of one finished investigation.

use crate::model::finding::{Finding, Relationship, Severity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source name carried by findings that echo user input.
pub const INPUT_SOURCE: &str = "Input";

/// Stable identifier for one investigation submission.
pub type InvestigationId = Uuid;

/// Finding counts per severity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
    /// Findings without a severity (user input echoes).
    pub unrated: usize,
}

impl SeverityCounts {
    fn record(&mut self, severity: Option<Severity>) {
        match severity {
            Some(Severity::Low) => self.low += 1,
            Some(Severity::Medium) => self.medium += 1,
            Some(Severity::High) => self.high += 1,
            Some(Severity::Critical) => self.critical += 1,
            None => self.unrated += 1,
        }
    }

    /// `high + critical`.
    pub fn high_risk(&self) -> usize {
        self.high + self.critical
    }
}

/// Derived aggregate shown when results exist and nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestigationSummary {
    pub run_id: InvestigationId,
    pub total_findings: usize,
    pub total_relationships: usize,
    pub severity_counts: SeverityCounts,
    /// Distinct source names in first-seen order, excluding user input.
    pub sources_checked: Vec<String>,
    /// Unix epoch milliseconds.
    pub completed_at_ms: i64,
}

impl InvestigationSummary {
    /// Builds the summary from one result set.
    pub fn from_results(
        run_id: InvestigationId,
        findings: &[Finding],
        relationships: &[Relationship],
        completed_at_ms: i64,
    ) -> Self {
        let mut severity_counts = SeverityCounts::default();
        let mut sources_checked: Vec<String> = Vec::new();
        for finding in findings {
            severity_counts.record(finding.severity);
            if finding.source != INPUT_SOURCE
                && !sources_checked.iter().any(|known| known == &finding.source)
            {
                sources_checked.push(finding.source.clone());
            }
        }

        Self {
            run_id,
            total_findings: findings.len(),
            total_relationships: relationships.len(),
            severity_counts,
            sources_checked,
            completed_at_ms,
        }
    }

    pub fn high_risk_count(&self) -> usize {
        self.severity_counts.high_risk()
    }
}
