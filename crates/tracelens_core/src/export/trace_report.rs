//! Serializable `{nodes, links, metadata}` report of one finished run.
//!
//! # Invariants
//! - Node ids are the decimal form of finding ids.
//! - `group` is the severity string, `input` for input echoes, or `info`.

use crate::generator::mock::Discovery;
use crate::model::finding::Finding;
use crate::model::summary::InvestigationSummary;
use serde::{Deserialize, Serialize};

const GROUP_INPUT: &str = "input";
const GROUP_INFO: &str = "info";

/// Graph node as consumed by visualization front-ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub label: String,
    pub group: String,
    pub source: String,
    pub description: String,
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
}

/// Directed edge between two report nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceLink {
    pub source: String,
    pub target: String,
    pub relationship: String,
    pub strength: f32,
}

/// Risk tier counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLevels {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Run-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceMetadata {
    pub run_id: String,
    pub total_findings: usize,
    pub total_links: usize,
    pub investigation_time_ms: i64,
    pub sources_checked: Vec<String>,
    pub risk_levels: RiskLevels,
}

/// Full report envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceReport {
    pub nodes: Vec<TraceNode>,
    pub links: Vec<TraceLink>,
    pub metadata: TraceMetadata,
}

impl TraceReport {
    /// Builds the report from one result set and its summary.
    pub fn from_results(discovery: &Discovery, summary: &InvestigationSummary) -> Self {
        let counts = summary.severity_counts;
        Self {
            nodes: discovery.findings.iter().map(to_node).collect(),
            links: discovery
                .relationships
                .iter()
                .map(|relationship| TraceLink {
                    source: relationship.from_id.to_string(),
                    target: relationship.to_id.to_string(),
                    relationship: relationship.label.clone(),
                    strength: relationship.strength,
                })
                .collect(),
            metadata: TraceMetadata {
                run_id: summary.run_id.to_string(),
                total_findings: summary.total_findings,
                total_links: summary.total_relationships,
                investigation_time_ms: summary.completed_at_ms,
                sources_checked: summary.sources_checked.clone(),
                risk_levels: RiskLevels {
                    critical: counts.critical,
                    high: counts.high,
                    medium: counts.medium,
                    low: counts.low,
                },
            },
        }
    }
}

fn to_node(finding: &Finding) -> TraceNode {
    let group = match finding.severity {
        Some(severity) => severity.as_str(),
        None if finding.category.is_input() => GROUP_INPUT,
        None => GROUP_INFO,
    };
    TraceNode {
        id: finding.id.to_string(),
        kind: finding.category.as_str().to_string(),
        value: finding.value.clone(),
        label: finding.value.clone(),
        group: group.to_string(),
        source: finding.source.clone(),
        description: finding.description.clone(),
        confidence: finding.confidence,
        url: finding.url.clone(),
    }
}
