//! Plain-text rendering of dashboard views.

use std::fmt::Write as _;
use tracelens_core::catalog::guidelines::INTRO_TEXT;
use tracelens_core::{
    sources_for, ConnectionDirection, FindingCard, FindingDetails, GraphView, InvestigationQuery,
    InvestigationSummary, SidebarView,
};

/// "Checking sources..." block printed while the simulated delay runs.
pub fn render_loading(query: &InvestigationQuery) -> String {
    let mut out = String::from("Analyzing sources...\n");
    for entry in sources_for(query) {
        let _ = writeln!(out, "  * {}", entry.name);
    }
    out
}

pub fn render_results(cards: &[FindingCard], graph: &GraphView, sidebar: &SidebarView) -> String {
    let mut out = String::new();
    render_cards(&mut out, cards);
    out.push('\n');
    render_legend(&mut out, graph);
    out.push('\n');
    render_sidebar(&mut out, sidebar);
    out
}

fn render_cards(out: &mut String, cards: &[FindingCard]) {
    out.push_str("Discovered Data Points\n");
    for card in cards {
        let marker = if card.selected { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker}[{}] {:<8} {}  ({}, {}% confidence, {})",
            card.id,
            card.descriptor.icon,
            card.value,
            card.source,
            card.confidence,
            card.confidence_band.as_str()
        );
        let _ = writeln!(out, "      {}", card.description);
    }
}

fn render_legend(out: &mut String, graph: &GraphView) {
    let _ = writeln!(out, "Network Connections: {}", graph.legend.join(", "));
}

fn render_sidebar(out: &mut String, sidebar: &SidebarView) {
    match sidebar {
        SidebarView::Details(details) => render_details(out, details),
        SidebarView::Summary(summary) => render_summary(out, summary),
        SidebarView::Intro => {
            let _ = writeln!(out, "About OSINT\n  {INTRO_TEXT}");
        }
    }
}

fn render_details(out: &mut String, details: &FindingDetails) {
    let _ = writeln!(out, "Data Point Details");
    let _ = writeln!(out, "  Value:       {}", details.value);
    let _ = writeln!(out, "  Category:    {}", details.descriptor.label);
    let _ = writeln!(out, "  Source:      {}", details.source);
    let _ = writeln!(out, "  Description: {}", details.description);
    let _ = writeln!(out, "  Timestamp:   {} (epoch ms)", details.timestamp_ms);
    let _ = writeln!(out, "  Confidence:  {}%", details.confidence);
    if let Some(severity) = details.severity {
        let _ = writeln!(out, "  Risk Level:  {}", severity.label());
    }
    if let Some(url) = details.url.as_deref() {
        let _ = writeln!(out, "  Source URL:  {url}");
    }
    let _ = writeln!(out, "  Related Connections:");
    for line in &details.connections {
        let arrow = match line.direction {
            ConnectionDirection::Outgoing => "->",
            ConnectionDirection::Incoming => "<-",
        };
        let _ = writeln!(
            out,
            "    {arrow} {} {}",
            line.label,
            line.other_value.as_deref().unwrap_or("?")
        );
    }
}

fn render_summary(out: &mut String, summary: &InvestigationSummary) {
    let counts = summary.severity_counts;
    let _ = writeln!(out, "Investigation Summary ({})", summary.run_id);
    let _ = writeln!(out, "  Data Points:  {}", summary.total_findings);
    let _ = writeln!(out, "  Connections:  {}", summary.total_relationships);
    let _ = writeln!(out, "  High Risk:    {}", summary.high_risk_count());
    let _ = writeln!(
        out,
        "  Distribution: critical={} high={} medium={} low={}",
        counts.critical, counts.high, counts.medium, counts.low
    );
    let _ = writeln!(out, "  Sources Checked:");
    for source in &summary.sources_checked {
        let _ = writeln!(out, "    - {source}");
    }
    let _ = writeln!(out, "  Completed at {} (epoch ms)", summary.completed_at_ms);
}
