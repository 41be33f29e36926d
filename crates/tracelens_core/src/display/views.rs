//! Read-only projections for the findings list, graph and sidebar.

use crate::display::descriptor::{palette_for, CategoryDescriptor, ConfidenceBand, Palette};
use crate::generator::mock::Discovery;
use crate::model::finding::{Finding, FindingCategory, FindingId, Severity};
use crate::model::summary::InvestigationSummary;
use serde::Serialize;

/// One selectable card in the findings list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindingCard {
    pub id: FindingId,
    pub value: String,
    pub description: String,
    pub source: String,
    pub timestamp_ms: i64,
    pub confidence: u8,
    pub confidence_band: ConfidenceBand,
    pub has_url: bool,
    pub descriptor: CategoryDescriptor,
    pub palette: Palette,
    pub selected: bool,
}

/// Non-positional graph node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: FindingId,
    pub label: String,
    pub icon: &'static str,
    pub palette: Palette,
    pub selected: bool,
}

/// Wrapped node layout plus the relationship label legend.
///
/// No coordinates and no drawn edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphView {
    pub nodes: Vec<GraphNode>,
    pub legend: Vec<String>,
}

/// Direction of a connection relative to the selected finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionDirection {
    Outgoing,
    Incoming,
}

/// One relationship touching the selected finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionLine {
    pub label: String,
    pub direction: ConnectionDirection,
    pub strength: f32,
    pub other_id: FindingId,
    /// `None` only if the other endpoint is missing from the result set.
    pub other_value: Option<String>,
}

/// Full attributes of the selected finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindingDetails {
    pub id: FindingId,
    pub value: String,
    pub category: FindingCategory,
    pub descriptor: CategoryDescriptor,
    pub source: String,
    pub description: String,
    pub timestamp_ms: i64,
    pub confidence: u8,
    pub severity: Option<Severity>,
    pub url: Option<String>,
    pub connections: Vec<ConnectionLine>,
}

/// Sidebar content for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SidebarView {
    Details(FindingDetails),
    Summary(InvestigationSummary),
    Intro,
}

/// Projects findings into list cards.
pub fn finding_cards(discovery: &Discovery, selected: Option<FindingId>) -> Vec<FindingCard> {
    discovery
        .findings
        .iter()
        .map(|finding| FindingCard {
            id: finding.id,
            value: finding.value.clone(),
            description: finding.description.clone(),
            source: finding.source.clone(),
            timestamp_ms: finding.timestamp_ms,
            confidence: finding.confidence,
            confidence_band: ConfidenceBand::from_confidence(finding.confidence),
            has_url: finding.url.is_some(),
            descriptor: finding.category.descriptor(),
            palette: palette_for(finding.severity),
            selected: selected == Some(finding.id),
        })
        .collect()
}

/// Projects findings and relationships into the simplified graph.
pub fn graph_view(discovery: &Discovery, selected: Option<FindingId>) -> GraphView {
    GraphView {
        nodes: discovery
            .findings
            .iter()
            .map(|finding| GraphNode {
                id: finding.id,
                label: finding.value.clone(),
                icon: finding.category.descriptor().icon,
                palette: palette_for(finding.severity),
                selected: selected == Some(finding.id),
            })
            .collect(),
        legend: discovery
            .relationships
            .iter()
            .map(|relationship| relationship.label.clone())
            .collect(),
    }
}

/// Builds the details view of one finding, resolving connection endpoints.
pub fn finding_details(discovery: &Discovery, id: FindingId) -> Option<FindingDetails> {
    let finding = discovery.finding(id)?;
    let connections = discovery
        .relationships
        .iter()
        .filter(|relationship| relationship.touches(id))
        .filter_map(|relationship| {
            let other_id = relationship.other_end(id)?;
            let direction = if relationship.from_id == id {
                ConnectionDirection::Outgoing
            } else {
                ConnectionDirection::Incoming
            };
            Some(ConnectionLine {
                label: relationship.label.clone(),
                direction,
                strength: relationship.strength,
                other_id,
                other_value: discovery.finding(other_id).map(|other| other.value.clone()),
            })
        })
        .collect();

    Some(details_from(finding, connections))
}

/// Chooses the sidebar content.
///
/// Selection wins over summary; summary wins over intro text.
pub fn sidebar_view(
    discovery: &Discovery,
    selected: Option<FindingId>,
    summary: Option<&InvestigationSummary>,
) -> SidebarView {
    if let Some(details) = selected.and_then(|id| finding_details(discovery, id)) {
        return SidebarView::Details(details);
    }
    match summary {
        Some(summary) => SidebarView::Summary(summary.clone()),
        None => SidebarView::Intro,
    }
}

fn details_from(finding: &Finding, connections: Vec<ConnectionLine>) -> FindingDetails {
    FindingDetails {
        id: finding.id,
        value: finding.value.clone(),
        category: finding.category,
        descriptor: finding.category.descriptor(),
        source: finding.source.clone(),
        description: finding.description.clone(),
        timestamp_ms: finding.timestamp_ms,
        confidence: finding.confidence,
        severity: finding.severity,
        url: finding.url.clone(),
        connections,
    }
}

#[cfg(test)]
mod tests {
    use super::{finding_details, graph_view, sidebar_view, ConnectionDirection, SidebarView};
    use crate::generator::mock::generate_findings;
    use crate::model::query::InvestigationQuery;

    #[test]
    fn details_resolve_other_endpoint_values() {
        let discovery = generate_findings(&InvestigationQuery::new("alice@example.com", ""), 0);
        let input = finding_details(&discovery, 1).expect("input finding exists");
        assert_eq!(input.connections.len(), 3);
        assert!(input
            .connections
            .iter()
            .all(|line| line.direction == ConnectionDirection::Outgoing));

        let domain = finding_details(&discovery, 4).expect("domain finding exists");
        assert_eq!(domain.connections.len(), 1);
        assert_eq!(domain.connections[0].direction, ConnectionDirection::Incoming);
        assert_eq!(
            domain.connections[0].other_value.as_deref(),
            Some("alice@example.com")
        );
    }

    #[test]
    fn graph_legend_lists_relationship_labels_in_order() {
        let discovery = generate_findings(&InvestigationQuery::new("", "+1 555 0100"), 0);
        let graph = graph_view(&discovery, Some(2));
        assert_eq!(graph.legend, vec!["registered_in", "served_by"]);
        assert_eq!(graph.nodes.iter().filter(|node| node.selected).count(), 1);
    }

    #[test]
    fn sidebar_falls_back_to_intro_without_summary() {
        let discovery = generate_findings(&InvestigationQuery::default(), 0);
        assert_eq!(sidebar_view(&discovery, Some(1), None), SidebarView::Intro);
    }
}
