use std::collections::HashSet;
use tracelens_core::{
    generate_findings, validate_graph, FindingCategory, InvestigationQuery, Severity,
};

const NOW_MS: i64 = 1_760_000_000_000;

#[test]
fn empty_query_yields_empty_lists() {
    let discovery = generate_findings(&InvestigationQuery::new("", ""), NOW_MS);
    assert!(discovery.findings.is_empty());
    assert!(discovery.relationships.is_empty());
}

#[test]
fn email_only_yields_four_findings_and_three_links_from_input() {
    let discovery = generate_findings(&InvestigationQuery::new("bob@corp.example", ""), NOW_MS);

    let categories: Vec<_> = discovery.findings.iter().map(|f| f.category).collect();
    assert_eq!(
        categories,
        vec![
            FindingCategory::Email,
            FindingCategory::Breach,
            FindingCategory::Social,
            FindingCategory::Domain,
        ]
    );
    assert_eq!(discovery.relationships.len(), 3);

    let input_id = discovery.findings[0].id;
    assert!(discovery
        .relationships
        .iter()
        .all(|relationship| relationship.from_id == input_id));
}

#[test]
fn phone_only_yields_three_findings_and_two_links() {
    let discovery = generate_findings(&InvestigationQuery::new("", "+1 (555) 123-4567"), NOW_MS);

    assert_eq!(discovery.findings.len(), 3);
    assert_eq!(discovery.relationships.len(), 2);
    assert_eq!(discovery.findings[0].category, FindingCategory::Phone);
    assert_eq!(discovery.findings[0].value, "+1 (555) 123-4567");
    assert_eq!(discovery.findings[1].value, "United States - California");
    assert_eq!(discovery.findings[2].value, "Verizon Wireless");

    let labels: Vec<_> = discovery
        .relationships
        .iter()
        .map(|relationship| relationship.label.as_str())
        .collect();
    assert_eq!(labels, vec!["registered_in", "served_by"]);
}

#[test]
fn both_fields_sum_counts_with_disjoint_ids() {
    let email = generate_findings(&InvestigationQuery::new("a@b.io", ""), NOW_MS);
    let phone = generate_findings(&InvestigationQuery::new("", "5550100"), NOW_MS);
    let both = generate_findings(&InvestigationQuery::new("a@b.io", "5550100"), NOW_MS);

    assert_eq!(both.findings.len(), email.findings.len() + phone.findings.len());
    assert_eq!(
        both.relationships.len(),
        email.relationships.len() + phone.relationships.len()
    );

    let ids: HashSet<_> = both.findings.iter().map(|finding| finding.id).collect();
    assert_eq!(ids.len(), both.findings.len());
    let expected: Vec<u32> = (1..=7).collect();
    let actual: Vec<u32> = both.findings.iter().map(|finding| finding.id).collect();
    assert_eq!(actual, expected);

    let phone_input = both
        .findings
        .iter()
        .find(|finding| finding.category == FindingCategory::Phone)
        .expect("phone input finding");
    assert_eq!(phone_input.id, 5);
    let phone_links = both
        .relationships
        .iter()
        .filter(|relationship| relationship.from_id == phone_input.id)
        .count();
    assert_eq!(phone_links, 2);
}

#[test]
fn every_relationship_resolves_to_existing_findings() {
    for query in [
        InvestigationQuery::new("x@y.z", ""),
        InvestigationQuery::new("", "+44 20 7946 0958"),
        InvestigationQuery::new("x@y.z", "+44 20 7946 0958"),
    ] {
        let discovery = generate_findings(&query, NOW_MS);
        validate_graph(&discovery.findings, &discovery.relationships)
            .expect("generator output must satisfy graph invariants");
    }
}

#[test]
fn alice_scenario_produces_domain_finding() {
    let discovery = generate_findings(&InvestigationQuery::new("alice@example.com", ""), NOW_MS);

    let domain = discovery
        .findings
        .iter()
        .find(|finding| finding.category == FindingCategory::Domain)
        .expect("domain finding");
    assert_eq!(domain.value, "example.com");
    assert_eq!(domain.confidence, 90);
    assert_eq!(domain.severity, Some(Severity::Medium));
    assert_eq!(
        domain.description,
        "Domain registration and DNS information for example.com"
    );

    let link = discovery
        .relationships
        .iter()
        .find(|relationship| relationship.to_id == domain.id)
        .expect("domain link");
    assert_eq!(link.label, "belongs_to_domain");
    assert_eq!(link.strength, 1.0);
    assert_eq!(link.from_id, discovery.findings[0].id);
    assert_eq!(discovery.findings[0].value, "alice@example.com");
}

#[test]
fn breach_finding_keeps_historical_timestamp_and_url() {
    let discovery = generate_findings(&InvestigationQuery::new("alice@example.com", ""), NOW_MS);
    let breach = &discovery.findings[1];

    assert_eq!(breach.category, FindingCategory::Breach);
    assert_eq!(breach.timestamp_ms, 1_546_819_200_000);
    assert_eq!(breach.url.as_deref(), Some("https://haveibeenpwned.com/"));
    assert_eq!(breach.severity, Some(Severity::High));
    assert_eq!(discovery.findings[2].timestamp_ms, NOW_MS);
}
