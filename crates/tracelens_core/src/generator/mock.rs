//! Deterministic mock finding generator.
//!
//! # Responsibility
//! - Map one query into a fixed set of simulated findings and links.
//!
//! # Invariants
//! - Output depends only on which fields are non-empty, the literal input
//!   values and the supplied clock reading.
//! - Ids start at 1 and increase by one per emitted finding.
//! - Every relationship goes from an input finding to a derived finding.

use crate::model::finding::{Finding, FindingCategory, FindingId, Relationship, Severity};
use crate::model::query::InvestigationQuery;
use crate::model::summary::INPUT_SOURCE;

/// 2019-01-07T00:00:00Z, publication date of the simulated breach record.
pub const BREACH_PUBLISHED_AT_MS: i64 = 1_546_819_200_000;
/// Domain used when an email carries no `@`.
pub const UNKNOWN_DOMAIN: &str = "unknown.com";

pub const REL_COMPROMISED_IN: &str = "compromised_in";
pub const REL_ASSOCIATED_WITH: &str = "associated_with";
pub const REL_BELONGS_TO_DOMAIN: &str = "belongs_to_domain";
pub const REL_REGISTERED_IN: &str = "registered_in";
pub const REL_SERVED_BY: &str = "served_by";

/// Findings plus relationships produced by one generation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discovery {
    pub findings: Vec<Finding>,
    pub relationships: Vec<Relationship>,
}

impl Discovery {
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Looks up one finding by id.
    pub fn finding(&self, id: FindingId) -> Option<&Finding> {
        self.findings.iter().find(|finding| finding.id == id)
    }
}

/// Derived finding template emitted for one input branch.
struct Template {
    category: FindingCategory,
    value: String,
    source: &'static str,
    timestamp_ms: Option<i64>,
    description: String,
    severity: Severity,
    url: Option<&'static str>,
    confidence: u8,
    relation: &'static str,
    strength: f32,
}

/// Accumulates findings with a per-run id counter.
struct DiscoveryBuilder {
    next_id: FindingId,
    now_ms: i64,
    out: Discovery,
}

impl DiscoveryBuilder {
    fn new(now_ms: i64) -> Self {
        Self {
            next_id: 1,
            now_ms,
            out: Discovery::default(),
        }
    }

    fn push_input(
        &mut self,
        category: FindingCategory,
        value: &str,
        description: &str,
    ) -> FindingId {
        self.push(Finding {
            id: 0,
            category,
            value: value.to_string(),
            source: INPUT_SOURCE.to_string(),
            timestamp_ms: self.now_ms,
            description: description.to_string(),
            severity: None,
            url: None,
            confidence: 100,
        })
    }

    fn push_derived(&mut self, input_id: FindingId, template: Template) {
        let id = self.push(Finding {
            id: 0,
            category: template.category,
            value: template.value,
            source: template.source.to_string(),
            timestamp_ms: template.timestamp_ms.unwrap_or(self.now_ms),
            description: template.description,
            severity: Some(template.severity),
            url: template.url.map(str::to_string),
            confidence: template.confidence,
        });
        self.out.relationships.push(Relationship {
            from_id: input_id,
            to_id: id,
            label: template.relation.to_string(),
            strength: template.strength,
        });
    }

    fn push(&mut self, mut finding: Finding) -> FindingId {
        let id = self.next_id;
        self.next_id += 1;
        finding.id = id;
        self.out.findings.push(finding);
        id
    }
}

/// Generates simulated findings for `query`.
///
/// Fields are trimmed first; blank fields skip their branch, so a fully blank
/// query yields an empty [`Discovery`]. `now_ms` stamps every finding that
/// has no fixed historical timestamp.
pub fn generate_findings(query: &InvestigationQuery, now_ms: i64) -> Discovery {
    let query = query.normalized();
    let mut builder = DiscoveryBuilder::new(now_ms);

    if !query.email.is_empty() {
        push_email_branch(&mut builder, query.email.as_str());
    }
    if !query.phone.is_empty() {
        push_phone_branch(&mut builder, query.phone.as_str());
    }

    builder.out
}

/// Returns the substring after the first `@`, or [`UNKNOWN_DOMAIN`].
pub fn email_domain(email: &str) -> &str {
    email
        .split_once('@')
        .map(|(_, domain)| domain)
        .unwrap_or(UNKNOWN_DOMAIN)
}

fn push_email_branch(builder: &mut DiscoveryBuilder, email: &str) {
    let input_id = builder.push_input(
        FindingCategory::Email,
        email,
        "Primary email address under investigation",
    );

    builder.push_derived(
        input_id,
        Template {
            category: FindingCategory::Breach,
            value: "Collection #1 (2019)".to_string(),
            source: "HaveIBeenPwned API",
            timestamp_ms: Some(BREACH_PUBLISHED_AT_MS),
            description: "Email found in major data breach compilation".to_string(),
            severity: Severity::High,
            url: Some("https://haveibeenpwned.com/"),
            confidence: 95,
            relation: REL_COMPROMISED_IN,
            strength: 0.9,
        },
    );

    builder.push_derived(
        input_id,
        Template {
            category: FindingCategory::Social,
            value: "@user_handle".to_string(),
            source: "GitHub Public API",
            timestamp_ms: None,
            description: "Associated GitHub profile with public repositories".to_string(),
            severity: Severity::Low,
            url: Some("https://github.com/"),
            confidence: 80,
            relation: REL_ASSOCIATED_WITH,
            strength: 0.7,
        },
    );

    let domain = email_domain(email);
    builder.push_derived(
        input_id,
        Template {
            category: FindingCategory::Domain,
            value: domain.to_string(),
            source: "WHOIS Lookup",
            timestamp_ms: None,
            description: format!("Domain registration and DNS information for {domain}"),
            severity: Severity::Medium,
            url: None,
            confidence: 90,
            relation: REL_BELONGS_TO_DOMAIN,
            strength: 1.0,
        },
    );
}

fn push_phone_branch(builder: &mut DiscoveryBuilder, phone: &str) {
    let input_id = builder.push_input(
        FindingCategory::Phone,
        phone,
        "Phone number under investigation",
    );

    builder.push_derived(
        input_id,
        Template {
            category: FindingCategory::Location,
            value: "United States - California".to_string(),
            source: "Carrier Database Lookup",
            timestamp_ms: None,
            description: "Geographic region based on area code analysis".to_string(),
            severity: Severity::Medium,
            url: None,
            confidence: 85,
            relation: REL_REGISTERED_IN,
            strength: 0.8,
        },
    );

    builder.push_derived(
        input_id,
        Template {
            category: FindingCategory::Metadata,
            value: "Verizon Wireless".to_string(),
            source: "Phone Number Analysis",
            timestamp_ms: None,
            description: "Mobile carrier identification".to_string(),
            severity: Severity::Low,
            url: None,
            confidence: 92,
            relation: REL_SERVED_BY,
            strength: 0.9,
        },
    );
}
