//! Finding and relationship domain model.
//!
//! # Responsibility
//! - Define the canonical records produced by one investigation run.
//! - Provide invariant checks shared by generator, controller and tests.
//!
//! # Invariants
//! - `id` is unique within one run and never reused inside that run.
//! - `confidence` is a display percentage in `0..=100`.
//! - Relationship `strength` is finite and within `0.0..=1.0`.
//! - Relationship endpoints reference findings of the same run.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Per-run finding identifier.
///
/// Assigned by a counter starting at 1 for every generation run.
pub type FindingId = u32;

/// Category of one finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    /// Email address supplied by the user.
    Email,
    /// Phone number supplied by the user.
    Phone,
    /// Social or code-hosting profile.
    Social,
    /// Data breach record.
    Breach,
    /// Geographic guess.
    Location,
    /// Generic person profile.
    Profile,
    /// Domain registration data.
    Domain,
    /// Miscellaneous metadata such as carrier name.
    Metadata,
}

impl FindingCategory {
    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Social => "social",
            Self::Breach => "breach",
            Self::Location => "location",
            Self::Profile => "profile",
            Self::Domain => "domain",
            Self::Metadata => "metadata",
        }
    }

    /// Returns whether findings of this category echo user input.
    pub fn is_input(self) -> bool {
        matches!(self, Self::Email | Self::Phone)
    }
}

/// Qualitative risk bucket used for display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// `high` and `critical` count as high risk in summaries.
    pub fn is_high_risk(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

/// One discovered fact associated with the queried email or phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub id: FindingId,
    /// Serialized as `type` to match the dashboard wire naming.
    #[serde(rename = "type")]
    pub category: FindingCategory,
    pub value: String,
    /// Descriptive source name. Never a real integration.
    pub source: String,
    /// Unix epoch milliseconds.
    pub timestamp_ms: i64,
    pub description: String,
    pub severity: Option<Severity>,
    pub url: Option<String>,
    /// Display percentage in `0..=100`.
    pub confidence: u8,
}

impl Finding {
    /// Checks per-record invariants.
    pub fn validate(&self) -> Result<(), FindingValidationError> {
        if self.id == 0 {
            return Err(FindingValidationError::ZeroId);
        }
        if self.confidence > 100 {
            return Err(FindingValidationError::ConfidenceOutOfRange {
                id: self.id,
                confidence: self.confidence,
            });
        }
        Ok(())
    }
}

/// Directed, weighted association between two findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub from_id: FindingId,
    pub to_id: FindingId,
    pub label: String,
    /// Weight in `0.0..=1.0`.
    pub strength: f32,
}

impl Relationship {
    /// Returns whether `id` is either endpoint.
    pub fn touches(&self, id: FindingId) -> bool {
        self.from_id == id || self.to_id == id
    }

    /// Returns the endpoint opposite to `id`, if `id` is an endpoint.
    pub fn other_end(&self, id: FindingId) -> Option<FindingId> {
        if self.from_id == id {
            Some(self.to_id)
        } else if self.to_id == id {
            Some(self.from_id)
        } else {
            None
        }
    }

    /// Checks per-record invariants.
    pub fn validate(&self) -> Result<(), FindingValidationError> {
        if !self.strength.is_finite() || !(0.0..=1.0).contains(&self.strength) {
            return Err(FindingValidationError::StrengthOutOfRange {
                from_id: self.from_id,
                to_id: self.to_id,
            });
        }
        Ok(())
    }
}

/// Validates one finding set and its relationships together.
///
/// # Errors
/// - Any per-record violation.
/// - Duplicate finding ids.
/// - A relationship endpoint missing from `findings`.
pub fn validate_graph(
    findings: &[Finding],
    relationships: &[Relationship],
) -> Result<(), FindingValidationError> {
    let mut ids = HashSet::with_capacity(findings.len());
    for finding in findings {
        finding.validate()?;
        if !ids.insert(finding.id) {
            return Err(FindingValidationError::DuplicateId(finding.id));
        }
    }

    for relationship in relationships {
        relationship.validate()?;
        for endpoint in [relationship.from_id, relationship.to_id] {
            if !ids.contains(&endpoint) {
                return Err(FindingValidationError::DanglingEndpoint(endpoint));
            }
        }
    }
    Ok(())
}

/// Model invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingValidationError {
    ZeroId,
    DuplicateId(FindingId),
    ConfidenceOutOfRange { id: FindingId, confidence: u8 },
    StrengthOutOfRange { from_id: FindingId, to_id: FindingId },
    DanglingEndpoint(FindingId),
}

impl Display for FindingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroId => write!(f, "finding id must be >= 1"),
            Self::DuplicateId(id) => write!(f, "duplicate finding id: {id}"),
            Self::ConfidenceOutOfRange { id, confidence } => {
                write!(f, "finding {id} confidence ({confidence}) must be <= 100")
            }
            Self::StrengthOutOfRange { from_id, to_id } => write!(
                f,
                "relationship {from_id}->{to_id} strength must be within 0.0..=1.0"
            ),
            Self::DanglingEndpoint(id) => {
                write!(f, "relationship endpoint does not exist: {id}")
            }
        }
    }
}

impl Error for FindingValidationError {}
