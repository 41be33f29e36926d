//! Category and severity display lookups.
//!
//! One enumerated mapping per concern so every view shares the same tokens.
//! Token strings are stable identifiers; the UI maps them to concrete icons
//! and colors.

use crate::model::finding::{FindingCategory, Severity};
use serde::Serialize;

/// Icon and label for one finding category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub icon: &'static str,
    pub label: &'static str,
}

/// Border, background and text tokens for one severity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub border: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

/// Palette for findings that carry no severity.
pub const UNRATED_PALETTE: Palette = Palette {
    border: "gray-300",
    background: "gray-50",
    text: "gray-900",
};

impl FindingCategory {
    /// Display descriptor for this category.
    pub fn descriptor(self) -> CategoryDescriptor {
        let (icon, label) = match self {
            Self::Email => ("mail", "Email"),
            Self::Phone => ("phone", "Phone"),
            Self::Social => ("user", "Social"),
            Self::Breach => ("shield", "Breach"),
            Self::Location => ("map-pin", "Location"),
            Self::Profile => ("eye", "Profile"),
            Self::Domain => ("globe", "Domain"),
            Self::Metadata => ("info", "Metadata"),
        };
        CategoryDescriptor { icon, label }
    }
}

impl Severity {
    /// Display palette for this severity.
    pub fn palette(self) -> Palette {
        match self {
            Self::Critical => Palette {
                border: "purple-500",
                background: "purple-50",
                text: "purple-900",
            },
            Self::High => Palette {
                border: "red-500",
                background: "red-50",
                text: "red-900",
            },
            Self::Medium => Palette {
                border: "yellow-500",
                background: "yellow-50",
                text: "yellow-900",
            },
            Self::Low => Palette {
                border: "green-500",
                background: "green-50",
                text: "green-900",
            },
        }
    }

    /// Capitalized badge text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Palette for an optional severity.
pub fn palette_for(severity: Option<Severity>) -> Palette {
    severity.map_or(UNRATED_PALETTE, Severity::palette)
}

/// Confidence badge bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    /// `>= 90`.
    Strong,
    /// `70..=89`.
    Moderate,
    /// `< 70`.
    Weak,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: u8) -> Self {
        match confidence {
            90.. => Self::Strong,
            70..=89 => Self::Moderate,
            _ => Self::Weak,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{palette_for, ConfidenceBand, UNRATED_PALETTE};
    use crate::model::finding::{FindingCategory, Severity};

    #[test]
    fn every_category_has_distinct_icon() {
        let categories = [
            FindingCategory::Email,
            FindingCategory::Phone,
            FindingCategory::Social,
            FindingCategory::Breach,
            FindingCategory::Location,
            FindingCategory::Profile,
            FindingCategory::Domain,
            FindingCategory::Metadata,
        ];
        let mut icons: Vec<_> = categories.iter().map(|c| c.descriptor().icon).collect();
        icons.sort_unstable();
        icons.dedup();
        assert_eq!(icons.len(), categories.len());
    }

    #[test]
    fn severity_palettes_follow_risk_colors() {
        assert_eq!(Severity::High.palette().border, "red-500");
        assert_eq!(Severity::Critical.palette().border, "purple-500");
        assert_eq!(palette_for(None), UNRATED_PALETTE);
    }

    #[test]
    fn confidence_band_boundaries() {
        assert_eq!(ConfidenceBand::from_confidence(100), ConfidenceBand::Strong);
        assert_eq!(ConfidenceBand::from_confidence(90), ConfidenceBand::Strong);
        assert_eq!(ConfidenceBand::from_confidence(89), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(70), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(69), ConfidenceBand::Weak);
    }
}
