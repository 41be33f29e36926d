//! Simulated source catalog shown while an investigation is loading.

use crate::model::query::InvestigationQuery;

/// Query field a simulated source consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceInput {
    Email,
    Phone,
}

/// One simulated source entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceEntry {
    pub name: &'static str,
    pub input: SourceInput,
}

const SOURCE_CATALOG: &[SourceEntry] = &[
    SourceEntry {
        name: "HaveIBeenPwned API",
        input: SourceInput::Email,
    },
    SourceEntry {
        name: "GitHub Public Profiles",
        input: SourceInput::Email,
    },
    SourceEntry {
        name: "WHOIS Database",
        input: SourceInput::Email,
    },
    SourceEntry {
        name: "Phone Carrier Lookup",
        input: SourceInput::Phone,
    },
];

/// Returns every catalog entry in display order.
pub fn source_catalog() -> &'static [SourceEntry] {
    SOURCE_CATALOG
}

/// Returns catalog entries whose input field is present in `query`.
pub fn sources_for(query: &InvestigationQuery) -> Vec<SourceEntry> {
    SOURCE_CATALOG
        .iter()
        .copied()
        .filter(|entry| match entry.input {
            SourceInput::Email => query.has_email(),
            SourceInput::Phone => query.has_phone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{source_catalog, sources_for};
    use crate::model::query::InvestigationQuery;

    #[test]
    fn filters_by_present_fields() {
        assert_eq!(sources_for(&InvestigationQuery::new("a@b.c", "")).len(), 3);
        let phone_only = sources_for(&InvestigationQuery::new("", "+15550000000"));
        assert_eq!(phone_only.len(), 1);
        assert_eq!(phone_only[0].name, "Phone Carrier Lookup");
        assert!(sources_for(&InvestigationQuery::default()).is_empty());
        assert_eq!(
            sources_for(&InvestigationQuery::new("a@b.c", "1")).len(),
            source_catalog().len()
        );
    }
}
