//! Static ethical-use guidelines shown before the first investigation.

/// One titled block of guideline bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidelineSection {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const GUIDELINES_TITLE: &str = "Ethical OSINT Guidelines";
pub const GUIDELINES_FOOTER: &str =
    "This tool is for educational demonstration purposes only";

const GUIDELINE_SECTIONS: &[GuidelineSection] = &[
    GuidelineSection {
        title: "Legitimate Use Cases",
        items: &[
            "Security research and vulnerability assessment",
            "Digital forensics and incident response",
            "Corporate security auditing (with authorization)",
            "Educational and training purposes",
        ],
    },
    GuidelineSection {
        title: "Prohibited Activities",
        items: &[
            "Stalking, harassment, or invasion of privacy",
            "Unauthorized access to systems or accounts",
            "Malicious use against individuals without consent",
            "Violating terms of service or applicable laws",
        ],
    },
    GuidelineSection {
        title: "Legal & Ethical Requirements",
        items: &[
            "Obtain proper authorization before investigating",
            "Respect privacy rights and data protection laws",
            "Use information responsibly and securely",
            "Report findings through appropriate channels",
        ],
    },
];

/// Sidebar text shown before any investigation completes.
pub const INTRO_TEXT: &str = "Open Source Intelligence (OSINT) involves collecting and \
analyzing publicly available information from various sources. Always ensure you have \
proper authorization and follow ethical guidelines when conducting OSINT research.";

pub fn guideline_sections() -> &'static [GuidelineSection] {
    GUIDELINE_SECTIONS
}

/// Renders the guidelines as plain text, one bullet per line.
pub fn render_guidelines() -> String {
    let mut out = String::from(GUIDELINES_TITLE);
    out.push('\n');
    for section in GUIDELINE_SECTIONS {
        out.push('\n');
        out.push_str(section.title);
        out.push('\n');
        for item in section.items {
            out.push_str("  - ");
            out.push_str(item);
            out.push('\n');
        }
    }
    out.push('\n');
    out.push_str(GUIDELINES_FOOTER);
    out
}

#[cfg(test)]
mod tests {
    use super::{guideline_sections, render_guidelines};

    #[test]
    fn rendered_text_contains_every_item() {
        let text = render_guidelines();
        for section in guideline_sections() {
            assert!(text.contains(section.title));
            for item in section.items {
                assert!(text.contains(item));
            }
        }
    }
}
