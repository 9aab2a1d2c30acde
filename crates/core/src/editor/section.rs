//! Editor sections and deep-link parsing.

use servdesk_domain::impl_domain_status_conversions;

/// The section the editor currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorSection {
    #[default]
    Overview,
    BusinessHours,
    PriorityRules,
    Escalation,
    CustomRules,
    Holidays,
}

impl_domain_status_conversions!(EditorSection {
    Overview => "overview",
    BusinessHours => "business_hours",
    PriorityRules => "priority_rules",
    Escalation => "escalation",
    CustomRules => "custom_rules",
    Holidays => "holidays",
});

impl EditorSection {
    /// Parse a deep-link token. Links use hyphens (`business-hours`) while the
    /// canonical form uses underscores; both are accepted.
    pub fn from_deep_link(token: &str) -> Option<Self> {
        token.replace('-', "_").parse().ok()
    }

    /// Hyphenated form for building links.
    pub fn deep_link(&self) -> String {
        self.as_str().replace('_', "-")
    }
}
