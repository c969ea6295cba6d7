//! Rule kind definitions.

use std::fmt;

/// RuleKind represents the matching semantics of a single domain rule.
///
/// Tag values mirror the `Domain.Type` enum of the GeoSite catalog schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Plain substring matching
    Plain,
    /// Regular expression matching
    Regex,
    /// Root domain (suffix) matching
    RootDomain,
    /// Full (exact) domain matching
    Full,
    /// Any tag outside the known set, with the raw tag preserved
    Unrecognized(u64),
}

impl RuleKind {
    /// Convert from a wire tag. Unknown tags are preserved, never rejected.
    pub fn from_tag(tag: u64) -> Self {
        match tag {
            0 => RuleKind::Plain,
            1 => RuleKind::Regex,
            2 => RuleKind::RootDomain,
            3 => RuleKind::Full,
            other => RuleKind::Unrecognized(other),
        }
    }

    /// The directive prefix used in emitted `.list` lines.
    ///
    /// Unrecognized kinds map to the empty prefix, producing `:<value>`
    /// lines rather than aborting the run.
    pub fn directive(&self) -> &'static str {
        match self {
            RuleKind::Plain => "DOMAIN-KEYWORD",
            RuleKind::RootDomain => "DOMAIN-SUFFIX",
            RuleKind::Regex => "DOMAIN-REGEX",
            RuleKind::Full => "DOMAIN",
            RuleKind::Unrecognized(_) => "",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Unrecognized(tag) => write!(f, "UNRECOGNIZED({})", tag),
            known => write!(f, "{}", known.directive()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_from_tag() {
        assert_eq!(RuleKind::from_tag(0), RuleKind::Plain);
        assert_eq!(RuleKind::from_tag(1), RuleKind::Regex);
        assert_eq!(RuleKind::from_tag(2), RuleKind::RootDomain);
        assert_eq!(RuleKind::from_tag(3), RuleKind::Full);
        assert_eq!(RuleKind::from_tag(4), RuleKind::Unrecognized(4));
        assert_eq!(RuleKind::from_tag(99), RuleKind::Unrecognized(99));
    }

    #[test]
    fn test_directive_mapping() {
        assert_eq!(RuleKind::Plain.directive(), "DOMAIN-KEYWORD");
        assert_eq!(RuleKind::RootDomain.directive(), "DOMAIN-SUFFIX");
        assert_eq!(RuleKind::Regex.directive(), "DOMAIN-REGEX");
        assert_eq!(RuleKind::Full.directive(), "DOMAIN");
        assert_eq!(RuleKind::Unrecognized(7).directive(), "");
    }
}
