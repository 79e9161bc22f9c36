//! Category pools for seed derivation.
//!
//! Pool contents and ordering are compatibility-critical: every published
//! seed was derived by indexing into these exact sequences, so any edit is
//! a break with previously derived cases. The tests pin the sizes.

use casefile_common::Gender;

pub const LOCATIONS: &[&str] = &[
    "bank",
    "museum",
    "data center",
    "corporate office",
    "university lab",
    "hospital",
    "airport terminal",
];

pub const TARGETS: &[&str] = &[
    "ledger",
    "artifact",
    "prototype",
    "research dossier",
    "encryption key",
    "archives",
    "blueprints",
];

pub const INCIDENT_TYPES: &[&str] = &[
    "went missing",
    "was tampered with",
    "was exfiltrated",
    "was replaced",
    "was sabotaged",
];

pub const TIME_CONTEXTS: &[&str] = &[
    "on audit eve",
    "during a gala night",
    "during maintenance hours",
    "right before opening",
    "overnight",
];

pub const ROLES: &[&str] = &[
    "CFO",
    "IT Administrator",
    "Security Guard",
    "Curator",
    "Compliance Officer",
    "Finance Intern",
    "Research Lead",
];

/// Gender draw pool. `Gender::O` exists on the wire but is never drawn.
pub const GENDER_DRAW: &[Gender] = &[Gender::M, Gender::F];

pub const TRAITS: &[&str] = &[
    "measured and formal",
    "risk-averse and reputation-conscious",
    "technically precise and procedural",
    "defensive about best practices",
    "eager to please",
    "admits uncertainty rather than risk being wrong",
];

pub const MANNERISMS: &[&str] = &[
    "speaks in concise, polished statements",
    "rarely uses contractions",
    "uses technical jargon and references logs",
    "corrects small inaccuracies",
    "uses filler like 'um' and 'I think'",
    "apologizes when challenged",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_sizes_are_pinned() {
        assert_eq!(LOCATIONS.len(), 7);
        assert_eq!(TARGETS.len(), 7);
        assert_eq!(INCIDENT_TYPES.len(), 5);
        assert_eq!(TIME_CONTEXTS.len(), 5);
        assert_eq!(ROLES.len(), 7);
        assert_eq!(GENDER_DRAW.len(), 2);
        assert_eq!(TRAITS.len(), 6);
        assert_eq!(MANNERISMS.len(), 6);
    }

    #[test]
    fn test_pools_have_no_duplicates() {
        for pool in [
            LOCATIONS,
            TARGETS,
            INCIDENT_TYPES,
            TIME_CONTEXTS,
            ROLES,
            TRAITS,
            MANNERISMS,
        ] {
            let unique: HashSet<_> = pool.iter().collect();
            assert_eq!(unique.len(), pool.len());
        }
    }
}
