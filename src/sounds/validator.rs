//! Per-segment validation against both rule sets.
use super::{classes, inventory};

/// Outcome for one segment against one rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// Opaque category label for the failure.
    Invalid(&'static str),
    /// Known but non-canonical; carries suggested canonical forms.
    Modified {
        original: String,
        replacements: Vec<String>,
    },
}

impl Verdict {
    /// Anything but [Verdict::Valid] counts as flagged.
    pub fn is_flagged(&self) -> bool {
        !matches!(self, Verdict::Valid)
    }
}

/// Both verdicts for one segment, kept independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgement {
    pub class: Verdict,
    pub inventory: Verdict,
}

impl Judgement {
    pub fn is_clean(&self) -> bool {
        !self.class.is_flagged() && !self.inventory.is_flagged()
    }
}

/// Stateless segment validator. `validate` is pure: repeated calls on the
/// same segment yield identical judgements, and every segment gets a
/// judgement (there is no unvalidatable state).
#[derive(Debug, Default, Clone, Copy)]
pub struct SegmentValidator;

impl SegmentValidator {
    pub fn new() -> Self {
        SegmentValidator
    }

    pub fn validate(&self, segment: &str) -> Judgement {
        if segment.is_empty() {
            return Judgement {
                class: Verdict::Invalid("empty segment"),
                inventory: Verdict::Invalid("empty segment"),
            };
        }

        let class = match classes::sound_class(segment) {
            Some(_) => Verdict::Valid,
            None => Verdict::Invalid("no sound class"),
        };

        let inventory = match inventory::lookup(segment) {
            inventory::Lookup::Canonical => Verdict::Valid,
            inventory::Lookup::NonCanonical(replacements) => Verdict::Modified {
                original: segment.to_string(),
                replacements,
            },
            inventory::Lookup::Absent => Verdict::Invalid("not in inventory"),
        };

        Judgement { class, inventory }
    }
}
