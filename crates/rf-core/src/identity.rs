//! Reserved identities that trigger forced outcomes.
//!
//! Two kinds of reserved names exist: the *primary* identity (the special
//! user, accepted in several written forms) and the *secondary* identity (the
//! special target). Matching is exact equality after [`normalize_name`]; no
//! fuzzy or substring matching is performed.

use crate::name::normalize_name;

/// Accepted forms of the primary identity.
const PRIMARY_FORMS: [&str; 2] = ["ananyaa", "ananyaa singh"];

/// Accepted forms of the secondary identity.
const SECONDARY_FORMS: [&str; 1] = ["jenish"];

/// Table of reserved identity strings, stored normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedIdentities {
    primary: Vec<String>,
    secondary: Vec<String>,
}

impl Default for ReservedIdentities {
    fn default() -> Self {
        Self {
            primary: PRIMARY_FORMS.iter().map(|s| s.to_string()).collect(),
            secondary: SECONDARY_FORMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ReservedIdentities {
    /// An empty table. Nothing matches, so every round is random.
    pub fn empty() -> Self {
        Self {
            primary: Vec::new(),
            secondary: Vec::new(),
        }
    }

    /// Add an accepted form of the primary identity.
    pub fn with_primary(mut self, form: &str) -> Self {
        push_normalized(&mut self.primary, form);
        self
    }

    /// Add an accepted form of the secondary identity.
    pub fn with_secondary(mut self, form: &str) -> Self {
        push_normalized(&mut self.secondary, form);
        self
    }

    /// Normalized primary forms.
    pub fn primary_forms(&self) -> &[String] {
        &self.primary
    }

    /// Normalized secondary forms.
    pub fn secondary_forms(&self) -> &[String] {
        &self.secondary
    }

    /// Whether `name` is one of the primary forms.
    pub fn is_primary(&self, name: &str) -> bool {
        let normalized = normalize_name(name);
        self.primary.iter().any(|form| *form == normalized)
    }

    /// Whether `name` is one of the secondary forms.
    pub fn is_secondary(&self, name: &str) -> bool {
        let normalized = normalize_name(name);
        self.secondary.iter().any(|form| *form == normalized)
    }
}

fn push_normalized(forms: &mut Vec<String>, form: &str) {
    let normalized = normalize_name(form);
    // A blank entry would match every blank name.
    if normalized.is_empty() || forms.contains(&normalized) {
        return;
    }
    forms.push(normalized);
}

/// Whether `name` matches the primary identity of the default table.
pub fn is_primary_identity(name: &str) -> bool {
    PRIMARY_FORMS.contains(&normalize_name(name).as_str())
}

/// Whether `name` matches the secondary identity of the default table.
pub fn is_secondary_identity(name: &str) -> bool {
    SECONDARY_FORMS.contains(&normalize_name(name).as_str())
}
