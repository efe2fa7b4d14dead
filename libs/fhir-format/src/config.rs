//! Parser configuration.

use serde::{Deserialize, Serialize};

/// What to do when more than one variant of a choice field is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChoiceConflictPolicy {
    /// Fail with `MalformedChoiceValue`.
    #[default]
    Reject,
    /// Keep the variant declared first by FHIR and drop the others.
    FirstDeclared,
}

/// What to do with object keys no model field claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownFieldPolicy {
    #[default]
    Reject,
    /// Skip the key and log a warning. Round trips are no longer lossless.
    Ignore,
}

/// Options shared by every decode and encode call of a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserConfig {
    pub choice_conflicts: ChoiceConflictPolicy,
    pub unknown_fields: UnknownFieldPolicy,
    /// Pretty-print JSON produced by `from_fhir`.
    pub pretty: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            choice_conflicts: ChoiceConflictPolicy::Reject,
            unknown_fields: UnknownFieldPolicy::Reject,
            pretty: false,
        }
    }
}

impl ParserConfig {
    /// Accepts documents the strict defaults refuse: conflicting choice keys
    /// and unknown properties.
    pub fn lenient() -> Self {
        Self {
            choice_conflicts: ChoiceConflictPolicy::FirstDeclared,
            unknown_fields: UnknownFieldPolicy::Ignore,
            pretty: false,
        }
    }

    pub fn with_choice_conflicts(mut self, policy: ChoiceConflictPolicy) -> Self {
        self.choice_conflicts = policy;
        self
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict() {
        let config = ParserConfig::default();
        assert_eq!(config.choice_conflicts, ChoiceConflictPolicy::Reject);
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Reject);
        assert!(!config.pretty);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: ParserConfig =
            serde_json::from_str(r#"{"choiceConflicts": "first-declared"}"#).unwrap();
        assert_eq!(config.choice_conflicts, ChoiceConflictPolicy::FirstDeclared);
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Reject);
    }
}
