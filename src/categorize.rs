//! "Why it matters" labels.
//!
//! A [`Categorizer`] holds an ordered list of case-insensitive patterns. A
//! title gets the label of the first pattern it matches, or the fallback
//! label; it always gets exactly one. Only the title is inspected.

use crate::config::WhyRule;
use crate::error::ConfigError;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<(Regex, String)>,
    fallback: String,
}

impl Categorizer {
    pub fn new(rules: &[WhyRule], fallback: impl Into<String>) -> Result<Self, ConfigError> {
        let rules = rules
            .iter()
            .map(|rule| {
                RegexBuilder::new(&rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|re| (re, rule.label.clone()))
                    .map_err(|source| ConfigError::Pattern {
                        pattern: rule.pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rules,
            fallback: fallback.into(),
        })
    }

    pub fn why(&self, title: &str) -> &str {
        self.rules
            .iter()
            .find(|(re, _)| re.is_match(title))
            .map(|(_, label)| label.as_str())
            .unwrap_or(self.fallback.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DigestConfig;

    fn categorizer() -> Categorizer {
        let config = DigestConfig::default();
        Categorizer::new(&config.why_rules, config.why_fallback).unwrap()
    }

    #[test]
    fn test_each_default_rule() {
        let c = categorizer();
        assert!(c.why("OpenAI dévoile GPT-5").starts_with("Impact IA"));
        assert!(c.why("La CNIL sanctionne un éditeur").starts_with("Impact réglementaire"));
        assert!(c.why("AMD dévoile une nouvelle puce").starts_with("Impact matériel"));
        assert!(c.why("Une faille critique chez Microsoft").starts_with("Impact sécurité"));
        assert!(c.why("AWS baisse ses prix").starts_with("Impact cloud"));
    }

    #[test]
    fn test_fallback_label() {
        let c = categorizer();
        assert_eq!(
            c.why("Le marché du smartphone recule"),
            "Intérêt business : opportunités produit et efficacité opérationnelle."
        );
        assert!(c.why("").starts_with("Intérêt business"));
    }

    #[test]
    fn test_first_match_wins() {
        let c = categorizer();
        // Also contains the cloud and security keywords.
        assert!(c.why("GPT arrive sur le cloud malgré une faille").starts_with("Impact IA"));
    }

    #[test]
    fn test_case_insensitive() {
        let c = categorizer();
        assert_eq!(c.why("gpt"), c.why("GPT"));
        assert!(c.why("RANSOMWARE en hausse").starts_with("Impact sécurité"));
    }

    #[test]
    fn test_deterministic() {
        let c = categorizer();
        let title = "Azure et Nvidia";
        assert_eq!(c.why(title), c.why(title));
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let rules = vec![WhyRule {
            pattern: "(unclosed".to_string(),
            label: "x".to_string(),
        }];
        let err = Categorizer::new(&rules, "fallback").unwrap_err();
        assert!(matches!(err, ConfigError::Pattern { .. }));
    }

    #[test]
    fn test_custom_rules() {
        let rules = vec![WhyRule {
            pattern: "rust".to_string(),
            label: "Systems".to_string(),
        }];
        let c = Categorizer::new(&rules, "Other").unwrap();
        assert_eq!(c.why("Rust 2.0 released"), "Systems");
        assert_eq!(c.why("Go 2.0 released"), "Other");
    }
}
