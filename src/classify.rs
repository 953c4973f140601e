//! # Category Classification Module
//!
//! ## Purpose
//! Maps incident description text (plus the officer's declared incident
//! type) to a legal category using an ordered keyword rule table.
//!
//! ## Input/Output Specification
//! - **Input**: Description text, incident-type hint
//! - **Output**: [`Classification`] with coarse category plus matched offense cluster
//! - **Determinism**: First matching rule wins; fixed fallback when none match
//!
//! ## Rule Ordering
//! The rule table is evaluated top to bottom and the first match wins. The
//! theft and assault clusters are checked before the broader cyber cluster,
//! so "online theft" classifies as theft, not cyber. Reordering the table
//! changes output for overlapping-keyword inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Legal category buckets used to select applicable law
///
/// Closed set; the classifier currently produces only `Criminal` and
/// `Cybercrime`, but the remaining variants are part of the public contract
/// and reachable through future rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Criminal,
    Cybercrime,
    Civil,
    Traffic,
    Domestic,
}

impl Category {
    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Criminal => "criminal",
            Category::Cybercrime => "cybercrime",
            Category::Civil => "civil",
            Category::Traffic => "traffic",
            Category::Domestic => "domestic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Criminal
    }
}

/// Offense cluster matched by the winning rule
///
/// The cluster keys the section/precedent/recommendation catalogs: both the
/// theft and assault rules map to category `criminal` yet select different
/// catalog rows, so the coarse category alone cannot drive the lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffenseCluster {
    Theft,
    Assault,
    Cyber,
    General,
}

impl OffenseCluster {
    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            OffenseCluster::Theft => "theft",
            OffenseCluster::Assault => "assault",
            OffenseCluster::Cyber => "cyber",
            OffenseCluster::General => "general",
        }
    }

    /// All clusters the classifier can produce, for catalog consistency checks
    pub fn all() -> &'static [OffenseCluster] {
        &[
            OffenseCluster::Theft,
            OffenseCluster::Assault,
            OffenseCluster::Cyber,
            OffenseCluster::General,
        ]
    }
}

impl fmt::Display for OffenseCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Coarse legal category carried on the analysis result
    pub category: Category,
    /// Matched cluster keying the catalogs
    pub cluster: OffenseCluster,
}

/// One entry of the ordered rule table
struct ClassificationRule {
    keywords: &'static [&'static str],
    category: Category,
    cluster: OffenseCluster,
}

/// Ordered first-match-wins rule table; precedence is load-bearing
const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        keywords: &["theft", "steal", "rob"],
        category: Category::Criminal,
        cluster: OffenseCluster::Theft,
    },
    ClassificationRule {
        keywords: &["assault", "attack", "hurt"],
        category: Category::Criminal,
        cluster: OffenseCluster::Assault,
    },
    ClassificationRule {
        keywords: &["cyber", "online", "internet"],
        category: Category::Cybercrime,
        cluster: OffenseCluster::Cyber,
    },
];

/// Rule-ordered keyword classifier
#[derive(Debug, Default)]
pub struct CategoryClassifier;

impl CategoryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify description text against the ordered rule table
    ///
    /// Matching is case-insensitive substring search on the lower-cased
    /// description. `type_hint` is accepted for future rule use and does not
    /// currently override the text rules; the fallback fires whenever no
    /// keyword cluster matches, regardless of hint.
    pub fn classify(&self, text: &str, type_hint: &str) -> Classification {
        let _ = type_hint;
        let lower = text.to_lowercase();

        for rule in RULES {
            if rule.keywords.iter().any(|keyword| lower.contains(keyword)) {
                return Classification {
                    category: rule.category,
                    cluster: rule.cluster,
                };
            }
        }

        Classification {
            category: Category::default(),
            cluster: OffenseCluster::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Classification {
        CategoryClassifier::new().classify(text, "")
    }

    #[test]
    fn test_theft_cluster() {
        let c = classify("Someone tried to steal my bag");
        assert_eq!(c.category, Category::Criminal);
        assert_eq!(c.cluster, OffenseCluster::Theft);
    }

    #[test]
    fn test_assault_cluster() {
        let c = classify("He was attacked near the bus stand");
        assert_eq!(c.category, Category::Criminal);
        assert_eq!(c.cluster, OffenseCluster::Assault);
    }

    #[test]
    fn test_cyber_cluster() {
        let c = classify("My internet banking account was compromised");
        assert_eq!(c.category, Category::Cybercrime);
        assert_eq!(c.cluster, OffenseCluster::Cyber);
    }

    #[test]
    fn test_theft_wins_over_cyber() {
        // Rule precedence: the theft cluster is checked before cyber
        let c = classify("online theft of mobile phone");
        assert_eq!(c.category, Category::Criminal);
        assert_eq!(c.cluster, OffenseCluster::Theft);
    }

    #[test]
    fn test_assault_wins_over_cyber() {
        let c = classify("he was hurt after an online argument");
        assert_eq!(c.category, Category::Criminal);
        assert_eq!(c.cluster, OffenseCluster::Assault);
    }

    #[test]
    fn test_generic_fallback() {
        let c = classify("a dispute occurred");
        assert_eq!(c.category, Category::Criminal);
        assert_eq!(c.cluster, OffenseCluster::General);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let c = classify("ROBBERY at the market");
        assert_eq!(c.cluster, OffenseCluster::Theft);
    }

    #[test]
    fn test_hint_does_not_override_rules() {
        let c = CategoryClassifier::new().classify("a dispute occurred", "cybercrime");
        assert_eq!(c.category, Category::Criminal);
        assert_eq!(c.cluster, OffenseCluster::General);
    }
}
