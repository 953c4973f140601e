//! # Section Recommendation Module
//!
//! ## Purpose
//! Static catalog of statutory sections keyed by offense cluster, with fixed
//! applicability scores and descriptions.
//!
//! ## Input/Output Specification
//! - **Input**: Offense cluster from the classifier
//! - **Output**: Ordered owned copies of the matching catalog entries
//! - **Guarantee**: Non-empty for every cluster the classifier can produce
//!
//! The catalog is declared in code and never mutated at request time; scores
//! are catalog-assigned, not recomputed per call.

use crate::classify::{Category, OffenseCluster};
use serde::{Deserialize, Serialize};

/// A candidate statutory section with its catalog-assigned applicability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSuggestion {
    /// Section identifier, e.g. "Section 378"
    pub section: String,
    /// Full act name, e.g. "Indian Penal Code, 1860"
    pub act: String,
    /// What the section covers
    pub description: String,
    /// Applicability score, 0-100
    pub applicability: u8,
    /// Coarse category the section belongs to
    pub category: Category,
}

/// One catalog row; owned copies are built from these on lookup
struct SectionEntry {
    section: &'static str,
    act: &'static str,
    description: &'static str,
    applicability: u8,
    category: Category,
}

const IPC: &str = "Indian Penal Code, 1860";
const IT_ACT: &str = "Information Technology Act, 2000";
const CRPC: &str = "Code of Criminal Procedure, 1973";

const THEFT_SECTIONS: &[SectionEntry] = &[
    SectionEntry {
        section: "Section 378",
        act: IPC,
        description: "Theft - Dishonestly taking movable property",
        applicability: 95,
        category: Category::Criminal,
    },
    SectionEntry {
        section: "Section 379",
        act: IPC,
        description: "Punishment for theft",
        applicability: 95,
        category: Category::Criminal,
    },
];

const ASSAULT_SECTIONS: &[SectionEntry] = &[
    SectionEntry {
        section: "Section 321",
        act: IPC,
        description: "Voluntarily causing hurt",
        applicability: 90,
        category: Category::Criminal,
    },
    SectionEntry {
        section: "Section 324",
        act: IPC,
        description: "Voluntarily causing hurt by dangerous weapons",
        applicability: 85,
        category: Category::Criminal,
    },
];

const CYBER_SECTIONS: &[SectionEntry] = &[
    SectionEntry {
        section: "Section 66",
        act: IT_ACT,
        description: "Computer related offences",
        applicability: 92,
        category: Category::Cybercrime,
    },
    SectionEntry {
        section: "Section 66C",
        act: IT_ACT,
        description: "Identity theft",
        applicability: 88,
        category: Category::Cybercrime,
    },
];

const GENERAL_SECTIONS: &[SectionEntry] = &[SectionEntry {
    section: "Section 107",
    act: CRPC,
    description: "Security for keeping the peace",
    applicability: 70,
    category: Category::Criminal,
}];

/// Read-only lookup over the section catalog
#[derive(Debug, Default)]
pub struct SectionCatalog;

impl SectionCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Return the catalog entries for the cluster, in catalog-declared order
    pub fn recommend(&self, cluster: OffenseCluster) -> Vec<SectionSuggestion> {
        let entries = match cluster {
            OffenseCluster::Theft => THEFT_SECTIONS,
            OffenseCluster::Assault => ASSAULT_SECTIONS,
            OffenseCluster::Cyber => CYBER_SECTIONS,
            OffenseCluster::General => GENERAL_SECTIONS,
        };

        entries
            .iter()
            .map(|entry| SectionSuggestion {
                section: entry.section.to_string(),
                act: entry.act.to_string(),
                description: entry.description.to_string(),
                applicability: entry.applicability,
                category: entry.category,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theft_sections_in_catalog_order() {
        let sections = SectionCatalog::new().recommend(OffenseCluster::Theft);
        let codes: Vec<&str> = sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(codes, vec!["Section 378", "Section 379"]);
        assert!(sections.iter().all(|s| s.act == IPC));
    }

    #[test]
    fn test_general_fallback_is_crpc_107() {
        let sections = SectionCatalog::new().recommend(OffenseCluster::General);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section, "Section 107");
        assert_eq!(sections[0].act, CRPC);
        assert_eq!(sections[0].applicability, 70);
    }

    #[test]
    fn test_every_cluster_has_sections() {
        let catalog = SectionCatalog::new();
        for cluster in OffenseCluster::all() {
            let sections = catalog.recommend(*cluster);
            assert!(!sections.is_empty(), "no sections for {}", cluster);
            assert!(sections.iter().all(|s| s.applicability <= 100));
        }
    }

    #[test]
    fn test_lookups_return_owned_copies() {
        let catalog = SectionCatalog::new();
        let mut first = catalog.recommend(OffenseCluster::Cyber);
        first[0].applicability = 1;
        let second = catalog.recommend(OffenseCluster::Cyber);
        assert_eq!(second[0].applicability, 92);
    }
}
