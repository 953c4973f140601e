//! # Precedent Retrieval Module
//!
//! ## Purpose
//! Static catalog of case-law precedents keyed by offense cluster, with
//! fixed relevance scores and summaries.
//!
//! ## Input/Output Specification
//! - **Input**: Offense cluster from the classifier
//! - **Output**: Ordered owned copies of the matching precedents
//! - **Note**: The general cluster has no precedents; callers tolerate an
//!   empty sequence

use crate::classify::OffenseCluster;
use serde::{Deserialize, Serialize};

/// A precedent summary with its catalog-assigned relevance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecedentSummary {
    /// Case title
    pub title: String,
    /// Primary citation
    pub citation: String,
    /// Court that decided the case
    pub court: String,
    /// Decision year
    pub year: u16,
    /// Relevance score, 0-100
    pub relevance: u8,
    /// One-line holding summary
    pub summary: String,
}

struct PrecedentEntry {
    title: &'static str,
    citation: &'static str,
    court: &'static str,
    year: u16,
    relevance: u8,
    summary: &'static str,
}

const SUPREME_COURT: &str = "Supreme Court of India";

const THEFT_PRECEDENTS: &[PrecedentEntry] = &[PrecedentEntry {
    title: "State of Maharashtra v. Mayer Hans George",
    citation: "AIR 1965 SC 722",
    court: SUPREME_COURT,
    year: 1965,
    relevance: 88,
    summary: "Defines the essential elements of theft under Section 378 IPC",
}];

const ASSAULT_PRECEDENTS: &[PrecedentEntry] = &[PrecedentEntry {
    title: "Virsa Singh v. State of Punjab",
    citation: "AIR 1958 SC 465",
    court: SUPREME_COURT,
    year: 1958,
    relevance: 85,
    summary: "Distinction between simple and grievous hurt",
}];

const CYBER_PRECEDENTS: &[PrecedentEntry] = &[PrecedentEntry {
    title: "Shreya Singhal v. Union of India",
    citation: "AIR 2015 SC 1523",
    court: SUPREME_COURT,
    year: 2015,
    relevance: 80,
    summary: "Landmark case on cyber laws and freedom of speech",
}];

const GENERAL_PRECEDENTS: &[PrecedentEntry] = &[];

/// Read-only lookup over the precedent catalog
#[derive(Debug, Default)]
pub struct PrecedentCatalog;

impl PrecedentCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Return the precedents for the cluster, in catalog-declared order
    pub fn retrieve(&self, cluster: OffenseCluster) -> Vec<PrecedentSummary> {
        let entries = match cluster {
            OffenseCluster::Theft => THEFT_PRECEDENTS,
            OffenseCluster::Assault => ASSAULT_PRECEDENTS,
            OffenseCluster::Cyber => CYBER_PRECEDENTS,
            OffenseCluster::General => GENERAL_PRECEDENTS,
        };

        entries
            .iter()
            .map(|entry| PrecedentSummary {
                title: entry.title.to_string(),
                citation: entry.citation.to_string(),
                court: entry.court.to_string(),
                year: entry.year,
                relevance: entry.relevance,
                summary: entry.summary.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theft_precedent() {
        let precedents = PrecedentCatalog::new().retrieve(OffenseCluster::Theft);
        assert_eq!(precedents.len(), 1);
        assert_eq!(
            precedents[0].title,
            "State of Maharashtra v. Mayer Hans George"
        );
        assert_eq!(precedents[0].citation, "AIR 1965 SC 722");
        assert_eq!(precedents[0].year, 1965);
    }

    #[test]
    fn test_general_cluster_has_no_precedents() {
        let precedents = PrecedentCatalog::new().retrieve(OffenseCluster::General);
        assert!(precedents.is_empty());
    }

    #[test]
    fn test_relevance_scores_in_range() {
        let catalog = PrecedentCatalog::new();
        for cluster in OffenseCluster::all() {
            for precedent in catalog.retrieve(*cluster) {
                assert!(precedent.relevance <= 100);
            }
        }
    }
}
