//! # Investigative Guidance Module
//!
//! ## Purpose
//! Fixed, cluster-specific checklists of investigative next steps for the
//! drafting officer.
//!
//! ## Input/Output Specification
//! - **Input**: Offense cluster from the classifier
//! - **Output**: Ordered owned checklist strings
//! - **Guarantee**: Never empty; the general cluster gets a generic checklist

use crate::classify::OffenseCluster;

const THEFT_CHECKLIST: &[&str] = &[
    "Collect CCTV footage if available",
    "Record witness statements",
    "Prepare detailed inventory of stolen items",
    "Check for fingerprints at the scene",
];

const ASSAULT_CHECKLIST: &[&str] = &[
    "Obtain medical examination report",
    "Photograph injuries",
    "Record victim statement",
    "Identify and interview witnesses",
];

const CYBER_CHECKLIST: &[&str] = &[
    "Preserve digital evidence",
    "Take screenshots of online content",
    "Record IP addresses and timestamps",
    "Contact cybercrime investigation team",
];

const GENERAL_CHECKLIST: &[&str] = &[
    "Conduct thorough investigation",
    "Record all witness statements",
    "Collect physical evidence",
    "Maintain chain of custody",
];

/// Read-only lookup over the checklist catalog
#[derive(Debug, Default)]
pub struct RecommendationComposer;

impl RecommendationComposer {
    pub fn new() -> Self {
        Self
    }

    /// Return the investigative checklist for the cluster
    pub fn compose(&self, cluster: OffenseCluster) -> Vec<String> {
        let checklist = match cluster {
            OffenseCluster::Theft => THEFT_CHECKLIST,
            OffenseCluster::Assault => ASSAULT_CHECKLIST,
            OffenseCluster::Cyber => CYBER_CHECKLIST,
            OffenseCluster::General => GENERAL_CHECKLIST,
        };

        checklist.iter().map(|step| step.to_string()).collect()
    }
}
