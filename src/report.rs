//! # FIR Report Drafting Module
//!
//! ## Purpose
//! Renders a first-information-report draft from incident details and an
//! analysis result, ready for review by the investigating officer.
//!
//! ## Input/Output Specification
//! - **Input**: [`FirDraftRequest`] incident details, [`AnalysisResult`]
//! - **Output**: Plain-text FIR document
//! - **Failure**: None; missing optional fields render as "Not provided"

use crate::analysis::AnalysisResult;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Incident details supplied by the drafting officer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirDraftRequest {
    /// Free-text incident description; must not be blank
    pub incident_description: String,
    /// Complainant's full name
    pub complainant_name: Option<String>,
    /// Where the incident took place
    pub incident_location: Option<String>,
    /// When the incident took place, as entered by the officer
    pub incident_date: Option<String>,
}

fn field_or_placeholder(value: &Option<String>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "Not provided",
    }
}

/// Render the FIR draft text
///
/// The applicable-sections block lists the sections from the supplied
/// analysis rather than a fixed pair, so the draft always agrees with the
/// guidance shown alongside it.
pub fn draft_fir(request: &FirDraftRequest, analysis: &AnalysisResult) -> String {
    let mut document = String::new();

    document.push_str("FIRST INFORMATION REPORT\n");
    document.push_str("(Under Section 154 of the Code of Criminal Procedure, 1973)\n\n");

    document.push_str(&format!(
        "Police Station: {}\n",
        field_or_placeholder(&request.incident_location)
    ));
    document.push_str(&format!(
        "Date of Drafting: {}\n\n",
        Utc::now().format("%d %B %Y")
    ));

    document.push_str("COMPLAINANT DETAILS:\n");
    document.push_str(&format!(
        "Name: {}\n\n",
        field_or_placeholder(&request.complainant_name)
    ));

    document.push_str("INCIDENT DETAILS:\n");
    document.push_str(&format!(
        "Date of Incident: {}\n",
        field_or_placeholder(&request.incident_date)
    ));
    document.push_str(&format!(
        "Category: {}\n",
        analysis.category
    ));
    document.push_str(&format!("Description: {}\n\n", request.incident_description));

    document.push_str("APPLICABLE SECTIONS:\n");
    document.push_str("Based on AI analysis, the following sections may be applicable:\n");
    for section in &analysis.suggested_sections {
        document.push_str(&format!(
            "- {} of {} ({})\n",
            section.section, section.act, section.description
        ));
    }

    document.push('\n');
    document.push_str(
        "This FIR has been generated with AI assistance and should be reviewed by the investigating officer.\n",
    );

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisEngine;

    fn request(description: &str) -> FirDraftRequest {
        FirDraftRequest {
            incident_description: description.to_string(),
            complainant_name: Some("Rajesh Kumar".to_string()),
            incident_location: Some("Main Street".to_string()),
            incident_date: Some("15 January 2024".to_string()),
        }
    }

    #[test]
    fn test_draft_contains_header_and_analyzed_sections() {
        let engine = AnalysisEngine::new().unwrap();
        let req = request("A theft was reported near the market");
        let analysis = engine.analyze(&req.incident_description, "").unwrap();

        let document = draft_fir(&req, &analysis);

        assert!(document.starts_with("FIRST INFORMATION REPORT"));
        assert!(document.contains("Section 154 of the Code of Criminal Procedure"));
        assert!(document.contains("Name: Rajesh Kumar"));
        assert!(document.contains("A theft was reported near the market"));
        for section in &analysis.suggested_sections {
            assert!(document.contains(&section.section));
        }
        assert!(document.contains("reviewed by the investigating officer"));
    }

    #[test]
    fn test_missing_fields_render_placeholder() {
        let engine = AnalysisEngine::new().unwrap();
        let req = FirDraftRequest {
            incident_description: "a dispute occurred".to_string(),
            complainant_name: None,
            incident_location: Some("   ".to_string()),
            incident_date: None,
        };
        let analysis = engine.analyze(&req.incident_description, "").unwrap();

        let document = draft_fir(&req, &analysis);

        assert!(document.contains("Name: Not provided"));
        assert!(document.contains("Police Station: Not provided"));
        assert!(document.contains("Date of Incident: Not provided"));
        // The default path still yields an applicable section
        assert!(document.contains("Section 107"));
    }
}
