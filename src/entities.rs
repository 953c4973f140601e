//! # Entity Extraction Module
//!
//! ## Purpose
//! Rule-based extraction of structured fragments from free-text incident
//! descriptions: person-name-like tokens, location phrases, date strings,
//! and offense keywords.
//!
//! ## Input/Output Specification
//! - **Input**: Raw incident description text
//! - **Output**: [`EntityBundle`] with the matched fragments per family
//! - **Failure**: None; absent matches yield empty sequences
//!
//! ## Key Features
//! - Data-driven pattern families (extendable without touching control flow)
//! - Person names via a capitalized-bigram pattern
//! - Location phrases anchored on a fixed indicator vocabulary
//! - Numeric and spelled-month date patterns
//! - Offense keyword containment against a fixed keyword list
//!
//! Person matching has no grammatical validation; sentence-initial
//! capitalized common nouns are accepted false positives.

use crate::errors::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Nouns that anchor a location phrase when preceded by another token
const LOCATION_INDICATORS: &[&str] = &[
    "street", "road", "avenue", "lane", "market", "station", "hospital", "school",
];

/// Offense keywords checked by case-insensitive containment, in report order
const CRIME_KEYWORDS: &[&str] = &[
    "theft",
    "robbery",
    "assault",
    "murder",
    "kidnapping",
    "fraud",
    "cheating",
    "harassment",
    "dowry",
    "rape",
];

/// Extracted entities from one incident description
///
/// Each sequence preserves the extractor's match order: persons in text
/// order, locations in indicator-vocabulary order (text order within each
/// indicator), dates in pattern-family order, and crime keywords in
/// keyword-list order with at most one entry per keyword. Duplicates are
/// otherwise permitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityBundle {
    /// Person-name-like token pairs
    pub persons: Vec<String>,
    /// Location phrases ending in an indicator noun
    pub locations: Vec<String>,
    /// Date strings in numeric or spelled-month form
    pub dates: Vec<String>,
    /// Offense keywords present in the text
    pub crime_keywords: Vec<String>,
}

impl EntityBundle {
    /// Total number of extracted fragments across all families
    pub fn len(&self) -> usize {
        self.persons.len() + self.locations.len() + self.dates.len() + self.crime_keywords.len()
    }

    /// Whether no family matched anything
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pattern-rule entity extractor
pub struct EntityExtractor {
    person_pattern: Regex,
    location_patterns: Vec<Regex>,
    date_patterns: Vec<Regex>,
}

impl EntityExtractor {
    /// Compile the pattern families
    pub fn new() -> Result<Self> {
        // Two consecutive capitalized tokens, e.g. "Rajesh Kumar"
        let person_pattern = Regex::new(r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b")?;

        let mut location_patterns = Vec::with_capacity(LOCATION_INDICATORS.len());
        for indicator in LOCATION_INDICATORS {
            location_patterns.push(Regex::new(&format!(r"(?i)\b\w+\s+{}\b", indicator))?);
        }

        let date_patterns = vec![
            // Numeric D/M/Y with "/" or "-" separators
            Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b")?,
            // Spelled-month "15 January 2024", English calendar only
            Regex::new(
                r"(?i)\b\d{1,2}\s+(January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}\b",
            )?,
        ];

        Ok(Self {
            person_pattern,
            location_patterns,
            date_patterns,
        })
    }

    /// Extract all entity families from the given text
    ///
    /// Pure and deterministic; never fails.
    pub fn extract(&self, text: &str) -> EntityBundle {
        EntityBundle {
            persons: self.extract_persons(text),
            locations: self.extract_locations(text),
            dates: self.extract_dates(text),
            crime_keywords: self.extract_crime_keywords(text),
        }
    }

    fn extract_persons(&self, text: &str) -> Vec<String> {
        self.person_pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn extract_locations(&self, text: &str) -> Vec<String> {
        let mut locations = Vec::new();
        for pattern in &self.location_patterns {
            for m in pattern.find_iter(text) {
                locations.push(m.as_str().to_string());
            }
        }
        locations
    }

    fn extract_dates(&self, text: &str) -> Vec<String> {
        let mut dates = Vec::new();
        for pattern in &self.date_patterns {
            for m in pattern.find_iter(text) {
                dates.push(m.as_str().to_string());
            }
        }
        dates
    }

    fn extract_crime_keywords(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        CRIME_KEYWORDS
            .iter()
            .filter(|keyword| lower.contains(**keyword))
            .map(|keyword| keyword.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> EntityExtractor {
        EntityExtractor::new().unwrap()
    }

    #[test]
    fn test_full_example_extraction() {
        let bundle = extractor()
            .extract("Rajesh Kumar reported a theft at Main Street on 15 January 2024");

        assert!(bundle.persons.contains(&"Rajesh Kumar".to_string()));
        assert!(bundle
            .locations
            .iter()
            .any(|l| l.to_lowercase().ends_with("street")));
        assert!(bundle.dates.contains(&"15 January 2024".to_string()));
        assert_eq!(bundle.crime_keywords, vec!["theft".to_string()]);
    }

    #[test]
    fn test_no_matches_yields_empty_bundle() {
        let bundle = extractor().extract("a dispute occurred");
        assert!(bundle.is_empty());
        assert!(bundle.persons.is_empty());
        assert!(bundle.locations.is_empty());
        assert!(bundle.dates.is_empty());
        assert!(bundle.crime_keywords.is_empty());
    }

    #[test]
    fn test_numeric_date_forms() {
        let bundle = extractor().extract("Incident on 15/01/2024 and again on 3-2-24");
        assert_eq!(bundle.dates, vec!["15/01/2024", "3-2-24"]);
    }

    #[test]
    fn test_spelled_month_is_case_insensitive() {
        let bundle = extractor().extract("reported on 2 march 2023");
        assert_eq!(bundle.dates, vec!["2 march 2023"]);
    }

    #[test]
    fn test_keyword_appears_once_in_list_order() {
        let bundle =
            extractor().extract("Fraud and theft: the theft was reported after the fraud");
        // List order, not text order; one entry per keyword
        assert_eq!(bundle.crime_keywords, vec!["theft", "fraud"]);
    }

    #[test]
    fn test_location_phrase_includes_preceding_token() {
        let bundle = extractor().extract("near the City Hospital and Gandhi Road");
        assert!(bundle.locations.contains(&"Gandhi Road".to_string()));
        assert!(bundle.locations.contains(&"City Hospital".to_string()));
    }

    #[test]
    fn test_person_false_positive_accepted() {
        // Sentence-initial capitalized bigrams match by design
        let bundle = extractor().extract("Main Street was crowded");
        assert!(bundle.persons.contains(&"Main Street".to_string()));
    }

    #[test]
    fn test_duplicate_persons_preserved_in_text_order() {
        let bundle = extractor().extract("Amit Sharma spoke to Priya Verma and Amit Sharma left");
        assert_eq!(
            bundle.persons,
            vec!["Amit Sharma", "Priya Verma", "Amit Sharma"]
        );
    }
}
