//! Response model and score interpretation: verdict mapping, length advice,
//! and the band policy deciding which issues and suggestions surface.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Full assessment for text that passed the resume gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub is_resume: bool,
    pub ats_score: i32,
    pub verdict: String,
    pub experience_years: f64,
    pub resume_length_advice: String,
    pub issues: HashSet<String>,
    pub suggestions: HashSet<String>,
}

/// Returned instead of a report when the upload does not look like a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionNotice {
    pub is_resume: bool,
    pub message: String,
}

/// What an analysis produces: either a rejection notice or a scored report.
/// Serializes flat, so callers see the same shape either way minus the
/// fields that do not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    NotResume(RejectionNotice),
    Scored(AtsReport),
}

const NEARLY_OPTIMIZED_NOTE: &str = "Minor improvements possible, but resume is ATS-friendly";
const FULLY_OPTIMIZED_NOTE: &str = "Resume is well-optimized and ATS compliant";

/// Maps a clamped score to its qualitative verdict.
pub fn verdict_for(score: i32) -> &'static str {
    match score {
        i32::MIN..=39 => "Very poor – auto-rejected",
        40..=59 => "Below average – low chance",
        60..=69 => "Average – may pass ATS",
        70..=79 => "Good – shortlisted",
        80..=89 => "Very strong – high priority",
        _ => "Excellent – near-perfect match",
    }
}

pub fn length_advice(experience_years: f64) -> &'static str {
    if experience_years < 5.0 {
        "Recommended resume length: 1 page"
    } else {
        "Resume length acceptable for experienced professionals"
    }
}

/// Applies the band policy to raw collected feedback. Below 70 everything
/// surfaces; 70–84 keeps the first four suggestions only; above that the
/// suggestions collapse to a single fixed note. Deduplication happens here,
/// after truncation, by collecting into sets.
pub fn surface_feedback(
    score: i32,
    raw_issues: Vec<String>,
    raw_suggestions: Vec<String>,
) -> (HashSet<String>, HashSet<String>) {
    if score < 70 {
        (
            raw_issues.into_iter().collect(),
            raw_suggestions.into_iter().collect(),
        )
    } else if score < 85 {
        (HashSet::new(), raw_suggestions.into_iter().take(4).collect())
    } else if score < 95 {
        (
            HashSet::new(),
            std::iter::once(NEARLY_OPTIMIZED_NOTE.to_string()).collect(),
        )
    } else {
        (
            HashSet::new(),
            std::iter::once(FULLY_OPTIMIZED_NOTE.to_string()).collect(),
        )
    }
}
