//! Scoring engine — runs the full analysis pass over extracted text.
//!
//! Single forward flow: normalize, gate on the resume classifier, run the
//! five rule checks, estimate experience, then apply the band policy to
//! decide what feedback surfaces. No state is kept between calls.

use chrono::{Datelike, Utc};

use crate::analysis::checks::{
    check_bullets, check_contact, check_length, check_sections, check_spelling,
};
use crate::analysis::classifier::rejection_reason;
use crate::analysis::experience::estimate_years_at;
use crate::analysis::normalize::normalize;
use crate::analysis::report::{
    length_advice, surface_feedback, verdict_for, AnalysisOutcome, AtsReport, RejectionNotice,
};
use crate::spellcheck::Dictionary;

const STARTING_SCORE: i32 = 100;

/// Analyzes extracted document text, resolving "present"/"current" date
/// ranges against the wall clock.
pub fn analyze_text(raw_text: &str, dictionary: &dyn Dictionary) -> AnalysisOutcome {
    analyze_text_at(raw_text, dictionary, Utc::now().year())
}

/// Same as [`analyze_text`] with an explicit current year, keeping results
/// deterministic under test.
pub fn analyze_text_at(
    raw_text: &str,
    dictionary: &dyn Dictionary,
    current_year: i32,
) -> AnalysisOutcome {
    let text = normalize(raw_text);

    if let Some(reason) = rejection_reason(&text) {
        return AnalysisOutcome::NotResume(RejectionNotice {
            is_resume: false,
            message: reason.to_string(),
        });
    }

    let mut score = STARTING_SCORE;
    let mut raw_issues = Vec::new();
    let mut raw_suggestions = Vec::new();

    let results = [
        check_contact(&text),
        check_sections(&text),
        check_length(&text),
        check_bullets(&text),
        check_spelling(&text, dictionary),
    ];

    for result in results {
        raw_issues.extend(result.issues);
        raw_suggestions.extend(result.suggestions);
        score += result.penalty;
    }

    let experience_years = estimate_years_at(&text, current_year);

    score = score.clamp(0, 100);
    let (issues, suggestions) = surface_feedback(score, raw_issues, raw_suggestions);

    AnalysisOutcome::Scored(AtsReport {
        is_resume: true,
        ats_score: score,
        verdict: verdict_for(score).to_string(),
        experience_years,
        resume_length_advice: length_advice(experience_years).to_string(),
        issues,
        suggestions,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
