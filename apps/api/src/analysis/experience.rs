//! Experience estimation — isolates the experience-related span of the text
//! and converts its duration signals into total years.
//!
//! The estimate is a best-effort heuristic over free text. Signals are
//! additive and may overlap: "3 years 6 months" contributes both through the
//! combined pattern and through the bare "3 years" pattern. Only the months
//! figure inside a combined phrase is excluded from the standalone months
//! pattern, so it is not counted twice.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

const MONTHS_PER_YEAR: i64 = 12;

/// Internship experience counts at three quarters weight.
const INTERN_WEIGHT: f64 = 0.75;

/// Freelance currently carries full weight; the marker list is kept so the
/// weighting can diverge from 1.0 later.
const FREELANCE_WEIGHT: f64 = 1.0;

const FREELANCE_MARKERS: &[&str] = &["freelance", "freelancer", "self-employed"];

// Tried in order; the first match wins. Each pattern spans from a leading
// experience keyword up to the next section boundary or end of text.
static BLOCK_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?s)(work experience|experience|employment)(.*?)(education|skills|projects|certifications|$)",
        r"(?s)(freelance|freelancer|self-employed)(.*?)(education|skills|projects|certifications|$)",
        r"(?s)(internship|intern)(.*?)(education|skills|projects|certifications|$)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static RE_YEARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s+years?").unwrap());
static RE_YEARS_MONTHS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+years?\s+(\d+)\s+months?").unwrap());
static RE_MONTHS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s+months?").unwrap());
static RE_YEAR_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(19\d{2}|20\d{2})\s*(?:-|to)\s*(present|current|19\d{2}|20\d{2})").unwrap()
});

/// Returns the experience block of the text, or `None` when no leading
/// keyword is found. The block includes the leading keyword and the trailing
/// boundary keyword when present.
pub fn extract_experience_block(text: &str) -> Option<&str> {
    BLOCK_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text).map(|m| m.as_str()))
}

/// Estimates total experience in years from normalized text, resolving
/// "present"/"current" against the wall clock.
pub fn estimate_years(text: &str) -> f64 {
    estimate_years_at(text, Utc::now().year())
}

/// Same as [`estimate_years`], with an explicit current year so date-range
/// resolution stays deterministic under test.
pub fn estimate_years_at(text: &str, current_year: i32) -> f64 {
    let Some(block) = extract_experience_block(text) else {
        return 0.0;
    };

    // Every addend comes from a digit-only match, so the accumulator never
    // goes below zero; saturating arithmetic keeps absurd figures from
    // wrapping it.
    let mut total_months: i64 = 0;

    for caps in RE_YEARS.captures_iter(block) {
        if let Ok(years) = caps[1].parse::<f64>() {
            total_months = total_months.saturating_add((years * MONTHS_PER_YEAR as f64) as i64);
        }
    }

    let combined_spans: Vec<(usize, usize)> = RE_YEARS_MONTHS
        .find_iter(block)
        .map(|m| (m.start(), m.end()))
        .collect();

    for caps in RE_YEARS_MONTHS.captures_iter(block) {
        let years: i64 = caps[1].parse().unwrap_or(0);
        let months: i64 = caps[2].parse().unwrap_or(0);
        total_months = total_months
            .saturating_add(years.saturating_mul(MONTHS_PER_YEAR).saturating_add(months));
    }

    // Standalone months only: the months figure of a combined
    // "N years M months" phrase is already counted above.
    for caps in RE_MONTHS.captures_iter(block) {
        let Some(whole) = caps.get(0) else { continue };
        let in_combined = combined_spans
            .iter()
            .any(|&(start, end)| whole.start() >= start && whole.start() < end);
        if in_combined {
            continue;
        }
        if let Ok(months) = caps[1].parse::<i64>() {
            total_months = total_months.saturating_add(months);
        }
    }

    for caps in RE_YEAR_RANGE.captures_iter(block) {
        let Ok(start_year) = caps[1].parse::<i32>() else {
            continue;
        };
        let end_year = match &caps[2] {
            "present" | "current" => current_year,
            year => match year.parse::<i32>() {
                Ok(y) => y,
                Err(_) => continue,
            },
        };
        if end_year > start_year {
            // Both years are four digits, so the span itself cannot overflow.
            total_months =
                total_months.saturating_add(i64::from(end_year - start_year) * MONTHS_PER_YEAR);
        }
    }

    if block.contains("intern") {
        total_months = (total_months as f64 * INTERN_WEIGHT) as i64;
    }

    if FREELANCE_MARKERS.iter().any(|m| block.contains(*m)) {
        total_months = (total_months as f64 * FREELANCE_WEIGHT) as i64;
    }

    round_to_tenth(total_months as f64 / MONTHS_PER_YEAR as f64)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
