//! Rule checks — five independent inspections of the normalized text.
//!
//! Each check returns a `CheckResult` with the issues it found, matching
//! suggestions, and a score penalty ≤ 0. Checks never see each other's
//! output; the scoring engine aggregates them.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::spellcheck::Dictionary;

/// Output of a single rule check. Issue and suggestion order within a check
/// is fixed; the engine preserves collection order until final deduplication.
#[derive(Debug, Default)]
pub struct CheckResult {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub penalty: i32,
}

static RE_EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w\.-]+@[\w\.-]+\.\w+").unwrap());

// Deliberately loose: an optional '+', one digit, then at least eight more
// digits, spaces, or hyphens. Date spans like "2019 - 2023" satisfy it.
static RE_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\s\-]{8,}").unwrap());

static RE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").unwrap());

/// Sections every resume is expected to carry, with the penalty for each.
const REQUIRED_SECTIONS: &[(&str, i32)] = &[
    ("education", 10),
    ("skills", 10),
    ("experience", 10),
    ("projects", 5),
];

const MIN_WORD_COUNT: usize = 300;
const MAX_WORD_COUNT: usize = 1200;
const MIN_BULLET_MARKS: usize = 5;
const MAX_SPELLING_PENALTY: usize = 10;

pub fn check_contact(text: &str) -> CheckResult {
    let mut result = CheckResult::default();

    if !RE_EMAIL.is_match(text) {
        result.issues.push("Email not found".to_string());
        result
            .suggestions
            .push("Add a professional email address".to_string());
        result.penalty -= 15;
    }

    if !RE_PHONE.is_match(text) {
        result.issues.push("Phone number not found".to_string());
        result
            .suggestions
            .push("Add a valid phone number".to_string());
        result.penalty -= 15;
    }

    result
}

pub fn check_sections(text: &str) -> CheckResult {
    let mut result = CheckResult::default();

    for &(section, penalty) in REQUIRED_SECTIONS {
        if !text.contains(section) {
            let title = title_case(section);
            result.issues.push(format!("Missing section: {title}"));
            result.suggestions.push(format!("Add a {title} section"));
            result.penalty -= penalty;
        }
    }

    result
}

pub fn check_length(text: &str) -> CheckResult {
    let mut result = CheckResult::default();
    let word_count = text.split_whitespace().count();

    if word_count < MIN_WORD_COUNT {
        result.issues.push("Resume too short".to_string());
        result
            .suggestions
            .push("Add more details and achievements".to_string());
        result.penalty -= 10;
    }

    if word_count > MAX_WORD_COUNT {
        result.issues.push("Resume too long".to_string());
        result
            .suggestions
            .push("Reduce content to improve ATS parsing".to_string());
        result.penalty -= 10;
    }

    result
}

pub fn check_bullets(text: &str) -> CheckResult {
    let mut result = CheckResult::default();
    let bullet_marks = text
        .chars()
        .filter(|c| matches!(c, '-' | '•' | '*'))
        .count();

    if bullet_marks < MIN_BULLET_MARKS {
        result.issues.push("Low use of bullet points".to_string());
        result
            .suggestions
            .push("Use bullet points to improve ATS readability".to_string());
        result.penalty -= 5;
    }

    result
}

pub fn check_spelling(text: &str, dictionary: &dyn Dictionary) -> CheckResult {
    let mut result = CheckResult::default();

    let words: Vec<&str> = RE_WORD.find_iter(text).map(|m| m.as_str()).collect();
    let misspelled = dictionary.unknown(&words);

    if !misspelled.is_empty() {
        result.issues.push("Spelling mistakes detected".to_string());
        result
            .suggestions
            .push("Proofread resume for spelling errors".to_string());
        result.penalty -= misspelled.len().min(MAX_SPELLING_PENALTY) as i32;
    }

    result
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
