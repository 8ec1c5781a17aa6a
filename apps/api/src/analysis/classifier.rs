//! Resume classification — decides whether extracted text plausibly is a
//! resume before any scoring runs.

/// Section keywords that indicate structural resume content. Matched as
/// substrings, so derived forms ("experienced", "internships") count too.
const CORE_SECTIONS: &[&str] = &[
    "education",
    "experience",
    "skills",
    "projects",
    "certifications",
    "summary",
    "profile",
    "internship",
    "freelance",
];

const MIN_WORD_COUNT: usize = 180;
const MIN_SECTION_HITS: usize = 2;

/// Returns `None` when the text passes the resume gate, otherwise the
/// human-readable rejection reason. The word-count rule wins over the
/// structure rule when both would fire.
pub fn rejection_reason(text: &str) -> Option<&'static str> {
    let word_count = text.split_whitespace().count();
    let section_hits = CORE_SECTIONS
        .iter()
        .filter(|section| text.contains(**section))
        .count();

    if word_count < MIN_WORD_COUNT {
        return Some("File content too short to be a resume");
    }

    if section_hits < MIN_SECTION_HITS {
        return Some("Uploaded file does not match resume structure");
    }

    None
}
