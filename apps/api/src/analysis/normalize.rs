//! Text normalization, the first pipeline stage.

/// Lower-cases extracted document text and trims both ends. Interior
/// whitespace is kept as-is so line structure survives for block isolation.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_text() {
        assert_eq!(normalize("Work EXPERIENCE"), "work experience");
    }

    #[test]
    fn test_trims_outer_whitespace() {
        assert_eq!(normalize("  skills  \n\n"), "skills");
    }

    #[test]
    fn test_interior_whitespace_is_preserved() {
        assert_eq!(normalize("Education\n\nSkills  list"), "education\n\nskills  list");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
