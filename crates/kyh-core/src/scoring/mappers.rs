//! Free-text classifiers feeding the scoring stages.
//!
//! All matching is case-insensitive and unrecognized text scores 0.

const SCORE_KEYWORD: &str = "score";

/// Find the first "Score <integer>" in `text` and return the integer.
///
/// At least one whitespace character must separate the keyword from the
/// digits. A number too large for `u32` saturates. Returns 0 when no such
/// pattern exists.
pub fn extract_numeric_score(text: &str) -> u32 {
    let lower = text.to_ascii_lowercase();
    lower
        .match_indices(SCORE_KEYWORD)
        .find_map(|(idx, keyword)| score_digits(&lower[idx + keyword.len()..]))
        .unwrap_or(0)
}

fn score_digits(rest: &str) -> Option<u32> {
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return None;
    }
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if end == 0 {
        return None;
    }
    Some(trimmed[..end].parse().unwrap_or(u32::MAX))
}

pub fn metal_category_score(text: &str) -> u32 {
    let lower = text.to_lowercase();
    if lower.contains("category 1") {
        6
    } else if lower.contains("category 2") {
        5
    } else {
        0
    }
}

pub fn bioaccumulation_concern_score(text: &str) -> u32 {
    let lower = text.to_lowercase();
    if lower.contains("high concern") {
        3
    } else if lower.contains("moderate concern") {
        2
    } else {
        0
    }
}

pub fn bioaccumulation_trigger_score(text: &str) -> u32 {
    let lower = text.to_lowercase();
    if lower.contains("vpvb") {
        3
    } else if lower.contains("pbt") {
        2
    } else {
        0
    }
}

/// "vPvB" anywhere scores 3; a bare "P" label scores 2.
pub fn pbt_label_score(text: &str) -> u32 {
    let lower = text.trim().to_lowercase();
    if lower.contains("vpvb") {
        3
    } else if lower == "p" {
        2
    } else {
        0
    }
}

pub fn biodegradability_score(text: &str) -> u32 {
    let lower = text.to_lowercase();
    if lower.contains("low") {
        2
    } else if lower.contains("moderate") {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_score_with_suffix() {
        assert_eq!(extract_numeric_score("Score 4 - Moderately Toxic"), 4);
    }

    #[test]
    fn test_extract_score_absent() {
        assert_eq!(extract_numeric_score("no score here"), 0);
        assert_eq!(extract_numeric_score(""), 0);
    }

    #[test]
    fn test_extract_score_needs_whitespace() {
        assert_eq!(extract_numeric_score("Score4"), 0);
        assert_eq!(extract_numeric_score("Score\t5"), 5);
    }

    #[test]
    fn test_extract_score_first_match_wins() {
        assert_eq!(extract_numeric_score("Score 2, revised Score 5"), 2);
        assert_eq!(extract_numeric_score("Score pending, Score 3"), 3);
    }

    #[test]
    fn test_extract_score_case_insensitive() {
        assert_eq!(extract_numeric_score("GESAMP SCORE 6"), 6);
    }

    #[test]
    fn test_extract_score_multi_digit() {
        assert_eq!(extract_numeric_score("Score 12"), 12);
    }

    #[test]
    fn test_extract_score_overflow_saturates() {
        assert_eq!(extract_numeric_score("Score 99999999999"), u32::MAX);
        assert_eq!(extract_numeric_score("Score 99999999999, Score 2"), u32::MAX);
    }

    #[test]
    fn test_metal_category() {
        assert_eq!(metal_category_score("Category 1"), 6);
        assert_eq!(metal_category_score("CATEGORY 2"), 5);
        assert_eq!(metal_category_score("None"), 0);
    }

    #[test]
    fn test_bioaccumulation_concern() {
        assert_eq!(bioaccumulation_concern_score("High Concern"), 3);
        assert_eq!(bioaccumulation_concern_score("moderate concern"), 2);
        assert_eq!(bioaccumulation_concern_score("low"), 0);
    }

    #[test]
    fn test_bioaccumulation_trigger() {
        assert_eq!(bioaccumulation_trigger_score("vPvB mixture"), 3);
        assert_eq!(bioaccumulation_trigger_score("PBT mixture"), 2);
        assert_eq!(bioaccumulation_trigger_score(""), 0);
    }

    #[test]
    fn test_pbt_label() {
        assert_eq!(pbt_label_score("vPvB"), 3);
        assert_eq!(pbt_label_score("  P "), 2);
        assert_eq!(pbt_label_score("PBT"), 0);
        assert_eq!(pbt_label_score("vP"), 0);
    }

    #[test]
    fn test_biodegradability() {
        assert_eq!(biodegradability_score("Low"), 2);
        assert_eq!(biodegradability_score("Moderate"), 1);
        assert_eq!(biodegradability_score("High"), 0);
    }
}
