// src/profile_analysis/rules.rs
//! Weights, keyword sets and thresholds used by the heuristic layer

/// Points a category is worth and the share granted when the category is
/// present but does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryWeight {
    pub points: u32,
    pub partial_percent: u32,
}

impl CategoryWeight {
    /// Full credit in hundredths of a point.
    pub fn full(&self) -> u32 {
        self.points * 100
    }

    /// Partial credit in hundredths of a point.
    pub fn partial(&self) -> u32 {
        self.points * self.partial_percent
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub experience: CategoryWeight,
    pub skills: CategoryWeight,
    pub education: CategoryWeight,
    pub certifications: CategoryWeight,
    pub completeness: CategoryWeight,

    /// Points per completeness check; five checks make the sub-tally.
    pub completeness_check_points: u32,

    /// An experience description must be strictly longer than this to count
    /// as quality experience.
    pub quality_description_chars: usize,
    pub experience_keywords: &'static [&'static str],
    pub relevant_skills: &'static [&'static str],
    pub education_fields: &'static [&'static str],
    pub certification_keywords: &'static [&'static str],
    pub highlight_certification_keywords: &'static [&'static str],
    pub highlight_certification_limit: usize,

    pub technical_depth_score: u8,
    pub summary_min_chars: usize,
    pub detailed_description_chars: usize,
    pub max_certifications_for_credentials: usize,
    pub max_priority_actions: usize,
}

pub const STANDARD_RULES: ScoringRules = ScoringRules {
    experience: CategoryWeight {
        points: 30,
        partial_percent: 50,
    },
    skills: CategoryWeight {
        points: 25,
        partial_percent: 30,
    },
    education: CategoryWeight {
        points: 15,
        partial_percent: 50,
    },
    certifications: CategoryWeight {
        points: 15,
        partial_percent: 50,
    },
    completeness: CategoryWeight {
        points: 15,
        partial_percent: 0,
    },
    completeness_check_points: 3,

    quality_description_chars: 100,
    experience_keywords: &["ai", "machine learning"],
    relevant_skills: &[
        "artificial intelligence",
        "machine learning",
        "python",
        "deep learning",
        "data science",
    ],
    education_fields: &["computer", "engineering", "mathematics"],
    certification_keywords: &["ai", "machine learning"],
    highlight_certification_keywords: &["ai", "machine learning", "data"],
    highlight_certification_limit: 2,

    technical_depth_score: 70,
    summary_min_chars: 200,
    detailed_description_chars: 200,
    max_certifications_for_credentials: 2,
    max_priority_actions: 3,
};

impl ScoringRules {
    /// Highest possible completeness sub-tally (five checks).
    pub fn completeness_max(&self) -> u32 {
        self.completeness_check_points * 5
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        STANDARD_RULES
    }
}

/// Case-insensitive substring match against any keyword.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword))
}

/// Length in characters, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one_hundred() {
        let rules = ScoringRules::default();
        let total = rules.experience.points
            + rules.skills.points
            + rules.education.points
            + rules.certifications.points
            + rules.completeness.points;
        assert_eq!(total, 100);
        assert_eq!(rules.completeness_max(), 15);
    }

    #[test]
    fn test_partial_credit_in_hundredths() {
        assert_eq!(STANDARD_RULES.experience.partial(), 1500);
        assert_eq!(STANDARD_RULES.skills.partial(), 750);
        assert_eq!(STANDARD_RULES.skills.full(), 2500);
    }

    #[test]
    fn test_contains_any_ignores_case() {
        assert!(contains_any("Built ML pipelines with Machine Learning", &["machine learning"]));
        assert!(contains_any("PYTHON", &["python"]));
        assert!(!contains_any("Rust", &["python", "java"]));
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!("héllo".len(), 6);
    }
}
