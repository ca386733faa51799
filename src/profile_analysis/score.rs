// src/profile_analysis/score.rs
//! Deterministic 0-100 profile score built from weighted categories

use super::rules::{char_len, contains_any, ScoringRules};
use crate::types::Profile;

/// Per-category contributions, in hundredths of a point so that half points
/// (e.g. 7.5 for non-matching skills) stay exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub experience: u32,
    pub skills: u32,
    pub education: u32,
    pub certifications: u32,
    pub completeness: u32,
    /// Raw completeness tally before scaling (0..=15).
    pub completeness_tally: u32,
}

impl ScoreBreakdown {
    pub fn total_hundredths(&self) -> u32 {
        self.experience + self.skills + self.education + self.certifications + self.completeness
    }

    /// Sum rounded half-up to the nearest integer.
    pub fn score(&self) -> u8 {
        ((self.total_hundredths() + 50) / 100).min(100) as u8
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine {
    rules: ScoringRules,
}

impl ScoreEngine {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn score(&self, profile: &Profile) -> u8 {
        self.breakdown(profile).score()
    }

    pub fn breakdown(&self, profile: &Profile) -> ScoreBreakdown {
        let completeness_tally = self.completeness_tally(profile);
        let completeness = completeness_tally * self.rules.completeness.full()
            / self.rules.completeness_max();

        ScoreBreakdown {
            experience: self.experience_quality(profile),
            skills: self.skills_relevance(profile),
            education: self.education_strength(profile),
            certifications: self.certification_strength(profile),
            completeness,
            completeness_tally,
        }
    }

    fn experience_quality(&self, profile: &Profile) -> u32 {
        let experiences = profile.experiences();
        if experiences.is_empty() {
            return 0;
        }

        let weight = self.rules.experience;
        let has_quality_experience = experiences.iter().any(|exp| {
            exp.description().is_some_and(|desc| {
                char_len(desc) > self.rules.quality_description_chars
                    && contains_any(desc, self.rules.experience_keywords)
            })
        });

        if has_quality_experience {
            weight.full()
        } else {
            weight.partial()
        }
    }

    fn skills_relevance(&self, profile: &Profile) -> u32 {
        let skills = profile.skills();
        if skills.is_empty() {
            return 0;
        }

        let weight = self.rules.skills;
        if skills
            .iter()
            .any(|skill| contains_any(skill, self.rules.relevant_skills))
        {
            weight.full()
        } else {
            weight.partial()
        }
    }

    fn education_strength(&self, profile: &Profile) -> u32 {
        let education = profile.education();
        if education.is_empty() {
            return 0;
        }

        let weight = self.rules.education;
        let relevant = education.iter().any(|edu| {
            edu.field_of_study()
                .is_some_and(|field| contains_any(field, self.rules.education_fields))
        });

        if relevant {
            weight.full()
        } else {
            weight.partial()
        }
    }

    fn certification_strength(&self, profile: &Profile) -> u32 {
        let certifications = profile.certifications();
        if certifications.is_empty() {
            return 0;
        }

        let weight = self.rules.certifications;
        if certifications
            .iter()
            .any(|cert| contains_any(cert.name(), self.rules.certification_keywords))
        {
            weight.full()
        } else {
            weight.partial()
        }
    }

    fn completeness_tally(&self, profile: &Profile) -> u32 {
        let checks = [
            profile.summary().is_some(),
            !profile.experiences().is_empty(),
            !profile.education().is_empty(),
            !profile.skills().is_empty(),
            profile.profile_pic_url().is_some(),
        ];

        checks.iter().filter(|passed| **passed).count() as u32
            * self.rules.completeness_check_points
    }
}
