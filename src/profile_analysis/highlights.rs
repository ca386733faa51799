// src/profile_analysis/highlights.rs
//! Three short narrative highlights, most relevant first

use super::rules::{contains_any, ScoringRules};
use crate::types::Profile;

pub const HIGHLIGHT_COUNT: usize = 3;

const ACHIEVEMENT_HIGHLIGHT: &str = "Demonstrated success in developing AI solutions, including automated systems and machine learning models";

const FALLBACK_HIGHLIGHTS: [&str; HIGHLIGHT_COUNT] = [
    "Innovative approach to AI development with focus on practical business applications",
    "Strong foundation in both technical implementation and strategic planning",
    "Proven track record of delivering impactful technology solutions",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightExtractor {
    rules: ScoringRules,
}

impl HighlightExtractor {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// Always returns exactly three highlights.
    pub fn highlights(&self, profile: &Profile) -> Vec<String> {
        let mut highlights: Vec<String> = [
            self.role_highlight(profile),
            self.expertise_highlight(profile),
            self.achievement_highlight(profile),
        ]
        .into_iter()
        .flatten()
        .collect();

        while highlights.len() < HIGHLIGHT_COUNT {
            highlights.push(FALLBACK_HIGHLIGHTS[highlights.len()].to_string());
        }
        highlights.truncate(HIGHLIGHT_COUNT);
        highlights
    }

    fn role_highlight(&self, profile: &Profile) -> Option<String> {
        let most_recent = profile.experiences().first()?;
        let title = most_recent.title()?;
        let company = most_recent.company()?;

        Some(format!(
            "Leading {} as {}, focusing on AI development and automation solutions",
            company, title
        ))
    }

    fn expertise_highlight(&self, profile: &Profile) -> Option<String> {
        let tech_stack: Vec<&str> = profile
            .certifications()
            .iter()
            .map(|cert| cert.name())
            .filter(|name| contains_any(name, self.rules.highlight_certification_keywords))
            .take(self.rules.highlight_certification_limit)
            .collect();

        if tech_stack.is_empty() {
            return None;
        }

        Some(format!(
            "Certified expertise in {}, demonstrating commitment to AI advancement",
            tech_stack.join(" and ")
        ))
    }

    // Presence of projects or a summary gates a templated sentence; their
    // text is never echoed.
    fn achievement_highlight(&self, profile: &Profile) -> Option<String> {
        if profile.accomplishment_projects().is_empty() && profile.summary().is_none() {
            return None;
        }
        Some(ACHIEVEMENT_HIGHLIGHT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccomplishmentProject, Certification, Experience};

    fn cert(name: &str) -> Certification {
        Certification {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_profile_uses_all_fallbacks() {
        let highlights = HighlightExtractor::default().highlights(&Profile::default());
        assert_eq!(highlights, FALLBACK_HIGHLIGHTS.map(String::from).to_vec());
    }

    #[test]
    fn test_all_three_sources() {
        let profile = Profile {
            experiences: Some(vec![
                Experience {
                    title: Some("ML Lead".to_string()),
                    company: Some("Acme".to_string()),
                    ..Default::default()
                },
                Experience {
                    title: Some("Intern".to_string()),
                    company: Some("Older Corp".to_string()),
                    ..Default::default()
                },
            ]),
            certifications: Some(vec![
                cert("Scrum Master"),
                cert("AWS Machine Learning Specialty"),
                cert("Data Engineering on GCP"),
                cert("Azure AI Fundamentals"),
            ]),
            summary: Some("Building things".to_string()),
            ..Default::default()
        };

        let highlights = HighlightExtractor::default().highlights(&profile);
        assert_eq!(
            highlights,
            vec![
                "Leading Acme as ML Lead, focusing on AI development and automation solutions",
                "Certified expertise in AWS Machine Learning Specialty and Data Engineering on GCP, demonstrating commitment to AI advancement",
                ACHIEVEMENT_HIGHLIGHT,
            ]
        );
    }

    #[test]
    fn test_padding_uses_fallback_at_current_length() {
        let profile = Profile {
            accomplishment_projects: Some(vec![AccomplishmentProject {
                description: Some("A chatbot".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let highlights = HighlightExtractor::default().highlights(&profile);
        assert_eq!(highlights.len(), 3);
        assert_eq!(highlights[0], ACHIEVEMENT_HIGHLIGHT);
        assert_eq!(highlights[1], FALLBACK_HIGHLIGHTS[1]);
        assert_eq!(highlights[2], FALLBACK_HIGHLIGHTS[2]);
    }

    #[test]
    fn test_role_highlight_skipped_without_company() {
        let profile = Profile {
            experiences: Some(vec![Experience {
                title: Some("Engineer".to_string()),
                ..Default::default()
            }]),
            certifications: Some(vec![cert("PMP")]),
            ..Default::default()
        };

        let highlights = HighlightExtractor::default().highlights(&profile);
        assert_eq!(highlights, FALLBACK_HIGHLIGHTS.map(String::from).to_vec());
    }

    #[test]
    fn test_highlights_are_deterministic() {
        let profile = Profile {
            summary: Some("hello".to_string()),
            ..Default::default()
        };
        let extractor = HighlightExtractor::default();
        assert_eq!(extractor.highlights(&profile), extractor.highlights(&profile));
    }
}
