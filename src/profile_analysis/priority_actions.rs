// src/profile_analysis/priority_actions.rs
//! Ranked improvement actions. Rule order is output order.

use super::rules::{char_len, ScoringRules};
use crate::types::{PriorityAction, Profile};

pub const ENHANCE_TECHNICAL_DEPTH: &str = "Enhance Technical Depth";
pub const CRAFT_COMPELLING_SUMMARY: &str = "Craft Compelling Summary";
pub const DETAIL_PROJECT_IMPACT: &str = "Detail Project Impact";
pub const ADD_TECHNICAL_CREDENTIALS: &str = "Add Technical Credentials";

const ACTIONS: [(&str, &str); 4] = [
    (
        ENHANCE_TECHNICAL_DEPTH,
        "Add detailed technical specifications and outcomes for your AI projects. Include frameworks used, architecture decisions, and performance metrics.",
    ),
    (
        CRAFT_COMPELLING_SUMMARY,
        "Write a technical summary that showcases your AI expertise, vision for technology, and unique approach to solving complex problems.",
    ),
    (
        DETAIL_PROJECT_IMPACT,
        "For each role, describe 2-3 major projects with quantifiable results. Example: 'Developed NLP model achieving 95% accuracy, processing 1M+ customer queries monthly'.",
    ),
    (
        ADD_TECHNICAL_CREDENTIALS,
        "Pursue advanced AI certifications from recognized providers like Google, AWS, or specialized deep learning courses.",
    ),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityActionSelector {
    rules: ScoringRules,
}

impl PriorityActionSelector {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn priority_actions(&self, profile: &Profile, score: u8) -> Vec<PriorityAction> {
        let fired = [
            score < self.rules.technical_depth_score,
            self.needs_summary(profile),
            self.needs_project_detail(profile),
            profile.certifications().len() <= self.rules.max_certifications_for_credentials,
        ];

        ACTIONS
            .iter()
            .zip(fired)
            .filter(|(_, fired)| *fired)
            .take(self.rules.max_priority_actions)
            .map(|((title, action), _)| PriorityAction {
                title: title.to_string(),
                action: action.to_string(),
            })
            .collect()
    }

    fn needs_summary(&self, profile: &Profile) -> bool {
        profile
            .summary()
            .map_or(true, |summary| char_len(summary) < self.rules.summary_min_chars)
    }

    fn needs_project_detail(&self, profile: &Profile) -> bool {
        !profile.experiences().iter().any(|exp| {
            exp.description()
                .is_some_and(|desc| char_len(desc) > self.rules.detailed_description_chars)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Certification, Experience};

    fn titles(actions: &[PriorityAction]) -> Vec<&str> {
        actions.iter().map(|a| a.title.as_str()).collect()
    }

    fn certs(count: usize) -> Option<Vec<Certification>> {
        Some(
            (0..count)
                .map(|i| Certification {
                    name: Some(format!("Cert {}", i)),
                    ..Default::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_low_score_short_summary_caps_at_three() {
        let profile = Profile {
            summary: Some("s".repeat(50)),
            experiences: Some(vec![Experience {
                description: Some("d".repeat(150)),
                ..Default::default()
            }]),
            certifications: certs(1),
            ..Default::default()
        };

        let actions = PriorityActionSelector::default().priority_actions(&profile, 65);
        assert_eq!(
            titles(&actions),
            vec![
                ENHANCE_TECHNICAL_DEPTH,
                CRAFT_COMPELLING_SUMMARY,
                DETAIL_PROJECT_IMPACT
            ]
        );
    }

    #[test]
    fn test_strong_profile_has_no_actions() {
        let profile = Profile {
            summary: Some("s".repeat(200)),
            experiences: Some(vec![Experience {
                description: Some("d".repeat(201)),
                ..Default::default()
            }]),
            certifications: certs(3),
            ..Default::default()
        };

        let actions = PriorityActionSelector::default().priority_actions(&profile, 70);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_later_rule_fills_slot_when_earlier_ones_skip() {
        let profile = Profile {
            summary: Some("s".repeat(300)),
            certifications: None,
            ..Default::default()
        };

        let actions = PriorityActionSelector::default().priority_actions(&profile, 90);
        assert_eq!(
            titles(&actions),
            vec![DETAIL_PROJECT_IMPACT, ADD_TECHNICAL_CREDENTIALS]
        );
        assert!(actions[1].action.contains("AI certifications"));
    }

    #[test]
    fn test_description_of_exactly_threshold_is_not_detailed() {
        let profile = Profile {
            summary: Some("s".repeat(300)),
            experiences: Some(vec![Experience {
                description: Some("d".repeat(200)),
                ..Default::default()
            }]),
            certifications: certs(5),
            ..Default::default()
        };

        let actions = PriorityActionSelector::default().priority_actions(&profile, 80);
        assert_eq!(titles(&actions), vec![DETAIL_PROJECT_IMPACT]);
    }

    #[test]
    fn test_never_more_than_three() {
        let actions = PriorityActionSelector::default().priority_actions(&Profile::default(), 0);
        assert_eq!(actions.len(), 3);
    }
}
