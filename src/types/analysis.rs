// src/types/analysis.rs
//! Analysis output returned to report/export consumers

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};

use super::profile::Profile;

/// One improvement suggestion, either generated or taken from a fallback set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub title: String,
    pub details: String,
}

impl Improvement {
    pub fn new(title: &str, details: &str) -> Self {
        Self {
            title: title.to_string(),
            details: details.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityAction {
    pub title: String,
    pub action: String,
}

/// Combined analysis for a single profile.
///
/// Serializes as the original profile object with the derived fields laid
/// over it, so a derived key such as `occupation` replaces the raw one.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub profile: Profile,
    pub profile_pic: Option<String>,
    pub full_name: String,
    pub occupation: String,
    pub network_size: String,
    pub score: u8,
    pub highlights: Vec<String>,
    pub improvements: Vec<Improvement>,
    pub priority_actions: Vec<PriorityAction>,
}

impl Serialize for AnalysisResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut fields = match serde_json::to_value(&self.profile).map_err(S::Error::custom)? {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };

        if let Some(pic) = &self.profile_pic {
            fields.insert("profile_pic".to_string(), json!(pic));
        }
        fields.insert("full_name".to_string(), json!(self.full_name));
        fields.insert("occupation".to_string(), json!(self.occupation));
        fields.insert("network_size".to_string(), json!(self.network_size));
        fields.insert("score".to_string(), json!(self.score));
        fields.insert("highlights".to_string(), json!(self.highlights));
        fields.insert("improvements".to_string(), json!(self.improvements));
        fields.insert("priority_actions".to_string(), json!(self.priority_actions));

        fields.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields_override_profile_keys() {
        let profile: Profile = serde_json::from_str(
            r#"{"occupation": "", "headline": "Data Scientist", "city": "Lyon"}"#,
        )
        .unwrap();

        let result = AnalysisResult {
            profile,
            profile_pic: None,
            full_name: "Ada Lovelace".to_string(),
            occupation: "Data Scientist".to_string(),
            network_size: "0".to_string(),
            score: 42,
            highlights: vec!["a".into(), "b".into(), "c".into()],
            improvements: vec![Improvement::new("t", "d")],
            priority_actions: vec![],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["occupation"], "Data Scientist");
        assert_eq!(value["headline"], "Data Scientist");
        assert_eq!(value["city"], "Lyon");
        assert_eq!(value["score"], 42);
        assert_eq!(value["improvements"][0]["details"], "d");
        assert_eq!(value["priority_actions"], json!([]));
        assert!(value.get("profile_pic").is_none());
    }
}
