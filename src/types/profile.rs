// src/types/profile.rs
//! Profile record as delivered by the profile provider (Proxycurl shape)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ===== Profile =====

/// A professional profile. Every field is optional: absent, `null` and empty
/// collections all read back as an empty slice through the accessors below.
/// Keys the analysis never looks at are kept in `extra` so the record can be
/// echoed back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<Connections>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiences: Option<Vec<Experience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<Certification>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accomplishment_projects: Option<Vec<AccomplishmentProject>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccomplishmentProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Network size indicator. Proxycurl sends a number, older exports a label
/// such as "500+".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Connections {
    Count(u64),
    Label(String),
}

impl fmt::Display for Connections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connections::Count(count) => write!(f, "{}", count),
            Connections::Label(label) => f.write_str(label),
        }
    }
}

// ===== Accessors =====

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Profile {
    pub fn first_name(&self) -> Option<&str> {
        non_empty(&self.first_name)
    }

    pub fn last_name(&self) -> Option<&str> {
        non_empty(&self.last_name)
    }

    pub fn occupation(&self) -> Option<&str> {
        non_empty(&self.occupation)
    }

    pub fn headline(&self) -> Option<&str> {
        non_empty(&self.headline)
    }

    pub fn profile_pic_url(&self) -> Option<&str> {
        non_empty(&self.profile_pic_url)
    }

    pub fn summary(&self) -> Option<&str> {
        non_empty(&self.summary)
    }

    /// Most recent first, in provider order.
    pub fn experiences(&self) -> &[Experience] {
        self.experiences.as_deref().unwrap_or_default()
    }

    pub fn education(&self) -> &[Education] {
        self.education.as_deref().unwrap_or_default()
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }

    pub fn certifications(&self) -> &[Certification] {
        self.certifications.as_deref().unwrap_or_default()
    }

    pub fn accomplishment_projects(&self) -> &[AccomplishmentProject] {
        self.accomplishment_projects.as_deref().unwrap_or_default()
    }

    /// Network size as displayed; "0" when unknown.
    pub fn network_size(&self) -> String {
        match &self.connections {
            Some(Connections::Label(label)) if label.is_empty() => "0".to_string(),
            Some(connections) => connections.to_string(),
            None => "0".to_string(),
        }
    }
}

impl Experience {
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn company(&self) -> Option<&str> {
        non_empty(&self.company)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }
}

impl Education {
    pub fn field_of_study(&self) -> Option<&str> {
        non_empty(&self.field_of_study)
    }
}

impl Certification {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
