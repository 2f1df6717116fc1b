use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier; the service may send it as a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ResourceId,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchLog {
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub profile_id: Option<ResourceId>,
    #[serde(default)]
    pub profile_name: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub device_id: Option<ResourceId>,
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default)]
    pub device_location: Option<String>,
    #[serde(default)]
    pub matched_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Optional filters for the match-log listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchLogFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub profile_id: Option<String>,
    pub device_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub active: bool,
}
