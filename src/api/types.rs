use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single dog picture as reported by the service.
///
/// Immutable once deserialized. Two dogs are the same dog when their `id`s
/// match; the other fields do not take part in equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dog {
    /// Identifier of the image.
    pub id: String,
    /// Location of the image.
    pub url: String,
    /// When the picture was taken, verbatim from the service.
    pub time: String,
    /// Image format (e.g., "jpg").
    pub format: String,
}

impl Dog {
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        time: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            time: time.into(),
            format: format.into(),
        }
    }
}

impl PartialEq for Dog {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Dog {}

impl Hash for Dog {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Wire payload of `GET /api/v1/dog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogsResponse {
    #[serde(default)]
    pub data: Vec<Dog>,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub error: Option<String>,
}

impl DogsResponse {
    /// The service-reported error, if it carries a non-empty one.
    pub fn service_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.trim().is_empty())
    }
}
