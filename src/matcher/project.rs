use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One project in the catalog snapshot handed to the matcher.
///
/// Only `skills_required` feeds the algorithm; everything else is carried
/// through untouched. Records frequently arrive with extra fields from the
/// backing store, so unknown keys land in `extra` and survive a serde
/// round-trip instead of being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub skills_required: Vec<String>,
    /// Opaque passthrough payload, never inspected by the matcher.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectRecord {
    pub fn new<S: Into<String>>(
        id: S,
        owner_id: S,
        title: S,
        description: S,
        skills_required: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            title: title.into(),
            description: description.into(),
            skills_required,
            extra: Map::new(),
        }
    }
}

/// A scored project: the record plus its cosine similarity in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProject {
    #[serde(flatten)]
    pub project: ProjectRecord,
    pub similarity: f64,
}
