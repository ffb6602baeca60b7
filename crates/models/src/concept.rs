use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// One node of the clinical concept catalog.
///
/// `parent_ids` / `child_ids` keep the order they were ingested in. Nothing checks that the
/// referenced ids exist or that the two directions agree.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub concept_id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent_ids: Vec<String>,
    #[serde(default)]
    pub child_ids: Vec<String>,
    #[serde(default)]
    pub alternate_names: String,
}

impl Concept {
    pub fn new(
        concept_id: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        parent_ids: &[&str],
        child_ids: &[&str],
        alternate_names: impl Into<String>,
    ) -> Self {
        Self {
            concept_id: concept_id.into(),
            display_name: display_name.into(),
            description: description.into(),
            parent_ids: parent_ids.iter().map(|s| (*s).to_owned()).collect(),
            child_ids: child_ids.iter().map(|s| (*s).to_owned()).collect(),
            alternate_names: alternate_names.into(),
        }
    }

    /// Both the id and the display name must be non-empty.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.concept_id.is_empty() {
            return Err(ModelError::Validation("conceptId required".into()));
        }
        if self.display_name.is_empty() {
            return Err(ModelError::Validation("displayName required".into()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "concept")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub concept_id: String,
    pub display_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// JSON array text; keeps `[]` and `[""]` apart.
    #[sea_orm(column_type = "Text")]
    pub parent_ids: String,
    #[sea_orm(column_type = "Text")]
    pub child_ids: String,
    pub alternate_names: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn encode_ids(ids: &[String]) -> Result<String, ModelError> {
    serde_json::to_string(ids).map_err(|e| ModelError::Codec(e.to_string()))
}

fn decode_ids(column: &str, raw: &str) -> Result<Vec<String>, ModelError> {
    serde_json::from_str(raw).map_err(|e| ModelError::Codec(format!("{column}: {e}")))
}

impl TryFrom<&Concept> for ActiveModel {
    type Error = ModelError;

    fn try_from(c: &Concept) -> Result<Self, Self::Error> {
        Ok(ActiveModel {
            concept_id: Set(c.concept_id.clone()),
            display_name: Set(c.display_name.clone()),
            description: Set(c.description.clone()),
            parent_ids: Set(encode_ids(&c.parent_ids)?),
            child_ids: Set(encode_ids(&c.child_ids)?),
            alternate_names: Set(c.alternate_names.clone()),
        })
    }
}

impl TryFrom<Model> for Concept {
    type Error = ModelError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let parent_ids = decode_ids("parent_ids", &m.parent_ids)?;
        let child_ids = decode_ids("child_ids", &m.child_ids)?;
        Ok(Concept {
            concept_id: m.concept_id,
            display_name: m.display_name,
            description: m.description,
            parent_ids,
            child_ids,
            alternate_names: m.alternate_names,
        })
    }
}
