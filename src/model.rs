use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Read;

pub type Id = String;

/// A labelled, optionally hierarchical reference item: a cast member, crime
/// attribute, transport, location, product, or geographic location.
///
/// Parents form a DAG, not necessarily a tree; an entity may belong to more
/// than one category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entity {
    pub id: Id,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<Id>,
}

/// A structured narrative of a criminal method, composed of scenes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrimeScript {
    pub id: Id,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

/// A step in a crime script. A scene can offer several interchangeable act
/// variants; `act_id` is the currently selected one, `variants` lists all
/// candidates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub id: Id,
    #[serde(default)]
    pub act_id: Id,
    #[serde(default)]
    pub variants: Vec<Id>,
}

/// One concrete variant of a scene.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Act {
    pub id: Id,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location_ids: Vec<Id>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub measures: Vec<Measure>,
}

/// An atomic action within an act, referencing entities by role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Activity {
    pub id: Id,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cast: Vec<Id>,
    #[serde(default)]
    pub attributes: Vec<Id>,
    #[serde(default)]
    pub transports: Vec<Id>,
    #[serde(default)]
    pub partners: Vec<Id>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionType {
    #[default]
    Prerequisite,
    Facilitator,
    Enforcement,
}

/// An opportunity or indicator attached to an act.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Condition {
    pub id: Id,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub condition_type: ConditionType,
}

/// A countermeasure, optionally assigned to partner organisations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Measure {
    pub id: Id,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub partners: Vec<Id>,
}

/// The full document graph: every crime script, the flat acts collection the
/// scenes reference into, and all entity collections.
///
/// Absent collections deserialize as empty; the search core treats
/// "collection absent" and "collection empty" identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataModel {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub crime_scripts: Vec<CrimeScript>,
    #[serde(default)]
    pub acts: Vec<Act>,
    #[serde(default)]
    pub cast: Vec<Entity>,
    #[serde(default)]
    pub attributes: Vec<Entity>,
    #[serde(default)]
    pub transports: Vec<Entity>,
    #[serde(default)]
    pub locations: Vec<Entity>,
    #[serde(default)]
    pub products: Vec<Entity>,
    #[serde(default)]
    pub geo_locations: Vec<Entity>,
    #[serde(default)]
    pub partners: Vec<Entity>,
}

impl DataModel {
    /// Load a model snapshot from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// A structured search filter: selected entity ids per role. Converted into
/// synthetic query text so structured and free-text search share one
/// ranking pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrimeScriptFilter {
    #[serde(default)]
    pub product_ids: Vec<Id>,
    #[serde(default)]
    pub geo_location_ids: Vec<Id>,
    #[serde(default)]
    pub location_ids: Vec<Id>,
    #[serde(default)]
    pub role_ids: Vec<Id>,
    #[serde(default)]
    pub attribute_ids: Vec<Id>,
    #[serde(default)]
    pub transport_ids: Vec<Id>,
}

impl CrimeScriptFilter {
    /// Every selected id, across all roles.
    pub fn selected_ids(&self) -> impl Iterator<Item = &Id> {
        self.product_ids
            .iter()
            .chain(&self.geo_location_ids)
            .chain(&self.location_ids)
            .chain(&self.role_ids)
            .chain(&self.attribute_ids)
            .chain(&self.transport_ids)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids().next().is_none()
    }
}
