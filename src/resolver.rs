use std::collections::HashMap;

use crate::model::{DataModel, Entity};

/// Flattens every entity collection of the model into a single id lookup,
/// used to resolve the entity ids referenced from acts and activities into
/// labels, synonyms, and parents.
///
/// Ids are unique within a collection but only disjoint across collections
/// by construction in the surrounding application; on a cross-collection
/// collision the later collection wins.
pub struct EntityResolver<'a> {
    entities: HashMap<&'a str, &'a Entity>,
}

impl<'a> EntityResolver<'a> {
    pub fn new(model: &'a DataModel) -> Self {
        let mut entities = HashMap::new();
        for entity in model
            .cast
            .iter()
            .chain(&model.attributes)
            .chain(&model.transports)
            .chain(&model.locations)
            .chain(&model.products)
            .chain(&model.geo_locations)
        {
            entities.insert(entity.id.as_str(), entity);
        }
        Self { entities }
    }

    /// A miss means "entity not found"; callers skip the reference rather
    /// than treat it as an error.
    pub fn get(&self, id: &str) -> Option<&'a Entity> {
        self.entities.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str, label: &str) -> Entity {
        Entity {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    #[test]
    fn flattens_all_collections() {
        let model = DataModel {
            cast: vec![entity("c1", "Thief")],
            transports: vec![entity("t1", "Van")],
            geo_locations: vec![entity("g1", "Harbour")],
            ..Default::default()
        };
        let resolver = EntityResolver::new(&model);
        assert_eq!(resolver.len(), 3);
        assert_eq!(resolver.get("t1").unwrap().label, "Van");
        assert!(resolver.get("missing").is_none());
    }

    #[test]
    fn later_collection_wins_on_collision() {
        let model = DataModel {
            cast: vec![entity("x", "Cast entry")],
            products: vec![entity("x", "Product entry")],
            ..Default::default()
        };
        let resolver = EntityResolver::new(&model);
        assert_eq!(resolver.get("x").unwrap().label, "Product entry");
    }
}
