use serde::Serialize;
use std::collections::HashMap;

use crate::lang::Language;
use crate::model::{Act, DataModel, Id};
use crate::resolver::EntityResolver;
use crate::tokenizer::tokenize;

/// Strength of a single term match, strongest first. Weights are ordinal,
/// not additive in meaning, but are summed across entries when a script's
/// total relevance is aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchScore {
    /// The term matched the label or a synonym of a directly referenced
    /// entity.
    Exact,
    /// The term matched a direct parent of a referenced entity.
    Parent,
    /// Free-text match on a label or description.
    Other,
}

impl MatchScore {
    pub fn weight(self) -> u32 {
        match self {
            MatchScore::Exact => 3,
            MatchScore::Parent => 2,
            MatchScore::Other => 1,
        }
    }
}

/// Where in the document graph a term matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    /// The script's own label or description; no finer location.
    Script,
    /// Inside one act variant. `act` is the position in the flat acts
    /// collection, since an act instance can be referenced by several
    /// scenes. `phase` is retained as a locator dimension; the current data
    /// shape has a single implicit phase per act.
    Act { act: usize, phase: usize },
}

/// One hit for one term: which script, where in it, and how strong. Entity
/// hits carry the matched entity's label so callers can show why a location
/// matched.
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    pub script: usize,
    pub location: Location,
    pub score: MatchScore,
    pub matched: Option<String>,
}

/// Term → hit list over the whole document graph. Rebuilt wholesale on
/// every model change; the corpus is small enough that a rebuild is O(total
/// text size) and incremental updates are not worth their complexity.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    terms: HashMap<String, Vec<IndexEntry>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn lookup(&self, term: &str) -> &[IndexEntry] {
        self.terms.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entity labels and synonyms are indexed whole, so the key is trimmed
    /// and lowercased here; tokenized terms pass through unchanged.
    fn push(&mut self, word: &str, entry: IndexEntry) {
        let key = word.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        self.terms.entry(key).or_default().push(entry);
    }
}

// The legacy multi-phase-per-act structure collapsed to a single phase.
const PHASE: usize = 0;

/// Walk the full document graph and build a fresh inverted index.
///
/// Scripts contribute their label and description at [`MatchScore::Other`]
/// with a script-level location. Each act variant a scene references
/// contributes its locations, activities (free text plus entity references
/// by role), and conditions. An act id that does not resolve into the flat
/// acts collection is skipped; partially migrated models are expected.
pub fn build_index(model: &DataModel, lang: &Language) -> InvertedIndex {
    let resolver = EntityResolver::new(model);
    let mut index = InvertedIndex::new();

    for (script_idx, script) in model.crime_scripts.iter().enumerate() {
        let text = format!("{} {}", script.label, script.description);
        for term in tokenize(&text, lang) {
            index.push(
                &term,
                IndexEntry {
                    script: script_idx,
                    location: Location::Script,
                    score: MatchScore::Other,
                    matched: None,
                },
            );
        }
        for scene in &script.scenes {
            for act_id in &scene.variants {
                let Some(act_idx) = model.acts.iter().position(|a| &a.id == act_id) else {
                    continue;
                };
                index_act(&mut index, &resolver, lang, script_idx, act_idx, &model.acts[act_idx]);
            }
        }
    }

    tracing::info!(
        num_scripts = model.crime_scripts.len(),
        num_terms = index.len(),
        "inverted index rebuilt"
    );
    index
}

fn index_act(
    index: &mut InvertedIndex,
    resolver: &EntityResolver,
    lang: &Language,
    script: usize,
    act_idx: usize,
    act: &Act,
) {
    let location = Location::Act { act: act_idx, phase: PHASE };

    index_entity_refs(index, resolver, &act.location_ids, script, location, MatchScore::Exact);

    for activity in &act.activities {
        let text = format!("{} {}", activity.label, activity.description);
        for term in tokenize(&text, lang) {
            index.push(
                &term,
                IndexEntry { script, location, score: MatchScore::Other, matched: None },
            );
        }
        for role in [&activity.cast, &activity.attributes, &activity.transports, &activity.partners] {
            index_entity_refs(index, resolver, role, script, location, MatchScore::Exact);
        }
    }

    for condition in &act.conditions {
        let text = format!("{} {}", condition.label, condition.description);
        for term in tokenize(&text, lang) {
            index.push(
                &term,
                IndexEntry { script, location, score: MatchScore::Other, matched: None },
            );
        }
    }
}

/// Index the label and synonyms of every resolvable entity in `ids` at
/// `score`. When indexing at [`MatchScore::Exact`], direct parents are
/// additionally indexed at [`MatchScore::Parent`] via a recursive call that
/// passes `Parent` down, so grandparents are never reached: one hop up,
/// deliberately.
fn index_entity_refs(
    index: &mut InvertedIndex,
    resolver: &EntityResolver,
    ids: &[Id],
    script: usize,
    location: Location,
    score: MatchScore,
) {
    for entity in ids.iter().filter_map(|id| resolver.get(id)) {
        index.push(
            &entity.label,
            IndexEntry { script, location, score, matched: Some(entity.label.clone()) },
        );
        for synonym in &entity.synonyms {
            index.push(
                synonym,
                IndexEntry { script, location, score, matched: Some(entity.label.clone()) },
            );
        }
        if score == MatchScore::Exact && !entity.parents.is_empty() {
            index_entity_refs(index, resolver, &entity.parents, script, location, MatchScore::Parent);
        }
    }
}
