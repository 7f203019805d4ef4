use parking_lot::RwLock;

use crate::aggregate::{aggregate_results, SearchResult};
use crate::index::{build_index, IndexEntry, InvertedIndex};
use crate::lang::{Language, Locale};
use crate::model::{CrimeScriptFilter, DataModel};
use crate::resolver::EntityResolver;
use crate::tokenizer::tokenize;

/// Holds the published inverted index and answers queries against it.
///
/// The index is pure derived state: [`SearchService::rebuild`] computes a
/// fresh index from a model snapshot and swaps it in atomically, so a reader
/// in flight keeps the previous index until the swap completes. Nothing is
/// ever patched in place.
pub struct SearchService {
    lang: Language,
    index: RwLock<InvertedIndex>,
}

impl SearchService {
    pub fn new(locale: Locale) -> Self {
        Self {
            lang: Language::new(locale),
            index: RwLock::new(InvertedIndex::new()),
        }
    }

    pub fn language(&self) -> &Language {
        &self.lang
    }

    /// Rebuild the index from a model snapshot and publish it. Call on every
    /// model change; a locale change requires a new service instead, since
    /// stemming and stopwords differ per locale.
    pub fn rebuild(&self, model: &DataModel) {
        let index = build_index(model, &self.lang);
        *self.index.write() = index;
    }

    /// Rank scripts for a free-text query. An empty query, or one reduced to
    /// nothing by tokenization, yields no results rather than all scripts.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let terms = tokenize(query, &self.lang);
        if terms.is_empty() {
            return Vec::new();
        }
        let index = self.index.read();
        let mut hits: Vec<IndexEntry> = Vec::new();
        for term in &terms {
            hits.extend_from_slice(index.lookup(term));
        }
        tracing::debug!(query, num_terms = terms.len(), num_hits = hits.len(), "search");
        aggregate_results(&hits)
    }

    /// Rank scripts for a structured filter plus optional free text. The
    /// selected entities' labels are joined into synthetic query text, so
    /// structured and free-text search share one ranking pipeline.
    pub fn search_by_filter(
        &self,
        filter: &CrimeScriptFilter,
        free_text: &str,
        model: &DataModel,
    ) -> Vec<SearchResult> {
        let labels = filter_to_text(model, filter);
        self.search(&format!("{labels} {free_text}"))
    }
}

/// Comma-joined labels of every entity the filter selects; unresolvable ids
/// are skipped.
pub fn filter_to_text(model: &DataModel, filter: &CrimeScriptFilter) -> String {
    let resolver = EntityResolver::new(model);
    filter
        .selected_ids()
        .filter_map(|id| resolver.get(id))
        .map(|entity| entity.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entity;

    #[test]
    fn filter_labels_comma_joined() {
        let model = DataModel {
            products: vec![Entity { id: "p1".into(), label: "Bicycle".into(), ..Default::default() }],
            transports: vec![Entity { id: "t1".into(), label: "Cargo van".into(), ..Default::default() }],
            ..Default::default()
        };
        let filter = CrimeScriptFilter {
            product_ids: vec!["p1".into()],
            transport_ids: vec!["t1".into(), "unknown".into()],
            ..Default::default()
        };
        assert_eq!(filter_to_text(&model, &filter), "Bicycle, Cargo van");
    }

    #[test]
    fn empty_query_returns_no_results() {
        let service = SearchService::new(Locale::En);
        service.rebuild(&DataModel::default());
        assert!(service.search("").is_empty());
        assert!(service.search("the and of").is_empty());
    }
}
