//! Catalog query engine: category filter, text search and stable sort over
//! the service catalog, plus the caller-owned filter state that drives it.

use crate::core::catalog::Catalog;
use crate::domain::model::{FilterSpec, FilterUpdate, ServiceCategory, ServiceEntry, SortOrder};
use std::cell::OnceCell;
use std::cmp::Ordering;
use std::sync::Arc;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Orders strings the way an English collator does. Base letters compare
/// first with accents and case ignored, then accents (unaccented first), then
/// case (lower case first).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = folded(a)
        .filter(|c| !is_combining_mark(*c))
        .cmp(folded(b).filter(|c| !is_combining_mark(*c)));

    primary
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| {
            a.nfd()
                .zip(b.nfd())
                .find(|(x, y)| x != y)
                .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                })
                .unwrap_or(Ordering::Equal)
        })
}

fn matches_search(entry: &ServiceEntry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
        || entry
            .features
            .iter()
            .any(|feature| feature.to_lowercase().contains(needle))
}

/// Applies `filter` to `services`: category, then search, then sort.
///
/// Always returns a fresh vector; the input slice is never touched. The sort
/// is stable, so entries with equal keys keep their post-filter order in
/// both directions.
pub fn compute_filtered(services: &[ServiceEntry], filter: &FilterSpec) -> Vec<ServiceEntry> {
    // whitespace-only means no search; a real search matches verbatim
    let needle = if filter.search.trim().is_empty() {
        String::new()
    } else {
        filter.search.to_lowercase()
    };

    let mut result: Vec<ServiceEntry> = services
        .iter()
        .filter(|entry| filter.category.is_none_or(|category| entry.category == category))
        .filter(|entry| needle.is_empty() || matches_search(entry, &needle))
        .cloned()
        .collect();

    if let Some(field) = filter.sort_by {
        result.sort_by(|a, b| {
            let ordering = locale_compare(field.key(a), field.key(b));
            match filter.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    result
}

/// Holds the filter state for one caller over a shared catalog.
///
/// `filter.category` and `active_category` are only changed together, so
/// a pinned category is always reflected in the filter. Not internally
/// synchronised: callers on several threads must serialise mutations.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Arc<Catalog>,
    filter: FilterSpec,
    active_category: Option<ServiceCategory>,
    cache: OnceCell<Vec<ServiceEntry>>,
}

impl QueryEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            filter: FilterSpec::default(),
            active_category: None,
            cache: OnceCell::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn services(&self) -> &[ServiceEntry] {
        self.catalog.services()
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn active_category(&self) -> Option<ServiceCategory> {
        self.active_category
    }

    pub fn categories(&self) -> &'static [ServiceCategory] {
        &ServiceCategory::ALL
    }

    pub fn set_filter(&mut self, update: FilterUpdate) {
        self.filter.merge(update);
        self.invalidate();
        tracing::debug!(filter = ?self.filter, "filter updated");
    }

    pub fn clear_filter(&mut self) {
        self.filter = FilterSpec::default();
        self.active_category = None;
        self.invalidate();
        tracing::debug!("filter cleared");
    }

    pub fn set_active_category(&mut self, category: Option<ServiceCategory>) {
        self.active_category = category;
        self.filter.category = category;
        self.invalidate();
        tracing::debug!(category = ?category, "active category set");
    }

    pub fn service_by_id(&self, id: &str) -> Option<&ServiceEntry> {
        self.catalog.get_by_id(id)
    }

    pub fn services_by_category(&self, category: ServiceCategory) -> Vec<ServiceEntry> {
        self.catalog.by_category(category)
    }

    /// Result of the current filter, recomputed only after a mutation.
    pub fn filtered(&self) -> &[ServiceEntry] {
        self.cache.get_or_init(|| {
            let result = compute_filtered(self.catalog.services(), &self.filter);
            tracing::trace!(
                matched = result.len(),
                total = self.catalog.len(),
                "recomputed filtered services"
            );
            result
        })
    }

    fn invalidate(&mut self) {
        self.cache.take();
    }
}
