//! Region resolver: query precedence and best-match selection.
//!
//! Search flow:  exact code → exact name (case-insensitive) → normalized substring scan
//! Resolve:      search, then prefer an exact normalized-name or code hit among candidates

use super::catalog::RegionCatalog;
use super::normalize::normalize;
use super::types::{CatalogError, MatchRule, Region};
use std::sync::Arc;

/// Candidates for a query together with the rule that produced them.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    pub rule: MatchRule,
    pub regions: Vec<&'a Region>,
}

/// Resolves free-text or partial-code queries against a shared catalog.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    catalog: Arc<RegionCatalog>,
}

impl RegionResolver {
    pub fn new(catalog: Arc<RegionCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolver over the built-in SCB dataset.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(Arc::new(RegionCatalog::builtin()?)))
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// Every region matching `query`, in catalog declaration order.
    pub fn search(&self, query: &str) -> Vec<&Region> {
        self.search_detailed(query).regions
    }

    /// Like [`search`](Self::search), also reporting which rule fired.
    pub fn search_detailed(&self, query: &str) -> SearchResult<'_> {
        // 1. Exact code, case-sensitive and untrimmed
        if let Some(region) = self.catalog.get_by_code(query) {
            tracing::debug!(query, code = %region.code, "exact code match");
            return SearchResult { rule: MatchRule::Code, regions: vec![region] };
        }

        // 2. Exact name, case-insensitive
        if let Some(region) = self.catalog.get_by_exact_name(query) {
            tracing::debug!(query, code = %region.code, "exact name match");
            return SearchResult { rule: MatchRule::Name, regions: vec![region] };
        }

        // 3. Substring containment either way on normalized names, or on the raw code
        let q = normalize(query);
        let regions: Vec<&Region> = self
            .catalog
            .all()
            .iter()
            .filter(|region| {
                let name = normalize(&region.name);
                name.contains(&q) || q.contains(&name) || region.code.contains(query)
            })
            .collect();

        tracing::debug!(query, normalized = %q, candidates = regions.len(), "fuzzy scan");
        SearchResult { rule: MatchRule::Fuzzy, regions }
    }

    /// The single best region for `query`, or `None` when nothing matches.
    pub fn resolve(&self, query: &str) -> Option<&Region> {
        self.resolve_detailed(query).map(|(region, _)| region)
    }

    /// Like [`resolve`](Self::resolve), also reporting which rule fired.
    pub fn resolve_detailed(&self, query: &str) -> Option<(&Region, MatchRule)> {
        let SearchResult { rule, regions } = self.search_detailed(query);
        let q = normalize(query);

        let best = regions
            .iter()
            .find(|r| normalize(&r.name) == q || r.code == query)
            .or_else(|| regions.first())
            .copied();

        match best {
            Some(region) => {
                tracing::debug!(query, code = %region.code, %rule, "resolved");
                Some((region, rule))
            }
            None => {
                tracing::debug!(query, "no region matched");
                None
            }
        }
    }
}
