//! Case-insensitive name search over the whole dataset.

use crate::dataset::Dataset;
use crate::hero::Hero;

impl Dataset {
    /// Returns every hero whose name contains `query`, ignoring case.
    ///
    /// Searches the full catalog, not a single page, and keeps catalog
    /// order. An empty query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Hero> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.heroes()
            .iter()
            .filter(|hero| hero.name_contains_lowercase(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{dataset, hero};
    use proptest::prelude::*;

    fn builtin() -> Dataset {
        match Dataset::builtin() {
            Ok(d) => d,
            Err(e) => panic!("builtin catalog must partition: {e}"),
        }
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(builtin().search("").is_empty());
    }

    #[test]
    fn partial_name_matches_single_hero() {
        let ds = builtin();
        let found = ds.search("sas");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Sasuke");
    }

    #[test]
    fn search_ignores_case() {
        let ds = builtin();
        let upper: Vec<_> = ds.search("NARUTO").iter().map(|h| h.id).collect();
        let lower: Vec<_> = ds.search("naruto").iter().map(|h| h.id).collect();
        assert_eq!(upper, lower);
        assert!(!upper.is_empty(), "Naruto must be in the catalog");
    }

    #[test]
    fn unknown_name_yields_empty_result() {
        assert!(builtin().search("unknown").is_empty());
    }

    #[test]
    fn matches_span_pages_in_catalog_order() {
        let ds = match Dataset::partitioned(
            vec![
                hero(1, "Alpha"),
                hero(2, "Beta"),
                hero(3, "alphabet"),
                hero(4, "Gamma"),
            ],
            2,
        ) {
            Ok(d) => d,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let ids: Vec<u32> = ds.search("ALPHA").iter().map(|h| h.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    proptest! {
        #[test]
        fn results_are_an_ordered_subset_of_matches(query in "[a-zA-Z0-9-]{0,4}") {
            let ds = dataset(20, 4);
            let found = ds.search(&query);
            let expected: Vec<&Hero> = if query.is_empty() {
                Vec::new()
            } else {
                ds.heroes()
                    .iter()
                    .filter(|h| h.name.to_lowercase().contains(&query.to_lowercase()))
                    .collect()
            };
            prop_assert_eq!(found, expected);
        }
    }
}
