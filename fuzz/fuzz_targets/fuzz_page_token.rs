//! Fuzz target: page-token resolution against the built-in catalog.
//!
//! Any UTF-8 token must either resolve to an in-range page with consistent
//! neighbor pointers or fail with one of the two client errors.

#![no_main]

use boruto_core::{CoreError, Dataset};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|token: &str| {
    let Ok(dataset) = Dataset::builtin() else {
        return;
    };
    match dataset.resolve_page(Some(token)) {
        Ok(page) => {
            let current = page.current.get();
            assert!((1..=dataset.page_count()).contains(&current));
            assert_eq!(page.heroes.len(), dataset.page_size());
            assert_eq!(page.prev_page.map(|p| p.get() + 1).unwrap_or(1), current);
        }
        Err(CoreError::InvalidInput | CoreError::NotFound) => {}
        Err(other) => panic!("unexpected error for {token:?}: {other}"),
    }
});
