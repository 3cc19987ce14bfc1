//! Fuzz target: name search with arbitrary queries.
//!
//! Search must never panic and must only return heroes whose lowercased
//! name contains the lowercased query.

#![no_main]

use boruto_core::Dataset;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &str| {
    let Ok(dataset) = Dataset::builtin() else {
        return;
    };
    let needle = query.to_lowercase();
    for hero in dataset.search(query) {
        assert!(hero.name.to_lowercase().contains(&needle));
    }
});
