//! Fuzz target for module documentation decoding and analysis.
//!
//! Goal: decoding and analysis should **never panic** on any input.
//! Unknown shapes must surface as `Malformed` lookups or analysis errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_docs_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use typeleak_domain::model::DocLookup;
use typeleak_domain::policy::AnalysisOptions;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let DocLookup::Found(entries) = typeleak_repo::parse_module_docs("fuzz", text) {
        let _ = typeleak_domain::analyze_module("fuzz", &entries, AnalysisOptions::default());
        let _ = typeleak_domain::analyze_module(
            "fuzz",
            &entries,
            AnalysisOptions {
                audit_parameters: true,
                recurse_type_arguments: true,
            },
        );
    }
});
