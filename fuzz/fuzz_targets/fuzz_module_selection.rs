//! Fuzz target for module selection globs.
//!
//! Goal: selection should **never panic**; invalid patterns are errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_module_selection
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typeleak_repo::{DOCS_SUFFIX, ModuleSelection, ModuleSource, select_modules};
use typeleak_types::DocsPath;

#[derive(Arbitrary, Debug)]
struct SelectionInput {
    modules: Vec<String>,
    names: Vec<String>,
    include: Vec<String>,
    exclude: Vec<String>,
}

fuzz_target!(|input: SelectionInput| {
    if input.modules.len() > 100
        || input.names.len() > 20
        || input.include.len() > 20
        || input.exclude.len() > 20
    {
        return;
    }

    let discovered = input
        .modules
        .into_iter()
        .filter(|m| m.len() <= 128)
        .map(|module| ModuleSource {
            path: DocsPath::new(format!("{module}{DOCS_SUFFIX}")),
            module,
        })
        .collect();

    let selection = ModuleSelection {
        names: input.names,
        include: input.include.into_iter().filter(|p| p.len() <= 256).collect(),
        exclude: input.exclude.into_iter().filter(|p| p.len() <= 256).collect(),
    };

    if let Ok((selected, missing)) = select_modules(discovered, &selection) {
        for name in &missing {
            assert!(!selected.iter().any(|m| &m.module == name));
        }
    }
});
