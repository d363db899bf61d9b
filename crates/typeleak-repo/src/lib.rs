//! Repository adapters: discover module documentation files and load them.
//!
//! This crate is allowed to do filesystem IO. It never fails on a single bad file;
//! per-module problems become `DocLookup` outcomes for the engine to report.

#![forbid(unsafe_code)]

mod discover;
mod load;

use anyhow::Context;
use camino::Utf8Path;
use rayon::prelude::*;
use typeleak_domain::model::{DocLookup, DocsModel, ModuleInput};
use typeleak_types::DocsPath;

pub use discover::{DOCS_SUFFIX, ModuleSelection, ModuleSource, discover_modules, select_modules};
pub use load::{load_docs, parse_module_docs};

/// Build the in-memory model the engine evaluates.
///
/// Selected modules are read in parallel; the result keeps discovery order, followed by
/// explicitly requested modules that have no documentation file (as `Unavailable`).
pub fn build_docs_model(
    docs_root: &Utf8Path,
    selection: &ModuleSelection,
) -> anyhow::Result<DocsModel> {
    let discovered = discover_modules(docs_root).context("discover module documentation")?;
    let (selected, missing) =
        select_modules(discovered, selection).context("select modules")?;

    tracing::debug!(
        docs_root = %docs_root,
        selected = selected.len(),
        missing = missing.len(),
        "module documentation discovered"
    );

    let mut modules: Vec<ModuleInput> = selected
        .par_iter()
        .map(|source| {
            let abs = docs_root.join(source.path.as_str());
            ModuleInput {
                module: source.module.clone(),
                path: source.path.clone(),
                docs: load_docs(&source.module, &abs),
            }
        })
        .collect();

    for module in missing {
        tracing::debug!(module = module.as_str(), "requested module has no documentation file");
        modules.push(ModuleInput {
            path: DocsPath::new(format!("{module}{DOCS_SUFFIX}")),
            module,
            docs: DocLookup::Unavailable,
        });
    }

    Ok(DocsModel {
        docs_root: DocsPath::from(docs_root),
        modules,
    })
}
