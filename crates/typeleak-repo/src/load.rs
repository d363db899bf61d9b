use camino::Utf8Path;
use typeleak_domain::model::DocLookup;
use typeleak_types::ModuleDocs;

/// Read and decode one documentation file. Never fails: an unreadable or undecodable
/// file is a `Malformed` lookup for that module alone.
pub fn load_docs(module: &str, abs: &Utf8Path) -> DocLookup {
    match std::fs::read_to_string(abs) {
        Ok(text) => parse_module_docs(module, &text),
        Err(err) => {
            tracing::warn!(module, path = %abs, error = %err, "cannot read module documentation");
            DocLookup::Malformed(format!("read {abs}: {err}"))
        }
    }
}

/// Decode the text of a `<module>.docs.json` file.
pub fn parse_module_docs(module: &str, text: &str) -> DocLookup {
    let docs: ModuleDocs = match serde_json::from_str(text) {
        Ok(docs) => docs,
        Err(err) => {
            tracing::warn!(module, error = %err, "malformed module documentation");
            return DocLookup::Malformed(err.to_string());
        }
    };

    if docs.module != module {
        tracing::warn!(
            module,
            declared = docs.module.as_str(),
            "documentation file declares a different module name; using the file name"
        );
    }

    match docs.entries {
        Some(entries) => {
            tracing::debug!(module, entries = entries.len(), "loaded module documentation");
            DocLookup::Found(entries)
        }
        None => {
            tracing::debug!(module, "module publishes no documentation");
            DocLookup::Unavailable
        }
    }
}
