use typeleak_types::{DocEntry, DocsPath, ModuleTypes};

/// Everything the engine needs: one lookup result per selected module, in
/// presentation order.
#[derive(Clone, Debug, Default)]
pub struct DocsModel {
    pub docs_root: DocsPath,
    pub modules: Vec<ModuleInput>,
}

#[derive(Clone, Debug)]
pub struct ModuleInput {
    pub module: String,
    /// Where the documentation came from (or was expected), relative to the docs root.
    pub path: DocsPath,
    pub docs: DocLookup,
}

/// Result of fetching one module's documentation.
#[derive(Clone, Debug, PartialEq)]
pub enum DocLookup {
    Found(Vec<DocEntry>),
    /// The module publishes no documentation. Skipped silently.
    Unavailable,
    /// Documentation exists but could not be decoded.
    Malformed(String),
}

/// Private types of one module: distinct, in first-occurrence order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateTypeReport {
    pub module: String,
    pub types: Vec<String>,
}

impl PrivateTypeReport {
    /// An empty report exists but has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl From<PrivateTypeReport> for ModuleTypes {
    fn from(value: PrivateTypeReport) -> Self {
        ModuleTypes {
            module: value.module,
            types: value.types,
        }
    }
}
